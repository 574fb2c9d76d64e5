// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Call-rate gates: debounce and throttle for plain functions.
//!
//! Both gates wrap a `FnMut(A) -> R` and decide, per call, whether the
//! wrapped function actually runs now, runs later with the latest
//! arguments, or does not run at all:
//!
//! - **[`Debounced`]** - suppresses invocation until a quiet period of
//!   `window` has elapsed since the last call; an `immediate` variant runs
//!   the first call of a burst synchronously instead.
//! - **[`Throttled`]** - caps invocation to once per `window`, with a
//!   configurable [`EdgePolicy`] (leading and/or trailing edge).
//!
//! Every gate handle exposes `call(args) -> Option<R>` (returning the most
//! recent completed result) and an idempotent `cancel()`. Handles are
//! `Clone` and share the same instance state, so one gate can be wired to
//! several event sources. Each instance owns at most one outstanding timer.
//!
//! # Runtime Support
//!
//! Enable runtime-specific features in your `Cargo.toml`:
//! - `runtime-tokio` (default) - Tokio timers and task spawning
//! - `runtime-smol` - smol runtime via `async-io` timers
//! - `runtime-wasm` - WebAssembly via `gloo-timers`
//!
//! # Example
//!
//! ```rust,no_run
//! use rategate::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Persist at most once per 300ms quiet period, with the last value.
//!     let save = (|draft: String| draft.len()).debounce(Duration::from_millis(300));
//!     save.call("h".to_string());
//!     save.call("hello".to_string());
//!
//!     // Repaint at most once a second, on both window edges.
//!     let repaint = (|frame: u64| frame).throttle(Duration::from_secs(1));
//!     repaint.call(1);
//!     repaint.call(2);
//!
//!     // Both gates can drop their pending work.
//!     save.cancel();
//!     repaint.cancel();
//! }
//! ```

mod debounce;
mod edge_policy;
mod logging;
mod throttle;

pub mod prelude;

pub use edge_policy::EdgePolicy;

#[cfg(any(
    all(
        not(target_arch = "wasm32"),
        any(feature = "runtime-tokio", feature = "runtime-smol")
    ),
    all(target_arch = "wasm32", feature = "runtime-wasm")
))]
pub use debounce::{debounce, debounce_immediate, Debounced, DebounceExt};

#[cfg(any(
    all(
        not(target_arch = "wasm32"),
        any(feature = "runtime-tokio", feature = "runtime-smol")
    ),
    all(target_arch = "wasm32", feature = "runtime-wasm")
))]
pub use throttle::{throttle, throttle_with, Throttled, ThrottleExt};

/// Runtime the gate constructors and extension traits bind to. Tokio wins
/// when several runtime features are enabled at once.
#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub type DefaultRuntime = rategate_runtime::impls::tokio::TokioRuntime;

#[cfg(all(
    feature = "runtime-smol",
    not(feature = "runtime-tokio"),
    not(target_arch = "wasm32")
))]
pub type DefaultRuntime = rategate_runtime::impls::smol::SmolRuntime;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub type DefaultRuntime = rategate_runtime::impls::wasm::WasmRuntime;
