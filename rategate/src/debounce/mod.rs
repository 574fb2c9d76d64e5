// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce gate for functions.
//!
//! A debounced function postpones the wrapped invocation until a quiet
//! period of at least `window` has passed since the last call:
//! - Each call (re)arms the quiet-period timer.
//! - When the timer expires, the wrapped function runs once with the
//!   arguments of the last call in the burst.
//! - In immediate mode the first call of a burst runs synchronously
//!   instead, and the timer expiry only marks the burst as over.
//! - `cancel()` drops the armed timer; the burst never fires.
//!
//! # Example
//!
//! ```rust,no_run
//! use rategate::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let search = (|query: String| query.len()).debounce(Duration::from_millis(300));
//!
//! // Typing "ab" quickly only ever searches for "ab", 300ms after the
//! // second keystroke.
//! search.call("a".to_string());
//! search.call("ab".to_string());
//! # }
//! ```

#[cfg(any(
    all(
        not(target_arch = "wasm32"),
        any(feature = "runtime-tokio", feature = "runtime-smol")
    ),
    all(target_arch = "wasm32", feature = "runtime-wasm")
))]
#[macro_use]
mod implementation;

#[cfg(all(
    not(target_arch = "wasm32"),
    any(feature = "runtime-tokio", feature = "runtime-smol")
))]
mod multi_threaded;

#[cfg(all(
    not(target_arch = "wasm32"),
    any(feature = "runtime-tokio", feature = "runtime-smol")
))]
pub use multi_threaded::{debounce, debounce_immediate, Debounced, DebounceExt};

#[cfg(all(target_arch = "wasm32", feature = "runtime-wasm"))]
mod single_threaded;

#[cfg(all(target_arch = "wasm32", feature = "runtime-wasm"))]
pub use single_threaded::{debounce, debounce_immediate, Debounced, DebounceExt};
