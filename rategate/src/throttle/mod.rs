// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle gate for functions.
//!
//! A throttled function runs at most once per `window` per enabled edge:
//! - **Leading edge**: the first call after the window reopens runs
//!   immediately.
//! - **Trailing edge**: the latest call received inside the window runs
//!   when it closes, with the most recent arguments.
//! - Calls that trigger neither edge return the cached result of the last
//!   completed invocation.
//! - `cancel()` discards the armed trailing timer and resets the window,
//!   so the next call opens a fresh one.
//!
//! Which edges are enabled is an [`EdgePolicy`](crate::EdgePolicy); the
//! default enables both.
//!
//! # Example
//!
//! ```rust,no_run
//! use rategate::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let scroll = (|offset: i64| offset).throttle(Duration::from_millis(100));
//!
//! scroll.call(10); // runs immediately (leading edge)
//! scroll.call(25); // deferred: runs at window close with offset 25
//!
//! // Trailing-only variant for, e.g., resize handling:
//! let resize = (|dims: (u32, u32)| dims)
//!     .throttle_with(Duration::from_millis(250), EdgePolicy::trailing_only());
//! resize.call((800, 600));
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
pub use multi_threaded::{throttle, throttle_with, Throttled, ThrottleExt};

#[cfg(all(target_arch = "wasm32", feature = "runtime-wasm"))]
mod single_threaded;

#[cfg(all(target_arch = "wasm32", feature = "runtime-wasm"))]
pub use single_threaded::{throttle, throttle_with, Throttled, ThrottleExt};
