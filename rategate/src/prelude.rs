// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used traits and types.
//!
//! Import this module for convenient access to both gates:
//!
//! ```ignore
//! use rategate::prelude::*;
//!
//! let save = save_fn.debounce(Duration::from_millis(300));
//! let paint = paint_fn.throttle_with(Duration::from_millis(100), EdgePolicy::leading_only());
//! ```

pub use crate::EdgePolicy;

#[cfg(any(
    all(
        not(target_arch = "wasm32"),
        any(feature = "runtime-tokio", feature = "runtime-smol")
    ),
    all(target_arch = "wasm32", feature = "runtime-wasm")
))]
pub use crate::{DebounceExt, Debounced, ThrottleExt, Throttled};
