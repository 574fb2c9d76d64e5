// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the rategate workspace.
//!
//! - [`recorder::CallLog`] / [`recorder::recording_fn`] - a wrapped-function
//!   double that records every invocation and its arguments.
//! - [`clock`] - helpers around tokio's paused test clock.
//! - [`manual`] - a hand-driven [`Timer`](rategate_runtime::timer::Timer)
//!   whose clock only moves when a test says so, for scenarios where the
//!   order of "clock advanced" and "timer task ran" must be controlled
//!   independently.
//!
//! For development and testing only, not for production code.

pub mod manual;
pub mod recorder;

#[cfg(not(target_arch = "wasm32"))]
pub mod clock;

pub use manual::{ManualRuntime, ManualTimer, TestInstant};
pub use recorder::{recording_fn, CallLog};
