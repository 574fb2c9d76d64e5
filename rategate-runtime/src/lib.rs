// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the rategate call gates.
//!
//! The gates only need two things from an async runtime: a single-shot
//! delayed callback and a clock for interval arithmetic. Both live behind
//! small traits here so the same gate code runs on Tokio, smol and WASM:
//!
//! - **[`timer::Timer`]** - sleep future + `now()` time source
//! - **[`runtime::Runtime`]** - bundles a `Timer` with its `Instant` type
//! - **[`handle::TimerHandle`]** - one cancellable scheduled callback,
//!   backed by a spawned task
//! - **[`cancel::CancellationToken`]** - the descheduling primitive behind
//!   `TimerHandle`
//!
//! Runtime selection is a cargo feature: `runtime-tokio` (default),
//! `runtime-smol`, `runtime-wasm`. When more than one is enabled, Tokio
//! takes precedence for task spawning.

pub mod cancel;
pub mod handle;
pub mod impls;
pub mod runtime;
pub mod timer;
