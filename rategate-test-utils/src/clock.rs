// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Helpers around tokio's paused test clock.
//!
//! Gate timers run on spawned tasks, so after moving the clock a test must
//! yield long enough for woken tasks to run before asserting. `advance_ms`
//! bundles the two steps; call `pause()` (or use `start_paused = true`)
//! before the first gate call.

use std::time::Duration;

/// Advances the paused clock by `ms` and lets woken timer tasks run.
pub async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle().await;
}

/// Yields until previously woken tasks on the current-thread runtime have
/// run.
pub async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}
