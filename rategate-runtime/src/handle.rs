// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-shot scheduled callback with explicit cancellation.
//!
//! [`TimerHandle::schedule`] spawns one background task that races the
//! runtime's sleep against a [`CancellationToken`]; the callback runs only
//! when the sleep wins. This is the entire collaborator surface the gates
//! need from an event loop: "run this after N time units, unless cancelled".

use core::time::Duration;

use futures::future::{select, Either};
use futures::pin_mut;

use crate::cancel::CancellationToken;
use crate::timer::Timer;

/// Handle to one scheduled single-shot delayed callback.
///
/// Dropping the handle does NOT deschedule the callback; cancellation is
/// explicit via [`cancel`](TimerHandle::cancel). The owner is expected to
/// hold at most one live handle per controlled resource and to make a late
/// fire inert on its own side (the callback may already be executing on
/// another worker thread when `cancel` is called).
#[derive(Debug)]
pub struct TimerHandle {
    cancel: CancellationToken,
}

impl TimerHandle {
    /// Schedules `on_fire` to run once, `delay` from now.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn schedule<T, F>(timer: &T, delay: Duration, on_fire: F) -> Self
    where
        T: Timer,
        T::Sleep: Send + 'static,
        F: FnOnce() + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let sleep = timer.sleep_future(delay);

        let _future = async move {
            let cancelled = token.cancelled();
            pin_mut!(sleep);
            pin_mut!(cancelled);
            if let Either::Left(((), _)) = select(sleep, cancelled).await {
                if !token.is_cancelled() {
                    on_fire();
                }
            }
        };

        #[cfg(feature = "runtime-tokio")]
        tokio::spawn(_future);

        #[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
        smol::spawn(_future).detach();

        Self { cancel }
    }

    /// Schedules `on_fire` to run once, `delay` from now (WASM flavor: the
    /// target is single-threaded, so no `Send` bounds apply).
    #[cfg(target_arch = "wasm32")]
    pub fn schedule<T, F>(timer: &T, delay: Duration, on_fire: F) -> Self
    where
        T: Timer,
        T::Sleep: 'static,
        F: FnOnce() + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let sleep = timer.sleep_future(delay);

        let _future = async move {
            let cancelled = token.cancelled();
            pin_mut!(sleep);
            pin_mut!(cancelled);
            if let Either::Left(((), _)) = select(sleep, cancelled).await {
                if !token.is_cancelled() {
                    on_fire();
                }
            }
        };

        #[cfg(feature = "runtime-wasm")]
        wasm_bindgen_futures::spawn_local(_future);

        Self { cancel }
    }

    /// Deschedules the callback. Idempotent; a no-op once the callback has
    /// fired.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}
