// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic cancellation token.
//!
//! Works on any async runtime (Tokio, smol, WASM); the waiting side is an
//! `event-listener` future, the signalling side an atomic flag.

use core::future::Future;
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use event_listener::Event;

/// Cancellation flag shared between a scheduler and one scheduled task.
///
/// Clones share the same state. `cancel()` is idempotent: calling it twice
/// has the same effect as calling it once.
#[derive(Clone, Debug)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    cancelled: AtomicBool,
    event: Event,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                event: Event::new(),
            }),
        }
    }

    /// Sets the flag and wakes every waiter.
    pub fn cancel(&self) {
        // Release pairs with the Acquire loads in `is_cancelled`/`cancelled`.
        self.inner.cancelled.store(true, Ordering::Release);
        self.inner.event.notify(usize::MAX);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Resolves once `cancel()` has been called (immediately if it already
    /// was). The returned future owns its state, so it outlives the token
    /// handle it was created from.
    pub fn cancelled(&self) -> impl Future<Output = ()> + Send + 'static {
        let inner = Arc::clone(&self.inner);
        async move {
            loop {
                if inner.cancelled.load(Ordering::Acquire) {
                    return;
                }
                let listener = inner.event.listen();
                // Re-check: cancel() may have landed between the load and
                // the listener registration.
                if inner.cancelled.load(Ordering::Acquire) {
                    return;
                }
                listener.await;
            }
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
