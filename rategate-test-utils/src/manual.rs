// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hand-driven timer for deterministic edge-ordering tests.
//!
//! Unlike the paused tokio clock, advancing a [`ManualTimer`] wakes the
//! sleeping timer tasks but does not yield to them, so a test can observe a
//! gate in the state "window elapsed, timer fire not yet run" - the one
//! ordering a real event loop only produces under load.
//!
//! The clock is process-global (gates construct their timer through
//! `Default`), so tests sharing a binary must not assume an absolute start
//! value; measure relative to `now()` at arrangement time.

use core::future::Future;
use core::ops::{Add, Sub};
use core::pin::Pin;
use core::task::{Context, Poll, Waker};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use parking_lot::Mutex;
use rategate_runtime::runtime::Runtime;
use rategate_runtime::timer::Timer;

#[derive(Debug, Default)]
struct ClockInner {
    now_ms: AtomicU64,
    sleepers: Mutex<Vec<Waker>>,
}

fn global_clock() -> Arc<ClockInner> {
    static CLOCK: OnceLock<Arc<ClockInner>> = OnceLock::new();
    Arc::clone(CLOCK.get_or_init(|| Arc::new(ClockInner::default())))
}

/// Millisecond instant of the manual clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TestInstant(u64);

impl Add<Duration> for TestInstant {
    type Output = TestInstant;

    fn add(self, duration: Duration) -> TestInstant {
        TestInstant(self.0 + duration.as_millis() as u64)
    }
}

impl Sub<TestInstant> for TestInstant {
    type Output = Duration;

    fn sub(self, other: TestInstant) -> Duration {
        Duration::from_millis(self.0.saturating_sub(other.0))
    }
}

/// Timer whose clock only moves via [`advance`](ManualTimer::advance).
#[derive(Clone, Debug)]
pub struct ManualTimer {
    clock: Arc<ClockInner>,
}

impl Default for ManualTimer {
    fn default() -> Self {
        Self {
            clock: global_clock(),
        }
    }
}

impl ManualTimer {
    /// A timer with its own isolated clock. Gates construct their timer
    /// through `Default` and therefore share the global clock; use this
    /// when driving a sleep by hand without going through a gate.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(ClockInner::default()),
        }
    }

    /// Moves the clock forward and wakes every sleeper whose deadline may
    /// have passed. Does not yield: the woken tasks run at the caller's
    /// next await point.
    pub fn advance(&self, duration: Duration) {
        self.clock
            .now_ms
            .fetch_add(duration.as_millis() as u64, Ordering::AcqRel);
        let wakers: Vec<Waker> = self.clock.sleepers.lock().drain(..).collect();
        for waker in wakers {
            waker.wake();
        }
    }
}

pub struct ManualSleep {
    clock: Arc<ClockInner>,
    deadline_ms: u64,
}

impl Future for ManualSleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.clock.now_ms.load(Ordering::Acquire) >= self.deadline_ms {
            return Poll::Ready(());
        }
        self.clock.sleepers.lock().push(cx.waker().clone());
        // Re-check: an advance may have landed while the waker was being
        // registered.
        if self.clock.now_ms.load(Ordering::Acquire) >= self.deadline_ms {
            return Poll::Ready(());
        }
        Poll::Pending
    }
}

impl Timer for ManualTimer {
    type Sleep = ManualSleep;

    type Instant = TestInstant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        ManualSleep {
            clock: Arc::clone(&self.clock),
            deadline_ms: self.clock.now_ms.load(Ordering::Acquire)
                + duration.as_millis() as u64,
        }
    }

    fn now(&self) -> Self::Instant {
        TestInstant(self.clock.now_ms.load(Ordering::Acquire))
    }
}

/// Runtime binding for gates driven by a [`ManualTimer`].
pub struct ManualRuntime;

impl Runtime for ManualRuntime {
    type Timer = ManualTimer;
    type Instant = TestInstant;
}
