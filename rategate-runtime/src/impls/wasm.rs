// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use crate::{runtime::Runtime, timer::Timer};

pub struct WasmRuntime;

impl Runtime for WasmRuntime {
    type Timer = WasmTimer;
    type Instant = WasmInstant;
}

/// Millisecond tick taken from `Date.now()`; good enough for interval
/// arithmetic, which is all the gates do with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WasmInstant(u64);

impl WasmInstant {
    fn now() -> Self {
        WasmInstant(js_sys::Date::now() as u64)
    }
}

impl core::ops::Add<Duration> for WasmInstant {
    type Output = WasmInstant;

    fn add(self, duration: Duration) -> WasmInstant {
        WasmInstant(self.0 + duration.as_millis() as u64)
    }
}

impl core::ops::Sub<WasmInstant> for WasmInstant {
    type Output = Duration;

    fn sub(self, other: WasmInstant) -> Duration {
        Duration::from_millis(self.0.saturating_sub(other.0))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WasmTimer;

impl Timer for WasmTimer {
    type Sleep = gloo_timers::future::TimeoutFuture;

    type Instant = WasmInstant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32)
    }

    fn now(&self) -> Self::Instant {
        WasmInstant::now()
    }
}
