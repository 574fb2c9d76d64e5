// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use crate::{runtime::Runtime, timer::Timer};

pub struct SmolRuntime;

impl Runtime for SmolRuntime {
    type Timer = SmolTimer;
    type Instant = std::time::Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SmolTimer;

/// `async_io::Timer` resolves to the instant it fired at; the gates only
/// want `()`.
pub struct SmolSleep {
    timer: async_io::Timer,
}

impl core::future::Future for SmolSleep {
    type Output = ();

    fn poll(
        mut self: core::pin::Pin<&mut Self>,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Self::Output> {
        core::pin::Pin::new(&mut self.timer).poll(cx).map(|_| ())
    }
}

impl Timer for SmolTimer {
    type Sleep = SmolSleep;

    type Instant = std::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        SmolSleep {
            timer: async_io::Timer::after(duration),
        }
    }

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }
}
