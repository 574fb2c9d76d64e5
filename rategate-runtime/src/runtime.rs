// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

use crate::timer::Timer;

/// Marker type tying a [`Timer`] to its `Instant`.
///
/// Gate types are generic over a `Runtime` so the same state machine can be
/// instantiated per runtime without repeating the instant arithmetic bounds
/// at every use site.
pub trait Runtime: 'static {
    type Timer: Timer<Instant = Self::Instant>;

    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>
        + 'static;
}
