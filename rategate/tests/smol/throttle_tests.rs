// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use rategate::throttle;
use rategate_test_utils::recording_fn;

#[test]
fn throttle_fires_both_edges_under_smol() {
    smol::block_on(async {
        // Arrange
        let (log, func) = recording_fn::<u32>();
        let gate = throttle(func, Duration::from_millis(50));

        // Act: leading edge now, trailing edge at window close.
        gate.call(1);
        gate.call(2);
        assert_eq!(log.count(), 1);

        smol::Timer::after(Duration::from_millis(150)).await;

        // Assert
        assert_eq!(log.count(), 2);
        assert_eq!(log.calls(), vec![1, 2]);
    });
}
