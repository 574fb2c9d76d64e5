// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use rategate::{throttle, throttle_with, EdgePolicy, Throttled};
use rategate_test_utils::clock::{advance_ms, settle};
use rategate_test_utils::manual::{ManualRuntime, ManualTimer};
use rategate_test_utils::recording_fn;
use tokio::time::pause;

#[tokio::test]
async fn default_policy_invokes_on_both_edges() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (log, func) = recording_fn::<u32>();
    let gate = throttle(func, Duration::from_millis(1000));

    // Act: a burst at t=0, one more call mid-window.
    gate.call(1);
    gate.call(2);
    gate.call(3);
    assert_eq!(log.count(), 1);
    assert_eq!(log.last(), Some(1));

    advance_ms(500).await;
    gate.call(4);
    assert_eq!(log.count(), 1);

    advance_ms(500).await;

    // Assert: the trailing edge ran once with the latest arguments.
    assert_eq!(log.count(), 2);
    assert_eq!(log.last(), Some(4));
    Ok(())
}

#[tokio::test]
async fn trailing_edge_uses_only_the_latest_arguments() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (log, func) = recording_fn::<u32>();
    let gate = throttle(func, Duration::from_millis(1000));

    // Act
    gate.call(1);
    gate.call(2);
    gate.call(3);
    advance_ms(1000).await;

    // Assert
    assert_eq!(log.calls(), vec![1, 3]);
    Ok(())
}

#[tokio::test]
async fn window_reopens_after_a_trailing_fire() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (log, func) = recording_fn::<u32>();
    let gate = throttle(func, Duration::from_millis(1000));

    gate.call(1);
    gate.call(2);
    advance_ms(1000).await;
    assert_eq!(log.count(), 2);

    // Act: the trailing fire opened a new window; a call one full window
    // later is a leading edge again.
    advance_ms(1000).await;
    gate.call(3);

    // Assert
    assert_eq!(log.count(), 3);
    assert_eq!(log.last(), Some(3));
    Ok(())
}

#[tokio::test]
async fn leading_disabled_defers_to_the_window_close() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (log, func) = recording_fn::<u32>();
    let gate = throttle_with(func, Duration::from_millis(1000), EdgePolicy::trailing_only());

    // Act
    gate.call(1);
    assert_eq!(log.count(), 0);

    advance_ms(999).await;
    assert_eq!(log.count(), 0);

    advance_ms(1).await;

    // Assert
    assert_eq!(log.count(), 1);
    assert_eq!(log.last(), Some(1));
    Ok(())
}

#[tokio::test]
async fn trailing_disabled_drops_calls_inside_the_window() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (log, func) = recording_fn::<u32>();
    let gate = throttle_with(func, Duration::from_millis(1000), EdgePolicy::leading_only());

    // Act
    gate.call(1);
    assert_eq!(log.count(), 1);
    gate.call(2);
    gate.call(3);
    assert_eq!(log.count(), 1);

    advance_ms(1000).await;

    // Assert: nothing fired at the window close.
    assert_eq!(log.count(), 1);

    // A call in the reopened window is a fresh leading edge.
    gate.call(4);
    assert_eq!(log.count(), 2);
    assert_eq!(log.calls(), vec![1, 4]);
    Ok(())
}

#[tokio::test]
async fn disabling_both_edges_never_invokes() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (log, func) = recording_fn::<u32>();
    let gate = throttle_with(
        func,
        Duration::from_millis(1000),
        EdgePolicy {
            leading: false,
            trailing: false,
        },
    );
    assert_eq!(gate.window(), Duration::from_millis(1000));
    assert_eq!(
        gate.policy(),
        EdgePolicy {
            leading: false,
            trailing: false
        }
    );

    // Act
    gate.call(1);
    advance_ms(1000).await;
    gate.call(2);
    advance_ms(1000).await;

    // Assert
    assert_eq!(log.count(), 0);
    Ok(())
}

#[tokio::test]
async fn cancel_discards_the_pending_trailing_call() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (log, func) = recording_fn::<u32>();
    let gate = throttle(func, Duration::from_millis(1000));

    gate.call(1);
    gate.call(2);
    assert!(gate.is_pending());

    // Act
    gate.cancel();
    assert!(!gate.is_pending());
    advance_ms(2000).await;

    // Assert
    assert_eq!(log.count(), 1);

    // The next call is treated as a fresh window start.
    gate.call(3);
    assert_eq!(log.count(), 2);
    assert_eq!(log.last(), Some(3));
    Ok(())
}

#[tokio::test]
async fn cancel_is_idempotent() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (log, func) = recording_fn::<u32>();
    let gate = throttle(func, Duration::from_millis(1000));

    gate.call(1);
    gate.call(2);

    // Act
    gate.cancel();
    gate.cancel();
    advance_ms(2000).await;

    // Assert
    assert_eq!(log.count(), 1);
    Ok(())
}

#[tokio::test]
async fn cancel_at_the_window_boundary_wins_over_the_timer() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (log, func) = recording_fn::<u32>();
    let gate = throttle(func, Duration::from_millis(1000));

    gate.call(1);
    gate.call(2);

    // Act: deschedule one tick before the trailing deadline.
    advance_ms(999).await;
    gate.cancel();
    advance_ms(1).await;
    settle().await;

    // Assert
    assert_eq!(log.count(), 1);
    Ok(())
}

#[tokio::test]
async fn returns_the_cached_result_between_invocations() -> anyhow::Result<()> {
    // Arrange
    pause();
    let gate = throttle(|n: i32| n * 2, Duration::from_millis(1000));

    // Act & Assert
    assert_eq!(gate.call(1), Some(2));
    // Inside the window the result is stale by design.
    assert_eq!(gate.call(10), Some(2));

    advance_ms(1000).await;

    // The trailing fire stored 20; this call only schedules.
    assert_eq!(gate.call(100), Some(20));
    Ok(())
}

#[tokio::test]
async fn leading_refires_while_the_trailing_timer_is_armed() -> anyhow::Result<()> {
    // The manual timer lets the clock pass the window boundary without
    // giving the armed timer task a chance to run, which is exactly the
    // ordering that triggers the documented double-invocation behavior.

    // Arrange
    let timer = ManualTimer::default();
    let (log, func) = recording_fn::<u32>();
    let gate =
        Throttled::<u32, usize, _, ManualRuntime>::new(func, Duration::from_millis(1000));

    gate.call(1);
    gate.call(2);
    assert_eq!(log.count(), 1);
    assert!(gate.is_pending());

    // Act: the window elapses, but the trailing fire has not run yet.
    timer.advance(Duration::from_millis(1000));
    gate.call(3);

    // Assert: the leading edge ran again immediately.
    assert_eq!(log.count(), 2);
    assert_eq!(log.calls(), vec![1, 3]);

    // The descheduled timer never fires; the rescheduled one finds no
    // pending record (the re-fire consumed it) and invokes nothing.
    settle().await;
    assert_eq!(log.count(), 2);
    timer.advance(Duration::from_millis(1000));
    settle().await;
    assert_eq!(log.count(), 2);
    assert!(!gate.is_pending());
    Ok(())
}

#[tokio::test]
async fn cloned_handles_share_one_window() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (log, func) = recording_fn::<u32>();
    let gate = throttle(func, Duration::from_millis(1000));
    let clone = gate.clone();

    // Act
    gate.call(1);
    let worker = tokio::spawn(async move {
        clone.call(2);
    });
    worker.await?;
    settle().await;

    // Assert: the clone's call landed inside the shared window.
    assert_eq!(log.count(), 1);
    advance_ms(1000).await;
    assert_eq!(log.count(), 2);
    assert_eq!(log.last(), Some(2));
    Ok(())
}
