// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Macro that generates the complete throttle implementation.
///
/// This macro eliminates duplication between multi-threaded and
/// single-threaded implementations, which differ only in trait bounds
/// (Send vs not).
macro_rules! define_throttle_impl {
    ($($bounds:tt)*) => {
        use core::time::Duration;
        use std::sync::Arc;

        use parking_lot::{Mutex, MutexGuard};
        use rategate_runtime::handle::TimerHandle;
        use rategate_runtime::runtime::Runtime;
        use rategate_runtime::timer::Timer;

        use crate::logging::{debug, trace};
        use crate::{DefaultRuntime, EdgePolicy};

        struct ThrottleState<A, R, I> {
            timer: Option<TimerHandle>,
            // Bumped whenever the timer is replaced or cancelled; a fire
            // whose captured generation no longer matches is stale.
            generation: u64,
            pending: Option<A>,
            last_call: Option<I>,
            last_result: Option<R>,
        }

        /// Throttled wrapper around a function.
        ///
        /// At most one invocation happens per `window` per enabled edge:
        /// with the default [`EdgePolicy`] the first call of a window runs
        /// immediately and the latest call received inside the window runs
        /// again when it closes.
        ///
        /// One behavior deserves a warning: when a call lands after the
        /// window has elapsed but while the trailing timer is still armed,
        /// the leading edge fires *again* even though the timer will also
        /// fire. Suppressing the re-fire while a trailing timer is armed
        /// would be the cleaner policy; callers that care should disable
        /// one of the two edges.
        ///
        /// Handles are cheap to clone and share one instance state. The
        /// wrapped function must not synchronously call back into its own
        /// gate from a leading invocation; the function mutex is held while
        /// it runs.
        pub struct Throttled<A, R, F, RT = DefaultRuntime>
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
            F: FnMut(A) -> R + $($bounds)* 'static,
            RT: Runtime,
        {
            state: Arc<Mutex<ThrottleState<A, R, RT::Instant>>>,
            func: Arc<Mutex<F>>,
            timer: RT::Timer,
            window: Duration,
            policy: EdgePolicy,
        }

        impl<A, R, F, RT> Throttled<A, R, F, RT>
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
            F: FnMut(A) -> R + $($bounds)* 'static,
            RT: Runtime,
            <RT::Timer as Timer>::Sleep: $($bounds)* 'static,
        {
            /// Throttles `func` to once per `window` on both edges.
            pub fn new(func: F, window: Duration) -> Self {
                Self::with_policy(func, window, EdgePolicy::default())
            }

            pub fn with_policy(func: F, window: Duration, policy: EdgePolicy) -> Self {
                Self {
                    state: Arc::new(Mutex::new(ThrottleState {
                        timer: None,
                        generation: 0,
                        pending: None,
                        last_call: None,
                        last_result: None,
                    })),
                    func: Arc::new(Mutex::new(func)),
                    timer: <RT::Timer as Default>::default(),
                    window,
                    policy,
                }
            }

            /// Requests an invocation. Returns the most recent completed
            /// result, which may be stale relative to a trailing call that
            /// has been scheduled but not fired yet.
            pub fn call(&self, args: A) -> Option<R> {
                let now = self.timer.now();
                let mut state = self.state.lock();

                // Latest arguments win; earlier pending ones are discarded.
                state.pending = Some(args);

                let elapsed = state.last_call.map(|last| now - last);
                let window_open = match elapsed {
                    None => true,
                    Some(elapsed) => elapsed >= self.window,
                };

                if window_open {
                    if state.timer.is_none() {
                        // Leading edge: the window starts now even when the
                        // policy defers the invocation itself.
                        state.last_call = Some(now);
                        if self.policy.leading {
                            trace!("throttle: leading-edge invocation");
                            return self.invoke_latest(state);
                        }
                        if self.policy.trailing {
                            self.arm(&mut state, self.window);
                        }
                        return state.last_result.clone();
                    }

                    // The window elapsed while a trailing timer is still
                    // armed (its fire has not run yet).
                    if self.policy.trailing {
                        if let Some(handle) = state.timer.take() {
                            handle.cancel();
                        }
                        self.arm(&mut state, self.window);
                    }
                    if self.policy.leading {
                        // The leading edge fires again here even though a
                        // trailing timer is armed; see the type-level docs.
                        state.last_call = Some(now);
                        return self.invoke_latest(state);
                    }
                    return state.last_result.clone();
                }

                if state.timer.is_none() && self.policy.trailing {
                    if let Some(elapsed) = elapsed {
                        self.arm(&mut state, self.window - elapsed);
                    }
                }
                state.last_result.clone()
            }

            /// Schedules the trailing edge `delay` from now.
            fn arm(&self, state: &mut ThrottleState<A, R, RT::Instant>, delay: Duration) {
                state.generation = state.generation.wrapping_add(1);
                let generation = state.generation;
                let shared_state = Arc::clone(&self.state);
                let shared_func = Arc::clone(&self.func);
                let timer = self.timer.clone();
                let trailing = self.policy.trailing;
                trace!("throttle: trailing timer armed for {:?}", delay);
                let handle = TimerHandle::schedule(&self.timer, delay, move || {
                    let fired_at = timer.now();
                    let mut state = shared_state.lock();
                    if state.generation != generation {
                        return;
                    }
                    state.timer = None;
                    if trailing {
                        if let Some(args) = state.pending.take() {
                            state.last_call = Some(fired_at);
                            // State is cleared before the invocation, so a
                            // panicking function cannot leave a phantom
                            // timer behind.
                            drop(state);
                            let mut func = shared_func.lock();
                            let result = (*func)(args);
                            drop(func);
                            shared_state.lock().last_result = Some(result);
                            return;
                        }
                    }
                    state.pending = None;
                });
                state.timer = Some(handle);
            }

            /// Invokes the wrapped function with the pending arguments and
            /// stores the result.
            fn invoke_latest(
                &self,
                mut state: MutexGuard<'_, ThrottleState<A, R, RT::Instant>>,
            ) -> Option<R> {
                let Some(args) = state.pending.take() else {
                    return state.last_result.clone();
                };
                drop(state);
                let mut func = self.func.lock();
                let result = (*func)(args);
                drop(func);
                let mut state = self.state.lock();
                state.last_result = Some(result.clone());
                Some(result)
            }

            /// Drops the outstanding timer and the pending record, and
            /// resets the window so the next call opens a fresh one. The
            /// stored result is left untouched. Idempotent.
            pub fn cancel(&self) {
                let mut state = self.state.lock();
                if let Some(handle) = state.timer.take() {
                    handle.cancel();
                    state.generation = state.generation.wrapping_add(1);
                }
                state.last_call = None;
                state.pending = None;
                debug!("throttle: window reset");
            }

            /// True while a trailing-edge timer is outstanding.
            pub fn is_pending(&self) -> bool {
                self.state.lock().timer.is_some()
            }

            pub fn window(&self) -> Duration {
                self.window
            }

            pub fn policy(&self) -> EdgePolicy {
                self.policy
            }
        }

        impl<A, R, F, RT> Clone for Throttled<A, R, F, RT>
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
            F: FnMut(A) -> R + $($bounds)* 'static,
            RT: Runtime,
        {
            fn clone(&self) -> Self {
                Self {
                    state: Arc::clone(&self.state),
                    func: Arc::clone(&self.func),
                    timer: self.timer.clone(),
                    window: self.window,
                    policy: self.policy,
                }
            }
        }

        /// Wraps `func` in a both-edges throttle gate on the default
        /// runtime.
        pub fn throttle<A, R, F>(func: F, window: Duration) -> Throttled<A, R, F>
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
            F: FnMut(A) -> R + $($bounds)* 'static,
        {
            Throttled::new(func, window)
        }

        /// Wraps `func` in a throttle gate with an explicit edge policy on
        /// the default runtime.
        pub fn throttle_with<A, R, F>(
            func: F,
            window: Duration,
            policy: EdgePolicy,
        ) -> Throttled<A, R, F>
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
            F: FnMut(A) -> R + $($bounds)* 'static,
        {
            Throttled::with_policy(func, window, policy)
        }

        /// Extension trait providing `throttle` directly on function values.
        pub trait ThrottleExt<A, R>: FnMut(A) -> R + Sized + $($bounds)* 'static
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
        {
            /// Throttles `self` to once per `window` on both edges.
            fn throttle(self, window: Duration) -> Throttled<A, R, Self> {
                Throttled::new(self, window)
            }

            /// Throttles `self` with an explicit edge policy.
            fn throttle_with(self, window: Duration, policy: EdgePolicy) -> Throttled<A, R, Self> {
                Throttled::with_policy(self, window, policy)
            }
        }

        impl<A, R, F> ThrottleExt<A, R> for F
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
            F: FnMut(A) -> R + $($bounds)* 'static,
        {
        }
    };
}
