// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Macro that generates the complete debounce implementation.
///
/// This macro eliminates duplication between multi-threaded and
/// single-threaded implementations, which differ only in trait bounds
/// (Send vs not).
macro_rules! define_debounce_impl {
    ($($bounds:tt)*) => {
        use core::time::Duration;
        use std::sync::Arc;

        use parking_lot::Mutex;
        use rategate_runtime::handle::TimerHandle;
        use rategate_runtime::runtime::Runtime;
        use rategate_runtime::timer::Timer;

        use crate::logging::{debug, trace};
        use crate::DefaultRuntime;

        struct DebounceState<A, R> {
            timer: Option<TimerHandle>,
            // Bumped whenever the timer is replaced or cancelled; a fire
            // whose captured generation no longer matches is stale.
            generation: u64,
            pending: Option<A>,
            last_result: Option<R>,
        }

        /// Debounced wrapper around a function.
        ///
        /// Calls are suppressed until a quiet period of `window` elapses,
        /// then the wrapped function runs once with the arguments of the
        /// last call in the burst. In immediate mode the first call of a
        /// burst runs synchronously instead, and the quiet period only
        /// decides when the next burst may start.
        ///
        /// Handles are cheap to clone and share one instance state. The
        /// wrapped function must not synchronously call back into its own
        /// gate from a leading invocation; the function mutex is held while
        /// it runs.
        pub struct Debounced<A, R, F, RT = DefaultRuntime>
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
            F: FnMut(A) -> R + $($bounds)* 'static,
            RT: Runtime,
        {
            state: Arc<Mutex<DebounceState<A, R>>>,
            func: Arc<Mutex<F>>,
            timer: RT::Timer,
            window: Duration,
            immediate: bool,
        }

        impl<A, R, F, RT> Debounced<A, R, F, RT>
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
            F: FnMut(A) -> R + $($bounds)* 'static,
            RT: Runtime,
            <RT::Timer as Timer>::Sleep: $($bounds)* 'static,
        {
            /// Trailing-edge gate: `func` runs `window` after the last call
            /// of a burst.
            pub fn new(func: F, window: Duration) -> Self {
                Self::with_mode(func, window, false)
            }

            /// Immediate gate: the first call of a burst runs `func`
            /// synchronously; later calls only extend the burst.
            pub fn immediate(func: F, window: Duration) -> Self {
                Self::with_mode(func, window, true)
            }

            fn with_mode(func: F, window: Duration, immediate: bool) -> Self {
                Self {
                    state: Arc::new(Mutex::new(DebounceState {
                        timer: None,
                        generation: 0,
                        pending: None,
                        last_result: None,
                    })),
                    func: Arc::new(Mutex::new(func)),
                    timer: <RT::Timer as Default>::default(),
                    window,
                    immediate,
                }
            }

            /// Requests an invocation. Returns the most recent completed
            /// result, or `None` before any invocation has completed.
            pub fn call(&self, args: A) -> Option<R> {
                let mut state = self.state.lock();

                let had_timer = match state.timer.take() {
                    Some(handle) => {
                        handle.cancel();
                        true
                    }
                    None => false,
                };
                state.generation = state.generation.wrapping_add(1);
                let generation = state.generation;

                let call_now = self.immediate && !had_timer;
                let leading_args = if call_now {
                    Some(args)
                } else if self.immediate {
                    // Burst continuation: the timer below only re-opens the
                    // gate, so these arguments are never used.
                    None
                } else {
                    state.pending = Some(args);
                    None
                };

                let shared_state = Arc::clone(&self.state);
                let shared_func = Arc::clone(&self.func);
                let invoke_on_fire = !self.immediate;
                trace!("debounce: quiet-period timer armed for {:?}", self.window);
                let handle = TimerHandle::schedule(&self.timer, self.window, move || {
                    let mut state = shared_state.lock();
                    if state.generation != generation {
                        return;
                    }
                    state.timer = None;
                    if !invoke_on_fire {
                        return;
                    }
                    let Some(args) = state.pending.take() else {
                        return;
                    };
                    // State is cleared before the invocation, so a panicking
                    // function cannot leave a phantom timer behind.
                    drop(state);
                    let mut func = shared_func.lock();
                    let result = (*func)(args);
                    drop(func);
                    shared_state.lock().last_result = Some(result);
                });
                state.timer = Some(handle);

                match leading_args {
                    Some(args) => {
                        drop(state);
                        let mut func = self.func.lock();
                        let result = (*func)(args);
                        drop(func);
                        let mut state = self.state.lock();
                        state.last_result = Some(result.clone());
                        Some(result)
                    }
                    None => state.last_result.clone(),
                }
            }

            /// Drops the outstanding timer, if any. The stored result is
            /// left untouched. Idempotent.
            pub fn cancel(&self) {
                let mut state = self.state.lock();
                if let Some(handle) = state.timer.take() {
                    handle.cancel();
                    state.generation = state.generation.wrapping_add(1);
                    state.pending = None;
                    debug!("debounce: pending invocation cancelled");
                }
            }

            /// True while a quiet-period timer is outstanding.
            pub fn is_pending(&self) -> bool {
                self.state.lock().timer.is_some()
            }

            pub fn window(&self) -> Duration {
                self.window
            }
        }

        impl<A, R, F, RT> Clone for Debounced<A, R, F, RT>
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
                    immediate: self.immediate,
                }
            }
        }

        /// Wraps `func` in a trailing-edge debounce gate on the default
        /// runtime.
        pub fn debounce<A, R, F>(func: F, window: Duration) -> Debounced<A, R, F>
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
            F: FnMut(A) -> R + $($bounds)* 'static,
        {
            Debounced::new(func, window)
        }

        /// Wraps `func` in an immediate (leading-edge) debounce gate on the
        /// default runtime.
        pub fn debounce_immediate<A, R, F>(func: F, window: Duration) -> Debounced<A, R, F>
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
            F: FnMut(A) -> R + $($bounds)* 'static,
        {
            Debounced::immediate(func, window)
        }

        /// Extension trait providing `debounce` directly on function values.
        pub trait DebounceExt<A, R>: FnMut(A) -> R + Sized + $($bounds)* 'static
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
        {
            /// Debounces `self` by `window` (trailing edge).
            fn debounce(self, window: Duration) -> Debounced<A, R, Self> {
                Debounced::new(self, window)
            }

            /// Debounces `self` by `window`, invoking on the leading edge of
            /// each burst.
            fn debounce_immediate(self, window: Duration) -> Debounced<A, R, Self> {
                Debounced::immediate(self, window)
            }
        }

        impl<A, R, F> DebounceExt<A, R> for F
        where
            A: $($bounds)* 'static,
            R: Clone + $($bounds)* 'static,
            F: FnMut(A) -> R + $($bounds)* 'static,
        {
        }
    };
}
