// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Recording test doubles for wrapped functions.

use std::sync::Arc;

use parking_lot::Mutex;

/// Shared record of every invocation a gate performed.
///
/// Clones observe the same underlying log, so one half can live inside the
/// wrapped closure while the test keeps the other.
#[derive(Debug)]
pub struct CallLog<A> {
    calls: Arc<Mutex<Vec<A>>>,
}

impl<A> Clone for CallLog<A> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<A> Default for CallLog<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> CallLog<A> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends one invocation and returns the invocation count so far.
    pub fn record(&self, args: A) -> usize {
        let mut calls = self.calls.lock();
        calls.push(args);
        calls.len()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn last(&self) -> Option<A>
    where
        A: Clone,
    {
        self.calls.lock().last().cloned()
    }

    pub fn calls(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.calls.lock().clone()
    }
}

/// A wrapped-function double: records every call, returns the running
/// invocation count.
pub fn recording_fn<A: Send + 'static>() -> (CallLog<A>, impl FnMut(A) -> usize + Send + 'static) {
    let log = CallLog::new();
    let sink = log.clone();
    (log, move |args: A| sink.record(args))
}
