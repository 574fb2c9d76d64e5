// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Which edges of a throttle window may invoke the wrapped function.
///
/// The default enables both: the first call of a window runs immediately
/// (leading edge) and the latest call received during the window runs when
/// it closes (trailing edge). Disabling both produces a gate that never
/// invokes at all, which mirrors what the option combination means: there
/// is no edge left to fire on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgePolicy {
    /// Invoke immediately when a window opens.
    pub leading: bool,
    /// Invoke with the latest pending arguments when the window closes.
    pub trailing: bool,
}

impl Default for EdgePolicy {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

impl EdgePolicy {
    /// Leading edge only: invoke at window open, drop everything after.
    pub fn leading_only() -> Self {
        Self {
            leading: true,
            trailing: false,
        }
    }

    /// Trailing edge only: defer every invocation to window close.
    pub fn trailing_only() -> Self {
        Self {
            leading: false,
            trailing: true,
        }
    }
}
