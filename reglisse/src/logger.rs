// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

// The crate logs two things: every invalid access at `error` just before the
// access policy unwinds, and payload drops from `Maybe::reset` at `trace`.
// Both compile out unless the `logger` feature is enabled.

#[cfg(feature = "logger")]
pub use log::{debug, error, info, trace, warn};

/// Returns true if the trace log level is enabled
#[cfg(feature = "logger")]
#[must_use]
pub fn trace_enabled() -> bool {
    log::log_enabled!(log::Level::Trace)
}

#[cfg(not(feature = "logger"))]
pub use noop_logger::{debug, error, info, trace, trace_enabled, warn};

#[cfg(not(feature = "logger"))]
mod noop_logger {
    #[macro_export]
    /// A noop logger, when the logger feature is disabled
    macro_rules! reglisse_noop_log {
        ($($arg:tt)+) => {
            if $crate::logger::trace_enabled() {
                // Never taken: `trace_enabled` is always false here. The branch
                // keeps the arguments "used" so callers don't trip lints.
                let _ = format!($($arg)+);
            }
        };
    }

    pub use reglisse_noop_log as debug;
    pub use reglisse_noop_log as error;
    pub use reglisse_noop_log as info;
    pub use reglisse_noop_log as trace;
    pub use reglisse_noop_log as warn;

    /// `trace_enabled` for a noop logger is always false
    #[inline]
    #[must_use]
    pub const fn trace_enabled() -> bool {
        false
    }
}
