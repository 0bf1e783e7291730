// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

//! Invalid access handling.
//!
//! Reading the absent value of a [`Maybe`](crate::Maybe) or the inactive side of
//! an [`Either`](crate::Either) through a panicking accessor ends up in a
//! single failure point. What happens next is decided at compile time by the
//! `strict-access` feature:
//!
//! - enabled: [`AccessPolicy::Recoverable`]. The failure unwinds with the
//!   error message as its payload, and [`recover`] turns it back into an
//!   [`AccessError`].
//! - disabled: [`AccessPolicy::Assert`]. The failure is a fatal assertion
//!   carrying the error message.
//!
//! Recovery needs unwinding. Under a `panic = "abort"` profile, such as the
//! workspace's `maxperf`, the recoverable policy aborts like the assert one.
//!
//! Every container also offers `try_*` accessors that return
//! `Result<_, AccessError>` and never reach this module's failure path.

use std::panic::{self, UnwindSafe};

use crate::logger::error;

/// Whether strict (recoverable) access checking was selected at build time.
pub const STRICT_ACCESS: bool = cfg!(feature = "strict-access");

/// An attempt to read a value that the container does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum AccessError {
    /// A [`Maybe`](crate::Maybe) was read while disengaged.
    #[error("no value stored")]
    NoValue,
    /// The left side of an [`Either`](crate::Either) was read while it holds a right value.
    #[error("value stored on right side of either")]
    StoredOnRight,
    /// The right side of an [`Either`](crate::Either) was read while it holds a left value.
    #[error("value stored on left side of either")]
    StoredOnLeft,
}

impl AccessError {
    const ALL: [AccessError; 3] = [
        AccessError::NoValue,
        AccessError::StoredOnRight,
        AccessError::StoredOnLeft,
    ];

    /// Parses the message an [`AccessError`] displays as.
    #[must_use]
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|err| err.to_string() == message)
    }
}

/// How an invalid access is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessPolicy {
    /// Unwind with the error message, which [`recover`] can catch.
    Recoverable,
    /// Treat the access as a broken invariant and abort the current thread.
    Assert,
}

impl AccessPolicy {
    /// A short, stable name for the policy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AccessPolicy::Recoverable => "recoverable",
            AccessPolicy::Assert => "assert",
        }
    }
}

/// Returns the access policy that matches the compile-time option.
#[inline]
#[must_use]
pub const fn policy() -> AccessPolicy {
    if STRICT_ACCESS {
        AccessPolicy::Recoverable
    } else {
        AccessPolicy::Assert
    }
}

/// Reports an invalid access according to [`policy`]. Never returns.
///
/// This is the only place where either container fails an access.
#[cold]
#[track_caller]
pub(crate) fn invalid_access(err: AccessError) -> ! {
    error!("invalid access ({} policy): {err}", policy().name());
    // both policies unwind with the message; they differ in what `recover` does
    panic!("{err}")
}

/// Runs `f`, converting an invalid access raised under the recoverable policy
/// into an `Err`.
///
/// Panics that are not invalid accesses, and invalid accesses raised under the
/// assert policy, keep unwinding.
///
/// # Errors
///
/// Returns the [`AccessError`] that interrupted `f`.
pub fn recover<F, R>(f: F) -> Result<R, AccessError>
where
    F: FnOnce() -> R + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let message = payload
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| payload.downcast_ref::<&str>().copied());
            match message.and_then(AccessError::from_message) {
                Some(err) if policy() == AccessPolicy::Recoverable => Err(err),
                _ => panic::resume_unwind(payload),
            }
        }
    }
}
