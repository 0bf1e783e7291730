// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]
#![deny(unsafe_code)]

//! # reglisse provides the [`Maybe`] and [`Either`] value containers
//!
//! A [`Maybe<T>`] holds zero or one `T`; an [`Either<L, R>`] holds exactly one
//! of an `L` or an `R`. Both store their payload inline and expose the same
//! family of combinators (`map`/`transform`, `and_then`, `or_else`, `map_or`,
//! `map_or_else`, `flat_transform_*`) in a borrowing and a consuming form.
//!
//! Reading a value that is not there is an invalid access. The `try_*`
//! accessors report it as an [`AccessError`]; the panicking accessors hand it
//! to the compile-time [`AccessPolicy`] (see [`access`]).
//!
//! ```
//! use reglisse::{Either, Maybe, Nothing, left, make_maybe};
//!
//! let doubled = make_maybe(21).map(|x| x * 2);
//! assert_eq!(doubled.value_or(0), 42);
//! assert_eq!(Maybe::<i32>::from(Nothing), Nothing);
//!
//! let either: Either<i32, String> = left(1).into();
//! assert!(either.is_left());
//! ```

pub mod access;
mod either;
mod maybe;

/// Logger module for handling logging functionality
pub mod logger;

// re-export these so callers don't need to know where they are
pub use access::{AccessError, AccessPolicy, recover};
pub use either::{Either, Left, Right, left, right};
pub use maybe::{Maybe, Nothing, make_maybe};

#[cfg(any(test, feature = "test_utils"))]
mod test_utils;

#[cfg(any(test, feature = "test_utils"))]
pub use self::test_utils::SeededRng;
