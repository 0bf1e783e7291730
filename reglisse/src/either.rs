// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use std::hash::{Hash, Hasher};

use crate::access::{AccessError, invalid_access};
use crate::maybe::Maybe;

/// Marks a value as the left alternative of an [`Either`].
#[derive(Debug, Clone, Copy)]
pub struct Left<T>(T);

/// Marks a value as the right alternative of an [`Either`].
#[derive(Debug, Clone, Copy)]
pub struct Right<T>(T);

/// Wraps `value` so that it becomes the left alternative of an [`Either`].
pub const fn left<T>(value: T) -> Left<T> {
    Left(value)
}

/// Wraps `value` so that it becomes the right alternative of an [`Either`].
pub const fn right<T>(value: T) -> Right<T> {
    Right(value)
}

// Left and Right only differ by the side they mark.
macro_rules! side_wrapper {
    ($side:ident, $other:ident) => {
        impl<T> $side<T> {
            /// Wraps `value`.
            pub const fn new(value: T) -> Self {
                Self(value)
            }

            /// Borrows the wrapped value.
            pub const fn borrow(&self) -> &T {
                &self.0
            }

            /// Mutably borrows the wrapped value.
            pub const fn borrow_mut(&mut self) -> &mut T {
                &mut self.0
            }

            /// Unwraps the value.
            pub fn take(self) -> T {
                self.0
            }
        }

        impl<T, U> PartialEq<$side<U>> for $side<T>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$side<U>) -> bool {
                self.0 == other.0
            }
        }

        impl<T: Eq> Eq for $side<T> {}

        impl<T: Hash> Hash for $side<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        // Values on different sides never compare equal, even if the values do.
        impl<T, U> PartialEq<$other<U>> for $side<T> {
            fn eq(&self, _: &$other<U>) -> bool {
                false
            }
        }
    };
}

side_wrapper!(Left, Right);
side_wrapper!(Right, Left);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Side<L, R> {
    Left(L),
    Right(R),
}

/// Exactly one of two values: a left `L` or a right `R`.
///
/// An `Either` has no empty state. It is built from a [`Left`] or [`Right`]
/// wrapper and keeps exactly one alternative alive until it is dropped or
/// consumed.
///
/// ```
/// use reglisse::{Either, left};
///
/// let either: Either<i32, String> = left(3).into();
/// assert_eq!(*either.transform_left(|x| x + 1).borrow_left(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an either should never be discarded"]
pub struct Either<L, R> {
    side: Side<L, R>,
}

impl<L, R> Either<L, R> {
    /// Creates a left `Either`.
    pub const fn from_left(value: L) -> Self {
        Self {
            side: Side::Left(value),
        }
    }

    /// Creates a right `Either`.
    pub const fn from_right(value: R) -> Self {
        Self {
            side: Side::Right(value),
        }
    }

    /// Returns true if the left alternative is stored.
    #[inline]
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self.side, Side::Left(_))
    }

    /// Returns true if the right alternative is stored.
    #[inline]
    #[must_use]
    pub const fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Borrows the left value.
    ///
    /// # Panics
    ///
    /// Reports [`AccessError::StoredOnRight`] through the access policy if the
    /// right alternative is stored.
    #[track_caller]
    pub fn borrow_left(&self) -> &L {
        match &self.side {
            Side::Left(value) => value,
            Side::Right(_) => invalid_access(AccessError::StoredOnRight),
        }
    }

    /// Mutably borrows the left value.
    ///
    /// # Panics
    ///
    /// Reports [`AccessError::StoredOnRight`] through the access policy if the
    /// right alternative is stored.
    #[track_caller]
    pub fn borrow_left_mut(&mut self) -> &mut L {
        match &mut self.side {
            Side::Left(value) => value,
            Side::Right(_) => invalid_access(AccessError::StoredOnRight),
        }
    }

    /// Consumes the `Either` and returns the left value.
    ///
    /// # Panics
    ///
    /// Reports [`AccessError::StoredOnRight`] through the access policy if the
    /// right alternative is stored.
    #[track_caller]
    pub fn take_left(self) -> L {
        match self.side {
            Side::Left(value) => value,
            Side::Right(_) => invalid_access(AccessError::StoredOnRight),
        }
    }

    /// Borrows the right value.
    ///
    /// # Panics
    ///
    /// Reports [`AccessError::StoredOnLeft`] through the access policy if the
    /// left alternative is stored.
    #[track_caller]
    pub fn borrow_right(&self) -> &R {
        match &self.side {
            Side::Right(value) => value,
            Side::Left(_) => invalid_access(AccessError::StoredOnLeft),
        }
    }

    /// Mutably borrows the right value.
    ///
    /// # Panics
    ///
    /// Reports [`AccessError::StoredOnLeft`] through the access policy if the
    /// left alternative is stored.
    #[track_caller]
    pub fn borrow_right_mut(&mut self) -> &mut R {
        match &mut self.side {
            Side::Right(value) => value,
            Side::Left(_) => invalid_access(AccessError::StoredOnLeft),
        }
    }

    /// Consumes the `Either` and returns the right value.
    ///
    /// # Panics
    ///
    /// Reports [`AccessError::StoredOnLeft`] through the access policy if the
    /// left alternative is stored.
    #[track_caller]
    pub fn take_right(self) -> R {
        match self.side {
            Side::Right(value) => value,
            Side::Left(_) => invalid_access(AccessError::StoredOnLeft),
        }
    }

    /// Borrows the left value.
    ///
    /// # Errors
    ///
    /// [`AccessError::StoredOnRight`] if the right alternative is stored.
    pub const fn try_borrow_left(&self) -> Result<&L, AccessError> {
        match &self.side {
            Side::Left(value) => Ok(value),
            Side::Right(_) => Err(AccessError::StoredOnRight),
        }
    }

    /// Mutably borrows the left value.
    ///
    /// # Errors
    ///
    /// [`AccessError::StoredOnRight`] if the right alternative is stored.
    pub const fn try_borrow_left_mut(&mut self) -> Result<&mut L, AccessError> {
        match &mut self.side {
            Side::Left(value) => Ok(value),
            Side::Right(_) => Err(AccessError::StoredOnRight),
        }
    }

    /// Consumes the `Either` and returns the left value.
    ///
    /// # Errors
    ///
    /// [`AccessError::StoredOnRight`] if the right alternative is stored. The
    /// right value is dropped.
    pub fn try_take_left(self) -> Result<L, AccessError> {
        match self.side {
            Side::Left(value) => Ok(value),
            Side::Right(_) => Err(AccessError::StoredOnRight),
        }
    }

    /// Borrows the right value.
    ///
    /// # Errors
    ///
    /// [`AccessError::StoredOnLeft`] if the left alternative is stored.
    pub const fn try_borrow_right(&self) -> Result<&R, AccessError> {
        match &self.side {
            Side::Right(value) => Ok(value),
            Side::Left(_) => Err(AccessError::StoredOnLeft),
        }
    }

    /// Mutably borrows the right value.
    ///
    /// # Errors
    ///
    /// [`AccessError::StoredOnLeft`] if the left alternative is stored.
    pub const fn try_borrow_right_mut(&mut self) -> Result<&mut R, AccessError> {
        match &mut self.side {
            Side::Right(value) => Ok(value),
            Side::Left(_) => Err(AccessError::StoredOnLeft),
        }
    }

    /// Consumes the `Either` and returns the right value.
    ///
    /// # Errors
    ///
    /// [`AccessError::StoredOnLeft`] if the left alternative is stored. The
    /// left value is dropped.
    pub fn try_take_right(self) -> Result<R, AccessError> {
        match self.side {
            Side::Right(value) => Ok(value),
            Side::Left(_) => Err(AccessError::StoredOnLeft),
        }
    }

    /// Applies `fun` to the left value. A right value is passed through
    /// untouched and `fun` is not called.
    pub fn transform_left<T, F>(self, fun: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self.side {
            Side::Left(value) => Either::from_left(fun(value)),
            Side::Right(value) => Either::from_right(value),
        }
    }

    /// Applies `fun` to the right value. A left value is passed through
    /// untouched and `fun` is not called.
    pub fn transform_right<T, F>(self, fun: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self.side {
            Side::Left(value) => Either::from_left(value),
            Side::Right(value) => Either::from_right(fun(value)),
        }
    }

    /// Chains a computation on the left value that itself produces an
    /// `Either` with the same right type.
    pub fn flat_transform_left<T, F>(self, fun: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self.side {
            Side::Left(value) => fun(value),
            Side::Right(value) => Either::from_right(value),
        }
    }

    /// Chains a computation on the right value that itself produces an
    /// `Either` with the same left type.
    pub fn flat_transform_right<T, F>(self, fun: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self.side {
            Side::Left(value) => Either::from_left(value),
            Side::Right(value) => fun(value),
        }
    }

    /// Borrows both alternatives as an `Either<&L, &R>`.
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match &self.side {
            Side::Left(value) => Either::from_left(value),
            Side::Right(value) => Either::from_right(value),
        }
    }

    /// Mutably borrows both alternatives as an `Either<&mut L, &mut R>`.
    pub const fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match &mut self.side {
            Side::Left(value) => Either::from_left(value),
            Side::Right(value) => Either::from_right(value),
        }
    }

    /// Projects the left value into a [`Maybe`].
    pub fn left(self) -> Maybe<L> {
        match self.side {
            Side::Left(value) => Maybe::new(value),
            Side::Right(_) => Maybe::none(),
        }
    }

    /// Projects the right value into a [`Maybe`].
    pub fn right(self) -> Maybe<R> {
        match self.side {
            Side::Left(_) => Maybe::none(),
            Side::Right(value) => Maybe::new(value),
        }
    }

    /// Returns the left value, or `default` if the right one is stored.
    pub fn left_or(self, default: L) -> L {
        match self.side {
            Side::Left(value) => value,
            Side::Right(_) => default,
        }
    }

    /// Returns the right value, or `default` if the left one is stored.
    pub fn right_or(self, default: R) -> R {
        match self.side {
            Side::Left(_) => default,
            Side::Right(value) => value,
        }
    }

    /// Collapses either alternative into a single value.
    pub fn fold<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self.side {
            Side::Left(value) => on_left(value),
            Side::Right(value) => on_right(value),
        }
    }

    /// Swaps the sides: a left value becomes a right one and vice versa.
    pub fn flip(self) -> Either<R, L> {
        match self.side {
            Side::Left(value) => Either::from_right(value),
            Side::Right(value) => Either::from_left(value),
        }
    }
}

impl<L, R> From<Left<L>> for Either<L, R> {
    fn from(value: Left<L>) -> Self {
        Self::from_left(value.take())
    }
}

impl<L, R> From<Right<R>> for Either<L, R> {
    fn from(value: Right<R>) -> Self {
        Self::from_right(value.take())
    }
}
