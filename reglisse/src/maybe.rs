// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};

use crate::access::{AccessError, invalid_access};
use crate::logger::trace;

/// The "no value" token.
///
/// `Nothing` converts into an empty [`Maybe`] of any payload type and compares
/// equal to every empty one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nothing;

/// Zero or one value of type `T`, stored inline.
///
/// A `Maybe` is *engaged* when it holds a value and *disengaged* otherwise.
/// Accessors come in two flavours: borrowing ones ([`Maybe::value`],
/// [`Maybe::map_ref`], ...) which leave the container untouched, and consuming
/// ones ([`Maybe::into_value`], [`Maybe::map`], ...) which move the payload
/// out.
///
/// ```
/// use reglisse::{Maybe, make_maybe};
///
/// assert_eq!(make_maybe(5).map(|x| x * 2).value_or(0), 10);
/// assert_eq!(Maybe::<i32>::default().map(|x| x * 2).value_or(0), 0);
/// ```
#[derive(Clone)]
#[must_use = "a maybe should never be discarded"]
pub struct Maybe<T> {
    slot: Option<T>,
}

/// Wraps `value` in an engaged [`Maybe`].
pub const fn make_maybe<T>(value: T) -> Maybe<T> {
    Maybe::new(value)
}

impl<T> Maybe<T> {
    /// Creates an engaged `Maybe` holding `value`.
    pub const fn new(value: T) -> Self {
        Self { slot: Some(value) }
    }

    /// Creates a disengaged `Maybe`.
    pub const fn none() -> Self {
        Self { slot: None }
    }

    /// Returns true if a value is stored.
    #[inline]
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns true if no value is stored.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.slot.is_none()
    }

    /// Borrows the stored value.
    ///
    /// # Panics
    ///
    /// Reports [`AccessError::NoValue`] through the access policy if the
    /// `Maybe` is disengaged.
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.slot {
            Some(value) => value,
            None => invalid_access(AccessError::NoValue),
        }
    }

    /// Mutably borrows the stored value.
    ///
    /// # Panics
    ///
    /// Reports [`AccessError::NoValue`] through the access policy if the
    /// `Maybe` is disengaged.
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.slot {
            Some(value) => value,
            None => invalid_access(AccessError::NoValue),
        }
    }

    /// Consumes the `Maybe` and returns the stored value.
    ///
    /// # Panics
    ///
    /// Reports [`AccessError::NoValue`] through the access policy if the
    /// `Maybe` is disengaged.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.slot {
            Some(value) => value,
            None => invalid_access(AccessError::NoValue),
        }
    }

    /// Borrows the stored value.
    ///
    /// # Errors
    ///
    /// [`AccessError::NoValue`] if the `Maybe` is disengaged.
    pub const fn try_value(&self) -> Result<&T, AccessError> {
        match &self.slot {
            Some(value) => Ok(value),
            None => Err(AccessError::NoValue),
        }
    }

    /// Mutably borrows the stored value.
    ///
    /// # Errors
    ///
    /// [`AccessError::NoValue`] if the `Maybe` is disengaged.
    pub fn try_value_mut(&mut self) -> Result<&mut T, AccessError> {
        self.slot.as_mut().ok_or(AccessError::NoValue)
    }

    /// Consumes the `Maybe` and returns the stored value.
    ///
    /// # Errors
    ///
    /// [`AccessError::NoValue`] if the `Maybe` is disengaged.
    pub fn try_into_value(self) -> Result<T, AccessError> {
        self.slot.ok_or(AccessError::NoValue)
    }

    /// Returns the stored value, or `default` converted into `T`.
    pub fn value_or(self, default: impl Into<T>) -> T {
        match self.slot {
            Some(value) => value,
            None => default.into(),
        }
    }

    /// Returns a copy of the stored value, or `default` converted into `T`.
    pub fn value_or_cloned(&self, default: impl Into<T>) -> T
    where
        T: Clone,
    {
        match &self.slot {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Drops the stored value, if any. Calling it on an empty `Maybe` does nothing.
    pub fn reset(&mut self) {
        if self.slot.take().is_some() {
            trace!("maybe reset: payload dropped");
        }
    }

    /// Moves the value into a new `Maybe`, leaving `self` disengaged.
    pub const fn take(&mut self) -> Maybe<T> {
        Maybe {
            slot: self.slot.take(),
        }
    }

    /// Stores `value`, dropping any previous payload first, and returns a
    /// mutable reference to it.
    pub fn insert(&mut self, value: T) -> &mut T {
        self.reset();
        self.slot.insert(value)
    }

    /// Stores `value` and returns the previous contents.
    pub const fn replace(&mut self, value: T) -> Maybe<T> {
        Maybe {
            slot: self.slot.replace(value),
        }
    }

    /// Exchanges the state and payload of two `Maybe`s.
    ///
    /// Handles every combination: both engaged swaps the values, exactly one
    /// engaged moves its value across, neither engaged leaves both empty.
    pub const fn swap(&mut self, other: &mut Maybe<T>) {
        std::mem::swap(&mut self.slot, &mut other.slot);
    }

    /// Borrows the payload as a `Maybe<&T>`.
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            slot: self.slot.as_ref(),
        }
    }

    /// Mutably borrows the payload as a `Maybe<&mut T>`.
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        Maybe {
            slot: self.slot.as_mut(),
        }
    }

    /// Applies `fun` to the stored value, if any, wrapping the result.
    ///
    /// `fun` is not called when the `Maybe` is disengaged.
    pub fn map<U, F>(self, fun: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe {
            slot: self.slot.map(fun),
        }
    }

    /// Applies `fun` to a reference to the stored value, if any.
    ///
    /// `fun` is not called when the `Maybe` is disengaged.
    pub fn map_ref<U, F>(&self, fun: F) -> Maybe<U>
    where
        F: FnOnce(&T) -> U,
    {
        Maybe {
            slot: self.slot.as_ref().map(fun),
        }
    }

    /// Same as [`Maybe::map`].
    pub fn transform<U, F>(self, fun: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(fun)
    }

    /// Same as [`Maybe::map_ref`].
    pub fn transform_ref<U, F>(&self, fun: F) -> Maybe<U>
    where
        F: FnOnce(&T) -> U,
    {
        self.map_ref(fun)
    }

    /// Chains a computation that itself may produce no value.
    pub fn and_then<U, F>(self, fun: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.slot {
            Some(value) => fun(value),
            None => Maybe::none(),
        }
    }

    /// Borrowing form of [`Maybe::and_then`].
    pub fn and_then_ref<U, F>(&self, fun: F) -> Maybe<U>
    where
        F: FnOnce(&T) -> Maybe<U>,
    {
        match &self.slot {
            Some(value) => fun(value),
            None => Maybe::none(),
        }
    }

    /// Returns `self` if engaged, otherwise the `Maybe` produced by `fun`.
    pub fn or_else<F>(self, fun: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        if self.has_value() { self } else { fun() }
    }

    /// Borrowing form of [`Maybe::or_else`]; copies the stored value.
    pub fn or_else_ref<F>(&self, fun: F) -> Maybe<T>
    where
        T: Clone,
        F: FnOnce() -> Maybe<T>,
    {
        if self.has_value() { self.clone() } else { fun() }
    }

    /// Applies `fun` to the stored value, or returns `default` when disengaged.
    pub fn map_or<U, F>(self, default: U, fun: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self.slot {
            Some(value) => fun(value),
            None => default,
        }
    }

    /// Borrowing form of [`Maybe::map_or`].
    pub fn map_or_ref<U, F>(&self, default: U, fun: F) -> U
    where
        F: FnOnce(&T) -> U,
    {
        match &self.slot {
            Some(value) => fun(value),
            None => default,
        }
    }

    /// Same as [`Maybe::map_or`].
    pub fn transform_or<U, F>(self, default: U, fun: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.map_or(default, fun)
    }

    /// Applies `fun` to the stored value, or calls `default` when disengaged.
    ///
    /// Exactly one of the two functions is invoked.
    pub fn map_or_else<U, D, F>(self, default: D, fun: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self.slot {
            Some(value) => fun(value),
            None => default(),
        }
    }

    /// Borrowing form of [`Maybe::map_or_else`].
    pub fn map_or_else_ref<U, D, F>(&self, default: D, fun: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(&T) -> U,
    {
        match &self.slot {
            Some(value) => fun(value),
            None => default(),
        }
    }

    /// Returns true if engaged with a value equal to `value`.
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.slot.as_ref().is_some_and(|stored| stored == value)
    }

    /// Compares against a bare value. A disengaged `Maybe` sorts first.
    pub fn partial_cmp_value<U>(&self, value: &U) -> Option<Ordering>
    where
        T: PartialOrd<U>,
    {
        match &self.slot {
            Some(stored) => stored.partial_cmp(value),
            None => Some(Ordering::Less),
        }
    }

    /// Converts into the standard library option.
    pub fn into_option(self) -> Option<T> {
        self.slot
    }
}

impl<T: Clone> Maybe<&T> {
    /// Copies the borrowed payload into an owned `Maybe`.
    pub fn cloned(self) -> Maybe<T> {
        Maybe {
            slot: self.slot.cloned(),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Nothing> for Maybe<T> {
    fn from(_: Nothing) -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(slot: Option<T>) -> Self {
        Self { slot }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.slot
    }
}

impl<T> From<&Maybe<T>> for bool {
    fn from(maybe: &Maybe<T>) -> Self {
        maybe.has_value()
    }
}

impl<T: Debug> Debug for Maybe<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => f.debug_tuple("Maybe").field(value).finish(),
            None => f.write_str("Nothing"),
        }
    }
}

impl<T, U> PartialEq<Maybe<U>> for Maybe<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Maybe<U>) -> bool {
        match (&self.slot, &other.slot) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.hash(state);
    }
}

impl<T> PartialEq<Nothing> for Maybe<T> {
    fn eq(&self, _: &Nothing) -> bool {
        self.is_none()
    }
}

impl<T> PartialEq<Maybe<T>> for Nothing {
    fn eq(&self, other: &Maybe<T>) -> bool {
        other.is_none()
    }
}

impl<T, U> PartialOrd<Maybe<U>> for Maybe<T>
where
    T: PartialOrd<U>,
{
    fn partial_cmp(&self, other: &Maybe<U>) -> Option<Ordering> {
        match (&self.slot, &other.slot) {
            (Some(lhs), Some(rhs)) => lhs.partial_cmp(rhs),
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (None, None) => Some(Ordering::Equal),
        }
    }
}

impl<T: Ord> Ord for Maybe<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.slot, &other.slot) {
            (Some(lhs), Some(rhs)) => lhs.cmp(rhs),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T> PartialOrd<Nothing> for Maybe<T> {
    fn partial_cmp(&self, _: &Nothing) -> Option<Ordering> {
        Some(if self.has_value() {
            Ordering::Greater
        } else {
            Ordering::Equal
        })
    }
}

impl<T> PartialOrd<Maybe<T>> for Nothing {
    fn partial_cmp(&self, other: &Maybe<T>) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::SeededRng;
    use test_case::test_case;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct NoDefault {
        id: u32,
    }

    #[test]
    fn test_empty_has_no_value() {
        let by_default = Maybe::<NoDefault>::default();
        let from_nothing: Maybe<NoDefault> = Nothing.into();

        assert!(!by_default.has_value());
        assert!(!from_nothing.has_value());
        assert!(by_default.is_none());
        assert!(!bool::from(&from_nothing));
        assert_eq!(by_default.try_value(), Err(AccessError::NoValue));
    }

    #[test_case(0)]
    #[test_case(-17)]
    #[test_case(i64::MAX)]
    fn test_engaged_holds_value(value: i64) {
        let maybe = Maybe::new(value);
        assert!(maybe.has_value());
        assert!(bool::from(&maybe));
        assert_eq!(*maybe.value(), value);
        assert_eq!(maybe.try_into_value(), Ok(value));
    }

    #[test]
    fn test_value_mut_updates_payload() {
        let mut maybe = make_maybe(NoDefault { id: 1 });
        maybe.value_mut().id = 2;
        assert_eq!(maybe.value().id, 2);
        maybe.try_value_mut().unwrap().id = 3;
        assert_eq!(maybe.into_value(), NoDefault { id: 3 });
    }

    #[cfg(not(feature = "strict-access"))]
    #[test]
    #[should_panic(expected = "no value stored")]
    fn test_value_on_empty_asserts() {
        let maybe = Maybe::<u8>::none();
        let _ = maybe.value();
    }

    #[cfg(feature = "strict-access")]
    #[test]
    fn test_value_on_empty_is_recoverable() {
        let maybe = Maybe::<u8>::none();
        assert_eq!(
            crate::recover(|| *maybe.value()),
            Err(AccessError::NoValue)
        );
        assert_eq!(
            crate::recover(|| maybe.clone().into_value()),
            Err(AccessError::NoValue)
        );
    }

    #[test]
    fn test_value_or() {
        let empty = Maybe::<String>::none();
        let full = make_maybe(String::from("stored"));

        assert_eq!(empty.value_or_cloned("default"), "default");
        assert_eq!(full.value_or_cloned("default"), "stored");
        assert_eq!(empty.value_or("default"), "default");
        assert_eq!(full.value_or("default"), "stored");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut maybe = make_maybe(vec![1, 2, 3]);
        maybe.reset();
        assert!(!maybe.has_value());
        maybe.reset();
        assert!(!maybe.has_value());
        assert_eq!(maybe, Nothing);
    }

    #[test]
    fn test_take_insert_replace() {
        let mut maybe = make_maybe(1);
        let taken = maybe.take();
        assert_eq!(taken, make_maybe(1));
        assert!(maybe.is_none());

        *maybe.insert(5) += 1;
        assert_eq!(maybe, make_maybe(6));

        let previous = maybe.replace(9);
        assert_eq!(previous, make_maybe(6));
        assert_eq!(maybe, make_maybe(9));
    }

    #[test]
    fn test_insert_drops_previous_payload() {
        struct Counted<'a>(&'a Cell<u32>);
        impl Drop for Counted<'_> {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Cell::new(0);
        let mut maybe = make_maybe(Counted(&drops));
        maybe.insert(Counted(&drops));
        assert_eq!(drops.get(), 1);
        maybe.reset();
        assert_eq!(drops.get(), 2);
        maybe.reset();
        assert_eq!(drops.get(), 2);
    }

    #[test_case(Some(1), Some(2))]
    #[test_case(Some(1), None)]
    #[test_case(None, Some(2))]
    #[test_case(None, None)]
    fn test_swap_round_trip(lhs: Option<i32>, rhs: Option<i32>) {
        let mut a = Maybe::from(lhs);
        let mut b = Maybe::from(rhs);

        a.swap(&mut b);
        assert_eq!(a, Maybe::from(rhs));
        assert_eq!(b, Maybe::from(lhs));

        a.swap(&mut b);
        assert_eq!(a, Maybe::from(lhs));
        assert_eq!(b, Maybe::from(rhs));
    }

    #[test]
    fn test_map_skips_function_on_empty() {
        let calls = Cell::new(0);
        let count = |x: i32| {
            calls.set(calls.get() + 1);
            x.to_string()
        };

        let mapped: Maybe<String> = Maybe::<i32>::none().map(count);
        assert_eq!(mapped, Nothing);
        let mapped: Maybe<String> = Maybe::<i32>::none().map_ref(|x| count(*x));
        assert_eq!(mapped, Nothing);
        assert_eq!(calls.get(), 0);

        assert_eq!(make_maybe(4).map(count), make_maybe(String::from("4")));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_composes() {
        let f = |x: i32| x + 3;
        let g = |x: i32| x * 7;
        let rng = SeededRng::from_env_or_random();

        for _ in 0..64 {
            let value = rng.random_range(-1000..1000);
            let maybe = make_maybe(value);
            assert_eq!(maybe.clone().map(f).map(g), maybe.map(|x| g(f(x))));
        }
        assert_eq!(
            Maybe::<i32>::none().map(f).map(g),
            Maybe::<i32>::none().map(|x| g(f(x)))
        );
    }

    #[test]
    fn test_map_ref_leaves_source_untouched() {
        let maybe = make_maybe(String::from("abc"));
        let lengths = maybe.map_ref(String::len);
        assert_eq!(lengths, make_maybe(3));
        assert_eq!(maybe.value(), "abc");
        assert_eq!(maybe.transform_ref(|s| s.to_uppercase()).into_value(), "ABC");
        assert_eq!(maybe.transform(|s| s + "d").into_value(), "abcd");
    }

    #[test]
    fn test_and_then() {
        let half = |x: u32| {
            if x % 2 == 0 {
                make_maybe(x / 2)
            } else {
                Maybe::none()
            }
        };

        assert_eq!(make_maybe(8).and_then(half).and_then(half), make_maybe(2));
        assert_eq!(make_maybe(6).and_then(half).and_then(half), Nothing);
        assert_eq!(Maybe::none().and_then(half), Nothing);
        assert_eq!(make_maybe(4).and_then_ref(|x| half(*x)), make_maybe(2));
    }

    #[test]
    fn test_or_else() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            make_maybe(-1)
        };

        assert_eq!(make_maybe(3).or_else(fallback), make_maybe(3));
        assert_eq!(make_maybe(3).or_else_ref(fallback), make_maybe(3));
        assert_eq!(calls.get(), 0);
        assert_eq!(Maybe::none().or_else(fallback), make_maybe(-1));
        assert_eq!(Maybe::none().or_else_ref(fallback), make_maybe(-1));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_map_or_and_map_or_else() {
        assert_eq!(make_maybe(2).map_or(0, |x| x * 10), 20);
        assert_eq!(Maybe::<i32>::none().map_or(0, |x| x * 10), 0);
        assert_eq!(make_maybe(2).transform_or(0, |x| x + 1), 3);
        assert_eq!(make_maybe("ab").map_or_ref(0, |s| s.len()), 2);

        let defaults = Cell::new(0);
        let default = || {
            defaults.set(defaults.get() + 1);
            usize::MAX
        };
        assert_eq!(make_maybe("abc").map_or_else(default, str::len), 3);
        assert_eq!(make_maybe("abc").map_or_else_ref(default, |s| s.len()), 3);
        assert_eq!(defaults.get(), 0);
        assert_eq!(Maybe::<&str>::none().map_or_else(default, str::len), usize::MAX);
        assert_eq!(defaults.get(), 1);
    }

    #[test]
    fn test_equality() {
        assert_eq!(Maybe::<i32>::none(), Nothing);
        assert_eq!(Nothing, Maybe::<i32>::none());
        assert_ne!(make_maybe(1), Nothing);
        assert_ne!(Nothing, make_maybe(1));
        assert_eq!(make_maybe(1), make_maybe(1));
        assert_ne!(make_maybe(1), make_maybe(2));
        assert_ne!(make_maybe(1), Maybe::<i32>::none());
        assert_eq!(make_maybe(String::from("a")), make_maybe("a"));

        assert!(make_maybe(1).contains(&1));
        assert!(!make_maybe(1).contains(&2));
        assert!(!Maybe::<i32>::none().contains(&1));
    }

    #[test]
    fn test_ordering() {
        let rng = SeededRng::from_env_or_random();
        for _ in 0..64 {
            let value: i32 = rng.random();
            assert!(Maybe::<i32>::none() < make_maybe(value));
            assert!(make_maybe(value) > Nothing);
            assert!(Nothing < make_maybe(value));
            assert_eq!(
                make_maybe(value).cmp(&make_maybe(value.wrapping_add(1))),
                value.cmp(&value.wrapping_add(1))
            );
            assert_eq!(
                Maybe::<i32>::none().partial_cmp_value(&value),
                Some(Ordering::Less)
            );
            assert_eq!(
                make_maybe(value).partial_cmp_value(&value),
                Some(Ordering::Equal)
            );
        }
        assert_eq!(
            Maybe::<i32>::none().partial_cmp(&Nothing),
            Some(Ordering::Equal)
        );

        let mut sorted = vec![make_maybe(3), Maybe::none(), make_maybe(1)];
        sorted.sort();
        assert_eq!(sorted, vec![Maybe::none(), make_maybe(1), make_maybe(3)]);
    }

    #[test]
    fn test_views_and_conversions() {
        let mut maybe = make_maybe(vec![1]);
        maybe.as_mut().into_value().push(2);
        assert_eq!(maybe.as_ref().cloned(), make_maybe(vec![1, 2]));
        assert_eq!(maybe.into_option(), Some(vec![1, 2]));
        assert_eq!(Maybe::from(None::<u8>).into_option(), None);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", make_maybe(1)), "Maybe(1)");
        assert_eq!(format!("{:?}", Maybe::<u8>::none()), "Nothing");
    }
}
