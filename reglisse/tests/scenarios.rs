// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use std::collections::BTreeMap;

use reglisse::{AccessError, Either, Maybe, Nothing, left, make_maybe, right};

#[test]
fn doubles_an_engaged_maybe() {
    assert_eq!(make_maybe(5).map(|x| x * 2).value_or(0), 10);
}

#[test]
fn doubling_an_empty_maybe_falls_back() {
    assert_eq!(Maybe::<i32>::default().map(|x| x * 2).value_or(0), 0);
}

#[test]
fn transforms_the_left_side() {
    let either: Either<i32, String> = left(3).into();
    assert_eq!(*either.transform_left(|x| x + 1).borrow_left(), 4);
}

fn lookup(table: &BTreeMap<&str, u32>, key: &str) -> Maybe<u32> {
    table.get(key).copied().into()
}

fn checked_div(value: u32, by: u32) -> Either<u32, String> {
    match value.checked_div(by) {
        Some(quotient) => left(quotient).into(),
        None => right(format!("cannot divide {value} by zero")).into(),
    }
}

#[test]
fn chains_lookups_and_fallible_steps() {
    let table = BTreeMap::from([("apples", 12), ("pears", 0)]);

    let per_basket = |name: &str| {
        lookup(&table, name)
            .map(|count| checked_div(count, 4))
            .map_or_else(
                || format!("no {name}"),
                |either| either.fold(|n| format!("{n} per basket"), |err| err),
            )
    };

    assert_eq!(per_basket("apples"), "3 per basket");
    assert_eq!(per_basket("plums"), "no plums");

    let by_pears = lookup(&table, "pears")
        .and_then(|pears| checked_div(12, pears).left())
        .or_else(|| make_maybe(u32::MAX));
    assert_eq!(by_pears, make_maybe(u32::MAX));
}

#[test]
fn flat_transforms_stop_at_the_first_right() {
    let result = Either::<u32, String>::from(left(100))
        .flat_transform_left(|v| checked_div(v, 5))
        .flat_transform_left(|v| checked_div(v, 0))
        .flat_transform_left(|v| checked_div(v, 2));

    assert!(result.is_right());
    assert_eq!(result.try_borrow_left(), Err(AccessError::StoredOnRight));
    assert_eq!(result.take_right(), "cannot divide 20 by zero");
}

#[test]
fn maybes_sort_absent_first() {
    let mut values = vec![make_maybe("b"), Maybe::none(), make_maybe("a")];
    values.sort();
    assert_eq!(values, vec![Maybe::none(), make_maybe("a"), make_maybe("b")]);
    assert_eq!(values.first(), Some(&Maybe::from(Nothing)));
}

#[cfg(feature = "strict-access")]
#[test]
fn unrecovered_access_reports_its_message() {
    let empty = Either::<u8, String>::from(right(String::from("err")));
    let payload = std::panic::catch_unwind(|| *empty.borrow_left())
        .expect_err("borrowing the inactive side must unwind");
    assert_eq!(
        payload.downcast_ref::<String>().map(String::as_str),
        Some("value stored on right side of either")
    );
}

#[cfg(feature = "strict-access")]
#[test]
fn invalid_access_is_recoverable() {
    let empty = Maybe::<String>::none();
    assert_eq!(
        reglisse::recover(|| empty.value().clone()),
        Err(AccessError::NoValue)
    );
}

#[cfg(not(feature = "strict-access"))]
#[test]
#[should_panic(expected = "no value stored")]
fn invalid_access_asserts() {
    let empty = Maybe::<String>::none();
    let _ = empty.into_value();
}
