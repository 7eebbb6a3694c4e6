//! Assertions that fail the running test with a rendered diff.
//!
//! The macros mirror [`assert_eq!`] but take the actual value first and the
//! expected value second.  On a mismatch they panic with the report of the
//! [`Mismatch`] (the expected text, the actual text and the difference), on
//! a match they do nothing.  Like [`assert_eq!`] they accept an optional
//! format string that is prepended to the report.
//!
//! ```rust,should_panic
//! use testdiff::assert_text_eq;
//!
//! assert_text_eq!("Hello World", "Hello Berlin", "greeting for {}", "Berlin");
//! ```
use std::fmt;

use crate::outcome::Mismatch;

/// Panics with the report if the comparison did not match.
#[track_caller]
pub fn assert_outcome(result: Result<(), Mismatch>) {
    if let Err(mismatch) = result {
        panic!("assertion failed: `(actual == expect)`\n{}", mismatch);
    }
}

/// Panics with the message and the report if the comparison did not match.
#[track_caller]
pub fn assert_outcome_with(result: Result<(), Mismatch>, message: fmt::Arguments<'_>) {
    if let Err(mismatch) = result {
        panic!(
            "assertion failed: `(actual == expect)`: {}\n{}",
            message, mismatch
        );
    }
}

/// Asserts that two strings are equal.
///
/// See [`compare`](crate::compare).
#[macro_export]
macro_rules! assert_text_eq {
    ($actual:expr, $expect:expr $(,)?) => {
        $crate::assert_outcome($crate::compare(&$actual, &$expect))
    };
    ($actual:expr, $expect:expr, $($arg:tt)+) => {
        $crate::assert_outcome_with(
            $crate::compare(&$actual, &$expect),
            format_args!($($arg)+),
        )
    };
}

/// Asserts that two values format to the same text.
///
/// See [`compare_values`](crate::compare_values).
#[macro_export]
macro_rules! assert_values_eq {
    ($actual:expr, $expect:expr $(,)?) => {
        $crate::assert_outcome($crate::compare_values(&$actual, &$expect))
    };
    ($actual:expr, $expect:expr, $($arg:tt)+) => {
        $crate::assert_outcome_with(
            $crate::compare_values(&$actual, &$expect),
            format_args!($($arg)+),
        )
    };
}

/// Asserts that two values have the same `Debug` representation.
///
/// See [`compare_debug`](crate::compare_debug).
#[macro_export]
macro_rules! assert_debug_eq {
    ($actual:expr, $expect:expr $(,)?) => {
        $crate::assert_outcome($crate::compare_debug(&$actual, &$expect))
    };
    ($actual:expr, $expect:expr, $($arg:tt)+) => {
        $crate::assert_outcome_with(
            $crate::compare_debug(&$actual, &$expect),
            format_args!($($arg)+),
        )
    };
}

/// Asserts that two text blocks are equal ignoring common indentation.
///
/// See [`compare_content`](crate::compare_content).
#[macro_export]
macro_rules! assert_content_eq {
    ($actual:expr, $expect:expr $(,)?) => {
        $crate::assert_outcome($crate::compare_content(&$actual, &$expect))
    };
    ($actual:expr, $expect:expr, $($arg:tt)+) => {
        $crate::assert_outcome_with(
            $crate::compare_content(&$actual, &$expect),
            format_args!($($arg)+),
        )
    };
}

/// Asserts that two HTTP message dumps are equal.
///
/// See [`compare_http`](crate::compare_http).
#[macro_export]
macro_rules! assert_http_eq {
    ($actual:expr, $expect:expr $(,)?) => {
        $crate::assert_outcome($crate::compare_http(&$actual, &$expect))
    };
    ($actual:expr, $expect:expr, $($arg:tt)+) => {
        $crate::assert_outcome_with(
            $crate::compare_http(&$actual, &$expect),
            format_args!($($arg)+),
        )
    };
}

/// Asserts that two values serialize to the same JSON.
///
/// See [`compare_json`](crate::compare_json).  This requires the `serde`
/// feature.
#[cfg(feature = "serde")]
#[macro_export]
macro_rules! assert_json_eq {
    ($actual:expr, $expect:expr $(,)?) => {
        $crate::assert_outcome($crate::compare_json(&$actual, &$expect))
    };
    ($actual:expr, $expect:expr, $($arg:tt)+) => {
        $crate::assert_outcome_with(
            $crate::compare_json(&$actual, &$expect),
            format_args!($($arg)+),
        )
    };
}

#[test]
fn test_assert_outcome_passes_on_match() {
    assert_outcome(Ok(()));
    assert_outcome_with(Ok(()), format_args!("unused {}", 42));
}

#[test]
#[should_panic(expected = "assertion failed: `(actual == expect)`: status line")]
fn test_assert_outcome_with_message() {
    assert_outcome_with(crate::compare("200", "404"), format_args!("status line"));
}
