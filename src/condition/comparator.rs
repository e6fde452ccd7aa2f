//! Curried Comparators
//!
//! Factories that capture a reference value and return a condition comparing
//! against it. Size comparators answer `false` for values without a size.

use super::Condition;
use crate::value::Value;

pub fn length(expected: usize) -> Condition {
    Condition::new(format!("is.length({})", expected), move |v| {
        v.length() == Some(expected)
    })
}

pub fn not_length(unexpected: usize) -> Condition {
    Condition::new(format!("is.not.length({})", unexpected), move |v| {
        v.length().is_some_and(|len| len != unexpected)
    })
}

pub fn min_length(min: usize) -> Condition {
    Condition::new(format!("is.min.length({})", min), move |v| {
        v.length().is_some_and(|len| len >= min)
    })
}

pub fn max_length(max: usize) -> Condition {
    Condition::new(format!("is.max.length({})", max), move |v| {
        v.length().is_some_and(|len| len <= max)
    })
}

pub fn equal_to(expected: impl Into<Value>) -> Condition {
    let expected = expected.into();
    Condition::new(format!("is.equal.to({})", expected), move |v| *v == expected)
}

pub fn not_equal_to(unexpected: impl Into<Value>) -> Condition {
    let unexpected = unexpected.into();
    Condition::new(format!("is.not.equal.to({})", unexpected), move |v| {
        *v != unexpected
    })
}

/// Strictly greater; unordered pairs (e.g. number vs string) fail
pub fn greater_than(bound: impl Into<Value>) -> Condition {
    let bound = bound.into();
    Condition::new(format!("is.greater.than({})", bound), move |v| *v > bound)
}

/// Strictly less; unordered pairs fail
pub fn less_than(bound: impl Into<Value>) -> Condition {
    let bound = bound.into();
    Condition::new(format!("is.less.than({})", bound), move |v| *v < bound)
}
