//! Composite Combinators
//!
//! Conditions built out of other conditions or nested specifications.

use std::sync::Arc;

use super::{Condition, ConditionSet, IntoConditions};
use crate::specification::Specification;

/// Every element of an array must satisfy every condition of the set.
/// Non-arrays fail.
pub fn array_of(conditions: impl IntoConditions) -> Condition {
    let set = ConditionSet::of(conditions);
    Condition::fallible(format!("is.arrayOf({})", set), move |value| {
        let Some(items) = value.as_array() else {
            return Ok(false);
        };
        for item in items {
            if !set.check(item)? {
                return Ok(false);
            }
        }
        Ok(true)
    })
}

/// Validate a nested value against another specification.
///
/// An undefined value fails. Any other value is handed to
/// [`Specification::validate`], whose usage errors propagate.
pub fn schema(spec: impl Into<Arc<Specification>>) -> Condition {
    let spec: Arc<Specification> = spec.into();
    let label = format!("is.schema({})", spec.name().unwrap_or("anonymous"));
    Condition::fallible(label, move |value| {
        if value.is_undefined() {
            return Ok(false);
        }
        spec.validate(value)
    })
}

/// First half of `either(a).or(b)`
pub fn either(conditions: impl IntoConditions) -> Either {
    Either {
        first: ConditionSet::of(conditions),
    }
}

/// Pending alternative awaiting its `or` branch
#[derive(Debug, Clone)]
#[must_use = "either(..) does nothing until completed with .or(..)"]
pub struct Either {
    first: ConditionSet,
}

impl Either {
    /// Holds when either set fully holds. The second set is skipped when the
    /// first one passes.
    pub fn or(self, conditions: impl IntoConditions) -> Condition {
        let first = self.first;
        let second = ConditionSet::of(conditions);
        let label = format!("is.either({}).or({})", first, second);
        Condition::fallible(label, move |value| {
            Ok(first.check(value)? || second.check(value)?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::primitive::Primitive;
    use crate::error::SpecError;
    use crate::value::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_array_of_rejects_non_arrays() {
        let strings = array_of(Primitive::String.condition());
        assert!(!strings.holds(&Value::from("abc")));
        assert!(!strings.holds(&Value::Undefined));
        assert!(!strings.holds(&Value::object([("0", "a")])));
    }

    #[test]
    fn test_array_of_checks_every_element() {
        let strings = array_of(Primitive::String.condition());
        assert!(strings.holds(&Value::array(["a", "b"])));
        assert!(strings.holds(&Value::Array(vec![])));
        assert!(!strings.holds(&Value::array([Value::from("a"), Value::from(2)])));
    }

    #[test]
    fn test_array_of_set() {
        let non_empty_strings =
            array_of([Primitive::String.condition(), Primitive::Empty.negated()]);
        assert!(non_empty_strings.holds(&Value::array(["a", "b"])));
        assert!(!non_empty_strings.holds(&Value::array(["a", ""])));
    }

    #[test]
    fn test_either_or() {
        let condition = either(Primitive::Number.condition()).or(Primitive::Undefined.condition());
        assert!(condition.holds(&Value::from(3)));
        assert!(condition.holds(&Value::Undefined));
        assert!(!condition.holds(&Value::from("3")));
        assert!(!condition.holds(&Value::Null));
    }

    #[test]
    fn test_either_sets_are_conjunctions() {
        let condition = either([
            Primitive::String.condition(),
            Primitive::Empty.condition(),
        ])
        .or(Primitive::Integer.condition());
        assert!(condition.holds(&Value::from("")));
        assert!(!condition.holds(&Value::from("x")));
        assert!(condition.holds(&Value::from(2)));
    }

    #[test]
    fn test_either_skips_second_when_first_holds() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let counted = Condition::new("counted", |_| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            false
        });
        let condition = either(Primitive::Number.condition()).or(counted);

        assert!(condition.holds(&Value::from(1)));
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
        assert!(!condition.holds(&Value::from("1")));
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_schema_delegates_to_nested_spec() {
        let mut child = Specification::named("point");
        child.property("x", Primitive::Number.condition());
        let condition = schema(child);

        assert!(condition.check(&Value::object([("x", 1)])).unwrap());
        assert!(!condition.check(&Value::object([("x", "s")])).unwrap());
        assert!(!condition.check(&Value::Undefined).unwrap());
        assert_eq!(condition.label(), "is.schema(point)");
    }

    #[test]
    fn test_schema_propagates_usage_errors() {
        let mut child = Specification::new();
        child.property("x", Primitive::Number.condition());
        let condition = schema(child);

        assert_eq!(
            condition.check(&Value::from(5)),
            Err(SpecError::InvalidInput { kind: "number" })
        );
        assert!(!condition.holds(&Value::Null));

        let empty = schema(Specification::new());
        assert_eq!(
            empty.check(&Value::object([("x", 1)])),
            Err(SpecError::EmptySpecification { name: None })
        );
    }

    #[test]
    fn test_array_of_propagates_nested_errors() {
        let mut child = Specification::new();
        child.property("x", Primitive::Number.condition());
        let points = array_of(schema(child));

        assert!(points.check(&Value::array([Value::object([("x", 1)])])).unwrap());
        assert!(points.check(&Value::array([1])).is_err());
    }
}
