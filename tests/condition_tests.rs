use schema_spec::{Condition, Function, Value, are, is};

fn sample_values() -> Vec<Value> {
    vec![
        Value::Undefined,
        Value::Null,
        Value::from(false),
        Value::from(0),
        Value::from(-3),
        Value::from(2.5),
        Value::from(""),
        Value::from("word"),
        Value::Array(vec![]),
        Value::array(["a", "b"]),
        Value::object([("length", 2)]),
        Value::from(Function::new(|_| Value::Null)),
    ]
}

fn primitive_pairs() -> Vec<(Condition, Condition)> {
    vec![
        (is::null(), is::not::null()),
        (is::undefined(), is::not::undefined()),
        (is::string(), is::not::string()),
        (is::number(), is::not::number()),
        (is::boolean(), is::not::boolean()),
        (is::function(), is::not::function()),
        (is::object(), is::not::object()),
        (is::array(), is::not::array()),
        (is::integer(), is::not::integer()),
        (is::empty(), is::not::empty()),
        (are::strings(), are::not::strings()),
        (are::integers(), are::not::integers()),
    ]
}

#[test]
fn test_negation_is_complement() {
    for (condition, negated) in primitive_pairs() {
        for value in sample_values() {
            assert_eq!(
                negated.holds(&value),
                !condition.holds(&value),
                "{} / {} on {}",
                condition,
                negated,
                value
            );
        }
    }
}

#[test]
fn test_type_predicates() {
    let value = Value::from(42);
    assert!(is::number().holds(&value));
    assert!(is::integer().holds(&value));
    assert!(!is::string().holds(&value));
    assert!(!is::object().holds(&value));

    assert!(is::object().holds(&Value::object([("a", 1)])));
    assert!(!is::object().holds(&Value::Null));
    assert!(!is::object().holds(&Value::array([1])));
    assert!(is::array().holds(&Value::array([1])));
    assert!(is::boolean().holds(&Value::from(true)));
    assert!(is::empty().holds(&Value::from("")));
}

#[test]
fn test_size_comparators_never_fail_loudly() {
    let conditions = [
        is::length(2),
        is::not::length(2),
        is::min::length(0),
        is::max::length(100),
    ];
    for condition in &conditions {
        for value in [Value::Undefined, Value::Null, Value::from(7), Value::from(true)] {
            assert_eq!(condition.check(&value), Ok(false), "{} on {}", condition, value);
        }
    }
}

#[test]
fn test_array_of_matches_all_elements() {
    let positive_integers = is::array_of([is::integer(), is::greater::than(0)]);
    assert!(positive_integers.holds(&Value::array([1, 2, 3])));
    assert!(!positive_integers.holds(&Value::array([1, 0, 3])));
    assert!(!positive_integers.holds(&Value::array([Value::from(1), Value::from(1.5)])));
    assert!(!positive_integers.holds(&Value::from(1)));
}

#[test]
fn test_either_truth_table() {
    let a = is::number();
    let b = is::undefined();
    let condition = is::either(a.clone()).or(b.clone());

    for value in sample_values() {
        assert_eq!(
            condition.holds(&value),
            a.holds(&value) || b.holds(&value),
            "{}",
            value
        );
    }
}

#[test]
fn test_custom_conditions_compose() {
    let even = Condition::new("even", |v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0));
    let evens = is::array_of([is::integer(), even]);
    assert!(evens.holds(&Value::array([2, 4])));
    assert!(!evens.holds(&Value::array([2, 3])));
    assert_eq!(evens.label(), "is.arrayOf([is.integer, even])");
}
