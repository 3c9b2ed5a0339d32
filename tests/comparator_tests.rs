use std::cmp::Ordering;

use jsonmatch::{
    MatchError, NumericDomain, Value,
    comparator::{compare, is_equal, is_in},
};

#[test]
fn test_is_equal_is_kind_strict() {
    assert!(is_equal(&Value::Integer(100), &Value::Integer(100)));
    assert!(!is_equal(&Value::Integer(100), &Value::Float(100.0)));
    assert!(!is_equal(&Value::Integer(100), &Value::from("100")));
    assert!(!is_equal(&Value::Float(100.0), &Value::from("100")));
    assert!(is_equal(&Value::Null, &Value::Null));
    assert!(!is_equal(&Value::Boolean(false), &Value::Null));
}

#[test]
fn test_is_equal_structural() {
    let a = Value::Array(vec![Value::Integer(1), Value::from("x")]);
    let b = Value::Array(vec![Value::Integer(1), Value::from("x")]);
    let c = Value::Array(vec![Value::from("x"), Value::Integer(1)]);
    assert!(is_equal(&a, &b));
    assert!(!is_equal(&a, &c));
}

#[test]
fn test_is_in() {
    let list = Value::Array(vec![Value::Integer(100), Value::Integer(101)]);
    assert!(is_in(&Value::Integer(101), &list).unwrap());
    assert!(!is_in(&Value::Integer(200), &list).unwrap());
    assert!(!is_in(&Value::Float(101.0), &list).unwrap());
    assert!(!is_in(&Value::Integer(1), &Value::Array(vec![])).unwrap());
}

#[test]
fn test_is_in_requires_array() {
    assert!(matches!(
        is_in(&Value::Integer(1), &Value::Integer(1)),
        Err(MatchError::UnknownExpectedType { found: "integer" })
    ));
    assert!(matches!(
        is_in(&Value::Integer(1), &Value::from("1")),
        Err(MatchError::UnknownExpectedType { found: "string" })
    ));
}

#[test]
fn test_compare_integer_domain() {
    assert_eq!(
        compare(&Value::Integer(206), &Value::Integer(105)).unwrap(),
        Some(Ordering::Greater)
    );
    assert_eq!(
        compare(&Value::Float(206.0), &Value::Integer(105)).unwrap(),
        Some(Ordering::Greater)
    );
    assert_eq!(
        compare(&Value::Float(105.7), &Value::Integer(105)).unwrap(),
        Some(Ordering::Equal)
    );
    assert_eq!(
        compare(&Value::Float(-105.7), &Value::Integer(-105)).unwrap(),
        Some(Ordering::Equal)
    );
}

#[test]
fn test_compare_float_domain() {
    assert_eq!(
        compare(&Value::Integer(105), &Value::Float(105.3)).unwrap(),
        Some(Ordering::Less)
    );
    assert_eq!(
        compare(&Value::Float(105.3), &Value::Float(105.3)).unwrap(),
        Some(Ordering::Equal)
    );
}

#[test]
fn test_compare_cast_failures() {
    for actual in [
        Value::Null,
        Value::Boolean(true),
        Value::from("206"),
        Value::Array(vec![]),
    ] {
        assert!(matches!(
            compare(&actual, &Value::Integer(1)),
            Err(MatchError::TypeCastFailed(NumericDomain::Int))
        ));
        assert!(matches!(
            compare(&actual, &Value::Float(1.0)),
            Err(MatchError::TypeCastFailed(NumericDomain::Float))
        ));
    }
}

#[test]
fn test_compare_unsupported_expected() {
    assert!(matches!(
        compare(&Value::Integer(1), &Value::from("105")),
        Err(MatchError::UnsupportedComparisonType("string"))
    ));
    assert!(matches!(
        compare(&Value::Integer(1), &Value::Null),
        Err(MatchError::UnsupportedComparisonType("null"))
    ));
    assert!(matches!(
        compare(&Value::from("x"), &Value::Boolean(true)),
        Err(MatchError::UnsupportedComparisonType("boolean"))
    ));
}
