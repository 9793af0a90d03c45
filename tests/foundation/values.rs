//! Integration tests for Value types
//!
//! Tests Value variants, equality, display, and type tags.

use tokenscript_foundation::{LtVec, Type, Value};

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_null() {
    let v = Value::Null;
    assert!(v.is_null());
    assert_eq!(v.value_type(), Type::Null);
    assert_eq!(v.to_string(), "null");
}

#[test]
fn value_number() {
    let v = Value::from(12);
    assert_eq!(v.as_number(), Some(12.0));
    assert_eq!(v.as_dimension(), None);
}

#[test]
fn value_string() {
    let v = Value::from("heading");
    assert_eq!(v.as_str(), Some("heading"));
    assert_eq!(v.as_color(), None);
}

#[test]
fn value_color() {
    let v = Value::color("rgb(255, 0, 0)");
    assert_eq!(v.as_color(), Some("rgb(255, 0, 0)"));
    assert!(v.value_type().is_managed());
}

#[test]
fn value_dimension() {
    let v = Value::dimension(1.5, "rem");
    assert_eq!(v.as_dimension(), Some((1.5, "rem")));
    assert_eq!(v.to_string(), "1.5rem");
}

#[test]
fn value_list() {
    let list: LtVec<Value> = [Value::from(1), Value::from(2)].into_iter().collect();
    let v = Value::List(list.push_back(Value::from(3)));

    assert_eq!(v.as_list().map(LtVec::len), Some(3));
    assert_eq!(v.value_type(), Type::list(Type::Any));
    assert_eq!(v.to_string(), "1, 2, 3");
}

// =============================================================================
// Truthiness
// =============================================================================

#[test]
fn only_null_and_false_are_falsy() {
    assert!(!Value::Null.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::from("").is_truthy());
    assert!(Value::List(LtVec::new()).is_truthy());
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn numbers_compare_by_bits() {
    let nan = Value::Number(f64::NAN);
    assert_eq!(nan, nan.clone());
    assert_ne!(Value::Number(0.0), Value::Number(-0.0));
}

#[test]
fn dimension_is_not_number() {
    assert_ne!(Value::dimension(4.0, ""), Value::Number(4.0));
}
