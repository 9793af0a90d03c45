//! Integration tests for SymbolTable
//!
//! Tests case folding, the absent-marker rule, and overwrite semantics.

use proptest::prelude::*;
use tokenscript_interpreter::{Lookup, SymbolTable, Value, normalize_identifier};

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn mixed_case_lookup() {
    let red = Value::color("#ff0000");
    let mut table = SymbolTable::new();
    table.set("Color", red.clone());

    assert_eq!(table.get("COLOR"), Some(&red));
    assert!(table.is_defined("color"));
}

#[test]
fn fresh_table() {
    let table: SymbolTable = SymbolTable::default();
    assert_eq!(table.get("x"), None);
    assert!(!table.is_defined("x"));
}

#[test]
fn null_binding() {
    let mut table = SymbolTable::new();
    table.set("y", Value::Null);

    assert_eq!(table.get("y"), None);
    assert!(!table.is_defined("y"));
    assert!(table.contains("y"));
}

// =============================================================================
// Lookup Outcomes
// =============================================================================

#[test]
fn lookup_distinguishes_three_outcomes() {
    let mut table = SymbolTable::new();
    table.set("bound", Value::dimension(2.0, "px"));
    table.set("empty", Value::Null);

    assert_eq!(
        table.lookup("BOUND"),
        Lookup::Bound(&Value::dimension(2.0, "px"))
    );
    assert_eq!(table.lookup("Empty"), Lookup::Empty);
    assert_eq!(table.lookup("unbound"), Lookup::Unbound);
}

#[test]
fn canonical_key_is_lowercase() {
    assert_eq!(normalize_identifier("PrimaryColor"), "primarycolor");
    assert_eq!(normalize_identifier(""), "");
    assert_eq!(normalize_identifier("spacing-2XL"), "spacing-2xl");
}

#[test]
fn bindings_iterate_with_canonical_names() {
    let mut table = SymbolTable::new();
    table.set("A", Value::from(1));
    table.set("b", Value::Null);

    let mut names: Vec<_> = (&table).into_iter().map(|(name, _)| name).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn tables_are_independent() {
    let mut outer = SymbolTable::new();
    let mut inner = SymbolTable::new();
    outer.set("x", Value::from(1));
    inner.set("x", Value::from(2));

    assert_eq!(outer.get("x"), Some(&Value::Number(1.0)));
    assert_eq!(inner.get("x"), Some(&Value::Number(2.0)));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn uppercase_and_lowercase_agree(name in "[a-zA-Z][a-zA-Z0-9]{0,12}", n in -1000i32..1000) {
        let mut table = SymbolTable::new();
        table.set(&name.to_uppercase(), Value::from(n));
        prop_assert_eq!(table.get(&name.to_lowercase()), Some(&Value::from(n)));
        prop_assert!(table.is_defined(&name));
    }

    #[test]
    fn defined_iff_bound_to_non_null(name in "[a-z]{1,10}", present in any::<bool>()) {
        let mut table = SymbolTable::new();
        let value = if present { Value::Bool(false) } else { Value::Null };
        table.set(&name, value);
        prop_assert_eq!(table.is_defined(&name), present);
        prop_assert_eq!(table.get(&name).is_some(), present);
        prop_assert!(table.contains(&name));
    }
}
