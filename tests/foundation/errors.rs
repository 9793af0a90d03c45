//! Integration tests for the manager error taxonomy
//!
//! Tests error construction, display, context, and exhaustive dispatch.

use std::collections::HashSet;

use tokenscript_foundation::{
    ColorError, ColorErrorKind, Error, ErrorCode, ErrorContext, ErrorKind, Manager, UnitError,
    UnitErrorKind,
};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn color_invalid_format() {
    let err = Error::from(ColorError::invalid_format("#ggg"));
    assert!(matches!(
        err.kind,
        ErrorKind::Color(ColorError {
            kind: ColorErrorKind::InvalidFormat,
            ..
        })
    ));
    assert!(err.to_string().contains("#ggg"));
}

#[test]
fn color_missing_attribute() {
    let err = Error::color(ColorError::missing_attribute("hsl", "lightness"));
    assert_eq!(
        err.code(),
        ErrorCode::Color(ColorErrorKind::MissingAttribute)
    );
    assert!(err.message().contains("lightness"));
}

#[test]
fn unit_unknown_unit() {
    let err = Error::from(UnitError::unknown_unit("smoot"));
    assert_eq!(err.manager(), Manager::Unit);
    assert_eq!(err.kind.value(), Some("smoot"));
}

#[test]
fn unit_incompatible() {
    let err = Error::unit(UnitError::incompatible_units("px", "%"));
    assert_eq!(err.code(), ErrorCode::Unit(UnitErrorKind::IncompatibleUnits));
    assert!(err.kind.value().is_none());
}

#[test]
fn custom_message_keeps_kind() {
    let err = ColorError::new(ColorErrorKind::InvalidAttribute, "alpha out of range")
        .with_value("1.5");
    assert_eq!(err.to_string(), "invalid color attribute: alpha out of range");
    assert_eq!(err.value.as_deref(), Some("1.5"));
}

// =============================================================================
// Union Coverage
// =============================================================================

fn sample(code: ErrorCode) -> Error {
    match code {
        ErrorCode::Color(kind) => Error::color(ColorError::new(kind, "sample")),
        ErrorCode::Unit(kind) => Error::unit(UnitError::new(kind, "sample")),
    }
}

#[test]
fn every_code_round_trips_through_an_error() {
    for code in ErrorCode::all() {
        assert_eq!(sample(code).code(), code);
    }
}

#[test]
fn codes_are_distinct_across_managers() {
    let codes: HashSet<_> = ErrorCode::all().map(ErrorCode::as_str).collect();
    assert_eq!(
        codes.len(),
        ColorErrorKind::ALL.len() + UnitErrorKind::ALL.len()
    );
}

#[test]
fn every_manager_contributes_codes() {
    let managers: HashSet<_> = ErrorCode::all().map(ErrorCode::manager).collect();
    assert_eq!(managers.len(), Manager::ALL.len());
}

#[test]
fn code_display_matches_as_str() {
    let code = ErrorCode::Unit(UnitErrorKind::ConversionImpossible);
    assert_eq!(code.to_string(), "unit.conversion-impossible");
}

// =============================================================================
// Error with Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::color(ColorError::unknown_format("oklch"))
        .with_context(ErrorContext::new().with_source("theme.tokens").with_position(7, 2));

    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.line, Some(7));
    assert_eq!(ctx.column, Some(2));
    assert_eq!(ctx.to_string(), "at theme.tokens:7:2");
}

#[test]
fn default_context_is_empty() {
    let ctx = ErrorContext::default();
    assert!(ctx.source.is_none());
    assert!(ctx.stack.is_empty());
    assert_eq!(ctx.to_string(), "");
}

// =============================================================================
// Error Chaining
// =============================================================================

#[test]
fn result_propagation() {
    fn manager() -> Result<(), UnitError> {
        Err(UnitError::unsupported_operation("sqrt", "px"))
    }

    fn evaluator() -> tokenscript_foundation::Result<()> {
        manager()?;
        Ok(())
    }

    let err = evaluator().unwrap_err();
    assert_eq!(
        err.code(),
        ErrorCode::Unit(UnitErrorKind::UnsupportedOperation)
    );
}

#[test]
fn aggregate_display_is_manager_display() {
    let err = Error::color(ColorError::invalid_specification("missing schema"));
    assert_eq!(err.to_string(), "invalid color specification: missing schema");
}
