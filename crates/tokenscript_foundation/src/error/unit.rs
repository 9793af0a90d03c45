//! Errors raised by the unit manager.

use std::fmt;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed set of failures the unit manager can raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitErrorKind {
    /// The unit suffix is not registered with the manager.
    UnknownUnit,
    /// Two operands carry units that cannot be combined.
    IncompatibleUnits,
    /// The units are known but no conversion between them exists.
    ConversionImpossible,
    /// A unit specification could not be loaded.
    InvalidSpecification,
    /// The operation is not defined for dimensioned values.
    UnsupportedOperation,
}

impl UnitErrorKind {
    /// Every unit error kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::UnknownUnit,
        Self::IncompatibleUnits,
        Self::ConversionImpossible,
        Self::InvalidSpecification,
        Self::UnsupportedOperation,
    ];

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnknownUnit => "unit.unknown-unit",
            Self::IncompatibleUnits => "unit.incompatible-units",
            Self::ConversionImpossible => "unit.conversion-impossible",
            Self::InvalidSpecification => "unit.invalid-specification",
            Self::UnsupportedOperation => "unit.unsupported-operation",
        }
    }
}

impl fmt::Display for UnitErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UnknownUnit => "unknown unit",
            Self::IncompatibleUnits => "incompatible units",
            Self::ConversionImpossible => "unit conversion impossible",
            Self::InvalidSpecification => "invalid unit specification",
            Self::UnsupportedOperation => "unsupported unit operation",
        };
        f.write_str(text)
    }
}

/// An error raised by the unit manager.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct UnitError {
    /// What went wrong.
    pub kind: UnitErrorKind,
    /// Human-readable detail.
    pub message: String,
    /// The offending unit or operand, when there is one.
    pub value: Option<String>,
}

impl UnitError {
    /// Creates a unit error with the given kind and message.
    #[must_use]
    pub fn new(kind: UnitErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            value: None,
        }
    }

    /// Attaches the offending value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// `suffix` is not a known unit.
    #[must_use]
    pub fn unknown_unit(suffix: &str) -> Self {
        Self::new(UnitErrorKind::UnknownUnit, format!("unknown unit '{suffix}'"))
            .with_value(suffix)
    }

    /// `left` and `right` cannot appear in the same operation.
    #[must_use]
    pub fn incompatible_units(left: &str, right: &str) -> Self {
        Self::new(
            UnitErrorKind::IncompatibleUnits,
            format!("cannot combine '{left}' with '{right}'"),
        )
    }

    /// No conversion exists from `from` to `to`.
    #[must_use]
    pub fn conversion_impossible(from: &str, to: &str) -> Self {
        Self::new(
            UnitErrorKind::ConversionImpossible,
            format!("cannot convert '{from}' to '{to}'"),
        )
    }

    /// A unit specification failed to load.
    #[must_use]
    pub fn invalid_specification(reason: impl Into<String>) -> Self {
        Self::new(UnitErrorKind::InvalidSpecification, reason)
    }

    /// `operation` is not defined for values in `unit`.
    #[must_use]
    pub fn unsupported_operation(operation: &str, unit: &str) -> Self {
        Self::new(
            UnitErrorKind::UnsupportedOperation,
            format!("'{operation}' is not supported for '{unit}'"),
        )
        .with_value(unit)
    }
}
