//! Errors raised by the color manager.

use std::fmt;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed set of failures the color manager can raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorErrorKind {
    /// The literal is not a well-formed color (bad hex digits, wrong arity).
    InvalidFormat,
    /// The color format or color space is not registered with the manager.
    UnknownFormat,
    /// A color function or specification is missing a required attribute.
    MissingAttribute,
    /// An attribute is present but has an unusable value.
    InvalidAttribute,
    /// No conversion path exists between two color formats.
    UnsupportedConversion,
    /// A color specification could not be loaded.
    InvalidSpecification,
}

impl ColorErrorKind {
    /// Every color error kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::InvalidFormat,
        Self::UnknownFormat,
        Self::MissingAttribute,
        Self::InvalidAttribute,
        Self::UnsupportedConversion,
        Self::InvalidSpecification,
    ];

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidFormat => "color.invalid-format",
            Self::UnknownFormat => "color.unknown-format",
            Self::MissingAttribute => "color.missing-attribute",
            Self::InvalidAttribute => "color.invalid-attribute",
            Self::UnsupportedConversion => "color.unsupported-conversion",
            Self::InvalidSpecification => "color.invalid-specification",
        }
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid color format",
            Self::UnknownFormat => "unknown color format",
            Self::MissingAttribute => "missing color attribute",
            Self::InvalidAttribute => "invalid color attribute",
            Self::UnsupportedConversion => "unsupported color conversion",
            Self::InvalidSpecification => "invalid color specification",
        }
    }
}

impl fmt::Display for ColorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// An error raised by the color manager.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ColorError {
    /// What went wrong.
    pub kind: ColorErrorKind,
    /// Human-readable detail.
    pub message: String,
    /// The offending literal or attribute value, when there is one.
    pub value: Option<String>,
}

impl ColorError {
    /// Creates a color error with the given kind and message.
    #[must_use]
    pub fn new(kind: ColorErrorKind, message: impl Into<String>) -> Self {
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

    /// The literal is not a well-formed color.
    #[must_use]
    pub fn invalid_format(literal: &str) -> Self {
        Self::new(
            ColorErrorKind::InvalidFormat,
            format!("cannot parse '{literal}' as a color"),
        )
        .with_value(literal)
    }

    /// The named color format is not registered.
    #[must_use]
    pub fn unknown_format(format: &str) -> Self {
        Self::new(
            ColorErrorKind::UnknownFormat,
            format!("no color format named '{format}'"),
        )
        .with_value(format)
    }

    /// A required attribute is missing from a color of `format`.
    #[must_use]
    pub fn missing_attribute(format: &str, attribute: &str) -> Self {
        Self::new(
            ColorErrorKind::MissingAttribute,
            format!("{format} color requires attribute '{attribute}'"),
        )
        .with_value(attribute)
    }

    /// `attribute` holds a value the manager cannot use.
    #[must_use]
    pub fn invalid_attribute(attribute: &str, value: &str) -> Self {
        Self::new(
            ColorErrorKind::InvalidAttribute,
            format!("attribute '{attribute}' cannot be '{value}'"),
        )
        .with_value(value)
    }

    /// No conversion path from `from` to `to`.
    #[must_use]
    pub fn unsupported_conversion(from: &str, to: &str) -> Self {
        Self::new(
            ColorErrorKind::UnsupportedConversion,
            format!("cannot convert {from} to {to}"),
        )
    }

    /// A color specification failed to load.
    #[must_use]
    pub fn invalid_specification(reason: impl Into<String>) -> Self {
        Self::new(ColorErrorKind::InvalidSpecification, reason)
    }
}
