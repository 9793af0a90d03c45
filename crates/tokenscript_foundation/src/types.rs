//! Type tags for TokenScript values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type tag reported by a [`Value`](crate::Value).
///
/// Tags are descriptive only. Checking that an operand has the right type is
/// the evaluator's job, not the symbol table's.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The null type (only value: null).
    Null,
    /// Boolean type.
    Bool,
    /// Unitless number.
    Number,
    /// String type.
    String,
    /// Color literal managed by the color manager.
    Color,
    /// Number carrying a unit suffix, managed by the unit manager.
    Dimension,
    /// Homogeneous list type.
    List(Box<Type>),
    /// Any type (element type of lists built at runtime).
    Any,
}

impl Type {
    /// Creates a list type with the given element type.
    #[must_use]
    pub fn list(element: Type) -> Self {
        Self::List(Box::new(element))
    }

    /// Returns true if values of this type are owned by a manager.
    #[must_use]
    pub const fn is_managed(&self) -> bool {
        matches!(self, Self::Color | Self::Dimension)
    }

    /// Returns true if this type can be null.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Null | Self::Any)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Color => write!(f, "color"),
            Self::Dimension => write!(f, "dimension"),
            Self::List(t) => write!(f, "list<{t:?}>"),
            Self::Any => write!(f, "any"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
