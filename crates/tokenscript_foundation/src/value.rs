//! Typed values bound to identifiers in TokenScript scopes.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::LtVec;
use crate::types::Type;

/// A TokenScript value.
///
/// Values are immutable and cheaply cloneable. Color and dimension payloads
/// are kept as the literal text the managers accept; parsing and arithmetic
/// on them belong to the color and unit managers.
#[derive(Clone)]
pub enum Value {
    /// The null value. Symbol tables treat it as the absent marker.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Unitless number.
    Number(f64),
    /// String value.
    String(Arc<str>),
    /// Color literal such as `#ff0000` or `rgb(255, 0, 0)`.
    Color(Arc<str>),
    /// Number with a unit suffix such as `16px`.
    Dimension {
        /// The magnitude.
        value: f64,
        /// The unit suffix, as written.
        unit: Arc<str>,
    },
    /// Persistent list.
    List(LtVec<Value>),
}

impl Value {
    /// Creates a color value from its literal text.
    #[must_use]
    pub fn color(literal: impl Into<Arc<str>>) -> Self {
        Self::Color(literal.into())
    }

    /// Creates a dimension value.
    #[must_use]
    pub fn dimension(value: f64, unit: impl Into<Arc<str>>) -> Self {
        Self::Dimension {
            value,
            unit: unit.into(),
        }
    }

    /// Returns the type of this value.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match self {
            Self::Null => Type::Null,
            Self::Bool(_) => Type::Bool,
            Self::Number(_) => Type::Number,
            Self::String(_) => Type::String,
            Self::Color(_) => Type::Color,
            Self::Dimension { .. } => Type::Dimension,
            Self::List(_) => Type::list(Type::Any),
        }
    }

    /// Returns true if this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if this value is truthy in conditionals.
    ///
    /// Only `null` and `false` are falsy. This is unrelated to whether a
    /// binding counts as defined; see `SymbolTable::is_defined`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a unitless number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a color literal.
    #[must_use]
    pub fn as_color(&self) -> Option<&str> {
        match self {
            Self::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Attempts to extract a dimension as `(value, unit)`.
    #[must_use]
    pub fn as_dimension(&self) -> Option<(f64, &str)> {
        match self {
            Self::Dimension { value, unit } => Some((*value, unit)),
            _ => None,
        }
    }

    /// Attempts to extract a list reference.
    #[must_use]
    pub const fn as_list(&self) -> Option<&LtVec<Value>> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }
}

// Floats compare by bit pattern so that Eq and Hash stay consistent.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) | (Self::Color(a), Self::Color(b)) => a == b,
            (
                Self::Dimension {
                    value: av,
                    unit: au,
                },
                Self::Dimension {
                    value: bv,
                    unit: bu,
                },
            ) => av.to_bits() == bv.to_bits() && au == bu,
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => n.to_bits().hash(state),
            Self::String(s) | Self::Color(s) => s.hash(state),
            Self::Dimension { value, unit } => {
                value.to_bits().hash(state);
                unit.hash(state);
            }
            Self::List(l) => l.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Color(c) => write!(f, "Color({c})"),
            Self::Dimension { value, unit } => write!(f, "{value}{unit}"),
            Self::List(l) => write!(f, "{l:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Color(c) => write!(f, "{c}"),
            Self::Dimension { value, unit } => write!(f, "{value}{unit}"),
            Self::List(l) => {
                for (i, item) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}
