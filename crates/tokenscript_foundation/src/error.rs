//! Error types raised by TokenScript value managers.
//!
//! Each manager owns a closed set of error kinds in its own module. [`Error`]
//! is the tagged union of every manager's errors; the interpreter's reporting
//! stage matches on [`ErrorKind`] exhaustively, so adding a manager is a
//! compile-time visible change.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

mod color;
mod unit;

use std::fmt;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use color::{ColorError, ColorErrorKind};
pub use unit::{UnitError, UnitErrorKind};

/// The aggregate error type for TokenScript manager operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The manager error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Wraps a color manager error.
    #[must_use]
    pub fn color(err: ColorError) -> Self {
        Self::new(ErrorKind::Color(err))
    }

    /// Wraps a unit manager error.
    #[must_use]
    pub fn unit(err: UnitError) -> Self {
        Self::new(ErrorKind::Unit(err))
    }

    /// Returns the manager that raised this error.
    #[must_use]
    pub fn manager(&self) -> Manager {
        self.kind.manager()
    }

    /// Returns the flat error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Returns the manager's human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.kind.message()
    }
}

impl From<ColorError> for Error {
    fn from(err: ColorError) -> Self {
        Self::color(err)
    }
}

impl From<UnitError> for Error {
    fn from(err: UnitError) -> Self {
        Self::unit(err)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// One variant per manager, each holding that manager's error value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Raised by the color manager.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Raised by the unit manager.
    #[error(transparent)]
    Unit(#[from] UnitError),
}

impl ErrorKind {
    /// Returns the manager that raised this error.
    #[must_use]
    pub const fn manager(&self) -> Manager {
        match self {
            Self::Color(_) => Manager::Color,
            Self::Unit(_) => Manager::Unit,
        }
    }

    /// Returns the flat error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Color(err) => ErrorCode::Color(err.kind),
            Self::Unit(err) => ErrorCode::Unit(err.kind),
        }
    }

    /// Returns the manager's human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Color(err) => &err.message,
            Self::Unit(err) => &err.message,
        }
    }

    /// Returns the offending value, if the manager recorded one.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Color(err) => err.value.as_deref(),
            Self::Unit(err) => err.value.as_deref(),
        }
    }
}

/// The value managers that contribute to the error union.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Manager {
    /// The color manager.
    Color,
    /// The unit manager.
    Unit,
}

impl Manager {
    /// Every manager, in declaration order.
    pub const ALL: [Self; 2] = [Self::Color, Self::Unit];

    /// Returns the manager's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Unit => "unit",
        }
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flat discriminant of the error union, without payload.
///
/// Suitable for dispatch tables and machine-readable diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorCode {
    /// A color manager error kind.
    Color(ColorErrorKind),
    /// A unit manager error kind.
    Unit(UnitErrorKind),
}

impl ErrorCode {
    /// Returns every member of the union, grouped by manager.
    pub fn all() -> impl Iterator<Item = Self> {
        ColorErrorKind::ALL
            .into_iter()
            .map(Self::Color)
            .chain(UnitErrorKind::ALL.into_iter().map(Self::Unit))
    }

    /// Returns the manager that owns this code.
    #[must_use]
    pub const fn manager(self) -> Manager {
        match self {
            Self::Color(_) => Manager::Color,
            Self::Unit(_) => Manager::Unit,
        }
    }

    /// Returns the stable dotted code, e.g. `color.invalid-format`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color(kind) => kind.code(),
            Self::Unit(kind) => kind.code(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Token file or expression name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Function call frames, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            line: None,
            column: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a call frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        for frame in self.stack.iter().rev() {
            write!(f, "\n  in {frame}")?;
        }
        Ok(())
    }
}
