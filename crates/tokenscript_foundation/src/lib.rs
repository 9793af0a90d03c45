//! Core values and the manager error taxonomy for TokenScript.
//!
//! This crate provides:
//! - [`Value`] - The typed values stored in symbol tables
//! - [`Type`] - Type tags reported by values
//! - [`Error`] - The aggregate error raised by value managers
//! - [`ColorError`] and [`UnitError`] - Per-manager error values
//! - Persistent collections ([`LtVec`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod types;
pub mod value;

pub use collections::LtVec;
pub use error::{
    ColorError, ColorErrorKind, Error, ErrorCode, ErrorContext, ErrorKind, Manager, UnitError,
    UnitErrorKind,
};
pub use types::Type;
pub use value::Value;

/// Result type for manager operations.
pub type Result<T> = std::result::Result<T, Error>;
