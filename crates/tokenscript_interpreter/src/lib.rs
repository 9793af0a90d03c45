//! Case-insensitive symbol tables and scope chains for TokenScript.
//!
//! This crate provides:
//! - [`SymbolTable`] - Identifier bindings for one evaluation scope
//! - [`Scopes`] - A chain of symbol tables searched innermost-outward
//! - [`ScopeConfig`] - Depth and shadowing settings for a chain
//!
//! Manager errors are defined in `tokenscript_foundation` and re-exported
//! here so the evaluator depends on a single crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod scope;
pub mod symbol_table;

pub use config::{ScopeConfig, ShadowingPolicy};
pub use scope::{ScopeError, Scopes};
pub use symbol_table::{Lookup, Presence, SymbolTable, normalize_identifier};

pub use tokenscript_foundation::{
    ColorError, ColorErrorKind, Error, ErrorCode, ErrorContext, ErrorKind, Manager, Result,
    UnitError, UnitErrorKind, Value,
};
