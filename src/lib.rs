//! TokenScript - symbol resolution and manager error taxonomy
//!
//! This crate re-exports the layers of the TokenScript interpreter core for
//! convenient access. For detailed documentation, see the individual crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tokenscript_interpreter - Symbol tables, scope chains
//! Layer 0: tokenscript_foundation  - Values, manager error taxonomy
//! ```

pub use tokenscript_foundation as foundation;
pub use tokenscript_interpreter as interpreter;
