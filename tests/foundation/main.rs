//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Type, and the manager error taxonomy.

mod errors;
mod values;
