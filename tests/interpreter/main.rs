//! Integration tests for Layer 1: Interpreter
//!
//! Tests for symbol tables, scope chains, and error propagation through an
//! evaluator-shaped caller.

mod symbol_table;
