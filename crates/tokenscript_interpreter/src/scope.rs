//! Nested scopes as a chain of symbol tables.
//!
//! The global table sits at the bottom of the chain and lives as long as the
//! chain. Each block the evaluator enters pushes a fresh table, and leaving
//! the block pops and drops it. Lookups search innermost-outward and stop at
//! the first table holding a binding for the name, even when that binding is
//! the absent marker.

use std::iter;

use thiserror::Error;
use tracing::{debug, trace};

use tokenscript_foundation::Value;

use crate::config::{ScopeConfig, ShadowingPolicy};
use crate::symbol_table::{Lookup, Presence, SymbolTable};

/// Failures of scope-chain operations.
///
/// These belong to the interpreter itself and are not part of the manager
/// error union.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// Entering another scope would exceed the configured depth.
    #[error("scope depth limit ({limit}) exceeded")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// A declaration would hide a binding of an enclosing scope.
    #[error("'{name}' is already bound in an enclosing scope")]
    Shadowing {
        /// The name as written in the declaration.
        name: String,
    },
}

/// A chain of symbol tables, innermost last.
#[derive(Debug, Clone)]
pub struct Scopes<V = Value> {
    global: SymbolTable<V>,
    locals: Vec<SymbolTable<V>>,
    config: ScopeConfig,
}

impl<V> Scopes<V> {
    /// Creates a chain holding only an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ScopeConfig::default())
    }

    /// Creates a chain with the given configuration.
    #[must_use]
    pub fn with_config(config: ScopeConfig) -> Self {
        Self {
            global: SymbolTable::new(),
            locals: Vec::new(),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    /// Returns the number of live scopes, the global scope included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.locals.len() + 1
    }

    /// Enters a new, empty scope.
    pub fn push(&mut self) -> Result<(), ScopeError> {
        if self.depth() >= self.config.max_depth {
            debug!(limit = self.config.max_depth, "scope depth limit reached");
            return Err(ScopeError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        self.locals.push(SymbolTable::new());
        trace!(depth = self.depth(), "enter scope");
        Ok(())
    }

    /// Leaves the innermost scope and returns its bindings.
    ///
    /// Returns `None` when only the global scope is left; it is never popped.
    pub fn pop(&mut self) -> Option<SymbolTable<V>> {
        let frame = self.locals.pop();
        if frame.is_some() {
            trace!(depth = self.depth(), "exit scope");
        } else {
            debug!("attempted to exit the global scope");
        }
        frame
    }

    /// Returns the global scope.
    #[must_use]
    pub fn global(&self) -> &SymbolTable<V> {
        &self.global
    }

    /// Returns the innermost scope.
    #[must_use]
    pub fn current(&self) -> &SymbolTable<V> {
        self.locals.last().unwrap_or(&self.global)
    }

    /// Returns the innermost scope mutably.
    pub fn current_mut(&mut self) -> &mut SymbolTable<V> {
        self.locals.last_mut().unwrap_or(&mut self.global)
    }

    /// Iterates over the scopes from innermost to global.
    fn frames(&self) -> impl Iterator<Item = &SymbolTable<V>> {
        self.locals.iter().rev().chain(iter::once(&self.global))
    }

    /// Iterates over the scopes enclosing the innermost one.
    fn enclosing(&self) -> impl Iterator<Item = &SymbolTable<V>> {
        self.frames().skip(1)
    }
}

impl<V: Presence> Scopes<V> {
    /// Resolves `name` against the nearest scope that holds a binding for it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Lookup<'_, V> {
        self.frames()
            .map(|frame| frame.lookup(name))
            .find(|found| found.is_present())
            .unwrap_or(Lookup::Unbound)
    }

    /// Returns the value visible under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.lookup(name).value()
    }

    /// Returns true if the nearest binding for `name` holds a value.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.frames()
            .find(|frame| frame.contains(name))
            .is_some_and(|frame| frame.is_defined(name))
    }

    /// Binds `name` in the innermost scope.
    ///
    /// Rebinding a name already held by the innermost scope replaces it.
    /// Under [`ShadowingPolicy::Deny`], hiding a binding of an enclosing
    /// scope is refused.
    pub fn declare(&mut self, name: &str, value: V) -> Result<(), ScopeError> {
        if self.config.shadowing == ShadowingPolicy::Deny
            && self.enclosing().any(|frame| frame.contains(name))
        {
            debug!(identifier = name, "refused shadowing declaration");
            return Err(ScopeError::Shadowing {
                name: name.to_string(),
            });
        }
        self.current_mut().set(name, value);
        Ok(())
    }

    /// Updates the nearest binding for `name`, or binds it in the innermost
    /// scope when no scope holds it.
    pub fn assign(&mut self, name: &str, value: V) {
        if let Some(index) = self.locals.iter().rposition(|frame| frame.contains(name)) {
            self.locals[index].set(name, value);
        } else if self.global.contains(name) {
            self.global.set(name, value);
        } else {
            self.current_mut().set(name, value);
        }
    }
}

impl<V> Default for Scopes<V> {
    fn default() -> Self {
        Self::new()
    }
}
