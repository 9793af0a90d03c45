//! Case-insensitive identifier bindings for one evaluation scope.
//!
//! Identifiers are stored under their lower-cased form, so `Foo`, `FOO` and
//! `foo` name the same binding. A binding may hold the absent marker
//! (`Value::Null`): it still occupies the slot, but [`SymbolTable::get`]
//! reports nothing and [`SymbolTable::is_defined`] reports `false`.

use std::collections::HashMap;
use std::collections::hash_map;

use tokenscript_foundation::Value;
use tracing::trace;

/// Values that can stand for "no value" when bound in a symbol table.
pub trait Presence {
    /// Returns true if this value is the absent marker.
    fn is_absent(&self) -> bool;
}

impl Presence for Value {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T> Presence for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

/// Returns the canonical key for an identifier.
#[must_use]
pub fn normalize_identifier(name: &str) -> String {
    name.to_lowercase()
}

/// Outcome of resolving an identifier in a table.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a, V> {
    /// No binding exists for the name.
    Unbound,
    /// A binding exists but holds the absent marker.
    Empty,
    /// A binding exists and holds a value.
    Bound(&'a V),
}

impl<V> Clone for Lookup<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Lookup<'_, V> {}

impl<'a, V> Lookup<'a, V> {
    /// Returns the bound value, if any.
    #[must_use]
    pub fn value(self) -> Option<&'a V> {
        match self {
            Self::Bound(v) => Some(v),
            Self::Unbound | Self::Empty => None,
        }
    }

    /// Returns true unless the name is unbound.
    #[must_use]
    pub fn is_present(self) -> bool {
        !matches!(self, Self::Unbound)
    }
}

/// Identifier-to-value bindings for a single scope.
///
/// Operations never fail: an unknown name is a normal outcome, and what to do
/// about it is the evaluator's decision.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable<V = Value> {
    bindings: HashMap<String, V>,
}

impl<V> SymbolTable<V> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// `value` may be the absent marker; the binding is stored regardless.
    pub fn set(&mut self, name: &str, value: V) {
        let key = normalize_identifier(name);
        trace!(identifier = %key, "bind");
        self.bindings.insert(key, value);
    }

    /// Returns true if a binding for `name` is stored, even if it holds the
    /// absent marker.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(&normalize_identifier(name))
    }

    /// Returns the number of stored bindings, including empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no bindings are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over `(canonical name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.bindings.iter(),
        }
    }
}

impl<V: Presence> SymbolTable<V> {
    /// Returns the value bound to `name`.
    ///
    /// Returns `None` both when the name was never bound and when it is bound
    /// to the absent marker.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.lookup(name).value()
    }

    /// Returns true only if `name` is bound to a value other than the absent
    /// marker.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.bindings
            .get(&normalize_identifier(name))
            .is_some_and(|value| !value.is_absent())
    }

    /// Resolves `name`, distinguishing an empty binding from a missing one.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Lookup<'_, V> {
        match self.bindings.get(&normalize_identifier(name)) {
            None => Lookup::Unbound,
            Some(value) if value.is_absent() => Lookup::Empty,
            Some(value) => Lookup::Bound(value),
        }
    }
}

impl<V> Default for SymbolTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a SymbolTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the bindings of a [`SymbolTable`].
#[derive(Debug)]
pub struct Iter<'a, V> {
    inner: hash_map::Iter<'a, String, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
