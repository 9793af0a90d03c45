//! Configuration for scope chains.

/// What happens when an inner scope declares a name an outer scope holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadowingPolicy {
    /// The inner binding hides the outer one until the scope exits.
    #[default]
    Allow,
    /// The declaration is refused with `ScopeError::Shadowing`.
    Deny,
}

/// Configuration for a [`Scopes`](crate::Scopes) chain.
#[derive(Clone, Debug)]
pub struct ScopeConfig {
    /// Maximum number of live scopes, the global scope included.
    pub max_depth: usize,

    /// How declarations that hide an outer binding are treated.
    pub shadowing: ShadowingPolicy,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            max_depth: 256,
            shadowing: ShadowingPolicy::Allow,
        }
    }
}

impl ScopeConfig {
    /// Creates a configuration that refuses shadowing and caps nesting at 64.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_depth: 64,
            shadowing: ShadowingPolicy::Deny,
        }
    }

    /// Builder method to set the maximum depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder method to set the shadowing policy.
    #[must_use]
    pub fn with_shadowing(mut self, policy: ShadowingPolicy) -> Self {
        self.shadowing = policy;
        self
    }
}
