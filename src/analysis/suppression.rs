//! Scope-based suppression of construction-site checking.

/// The scope paths for which checking is disabled, collected once at
/// session start from assembly-level suppression declarations and immutable
/// afterwards.
///
/// Matching is exact: an entry `Foo.Bar` does not suppress sites in
/// `Foo.Bar.Baz`. Cascading to nested scopes is deliberately not
/// implemented; callers wanting a subtree suppressed declare each scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppressionScope {
    scopes: Vec<String>,
}

impl SuppressionScope {
    /// Creates a suppression list from the collected scope paths, keeping
    /// declaration order.
    #[must_use]
    pub fn new(scopes: Vec<String>) -> Self {
        SuppressionScope { scopes }
    }

    /// Number of declared entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// True when no suppression was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// True iff checking is disabled for sites whose enclosing scope is
    /// exactly `scope_path`.
    ///
    /// An undeterminable enclosing scope is represented by the empty
    /// string, which only matches an explicitly declared empty entry.
    #[must_use]
    pub fn is_suppressed(&self, scope_path: &str) -> bool {
        self.scopes.iter().any(|scope| scope == scope_path)
    }
}
