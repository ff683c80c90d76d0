//! Session-scoped requirement cache.

use std::sync::Arc;

use dashmap::DashMap;

use crate::analysis::RequiredFields;
use crate::model::TypeHandle;

/// Concurrent per-session cache of resolved requirement sets, keyed by type
/// identity.
///
/// A stored `None` records "inspected, not marked", so unmarked types are
/// not re-inspected at every construction site either. Values are immutable
/// once stored and shared via [`Arc`].
///
/// # Thread Safety
///
/// Lookups and inserts may race freely between checking threads: resolution
/// is a pure function of symbol data, so when two threads compute the same
/// type independently, the losing insert is discarded in favor of an equal
/// value. [`SessionCache::clear`] is best-effort teardown - safe to call
/// while checks are still completing, at worst forcing a recomputation.
#[derive(Debug, Default)]
pub struct SessionCache {
    entries: DashMap<TypeHandle, Option<Arc<RequiredFields>>>,
}

impl SessionCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        SessionCache {
            entries: DashMap::new(),
        }
    }

    /// The cached resolution for `ty`; the outer `None` is a cache miss.
    #[must_use]
    pub fn get(&self, ty: TypeHandle) -> Option<Option<Arc<RequiredFields>>> {
        self.entries.get(&ty).map(|entry| entry.value().clone())
    }

    /// Stores `resolved` for `ty` unless another thread won the race, and
    /// returns whichever value the cache ends up holding.
    pub fn insert_if_absent(
        &self,
        ty: TypeHandle,
        resolved: Option<Arc<RequiredFields>>,
    ) -> Option<Arc<RequiredFields>> {
        self.entries.entry(ty).or_insert(resolved).value().clone()
    }

    /// Number of distinct types inspected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no type has been inspected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached resolution (end-of-session teardown).
    pub fn clear(&self) {
        self.entries.clear();
    }
}
