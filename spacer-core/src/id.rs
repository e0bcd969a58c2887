//! Content-keyed identifier allocation.

use std::collections::HashMap;

use crate::ElementId;

/// Maps a semantic key to a stable id.
///
/// The first request for a key mints a fresh id; every later request
/// returns the same one. One cache lives in each [`Scene`](crate::Scene),
/// so ids are stable for the lifetime of that scene only.
#[derive(Debug, Clone, Default)]
pub struct Identifier {
    cache: HashMap<String, ElementId>,
}

impl Identifier {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id issued for `key`, minting one if this key is new.
    pub fn next(&mut self, key: &str) -> ElementId {
        if let Some(id) = self.cache.get(key) {
            return *id;
        }
        let id = ElementId::new();
        self.cache.insert(key.to_owned(), id);
        id
    }

    /// The id issued for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<ElementId> {
        self.cache.get(key).copied()
    }

    /// Number of keys seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no key has been seen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
