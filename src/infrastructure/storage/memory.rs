//! In-memory record store
//!
//! Append-and-scan collection, one instance per resource type, shared
//! across all request tasks. A single `RwLock` guards the vector:
//! appends are atomic and a reader observes a full entity or none.

use std::sync::RwLock;

use crate::domain::{DomainError, DomainResult, Resource};

/// Insertion-ordered in-memory collection keyed by identifier.
pub struct InMemoryStore<T: Resource> {
    records: RwLock<Vec<T>>,
}

impl<T: Resource> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Add an entity. Fails only if the identifier is already present.
    pub fn append(&self, entity: T) -> DomainResult<()> {
        let mut records = self.records.write().expect("record store lock poisoned");
        if records.iter().any(|r| r.id() == entity.id()) {
            return Err(DomainError::Conflict(format!(
                "{} {}",
                T::KIND,
                entity.id()
            )));
        }
        records.push(entity);
        Ok(())
    }

    /// Every stored entity in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.records
            .read()
            .expect("record store lock poisoned")
            .clone()
    }

    /// The entity with a matching identifier, if any. Absence is a
    /// normal outcome, not an error.
    pub fn find_by_id(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .expect("record store lock poisoned")
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().expect("record store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Resource> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: String,
        label: String,
    }

    impl Resource for Widget {
        const KIND: &'static str = "Widget";

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn widget(id: &str, label: &str) -> Widget {
        Widget {
            id: id.into(),
            label: label.into(),
        }
    }

    #[test]
    fn append_then_find() {
        let store = InMemoryStore::new();
        store.append(widget("a", "first")).unwrap();

        let found = store.find_by_id("a").unwrap();
        assert_eq!(found.label, "first");
    }

    #[test]
    fn find_on_empty_store_is_none() {
        let store: InMemoryStore<Widget> = InMemoryStore::new();
        assert!(store.find_by_id("anything").is_none());
    }

    #[test]
    fn all_preserves_insertion_order() {
        let store = InMemoryStore::new();
        store.append(widget("a", "first")).unwrap();
        store.append(widget("b", "second")).unwrap();
        store.append(widget("c", "third")).unwrap();

        let ids: Vec<String> = store.all().into_iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn all_on_empty_store_is_empty() {
        let store: InMemoryStore<Widget> = InMemoryStore::new();
        assert!(store.all().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_identifier_is_rejected() {
        let store = InMemoryStore::new();
        store.append(widget("a", "first")).unwrap();

        let err = store.append(widget("a", "again")).unwrap_err();
        assert_eq!(err, DomainError::Conflict("Widget a".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_appends_land_intact() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for j in 0..50 {
                        store
                            .append(widget(&format!("{}-{}", i, j), "w"))
                            .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.len(), 400);
    }
}
