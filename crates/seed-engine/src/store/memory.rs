//! In-process collection store.
//!
//! Used for dry runs and tests. Documents keep insertion order, which is
//! the order `find_identifiers_at` skips through.

use async_trait::async_trait;
use seed_core::{DocumentId, PersistedDocument, SchemaDescriptor, SeedDocument};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::CollectionStore;
use crate::error::StoreError;

#[derive(Debug, Default)]
struct MemoryState {
    collections: BTreeMap<String, Vec<PersistedDocument>>,
    unique_fields: HashMap<String, Vec<String>>,
    next_id: u64,
}

impl MemoryState {
    fn insert(
        &mut self,
        collection: &str,
        document: SeedDocument,
    ) -> Result<PersistedDocument, StoreError> {
        let existing = self.collections.get(collection).map(Vec::as_slice).unwrap_or(&[]);
        if let Some(fields) = self.unique_fields.get(collection) {
            for field in fields {
                let Some(value) = document.get(field) else {
                    continue;
                };
                if existing.iter().any(|d| d.document.get(field) == Some(value)) {
                    return Err(StoreError::DuplicateKey {
                        collection: collection.to_string(),
                        field: field.clone(),
                    });
                }
            }
        }

        self.next_id += 1;
        let persisted = PersistedDocument::new(
            DocumentId::new(format!("{:024x}", self.next_id)),
            document,
        );
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(persisted.clone());
        Ok(persisted)
    }
}

/// A [`CollectionStore`] backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enforce uniqueness of `field` on future inserts into `collection`.
    pub fn add_unique_field(&self, collection: &str, field: &str) {
        let mut state = self.state();
        let fields = state.unique_fields.entry(collection.to_string()).or_default();
        if !fields.iter().any(|f| f == field) {
            fields.push(field.to_string());
        }
    }

    /// Every document of a collection, in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<PersistedDocument> {
        self.state()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Every identifier of a collection, in insertion order.
    pub fn ids(&self, collection: &str) -> Vec<DocumentId> {
        self.state()
            .collections
            .get(collection)
            .map(|docs| docs.iter().map(|d| d.id.clone()).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn ensure_schema(&self, schema: &SchemaDescriptor) -> Result<(), StoreError> {
        for field in schema.unique_fields() {
            self.add_unique_field(schema.name(), field);
        }
        Ok(())
    }

    async fn create(
        &self,
        collection: &str,
        document: SeedDocument,
    ) -> Result<PersistedDocument, StoreError> {
        self.state().insert(collection, document)
    }

    async fn create_many(
        &self,
        collection: &str,
        documents: Vec<SeedDocument>,
    ) -> Result<Vec<PersistedDocument>, StoreError> {
        let mut state = self.state();
        documents
            .into_iter()
            .map(|document| state.insert(collection, document))
            .collect()
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        Ok(self
            .state()
            .collections
            .get(collection)
            .map_or(0, |docs| docs.len() as u64))
    }

    async fn find_identifiers_at(
        &self,
        collection: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<DocumentId>, StoreError> {
        let state = self.state();
        let Some(docs) = state.collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|d| d.id.clone())
            .collect())
    }

    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        patch: SeedDocument,
    ) -> Result<PersistedDocument, StoreError> {
        let mut state = self.state();
        let document = state
            .collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| &d.id == id))
            .ok_or_else(|| StoreError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.clone(),
            })?;
        document.document.merge(patch);
        Ok(document.clone())
    }

    async fn delete_all(&self, collection: &str) -> Result<u64, StoreError> {
        Ok(self
            .state()
            .collections
            .get_mut(collection)
            .map_or(0, |docs| docs.drain(..).count() as u64))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.state().collections.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_core::SeedValue;

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store
                .create("User", SeedDocument::new().with("n", SeedValue::Int(i)))
                .await
                .unwrap();
        }

        assert_eq!(store.count("User").await.unwrap(), 5);
        let ids = store.find_identifiers_at("User", 3, 10).await.unwrap();
        assert_eq!(ids, store.ids("User")[3..].to_vec());
        assert!(store
            .find_identifiers_at("Missing", 0, 1)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_unique_field_conflict() {
        let store = MemoryStore::new();
        let schema =
            SchemaDescriptor::from_yaml("User", "email: { seed: email, unique: true }").unwrap();
        store.ensure_schema(&schema).await.unwrap();

        let doc = SeedDocument::new().with("email", "a@example.com");
        store.create("User", doc.clone()).await.unwrap();
        let result = store.create("User", doc).await;

        assert!(matches!(result, Err(StoreError::DuplicateKey { field, .. }) if field == "email"));
        assert_eq!(store.count("User").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_merges_patch() {
        let store = MemoryStore::new();
        let created = store
            .create("Order", SeedDocument::new().with("number", "A-1"))
            .await
            .unwrap();

        let updated = store
            .update(
                "Order",
                &created.id,
                SeedDocument::new().with("customer", DocumentId::new("u1")),
            )
            .await
            .unwrap();

        assert_eq!(updated.document.len(), 2);
        assert_eq!(store.documents("Order")[0], updated);

        let missing = store
            .update("Order", &DocumentId::new("nope"), SeedDocument::new())
            .await;
        assert!(matches!(missing, Err(StoreError::DocumentNotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_all_is_idempotent() {
        let store = MemoryStore::new();
        store
            .create_many("Tag", vec![SeedDocument::new(), SeedDocument::new()])
            .await
            .unwrap();

        assert_eq!(store.delete_all("Tag").await.unwrap(), 2);
        assert_eq!(store.delete_all("Tag").await.unwrap(), 0);
        assert_eq!(store.delete_all("Never").await.unwrap(), 0);
        assert_eq!(store.list_collection_names().await.unwrap(), vec!["Tag"]);
    }
}
