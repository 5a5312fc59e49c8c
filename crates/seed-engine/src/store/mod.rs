//! Collection store abstraction.
//!
//! The engine talks to the database only through [`CollectionStore`].
//! `seed-store-mongodb` implements it for MongoDB and [`MemoryStore`]
//! keeps everything in process.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use seed_core::{DocumentId, PersistedDocument, SchemaDescriptor, SeedDocument};

use crate::error::StoreError;

/// Trait for reading and writing documents of named collections.
///
/// Implementations inherit whatever consistency the backend offers; the
/// engine never holds locks across calls.
///
/// # Usage Pattern
///
/// The engine is generic over the store so calls are statically dispatched:
///
/// ```ignore
/// let seeder = Seeder::new(MongoStore::new(database), registry);
/// seeder.seed("User", 300).await?;
/// ```
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Prepare a collection for a registered schema (e.g. unique indexes).
    async fn ensure_schema(&self, _schema: &SchemaDescriptor) -> Result<(), StoreError> {
        Ok(())
    }

    /// Insert one document and return it with its new identifier.
    async fn create(
        &self,
        collection: &str,
        document: SeedDocument,
    ) -> Result<PersistedDocument, StoreError>;

    /// Insert documents in order. Documents inserted before a failure remain.
    async fn create_many(
        &self,
        collection: &str,
        documents: Vec<SeedDocument>,
    ) -> Result<Vec<PersistedDocument>, StoreError>;

    /// Approximate number of documents in the collection.
    async fn count(&self, collection: &str) -> Result<u64, StoreError>;

    /// Identifiers after skipping `offset` documents, at most `limit` of them.
    async fn find_identifiers_at(
        &self,
        collection: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<DocumentId>, StoreError>;

    /// Set the fields of `patch` on a document and return the updated document.
    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        patch: SeedDocument,
    ) -> Result<PersistedDocument, StoreError>;

    /// Delete every document in the collection, returning how many were deleted.
    async fn delete_all(&self, collection: &str) -> Result<u64, StoreError>;

    /// Names of the collections that currently exist.
    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}
