//! Error types for the seeding engine.

use seed_core::DocumentId;
use thiserror::Error;

/// Errors raised by a [`CollectionStore`](crate::CollectionStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Update target does not exist.
    #[error("Document '{id}' not found in collection '{collection}'")]
    DocumentNotFound {
        collection: String,
        id: DocumentId,
    },

    /// A unique field already holds this value.
    #[error("Duplicate value for unique field '{field}' in collection '{collection}'")]
    DuplicateKey { collection: String, field: String },

    /// Value cannot be represented by the backend.
    #[error("Unsupported value for field '{field}': {message}")]
    UnsupportedValue { field: String, message: String },

    /// Driver, connection or query error from the backend.
    #[error("Store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap any backend error.
    pub fn backend(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::Backend(Box::new(e))
    }
}

/// Errors that can occur while seeding.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Collection has no registered schema.
    #[error("Collection '{0}' is not registered")]
    UnknownCollection(String),

    /// Reference target holds no documents to sample.
    #[error("Cannot resolve reference: collection '{0}' is empty")]
    EmptyCollection(String),

    /// Every synthesize-and-persist attempt failed.
    #[error("Seeding '{collection}' failed after {attempts} attempts: {source}")]
    RetryExhausted {
        collection: String,
        attempts: u32,
        #[source]
        source: StoreError,
    },

    /// Store error outside a retry path.
    #[error(transparent)]
    Store(#[from] StoreError),
}
