//! Seed-graph resolution engine for doc-seeder.
//!
//! This crate provides:
//!
//! - [`CollectionStore`] - the persistence contract the engine is written against
//! - [`MemoryStore`] - an in-process store for dry runs and tests
//! - [`ReferenceResolver`] - samples identifiers from referenced collections
//! - [`Seeder`] - per-collection and bulk seeding, clearing and accounting
//!
//! # Architecture
//!
//! ```text
//!  SeedRequest[]
//!       │
//!       ▼
//! ┌─────────────┐  scalar fields   ┌─────────────┐
//! │   Seeder    │─────────────────▶│ Synthesizer │
//! │             │                  └─────────────┘
//! │             │  create / update ┌─────────────────┐
//! │             │─────────────────▶│ CollectionStore │
//! │             │                  └────────▲────────┘
//! │             │  ref fields      ┌────────┴─────────┐
//! │             │─────────────────▶│ ReferenceResolver│
//! └─────────────┘                  │ count + skip/take│
//!                                  └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use seed_core::SchemaDescriptor;
//! use seed_engine::{MemoryStore, Seeder};
//! use seed_generator::GeneratorRegistry;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut seeder = Seeder::new(MemoryStore::new(), Arc::new(GeneratorRegistry::with_builtins()));
//! seeder
//!     .register_schema(SchemaDescriptor::from_yaml("User", "email: { seed: email }")?)
//!     .await?;
//! seeder
//!     .register_schema(SchemaDescriptor::from_yaml("Order", "customer: { refseed: ONE, ref: User }")?)
//!     .await?;
//!
//! seeder.seed("User", 300).await?;
//! seeder.seed("Order", 1000).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod orchestrator;
pub mod resolver;
pub mod store;

// Re-exports for convenience
pub use error::{SeedError, StoreError};
pub use orchestrator::{
    ClearOutcome, ClearedCollection, CollectionStatus, DefaultRecordStatus, SeedOutcome,
    SeedReport, SeedState, Seeder, SeederConfig, DEFAULT_CONCURRENCY, DEFAULT_MAX_ATTEMPTS,
};
pub use resolver::ReferenceResolver;
pub use store::{CollectionStore, MemoryStore};
