//! Core types for doc-seeder.
//!
//! This crate provides the foundational types shared by the generator,
//! the seeding engine and the store implementations:
//!
//! - [`SeedValue`] / [`SeedDocument`] - store-agnostic document values
//! - [`SchemaDescriptor`] - typed field table of a collection
//! - [`FieldSeedSpec`] / [`FieldRefSpec`] - extracted seeding instructions
//! - [`SeedPlan`] - a run plan loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator      (registry, built-in generators, synthesizer)
//!    ├─── seed-engine         (store trait, resolver, orchestrator)
//!    └─── seed-store-mongodb  (SeedValue <-> BSON)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::{extract_ref_fields, extract_seed_fields, SchemaDescriptor};
//!
//! let schema = SchemaDescriptor::from_yaml("Order", r#"
//! number: { seed: words, arg: 2 }
//! customer: { refseed: ONE, ref: User }
//! "#).unwrap();
//!
//! assert_eq!(extract_seed_fields(&schema).len(), 1);
//! assert_eq!(extract_ref_fields(&schema).len(), 1);
//! ```

pub mod extract;
pub mod plan;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use extract::{extract_ref_fields, extract_seed_fields, FieldRefSpec, FieldSeedSpec};
pub use plan::{ClearTarget, DefaultRecord, SeedPlan, SeedRequest};
pub use schema::{
    Cardinality, FieldDescriptor, FieldKind, FieldOptions, FieldType, SchemaDescriptor,
    SchemaError,
};
pub use values::{DocumentId, PersistedDocument, SeedDocument, SeedValue};
