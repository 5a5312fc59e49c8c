//! Value generation for doc-seeder.
//!
//! This crate provides the [`GeneratorRegistry`] (generator name → value
//! generator) and the [`Synthesizer`], which turns the scalar-seed fields of
//! a schema into documents.
//!
//! # Architecture
//!
//! ```text
//! FieldSeedSpec[]
//!        │
//!        ▼
//! ┌──────────────────┐      ┌───────────────────┐
//! │   Synthesizer    │─────▶│ GeneratorRegistry │
//! │  - rng (StdRng)  │      │  name → generator │
//! └────────┬─────────┘      └───────────────────┘
//!          │
//!          ▼
//!    SeedDocument { field → SeedValue }
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::{extract_seed_fields, SchemaDescriptor};
//! use seed_generator::{GeneratorRegistry, Synthesizer};
//! use std::sync::Arc;
//!
//! let schema = SchemaDescriptor::from_yaml("User", "email: { seed: email }").unwrap();
//! let synthesizer = Synthesizer::with_seed(Arc::new(GeneratorRegistry::with_builtins()), 42);
//!
//! let doc = synthesizer.synthesize_one(&extract_seed_fields(&schema));
//! assert!(doc.get("email").is_some());
//! ```
//!
//! # Generators
//!
//! - `email` - `{FirstName}{100-999}@example.com` (string `arg` overrides the domain)
//! - `phone` - ten-digit phone number
//! - `firstName`, `firstMen`, `firstWomen`, `lastName`, `fullName`
//! - `husbandAndWife` - `[husband, wife, last name]`
//! - `words` - `arg` words separated by spaces
//! - `password` - eight characters built from words
//! - `fileName` - `<letters>.<jpg|pdf|png>`
//! - `pickOne` - one element of the `enum`/`arg` list
//! - `static` - the `arg` itself
//! - `intRange`, `floatRange` - number in `arg` `[min, max]`
//! - `bool` - `true` with probability `arg`
//! - `pattern` - `arg` with `{uuid}`, `{word}`, `{rand:N}` expanded
//! - `uuid` - UUID v4 string
//! - `dateRange`, `now` - timestamps

pub mod generators;
pub mod registry;
pub mod synthesizer;

// Re-exports for convenience
pub use registry::{GeneratorError, GeneratorRegistry, ValueGenerator};
pub use synthesizer::Synthesizer;
