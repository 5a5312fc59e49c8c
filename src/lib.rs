//! doc-seeder library
//!
//! Seeds a document database with synthetic documents whose reference
//! fields point at records that already exist.
//!
//! # Features
//!
//! - Scalar fields filled by named generators (`email`, `pickOne`, `words`, ...)
//! - Reference fields sampled from live collections, one id or a random-sized list
//! - Bulk seeding in caller order with per-request accounting
//! - Clearing a single collection or every registered one
//! - Reproducible runs from a fixed seed
//!
//! # Workspace Crates
//!
//! - `seed_core` - values, schema descriptors and run files
//! - `seed_generator` - generator registry and document synthesizer
//! - `seed_engine` - store trait, reference resolver and orchestrator
//! - `seed_store_mongodb` - MongoDB store
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed per the run file
//! doc-seeder run --config seed.yaml --mongodb-connection-string mongodb://localhost:27017
//!
//! # Try a run file without a database
//! doc-seeder run --config seed.yaml --dry-run
//!
//! # Clear one collection
//! doc-seeder clear --config seed.yaml --target User --mongodb-connection-string mongodb://...
//! ```

pub mod seed;

pub use seed::{
    build_seeder, collection_status, load_plan, mask_connection_password, run_command, run_plan,
    Action, ConnectionArgs, PlanArgs, RunSummary,
};
