//! End-to-end seeding tests.
//!
//! These tests drive the run controller and the seeder against the
//! in-memory store, so no database is needed:
//! 1. Register the collections of a run file
//! 2. Clear, create the default record and seed in run order
//! 3. Check document counts and that every reference points at a live document

mod run_file;
mod scenarios;
