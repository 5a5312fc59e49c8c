//! Seeding command handlers.
//!
//! This module contains the argument definitions, logging helpers and the
//! run controller behind the `run`, `clear` and `status` commands.

pub mod args;
pub mod logging;
pub mod run;

pub use args::{ConnectionArgs, PlanArgs};
pub use logging::mask_connection_password;
pub use run::{build_seeder, collection_status, load_plan, run_command, run_plan, Action, RunSummary};
