//! Run controller: load a plan, prepare the store, then clear and seed.

use anyhow::Context;
use seed_core::{ClearTarget, SeedPlan};
use seed_engine::{
    ClearOutcome, CollectionStatus, CollectionStore, DefaultRecordStatus, MemoryStore,
    SeedReport, Seeder,
};
use seed_generator::GeneratorRegistry;
use seed_store_mongodb::MongoStore;
use std::sync::Arc;

use super::args::{ConnectionArgs, PlanArgs};
use super::logging::{
    format_inventory, log_clear_outcome, log_default_record, log_report, mask_connection_password,
};

/// What a command asks the run controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Clear, create the default record, then seed in run order.
    Run,
    /// Clear only; `None` uses the run file's `clear` setting.
    Clear(Option<ClearTarget>),
    /// Print document counts of the registered collections.
    Status,
}

/// Everything one `run` did.
#[derive(Debug)]
pub struct RunSummary {
    pub cleared: ClearOutcome,
    pub default_record: DefaultRecordStatus,
    pub report: SeedReport,
}

/// Load a run file and apply command-line overrides.
pub fn load_plan(args: &PlanArgs) -> anyhow::Result<SeedPlan> {
    let mut plan = SeedPlan::from_file(&args.config)
        .with_context(|| format!("Failed to load run file from {:?}", args.config))?;
    if args.seed.is_some() {
        plan.seed = args.seed;
    }
    if args.concurrency.is_some() {
        plan.concurrency = args.concurrency;
    }
    Ok(plan)
}

/// Create a seeder over `store` with every collection of `plan` registered.
pub async fn build_seeder<S: CollectionStore>(
    store: S,
    plan: &SeedPlan,
) -> anyhow::Result<Seeder<S>> {
    let registry = Arc::new(GeneratorRegistry::with_builtins());
    let mut seeder = match plan.seed {
        Some(seed) => Seeder::with_seed(store, registry, seed),
        None => Seeder::new(store, registry),
    };
    if let Some(concurrency) = plan.concurrency {
        seeder = seeder.with_concurrency(concurrency);
    }

    seeder
        .register_schemas(plan.collections.iter().cloned())
        .await
        .context("Failed to register collections")?;

    tracing::info!(
        "Registered {} collections: {:?}",
        plan.collections.len(),
        seeder.collection_names()
    );
    Ok(seeder)
}

/// Clear, create the default record, then seed every request in order.
///
/// Failures of individual requests do not stop the run; they are in the
/// returned report.
pub async fn run_plan<S: CollectionStore>(seeder: &Seeder<S>, plan: &SeedPlan) -> RunSummary {
    let cleared = seeder.clear(&plan.clear).await;
    log_clear_outcome(&cleared);

    let default_record = seeder.create_default_record(plan.admin.as_ref()).await;
    log_default_record(&default_record);

    let report = seeder.seed_many(&plan.run).await;
    log_report(&report);

    RunSummary {
        cleared,
        default_record,
        report,
    }
}

/// Document counts of the registered collections.
pub async fn collection_status<S: CollectionStore>(
    seeder: &Seeder<S>,
) -> anyhow::Result<Vec<CollectionStatus>> {
    seeder
        .inventory()
        .await
        .context("Failed to read collection counts")
}

async fn execute<S: CollectionStore>(
    store: S,
    plan: &SeedPlan,
    action: Action,
) -> anyhow::Result<()> {
    let seeder = build_seeder(store, plan).await?;

    match action {
        Action::Run => {
            let summary = run_plan(&seeder, plan).await;
            let failed = summary.report.failures().len();
            if failed > 0 {
                anyhow::bail!(
                    "{} of {} seed requests failed",
                    failed,
                    summary.report.outcomes.len()
                );
            }
        }
        Action::Clear(target) => {
            let target = target.unwrap_or_else(|| plan.clear.clone());
            let outcome = seeder.clear(&target).await;
            log_clear_outcome(&outcome);
        }
        Action::Status => {
            let statuses = collection_status(&seeder).await?;
            print!("{}", format_inventory(&statuses));
        }
    }

    Ok(())
}

/// Entry point for the seeding commands.
pub async fn run_command(
    plan_args: PlanArgs,
    connection: ConnectionArgs,
    action: Action,
) -> anyhow::Result<()> {
    let plan = load_plan(&plan_args)?;

    if connection.dry_run {
        tracing::info!("[DRY-RUN] Using an in-memory store; nothing is written to MongoDB");
        return execute(MemoryStore::new(), &plan, action).await;
    }

    let connection_string = connection
        .mongodb_connection_string
        .context("--mongodb-connection-string is required unless --dry-run is set")?;
    tracing::info!(
        "Connecting to {} (database {})",
        mask_connection_password(&connection_string),
        connection.mongodb_database
    );
    let store = MongoStore::new(&connection_string, &connection.mongodb_database)
        .await
        .context("Failed to connect to MongoDB")?;

    execute(store, &plan, action).await
}
