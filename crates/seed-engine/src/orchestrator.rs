//! Seed orchestrator.
//!
//! Drives per-collection seeding: synthesize scalar fields, persist the base
//! documents, then resolve reference fields against live data and persist the
//! merged result. Also provides bulk seeding, clearing and accounting.

use futures::stream::{self, StreamExt, TryStreamExt};
use seed_core::{
    extract_ref_fields, extract_seed_fields, ClearTarget, DefaultRecord, DocumentId,
    FieldRefSpec, FieldSeedSpec, PersistedDocument, SchemaDescriptor, SeedRequest,
};
use seed_generator::{GeneratorRegistry, Synthesizer};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::{SeedError, StoreError};
use crate::resolver::ReferenceResolver;
use crate::store::CollectionStore;

/// Default number of concurrent store writes per batch.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Total synthesize-and-persist attempts per independent document.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Offset applied to the run seed for the resolver's RNG, so the two
/// streams do not mirror each other.
const RESOLVER_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Tunables for a [`Seeder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeederConfig {
    /// Maximum concurrent store calls while persisting a batch
    pub concurrency: usize,
    /// Attempts per independent document before `RetryExhausted`
    pub max_attempts: u32,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Phase of a single `seed` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedState {
    Idle,
    ScalarSeeding,
    RefResolving,
    Persisted,
    Done,
    Failed,
}

impl fmt::Display for SeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeedState::Idle => "idle",
            SeedState::ScalarSeeding => "scalar-seeding",
            SeedState::RefResolving => "ref-resolving",
            SeedState::Persisted => "persisted",
            SeedState::Done => "done",
            SeedState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Result of one request in [`Seeder::seed_many`].
#[derive(Debug)]
pub struct SeedOutcome {
    pub collection: String,
    pub requested: u64,
    pub result: Result<Vec<DocumentId>, SeedError>,
    pub elapsed: Duration,
}

impl SeedOutcome {
    /// Number of documents this request added (0 on failure).
    pub fn created(&self) -> u64 {
        self.result.as_ref().map_or(0, |ids| ids.len() as u64)
    }
}

/// Accounting for a whole [`Seeder::seed_many`] call.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub outcomes: Vec<SeedOutcome>,
    pub elapsed: Duration,
}

impl SeedReport {
    pub fn total_created(&self) -> u64 {
        self.outcomes.iter().map(SeedOutcome::created).sum()
    }

    /// Requests that failed, in caller order.
    pub fn failures(&self) -> Vec<&SeedOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err()).collect()
    }
}

/// Deleted-document count for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearedCollection {
    pub name: String,
    pub deleted: u64,
}

/// Result of [`Seeder::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Nothing was requested; the store was not touched.
    None,
    Collection(ClearedCollection),
    All(Vec<ClearedCollection>),
}

impl ClearOutcome {
    pub fn total(&self) -> u64 {
        match self {
            ClearOutcome::None => 0,
            ClearOutcome::Collection(c) => c.deleted,
            ClearOutcome::All(cs) => cs.iter().map(|c| c.deleted).sum(),
        }
    }
}

/// What happened to the default privileged record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultRecordStatus {
    Loaded(DocumentId),
    NotSaved,
    NotSet,
}

impl fmt::Display for DefaultRecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultRecordStatus::Loaded(id) => write!(f, "loaded ({id})"),
            DefaultRecordStatus::NotSaved => f.write_str("not saved"),
            DefaultRecordStatus::NotSet => f.write_str("not set"),
        }
    }
}

/// Document count of a registered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStatus {
    pub name: String,
    pub exists: bool,
    pub count: u64,
}

/// Seeds registered collections into a [`CollectionStore`].
pub struct Seeder<S: CollectionStore> {
    store: S,
    synthesizer: Synthesizer,
    resolver: ReferenceResolver,
    schemas: Vec<SchemaDescriptor>,
    config: SeederConfig,
}

impl<S: CollectionStore> Seeder<S> {
    /// Create a seeder with entropy-seeded randomness.
    pub fn new(store: S, registry: Arc<GeneratorRegistry>) -> Self {
        Self {
            store,
            synthesizer: Synthesizer::new(registry),
            resolver: ReferenceResolver::new(),
            schemas: Vec::new(),
            config: SeederConfig::default(),
        }
    }

    /// Create a seeder whose generated values and samples are reproducible.
    pub fn with_seed(store: S, registry: Arc<GeneratorRegistry>, seed: u64) -> Self {
        Self {
            store,
            synthesizer: Synthesizer::with_seed(registry, seed),
            resolver: ReferenceResolver::with_seed(seed.wrapping_add(RESOLVER_SEED_OFFSET)),
            schemas: Vec::new(),
            config: SeederConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SeederConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency.max(1);
        self
    }

    pub fn config(&self) -> &SeederConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a schema, replacing any schema of the same name.
    pub async fn register_schema(&mut self, schema: SchemaDescriptor) -> Result<(), SeedError> {
        self.store.ensure_schema(&schema).await?;

        for name in self.synthesizer.unresolved(&extract_seed_fields(&schema)) {
            warn!(
                "Collection '{}' uses unknown generator '{}'; the field will be omitted",
                schema.name(),
                name
            );
        }

        match self.schemas.iter_mut().find(|s| s.name() == schema.name()) {
            Some(existing) => *existing = schema,
            None => self.schemas.push(schema),
        }
        Ok(())
    }

    pub async fn register_schemas(
        &mut self,
        schemas: impl IntoIterator<Item = SchemaDescriptor>,
    ) -> Result<(), SeedError> {
        for schema in schemas {
            self.register_schema(schema).await?;
        }
        Ok(())
    }

    pub fn schema(&self, collection: &str) -> Option<&SchemaDescriptor> {
        self.schemas.iter().find(|s| s.name() == collection)
    }

    /// Registered collection names, in registration order.
    pub fn collection_names(&self) -> Vec<&str> {
        self.schemas.iter().map(SchemaDescriptor::name).collect()
    }

    /// Seed `count` documents into `collection`, returning their identifiers.
    ///
    /// Collections without reference fields persist each document
    /// independently with retries. Collections with reference fields
    /// persist the base documents first, then sample the referenced
    /// collections and update every document with the resolved fields.
    pub async fn seed(&self, collection: &str, count: u64) -> Result<Vec<DocumentId>, SeedError> {
        let schema = self
            .schema(collection)
            .ok_or_else(|| SeedError::UnknownCollection(collection.to_string()))?;

        debug!("{}: {}", collection, SeedState::Idle);
        if count == 0 {
            debug!("{}: {}", collection, SeedState::Done);
            return Ok(Vec::new());
        }

        let seed_specs = extract_seed_fields(schema);
        let ref_specs = extract_ref_fields(schema);

        let result = if ref_specs.is_empty() {
            self.seed_independent(collection, &seed_specs, count).await
        } else {
            self.seed_with_refs(collection, &seed_specs, &ref_specs, count)
                .await
        };

        match &result {
            Ok(_) => debug!("{}: {}", collection, SeedState::Done),
            Err(e) => debug!("{}: {} ({})", collection, SeedState::Failed, e),
        }
        result
    }

    async fn seed_independent(
        &self,
        collection: &str,
        seed_specs: &[FieldSeedSpec],
        count: u64,
    ) -> Result<Vec<DocumentId>, SeedError> {
        debug!("{}: {}", collection, SeedState::ScalarSeeding);
        let ids: Vec<DocumentId> = stream::iter(0..count)
            .map(|_| self.seed_one(collection, seed_specs))
            .buffered(self.config.concurrency.max(1))
            .map_ok(|persisted| persisted.id)
            .try_collect()
            .await?;
        debug!("{}: {}", collection, SeedState::Persisted);
        Ok(ids)
    }

    async fn seed_with_refs(
        &self,
        collection: &str,
        seed_specs: &[FieldSeedSpec],
        ref_specs: &[FieldRefSpec],
        count: u64,
    ) -> Result<Vec<DocumentId>, SeedError> {
        debug!("{}: {}", collection, SeedState::ScalarSeeding);
        let base = self.synthesizer.synthesize_many(seed_specs, count);
        let persisted = self.store.create_many(collection, base).await?;

        debug!("{}: {}", collection, SeedState::RefResolving);
        let ids = stream::iter(persisted)
            .map(|document| self.resolve_and_update(collection, ref_specs, document))
            .buffered(self.config.concurrency.max(1))
            .try_collect()
            .await?;
        debug!("{}: {}", collection, SeedState::Persisted);
        Ok(ids)
    }

    async fn resolve_and_update(
        &self,
        collection: &str,
        ref_specs: &[FieldRefSpec],
        document: PersistedDocument,
    ) -> Result<DocumentId, SeedError> {
        let patch = self.resolver.resolve_refs(ref_specs, &self.store).await?;
        let updated = self.store.update(collection, &document.id, patch).await?;
        Ok(updated.id)
    }

    /// Synthesize and persist one document, retrying with fresh values.
    ///
    /// Fails with [`SeedError::RetryExhausted`] after `max_attempts` store
    /// failures.
    pub async fn seed_one(
        &self,
        collection: &str,
        seed_specs: &[FieldSeedSpec],
    ) -> Result<PersistedDocument, SeedError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let document = self.synthesizer.synthesize_one(seed_specs);

            match self.store.create(collection, document).await {
                Ok(persisted) => return Ok(persisted),
                Err(e) if attempt < max_attempts => {
                    warn!(
                        "Attempt {}/{} to seed '{}' failed: {}",
                        attempt, max_attempts, collection, e
                    );
                }
                Err(e) => {
                    return Err(SeedError::RetryExhausted {
                        collection: collection.to_string(),
                        attempts: attempt,
                        source: e,
                    });
                }
            }
        }
    }

    /// Run every request in caller order, isolating failures per request.
    pub async fn seed_many(&self, requests: &[SeedRequest]) -> SeedReport {
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(requests.len());

        for request in requests {
            let request_start = Instant::now();
            let result = self.seed(&request.collection, request.count).await;
            let elapsed = request_start.elapsed();

            match &result {
                Ok(ids) => info!(
                    "{} {}s added in {} ms",
                    ids.len(),
                    request.collection,
                    elapsed.as_millis()
                ),
                Err(e) => warn!(
                    "Error seeding {} - 0 added: {}",
                    request.collection, e
                ),
            }

            outcomes.push(SeedOutcome {
                collection: request.collection.clone(),
                requested: request.count,
                result,
                elapsed,
            });
        }

        let elapsed = start.elapsed();
        info!("Seeding completed in {} ms", elapsed.as_millis());
        SeedReport { outcomes, elapsed }
    }

    /// Delete documents per `target`. Never fails; a failed deletion
    /// counts as zero and is logged.
    pub async fn clear(&self, target: &ClearTarget) -> ClearOutcome {
        match target {
            ClearTarget::None => ClearOutcome::None,
            ClearTarget::Collection(name) => ClearOutcome::Collection(self.clear_collection(name).await),
            ClearTarget::All => {
                let mut cleared = Vec::with_capacity(self.schemas.len());
                for schema in &self.schemas {
                    cleared.push(self.clear_collection(schema.name()).await);
                }
                ClearOutcome::All(cleared)
            }
        }
    }

    async fn clear_collection(&self, name: &str) -> ClearedCollection {
        let deleted = match self.store.delete_all(name).await {
            Ok(deleted) => {
                info!("{} {}s deleted", deleted, name);
                deleted
            }
            Err(e) => {
                warn!("Error clearing {}: {}", name, e);
                0
            }
        };
        ClearedCollection {
            name: name.to_string(),
            deleted,
        }
    }

    /// Insert the default privileged record, if any.
    ///
    /// Without an explicit collection the record goes to the first
    /// registered collection. Failures are logged and reported as
    /// [`DefaultRecordStatus::NotSaved`].
    pub async fn create_default_record(
        &self,
        record: Option<&DefaultRecord>,
    ) -> DefaultRecordStatus {
        let Some(record) = record else {
            return DefaultRecordStatus::NotSet;
        };

        let collection = match record.collection.as_deref() {
            Some(name) => name,
            None => match self.schemas.first() {
                Some(schema) => schema.name(),
                None => {
                    warn!("Default record not saved: no collection is registered");
                    return DefaultRecordStatus::NotSaved;
                }
            },
        };

        match self.store.create(collection, record.record.clone()).await {
            Ok(persisted) => {
                info!("Default record loaded into {}", collection);
                DefaultRecordStatus::Loaded(persisted.id)
            }
            Err(e) => {
                warn!("Default record not saved into {}: {}", collection, e);
                DefaultRecordStatus::NotSaved
            }
        }
    }

    /// Document counts of every registered collection.
    pub async fn inventory(&self) -> Result<Vec<CollectionStatus>, StoreError> {
        let existing = self.store.list_collection_names().await?;
        let mut statuses = Vec::with_capacity(self.schemas.len());

        for schema in &self.schemas {
            let name = schema.name();
            let exists = existing.iter().any(|n| n == name);
            let count = if exists { self.store.count(name).await? } else { 0 };
            statuses.push(CollectionStatus {
                name: name.to_string(),
                exists,
                count,
            });
        }

        Ok(statuses)
    }
}

impl<S: CollectionStore + fmt::Debug> fmt::Debug for Seeder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seeder")
            .field("store", &self.store)
            .field("collections", &self.collection_names())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
