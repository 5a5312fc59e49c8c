//! Reference resolution by random-offset sampling.
//!
//! Identifiers are sampled with one count query and one skip/limit query,
//! so memory use does not grow with the size of the referenced collection.
//! The two queries are not a snapshot; concurrent writers can make the count
//! stale, which is tolerated.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::{Cardinality, DocumentId, FieldRefSpec, SeedDocument, SeedValue};
use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

use crate::error::SeedError;
use crate::store::CollectionStore;

/// Samples identifiers from referenced collections.
pub struct ReferenceResolver {
    rng: Mutex<StdRng>,
}

impl Default for ReferenceResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceResolver {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn draw(&self, range: RangeInclusive<u64>) -> u64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(range)
    }

    /// One identifier at a uniform random offset.
    ///
    /// Fails with [`SeedError::EmptyCollection`] when the target is empty.
    pub async fn resolve_one_ref<S>(&self, store: &S, target: &str) -> Result<DocumentId, SeedError>
    where
        S: CollectionStore + ?Sized,
    {
        let size = store.count(target).await?;
        if size == 0 {
            return Err(SeedError::EmptyCollection(target.to_string()));
        }

        let offset = self.draw(0..=size - 1);
        let mut ids = store.find_identifiers_at(target, offset, 1).await?;
        if ids.is_empty() && offset > 0 {
            // The count was stale (documents deleted since); fall back to the first one.
            debug!("No document at offset {} in '{}', retrying at 0", offset, target);
            ids = store.find_identifiers_at(target, 0, 1).await?;
        }

        ids.into_iter()
            .next()
            .ok_or_else(|| SeedError::EmptyCollection(target.to_string()))
    }

    /// Up to `count` consecutive identifiers starting at one random offset.
    ///
    /// This is a single scan, not `count` independent draws. The offset is
    /// drawn from `[0, size - min(count, size)]`, so when `count <= size`
    /// exactly `count` identifiers come back.
    pub async fn resolve_many_refs<S>(
        &self,
        store: &S,
        target: &str,
        count: u64,
    ) -> Result<Vec<DocumentId>, SeedError>
    where
        S: CollectionStore + ?Sized,
    {
        if count == 0 {
            return Ok(Vec::new());
        }

        let size = store.count(target).await?;
        if size == 0 {
            return Err(SeedError::EmptyCollection(target.to_string()));
        }

        let window = count.min(size);
        let offset = self.draw(0..=size - window);
        Ok(store.find_identifiers_at(target, offset, count).await?)
    }

    /// Resolve every reference spec, in order, into a patch document.
    pub async fn resolve_refs<S>(
        &self,
        specs: &[FieldRefSpec],
        store: &S,
    ) -> Result<SeedDocument, SeedError>
    where
        S: CollectionStore + ?Sized,
    {
        let mut patch = SeedDocument::new();

        for spec in specs {
            let value = match spec.cardinality {
                Cardinality::One => {
                    SeedValue::Id(self.resolve_one_ref(store, &spec.referenced_collection).await?)
                }
                Cardinality::Range { min, max } => {
                    let count = self.draw(u64::from(min)..=u64::from(max));
                    let ids = self
                        .resolve_many_refs(store, &spec.referenced_collection, count)
                        .await?;
                    SeedValue::from(ids)
                }
            };
            patch.insert(spec.field_name.clone(), value);
        }

        Ok(patch)
    }

    /// Resolve every reference spec and merge the results into `document`.
    pub async fn resolve_all_refs<S>(
        &self,
        mut document: SeedDocument,
        specs: &[FieldRefSpec],
        store: &S,
    ) -> Result<SeedDocument, SeedError>
    where
        S: CollectionStore + ?Sized,
    {
        let patch = self.resolve_refs(specs, store).await?;
        document.merge(patch);
        Ok(document)
    }
}
