//! Document synthesizer: scalar-seed specs to documents.

use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_core::{FieldSeedSpec, SeedDocument};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;

use crate::registry::GeneratorRegistry;

/// Produces documents by invoking registry generators per field.
///
/// The RNG is seeded from entropy by default; [`Synthesizer::with_seed`]
/// gives reproducible output for the same sequence of calls.
pub struct Synthesizer {
    registry: Arc<GeneratorRegistry>,
    rng: Mutex<StdRng>,
}

impl Synthesizer {
    pub fn new(registry: Arc<GeneratorRegistry>) -> Self {
        Self {
            registry,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(registry: Arc<GeneratorRegistry>, seed: u64) -> Self {
        Self {
            registry,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Generate one document with one key per resolvable spec.
    ///
    /// Fields whose generator is not registered are omitted and logged.
    pub fn synthesize_one(&self, specs: &[FieldSeedSpec]) -> SeedDocument {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let mut document = SeedDocument::new();

        for spec in specs {
            match self.registry.resolve(&spec.generator_name) {
                Ok(generator) => {
                    let value = generator.generate(&mut *rng, spec.generator_arg.as_ref());
                    document.insert(spec.field_name.clone(), value);
                }
                Err(e) => {
                    warn!("Skipping field '{}': {}", spec.field_name, e);
                }
            }
        }

        document
    }

    /// Generate `count` independent documents.
    pub fn synthesize_many(&self, specs: &[FieldSeedSpec], count: u64) -> Vec<SeedDocument> {
        (0..count).map(|_| self.synthesize_one(specs)).collect()
    }

    /// Generator names used by `specs` that the registry cannot resolve.
    pub fn unresolved<'a>(&self, specs: &'a [FieldSeedSpec]) -> Vec<&'a str> {
        specs
            .iter()
            .filter(|spec| !self.registry.contains(&spec.generator_name))
            .map(|spec| spec.generator_name.as_str())
            .collect()
    }
}

impl std::fmt::Debug for Synthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synthesizer")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
