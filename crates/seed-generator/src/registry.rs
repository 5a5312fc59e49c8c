//! Generator registry: symbolic generator names to value generators.
//!
//! The registry is an explicit value handed to the [`Synthesizer`](crate::Synthesizer);
//! there is no global lookup.

use rand::RngCore;
use seed_core::SeedValue;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::generators;

/// Error type for registry lookups.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// No generator is registered under this name
    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),
}

/// A value generator.
///
/// `arg` carries the field's generator argument: the enumerated values for
/// `enum` fields, or whatever `arg` the schema declares.
pub trait ValueGenerator: Send + Sync {
    fn generate(&self, rng: &mut dyn RngCore, arg: Option<&SeedValue>) -> SeedValue;
}

impl<F> ValueGenerator for F
where
    F: Fn(&mut dyn RngCore, Option<&SeedValue>) -> SeedValue + Send + Sync,
{
    fn generate(&self, rng: &mut dyn RngCore, arg: Option<&SeedValue>) -> SeedValue {
        self(rng, arg)
    }
}

/// Maps generator names to generators.
#[derive(Clone, Default)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn ValueGenerator>>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in generator registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        generators::register_builtins(&mut registry);
        registry
    }

    /// Register a function or closure under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, generator: F) -> &mut Self
    where
        F: Fn(&mut dyn RngCore, Option<&SeedValue>) -> SeedValue + Send + Sync + 'static,
    {
        self.generators.insert(name.into(), Arc::new(generator));
        self
    }

    /// Register a shared generator under `name`, replacing any previous entry.
    pub fn register_generator(
        &mut self,
        name: impl Into<String>,
        generator: Arc<dyn ValueGenerator>,
    ) -> &mut Self {
        self.generators.insert(name.into(), generator);
        self
    }

    /// Look up a generator by name.
    pub fn resolve(&self, name: &str) -> Result<&dyn ValueGenerator, GeneratorError> {
        self.generators
            .get(name)
            .map(|g| g.as_ref())
            .ok_or_else(|| GeneratorError::UnknownGenerator(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_register_and_resolve() {
        let mut registry = GeneratorRegistry::new();
        registry.register("answer", |_rng: &mut dyn RngCore, _arg: Option<&SeedValue>| {
            SeedValue::Int(42)
        });

        let mut rng = StdRng::seed_from_u64(42);
        let generator = registry.resolve("answer").unwrap();
        assert_eq!(generator.generate(&mut rng, None), SeedValue::Int(42));
    }

    #[test]
    fn test_unknown_generator() {
        let registry = GeneratorRegistry::new();
        assert!(matches!(
            registry.resolve("missing"),
            Err(GeneratorError::UnknownGenerator(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_builtins_are_registered() {
        let registry = GeneratorRegistry::with_builtins();
        for name in [
            "email",
            "firstName",
            "firstMen",
            "firstWomen",
            "lastName",
            "fullName",
            "husbandAndWife",
            "phone",
            "words",
            "password",
            "fileName",
            "pickOne",
        ] {
            assert!(registry.contains(name), "missing built-in {name}");
        }
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = GeneratorRegistry::with_builtins();
        registry.register("email", |_rng: &mut dyn RngCore, _arg: Option<&SeedValue>| {
            SeedValue::from("fixed@example.com")
        });

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            registry.resolve("email").unwrap().generate(&mut rng, None),
            SeedValue::from("fixed@example.com")
        );
    }
}
