//! Run plans loaded from YAML.
//!
//! A plan registers collection schemas and says what to clear, which
//! default record to insert, and how many documents to seed per collection.
//!
//! ```yaml
//! seed: 42
//! clear: ALL
//! admin:
//!   record: { role: admin, email: admin@example.com }
//! collections:
//!   User:
//!     fields:
//!       email: { seed: email, unique: true }
//! run:
//!   - User: 300
//! ```

use serde::Deserialize;
use serde_yaml::{Mapping, Value as YamlValue};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::schema::{SchemaDescriptor, SchemaError};
use crate::values::SeedDocument;

/// What to clear before seeding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClearTarget {
    /// Nothing is cleared
    #[default]
    None,

    /// Every document of one collection
    Collection(String),

    /// Every document of every registered collection
    All,
}

impl ClearTarget {
    /// Interpret a YAML value: null, `""`, `none` and `0` mean nothing,
    /// `ALL`/`All` means every registered collection, any other string is a
    /// collection name.
    pub fn from_yaml(value: &YamlValue) -> Result<Self, SchemaError> {
        match value {
            YamlValue::Null => Ok(ClearTarget::None),
            YamlValue::Number(n) if n.as_i64() == Some(0) => Ok(ClearTarget::None),
            YamlValue::Bool(false) => Ok(ClearTarget::None),
            YamlValue::String(s) => Ok(Self::parse(s)),
            other => Err(SchemaError::InvalidClearTarget(format!("{other:?}"))),
        }
    }

    /// Interpret a string target, as given on the command line. Never fails.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "" | "none" | "null" | "false" | "0" => ClearTarget::None,
            "ALL" | "All" => ClearTarget::All,
            name => ClearTarget::Collection(name.to_string()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ClearTarget::None)
    }
}

impl FromStr for ClearTarget {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ClearTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearTarget::None => f.write_str("none"),
            ClearTarget::Collection(name) => f.write_str(name),
            ClearTarget::All => f.write_str("ALL"),
        }
    }
}

/// One unit of seeding work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRequest {
    pub collection: String,
    pub count: u64,
}

impl SeedRequest {
    pub fn new(collection: impl Into<String>, count: u64) -> Self {
        Self {
            collection: collection.into(),
            count,
        }
    }
}

/// The privileged record inserted once before bulk seeding.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultRecord {
    /// Target collection; `None` means the first registered collection
    pub collection: Option<String>,
    pub record: SeedDocument,
}

/// A fully parsed run plan.
#[derive(Debug, Clone, Default)]
pub struct SeedPlan {
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
    /// Maximum concurrent store writes per batch
    pub concurrency: Option<usize>,
    pub clear: ClearTarget,
    pub admin: Option<DefaultRecord>,
    /// Registered collections, in declaration order
    pub collections: Vec<SchemaDescriptor>,
    /// Seed requests, in the order they must run
    pub run: Vec<SeedRequest>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPlan {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    concurrency: Option<usize>,
    #[serde(default)]
    clear: YamlValue,
    #[serde(default)]
    admin: Option<RawAdmin>,
    #[serde(default)]
    collections: Mapping,
    #[serde(default)]
    run: Vec<Mapping>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAdmin {
    #[serde(default)]
    collection: Option<String>,
    record: Mapping,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCollection {
    #[serde(default)]
    fields: Mapping,
}

impl SeedPlan {
    /// Load a plan from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a plan from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let raw: RawPlan = serde_yaml::from_str(yaml)?;

        let mut collections = Vec::with_capacity(raw.collections.len());
        for (key, value) in &raw.collections {
            let name = key.as_str().ok_or(SchemaError::NonStringKey)?;
            let collection: RawCollection = serde_yaml::from_value(value.clone())?;
            collections.push(SchemaDescriptor::from_mapping(name, &collection.fields)?);
        }

        let mut run = Vec::new();
        for entry in &raw.run {
            for (key, value) in entry {
                let collection = key
                    .as_str()
                    .ok_or_else(|| SchemaError::InvalidRunEntry(format!("{key:?}")))?;
                let count = match (value.as_u64(), value.as_i64()) {
                    (Some(count), _) => count,
                    (None, Some(negative)) => {
                        tracing::warn!(
                            "Run count {} for {} is negative; seeding nothing",
                            negative,
                            collection
                        );
                        0
                    }
                    (None, None) => {
                        return Err(SchemaError::InvalidRunEntry(format!(
                            "{collection}: {value:?}"
                        )))
                    }
                };
                run.push(SeedRequest::new(collection, count));
            }
        }

        let admin = raw
            .admin
            .map(|admin| -> Result<DefaultRecord, SchemaError> {
                Ok(DefaultRecord {
                    collection: admin.collection,
                    record: SeedDocument::from_yaml_mapping(&admin.record)?,
                })
            })
            .transpose()?;

        let plan = SeedPlan {
            seed: raw.seed,
            concurrency: raw.concurrency,
            clear: ClearTarget::from_yaml(&raw.clear)?,
            admin,
            collections,
            run,
        };
        plan.warn_unregistered_references();
        Ok(plan)
    }

    /// Get a registered schema by collection name.
    pub fn get_collection(&self, name: &str) -> Option<&SchemaDescriptor> {
        self.collections.iter().find(|c| c.name() == name)
    }

    /// Registered collection names, in declaration order.
    pub fn collection_names(&self) -> Vec<&str> {
        self.collections.iter().map(|c| c.name()).collect()
    }

    fn warn_unregistered_references(&self) {
        for schema in &self.collections {
            for target in schema.referenced_collections() {
                if self.get_collection(target).is_none() {
                    tracing::warn!(
                        "Collection '{}' references '{}', which is not registered; it must already contain data",
                        schema.name(),
                        target
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;
    use crate::values::SeedValue;
    use std::io::Write;

    const PLAN: &str = r#"
seed: 7
clear: ALL
admin:
  record:
    role: admin
    name: Web Admin
    email: admin@example.com
collections:
  User:
    fields:
      email: { seed: email, unique: true }
      role: { seed: pickOne, enum: [admin, user] }
  Client:
    fields:
      name: { seed: fullName }
      manager: { refseed: ONE, ref: User }
run:
  - User: 300
  - Client: 1000
"#;

    #[test]
    fn test_parse_plan() {
        let plan = SeedPlan::from_yaml(PLAN).unwrap();

        assert_eq!(plan.seed, Some(7));
        assert_eq!(plan.clear, ClearTarget::All);
        assert_eq!(plan.collection_names(), vec!["User", "Client"]);
        assert_eq!(
            plan.run,
            vec![SeedRequest::new("User", 300), SeedRequest::new("Client", 1000)]
        );

        let admin = plan.admin.as_ref().unwrap();
        assert_eq!(admin.collection, None);
        assert_eq!(
            admin.record.get("email"),
            Some(&SeedValue::from("admin@example.com"))
        );

        let client = plan.get_collection("Client").unwrap();
        assert!(matches!(
            client.field("manager").unwrap().kind,
            FieldKind::Reference { .. }
        ));
    }

    #[test]
    fn test_clear_target_variants() {
        for yaml in ["~", "''", "none", "0", "false"] {
            let value: YamlValue = serde_yaml::from_str(yaml).unwrap();
            assert_eq!(ClearTarget::from_yaml(&value).unwrap(), ClearTarget::None, "{yaml}");
        }

        let value: YamlValue = serde_yaml::from_str("All").unwrap();
        assert_eq!(ClearTarget::from_yaml(&value).unwrap(), ClearTarget::All);

        let value: YamlValue = serde_yaml::from_str("User").unwrap();
        assert_eq!(
            ClearTarget::from_yaml(&value).unwrap(),
            ClearTarget::Collection("User".to_string())
        );

        let value: YamlValue = serde_yaml::from_str("[a]").unwrap();
        assert!(ClearTarget::from_yaml(&value).is_err());
    }

    #[test]
    fn test_missing_clear_is_none() {
        let plan = SeedPlan::from_yaml("collections: {}").unwrap();
        assert!(plan.clear.is_none());
        assert!(plan.run.is_empty());
        assert!(plan.admin.is_none());
    }

    #[test]
    fn test_invalid_run_count() {
        let result = SeedPlan::from_yaml("run:\n  - User: lots\n");
        assert!(matches!(result, Err(SchemaError::InvalidRunEntry(_))));
    }

    #[test]
    fn test_negative_run_count_seeds_nothing() {
        let plan = SeedPlan::from_yaml("run:\n  - User: -1\n  - Tag: 2\n").unwrap();
        assert_eq!(
            plan.run,
            vec![SeedRequest::new("User", 0), SeedRequest::new("Tag", 2)]
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PLAN.as_bytes()).unwrap();

        let plan = SeedPlan::from_file(file.path()).unwrap();
        assert_eq!(plan.collections.len(), 2);
    }
}
