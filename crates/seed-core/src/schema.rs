//! Schema definitions for seeded collections.
//!
//! A collection schema is written as YAML field options (the annotation
//! surface) and converted once, at load time, into a typed field table.
//!
//! ## Annotation surface
//!
//! ```yaml
//! email:    { seed: email, unique: true }
//! role:     { seed: pickOne, enum: [admin, user] }
//! bio:      { seed: words, arg: 5 }
//! customer: { refseed: ONE, ref: User }
//! tags:     [{ refseed: [2, 4], ref: Tag }]        # array shorthand
//! items:    { type: array, items: { refseed: [1, 3], ref: Product } }
//! ```
//!
//! `refseed` on an array field is read from the element options. A field
//! that carries both `seed` and `refseed` is classified as a reference.

use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;

use crate::values::SeedValue;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema and plan loading.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading a plan file
    #[error("Failed to read plan file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A mapping key that is not a string
    #[error("Mapping keys must be strings")]
    NonStringKey,

    /// Nested objects are not supported as field values
    #[error("Nested objects are not supported as seed values")]
    NestedValue,

    /// A `refseed` field without a `ref` target
    #[error("Field '{field}' in '{collection}' has refseed but no ref target")]
    MissingReferenceTarget { collection: String, field: String },

    /// Array shorthand with anything other than one element definition
    #[error("Field '{field}' in '{collection}' must declare exactly one array element")]
    InvalidArrayShorthand { collection: String, field: String },

    /// Malformed field options
    #[error("Invalid options for field '{field}' in '{collection}': {message}")]
    InvalidField {
        collection: String,
        field: String,
        message: String,
    },

    /// Malformed clear target
    #[error("Invalid clear target: {0}")]
    InvalidClearTarget(String),

    /// Malformed run entry
    #[error("Invalid run entry: {0}")]
    InvalidRunEntry(String),
}

// ============================================================================
// Cardinality
// ============================================================================

/// How many identifiers a reference field receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCardinality", into = "RawCardinality")]
pub enum Cardinality {
    /// Exactly one identifier, stored as a scalar id
    One,

    /// A uniform random count in `[min, max]`, stored as an array of ids
    Range { min: u32, max: u32 },
}

impl Cardinality {
    /// Build a range cardinality. Reversed bounds are swapped.
    pub fn range(a: u32, b: u32) -> Self {
        Cardinality::Range {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawCardinality {
    Keyword(String),
    Bounds(Vec<u32>),
}

impl TryFrom<RawCardinality> for Cardinality {
    type Error = String;

    fn try_from(raw: RawCardinality) -> Result<Self, Self::Error> {
        match raw {
            RawCardinality::Keyword(k) if k.eq_ignore_ascii_case("one") => Ok(Cardinality::One),
            RawCardinality::Keyword(k) => Err(format!("expected ONE or [min, max], got '{k}'")),
            RawCardinality::Bounds(bounds) => match bounds.as_slice() {
                [a, b] => Ok(Cardinality::range(*a, *b)),
                _ => Err(format!(
                    "range must have exactly two bounds, got {}",
                    bounds.len()
                )),
            },
        }
    }
}

impl From<Cardinality> for RawCardinality {
    fn from(c: Cardinality) -> Self {
        match c {
            Cardinality::One => RawCardinality::Keyword("ONE".to_string()),
            Cardinality::Range { min, max } => RawCardinality::Bounds(vec![min, max]),
        }
    }
}

// ============================================================================
// Annotation Surface (raw YAML options)
// ============================================================================

/// Declared type of a field. Only `array` changes how options are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Id,
    Array,
}

/// Options of a single field as written in YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldOptions {
    /// Declared field type
    #[serde(rename = "type", default)]
    pub field_type: Option<FieldType>,

    /// Generator name for scalar seeding
    #[serde(default)]
    pub seed: Option<String>,

    /// Generator argument (e.g. a word count)
    #[serde(default)]
    pub arg: Option<YamlValue>,

    /// Allowed values; overrides `arg`
    #[serde(rename = "enum", default)]
    pub enumeration: Option<Vec<YamlValue>>,

    /// Reference cardinality
    #[serde(default)]
    pub refseed: Option<Cardinality>,

    /// Referenced collection
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,

    /// Element options for array fields
    #[serde(default)]
    pub items: Option<Box<FieldOptions>>,

    /// Whether stores should enforce uniqueness of this field
    #[serde(default)]
    pub unique: bool,
}

/// A field definition: either full options or the one-element array shorthand.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawField {
    ArrayOf(Vec<FieldOptions>),
    Options(FieldOptions),
}

// ============================================================================
// Typed Field Table
// ============================================================================

/// Classification of a field, derived once from its options.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Independently generated value
    Scalar {
        generator: String,
        arg: Option<SeedValue>,
    },

    /// Identifier(s) sampled from another collection
    Reference {
        collection: String,
        cardinality: Cardinality,
    },

    /// Not seeded
    Plain,
}

/// One entry of the typed field table.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    pub unique: bool,
}

impl FieldDescriptor {
    pub fn scalar(name: impl Into<String>, generator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Scalar {
                generator: generator.into(),
                arg: None,
            },
            unique: false,
        }
    }

    pub fn scalar_with_arg(
        name: impl Into<String>,
        generator: impl Into<String>,
        arg: SeedValue,
    ) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Scalar {
                generator: generator.into(),
                arg: Some(arg),
            },
            unique: false,
        }
    }

    pub fn reference(
        name: impl Into<String>,
        collection: impl Into<String>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Reference {
                collection: collection.into(),
                cardinality,
            },
            unique: false,
        }
    }

    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Plain,
            unique: false,
        }
    }

    /// Mark this field as unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Classify a field from its YAML options.
    pub fn from_options(
        collection: &str,
        name: &str,
        options: &FieldOptions,
    ) -> Result<Self, SchemaError> {
        let invalid = |message: String| SchemaError::InvalidField {
            collection: collection.to_string(),
            field: name.to_string(),
            message,
        };

        let ref_options = if options.refseed.is_some() {
            Some(options)
        } else {
            options
                .items
                .as_deref()
                .filter(|items| items.refseed.is_some())
        };

        let kind = if let Some(ref_options) = ref_options {
            if options.seed.is_some() {
                tracing::warn!(
                    "Field '{}' in '{}' has both seed and refseed; using refseed",
                    name,
                    collection
                );
            }
            let target = ref_options.reference.clone().or_else(|| options.reference.clone());
            let collection_name = target.ok_or_else(|| SchemaError::MissingReferenceTarget {
                collection: collection.to_string(),
                field: name.to_string(),
            })?;
            let cardinality = ref_options
                .refseed
                .ok_or_else(|| invalid("refseed missing".to_string()))?;
            FieldKind::Reference {
                collection: collection_name,
                cardinality,
            }
        } else if let Some(generator) = &options.seed {
            let arg = match (&options.enumeration, &options.arg) {
                (Some(values), _) => Some(SeedValue::Array(
                    values
                        .iter()
                        .map(SeedValue::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                )),
                (None, Some(arg)) => Some(SeedValue::try_from(arg)?),
                (None, None) => None,
            };
            FieldKind::Scalar {
                generator: generator.clone(),
                arg,
            }
        } else {
            FieldKind::Plain
        };

        if options.items.is_some() && !matches!(options.field_type, None | Some(FieldType::Array)) {
            return Err(invalid("items is only valid on array fields".to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            kind,
            unique: options.unique,
        })
    }
}

/// The typed shape of one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDescriptor {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl SchemaDescriptor {
    /// Create a schema from an already-classified field table.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Build a schema from a YAML mapping of field name to options.
    ///
    /// Declaration order is preserved.
    pub fn from_mapping(
        name: impl Into<String>,
        mapping: &serde_yaml::Mapping,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let mut fields = Vec::with_capacity(mapping.len());

        for (key, value) in mapping {
            let field_name = key.as_str().ok_or(SchemaError::NonStringKey)?;
            let raw: RawField = serde_yaml::from_value(value.clone())?;
            let options = match raw {
                RawField::Options(options) => options,
                RawField::ArrayOf(mut elements) => {
                    if elements.len() != 1 {
                        return Err(SchemaError::InvalidArrayShorthand {
                            collection: name.clone(),
                            field: field_name.to_string(),
                        });
                    }
                    FieldOptions {
                        field_type: Some(FieldType::Array),
                        items: Some(Box::new(elements.remove(0))),
                        ..FieldOptions::default()
                    }
                }
            };
            fields.push(FieldDescriptor::from_options(&name, field_name, &options)?);
        }

        Ok(Self { name, fields })
    }

    /// Parse a schema from a YAML string containing the field mapping.
    pub fn from_yaml(name: impl Into<String>, yaml: &str) -> Result<Self, SchemaError> {
        let mapping: serde_yaml::Mapping = serde_yaml::from_str(yaml)?;
        Self::from_mapping(name, &mapping)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of fields declared unique.
    pub fn unique_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.unique)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Collections referenced by this schema, in declaration order.
    pub fn referenced_collections(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter_map(|f| match &f.kind {
                FieldKind::Reference { collection, .. } => Some(collection.as_str()),
                _ => None,
            })
            .collect()
    }
}
