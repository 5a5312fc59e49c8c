//! Value representations for seeded documents.
//!
//! `SeedValue` is the store-agnostic value produced by generators and by the
//! reference resolver. Store crates convert it into their native format
//! (e.g. BSON for MongoDB).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::collections::BTreeMap;
use std::fmt;

use crate::schema::SchemaError;

/// Opaque identifier of a persisted document.
///
/// The MongoDB store uses the 24-character hex form of an `ObjectId`;
/// the in-memory store uses a counter rendered the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single generated or resolved field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    /// Null value
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    String(String),

    /// Date/time in UTC
    DateTime(DateTime<Utc>),

    /// Identifier of a document in another (or the same) collection
    Id(DocumentId),

    /// Array of values
    Array(Vec<SeedValue>),
}

impl SeedValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a document identifier.
    pub fn as_id(&self) -> Option<&DocumentId> {
        match self {
            Self::Id(id) => Some(id),
            _ => None,
        }
    }

    /// Try to get this value as an array slice.
    pub fn as_array(&self) -> Option<&[SeedValue]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }
}

impl From<&str> for SeedValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for SeedValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for SeedValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<bool> for SeedValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<DocumentId> for SeedValue {
    fn from(id: DocumentId) -> Self {
        Self::Id(id)
    }
}

impl From<Vec<DocumentId>> for SeedValue {
    fn from(ids: Vec<DocumentId>) -> Self {
        Self::Array(ids.into_iter().map(SeedValue::Id).collect())
    }
}

impl TryFrom<&YamlValue> for SeedValue {
    type Error = SchemaError;

    fn try_from(yaml: &YamlValue) -> Result<Self, Self::Error> {
        match yaml {
            YamlValue::Null => Ok(SeedValue::Null),
            YamlValue::Bool(b) => Ok(SeedValue::Bool(*b)),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(SeedValue::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(SeedValue::Float(f))
                } else {
                    Ok(SeedValue::String(n.to_string()))
                }
            }
            YamlValue::String(s) => Ok(SeedValue::String(s.clone())),
            YamlValue::Sequence(items) => items
                .iter()
                .map(SeedValue::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(SeedValue::Array),
            YamlValue::Mapping(_) => Err(SchemaError::NestedValue),
            YamlValue::Tagged(tagged) => SeedValue::try_from(&tagged.value),
        }
    }
}

/// A flat document: field name to value.
///
/// Produced by the synthesizer, enriched by the resolver and handed to the
/// store. Fields are kept sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedDocument {
    fields: BTreeMap<String, SeedValue>,
}

impl SeedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the previous value if it was present.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<SeedValue>,
    ) -> Option<SeedValue> {
        self.fields.insert(name.into(), value.into())
    }

    /// Builder-style variant of [`SeedDocument::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SeedValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&SeedValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeedValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy every field of `patch` into this document, overwriting existing keys.
    pub fn merge(&mut self, patch: SeedDocument) {
        self.fields.extend(patch.fields);
    }

    /// Build a document from a YAML mapping with flat values.
    pub fn from_yaml_mapping(mapping: &serde_yaml::Mapping) -> Result<Self, SchemaError> {
        let mut document = SeedDocument::new();
        for (key, value) in mapping {
            let key = key.as_str().ok_or(SchemaError::NonStringKey)?;
            document.insert(key, SeedValue::try_from(value)?);
        }
        Ok(document)
    }
}

impl IntoIterator for SeedDocument {
    type Item = (String, SeedValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, SeedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<(String, SeedValue)> for SeedDocument {
    fn from_iter<T: IntoIterator<Item = (String, SeedValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A document as returned by the store after a write.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedDocument {
    pub id: DocumentId,
    pub document: SeedDocument,
}

impl PersistedDocument {
    pub fn new(id: DocumentId, document: SeedDocument) -> Self {
        Self { id, document }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_scalars() {
        let yaml: YamlValue = serde_yaml::from_str("42").unwrap();
        assert_eq!(SeedValue::try_from(&yaml).unwrap(), SeedValue::Int(42));

        let yaml: YamlValue = serde_yaml::from_str("1.5").unwrap();
        assert_eq!(SeedValue::try_from(&yaml).unwrap(), SeedValue::Float(1.5));

        let yaml: YamlValue = serde_yaml::from_str("~").unwrap();
        assert!(SeedValue::try_from(&yaml).unwrap().is_null());
    }

    #[test]
    fn test_as_f64_widens_integers() {
        assert_eq!(SeedValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(SeedValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(SeedValue::from("3").as_f64(), None);
    }

    #[test]
    fn test_yaml_sequence() {
        let yaml: YamlValue = serde_yaml::from_str("[admin, user, 3]").unwrap();
        let value = SeedValue::try_from(&yaml).unwrap();
        assert_eq!(
            value,
            SeedValue::Array(vec!["admin".into(), "user".into(), SeedValue::Int(3)])
        );
    }

    #[test]
    fn test_yaml_mapping_is_rejected() {
        let yaml: YamlValue = serde_yaml::from_str("{ a: 1 }").unwrap();
        assert!(matches!(
            SeedValue::try_from(&yaml),
            Err(SchemaError::NestedValue)
        ));
    }

    #[test]
    fn test_document_merge_overwrites() {
        let mut doc = SeedDocument::new().with("name", "a").with("owner", SeedValue::Null);
        let patch = SeedDocument::new().with("owner", DocumentId::new("abc"));
        doc.merge(patch);

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("owner"), Some(&SeedValue::Id(DocumentId::new("abc"))));
    }

    #[test]
    fn test_document_from_mapping() {
        let mapping: serde_yaml::Mapping =
            serde_yaml::from_str("{ role: admin, email: admin@example.com }").unwrap();
        let doc = SeedDocument::from_yaml_mapping(&mapping).unwrap();
        assert_eq!(doc.get("role").and_then(SeedValue::as_str), Some("admin"));
        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["email", "role"]);
    }
}
