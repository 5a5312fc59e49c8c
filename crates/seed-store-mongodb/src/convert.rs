//! Conversion between seed values and BSON.
//!
//! Identifiers that are 24-character hex strings become `ObjectId`s so that
//! reference fields look like ones written by any other MongoDB client.

use bson::oid::ObjectId;
use bson::{Bson, DateTime as BsonDateTime, Document};
use seed_core::{DocumentId, SeedDocument, SeedValue};
use seed_engine::StoreError;

/// Convert a seed value to BSON.
pub fn seed_value_to_bson(value: &SeedValue) -> Bson {
    match value {
        SeedValue::Null => Bson::Null,
        SeedValue::Bool(b) => Bson::Boolean(*b),
        SeedValue::Int(i) => Bson::Int64(*i),
        SeedValue::Float(f) => Bson::Double(*f),
        SeedValue::String(s) => Bson::String(s.clone()),
        SeedValue::DateTime(dt) => Bson::DateTime(BsonDateTime::from_chrono(*dt)),
        SeedValue::Id(id) => id_to_bson(id),
        SeedValue::Array(values) => Bson::Array(values.iter().map(seed_value_to_bson).collect()),
    }
}

/// Convert a seed document to a BSON document, keeping field order.
pub fn seed_document_to_bson(document: &SeedDocument) -> Document {
    document
        .iter()
        .map(|(name, value)| (name.to_string(), seed_value_to_bson(value)))
        .collect()
}

pub fn id_to_bson(id: &DocumentId) -> Bson {
    match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => Bson::ObjectId(oid),
        Err(_) => Bson::String(id.as_str().to_string()),
    }
}

pub fn bson_to_id(value: &Bson) -> DocumentId {
    match value {
        Bson::ObjectId(oid) => DocumentId::new(oid.to_hex()),
        Bson::String(s) => DocumentId::new(s.clone()),
        other => DocumentId::new(other.to_string()),
    }
}

/// Convert a BSON value read back from MongoDB.
///
/// Embedded documents have no seed representation and are rejected.
pub fn bson_to_seed_value(field: &str, value: &Bson) -> Result<SeedValue, StoreError> {
    Ok(match value {
        Bson::Null | Bson::Undefined => SeedValue::Null,
        Bson::Boolean(b) => SeedValue::Bool(*b),
        Bson::Int32(i) => SeedValue::Int(i64::from(*i)),
        Bson::Int64(i) => SeedValue::Int(*i),
        Bson::Double(f) => SeedValue::Float(*f),
        Bson::String(s) => SeedValue::String(s.clone()),
        Bson::DateTime(dt) => SeedValue::DateTime(dt.to_chrono()),
        Bson::ObjectId(oid) => SeedValue::Id(DocumentId::new(oid.to_hex())),
        Bson::Array(values) => SeedValue::Array(
            values
                .iter()
                .map(|v| bson_to_seed_value(field, v))
                .collect::<Result<_, _>>()?,
        ),
        other => {
            return Err(StoreError::UnsupportedValue {
                field: field.to_string(),
                message: format!("BSON {:?} has no seed representation", other.element_type()),
            })
        }
    })
}

/// Split a stored document into its identifier and its remaining fields.
pub fn bson_to_persisted(
    document: &Document,
) -> Result<(DocumentId, SeedDocument), StoreError> {
    let id = document
        .get("_id")
        .map(bson_to_id)
        .ok_or_else(|| StoreError::UnsupportedValue {
            field: "_id".to_string(),
            message: "document has no _id".to_string(),
        })?;

    let mut fields = SeedDocument::new();
    for (name, value) in document {
        if name == "_id" {
            continue;
        }
        fields.insert(name.clone(), bson_to_seed_value(name, value)?);
    }
    Ok((id, fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_object_id_hex_becomes_object_id() {
        let oid = ObjectId::new();
        let id = DocumentId::new(oid.to_hex());

        assert_eq!(id_to_bson(&id), Bson::ObjectId(oid));
        assert_eq!(bson_to_id(&Bson::ObjectId(oid)), id);
    }

    #[test]
    fn test_other_ids_stay_strings() {
        let id = DocumentId::new("user-1");
        assert_eq!(id_to_bson(&id), Bson::String("user-1".to_string()));
    }

    #[test]
    fn test_document_conversion() {
        let oid = ObjectId::new();
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let document = SeedDocument::new()
            .with("email", "a@example.com")
            .with("age", 31_i64)
            .with("active", true)
            .with("created", SeedValue::DateTime(created))
            .with("items", vec![DocumentId::new(oid.to_hex())]);

        let bson = seed_document_to_bson(&document);

        assert_eq!(bson.get_str("email").unwrap(), "a@example.com");
        assert_eq!(bson.get_i64("age").unwrap(), 31);
        assert!(bson.get_bool("active").unwrap());
        assert_eq!(bson.get_datetime("created").unwrap().to_chrono(), created);
        assert_eq!(
            bson.get_array("items").unwrap(),
            &vec![Bson::ObjectId(oid)]
        );
        assert_eq!(
            bson.keys().collect::<Vec<_>>(),
            document.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_persisted_split() {
        let oid = ObjectId::new();
        let stored = doc! { "_id": oid, "name": "Ada", "n": 3_i32 };

        let (id, fields) = bson_to_persisted(&stored).unwrap();

        assert_eq!(id.as_str(), oid.to_hex());
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("n"), Some(&SeedValue::Int(3)));
    }

    #[test]
    fn test_nested_document_rejected() {
        let stored = doc! { "_id": "x", "address": { "city": "Oslo" } };

        let result = bson_to_persisted(&stored);
        assert!(matches!(
            result,
            Err(StoreError::UnsupportedValue { field, .. }) if field == "address"
        ));
    }
}
