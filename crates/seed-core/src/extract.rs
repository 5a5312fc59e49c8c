//! Field descriptor extraction.
//!
//! Pure functions over a [`SchemaDescriptor`]'s field table. Specs are
//! derived on every call so that a schema swapped between calls is honored.

use crate::schema::{Cardinality, FieldKind, SchemaDescriptor};
use crate::values::SeedValue;

/// A field that receives an independently generated value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSeedSpec {
    pub field_name: String,
    pub generator_name: String,
    pub generator_arg: Option<SeedValue>,
}

/// A field that receives identifier(s) sampled from another collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRefSpec {
    pub field_name: String,
    pub referenced_collection: String,
    pub cardinality: Cardinality,
}

/// Scalar-seed fields in declaration order.
pub fn extract_seed_fields(schema: &SchemaDescriptor) -> Vec<FieldSeedSpec> {
    schema
        .fields()
        .iter()
        .filter_map(|field| match &field.kind {
            FieldKind::Scalar { generator, arg } => Some(FieldSeedSpec {
                field_name: field.name.clone(),
                generator_name: generator.clone(),
                generator_arg: arg.clone(),
            }),
            _ => None,
        })
        .collect()
}

/// Reference-seed fields in declaration order.
pub fn extract_ref_fields(schema: &SchemaDescriptor) -> Vec<FieldRefSpec> {
    schema
        .fields()
        .iter()
        .filter_map(|field| match &field.kind {
            FieldKind::Reference {
                collection,
                cardinality,
            } => Some(FieldRefSpec {
                field_name: field.name.clone(),
                referenced_collection: collection.clone(),
                cardinality: *cardinality,
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDescriptor;

    #[test]
    fn test_no_annotated_fields() {
        let schema = SchemaDescriptor::new(
            "Log",
            vec![FieldDescriptor::plain("message"), FieldDescriptor::plain("level")],
        );
        assert!(extract_seed_fields(&schema).is_empty());
        assert!(extract_ref_fields(&schema).is_empty());

        let empty = SchemaDescriptor::new("Empty", vec![]);
        assert!(extract_seed_fields(&empty).is_empty());
        assert!(extract_ref_fields(&empty).is_empty());
    }

    #[test]
    fn test_sets_are_disjoint() {
        let schema = SchemaDescriptor::from_yaml(
            "Upload",
            r#"
fileName: { seed: fileName }
owner: { refseed: ONE, ref: User }
kind: { seed: pickOne, enum: [pdf, png] }
viewers: [{ refseed: [0, 3], ref: User }]
size: { type: number }
"#,
        )
        .unwrap();

        let seeds = extract_seed_fields(&schema);
        let refs = extract_ref_fields(&schema);

        assert_eq!(
            seeds.iter().map(|s| s.field_name.as_str()).collect::<Vec<_>>(),
            vec!["fileName", "kind"]
        );
        assert_eq!(
            refs.iter().map(|r| r.field_name.as_str()).collect::<Vec<_>>(),
            vec!["owner", "viewers"]
        );
        assert_eq!(seeds[1].generator_name, "pickOne");
        assert_eq!(
            seeds[1].generator_arg,
            Some(SeedValue::Array(vec!["pdf".into(), "png".into()]))
        );
        assert_eq!(refs[1].cardinality, Cardinality::Range { min: 0, max: 3 });
        assert_eq!(refs[1].referenced_collection, "User");
    }

    #[test]
    fn test_field_with_both_annotations_is_reference_only() {
        let schema =
            SchemaDescriptor::from_yaml("Post", "author: { seed: email, refseed: ONE, ref: User }")
                .unwrap();
        assert!(extract_seed_fields(&schema).is_empty());
        assert_eq!(extract_ref_fields(&schema).len(), 1);
    }
}
