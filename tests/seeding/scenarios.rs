//! Seeding scenarios over hand-written schemas.

use doc_seeder::build_seeder;
use seed_core::{SeedPlan, SeedValue};
use seed_engine::{MemoryStore, Seeder};
use std::collections::HashSet;

async fn seeder_for(yaml: &str) -> Seeder<MemoryStore> {
    let plan = SeedPlan::from_yaml(yaml).unwrap();
    build_seeder(MemoryStore::new(), &plan).await.unwrap()
}

#[tokio::test]
async fn test_scalar_only_collection() {
    let seeder = seeder_for(
        r#"
seed: 3
collections:
  User:
    fields:
      email: { seed: email }
"#,
    )
    .await;

    let ids = seeder.seed("User", 5).await.unwrap();

    assert_eq!(ids.len(), 5);
    let users = seeder.store().documents("User");
    assert_eq!(users.len(), 5);
    for user in &users {
        let email = user.document.get("email").and_then(SeedValue::as_str).unwrap();
        let (local, domain) = email.split_once('@').unwrap();
        assert!(!local.is_empty());
        assert_eq!(domain, "example.com");
    }
    let persisted: HashSet<_> = users.iter().map(|u| u.id.clone()).collect();
    let returned: HashSet<_> = ids.into_iter().collect();
    assert_eq!(persisted, returned);
}

#[tokio::test]
async fn test_single_reference_points_at_existing_user() {
    let seeder = seeder_for(
        r#"
seed: 4
collections:
  User:
    fields:
      email: { seed: email }
  Order:
    fields:
      customer: { refseed: ONE, ref: User }
"#,
    )
    .await;

    let users: HashSet<_> = seeder.seed("User", 10).await.unwrap().into_iter().collect();
    let orders = seeder.seed("Order", 3).await.unwrap();

    assert_eq!(orders.len(), 3);
    let stored = seeder.store().documents("Order");
    assert_eq!(stored.len(), 3);
    for order in stored {
        let customer = order.document.get("customer").and_then(SeedValue::as_id).unwrap();
        assert!(users.contains(customer));
    }
}

#[tokio::test]
async fn test_array_reference_lengths_within_range() {
    let seeder = seeder_for(
        r#"
seed: 5
collections:
  Product:
    fields:
      name: { seed: words, arg: 2 }
  Order:
    fields:
      items: [{ refseed: [2, 4], ref: Product }]
"#,
    )
    .await;

    let products: HashSet<_> = seeder.seed("Product", 25).await.unwrap().into_iter().collect();
    seeder.seed("Order", 40).await.unwrap();

    let mut lengths = HashSet::new();
    for order in seeder.store().documents("Order") {
        let items = order.document.get("items").and_then(SeedValue::as_array).unwrap();
        assert!((2..=4).contains(&items.len()), "got {} items", items.len());
        lengths.insert(items.len());
        for item in items {
            assert!(products.contains(item.as_id().unwrap()));
        }
    }
    assert!(lengths.len() > 1);
}

#[tokio::test]
async fn test_reference_declared_with_seed_uses_refseed() {
    let seeder = seeder_for(
        r#"
collections:
  User:
    fields:
      email: { seed: email }
  Order:
    fields:
      customer: { seed: email, refseed: ONE, ref: User }
"#,
    )
    .await;

    let users: HashSet<_> = seeder.seed("User", 2).await.unwrap().into_iter().collect();
    seeder.seed("Order", 2).await.unwrap();

    for order in seeder.store().documents("Order") {
        let customer = order.document.get("customer").and_then(SeedValue::as_id).unwrap();
        assert!(users.contains(customer));
    }
}

#[tokio::test]
async fn test_unknown_generator_omits_field() {
    let seeder = seeder_for(
        r#"
collections:
  Tag:
    fields:
      label: { seed: words }
      color: { seed: noSuchGenerator }
"#,
    )
    .await;

    seeder.seed("Tag", 3).await.unwrap();

    for tag in seeder.store().documents("Tag") {
        assert!(tag.document.contains("label"));
        assert!(!tag.document.contains("color"));
    }
}

#[tokio::test]
async fn test_same_seed_same_data() {
    let yaml = r#"
seed: 1234
collections:
  User:
    fields:
      email: { seed: email }
      name: { seed: fullName }
"#;
    let first = seeder_for(yaml).await;
    let second = seeder_for(yaml).await;
    first.seed("User", 8).await.unwrap();
    second.seed("User", 8).await.unwrap();

    let docs = |seeder: &Seeder<MemoryStore>| {
        seeder
            .store()
            .documents("User")
            .into_iter()
            .map(|d| d.document)
            .collect::<Vec<_>>()
    };
    assert_eq!(docs(&first), docs(&second));
}
