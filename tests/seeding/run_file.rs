//! Whole runs driven by run files.

use doc_seeder::{build_seeder, collection_status, run_plan};
use seed_core::{ClearTarget, SeedPlan, SeedRequest, SeedValue};
use seed_engine::{ClearOutcome, CollectionStore, DefaultRecordStatus, MemoryStore, SeedError};
use std::collections::HashSet;
use std::path::Path;

fn demo_plan() -> SeedPlan {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/shop.yaml");
    SeedPlan::from_file(path).unwrap()
}

#[test]
fn test_demo_plan_parses() {
    let plan = demo_plan();

    assert_eq!(plan.seed, Some(42));
    assert_eq!(plan.clear, ClearTarget::All);
    assert_eq!(plan.collection_names(), vec!["User", "Product", "Order", "Review"]);
    assert_eq!(
        plan.run,
        vec![
            SeedRequest::new("User", 300),
            SeedRequest::new("Product", 120),
            SeedRequest::new("Order", 1000),
            SeedRequest::new("Review", 500),
        ]
    );
}

#[test]
fn test_demo_plan_dry_run() {
    let plan = demo_plan();

    tokio_test::block_on(async {
        let seeder = build_seeder(MemoryStore::new(), &plan).await.unwrap();
        let summary = run_plan(&seeder, &plan).await;

        assert_eq!(summary.cleared.total(), 0);
        assert!(matches!(summary.default_record, DefaultRecordStatus::Loaded(_)));
        assert!(summary.report.failures().is_empty());
        assert_eq!(summary.report.total_created(), 300 + 120 + 1000 + 500);

        let store = seeder.store();
        let users: HashSet<_> = store.ids("User").into_iter().collect();
        let products: HashSet<_> = store.ids("Product").into_iter().collect();
        assert_eq!(users.len(), 301);

        for order in store.documents("Order") {
            let customer = order.document.get("customer").and_then(SeedValue::as_id).unwrap();
            assert!(users.contains(customer));
            let items = order.document.get("items").and_then(SeedValue::as_array).unwrap();
            assert!((1..=5).contains(&items.len()));
            assert!(items.iter().all(|i| products.contains(i.as_id().unwrap())));
        }

        let statuses = collection_status(&seeder).await.unwrap();
        let counts: Vec<u64> = statuses.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![301, 120, 1000, 500]);
    });
}

#[tokio::test]
async fn test_second_run_keeps_going_when_default_record_conflicts() {
    let plan = SeedPlan::from_yaml(
        r#"
clear: none
admin:
  record: { email: admin@example.com, role: admin }
collections:
  User:
    fields:
      email: { seed: email, unique: true }
run:
  - User: 4
"#,
    )
    .unwrap();
    let seeder = build_seeder(MemoryStore::new(), &plan).await.unwrap();

    let first = run_plan(&seeder, &plan).await;
    let second = run_plan(&seeder, &plan).await;

    assert_eq!(first.cleared, ClearOutcome::None);
    assert!(matches!(first.default_record, DefaultRecordStatus::Loaded(_)));
    assert_eq!(second.default_record, DefaultRecordStatus::NotSaved);
    assert_eq!(second.report.total_created(), 4);
    assert_eq!(seeder.store().count("User").await.unwrap(), 9);
}

#[tokio::test]
async fn test_failed_request_does_not_stop_later_ones() {
    let plan = SeedPlan::from_yaml(
        r#"
collections:
  Order:
    fields:
      customer: { refseed: ONE, ref: User }
  Tag:
    fields:
      label: { seed: words }
run:
  - Order: 3
  - Ghost: 2
  - Tag: 5
"#,
    )
    .unwrap();
    let seeder = build_seeder(MemoryStore::new(), &plan).await.unwrap();

    let summary = run_plan(&seeder, &plan).await;

    let outcomes = &summary.report.outcomes;
    assert!(matches!(&outcomes[0].result, Err(SeedError::EmptyCollection(name)) if name == "User"));
    assert!(matches!(&outcomes[1].result, Err(SeedError::UnknownCollection(name)) if name == "Ghost"));
    assert_eq!(outcomes[2].created(), 5);
    assert_eq!(summary.report.total_created(), 5);
}

#[tokio::test]
async fn test_clear_all_then_reseed() {
    let plan = SeedPlan::from_yaml(
        r#"
clear: ALL
collections:
  User:
    fields:
      email: { seed: email }
  Order:
    fields:
      customer: { refseed: ONE, ref: User }
run:
  - User: 6
  - Order: 4
"#,
    )
    .unwrap();
    let seeder = build_seeder(MemoryStore::new(), &plan).await.unwrap();

    run_plan(&seeder, &plan).await;
    let second = run_plan(&seeder, &plan).await;

    let ClearOutcome::All(cleared) = &second.cleared else {
        panic!("expected ALL outcome, got {:?}", second.cleared);
    };
    let deleted: Vec<(&str, u64)> = cleared.iter().map(|c| (c.name.as_str(), c.deleted)).collect();
    assert_eq!(deleted, vec![("User", 6), ("Order", 4)]);
    assert_eq!(seeder.store().count("User").await.unwrap(), 6);
    assert_eq!(seeder.store().count("Order").await.unwrap(), 4);
}
