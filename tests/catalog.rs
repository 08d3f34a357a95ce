use std::time::Duration;

use nexusstore_core::{
    audit::AuditLog,
    dto::products::{NewProduct, ProductPatch},
    error::StoreError,
    seed,
    store::ProductStore,
};

#[tokio::test]
async fn create_then_get_by_id_round_trips() {
    let store = empty_store();

    let created = store
        .create(NewProduct {
            title: Some("Demo Kettlebell".to_string()),
            price: Some(3500),
            category: Some("Fitness".to_string()),
            ..Default::default()
        })
        .await;

    assert_eq!(created.id, 1);
    let fetched = store.get_by_id(created.id).await;
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn create_assigns_next_id_after_max() {
    let store = seeded_store();

    let created = store.create(NewProduct::default()).await;
    assert_eq!(created.id, 4);

    store.delete(4).await;
    let again = store.create(NewProduct::default()).await;
    assert_eq!(again.id, 4);
}

#[tokio::test]
async fn create_fills_defaults_for_unset_fields() {
    let store = empty_store();

    let created = store.create(NewProduct::default()).await;

    assert_eq!(created.title, "Untitled product");
    assert_eq!(created.description, "");
    assert_eq!(created.price, 0);
    assert_eq!(created.rating, 0.0);
    assert_eq!(created.review_count, 0);
    assert_eq!(created.category, "Misc");
    assert_eq!(created.images.len(), 1);
    assert!(seed::DEFAULT_IMAGES.contains(&created.images[0].as_str()));
}

#[tokio::test]
async fn update_patches_only_the_given_fields() -> anyhow::Result<()> {
    let store = seeded_store();
    let before = store.get_by_id(1).await.expect("seeded product");

    let updated = store
        .update(
            1,
            ProductPatch {
                price: Some(9999),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.price, 9999);
    assert_eq!(updated.title, before.title);
    assert_eq!(updated.description, before.description);
    assert_eq!(updated.category, before.category);
    assert_eq!(updated.images, before.images);
    Ok(())
}

#[tokio::test]
async fn update_on_absent_id_is_not_found() {
    let store = seeded_store();

    let err = store
        .update(999, ProductPatch::default())
        .await
        .expect_err("absent id");
    assert!(matches!(err, StoreError::NotFound));
}

#[tokio::test]
async fn delete_removes_and_is_idempotent() {
    let store = seeded_store();

    store.delete(2).await;
    assert_eq!(store.get_by_id(2).await, None);

    // second delete of the same id is not an error
    store.delete(2).await;
    assert_eq!(store.get_all().await.len(), 2);
}

#[tokio::test]
async fn categories_are_distinct() {
    let store = seeded_store();

    let mut categories = store.categories().await;
    categories.sort();
    assert_eq!(categories, ["Accessories", "Fitness", "Food & Beverage"]);

    store
        .create(NewProduct {
            category: Some("Fitness".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(store.categories().await.len(), 3);
}

#[tokio::test]
async fn get_all_returns_a_detached_snapshot() {
    let store = seeded_store();

    let mut snapshot = store.get_all().await;
    snapshot.clear();

    assert_eq!(store.get_all().await.len(), 3);
}

fn empty_store() -> ProductStore {
    ProductStore::new(Duration::ZERO, AuditLog::default())
}

fn seeded_store() -> ProductStore {
    ProductStore::seeded(Duration::ZERO, AuditLog::default())
}
