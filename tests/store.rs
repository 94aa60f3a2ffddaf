//! # Item Store Tests
//!
//! Listing order, reporting, status updates and simulated latency.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use std::{sync::Arc, time::Duration};

use common::{demo_user, draft, ids, seeded_store};
use lostfound::{ItemKind, ItemStore, Latency, Status, StoreError};

#[test]
fn test_seed_is_newest_first() {
    let store = seeded_store();
    let items = store.list_items();

    assert_eq!(ids(items), ["1", "2", "3", "4"]);
    assert!(items.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn test_add_item_prepends_pending_item_with_snapshot() {
    let mut store = seeded_store();
    let mike = demo_user(&store, "mike.johnson@university.edu");

    let item = store.add_item(&mike, draft(ItemKind::Lost, "Red scarf")).await;

    assert_eq!(store.list_items().len(), 5);
    assert_eq!(store.list_items()[0].id, item.id);
    assert_eq!(item.status, Status::Pending);
    assert_eq!(item.user_id, mike.id);
    assert_eq!(item.user, mike);
    assert_eq!(item.created_at, item.updated_at);
}

#[tokio::test]
async fn test_add_item_assigns_unique_ids() {
    let mut store = seeded_store();
    let john = demo_user(&store, "john.doe@university.edu");

    let a = store.add_item(&john, draft(ItemKind::Lost, "First")).await;
    let b = store.add_item(&john, draft(ItemKind::Found, "Second")).await;

    assert_ne!(a.id, b.id);
    assert_eq!(ids(&store.list_items()[..2]), [b.id.as_str(), a.id.as_str()]);
}

#[tokio::test]
async fn test_update_status_refreshes_timestamp_and_shares_others() {
    let mut store = seeded_store();
    let before: Vec<Arc<_>> = store.list_items().to_vec();

    let updated = store
        .update_item_status("4", Status::Verified)
        .await
        .expect("item 4 exists");

    assert_eq!(updated.status, Status::Verified);
    assert!(updated.updated_at > updated.created_at);

    let after = store.list_items();
    assert_eq!(ids(after), ids(&before));
    for (old, new) in before.iter().zip(after) {
        if old.id == "4" {
            assert!(!Arc::ptr_eq(old, new));
            assert_eq!(old.status, Status::Pending);
        } else {
            assert!(Arc::ptr_eq(old, new));
        }
    }
}

#[tokio::test]
async fn test_update_unknown_id_changes_nothing() {
    let mut store = seeded_store();
    let before: Vec<Arc<_>> = store.list_items().to_vec();

    let result = store.update_item_status("nope", Status::Claimed).await;

    assert_eq!(result, Err(StoreError::NotFound("nope".to_string())));
    let after = store.list_items();
    assert_eq!(after.len(), before.len());
    assert!(before.iter().zip(after).all(|(a, b)| Arc::ptr_eq(a, b)));
}

#[tokio::test]
async fn test_lifecycle_approve_then_claim() {
    let mut store = seeded_store();

    assert!(store.claim("4").await.is_err());
    store.approve("4").await.expect("pending item can be approved");
    let claimed = store.claim("4").await.expect("verified found item can be claimed");

    assert_eq!(claimed.status, Status::Claimed);
    assert!(store.approve("4").await.is_err());
}

#[tokio::test]
async fn test_reject_leaves_item_pending() {
    let mut store = seeded_store();
    let before = Arc::clone(store.get("4").expect("item 4"));

    let item = store.reject("4").await.expect("pending item can be rejected");

    assert!(Arc::ptr_eq(&before, &item));
    assert_eq!(store.list_items().len(), 4);
    assert!(store.reject("1").await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_mutations_wait_for_configured_latency() {
    let latency = Latency {
        mutation: Duration::from_secs(1),
        initial_load: Duration::from_millis(500),
    };
    let mut store = ItemStore::seeded(latency);

    let start = tokio::time::Instant::now();
    store
        .update_item_status("1", Status::Claimed)
        .await
        .expect("item 1 exists");

    assert!(start.elapsed() >= Duration::from_secs(1));
}

#[test]
fn test_items_by_user_and_recent() {
    let store = seeded_store();
    let admin = demo_user(&store, "admin@university.edu");

    assert_eq!(ids(&store.items_by_user(&admin.id)), ["4"]);
    assert_eq!(ids(store.recent(2)), ["1", "2"]);
    assert_eq!(store.recent(99).len(), 4);
}
