//! # Partial Failure Flows
//!
//! Batches are never rolled back. These flows pin down what the store, the
//! cache and the open session look like after a batch fails midway, and that
//! a caller can re-list and retry.

use super::fixtures::*;
use ed_02_ordering::{CategoryFilter, OrderingError, StatusFilter};
use ed_04_bulk_operations::{BulkAction, BulkError, Selection};
use editorial_telemetry::{BULK_OPERATIONS, REORDER_COMMITS};
use serde_json::json;
use shared_types::{ArticleId, ErrorKind};

fn four_drafts() -> Vec<serde_json::Value> {
    (1..=4)
        .map(|i| {
            json!({"id": format!("d{i}"), "category": "Beauty", "status": "draft", "order": i})
        })
        .collect()
}

#[tokio::test]
async fn test_reorder_partial_commit_keeps_session_for_retry() {
    let h = Harness::new(four_drafts(), writer());
    h.console
        .begin_reorder(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap();
    h.console.move_item(3, Some(0)).unwrap();
    h.store.fail_writes_for("d2");
    let generation = h.console.cache().generation();
    let partial_before = REORDER_COMMITS.with_label_values(&["partial"]).get();

    let err = h.console.commit_reorder().await.unwrap_err();

    let OrderingError::PartialCommit { failed, total, .. } = &err else {
        panic!("expected partial commit, got {err:?}");
    };
    assert_eq!((*failed, *total), (1, 4));
    assert_eq!(err.kind(), ErrorKind::Store);
    assert!(REORDER_COMMITS.with_label_values(&["partial"]).get() > partial_before);

    // Landed writes stay, the rejected one keeps its old value.
    assert_eq!(h.stored_order("d4"), Some(0));
    assert_eq!(h.stored_order("d1"), Some(1));
    assert_eq!(h.stored_order("d2"), Some(2));
    assert_eq!(h.stored_order("d3"), Some(3));
    assert!(h.console.is_reordering());
    assert!(h.console.cache().generation() > generation);

    h.store.clear_faults();
    let report = h.console.commit_reorder().await.unwrap();

    assert_eq!(report.written, 4);
    assert!(!h.console.is_reordering());
    assert_eq!(h.stored_order("d2"), Some(2));
    let view = h
        .console
        .view(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap();
    let orders: Vec<_> = view.iter().map(|a| (a.id.as_str(), a.order)).collect();
    assert_eq!(
        orders,
        vec![("d4", Some(0)), ("d1", Some(1)), ("d2", Some(2)), ("d3", Some(3))]
    );
}

#[tokio::test]
async fn test_reorder_total_failure_leaves_cache_alone() {
    let h = Harness::new(four_drafts(), writer());
    h.console
        .begin_reorder(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap();
    h.store.fail_writes_after(0);
    let generation = h.console.cache().generation();

    let err = h.console.commit_reorder().await.unwrap_err();

    assert!(matches!(
        err,
        OrderingError::PartialCommit {
            failed: 4,
            total: 4,
            ..
        }
    ));
    assert_eq!(h.console.cache().generation(), generation);
    assert!(h.console.cancel_reorder());
}

#[tokio::test]
async fn test_bulk_delete_abort_reports_progress() {
    let h = Harness::new(four_drafts(), writer());
    let mut selection: Selection = ["d1", "d2", "d3"].into_iter().map(ArticleId::from).collect();
    h.store.fail_writes_after(1);
    let aborted_before = BULK_OPERATIONS
        .with_label_values(&["delete", "aborted"])
        .get();

    let err = h.console.bulk_delete(&mut selection).await.unwrap_err();

    match &err {
        BulkError::Aborted {
            action,
            applied,
            total,
            failed_id,
            ..
        } => {
            assert_eq!(*action, BulkAction::Delete);
            assert_eq!((*applied, *total), (1, 3));
            assert_eq!(failed_id.as_str(), "d2");
        }
        other => panic!("expected abort, got {other:?}"),
    }
    assert!(BULK_OPERATIONS.with_label_values(&["delete", "aborted"]).get() > aborted_before);
    // Selection survives so the operator can retry what is left.
    assert_eq!(selection.len(), 3);
    assert!(h.store.get("Article", "d1").is_none());
    assert!(h.store.get("Article", "d2").is_some());

    h.store.clear_faults();
    let mut remaining: Selection = selection
        .ids()
        .iter()
        .filter(|id| h.store.get("Article", id.as_str()).is_some())
        .cloned()
        .collect();
    let report = h.console.bulk_delete(&mut remaining).await.unwrap();

    assert_eq!(report.applied, 2);
    let view = h
        .console
        .view(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap();
    assert_eq!(view.len(), 1);
}

#[tokio::test]
async fn test_bulk_publish_abort_mid_batch() {
    let h = Harness::new(four_drafts(), owner());
    let mut selection: Selection = ["d1", "d2", "d3", "d4"]
        .into_iter()
        .map(ArticleId::from)
        .collect();
    h.store.fail_writes_for("d3");

    let err = h.console.bulk_publish(&mut selection).await.unwrap_err();

    assert!(matches!(
        err,
        BulkError::Aborted {
            applied: 2,
            total: 4,
            ..
        }
    ));
    assert_eq!(h.stored_str("d1", "status").as_deref(), Some("published"));
    assert_eq!(h.stored_str("d2", "status").as_deref(), Some("published"));
    assert_eq!(h.stored_str("d3", "status").as_deref(), Some("draft"));
    assert_eq!(h.stored_str("d4", "status").as_deref(), Some("draft"));
}

#[tokio::test]
async fn test_store_outage_surfaces_as_store_error() {
    let h = Harness::new(four_drafts(), writer());
    h.store.set_unavailable(true);

    let err = h
        .console
        .view(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Store);
    assert!(h.console.begin_reorder(CategoryFilter::All, StatusFilter::All).await.is_err());
    assert!(!h.console.is_reordering());
}
