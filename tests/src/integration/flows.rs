//! # End-to-End Editorial Flows
//!
//! Reorder, create, publish and bulk flows through the wired console.
//!
//! ```text
//! EditorialConsole ──► engine ──► ArticleRepository ──► InMemoryEntityStore
//!        ▲                                                     │
//!        └──────────── ArticleCache (invalidated) ◄────────────┘
//! ```

use super::fixtures::*;
use chrono::Duration;
use ed_01_entity_store::StoreCall;
use ed_02_ordering::{CategoryFilter, Direction, StatusFilter};
use ed_03_lifecycle::LifecycleError;
use ed_04_bulk_operations::{BulkError, Selection};
use serde_json::json;
use shared_types::{ArticleDraft, ArticleId, ArticleStatus, Category, ErrorKind};

fn ids(articles: &[shared_types::Article]) -> Vec<&str> {
    articles.iter().map(|a| a.id.as_str()).collect()
}

fn travel_desk() -> Vec<serde_json::Value> {
    vec![
        json!({"id": "t3", "category": "Travel", "status": "draft", "order": 3}),
        json!({"id": "t1", "category": "Travel", "status": "draft", "order": 1}),
        json!({"id": "t2", "category": "Travel", "status": "draft", "order": 2}),
        json!({"id": "tp", "category": "Travel", "status": "published", "order": 0,
               "published_date": "2023-01-01"}),
        json!({"id": "a1", "category": "Art", "status": "draft", "order": 7}),
    ]
}

// =============================================================================
// ORDERING
// =============================================================================

#[tokio::test]
async fn test_travel_draft_reorder_persists_positions() {
    let h = Harness::new(travel_desk(), writer());
    let (travel, drafts) = (
        CategoryFilter::Only(Category::Travel),
        StatusFilter::Only(ArticleStatus::Draft),
    );

    let view = h.console.view(travel, drafts).await.unwrap();
    assert_eq!(ids(&view), vec!["t1", "t2", "t3"]);

    h.console.begin_reorder(travel, drafts).await.unwrap();
    let copy = h.console.move_item(0, Some(2)).unwrap();
    assert_eq!(
        copy.articles().iter().map(|a| a.order).collect::<Vec<_>>(),
        vec![Some(0), Some(1), Some(2)]
    );

    h.store.clear_calls();
    let report = h.console.commit_reorder().await.unwrap();

    assert_eq!(report.written, 3);
    assert_eq!(h.stored_order("t2"), Some(0));
    assert_eq!(h.stored_order("t3"), Some(1));
    assert_eq!(h.stored_order("t1"), Some(2));
    // Articles outside the view keep their order.
    assert_eq!(h.stored_order("tp"), Some(0));
    assert_eq!(h.stored_order("a1"), Some(7));
    for call in h.update_calls() {
        let StoreCall::Update { fields, .. } = call else {
            unreachable!()
        };
        assert_eq!(fields, vec!["order".to_string()]);
    }

    let view = h.console.view(travel, drafts).await.unwrap();
    assert_eq!(ids(&view), vec!["t2", "t3", "t1"]);
    assert!(!h.console.is_reordering());
}

#[tokio::test]
async fn test_out_of_range_move_is_benign() {
    let h = Harness::new(travel_desk(), writer());
    let travel = CategoryFilter::Only(Category::Travel);

    let before = h.console.begin_reorder(travel, StatusFilter::All).await.unwrap();
    let after_far = h.console.move_item(1, Some(40)).unwrap();
    let after_cancelled_drop = h.console.move_item(1, None).unwrap();

    assert_eq!(after_far, before);
    assert_eq!(after_cancelled_drop, before);
}

#[tokio::test]
async fn test_nudges_then_commit() {
    let h = Harness::new(travel_desk(), writer());
    let drafts = StatusFilter::Only(ArticleStatus::Draft);

    h.console
        .begin_reorder(Category::Travel.into(), drafts)
        .await
        .unwrap();
    h.console.nudge(0, Direction::Up).unwrap();
    h.console.nudge(2, Direction::Down).unwrap();
    let copy = h.console.nudge(2, Direction::Up).unwrap();
    assert_eq!(ids(copy.articles()), vec!["t1", "t3", "t2"]);

    h.console.commit_reorder().await.unwrap();

    assert_eq!(h.stored_order("t3"), Some(1));
    assert_eq!(h.stored_order("t2"), Some(2));
}

#[tokio::test]
async fn test_cancel_discards_working_copy() {
    let h = Harness::new(travel_desk(), writer());

    h.console
        .begin_reorder(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap();
    h.console.move_item(0, Some(3)).unwrap();
    h.store.clear_calls();

    assert!(h.console.cancel_reorder());
    assert!(h.console.working_copy().is_none());
    assert!(h.store.write_calls().is_empty());
    assert!(!h.console.cancel_reorder());
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[tokio::test]
async fn test_create_takes_next_order_and_code() {
    let h = Harness::new(travel_desk(), writer());

    let created = h
        .console
        .create(ArticleDraft::new(Category::Cuisine, ArticleStatus::Draft).with_title("Ramen"))
        .await
        .unwrap();

    assert_eq!(created.order, Some(8));
    let code = created.code.clone().unwrap();
    assert!(code.starts_with("ART-"));
    assert_eq!(h.stored_str(created.id.as_str(), "article_id"), Some(code));
}

#[tokio::test]
async fn test_create_into_empty_collection() {
    let h = Harness::new(vec![], writer());

    let created = h
        .console
        .create(ArticleDraft::default().with_title("First"))
        .await
        .unwrap();

    assert_eq!(created.order, Some(1));
    assert_eq!(created.category, Category::Fashion);
    assert_eq!(created.status, ArticleStatus::Draft);
}

#[tokio::test]
async fn test_publish_request_by_writer_awaits_approval() {
    let h = Harness::new(travel_desk(), writer());

    let created = h
        .console
        .create(ArticleDraft::new(Category::Music, ArticleStatus::Published))
        .await
        .unwrap();
    let updated = h
        .console
        .update(
            &ArticleId::from("t1"),
            ArticleDraft::new(Category::Travel, ArticleStatus::Published),
        )
        .await
        .unwrap();

    for article in [&created, &updated] {
        assert_eq!(article.status, ArticleStatus::AwaitingApproval);
        assert_eq!(article.published_date, None);
    }
    assert_eq!(
        h.stored_str("t1", "status").as_deref(),
        Some("awaiting_approval")
    );
}

#[tokio::test]
async fn test_privileged_create_publishes_with_date() {
    let h = Harness::new(travel_desk(), admin());

    let created = h
        .console
        .create(ArticleDraft::new(Category::Art, ArticleStatus::Published))
        .await
        .unwrap();

    assert_eq!(created.status, ArticleStatus::Published);
    assert_eq!(created.published_date, Some(today()));
}

#[tokio::test]
async fn test_publish_date_set_once() {
    let h = Harness::new(travel_desk(), owner());
    let article = h
        .console
        .view(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap()
        .into_iter()
        .find(|a| a.id.as_str() == "t1")
        .unwrap();

    let first = h.console.publish(&article).await.unwrap();
    assert_eq!(first.status, ArticleStatus::Published);
    assert_eq!(first.published_date, Some(today()));

    h.clock.advance(Duration::days(3));
    let second = h.console.publish(&first).await.unwrap();

    assert_eq!(second.published_date, Some(today()));
    assert_eq!(h.stored_str("t1", "published_date").as_deref(), Some("2024-05-17"));
}

#[tokio::test]
async fn test_publish_denied_for_writer() {
    let h = Harness::new(travel_desk(), writer());
    let article = h
        .console
        .view(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap()
        .remove(0);
    h.store.clear_calls();

    let err = h.console.publish(&article).await.unwrap_err();

    assert!(matches!(err, LifecycleError::PermissionDenied { .. }));
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    assert!(h.store.calls().is_empty());
}

#[tokio::test]
async fn test_delete_needs_no_privilege() {
    let h = Harness::new(travel_desk(), writer());

    h.console.delete(&ArticleId::from("a1")).await.unwrap();

    assert!(h.store.get("Article", "a1").is_none());
    let view = h
        .console
        .view(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap();
    assert_eq!(view.len(), 4);
}

// =============================================================================
// BULK
// =============================================================================

#[tokio::test]
async fn test_empty_bulk_operations_issue_no_calls() {
    let h = Harness::new(travel_desk(), admin());
    h.store.clear_calls();

    let publish = h.console.bulk_publish(&mut Selection::default()).await;
    let delete = h.console.bulk_delete(&mut Selection::default()).await;

    assert!(matches!(publish, Err(BulkError::EmptySelection { .. })));
    assert_eq!(delete.unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert!(h.store.calls().is_empty());
}

#[tokio::test]
async fn test_bulk_publish_denied_for_writer() {
    let h = Harness::new(travel_desk(), writer());
    let mut selection: Selection = ["t1", "t2"].into_iter().map(ArticleId::from).collect();
    h.store.clear_calls();

    let err = h.console.bulk_publish(&mut selection).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    assert!(h.store.calls().is_empty());
    assert_eq!(selection.len(), 2);
}

#[tokio::test]
async fn test_bulk_publish_from_view_selection() {
    let h = Harness::new(travel_desk(), admin());
    let drafts = h
        .console
        .view(
            Category::Travel.into(),
            StatusFilter::Only(ArticleStatus::Draft),
        )
        .await
        .unwrap();
    let mut selection = Selection::default();
    selection.select_all(&drafts);
    selection.toggle(ArticleId::from("tp"));
    selection.toggle(ArticleId::from("gone"));

    let report = h.console.bulk_publish(&mut selection).await.unwrap();

    assert_eq!(report.requested, 5);
    assert_eq!(report.applied, 4);
    assert_eq!(report.skipped, vec![ArticleId::from("gone")]);
    assert!(selection.is_empty());
    for id in ["t1", "t2", "t3"] {
        assert_eq!(h.stored_str(id, "status").as_deref(), Some("published"));
        assert_eq!(h.stored_str(id, "published_date").as_deref(), Some("2024-05-17"));
    }
    // Already dated articles keep their date.
    assert_eq!(h.stored_str("tp", "published_date").as_deref(), Some("2023-01-01"));

    let published = h
        .console
        .view(CategoryFilter::All, ArticleStatus::Published.into())
        .await
        .unwrap();
    assert_eq!(published.len(), 4);
}

#[tokio::test]
async fn test_bulk_delete_by_writer() {
    let h = Harness::new(travel_desk(), writer());
    let mut selection: Selection = ["t1", "a1"].into_iter().map(ArticleId::from).collect();

    let report = h.console.bulk_delete(&mut selection).await.unwrap();

    assert_eq!(report.applied, 2);
    let remaining = h
        .console
        .view(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap();
    assert_eq!(ids(&remaining), vec!["tp", "t2", "t3"]);
}

#[tokio::test]
async fn test_unrecognised_record_does_not_block_the_desk() {
    let mut articles = travel_desk();
    articles.push(json!({"id": "odd", "category": "Sports", "status": "draft", "order": 99}));
    let h = Harness::new(articles, writer());

    let view = h
        .console
        .view(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap();
    let copy = h
        .console
        .begin_reorder(CategoryFilter::All, StatusFilter::All)
        .await
        .unwrap();
    h.console.cancel_reorder();
    let created = h
        .console
        .create(ArticleDraft::new(Category::Art, ArticleStatus::Draft))
        .await
        .unwrap();

    assert_eq!(view.len(), 5);
    assert!(view.iter().all(|a| a.id.as_str() != "odd"));
    assert_eq!(copy.articles().len(), 5);
    // Orders of skipped records are invisible to order assignment.
    assert_eq!(created.order, Some(8));
    assert!(h.store.get("Article", "odd").is_some());
}
