//! # Editorial Console Runtime
//!
//! Demo entry point: seeds an in-memory store, then drives one editorial
//! session through every engine and prints the resulting metrics.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialize logging and register metrics
//! 3. Seed the in-memory entity store
//! 4. Build the console and start the cache listener
//! 5. Run the session and dump the metrics registry

use std::sync::Arc;

use anyhow::{Context, Result};
use ed_01_entity_store::{EntityStore, InMemoryEntityStore, Record};
use ed_02_ordering::{CategoryFilter, Direction, StatusFilter};
use ed_04_bulk_operations::Selection;
use editorial_runtime::{spawn_cache_listener, EditorialConsole, RuntimeConfig};
use editorial_telemetry::{encode_metrics, init_telemetry};
use serde_json::{json, Value};
use shared_types::{Actor, ArticleDraft, ArticleStatus, Category, SystemClock};
use tracing::{info, warn};

const DEMO_ADMIN: &str = "chief@editorial.example";
const DEMO_WRITER: &str = "writer@editorial.example";

fn records(values: Vec<Value>) -> impl Iterator<Item = Record> {
    values.into_iter().filter_map(|v| v.as_object().cloned())
}

fn seed(store: &InMemoryEntityStore, config: &RuntimeConfig) {
    store.seed(
        &config.store.articles_collection,
        records(vec![
            json!({"id": "travel-kyoto", "title": "Kyoto in Autumn", "category": "Travel",
                   "status": "published", "order": 1, "published_date": "2024-10-01"}),
            json!({"id": "travel-lisbon", "title": "Lisbon Trams", "category": "Travel",
                   "status": "draft", "order": 2}),
            json!({"id": "travel-oslo", "title": "Oslo Saunas", "category": "Travel",
                   "status": "awaiting_approval", "order": 3}),
            json!({"id": "art-bauhaus", "title": "Bauhaus at 100", "category": "Art",
                   "status": "awaiting_approval", "order": 4, "author_id": "m1",
                   "tags": ["t1"]}),
            json!({"id": "music-vinyl", "title": "The Vinyl Revival", "category": "Music",
                   "status": "draft"}),
        ]),
    );
    store.seed(
        &config.store.team_collection,
        records(vec![
            json!({"id": "m1", "full_name": "Ana Ruiz", "title": "Senior Editor", "order": 1}),
            json!({"id": "m2", "full_name": "Tom Berg", "title": "Writer", "active": false,
                   "order": 2}),
        ]),
    );
    store.seed(
        &config.store.tags_collection,
        records(vec![json!({"id": "t1", "name": "Design"})]),
    );
}

async fn run_session(console: &EditorialConsole) -> Result<()> {
    let references = console.references().await.context("loading references")?;
    for member in references.author_options() {
        info!(author = %member.display_label(), "Author available");
    }

    // Reorder the Travel category: last article to the top, then one slot down.
    console
        .begin_reorder(Category::Travel.into(), StatusFilter::All)
        .await?;
    console.move_item(2, Some(0))?;
    let copy = console.nudge(0, Direction::Down)?;
    info!(ids = ?copy.ids().map(|id| id.as_str()).collect::<Vec<_>>(), "Working copy");
    let report = console.commit_reorder().await?;
    info!(written = report.written, "Reorder committed");

    // A writer's publish request is routed to approval.
    console.sign_in(Actor::new(DEMO_WRITER));
    let created = console
        .create(
            ArticleDraft::new(Category::Fashion, ArticleStatus::Published)
                .with_title("Street Style Notes"),
        )
        .await?;
    info!(id = %created.id, status = %created.status, "Writer created article");

    // The chief editor approves everything waiting.
    let admin_role = &console.config().lifecycle.privilege.admin_role;
    console.sign_in(Actor::new(DEMO_ADMIN).with_role(admin_role));
    let waiting = console
        .view(CategoryFilter::All, ArticleStatus::AwaitingApproval.into())
        .await?;
    let mut selection: Selection = waiting.iter().map(|a| a.id.clone()).collect();
    let report = console.bulk_publish(&mut selection).await?;
    info!(applied = report.applied, skipped = report.skipped.len(), "Bulk publish finished");

    for article in console.view(CategoryFilter::All, StatusFilter::All).await?.iter() {
        info!(
            id = %article.id,
            category = %article.category,
            status = %article.status,
            order = ?article.order,
            "Article"
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    init_telemetry(&config.telemetry).context("initializing telemetry")?;

    info!("===========================================");
    info!("  Editorial Console Runtime");
    info!("===========================================");

    let memory = Arc::new(InMemoryEntityStore::new());
    seed(&memory, &config);
    let store: Arc<dyn EntityStore> = memory;

    let console = EditorialConsole::build(
        config.clone(),
        store,
        Actor::new(DEMO_ADMIN).with_role(&config.lifecycle.privilege.admin_role),
        Arc::new(SystemClock),
    );
    let listener = spawn_cache_listener(console.cache());

    if let Err(e) = run_session(&console).await {
        warn!(error = %e, "Demo session failed");
    }

    drop(console);
    let handled = listener.await.context("cache listener panicked")?;
    info!(handled, "Cache listener stopped");

    println!("{}", encode_metrics()?);
    Ok(())
}
