//! Shared fixtures: a seeded in-memory store and a console wired over it.

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use ed_01_entity_store::{EntityStore, InMemoryEntityStore, Record, StoreCall};
use ed_03_lifecycle::{LifecycleConfig, PrivilegePolicy};
use editorial_runtime::{EditorialConsole, RuntimeConfig};
use serde_json::Value;
use shared_types::{Actor, FixedClock};

pub const OWNER: &str = "owner@example.com";
pub const WRITER: &str = "writer@example.com";
pub const ADMIN_ROLE: &str = "master_admin";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
}

pub fn owner() -> Actor {
    Actor::new(OWNER)
}

pub fn admin() -> Actor {
    Actor::new("chief@example.com").with_role(ADMIN_ROLE)
}

pub fn writer() -> Actor {
    Actor::new(WRITER)
}

pub struct Harness {
    pub store: Arc<InMemoryEntityStore>,
    pub clock: Arc<FixedClock>,
    pub console: EditorialConsole,
}

impl Harness {
    pub fn new(articles: Vec<Value>, actor: Actor) -> Self {
        Self::wrapped(articles, actor, |store| store)
    }

    /// Like [`Harness::new`], but the console talks to the store through
    /// whatever `wrap` returns.
    pub fn wrapped(
        articles: Vec<Value>,
        actor: Actor,
        wrap: impl FnOnce(Arc<dyn EntityStore>) -> Arc<dyn EntityStore>,
    ) -> Self {
        let store = Arc::new(InMemoryEntityStore::new());
        store.seed(
            "Article",
            articles.into_iter().filter_map(|v| v.as_object().cloned()),
        );
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap(),
        ));
        let config = RuntimeConfig {
            lifecycle: LifecycleConfig {
                privilege: PrivilegePolicy::new(Some(OWNER.to_string()), ADMIN_ROLE),
                ..LifecycleConfig::default()
            },
            ..RuntimeConfig::default()
        };
        let inner: Arc<dyn EntityStore> = store.clone();
        let console = EditorialConsole::build(config, wrap(inner), actor, clock.clone());
        Self {
            store,
            clock,
            console,
        }
    }

    pub fn article(&self, id: &str) -> Record {
        self.store.get("Article", id).unwrap()
    }

    pub fn stored_order(&self, id: &str) -> Option<i64> {
        self.article(id).get("order").and_then(Value::as_i64)
    }

    pub fn stored_str(&self, id: &str, field: &str) -> Option<String> {
        self.article(id)
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    pub fn update_calls(&self) -> Vec<StoreCall> {
        self.store
            .write_calls()
            .into_iter()
            .filter(|c| matches!(c, StoreCall::Update { .. }))
            .collect()
    }
}
