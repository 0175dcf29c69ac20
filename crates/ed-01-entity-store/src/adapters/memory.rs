//! # In-Memory Entity Store
//!
//! Collections live in a map of insertion-ordered record vectors. The adapter
//! logs every request and can inject faults:
//!
//! - writes addressing specific ids fail
//! - writes beyond a quota fail
//! - the whole store is unavailable
//!
//! Requests complete without yielding; wrap the store to add latency.

use crate::domain::errors::StoreError;
use crate::domain::record::{record_id, Record, SortKey, ID_FIELD};
use crate::ports::outbound::EntityStore;
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::debug;
use uuid::Uuid;

/// A store request as observed by the in-memory adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreCall {
    List { collection: String },
    ListByIds { collection: String, ids: Vec<String> },
    Create { collection: String },
    Update {
        collection: String,
        id: String,
        fields: Vec<String>,
    },
    Delete { collection: String, id: String },
}

impl StoreCall {
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            StoreCall::Create { .. } | StoreCall::Update { .. } | StoreCall::Delete { .. }
        )
    }
}

#[derive(Default)]
struct Faults {
    /// Writes addressing these ids fail
    failing_ids: HashSet<String>,
    /// Writes beyond this many successful ones fail
    writes_allowed: Option<usize>,
    /// Every request fails
    unavailable: bool,
    writes_done: usize,
}

/// In-memory entity store for tests and local runs.
///
/// Records keep insertion order per collection. Every request is appended to
/// a call log before faults are evaluated, so tests can assert exactly which
/// requests an engine issued.
#[derive(Default)]
pub struct InMemoryEntityStore {
    collections: RwLock<HashMap<String, Vec<Record>>>,
    calls: Mutex<Vec<StoreCall>>,
    faults: Mutex<Faults>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert records verbatim, bypassing the call log.
    pub fn seed(&self, collection: &str, records: impl IntoIterator<Item = Record>) {
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .extend(records);
    }

    /// Snapshot of a collection in insertion order.
    pub fn records(&self, collection: &str) -> Vec<Record> {
        self.collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn get(&self, collection: &str, id: &str) -> Option<Record> {
        self.collections
            .read()
            .get(collection)
            .and_then(|records| records.iter().find(|r| record_id(r) == Some(id)).cloned())
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().clone()
    }

    pub fn write_calls(&self) -> Vec<StoreCall> {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.is_write())
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Make every write addressed to `id` fail.
    pub fn fail_writes_for(&self, id: &str) {
        self.faults.lock().failing_ids.insert(id.to_string());
    }

    /// Let `count` more writes succeed, then fail the rest.
    pub fn fail_writes_after(&self, count: usize) {
        let mut faults = self.faults.lock();
        faults.writes_allowed = Some(faults.writes_done + count);
    }

    /// Fail every request, reads included.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.faults.lock().unavailable = unavailable;
    }

    pub fn clear_faults(&self) {
        *self.faults.lock() = Faults::default();
    }

    fn record_call(&self, call: StoreCall) {
        self.calls.lock().push(call);
    }

    fn check_read(&self) -> Result<(), StoreError> {
        if self.faults.lock().unavailable {
            return Err(StoreError::request("store unavailable"));
        }
        Ok(())
    }

    fn check_write(&self, id: Option<&str>) -> Result<(), StoreError> {
        let mut faults = self.faults.lock();
        if faults.unavailable {
            return Err(StoreError::request("store unavailable"));
        }
        if let Some(id) = id {
            if faults.failing_ids.contains(id) {
                return Err(StoreError::request(format!("write rejected for {id}")));
            }
        }
        if let Some(allowed) = faults.writes_allowed {
            if faults.writes_done >= allowed {
                return Err(StoreError::request("write quota exhausted"));
            }
        }
        faults.writes_done += 1;
        Ok(())
    }

    fn now_stamp() -> Value {
        Value::String(chrono::Utc::now().to_rfc3339())
    }
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn list(
        &self,
        collection: &str,
        sort: Option<&SortKey>,
    ) -> Result<Vec<Record>, StoreError> {
        self.record_call(StoreCall::List {
            collection: collection.to_string(),
        });
        self.check_read()?;

        let mut records = self.records(collection);
        if let Some(key) = sort {
            records.sort_by(|a, b| key.compare(a, b));
        }
        Ok(records)
    }

    async fn list_by_ids(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<Vec<Record>, StoreError> {
        self.record_call(StoreCall::ListByIds {
            collection: collection.to_string(),
            ids: ids.to_vec(),
        });
        self.check_read()?;

        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        Ok(self
            .records(collection)
            .into_iter()
            .filter(|record| record_id(record).is_some_and(|id| wanted.contains(id)))
            .collect())
    }

    async fn create(&self, collection: &str, mut record: Record) -> Result<Record, StoreError> {
        self.record_call(StoreCall::Create {
            collection: collection.to_string(),
        });
        self.check_write(None)?;

        let id = Uuid::new_v4().simple().to_string();
        record.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        record.insert("created_date".to_string(), Self::now_stamp());
        record.insert("updated_date".to_string(), Self::now_stamp());

        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());

        debug!(collection, id = %id, "Record created");
        Ok(record)
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        partial: Record,
    ) -> Result<Record, StoreError> {
        self.record_call(StoreCall::Update {
            collection: collection.to_string(),
            id: id.to_string(),
            fields: partial.keys().cloned().collect(),
        });
        self.check_write(Some(id))?;

        let mut collections = self.collections.write();
        let record = collections
            .get_mut(collection)
            .and_then(|records| records.iter_mut().find(|r| record_id(r) == Some(id)))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        for (field, value) in partial {
            if field != ID_FIELD {
                record.insert(field, value);
            }
        }
        record.insert("updated_date".to_string(), Self::now_stamp());
        Ok(record.clone())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.record_call(StoreCall::Delete {
            collection: collection.to_string(),
            id: id.to_string(),
        });
        self.check_write(Some(id))?;

        let mut collections = self.collections.write();
        let records = collections.entry(collection.to_string()).or_default();
        let before = records.len();
        records.retain(|r| record_id(r) != Some(id));
        if records.len() == before {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
