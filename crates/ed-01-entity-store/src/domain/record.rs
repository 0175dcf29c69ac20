//! Store records, list sorting and the article codec.
//!
//! The store speaks untyped JSON objects. Everything typed lives on the
//! engine side of [`encode`] / [`decode`].

use super::errors::StoreError;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared_types::{Article, ArticleDraft, ArticleStatus};
use std::cmp::Ordering;
use std::fmt;

/// An untyped store record.
pub type Record = serde_json::Map<String, Value>;

/// Field name holding the store-assigned identifier.
pub const ID_FIELD: &str = "id";

/// Read the store-assigned identifier of a record.
pub fn record_id(record: &Record) -> Option<&str> {
    record.get(ID_FIELD).and_then(Value::as_str)
}

/// Encode a typed value as a store record.
pub fn encode<T: Serialize>(collection: &str, value: &T) -> Result<Record, StoreError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(record)) => Ok(record),
        Ok(other) => Err(StoreError::codec(
            collection,
            format!("expected an object, got {other}"),
        )),
        Err(e) => Err(StoreError::codec(collection, e)),
    }
}

/// Decode a store record into a typed value.
pub fn decode<T: DeserializeOwned>(collection: &str, record: Record) -> Result<T, StoreError> {
    let id = record_id(&record).unwrap_or("?").to_string();
    serde_json::from_value(Value::Object(record))
        .map_err(|e| StoreError::codec(collection, format!("record {id}: {e}")))
}

// =============================================================================
// SORT KEY
// =============================================================================

/// List sort parameter in the store's `"-field"` notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub descending: bool,
}

impl SortKey {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    /// Parse `"order"` or `"-created_date"`. Blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match raw.strip_prefix('-') {
            Some("") => None,
            Some(field) => Some(Self::descending(field)),
            None if raw.is_empty() => None,
            None => Some(Self::ascending(raw)),
        }
    }

    /// Compare two records by this key. Missing values sort first.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ordering = compare_values(a.get(&self.field), b.get(&self.field));
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            f.write_str(&self.field)
        }
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

// =============================================================================
// ARTICLE PATCH
// =============================================================================

/// Partial update payload for an article record.
///
/// Only the fields present are written; everything else on the stored record
/// is left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArticlePatch(Record);

impl ArticlePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch carrying only a new `order` value.
    pub fn order(order: i64) -> Self {
        Self::new().set("order", order)
    }

    /// The full article payload (minus its id).
    pub fn full(article: &Article) -> Result<Self, StoreError> {
        let mut record = encode("patch", article)?;
        record.remove(ID_FIELD);
        Ok(Self(record))
    }

    /// Every editable field of a draft. Never carries `order`.
    pub fn from_draft(draft: &ArticleDraft) -> Result<Self, StoreError> {
        let mut record = encode("patch", draft)?;
        record.remove("order");
        record.remove(ID_FIELD);
        Ok(Self(record))
    }

    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn with_status(self, status: ArticleStatus) -> Self {
        self.set("status", status.as_str())
    }

    pub fn with_published_date(self, date: NaiveDate) -> Self {
        self.set("published_date", date.format("%Y-%m-%d").to_string())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_record(self) -> Record {
        self.0
    }
}
