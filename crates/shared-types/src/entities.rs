//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Article**: `Article`, `ArticleDraft`, `NewArticle`, `ArticleStatus`, `Category`
//! - **Reference data**: `EditorialTeamMember`, `Tag` (read-only, store supplied)
//! - **Actors**: `Actor`

use crate::errors::ParseEnumError;
use crate::lenient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Opaque content fields (title, media URLs, body sections, payloads).
///
/// Stored and returned verbatim; field order is irrelevant.
pub type Content = serde_json::Map<String, serde_json::Value>;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Store-assigned article identifier. Immutable once assigned.
    ArticleId
);
string_id!(
    /// Identifier of an editorial team member.
    MemberId
);
string_id!(
    /// Identifier of a tag.
    TagId
);

// =============================================================================
// STATUS & CATEGORY
// =============================================================================

/// Publication status.
///
/// ```text
/// [draft] ──submit──→ [awaiting_approval] ──publish (privileged)──→ [published]
///    ↑                                                                  │
///    └────────────────────── edit / resubmit ───────────────────────────┘
/// ```
///
/// There is no terminal state; published articles stay editable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    #[default]
    Draft,
    AwaitingApproval,
    Published,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 3] = [
        ArticleStatus::Draft,
        ArticleStatus::AwaitingApproval,
        ArticleStatus::Published,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::AwaitingApproval => "awaiting_approval",
            ArticleStatus::Published => "published",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "status",
                value: s.to_string(),
            })
    }
}

/// Fixed set of topic categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Fashion,
    Art,
    Cuisine,
    Travel,
    Music,
    Beauty,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Fashion,
        Category::Art,
        Category::Cuisine,
        Category::Travel,
        Category::Music,
        Category::Beauty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fashion => "Fashion",
            Category::Art => "Art",
            Category::Cuisine => "Cuisine",
            Category::Travel => "Travel",
            Category::Music => "Music",
            Category::Beauty => "Beauty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "category",
                value: s.to_string(),
            })
    }
}

// =============================================================================
// ARTICLE
// =============================================================================

/// An article as stored in the entity store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Store-assigned identifier.
    pub id: ArticleId,
    /// Human-facing code (`ART-...`) assigned on create.
    #[serde(rename = "article_id", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub category: Category,
    /// Position key. Absent sorts as 0.
    #[serde(
        default,
        deserialize_with = "lenient::order::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub author_id: Option<MemberId>,
    #[serde(default)]
    pub tags: BTreeSet<TagId>,
    /// Set once, at the first transition into `published`.
    #[serde(default, with = "lenient::date", skip_serializing_if = "Option::is_none")]
    pub published_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub content: Content,
}

impl Article {
    /// Minimal article, mostly for tests and fixtures.
    pub fn new(id: impl Into<ArticleId>, category: Category, status: ArticleStatus) -> Self {
        Self {
            id: id.into(),
            code: None,
            status,
            category,
            order: None,
            author_id: None,
            tags: BTreeSet::new(),
            published_date: None,
            content: Content::new(),
        }
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.content
            .insert("title".to_string(), serde_json::Value::from(title));
        self
    }

    /// Order key used for sorting; a missing value counts as 0.
    pub fn sort_key(&self) -> i64 {
        self.order.unwrap_or(0)
    }

    pub fn title(&self) -> Option<&str> {
        self.content.get("title").and_then(|v| v.as_str())
    }

    /// Transition into `published`, stamping `published_date` only if absent.
    pub fn mark_published(&mut self, today: NaiveDate) {
        self.status = ArticleStatus::Published;
        if self.published_date.is_none() {
            self.published_date = Some(today);
        }
    }
}

/// Editable article fields as collected by the form layer.
///
/// `status` is the *requested* status; the lifecycle engine derives the
/// effective one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleDraft {
    pub status: ArticleStatus,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<MemberId>,
    pub tags: BTreeSet<TagId>,
    #[serde(with = "lenient::date", skip_serializing_if = "Option::is_none")]
    pub published_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub content: Content,
}

impl ArticleDraft {
    pub fn new(category: Category, status: ArticleStatus) -> Self {
        Self {
            status,
            category,
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<MemberId>) -> Self {
        self.author_id = Some(author.into());
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.content
            .insert("title".to_string(), serde_json::Value::from(title));
        self
    }

    /// Prefill the form from an existing article.
    pub fn from_article(article: &Article) -> Self {
        Self {
            status: article.status,
            category: article.category,
            author_id: article.author_id.clone(),
            tags: article.tags.clone(),
            published_date: article.published_date,
            content: article.content.clone(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.content.get("title").and_then(|v| v.as_str())
    }

    /// Required fields the form boundary must reject when empty.
    ///
    /// The engines never call this; the form layer does before submitting.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title().map_or(true, |t| t.trim().is_empty()) {
            missing.push("title");
        }
        if self.author_id.is_none() {
            missing.push("author_id");
        }
        missing
    }

    /// Toggle a tag in or out of the draft's tag set.
    pub fn toggle_tag(&mut self, tag: TagId) {
        if !self.tags.remove(&tag) {
            self.tags.insert(tag);
        }
    }
}

/// Payload for the create path: a draft plus engine-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewArticle {
    #[serde(rename = "article_id")]
    pub code: String,
    pub order: i64,
    #[serde(flatten)]
    pub draft: ArticleDraft,
}

// =============================================================================
// REFERENCE DATA
// =============================================================================

/// A member of the editorial team. Read-only for the engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorialTeamMember {
    pub id: MemberId,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default, deserialize_with = "lenient::order::deserialize")]
    pub order: Option<i64>,
}

impl EditorialTeamMember {
    /// Members are active unless explicitly flagged `active: false`.
    pub fn is_active(&self) -> bool {
        self.active != Some(false)
    }

    pub fn display_label(&self) -> String {
        format!("{} - {}", self.full_name, self.title)
    }
}

/// A tag. Read-only for the engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    #[serde(default)]
    pub name: String,
}

// =============================================================================
// ACTORS
// =============================================================================

/// The operator currently driving the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Login identity (an email address in practice).
    pub identity: String,
    /// Administrative role, if any.
    #[serde(default)]
    pub role: Option<String>,
}

impl Actor {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}
