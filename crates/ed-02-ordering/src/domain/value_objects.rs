//! Value objects for the ordering engine.

use serde::{Deserialize, Serialize};
use shared_types::{Article, ArticleStatus, Category, ParseEnumError};
use std::fmt;
use std::str::FromStr;

/// Keyword used by both filters for "no restriction".
pub const ALL: &str = "all";

/// Category restriction of a view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, article: &Article) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => article.category == *category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL) {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Status restriction of a view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ArticleStatus),
}

impl StatusFilter {
    pub fn matches(&self, article: &Article) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => article.status == *status,
        }
    }
}

impl From<ArticleStatus> for StatusFilter {
    fn from(status: ArticleStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(ALL),
            StatusFilter::Only(status) => status.fmt(f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL) {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Status filters an actor may choose from.
///
/// Only privileged actors are offered the `published` filter.
pub fn status_filter_options(privileged: bool) -> Vec<StatusFilter> {
    std::iter::once(StatusFilter::All)
        .chain(
            ArticleStatus::ALL
                .iter()
                .filter(|status| privileged || **status != ArticleStatus::Published)
                .map(|status| StatusFilter::Only(*status)),
        )
        .collect()
}

/// Direction of a one-slot nudge in a working copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Towards index 0
    Up,
    /// Towards the end
    Down,
}

/// A single persisted order assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub id: shared_types::ArticleId,
    pub order: i64,
}
