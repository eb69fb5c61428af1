//! Query pipeline
//!
//! A query is described by a [`QuerySpec`]:
//! - free text, matched case-insensitively as a substring of name, handle,
//!   description and tags
//! - a platform facet (`all` or an exact platform value)
//! - a category facet (`all` or an exact category value)
//! - a sort key (`relevance`, `engagement`, `followers`, `likes`)
//!
//! [`run_query`] turns a profile list and a query into an ordered result set
//! plus aggregate [`Stats`]. It is a pure function so the same code serves
//! profiles fetched remotely and the embedded fallback.

mod engine;
mod stats;

pub use engine::{filter, run_query, sort, QueryOutcome};
pub use stats::{round_tenth, Stats};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wildcard value accepted by the platform and category facets
pub const ALL: &str = "all";

/// Complete description of a single query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuerySpec {
    /// Free text; surrounding whitespace is ignored
    #[serde(alias = "query")]
    pub text: String,
    pub platform: Facet,
    pub category: Facet,
    pub sort_key: SortKey,
}

impl QuerySpec {
    /// Create a query matching `text` across all platforms and categories
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Restrict to one platform (`"all"` clears the restriction)
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Facet::from(platform.into());
        self
    }

    /// Restrict to one category (`"all"` clears the restriction)
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Facet::from(category.into());
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// The text to match against, lowercased and trimmed
    pub fn needle(&self) -> String {
        self.text.trim().to_lowercase()
    }

    /// Check if the query selects every profile
    pub fn is_unfiltered(&self) -> bool {
        self.text.trim().is_empty() && self.platform.is_all() && self.category.is_all()
    }
}

/// Filter over one exact-match attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Check a profile attribute against the facet
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }
}

impl From<String> for Facet {
    fn from(value: String) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<&str> for Facet {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Facet> for String {
    fn from(facet: Facet) -> Self {
        match facet {
            Facet::All => ALL.to_string(),
            Facet::Only(value) => value,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Keep collection order; there is no relevance scoring
    #[default]
    Relevance,
    Engagement,
    Followers,
    Likes,
}

impl SortKey {
    pub const VARIANTS: [SortKey; 4] = [
        SortKey::Relevance,
        SortKey::Engagement,
        SortKey::Followers,
        SortKey::Likes,
    ];

    /// Parse a sort key; unknown keys fall back to relevance
    pub fn parse(value: &str) -> Self {
        match value {
            "engagement" => Self::Engagement,
            "followers" => Self::Followers,
            "likes" => Self::Likes,
            _ => Self::Relevance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Engagement => "engagement",
            Self::Followers => "followers",
            Self::Likes => "likes",
        }
    }

    /// Label used by the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::Engagement => "Engagement Rate",
            Self::Followers => "Followers",
            Self::Likes => "Avg Likes",
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
