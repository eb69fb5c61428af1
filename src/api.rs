//! Wire types of the influencer HTTP API, shared by the server handlers and
//! the remote source client

use crate::profiles::Profile;
use crate::query::Stats;
use serde::{Deserialize, Serialize};

/// Body of `GET /api/influencers` and `POST /api/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub results: Vec<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
}

impl ProfileEnvelope {
    pub fn new(results: Vec<Profile>) -> Self {
        Self {
            success: true,
            count: results.len(),
            results,
            stats: None,
        }
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// Body of `POST /api/search`
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub platform: &'a str,
    pub category: &'a str,
}

/// Failure body for API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

fn default_success() -> bool {
    true
}
