//! Profile source trait and error types

use crate::profiles::{CatalogError, Profile, ProfileList};
use crate::query::{self, QuerySpec};
use async_trait::async_trait;
use thiserror::Error;

/// A source could not hand back its profiles
#[derive(Debug, Error)]
pub enum DataUnavailable {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{url} reported an unsuccessful response")]
    Rejected { url: String },

    #[error("invalid profile data: {0}")]
    Catalog(#[from] CatalogError),
}

/// Every source, including the fallback, failed
#[derive(Debug, Error)]
#[error("no profile source could be read: {last}")]
pub struct Unrecoverable {
    #[source]
    pub last: DataUnavailable,
}

/// Read-only provider of the complete profile collection
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &str;

    /// Fetch the complete, unfiltered collection in declaration order
    async fn fetch_all(&self) -> Result<ProfileList, DataUnavailable>;

    /// Fetch the profiles matching the query's text and facets.
    ///
    /// Results are unsorted (collection order); ordering is applied by the
    /// caller. The default filters the full collection locally.
    async fn search(&self, spec: &QuerySpec) -> Result<Vec<Profile>, DataUnavailable> {
        let all = self.fetch_all().await?;
        Ok(query::filter(&all, spec))
    }
}
