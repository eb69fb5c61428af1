//! Query execution across the remote source and the embedded fallback

use super::session::BrowseState;
use crate::config::Settings;
use crate::network::HttpClient;
use crate::profiles::Profile;
use crate::query::{run_query, QueryOutcome, QuerySpec};
use crate::sources::{
    log_degraded, with_fallback, EmbeddedSource, ProfileSource, RemoteSource, Resolved,
    Unrecoverable,
};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Loads the profile collection and runs queries, preferring the remote
/// source and degrading to the embedded dataset
pub struct Finder {
    /// Remote source, if one is configured
    remote: Option<Arc<dyn ProfileSource>>,
    /// Local copy used when the remote is absent or failing
    fallback: EmbeddedSource,
}

impl Finder {
    /// Create a finder over explicit sources
    pub fn new(remote: Option<Arc<dyn ProfileSource>>, fallback: EmbeddedSource) -> Self {
        Self { remote, fallback }
    }

    /// Finder serving only the embedded dataset
    pub fn embedded() -> Self {
        Self::new(None, EmbeddedSource::new())
    }

    /// Build the finder described by the `source` settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let remote = match settings.source.remote_url {
            Some(ref url) => {
                let client = HttpClient::with_settings(&settings.source)?;
                info!("Using remote influencer API at {}", url);
                Some(Arc::new(RemoteSource::new(client, url.as_str())) as Arc<dyn ProfileSource>)
            }
            None => None,
        };

        Ok(Self::new(remote, EmbeddedSource::new()))
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Load the full collection into a fresh browse state
    pub async fn load(&self) -> Result<Resolved<BrowseState>, Unrecoverable> {
        let primary = match self.remote {
            Some(ref remote) => {
                debug!("Fetching profiles from {} source", remote.name());
                Some(remote.fetch_all().await)
            }
            None => None,
        };

        let resolved = with_fallback(primary, || self.fallback.load())?;
        info!(
            "Loaded {} profiles from {} source",
            resolved.value.len(),
            resolved.origin
        );
        Ok(resolved.map(BrowseState::loaded))
    }

    /// Run a query.
    ///
    /// The remote answers with the filtered set, which is then ordered and
    /// aggregated locally. When the remote fails the same pipeline runs over
    /// `all`, so both paths produce identical outcomes. This never fails.
    pub async fn search(&self, all: &[Profile], spec: &QuerySpec) -> Resolved<QueryOutcome> {
        if let Some(ref remote) = self.remote {
            match remote.search(spec).await {
                Ok(filtered) => {
                    debug!("Remote search matched {} profiles", filtered.len());
                    return Resolved::remote(QueryOutcome::arrange(filtered, spec.sort_key));
                }
                Err(e) => log_degraded(&e),
            }
        }

        Resolved::embedded(run_query(all, spec))
    }

    /// Submit a query against a browse state and apply its outcome
    pub async fn browse(&self, state: BrowseState, spec: QuerySpec) -> Resolved<BrowseState> {
        let (state, pending) = state.submit(spec);
        let outcome = self.search(state.all_profiles(), pending.spec()).await;
        outcome.map(|outcome| state.complete(pending, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::ProfileList;
    use crate::query::SortKey;
    use crate::sources::{DataUnavailable, Origin};
    use async_trait::async_trait;

    /// Remote stand-in that always fails
    struct Offline;

    #[async_trait]
    impl ProfileSource for Offline {
        fn name(&self) -> &str {
            "offline"
        }

        async fn fetch_all(&self) -> Result<ProfileList, DataUnavailable> {
            Err(DataUnavailable::Status {
                status: 503,
                url: "http://offline/api/influencers".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_load_without_remote() {
        let loaded = Finder::embedded().load().await.unwrap();
        assert_eq!(loaded.origin, Origin::Embedded);
        assert_eq!(loaded.value.all_profiles().len(), 20);
    }

    #[tokio::test]
    async fn test_load_falls_back_when_remote_fails() {
        let finder = Finder::new(Some(Arc::new(Offline)), EmbeddedSource::new());
        let loaded = finder.load().await.unwrap();
        assert_eq!(loaded.origin, Origin::Embedded);
        assert_eq!(loaded.value.last_results().stats.count, 20);
    }

    #[tokio::test]
    async fn test_load_unrecoverable_when_everything_fails() {
        let finder = Finder::new(
            Some(Arc::new(Offline)),
            EmbeddedSource::from_json("not a dataset"),
        );
        let err = finder.load().await.unwrap_err();
        assert!(matches!(err.last, DataUnavailable::Catalog(_)));
    }

    #[tokio::test]
    async fn test_search_fallback_matches_local_pipeline() {
        let all = EmbeddedSource::new().load().unwrap();
        let spec = QuerySpec::text("kids").with_sort(SortKey::Engagement);

        let degraded = Finder::new(Some(Arc::new(Offline)), EmbeddedSource::new())
            .search(&all, &spec)
            .await;

        assert_eq!(degraded.origin, Origin::Embedded);
        assert_eq!(degraded.value, run_query(&all, &spec));
    }

    #[tokio::test]
    async fn test_remote_search_is_sorted_locally() {
        // The embedded source stands in for a healthy remote
        let remote: Arc<dyn ProfileSource> = Arc::new(EmbeddedSource::new());
        let finder = Finder::new(Some(remote), EmbeddedSource::new());
        let all = EmbeddedSource::new().load().unwrap();
        let spec = QuerySpec::default()
            .with_platform("youtube")
            .with_sort(SortKey::Followers);

        let resolved = finder.search(&all, &spec).await;

        assert_eq!(resolved.origin, Origin::Remote);
        assert_eq!(resolved.value, run_query(&all, &spec));
    }

    #[tokio::test]
    async fn test_browse_applies_outcome() {
        let finder = Finder::embedded();
        let state = finder.load().await.unwrap().value;
        let browsed = finder.browse(state, QuerySpec::text("zzz-no-match")).await;

        assert_eq!(browsed.origin, Origin::Embedded);
        assert!(browsed.value.last_results().is_empty());
        assert_eq!(browsed.value.last_results().stats.total_reach, "0.0M");
    }
}
