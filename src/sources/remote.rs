//! Profile source backed by a remote influencer API

use super::traits::{DataUnavailable, ProfileSource};
use crate::api::{ProfileEnvelope, SearchRequest};
use crate::network::{HttpClient, HttpResponse};
use crate::profiles::{catalog, Profile, ProfileList};
use crate::query::QuerySpec;
use async_trait::async_trait;
use tracing::debug;

/// Client for a server exposing `/api/influencers` and `/api/search`
#[derive(Clone)]
pub struct RemoteSource {
    client: HttpClient,
    base_url: String,
}

impl RemoteSource {
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a response into its profile list, rejecting anything but a
    /// successful, well-formed envelope
    fn unpack(url: String, response: HttpResponse) -> Result<Vec<Profile>, DataUnavailable> {
        if !response.is_success() {
            return Err(DataUnavailable::Status {
                status: response.status,
                url,
            });
        }

        let envelope: ProfileEnvelope = response
            .json()
            .map_err(|source| DataUnavailable::Decode {
                url: url.clone(),
                source,
            })?;

        if !envelope.success {
            return Err(DataUnavailable::Rejected { url });
        }

        catalog::validate(&envelope.results)?;
        debug!("{} returned {} profiles", url, envelope.results.len());
        Ok(envelope.results)
    }
}

#[async_trait]
impl ProfileSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch_all(&self) -> Result<ProfileList, DataUnavailable> {
        let url = self.endpoint("/api/influencers");
        let response = self
            .client
            .get(&url)
            .await
            .map_err(|source| DataUnavailable::Transport {
                url: url.clone(),
                source,
            })?;

        Ok(Self::unpack(url, response)?.into())
    }

    async fn search(&self, spec: &QuerySpec) -> Result<Vec<Profile>, DataUnavailable> {
        let url = self.endpoint("/api/search");
        let body = SearchRequest {
            query: spec.text.trim(),
            platform: spec.platform.as_str(),
            category: spec.category.as_str(),
        };

        let response = self
            .client
            .post_json(&url, &body)
            .await
            .map_err(|source| DataUnavailable::Transport {
                url: url.clone(),
                source,
            })?;

        Self::unpack(url, response)
    }
}
