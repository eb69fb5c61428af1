//! Profile source backed by the dataset compiled into the binary

use super::traits::{DataUnavailable, ProfileSource};
use crate::profiles::{catalog, ProfileList};
use async_trait::async_trait;
use std::borrow::Cow;

/// Static, read-only copy of the dataset
#[derive(Debug, Clone)]
pub struct EmbeddedSource {
    json: Cow<'static, str>,
}

impl EmbeddedSource {
    /// Source over the dataset shipped with the crate
    pub fn new() -> Self {
        Self {
            json: Cow::Borrowed(catalog::EMBEDDED_DATASET),
        }
    }

    /// Source over an arbitrary JSON array of profiles
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            json: Cow::Owned(json.into()),
        }
    }

    /// Decode and validate the dataset
    pub fn load(&self) -> Result<ProfileList, DataUnavailable> {
        Ok(catalog::parse(&self.json)?)
    }
}

impl Default for EmbeddedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileSource for EmbeddedSource {
    fn name(&self) -> &str {
        "embedded"
    }

    async fn fetch_all(&self) -> Result<ProfileList, DataUnavailable> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QuerySpec;

    #[tokio::test]
    async fn test_fetch_all_in_declaration_order() {
        let profiles = EmbeddedSource::new().fetch_all().await.unwrap();
        let ids: Vec<&str> = profiles.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_default_search_filters_locally() {
        let found = EmbeddedSource::new()
            .search(&QuerySpec::text("coding"))
            .await
            .unwrap();
        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["12", "20"]);
    }

    #[test]
    fn test_broken_dataset_is_unavailable() {
        let source = EmbeddedSource::from_json("[{\"id\": 1}]");
        assert!(matches!(source.load(), Err(DataUnavailable::Catalog(_))));
    }
}
