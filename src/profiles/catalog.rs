//! Embedded dataset decoding and validation

use super::types::{Profile, ProfileList};
use std::collections::HashSet;
use thiserror::Error;
use url::Url;

/// The curated dataset compiled into the binary
pub const EMBEDDED_DATASET: &str = include_str!("../../data/influencers.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate profile id {0:?}")]
    DuplicateId(String),

    #[error("profile {id:?} has invalid engagement rate {rate}")]
    InvalidEngagement { id: String, rate: f64 },

    #[error("profile {id:?} has a non-absolute platform URL {url:?}")]
    InvalidUrl { id: String, url: String },
}

/// Decode a JSON array of profiles and validate it
pub fn parse(json: &str) -> Result<ProfileList, CatalogError> {
    let profiles: Vec<Profile> = serde_json::from_str(json)?;
    validate(&profiles)?;
    Ok(profiles.into())
}

/// Check collection-level invariants that serde cannot express
pub fn validate(profiles: &[Profile]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(profiles.len());

    for profile in profiles {
        if !seen.insert(profile.id.as_str()) {
            return Err(CatalogError::DuplicateId(profile.id.clone()));
        }

        if !profile.engagement_rate.is_finite() || profile.engagement_rate < 0.0 {
            return Err(CatalogError::InvalidEngagement {
                id: profile.id.clone(),
                rate: profile.engagement_rate,
            });
        }

        if Url::parse(&profile.platform_url).is_err() {
            return Err(CatalogError::InvalidUrl {
                id: profile.id.clone(),
                url: profile.platform_url.clone(),
            });
        }
    }

    Ok(())
}
