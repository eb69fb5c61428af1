//! Profile record types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Immutable, shareable list of profiles in collection order
pub type ProfileList = Arc<[Profile]>;

/// Social platform a profile publishes on.
///
/// The set is open: values other than the known platforms are kept verbatim
/// so that new platforms in the dataset are tolerated rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    YouTube,
    Instagram,
    Other(String),
}

impl Platform {
    /// Get the wire representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::YouTube => "youtube",
            Self::Instagram => "instagram",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        match value.as_str() {
            "youtube" => Self::YouTube,
            "instagram" => Self::Instagram,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content category tag (open set)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human readable label; unknown categories fall back to their raw value
    pub fn label(&self) -> &str {
        match self.0.as_str() {
            "edtech" => "EdTech",
            "parenting" => "Parenting",
            "early-education" => "Early Education",
            "kids-content" => "Kids Content",
            other => other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of recent uploads, tagged by the kind of content the platform hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCount {
    Videos(u32),
    Posts(u32),
}

impl ContentCount {
    pub fn count(&self) -> u32 {
        match self {
            Self::Videos(n) | Self::Posts(n) => *n,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Videos(_) => "Videos",
            Self::Posts(_) => "Posts",
        }
    }
}

/// A single influencer profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileRecord", into = "ProfileRecord")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub platform: Platform,
    pub platform_url: String,
    pub category: Category,
    pub followers: u64,
    pub avg_likes: u64,
    pub avg_comments: u64,
    /// Percentage, e.g. `3.2` for 3.2%
    pub engagement_rate: f64,
    pub description: String,
    /// Display order is significant; summaries show only the first few
    pub tags: Vec<String>,
    pub recent: ContentCount,
    pub location: String,
    pub language: String,
}

/// Wire shape of a profile, with the content count split across two fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRecord {
    id: String,
    name: String,
    handle: String,
    platform: Platform,
    platform_url: String,
    category: Category,
    followers: u64,
    avg_likes: u64,
    avg_comments: u64,
    engagement_rate: f64,
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recent_videos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recent_posts: Option<u32>,
    #[serde(default)]
    location: String,
    #[serde(default)]
    language: String,
}

/// A record carried both or neither of `recentVideos` / `recentPosts`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentCountError {
    #[error("profile {0:?} has neither recentVideos nor recentPosts")]
    Missing(String),
    #[error("profile {0:?} has both recentVideos and recentPosts")]
    Ambiguous(String),
}

impl TryFrom<ProfileRecord> for Profile {
    type Error = ContentCountError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        let recent = match (record.recent_videos, record.recent_posts) {
            (Some(videos), None) => ContentCount::Videos(videos),
            (None, Some(posts)) => ContentCount::Posts(posts),
            (None, None) => return Err(ContentCountError::Missing(record.id)),
            (Some(_), Some(_)) => return Err(ContentCountError::Ambiguous(record.id)),
        };

        Ok(Self {
            id: record.id,
            name: record.name,
            handle: record.handle,
            platform: record.platform,
            platform_url: record.platform_url,
            category: record.category,
            followers: record.followers,
            avg_likes: record.avg_likes,
            avg_comments: record.avg_comments,
            engagement_rate: record.engagement_rate,
            description: record.description,
            tags: record.tags,
            recent,
            location: record.location,
            language: record.language,
        })
    }
}

impl From<Profile> for ProfileRecord {
    fn from(profile: Profile) -> Self {
        let (recent_videos, recent_posts) = match profile.recent {
            ContentCount::Videos(n) => (Some(n), None),
            ContentCount::Posts(n) => (None, Some(n)),
        };

        Self {
            id: profile.id,
            name: profile.name,
            handle: profile.handle,
            platform: profile.platform,
            platform_url: profile.platform_url,
            category: profile.category,
            followers: profile.followers,
            avg_likes: profile.avg_likes,
            avg_comments: profile.avg_comments,
            engagement_rate: profile.engagement_rate,
            description: profile.description,
            tags: profile.tags,
            recent_videos,
            recent_posts,
            location: profile.location,
            language: profile.language,
        }
    }
}

impl Profile {
    /// The first `n` tags, as shown on summary cards
    pub fn summary_tags(&self, n: usize) -> &[String] {
        &self.tags[..self.tags.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(extra: serde_json::Value) -> serde_json::Value {
        let mut base = serde_json::json!({
            "id": "99",
            "name": "Test Channel",
            "handle": "@test",
            "platform": "youtube",
            "platformUrl": "https://youtube.com/@test",
            "category": "edtech",
            "followers": 1000,
            "avgLikes": 10,
            "avgComments": 1,
            "engagementRate": 1.5,
            "description": "desc",
            "tags": ["a", "b", "c", "d"],
            "location": "Seoul",
            "language": "Korean"
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        base
    }

    #[test]
    fn test_decode_videos() {
        let profile: Profile =
            serde_json::from_value(record(serde_json::json!({"recentVideos": 12}))).unwrap();
        assert_eq!(profile.recent, ContentCount::Videos(12));
        assert_eq!(profile.platform, Platform::YouTube);
        assert_eq!(profile.recent.label(), "Videos");
    }

    #[test]
    fn test_missing_content_count_rejected() {
        let err = serde_json::from_value::<Profile>(record(serde_json::json!({}))).unwrap_err();
        assert!(err.to_string().contains("neither"));
    }

    #[test]
    fn test_both_content_counts_rejected() {
        let value = record(serde_json::json!({"recentVideos": 1, "recentPosts": 2}));
        let err = serde_json::from_value::<Profile>(value).unwrap_err();
        assert!(err.to_string().contains("both"));
    }

    #[test]
    fn test_unknown_platform_tolerated() {
        let value = record(serde_json::json!({"platform": "tiktok", "recentPosts": 3}));
        let profile: Profile = serde_json::from_value(value).unwrap();
        assert_eq!(profile.platform, Platform::Other("tiktok".to_string()));
        assert_eq!(profile.platform.as_str(), "tiktok");
    }

    #[test]
    fn test_serialize_keeps_wire_field_names() {
        let profile: Profile =
            serde_json::from_value(record(serde_json::json!({"recentPosts": 7}))).unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["recentPosts"], 7);
        assert!(json.get("recentVideos").is_none());
        assert_eq!(json["platformUrl"], "https://youtube.com/@test");
        assert_eq!(json["engagementRate"], 1.5);
    }

    #[test]
    fn test_summary_tags() {
        let profile: Profile =
            serde_json::from_value(record(serde_json::json!({"recentVideos": 1}))).unwrap();
        assert_eq!(profile.summary_tags(3), ["a", "b", "c"]);
        assert_eq!(profile.summary_tags(10).len(), 4);
    }

    #[test]
    fn test_category_label() {
        assert_eq!(Category::new("early-education").label(), "Early Education");
        assert_eq!(Category::new("gaming").label(), "gaming");
    }
}
