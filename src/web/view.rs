//! View models handed to the templates

use crate::profiles::{Platform, Profile};
use crate::query::{round_tenth, SortKey, ALL};
use serde::Serialize;
use std::collections::BTreeSet;

/// Compact follower-style count: `1.2M`, `45.0K` or the plain number
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", round_tenth(n as f64 / 1_000_000.0))
    } else if n >= 1_000 {
        format!("{:.1}K", round_tenth(n as f64 / 1_000.0))
    } else {
        n.to_string()
    }
}

/// Engagement rate as shown to users, e.g. `5%` or `8.7%`
pub fn format_rate(rate: f64) -> String {
    format!("{}%", rate)
}

pub fn platform_icon(platform: &Platform) -> &'static str {
    match platform {
        Platform::YouTube => "📺",
        Platform::Instagram => "📷",
        Platform::Other(_) => "🌐",
    }
}

/// Summary card in the result grid
#[derive(Debug, Clone, Serialize)]
pub struct ProfileCard {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub platform: String,
    pub icon: &'static str,
    pub category: String,
    pub description: String,
    pub followers: String,
    pub avg_likes: String,
    pub engagement: String,
    pub tags: Vec<String>,
}

impl ProfileCard {
    pub fn new(profile: &Profile, summary_tags: usize) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            handle: profile.handle.clone(),
            platform: profile.platform.to_string(),
            icon: platform_icon(&profile.platform),
            category: profile.category.label().to_string(),
            description: profile.description.clone(),
            followers: format_count(profile.followers),
            avg_likes: format_count(profile.avg_likes),
            engagement: format_rate(profile.engagement_rate),
            tags: profile.summary_tags(summary_tags).to_vec(),
        }
    }
}

/// Everything shown on a profile's detail page
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDetail {
    #[serde(flatten)]
    pub card: ProfileCard,
    pub platform_url: String,
    pub avg_comments: String,
    pub location: String,
    pub language: String,
    pub content_label: &'static str,
    pub content_count: u32,
}

impl ProfileDetail {
    pub fn new(profile: &Profile) -> Self {
        Self {
            card: ProfileCard::new(profile, profile.tags.len()),
            platform_url: profile.platform_url.clone(),
            avg_comments: format_count(profile.avg_comments),
            location: profile.location.clone(),
            language: profile.language.clone(),
            content_label: profile.recent.label(),
            content_count: profile.recent.count(),
        }
    }
}

/// A `<select>` option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options of the three filter dropdowns, derived from the loaded data
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub platforms: Vec<SelectOption>,
    pub categories: Vec<SelectOption>,
    pub sorts: Vec<SelectOption>,
}

impl FilterOptions {
    pub fn from_profiles(profiles: &[Profile]) -> Self {
        let platforms: BTreeSet<&str> = profiles.iter().map(|p| p.platform.as_str()).collect();
        let mut categories: Vec<(&str, &str)> = profiles
            .iter()
            .map(|p| (p.category.as_str(), p.category.label()))
            .collect();
        categories.sort();
        categories.dedup();

        let mut platform_options = vec![SelectOption::new(ALL, "All Platforms")];
        platform_options.extend(platforms.into_iter().map(|p| {
            let label = match p {
                "youtube" => "YouTube",
                "instagram" => "Instagram",
                other => other,
            };
            SelectOption::new(p, label)
        }));

        let mut category_options = vec![SelectOption::new(ALL, "All Categories")];
        category_options.extend(
            categories
                .into_iter()
                .map(|(value, label)| SelectOption::new(value, label)),
        );

        Self {
            platforms: platform_options,
            categories: category_options,
            sorts: SortKey::VARIANTS
                .iter()
                .map(|key| SelectOption::new(key.as_str(), key.label()))
                .collect(),
        }
    }
}
