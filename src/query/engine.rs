//! Filtering, ordering and aggregation over a profile list

use super::stats::Stats;
use super::{QuerySpec, SortKey};
use crate::profiles::Profile;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ordered result set of a query together with its aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub results: Vec<Profile>,
    pub stats: Stats,
}

impl QueryOutcome {
    /// Sort an already-filtered result set and compute its aggregates
    pub fn arrange(mut results: Vec<Profile>, sort_key: SortKey) -> Self {
        sort(&mut results, sort_key);
        let stats = Stats::from_profiles(&results);
        Self { results, stats }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.results.iter().map(|p| p.id.as_str()).collect()
    }
}

/// Run a query over the full profile list.
///
/// Never fails: an unknown sort key has already been mapped to relevance when
/// the query was decoded, and an empty result set has well-defined aggregates.
pub fn run_query(all: &[Profile], spec: &QuerySpec) -> QueryOutcome {
    QueryOutcome::arrange(filter(all, spec), spec.sort_key)
}

/// Select the profiles matching every condition of the query, in input order
pub fn filter(all: &[Profile], spec: &QuerySpec) -> Vec<Profile> {
    let needle = spec.needle();

    all.iter()
        .filter(|profile| {
            matches_text(profile, &needle)
                && spec.platform.accepts(profile.platform.as_str())
                && spec.category.accepts(profile.category.as_str())
        })
        .cloned()
        .collect()
}

/// Stable sort; equal keys keep their relative order
pub fn sort(results: &mut [Profile], sort_key: SortKey) {
    match sort_key {
        SortKey::Relevance => {}
        SortKey::Engagement => results.sort_by(by_engagement),
        SortKey::Followers => results.sort_by(|a, b| b.followers.cmp(&a.followers)),
        SortKey::Likes => results.sort_by(|a, b| b.avg_likes.cmp(&a.avg_likes)),
    }
}

fn by_engagement(a: &Profile, b: &Profile) -> Ordering {
    b.engagement_rate.total_cmp(&a.engagement_rate)
}

fn matches_text(profile: &Profile, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    profile.name.to_lowercase().contains(needle)
        || profile.handle.to_lowercase().contains(needle)
        || profile.description.to_lowercase().contains(needle)
        || profile
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::catalog;

    fn dataset() -> Vec<Profile> {
        catalog::parse(catalog::EMBEDDED_DATASET).unwrap().to_vec()
    }

    #[test]
    fn test_empty_spec_returns_everything_in_order() {
        let all = dataset();
        let outcome = run_query(&all, &QuerySpec::default());
        assert_eq!(outcome.results, all);
        assert_eq!(outcome.stats.count, 20);
    }

    #[test]
    fn test_text_matches_handle() {
        let outcome = run_query(&dataset(), &QuerySpec::text("@YEBIMOM"));
        assert_eq!(outcome.ids(), ["19"]);
    }

    #[test]
    fn test_text_matches_non_latin_name() {
        let outcome = run_query(&dataset(), &QuerySpec::text("육아"));
        assert_eq!(outcome.ids(), ["4", "6", "13", "15"]);
    }

    #[test]
    fn test_text_matches_tag_substring() {
        let outcome = run_query(&dataset(), &QuerySpec::text("montess"));
        assert_eq!(outcome.ids(), ["7"]);
    }

    #[test]
    fn test_facets_are_anded() {
        let spec = QuerySpec::text("science")
            .with_platform("instagram")
            .with_category("edtech");
        let outcome = run_query(&dataset(), &spec);
        assert_eq!(outcome.ids(), ["10", "18"]);
    }

    #[test]
    fn test_unknown_platform_matches_nothing() {
        let outcome = run_query(&dataset(), &QuerySpec::default().with_platform("tiktok"));
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_sort_by_likes() {
        let spec = QuerySpec::default()
            .with_category("early-education")
            .with_sort(SortKey::Likes);
        let outcome = run_query(&dataset(), &spec);
        assert_eq!(outcome.ids(), ["9", "17", "7"]);
    }

    #[test]
    fn test_engagement_sort_is_stable() {
        // 8 and 14 share a 5.8% rate; collection order must survive
        let outcome = run_query(&dataset(), &QuerySpec::default().with_sort(SortKey::Engagement));
        assert_eq!(&outcome.ids()[..3], ["20", "8", "14"]);
    }

    #[test]
    fn test_relevance_keeps_filtered_order() {
        let all = dataset();
        let mut results = all.clone();
        sort(&mut results, SortKey::Relevance);
        assert_eq!(results, all);
    }
}
