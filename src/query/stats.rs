//! Aggregate statistics over a result set

use crate::profiles::Profile;
use serde::{Deserialize, Serialize};

/// Summary figures shown above a result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of profiles in the result set
    pub count: usize,
    /// Mean engagement rate, rounded to one decimal; 0 for an empty set
    pub average_engagement: f64,
    /// Sum of followers
    pub total_followers: u64,
    /// Sum of followers in millions, e.g. `"12.3M"`
    pub total_reach: String,
}

impl Stats {
    pub fn from_profiles(profiles: &[Profile]) -> Self {
        let count = profiles.len();
        let total_followers: u64 = profiles.iter().map(|p| p.followers).sum();

        let average_engagement = if count == 0 {
            0.0
        } else {
            let sum: f64 = profiles.iter().map(|p| p.engagement_rate).sum();
            round_tenth(sum / count as f64)
        };

        Self {
            count,
            average_engagement,
            total_followers,
            total_reach: format_millions(total_followers),
        }
    }

    /// Average engagement as displayed, e.g. `"4.5%"`
    pub fn average_engagement_display(&self) -> String {
        format!("{:.1}%", self.average_engagement)
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::from_profiles(&[])
    }
}

/// Round to one decimal, halves away from zero (`1.25` becomes `1.3`)
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn format_millions(followers: u64) -> String {
    format!("{:.1}M", round_tenth(followers as f64 / 1_000_000.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = Stats::from_profiles(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_engagement, 0.0);
        assert_eq!(stats.total_reach, "0.0M");
        assert_eq!(stats.average_engagement_display(), "0.0%");
    }

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(12_345_000), "12.3M");
        assert_eq!(format_millions(67_000), "0.1M");
        assert_eq!(format_millions(2_850_000), "2.9M");
    }

    #[test]
    fn test_format_millions_rounds_half_up() {
        assert_eq!(format_millions(1_250_000), "1.3M");
        assert_eq!(format_millions(50_000), "0.1M");
    }

    #[test]
    fn test_total_reach_of_single_profile() {
        let profile = crate::profiles::catalog::parse(crate::profiles::catalog::EMBEDDED_DATASET)
            .unwrap()
            .iter()
            .find(|p| p.id == "3")
            .cloned()
            .unwrap();
        assert_eq!(profile.followers, 1_250_000);
        assert_eq!(Stats::from_profiles(&[profile]).total_reach, "1.3M");
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(4.46), 4.5);
        assert_eq!(round_tenth(3.0), 3.0);
        assert_eq!(round_tenth(5.04), 5.0);
    }
}
