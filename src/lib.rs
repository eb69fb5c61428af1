//! Influencer Finder: search, filter and rank education and parenting
//! influencer profiles
//!
//! The profile collection comes from a remote influencer API when one is
//! configured, with the dataset embedded at build time as the fallback.

pub mod api;
pub mod config;
pub mod export;
pub mod network;
pub mod profiles;
pub mod query;
pub mod search;
pub mod sources;
pub mod web;

pub use config::Settings;
pub use profiles::{Profile, ProfileList};
pub use query::{run_query, QueryOutcome, QuerySpec, SortKey};
pub use search::Finder;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
