//! Search orchestration module
//!
//! Resolves the profile collection, runs queries against the remote source
//! or the local fallback, and tracks the browse state they feed.

mod executor;
mod session;

pub use executor::Finder;
pub use session::{BrowseState, PendingQuery};
