//! Influencer profile model
//!
//! Defines the profile record, its open platform/category values, and the
//! embedded dataset the service ships with.

pub mod catalog;
mod types;

pub use catalog::CatalogError;
pub use types::*;
