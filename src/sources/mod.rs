//! Profile sources
//!
//! A [`ProfileSource`] hands back the full collection. Two exist: the
//! dataset embedded at build time and a remote influencer API. Resolution
//! tries the remote once and degrades to the embedded copy on any failure.

mod embedded;
mod remote;
mod resolve;
mod traits;

pub use embedded::EmbeddedSource;
pub use remote::RemoteSource;
pub use resolve::{log_degraded, with_fallback, Origin, Resolved};
pub use traits::{DataUnavailable, ProfileSource, Unrecoverable};
