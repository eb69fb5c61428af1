//! Remote-first resolution with an embedded fallback

use super::traits::{DataUnavailable, Unrecoverable};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Which source ended up serving a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Remote,
    Embedded,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Embedded => "embedded",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value tagged with the source that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Resolved<T> {
    pub fn remote(value: T) -> Self {
        Self {
            value,
            origin: Origin::Remote,
        }
    }

    pub fn embedded(value: T) -> Self {
        Self {
            value,
            origin: Origin::Embedded,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            origin: self.origin,
        }
    }
}

/// Take the primary result if it succeeded, otherwise run the fallback.
///
/// `primary` is `None` when no remote source is configured; the fallback then
/// serves directly without logging a degradation. There are no retries.
pub fn with_fallback<T>(
    primary: Option<Result<T, DataUnavailable>>,
    fallback: impl FnOnce() -> Result<T, DataUnavailable>,
) -> Result<Resolved<T>, Unrecoverable> {
    match primary {
        Some(Ok(value)) => return Ok(Resolved::remote(value)),
        Some(Err(e)) => log_degraded(&e),
        None => {}
    }

    fallback()
        .map(Resolved::embedded)
        .map_err(|last| Unrecoverable { last })
}

/// Record that the remote source failed and local data is used instead
pub fn log_degraded(error: &DataUnavailable) {
    warn!("Remote source unavailable, using embedded data: {}", error);
}
