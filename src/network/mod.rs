//! HTTP networking module
//!
//! Provides the outgoing HTTP client used by the remote profile source.

mod client;

pub use client::{HttpClient, HttpResponse};
