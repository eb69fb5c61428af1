//! HTTP client for talking to a remote influencer API

use crate::config::SourceSettings;
use anyhow::Result;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

/// HTTP client wrapper with the service's user agent and timeout applied
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    default_timeout: Duration,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&SourceSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &SourceSettings) -> Result<Self> {
        let default_timeout = Duration::try_from_secs_f64(settings.request_timeout)?;
        let client = Client::builder()
            .timeout(default_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            default_timeout,
            user_agent: format!("influencer-finder/{}", crate::VERSION),
        })
    }

    /// Simple GET request
    pub async fn get(&self, url: &str) -> reqwest::Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .timeout(self.default_timeout)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await?;

        HttpResponse::read(response).await
    }

    /// POST with JSON body
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> reqwest::Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .timeout(self.default_timeout)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;

        HttpResponse::read(response).await
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Buffered HTTP response
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl HttpResponse {
    async fn read(response: Response) -> reqwest::Result<Self> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(Self { status, text, url })
    }

    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.text)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
