use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::{Result, WartaError};
use crate::config::ApiConfig;
use crate::fetcher::Fetcher;
use crate::normalizer::api_error;

pub struct HttpFetcher {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpFetcher {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("warta/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: api.endpoint.clone(),
            api_key: api.resolved_key(),
        })
    }

    /// Build `<endpoint>?q=<term>&apiKey=<key>` with the term URL-encoded.
    pub fn request_url(&self, term: &str) -> Result<Url> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            WartaError::Config("no API key configured (set NEWSAPI_KEY or [api] key)".into())
        })?;
        build_request_url(&self.endpoint, term, key)
    }
}

pub fn build_request_url(endpoint: &str, term: &str, api_key: &str) -> Result<Url> {
    let url = Url::parse_with_params(endpoint, &[("q", term), ("apiKey", api_key)])?;
    Ok(url)
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, term: &str) -> Result<Vec<u8>> {
        let url = self.request_url(term)?;
        tracing::debug!("Searching for {:?}", term);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        // NewsAPI explains rejections (bad key, rate limit) in the body.
        if !status.is_success() {
            return Err(api_error(&body)
                .unwrap_or_else(|| WartaError::Other(format!("HTTP status {}", status))));
        }

        Ok(body)
    }
}
