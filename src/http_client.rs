use std::time::Duration;

use async_trait::async_trait;

use crate::{config::Config, error::FetchError};

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The only network capability the roster needs. Non-OK statuses are not errors at this
/// level, callers decide what a status means.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError>;
}

fn transport_error(url: &str, error: reqwest::Error) -> FetchError {
    FetchError::Transport {
        url: url.to_string(),
        cause: error.to_string(),
    }
}

#[async_trait]
impl HttpClient for reqwest::Client {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        tracing::debug!("GET {url}");
        let response = reqwest::Client::get(self, url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(url, e))?;
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

pub fn build_client(config: &Config) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.connect_timeout(Duration::from_secs(3)).build()
}
