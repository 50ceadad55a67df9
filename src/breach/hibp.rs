// src/breach/hibp.rs
use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client, StatusCode};

use super::{BreachError, RangeSource};
use crate::core::config::Config;

/// Pwned Passwords range API client. Only the 5 character hash prefix ever
/// leaves the process.
#[derive(Debug, Clone)]
pub struct HibpClient {
    client: Client,
    base_url: String,
}

impl HibpClient {
    pub fn new(config: &Config) -> Result<Self, BreachError> {
        let client = Client::builder()
            .timeout(config.breach_timeout)
            .user_agent(config.breach_user_agent.clone())
            .build()
            .map_err(BreachError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: config.breach_api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url, prefix)
    }
}

#[async_trait]
impl RangeSource for HibpClient {
    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        let url = self.range_url(prefix);
        debug!("Querying breach range endpoint for prefix {}", prefix);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "text/plain")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(BreachError::UnexpectedStatus(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}
