// src/breach/mod.rs
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::models::{BreachResult, UnknownReason};

pub mod hibp;
pub mod rate_limiter;

pub use hibp::HibpClient;
pub use rate_limiter::RateLimiter;

pub const PREFIX_LEN: usize = 5;

#[derive(Debug, Error)]
pub enum BreachError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status from breach API: {0}")]
    UnexpectedStatus(u16),

    #[error("Breach lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed range record: {0}")]
    MalformedRecord(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Source of k-anonymity range responses: newline separated `SUFFIX:COUNT`
/// records for every hash sharing the prefix.
#[async_trait]
pub trait RangeSource: Send + Sync {
    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError>;
}

/// Uppercase hex SHA-1 of the secret split into (prefix, suffix).
pub fn hash_parts(secret: &str) -> (String, String) {
    let digest = hex::encode_upper(Sha1::digest(secret.as_bytes()));
    let suffix = digest[PREFIX_LEN..].to_string();
    let mut prefix = digest;
    prefix.truncate(PREFIX_LEN);
    (prefix, suffix)
}

/// Scan a range body for `suffix`, comparing hex case-insensitively.
pub fn find_suffix(body: &str, suffix: &str) -> Result<Option<u64>, BreachError> {
    for line in body.lines() {
        let line = line.trim();
        let Some((candidate, count)) = line.split_once(':') else {
            continue;
        };
        if candidate.trim().eq_ignore_ascii_case(suffix) {
            let count = count
                .trim()
                .parse::<u64>()
                .map_err(|_| BreachError::MalformedRecord(line.to_string()))?;
            return Ok(Some(count));
        }
    }
    Ok(None)
}

/// Rate limited breach lookup. Never fails: anything that prevents an answer
/// becomes `BreachResult::Unknown`.
#[derive(Clone)]
pub struct BreachChecker {
    limiter: Arc<RateLimiter>,
    source: Arc<dyn RangeSource>,
    timeout: Duration,
}

impl BreachChecker {
    pub fn new(limiter: Arc<RateLimiter>, source: Arc<dyn RangeSource>, timeout: Duration) -> Self {
        Self { limiter, source, timeout }
    }

    pub async fn check(&self, secret: &str) -> BreachResult {
        if !self.limiter.admit() {
            debug!("Breach check skipped: rate limited");
            return BreachResult::Unknown(UnknownReason::RateLimited);
        }

        match self.lookup(secret).await {
            Ok(Some(count)) => BreachResult::Compromised(count),
            Ok(None) => BreachResult::NotCompromised,
            Err(e) => {
                warn!("Breach lookup failed: {}", e);
                BreachResult::Unknown(UnknownReason::LookupFailed)
            }
        }
    }

    async fn lookup(&self, secret: &str) -> Result<Option<u64>, BreachError> {
        let (prefix, suffix) = hash_parts(secret);
        let body = tokio::time::timeout(self.timeout, self.source.fetch_range(&prefix))
            .await
            .map_err(|_| BreachError::Timeout(self.timeout))??;
        find_suffix(&body, &suffix)
    }
}
