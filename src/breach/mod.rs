// src/breach/mod.rs
//
// k-anonymity breach lookup: only the first five hex characters of the
// password's SHA-1 leave the process. The provider answers with every known
// suffix under that prefix and the match happens here.
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use sha1::{Digest, Sha1};
use thiserror::Error;
use utoipa::ToSchema;
use zeroize::Zeroizing;

pub mod client;

pub use client::HibpRangeProvider;

/// Number of leading hex characters sent to the provider.
pub const PREFIX_LEN: usize = 5;

#[derive(Debug, Error)]
pub enum BreachError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Breach corpus returned status {0}")]
    Status(u16),

    #[error("Breach lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid range response: {0}")]
    InvalidResponse(String),

    #[error("Breach checking is disabled")]
    Disabled,
}

pub type Result<T> = std::result::Result<T, BreachError>;

/// A compromised-credential corpus that can be queried by hash prefix.
#[async_trait]
pub trait RangeProvider: Send + Sync {
    /// All known hash suffixes sharing `prefix`, with occurrence counts.
    async fn lookup(&self, prefix: &str) -> Result<HashMap<String, u64>>;
}

/// Result of a best-effort lookup. `Unknown` is never reported as clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachOutcome {
    Found(u64),
    NotFound,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BreachStatus {
    Found,
    Clean,
    Unknown,
}

impl BreachOutcome {
    pub fn count(&self) -> Option<u64> {
        match self {
            BreachOutcome::Found(count) => Some(*count),
            BreachOutcome::NotFound => Some(0),
            BreachOutcome::Unknown => None,
        }
    }

    pub fn status(&self) -> BreachStatus {
        match self {
            BreachOutcome::Found(_) => BreachStatus::Found,
            BreachOutcome::NotFound => BreachStatus::Clean,
            BreachOutcome::Unknown => BreachStatus::Unknown,
        }
    }
}

/// Uppercase hex SHA-1 of the password, split into (prefix, suffix).
pub fn hash_prefix_suffix(password: &str) -> (String, Zeroizing<String>) {
    let digest = Zeroizing::new(hex::encode_upper(Sha1::digest(password.as_bytes())));
    let (prefix, suffix) = digest.split_at(PREFIX_LEN);
    (prefix.to_string(), Zeroizing::new(suffix.to_string()))
}

/// Parses `SUFFIX:COUNT` lines. Zero counts are padding and are skipped.
pub fn parse_range_body(body: &str) -> Result<HashMap<String, u64>> {
    let mut suffixes = HashMap::new();
    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (suffix, count) = line
            .split_once(':')
            .ok_or_else(|| BreachError::InvalidResponse("line without ':' separator".to_string()))?;
        let count: u64 = count
            .trim()
            .parse()
            .map_err(|_| BreachError::InvalidResponse("count is not a number".to_string()))?;
        if count > 0 {
            suffixes.insert(suffix.trim().to_ascii_uppercase(), count);
        }
    }
    Ok(suffixes)
}

/// Wraps a provider with a deadline and the local suffix comparison.
#[derive(Clone)]
pub struct BreachChecker {
    provider: Option<Arc<dyn RangeProvider>>,
    timeout: Duration,
}

impl BreachChecker {
    pub fn new(provider: Arc<dyn RangeProvider>, timeout: Duration) -> Self {
        Self {
            provider: Some(provider),
            timeout,
        }
    }

    /// A checker that always reports `Unknown`.
    pub fn disabled() -> Self {
        Self {
            provider: None,
            timeout: Duration::ZERO,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// How many times the password appears in the corpus.
    pub async fn breach_count(&self, password: &str) -> Result<u64> {
        let provider = self.provider.as_ref().ok_or(BreachError::Disabled)?;
        let (prefix, suffix) = hash_prefix_suffix(password);
        log::debug!("Querying breach corpus for prefix {}", prefix);

        let suffixes = tokio::time::timeout(self.timeout, provider.lookup(&prefix))
            .await
            .map_err(|_| BreachError::Timeout(self.timeout))??;

        Ok(suffixes
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(suffix.as_str()))
            .map(|(_, count)| *count)
            .unwrap_or(0))
    }

    /// Best-effort variant used by analysis: failures become `Unknown`.
    pub async fn check(&self, password: &str) -> BreachOutcome {
        if !self.is_enabled() {
            return BreachOutcome::Unknown;
        }
        match self.breach_count(password).await {
            Ok(0) => BreachOutcome::NotFound,
            Ok(count) => BreachOutcome::Found(count),
            Err(e) => {
                log::warn!("Breach lookup unavailable: {}", e);
                BreachOutcome::Unknown
            }
        }
    }
}
