// src/breach/client.rs
use std::collections::HashMap;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;

use super::{parse_range_body, BreachError, RangeProvider, Result, PREFIX_LEN};

pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com";
const USER_AGENT: &str = concat!("rust_passguard/", env!("CARGO_PKG_VERSION"));

/// Pwned Passwords range API client. One instance holds the connection
/// pool for the whole process.
#[derive(Clone, Debug)]
pub struct HibpRangeProvider {
    base_url: String,
    http: Client,
}

impl HibpRangeProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url.trim_end_matches('/'), prefix)
    }
}

#[async_trait]
impl RangeProvider for HibpRangeProvider {
    async fn lookup(&self, prefix: &str) -> Result<HashMap<String, u64>> {
        if prefix.len() != PREFIX_LEN || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BreachError::InvalidResponse(format!(
                "refusing to send malformed prefix of length {}",
                prefix.len()
            )));
        }

        let response = self
            .http
            .get(self.range_url(prefix))
            // Padding hides the real size of the range from observers.
            .header("Add-Padding", "true")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_range_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_url_joins_cleanly() {
        let provider = HibpRangeProvider::new("https://example.test/", Duration::from_secs(1)).unwrap();
        assert_eq!(provider.range_url("5BAA6"), "https://example.test/range/5BAA6");
    }

    #[tokio::test]
    async fn full_hashes_are_never_sent() {
        let provider = HibpRangeProvider::new("http://127.0.0.1:9", Duration::from_millis(100)).unwrap();
        let full = "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8";
        assert!(matches!(
            provider.lookup(full).await,
            Err(BreachError::InvalidResponse(_))
        ));
    }
}
