use crate::error::FetchError;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Single-page fetcher. One GET per URL, no retries; only HTTP 200 counts
/// as success.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("navmap/0.2 (https://github.com/mkellner/navmap)")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch `url` and return the body decoded as UTF-8.
    ///
    /// The body is decoded lossily from the raw bytes, ignoring any
    /// server-declared charset. Non-UTF-8 sites come out garbled rather
    /// than charset-dependent.
    pub async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        if status != 200 {
            return Err(FetchError::UnexpectedStatus(status));
        }

        let bytes = response.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
