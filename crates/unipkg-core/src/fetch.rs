//! JSON fetching from provider APIs.
//!
//! Generators depend on the [`JsonFetcher`] trait rather than on an HTTP
//! client, so resolution can be driven from recorded responses.

use std::time::Duration;

use serde_json::Value;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("unipkg/", env!("CARGO_PKG_VERSION"));

/// Errors raised while fetching a JSON document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u16 },

    #[error("unexpected response from {url}")]
    Decode {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Source of JSON documents keyed by URL.
pub trait JsonFetcher {
    fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}

impl<F: JsonFetcher + ?Sized> JsonFetcher for &F {
    fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        (**self).fetch_json(url)
    }
}

/// Blocking JSON fetcher backed by `reqwest`.
///
/// Owns a current-thread tokio runtime and blocks on each request.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(Box::new(e)))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| FetchError::Client(Box::new(e)))?;

        Ok(Self { client, runtime })
    }

    async fn get(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            source: Box::new(e),
        })
    }
}

impl JsonFetcher for HttpFetcher {
    fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!(url, "fetching");
        self.runtime.block_on(self.get(url))
    }
}

/// Deserialize a fetched document into the response shape a provider reads.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    url: &str,
    value: Value,
) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        source: Box::new(e),
    })
}
