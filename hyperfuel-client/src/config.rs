use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use url::Url;

/// Configuration of a [`Client`](crate::Client).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Hyperfuel server URL.
    pub url: Url,
    /// Bearer token sent with every request.
    pub bearer_token: Option<String>,
    /// Timeout of a whole http request. Defaults to 30 seconds.
    #[serde(alias = "httpTimeoutMs")]
    pub http_req_timeout_millis: Option<NonZeroU64>,
    /// Timeout for establishing a connection. Defaults to 10 seconds.
    pub connect_timeout_millis: Option<NonZeroU64>,
    /// Number of additional attempts after a retryable failure. Defaults to 12.
    #[serde(alias = "maxRetries")]
    pub max_num_retries: Option<usize>,
    /// Upper bound of the random jitter added to each retry delay.
    pub retry_backoff_ms: Option<u64>,
    /// Delay before the first retry, doubled on every following one.
    pub retry_base_ms: Option<u64>,
    /// Maximum retry delay, jitter excluded.
    pub retry_ceiling_ms: Option<u64>,
}

impl ClientConfig {
    /// Config with the given url and every other option left at its default.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            bearer_token: None,
            http_req_timeout_millis: None,
            connect_timeout_millis: None,
            max_num_retries: None,
            retry_backoff_ms: None,
            retry_base_ms: None,
            retry_ceiling_ms: None,
        }
    }
}

/// Configuration of [`Client::stream`](crate::Client::stream).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// End the stream once at least this many blocks were delivered.
    pub max_num_blocks: Option<usize>,
    /// End the stream once at least this many transactions were delivered.
    pub max_num_transactions: Option<usize>,
    /// End the stream once at least this many receipts were delivered.
    pub max_num_receipts: Option<usize>,
    /// End the stream once at least this many inputs were delivered.
    pub max_num_inputs: Option<usize>,
    /// End the stream once at least this many outputs were delivered.
    pub max_num_outputs: Option<usize>,
    /// Keep polling for new blocks at this interval after an unbounded query caught up with the
    /// archive. Without it the stream ends when it catches up.
    pub poll_interval_ms: Option<u64>,
}
