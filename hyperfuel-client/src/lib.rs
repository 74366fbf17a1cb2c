#![deny(missing_docs)]
//! Hyperfuel client library for querying indexed Fuel chain data from a hyperfuel server.
//!
//! ```no_run
//! use hyperfuel_client::{net_types::{InputField, InputSelection, Query}, Client, ClientConfig};
//!
//! # async fn run() -> Result<(), hyperfuel_client::Error> {
//! let client = Client::new(ClientConfig::new("https://fuel-testnet.hypersync.xyz".parse().unwrap()))?;
//!
//! let query = Query::new()
//!     .from_block(0)
//!     .to_block(100_000)
//!     .where_inputs(InputSelection::default().and_asset_id([
//!         "0x2a0d0ed9d2217ec7f32dcd9a1902ce2a66d68437aeff84e3a3cc8bebee0d2eea",
//!     ])?)
//!     .select_input_fields([InputField::TxId, InputField::Amount])
//!     .validate()?;
//!
//! let res = client.get_selected_data(query).await?;
//! println!("{} inputs, continue from {}", res.data.inputs.len(), res.next_block);
//! # Ok(())
//! # }
//! ```
use std::{future::Future, num::NonZeroU64, sync::Arc, time::Duration};

use futures::stream::{BoxStream, StreamExt};
use hyperfuel_net_types::ValidatedQuery;
use reqwest::Method;
use tokio_util::sync::CancellationToken;
use url::Url;

mod assemble;
mod backoff;
mod config;
mod error;
mod filter;
mod parse_response;
pub mod preset_query;
pub mod simple_types;
mod stream;
mod types;

pub use hyperfuel_format as format;
pub use hyperfuel_net_types as net_types;

pub use assemble::Assembler;
pub use config::{ClientConfig, StreamConfig};
pub use error::{Error, Result};
pub use stream::{CursorState, QueryCursor, StreamEvent};
pub use types::{LogContext, LogResponse, QueryResponse, Record, ResponseData};

use backoff::Backoff;
use parse_response::{parse_height, parse_query_response};

/// Which receipts, inputs and outputs of a page are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Records {
    /// Everything the server returned for the loaded transactions.
    Related,
    /// Only records matching one of the query's selections.
    Matching,
}

/// Client for a single hyperfuel server. Cheap to clone, clones share the connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    /// Initialized reqwest instance for client url.
    http_client: reqwest::Client,
    /// Hyperfuel server URL.
    url: Url,
    /// Hyperfuel server bearer token.
    bearer_token: Option<String>,
    /// Number of retries to attempt before returning error.
    max_num_retries: usize,
    /// Delay schedule between attempts.
    backoff: Backoff,
}

impl Client {
    /// Creates a new client with the given configuration.
    pub fn new(cfg: ClientConfig) -> Result<Self> {
        // hfcr stands for hyperfuel client rust
        let user_agent = format!("hfcr/{}", env!("CARGO_PKG_VERSION"));
        Self::new_internal(cfg, user_agent)
    }

    #[doc(hidden)]
    pub fn new_with_agent(cfg: ClientConfig, user_agent: impl Into<String>) -> Result<Self> {
        // For language bindings that report their own agent.
        Self::new_internal(cfg, user_agent.into())
    }

    fn new_internal(cfg: ClientConfig, user_agent: String) -> Result<Self> {
        if cfg.url.cannot_be_a_base() {
            return Err(Error::Config(format!("{} can't be used as a base url", cfg.url)));
        }

        let timeout = cfg
            .http_req_timeout_millis
            .map_or(30_000, NonZeroU64::get);
        let connect_timeout = cfg
            .connect_timeout_millis
            .map_or(10_000, NonZeroU64::get);

        let http_client = reqwest::Client::builder()
            .no_gzip()
            .timeout(Duration::from_millis(timeout))
            .connect_timeout(Duration::from_millis(connect_timeout))
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Config(format!("build http client: {e}")))?;

        Ok(Self {
            http_client,
            url: cfg.url,
            bearer_token: cfg.bearer_token,
            max_num_retries: cfg.max_num_retries.unwrap_or(12),
            backoff: Backoff {
                base_ms: cfg.retry_base_ms.unwrap_or(200),
                jitter_ms: cfg.retry_backoff_ms.unwrap_or(500),
                ceiling_ms: cfg.retry_ceiling_ms.unwrap_or(5_000),
            },
        })
    }

    /// Getter for url field.
    pub fn url(&self) -> &Url {
        &self.url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Config(format!("{} can't be used as a base url", self.url)))?
            .pop_if_empty()
            .push(path);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        log::trace!("{method} {url}");
        let req = self.http_client.request(method, url);
        match &self.bearer_token {
            Some(bearer_token) => req.bearer_auth(bearer_token),
            None => req,
        }
    }

    async fn read_body(res: reqwest::Response) -> Result<Vec<u8>> {
        let status = res.status();
        if !status.is_success() {
            let message = match res.text().await {
                Ok(text) => text,
                Err(e) => format!("<unreadable body: {e}>"),
            };
            return Err(Error::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(res.bytes().await?.to_vec())
    }

    /// Runs `op` until it succeeds, fails with a non retryable error, or the retry budget is
    /// spent.
    async fn with_retry<T, F, Fut>(&self, what: &str, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0;

        loop {
            match op().await {
                Ok(res) => return Ok(res),
                Err(e) if e.is_retryable() && attempt < self.max_num_retries => {
                    log::error!("failed to {what}, retrying... The error was: {e:?}");
                    let delay = self
                        .backoff
                        .delay(u32::try_from(attempt).unwrap_or(u32::MAX));
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    if e.is_retryable() {
                        log::warn!("failed to {what} after {} attempts", attempt + 1);
                    }
                    return Err(e);
                }
            }
        }
    }

    async fn get_height_impl(&self, http_timeout_override: Option<Duration>) -> Result<u64> {
        let mut req = self.request(Method::GET, self.endpoint("height")?);

        if let Some(http_timeout_override) = http_timeout_override {
            req = req.timeout(http_timeout_override);
        }

        let res = req.send().await?;
        let bytes = Self::read_body(res).await?;

        parse_height(&bytes)
    }

    /// Get the height of the archive from the server with retries.
    pub async fn get_height(&self) -> Result<u64> {
        self.with_retry("get height", || self.get_height_impl(None))
            .await
    }

    /// Same as [`get_height`](Self::get_height).
    pub async fn get_height_with_retry(&self) -> Result<u64> {
        self.get_height().await
    }

    /// Get the height of the Client instance for health checks.
    /// Doesn't do any retries and the `http_req_timeout` parameter will override the http timeout config set when creating the client.
    pub async fn health_check(&self, http_req_timeout: Option<Duration>) -> Result<u64> {
        self.get_height_impl(http_req_timeout).await
    }

    async fn send_query(&self, query: &ValidatedQuery, records: Records) -> Result<QueryResponse> {
        let wire_query = match records {
            Records::Related => query.clone(),
            Records::Matching => query.with_filter_fields(),
        };
        let res = self
            .request(Method::POST, self.endpoint("query")?)
            .json(&wire_query)
            .send()
            .await?;

        let bytes = Self::read_body(res).await?;

        parse_query_response(&bytes, query, records)
    }

    async fn get_page(&self, query: &ValidatedQuery, records: Records) -> Result<QueryResponse> {
        self.with_retry("get data", || self.send_query(query, records))
            .await
    }

    /// Executes query with retries and returns a single page.
    ///
    /// The page holds every receipt, input and output of the transactions the selections
    /// matched, not only the matching ones. Useful for associating them with each other.
    /// The server may stop before `to_block`. The returned `next_block` tells where to continue.
    pub async fn get(&self, query: &ValidatedQuery) -> Result<QueryResponse> {
        self.get_page(query, Records::Related).await
    }

    /// Requests the next page of `cursor` and advances it. Only records matching the query's
    /// selections are returned.
    ///
    /// Returns `None` without sending anything if the cursor is finished. Failures are wrapped
    /// in [`Error::Interrupted`] with the cursor position to resume from.
    pub async fn step(&self, cursor: &mut QueryCursor) -> Result<Option<QueryResponse>> {
        self.step_with(cursor, Records::Matching).await
    }

    async fn step_with(
        &self,
        cursor: &mut QueryCursor,
        records: Records,
    ) -> Result<Option<QueryResponse>> {
        let Some(query) = cursor.next_query() else {
            return Ok(None);
        };

        let page = self
            .get_page(&query, records)
            .await
            .map_err(|e| e.interrupted(cursor.next_block()))?;
        cursor
            .advance(&page)
            .map_err(|e| e.interrupted(cursor.next_block()))?;

        log::debug!(
            "got blocks [{}, {}), {} records, archive height {:?}",
            query.from_block,
            page.next_block,
            page.data.len(),
            page.archive_height
        );

        Ok(Some(page))
    }

    /// Executes the query page by page until the range is covered, or until the archive has
    /// no more data for unbounded queries, and returns all pages merged.
    ///
    /// Receipts, inputs and outputs that don't match one of the query's selections are left
    /// out. `next_block` of the result is where a follow up query should start.
    pub async fn get_selected_data(&self, query: ValidatedQuery) -> Result<QueryResponse> {
        self.collect(query, Records::Matching).await
    }

    /// Like [`get_selected_data`](Self::get_selected_data) but keeps every receipt, input and
    /// output of the loaded transactions, as [`get`](Self::get) does.
    pub async fn get_data(&self, query: ValidatedQuery) -> Result<QueryResponse> {
        self.collect(query, Records::Related).await
    }

    async fn collect(&self, query: ValidatedQuery, records: Records) -> Result<QueryResponse> {
        let mut cursor = QueryCursor::new(query);
        let mut assembler = Assembler::new(cursor.next_block());

        while cursor.is_pending() {
            if let Some(page) = self.step_with(&mut cursor, records).await? {
                assembler.push(page);
            }
        }

        let mut res = assembler.finish();
        res.next_block = cursor.next_block();
        Ok(res)
    }

    /// Lazily streams the query page by page.
    ///
    /// A request is only sent when the previous item was consumed, dropping the stream cancels
    /// the query. After an error the stream ends, the error carries the block to resume from.
    pub fn stream(
        self: Arc<Self>,
        query: ValidatedQuery,
        config: StreamConfig,
    ) -> BoxStream<'static, Result<StreamEvent>> {
        stream::stream(self, query, config)
    }

    /// Like [`stream`](Self::stream) but ends as soon as `cancel` is cancelled. No request is
    /// sent after cancellation.
    pub fn stream_with_cancel(
        self: Arc<Self>,
        query: ValidatedQuery,
        config: StreamConfig,
        cancel: CancellationToken,
    ) -> BoxStream<'static, Result<StreamEvent>> {
        self.stream(query, config)
            .take_until(cancel.cancelled_owned())
            .boxed()
    }

    /// Returns `Log` and `LogData` receipts emitted by the given contracts within
    /// [from_block, to_block), together with the block and transaction they belong to.
    pub async fn preset_query_get_logs<I, S>(
        &self,
        emitting_contracts: I,
        from_block: u64,
        to_block: Option<u64>,
    ) -> Result<LogResponse>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let query = preset_query::logs(emitting_contracts, from_block, to_block)?;
        let res = self.get_selected_data(query).await?;
        LogResponse::try_from(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> Client {
        Client::new(ClientConfig::new(url.parse().unwrap())).unwrap()
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            client("http://localhost:1131").endpoint("query").unwrap().as_str(),
            "http://localhost:1131/query"
        );
        assert_eq!(
            client("https://fuel.hypersync.xyz/v2/").endpoint("height").unwrap().as_str(),
            "https://fuel.hypersync.xyz/v2/height"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        let res = Client::new(ClientConfig::new("mailto:dev@example.com".parse().unwrap()));
        assert!(matches!(res, Err(Error::Config(_))));
    }

    #[test]
    fn test_defaults() {
        let client = client("http://localhost:1131");
        assert_eq!(client.max_num_retries, 12);
        assert_eq!(
            client.backoff,
            Backoff {
                base_ms: 200,
                jitter_ms: 500,
                ceiling_ms: 5_000
            }
        );
    }
}
