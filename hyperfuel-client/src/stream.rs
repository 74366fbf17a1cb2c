use std::{sync::Arc, time::Duration};

use futures::stream::{self, BoxStream, StreamExt};
use hyperfuel_net_types::ValidatedQuery;

use crate::{Client, Error, QueryResponse, ResponseData, Result, StreamConfig};

/// Where a [`QueryCursor`] stands relative to the requested range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// More pages to fetch.
    Pending,
    /// The archive has no data past the cursor yet. Polling again later can make progress.
    CaughtUp,
    /// The whole range was covered.
    Finished,
}

/// Pagination state of one query execution.
///
/// The server reports how far each page got in `next_block`, which becomes the `from_block`
/// of the next request.
#[derive(Debug, Clone)]
pub struct QueryCursor {
    query: ValidatedQuery,
    next_block: u64,
    state: CursorState,
}

impl QueryCursor {
    /// Cursor at the start of `query`.
    pub fn new(query: ValidatedQuery) -> Self {
        let next_block = query.from_block;
        let state = if query.to_block.is_some_and(|to_block| next_block >= to_block) {
            CursorState::Finished
        } else {
            CursorState::Pending
        };

        Self {
            query,
            next_block,
            state,
        }
    }

    /// First block not covered yet.
    pub fn next_block(&self) -> u64 {
        self.next_block
    }

    /// Current state.
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Whether another page should be requested right away.
    pub fn is_pending(&self) -> bool {
        self.state == CursorState::Pending
    }

    /// The query being paginated.
    pub fn query(&self) -> &ValidatedQuery {
        &self.query
    }

    /// Query for the next page, `None` once finished.
    pub fn next_query(&self) -> Option<ValidatedQuery> {
        match self.state {
            CursorState::Finished => None,
            _ => Some(self.query.with_from_block(self.next_block)),
        }
    }

    /// Moves the cursor past `page`, the response to [`next_query`](Self::next_query).
    pub fn advance(&mut self, page: &QueryResponse) -> Result<()> {
        if page.next_block < self.next_block {
            return Err(Error::Protocol(format!(
                "next_block went backwards from {} to {}",
                self.next_block, page.next_block
            )));
        }

        let next_block = match self.query.to_block {
            Some(to_block) => page.next_block.min(to_block),
            None => page.next_block,
        };
        let progressed = next_block > self.next_block;
        self.next_block = next_block;

        self.state = if self.query.to_block.is_some_and(|to_block| next_block >= to_block) {
            CursorState::Finished
        } else if !progressed || page.archive_height.is_some_and(|h| h < next_block) {
            CursorState::CaughtUp
        } else {
            CursorState::Pending
        };

        Ok(())
    }

    /// Makes a caught up cursor request pages again.
    pub fn resume(&mut self) {
        if self.state == CursorState::CaughtUp {
            self.state = CursorState::Pending;
        }
    }
}

/// Item of [`Client::stream`](crate::Client::stream).
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// A page of data.
    Page(QueryResponse),
    /// The stream reached the end of the archive. Only sent for ranges that aren't finished.
    CaughtUp {
        /// Block the stream will continue from.
        next_block: u64,
        /// Archive height reported with the last page.
        archive_height: Option<u64>,
    },
}

#[derive(Default, Debug)]
struct EntityCounts {
    blocks: usize,
    transactions: usize,
    receipts: usize,
    inputs: usize,
    outputs: usize,
}

impl EntityCounts {
    fn add(&mut self, data: &ResponseData) {
        self.blocks += data.blocks.len();
        self.transactions += data.transactions.len();
        self.receipts += data.receipts.len();
        self.inputs += data.inputs.len();
        self.outputs += data.outputs.len();
    }

    fn limit_reached(&self, config: &StreamConfig) -> bool {
        check_entity_limit(self.blocks, config.max_num_blocks)
            || check_entity_limit(self.transactions, config.max_num_transactions)
            || check_entity_limit(self.receipts, config.max_num_receipts)
            || check_entity_limit(self.inputs, config.max_num_inputs)
            || check_entity_limit(self.outputs, config.max_num_outputs)
    }
}

fn check_entity_limit(val: usize, limit: Option<usize>) -> bool {
    if let Some(limit) = limit {
        val >= limit
    } else {
        false
    }
}

struct StreamState {
    client: Arc<Client>,
    cursor: QueryCursor,
    config: StreamConfig,
    counts: EntityCounts,
    queued: Option<StreamEvent>,
    announced_caught_up: bool,
    done: bool,
}

impl StreamState {
    async fn next_event(&mut self) -> Option<Result<StreamEvent>> {
        loop {
            if let Some(event) = self.queued.take() {
                return Some(Ok(event));
            }
            if self.done {
                return None;
            }

            match self.cursor.state() {
                CursorState::Finished => return None,
                CursorState::CaughtUp => {
                    let interval = Duration::from_millis(self.config.poll_interval_ms?);
                    if let Err(e) = self.wait_for_new_blocks(interval).await {
                        self.done = true;
                        return Some(Err(e.interrupted(self.cursor.next_block())));
                    }
                    self.cursor.resume();
                }
                CursorState::Pending => (),
            }

            let from_block = self.cursor.next_block();
            let page = match self.client.step(&mut self.cursor).await {
                Ok(Some(page)) => page,
                Ok(None) => return None,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            let progressed = self.cursor.next_block() > from_block;
            if progressed {
                self.announced_caught_up = false;
            }

            if self.cursor.state() == CursorState::CaughtUp && !self.announced_caught_up {
                self.announced_caught_up = true;
                self.queued = Some(StreamEvent::CaughtUp {
                    next_block: self.cursor.next_block(),
                    archive_height: page.archive_height,
                });
            }

            if progressed || !page.data.is_empty() {
                self.counts.add(&page.data);
                if self.counts.limit_reached(&self.config) {
                    log::debug!("stream hit entity limit at block {}", self.cursor.next_block());
                    self.queued = None;
                    self.done = true;
                }
                return Some(Ok(StreamEvent::Page(page)));
            }
        }
    }

    async fn wait_for_new_blocks(&self, interval: Duration) -> Result<()> {
        loop {
            tokio::time::sleep(interval).await;
            let height = self.client.get_height().await?;
            log::trace!(
                "polled archive height {height}, waiting for block {}",
                self.cursor.next_block()
            );
            if height >= self.cursor.next_block() {
                return Ok(());
            }
        }
    }
}

/// Lazy page stream. The next request is sent only when the previous item was consumed.
pub(crate) fn stream(
    client: Arc<Client>,
    query: ValidatedQuery,
    config: StreamConfig,
) -> BoxStream<'static, Result<StreamEvent>> {
    let state = StreamState {
        client,
        cursor: QueryCursor::new(query),
        config,
        counts: EntityCounts::default(),
        queued: None,
        announced_caught_up: false,
        done: false,
    };

    stream::unfold(state, |mut state| async move {
        let event = state.next_event().await?;
        Some((event, state))
    })
    .boxed()
}
