//! Lazy record stream over paginated responses

use super::types::{Collection, Cursor, Envelope, PAGE_SIZE};
use crate::error::Error;
use crate::http::PageFetcher;
use crate::types::Query;
use futures::Stream;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// How a stream's producer ended
#[derive(Debug)]
pub enum Completion {
    /// The cursor moved past the reported total
    Exhausted { pages: u32, records: u64 },
    /// The consumer cancelled or stopped receiving
    Cancelled { pages: u32, records: u64 },
    /// A page could not be fetched or decoded
    Failed {
        pages: u32,
        records: u64,
        error: Error,
    },
}

impl Completion {
    /// Pages successfully fetched and decoded
    pub fn pages(&self) -> u32 {
        match self {
            Self::Exhausted { pages, .. }
            | Self::Cancelled { pages, .. }
            | Self::Failed { pages, .. } => *pages,
        }
    }

    /// Records queued for the consumer
    ///
    /// Counts records placed in the channel, which may exceed what the
    /// consumer actually received before cancelling.
    pub fn records(&self) -> u64 {
        match self {
            Self::Exhausted { records, .. }
            | Self::Cancelled { records, .. }
            | Self::Failed { records, .. } => *records,
        }
    }

    /// The failure that ended the stream, if any
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Check if every page was read
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

/// Spawns record streams over a page fetcher
#[derive(Clone)]
pub struct Paginator {
    fetcher: Arc<dyn PageFetcher>,
    page_size: u32,
}

impl Paginator {
    /// Create a paginator with the default page size
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            page_size: PAGE_SIZE,
        }
    }

    /// Override the page size (at least one)
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Records requested per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Stream every record of a collection matching `query`
    ///
    /// The query is copied; pagination parameters are only ever set on the
    /// copy. Must be called from within a Tokio runtime.
    pub fn stream<C: Collection>(&self, query: &Query) -> RecordStream<C::Item> {
        let (tx, rx) = mpsc::channel(self.page_size as usize);
        let token = CancellationToken::new();

        let task = tokio::spawn(produce::<C>(
            Arc::clone(&self.fetcher),
            query.clone(),
            Cursor::new(self.page_size),
            tx,
            token.clone(),
        ));

        RecordStream {
            rx,
            token,
            task: Some(task),
        }
    }
}

impl std::fmt::Debug for Paginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

/// Producer loop for one stream
async fn produce<C: Collection>(
    fetcher: Arc<dyn PageFetcher>,
    filters: Query,
    mut cursor: Cursor,
    tx: mpsc::Sender<C::Item>,
    token: CancellationToken,
) -> Completion {
    let resource = C::RESOURCE;
    let mut pages = 0;
    let mut records = 0;

    loop {
        let page_query = cursor.page_query(&filters);

        let fetched = tokio::select! {
            biased;
            () = token.cancelled() => return Completion::Cancelled { pages, records },
            fetched = fetcher.fetch_page(resource, &page_query) => fetched,
        };

        let body = match fetched {
            Ok(body) => body,
            Err(error) => {
                debug!(%resource, offset = cursor.offset, %error, "Page fetch failed, ending stream");
                return Completion::Failed {
                    pages,
                    records,
                    error,
                };
            }
        };

        let envelope = match Envelope::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!(%resource, offset = cursor.offset, %error, "Failed to decode page, ending stream");
                return Completion::Failed {
                    pages,
                    records,
                    error,
                };
            }
        };

        pages += 1;
        let total_count = envelope.total_count;
        let items = C::select(envelope);
        debug!(
            %resource,
            offset = cursor.offset,
            total_count,
            items = items.len(),
            "Fetched page {pages}"
        );

        for item in items {
            tokio::select! {
                biased;
                () = token.cancelled() => return Completion::Cancelled { pages, records },
                sent = tx.send(item) => {
                    if sent.is_err() {
                        return Completion::Cancelled { pages, records };
                    }
                }
            }
            records += 1;
        }

        cursor.advance();
        if cursor.is_past(total_count) {
            return Completion::Exhausted { pages, records };
        }
    }
}

/// Lazily produced records of one paginated query
///
/// Yields records in page order. The stream ends silently on exhaustion,
/// failure or cancellation; [`finish`](Self::finish) tells which. Dropping
/// the stream cancels its producer.
pub struct RecordStream<T> {
    rx: mpsc::Receiver<T>,
    token: CancellationToken,
    task: Option<JoinHandle<Completion>>,
}

impl<T> RecordStream<T> {
    /// Ask the producer to stop
    ///
    /// Records already buffered can still be received.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stop receiving and wait for the producer to end
    ///
    /// Records not yet received are discarded and the producer fetches no
    /// further pages. Call after draining the stream to learn whether it
    /// was exhausted or cut short.
    pub async fn finish(mut self) -> Completion {
        self.rx.close();
        self.token.cancel();
        let Some(task) = self.task.take() else {
            return Completion::Cancelled {
                pages: 0,
                records: 0,
            };
        };

        match task.await {
            Ok(completion) => completion,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(_) => Completion::Cancelled {
                pages: 0,
                records: 0,
            },
        }
    }
}

impl<T> Stream for RecordStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.rx.poll_recv(cx)
    }
}

impl<T> Unpin for RecordStream<T> {}

impl<T> Drop for RecordStream<T> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl<T> std::fmt::Debug for RecordStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStream")
            .field("cancelled", &self.token.is_cancelled())
            .finish_non_exhaustive()
    }
}
