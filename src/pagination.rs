//! Concurrent retrieval of paginated resources.
//!
//! Large resources such as ladders are served a page at a time. [`get_all`]
//! fetches the first page to learn the total size, then requests every
//! remaining page concurrently and merges the results into one value.
//!
//! A single failed page fails the whole operation: the caller either gets the
//! complete resource or the first error that occurred, never a partial one.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::error::PoeError;

/// A page of a larger resource.
pub trait Paginated: Send + 'static {
    /// Element type of the page.
    type Entry: Send + 'static;

    /// Size of the full resource, as reported by the API.
    fn total(&self) -> usize;

    /// Move the page's entries out, leaving it empty.
    fn take_entries(&mut self) -> Vec<Self::Entry>;

    /// Replace the page's entries.
    fn set_entries(&mut self, entries: Vec<Self::Entry>);
}

/// Request options that can address a single page.
pub trait PageOptions: Clone + Send + 'static {
    /// Copy of these options addressing `limit` entries starting at `offset`.
    fn with_page(&self, limit: usize, offset: usize) -> Self;
}

/// Paging bounds of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Largest page the endpoint serves.
    pub page_size: usize,
    /// Most pages the endpoint serves.
    pub max_pages: usize,
}

impl PageLimits {
    /// Largest number of entries reachable through paging.
    pub fn max_entries(&self) -> usize {
        self.page_size * self.max_pages
    }

    /// Offsets of every page after the first, for a resource of `total` entries.
    pub fn remaining_offsets(&self, total: usize) -> impl Iterator<Item = usize> + use<> {
        let end = total.min(self.max_entries());
        (self.page_size..end).step_by(self.page_size.max(1))
    }
}

/// Paging bounds of the ladder endpoint: 75 pages of 200 entries.
pub const LADDER_PAGES: PageLimits = PageLimits {
    page_size: 200,
    max_pages: 75,
};

/// Fetch every page of a resource and merge them into the first page.
///
/// `fetch_page` is called once with the first-page options, then once per
/// remaining offset from concurrently spawned tasks. The merged value keeps
/// the first page's metadata; entries from later pages are appended in
/// completion order.
///
/// The first failure cancels the remaining page tasks through a child of
/// `cancel`. All tasks are joined before returning.
pub async fn get_all<O, P, F, Fut>(
    options: O,
    limits: PageLimits,
    fetch_page: F,
    cancel: &CancellationToken,
) -> Result<P, PoeError>
where
    O: PageOptions,
    P: Paginated,
    F: Fn(O, CancellationToken) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<P, PoeError>> + Send + 'static,
{
    let first_options = options.with_page(limits.page_size, 0);
    let mut first = fetch_page(first_options, cancel.clone()).await?;

    let total = first.total();
    if total <= limits.page_size {
        return Ok(first);
    }

    let offsets: Vec<usize> = limits.remaining_offsets(total).collect();
    tracing::debug!(total, pages = offsets.len() + 1, "fetching remaining pages");

    let entries = Arc::new(Mutex::new(first.take_entries()));
    let (err_tx, mut err_rx) = mpsc::channel(limits.max_pages.max(1));
    let page_cancel = cancel.child_token();

    let mut tasks = JoinSet::new();
    for offset in offsets {
        let page_options = options.with_page(limits.page_size, offset);
        let fetch_page = fetch_page.clone();
        let entries = entries.clone();
        let err_tx = err_tx.clone();
        let page_cancel = page_cancel.clone();

        tasks.spawn(async move {
            match fetch_page(page_options, page_cancel.clone()).await {
                Ok(mut page) => {
                    let page_entries = page.take_entries();
                    entries.lock().await.extend(page_entries);
                }
                Err(err) => {
                    if !matches!(err, PoeError::Cancelled) {
                        tracing::warn!(offset, error = %err, "page fetch failed");
                    }
                    // Capacity covers every page, so a send can only fail if
                    // the receiver is gone.
                    let _ = err_tx.try_send(err);
                    page_cancel.cancel();
                }
            }
        });
    }
    drop(err_tx);

    let mut join_failure = None;
    while let Some(joined) = tasks.join_next().await {
        if let Err(err) = joined {
            tracing::warn!(error = %err, "page task did not complete");
            join_failure.get_or_insert(err.to_string());
        }
    }

    if let Ok(err) = err_rx.try_recv() {
        return Err(err);
    }
    if let Some(reason) = join_failure {
        return Err(PoeError::TaskFailed(reason));
    }

    let collected = std::mem::take(&mut *entries.lock().await);
    first.set_entries(collected);
    Ok(first)
}
