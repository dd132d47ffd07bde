//! Poll-driven loader for paginated collection lists.
//!
//! Inspired by TanStack Query, `ListQuery<N>` owns the fetch lifecycle for
//! one collection: it derives the cache signature from the current
//! [`CollectionKey`], runs page fetches on the tokio runtime, and folds
//! results into a [`PagedListCache`] as they arrive. At most one fetch is
//! in flight at a time, and changing the key drops the in-flight receiver
//! so a superseded response can never land in the wrong list.
//!
//! # Example
//!
//! ```ignore
//! let mut query = ListQuery::new(
//!   CollectionKey::Games { filter: GameFilter::default(), order: GameOrder::TitleAsc },
//!   move |request| {
//!     let client = client.clone();
//!     async move { client.fetch_games(request).await.map_err(|e| e.to_string()) }
//!   },
//! );
//!
//! // Start fetching
//! query.fetch();
//!
//! // In event loop tick
//! if query.poll() {
//!   // State changed, trigger re-render
//! }
//!
//! // Near the bottom of the list
//! if query.has_more() {
//!   query.load_more();
//! }
//! ```

use std::future::Future;

use futures::future::BoxFuture;
use tokio::sync::mpsc;
use tracing::debug;

use crate::api::connection::{Connection, Edge};
use crate::cache::{CollectionKey, ListSignature, PagedListCache};

/// Page size the collection views request, a dozen cards per screenful.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// One page-fetch request handed to the fetcher.
#[derive(Debug, Clone)]
pub struct PageRequest {
  pub key: CollectionKey,
  /// Cursor to continue after; `None` requests the first page.
  pub after: Option<String>,
  pub first: u32,
}

impl PageRequest {
  /// Whether this request continues an already-fetched list.
  pub fn is_continuation(&self) -> bool {
    self.after.is_some()
  }
}

/// A boxed future resolving to a fetched page or an error message.
type PageFuture<N> = BoxFuture<'static, Result<Connection<N>, String>>;

/// A factory function that creates page-fetch futures.
type FetcherFn<N> = Box<dyn Fn(PageRequest) -> PageFuture<N> + Send + Sync>;

/// Loader for one paginated collection with list-cache integration.
///
/// `ListQuery<N>` encapsulates:
/// - The page-fetching logic (via a closure)
/// - The current key and its derived cache signature
/// - Async result handling via channels
/// - Append-versus-replace decisions when pages arrive
pub struct ListQuery<N> {
  key: CollectionKey,
  signature: ListSignature,
  cache: PagedListCache<N>,
  fetcher: FetcherFn<N>,
  page_size: u32,
  receiver: Option<mpsc::UnboundedReceiver<Result<Connection<N>, String>>>,
  /// Whether the in-flight fetch extends the current list.
  pending_continuation: bool,
  last_error: Option<String>,
}

impl<N: Send + 'static> ListQuery<N> {
  /// Create a new loader for the given key.
  ///
  /// The fetcher is a closure that turns a [`PageRequest`] into a future.
  /// It is called once per page fetch; nothing is requested until
  /// [`fetch`](Self::fetch) is invoked.
  pub fn new<F, Fut>(key: CollectionKey, fetcher: F) -> Self
  where
    F: Fn(PageRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Connection<N>, String>> + Send + 'static,
  {
    let signature = key.signature();
    Self {
      key,
      signature,
      cache: PagedListCache::new(),
      fetcher: Box::new(move |request| Box::pin(fetcher(request))),
      page_size: DEFAULT_PAGE_SIZE,
      receiver: None,
      pending_continuation: false,
      last_error: None,
    }
  }

  /// Set the page size requested from the fetcher.
  pub fn with_page_size(mut self, page_size: u32) -> Self {
    self.page_size = page_size;
    self
  }

  pub fn key(&self) -> &CollectionKey {
    &self.key
  }

  pub fn signature(&self) -> &ListSignature {
    &self.signature
  }

  /// Edges of the current list, in assembled order.
  pub fn edges(&self) -> &[Edge<N>] {
    self
      .cache
      .list(&self.signature)
      .map(|list| list.edges.as_slice())
      .unwrap_or(&[])
  }

  /// Nodes of the current list, in assembled order.
  pub fn nodes(&self) -> impl Iterator<Item = &N> {
    self.edges().iter().map(|edge| &edge.node)
  }

  /// Collection-wide count reported by the most recent page, if any.
  pub fn total_count(&self) -> Option<u32> {
    self.cache.list(&self.signature).map(|list| list.total_count)
  }

  /// Whether more pages can be requested for the current list.
  pub fn has_more(&self) -> bool {
    self.cache.has_more(&self.signature)
  }

  pub fn is_loading(&self) -> bool {
    self.receiver.is_some()
  }

  /// Error message from the most recent failed fetch, cleared by the next
  /// successful page.
  pub fn last_error(&self) -> Option<&str> {
    self.last_error.as_deref()
  }

  /// Switch to a different filter/sort combination.
  ///
  /// Lists already assembled stay cached, so returning to a previous key
  /// shows its content immediately. A fetch for the new key starts right
  /// away, and any in-flight fetch is discarded first so a superseded
  /// response cannot cross into the new list.
  pub fn set_key(&mut self, key: CollectionKey) {
    let signature = key.signature();
    if signature == self.signature {
      return;
    }
    if self.receiver.is_some() {
      debug!(list = %self.key.describe(), "discarding in-flight fetch");
    }
    self.receiver = None;
    self.key = key;
    self.signature = signature;
    self.last_error = None;
    self.start_fetch(None);
  }

  /// Start fetching the first page if nothing is in flight.
  ///
  /// This is a no-op while a fetch is loading.
  pub fn fetch(&mut self) {
    if self.receiver.is_some() {
      return;
    }
    self.start_fetch(None);
  }

  /// Force a first-page refetch, discarding any in-flight fetch. The
  /// arriving page replaces the whole list.
  pub fn refresh(&mut self) {
    self.receiver = None;
    self.start_fetch(None);
  }

  /// Request the page after the current frontier.
  ///
  /// No-op while a fetch is in flight, or when the current list is absent
  /// or already complete. Continuations therefore always extend a list the
  /// cache knows.
  pub fn load_more(&mut self) {
    if self.receiver.is_some() || !self.cache.has_more(&self.signature) {
      return;
    }
    let after = match self.cache.next_cursor(&self.signature) {
      Some(cursor) => Some(cursor.to_string()),
      None => return,
    };
    self.start_fetch(after);
  }

  /// Poll for the result of a pending fetch.
  ///
  /// Returns `true` if the state changed (a page was applied or an error
  /// was recorded). Call this in your event loop tick handler.
  pub fn poll(&mut self) -> bool {
    let receiver = match &mut self.receiver {
      Some(rx) => rx,
      None => return false,
    };

    // Try to receive without blocking
    match receiver.try_recv() {
      Ok(Ok(page)) => {
        let continuation = self.pending_continuation;
        self.receiver = None;
        match self.cache.apply(&self.signature, page, continuation) {
          Ok(_) => self.last_error = None,
          Err(error) => self.last_error = Some(error.to_string()),
        }
        true
      }
      Ok(Err(error)) => {
        self.receiver = None;
        self.last_error = Some(error);
        true
      }
      Err(mpsc::error::TryRecvError::Empty) => false,
      Err(mpsc::error::TryRecvError::Disconnected) => {
        // Sender dropped without sending - treat as error
        self.receiver = None;
        self.last_error = Some("page fetch was cancelled".to_string());
        true
      }
    }
  }

  /// Internal: start a fetch for the current key.
  fn start_fetch(&mut self, after: Option<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    self.pending_continuation = after.is_some();
    self.receiver = Some(rx);

    let request = PageRequest {
      key: self.key.clone(),
      after,
      first: self.page_size,
    };
    let future = (self.fetcher)(request);
    tokio::spawn(async move {
      let result = future.await;
      // Ignore send errors - receiver may have been dropped
      let _ = tx.send(result);
    });
  }
}

// ListQuery is not Clone because the fetcher is boxed and the receiver is
// owned. If you need to share one, wrap it in Arc<Mutex<ListQuery<N>>>.

impl<N> std::fmt::Debug for ListQuery<N> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ListQuery")
      .field("key", &self.key)
      .field("signature", &self.signature)
      .field("loading", &self.receiver.is_some())
      .field("last_error", &self.last_error)
      .finish_non_exhaustive()
  }
}
