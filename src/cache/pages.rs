//! Assembly of cursor-paginated pages into continuous cached lists.
//!
//! Each signature owns at most one [`CachedList`]. Applying a page either
//! replaces that list outright or, for a continuation, appends the new edges
//! behind the existing ones while the incoming `pageInfo` and `totalCount`
//! take over as the current frontier. A continuation against a signature
//! with no base page is a caller bug and is rejected rather than papered
//! over, since treating it as a first page would silently present a middle
//! page as the whole list.
//!
//! No deduplication by node identity happens here: under a stable sort the
//! server must not re-emit items already returned for the same signature.
//! Callers also serialize continuations per signature; nothing in the cache
//! orders concurrent applies.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::signature::ListSignature;
use crate::api::connection::{Connection, Edge, PageInfo};

/// Contract violations when applying a page to the cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
  /// A continuation page arrived for a signature that holds no list.
  #[error("continuation page applied to unknown list {signature}")]
  ContinuationWithoutBase { signature: ListSignature },
}

/// One logical list assembled from successive pages.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedList<N> {
  pub edges: Vec<Edge<N>>,
  pub page_info: PageInfo,
  pub total_count: u32,
}

impl<N> CachedList<N> {
  pub fn nodes(&self) -> impl Iterator<Item = &N> {
    self.edges.iter().map(|edge| &edge.node)
  }

  pub fn len(&self) -> usize {
    self.edges.len()
  }

  pub fn is_empty(&self) -> bool {
    self.edges.is_empty()
  }
}

/// Folds one incoming page into the list cached for a signature.
///
/// A non-continuation page replaces whatever was cached. A continuation
/// appends its edges in arrival order and adopts the incoming frontier,
/// which also makes an empty final page meaningful: content stays, the
/// frontier closes.
pub fn merge_page<N>(
  signature: &ListSignature,
  existing: Option<CachedList<N>>,
  incoming: Connection<N>,
  continuation: bool,
) -> Result<CachedList<N>, CacheError> {
  if !continuation {
    return Ok(CachedList {
      edges: incoming.edges,
      page_info: incoming.page_info,
      total_count: incoming.total_count,
    });
  }

  let mut base = existing.ok_or_else(|| CacheError::ContinuationWithoutBase {
    signature: signature.clone(),
  })?;
  base.edges.extend(incoming.edges);
  base.page_info = incoming.page_info;
  base.total_count = incoming.total_count;
  Ok(base)
}

/// Keyed store of assembled lists, one per signature.
#[derive(Debug)]
pub struct PagedListCache<N> {
  lists: HashMap<ListSignature, CachedList<N>>,
}

impl<N> PagedListCache<N> {
  pub fn new() -> Self {
    Self {
      lists: HashMap::new(),
    }
  }

  /// Applies one fetched page under the given signature and returns the
  /// resulting list.
  pub fn apply(
    &mut self,
    signature: &ListSignature,
    incoming: Connection<N>,
    continuation: bool,
  ) -> Result<&CachedList<N>, CacheError> {
    let existing = self.lists.remove(signature);
    let merged = merge_page(signature, existing, incoming, continuation)?;
    debug!(
      %signature,
      continuation,
      edges = merged.edges.len(),
      "applied page"
    );
    Ok(self.lists.entry(signature.clone()).or_insert(merged))
  }

  /// The assembled list for a signature, if any page has been applied.
  pub fn list(&self, signature: &ListSignature) -> Option<&CachedList<N>> {
    self.lists.get(signature)
  }

  /// Whether more pages can be requested. Unknown signatures have no
  /// frontier to extend, so this is false for them.
  pub fn has_more(&self, signature: &ListSignature) -> bool {
    self
      .lists
      .get(signature)
      .map(|list| list.page_info.has_next_page)
      .unwrap_or(false)
  }

  /// Cursor to pass as `after` for the next page, if the list has one.
  pub fn next_cursor(&self, signature: &ListSignature) -> Option<&str> {
    self
      .lists
      .get(signature)
      .and_then(|list| list.page_info.end_cursor.as_deref())
  }
}

impl<N> Default for PagedListCache<N> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::filter::{GameFilter, GameOrder};
  use crate::cache::signature::CollectionKey;

  fn signature(order: GameOrder) -> ListSignature {
    CollectionKey::Games {
      filter: GameFilter::default(),
      order,
    }
    .signature()
  }

  fn page(nodes: &[&str], has_next: bool, end_cursor: Option<&str>, total: u32) -> Connection<String> {
    Connection {
      edges: nodes
        .iter()
        .map(|node| Edge {
          cursor: format!("cur-{node}"),
          node: node.to_string(),
        })
        .collect(),
      page_info: PageInfo {
        has_next_page: has_next,
        end_cursor: end_cursor.map(str::to_string),
      },
      total_count: total,
    }
  }

  fn nodes(list: &CachedList<String>) -> Vec<&str> {
    list.nodes().map(String::as_str).collect()
  }

  #[test]
  fn test_first_page_replaces_nothing() {
    let mut cache = PagedListCache::new();
    let sig = signature(GameOrder::TitleAsc);

    let list = cache
      .apply(&sig, page(&["a", "b"], true, Some("cur-b"), 5), false)
      .unwrap();
    assert_eq!(nodes(list), vec!["a", "b"]);
    assert_eq!(list.total_count, 5);
    assert!(cache.has_more(&sig));
    assert_eq!(cache.next_cursor(&sig), Some("cur-b"));
  }

  #[test]
  fn test_non_continuation_replaces_entire_list() {
    let mut cache = PagedListCache::new();
    let sig = signature(GameOrder::TitleAsc);

    cache
      .apply(&sig, page(&["a", "b", "c"], true, Some("cur-c"), 9), false)
      .unwrap();
    let list = cache
      .apply(&sig, page(&["x"], false, Some("cur-x"), 1), false)
      .unwrap();

    // Refreshes start over; stale edges must not survive.
    assert_eq!(nodes(list), vec!["x"]);
    assert_eq!(list.total_count, 1);
    assert!(!cache.has_more(&sig));
  }

  #[test]
  fn test_continuations_append_in_arrival_order() {
    let mut cache = PagedListCache::new();
    let sig = signature(GameOrder::TitleAsc);

    cache
      .apply(&sig, page(&["a", "b"], true, Some("cur-b"), 6), false)
      .unwrap();
    cache
      .apply(&sig, page(&["c", "d"], true, Some("cur-d"), 6), true)
      .unwrap();
    let list = cache
      .apply(&sig, page(&["e", "f"], false, Some("cur-f"), 6), true)
      .unwrap();

    assert_eq!(nodes(list), vec!["a", "b", "c", "d", "e", "f"]);
    assert_eq!(list.len(), 6);
    assert!(!cache.has_more(&sig));
    assert_eq!(cache.next_cursor(&sig), Some("cur-f"));
  }

  #[test]
  fn test_continuation_adopts_incoming_frontier() {
    let mut cache = PagedListCache::new();
    let sig = signature(GameOrder::TitleAsc);

    cache
      .apply(&sig, page(&["a"], true, Some("cur-a"), 4), false)
      .unwrap();
    let list = cache
      .apply(&sig, page(&["b"], true, Some("cur-b"), 4), true)
      .unwrap();

    assert_eq!(list.page_info.end_cursor.as_deref(), Some("cur-b"));
    assert!(list.page_info.has_next_page);
  }

  #[test]
  fn test_empty_continuation_page_closes_the_frontier() {
    let mut cache = PagedListCache::new();
    let sig = signature(GameOrder::TitleAsc);

    cache
      .apply(&sig, page(&["a", "b"], true, Some("cur-b"), 2), false)
      .unwrap();
    let list = cache.apply(&sig, page(&[], false, None, 2), true).unwrap();

    assert_eq!(nodes(list), vec!["a", "b"]);
    assert!(!cache.has_more(&sig));
    assert_eq!(cache.next_cursor(&sig), None);
  }

  #[test]
  fn test_continuation_without_base_is_rejected() {
    let mut cache: PagedListCache<String> = PagedListCache::new();
    let sig = signature(GameOrder::TitleAsc);

    let error = cache
      .apply(&sig, page(&["c"], false, None, 1), true)
      .unwrap_err();
    assert_eq!(
      error,
      CacheError::ContinuationWithoutBase {
        signature: sig.clone()
      }
    );
    // The cache stays untouched by the rejected page.
    assert!(cache.list(&sig).is_none());
    assert!(!cache.has_more(&sig));
  }

  #[test]
  fn test_lists_are_isolated_by_signature() {
    let mut cache = PagedListCache::new();
    let asc = signature(GameOrder::TitleAsc);
    let desc = signature(GameOrder::TitleDesc);

    cache
      .apply(&asc, page(&["a", "b"], true, Some("cur-b"), 4), false)
      .unwrap();
    cache
      .apply(&desc, page(&["z"], false, None, 1), false)
      .unwrap();
    cache
      .apply(&asc, page(&["c"], false, None, 4), true)
      .unwrap();

    assert_eq!(nodes(cache.list(&asc).unwrap()), vec!["a", "b", "c"]);
    assert_eq!(nodes(cache.list(&desc).unwrap()), vec!["z"]);
  }

  #[test]
  fn test_unknown_signature_has_no_frontier() {
    let cache: PagedListCache<String> = PagedListCache::new();
    let sig = signature(GameOrder::TitleAsc);
    assert!(cache.list(&sig).is_none());
    assert!(!cache.has_more(&sig));
    assert_eq!(cache.next_cursor(&sig), None);
  }

  #[test]
  fn test_merge_page_is_pure_over_its_inputs() {
    let sig = signature(GameOrder::TitleAsc);

    let first = merge_page(&sig, None, page(&["a"], true, Some("cur-a"), 3), false).unwrap();
    let second = merge_page(&sig, Some(first), page(&["b"], true, Some("cur-b"), 3), true).unwrap();
    let third = merge_page(&sig, Some(second), page(&["c"], false, None, 3), true).unwrap();

    assert_eq!(nodes(&third), vec!["a", "b", "c"]);
    assert!(!third.page_info.has_next_page);
  }
}
