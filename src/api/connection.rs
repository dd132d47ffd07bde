//! Relay-style connection shapes shared by every paginated collection.

use serde::{Deserialize, Serialize};

/// Pagination frontier of one fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
  #[serde(default)]
  pub has_next_page: bool,
  #[serde(default)]
  pub end_cursor: Option<String>,
}

/// One node with the opaque cursor that addresses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<N> {
  pub cursor: String,
  pub node: N,
}

/// One page of a collection as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "N: Deserialize<'de>"))]
pub struct Connection<N> {
  #[serde(default)]
  pub edges: Vec<Edge<N>>,
  pub page_info: PageInfo,
  /// Collection-wide count, not the size of this page.
  #[serde(default)]
  pub total_count: u32,
}

impl<N> Connection<N> {
  pub fn nodes(&self) -> impl Iterator<Item = &N> {
    self.edges.iter().map(|edge| &edge.node)
  }
}
