//! Stable identity for one logical list.
//!
//! Every paginated collection request is keyed by what it asks for, not how
//! the request was assembled: filters are normalized first, then folded with
//! the collection name and sort order into a canonical string, and the
//! SHA-256 of that string becomes the cache key. Requests that mean the same
//! list therefore share one cache entry, and pages of differently filtered
//! or sorted lists can never interleave.

use sha2::{Digest, Sha256};
use std::fmt;

use crate::api::filter::{
  normalize_field, AchievementFilter, AchievementOrder, GameFilter, GameOrder,
};

/// Opaque signature addressing one list in the page cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListSignature(String);

impl ListSignature {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ListSignature {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// One of the client's paginated collections together with the filter and
/// sort order that select a particular list of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionKey {
  Games {
    filter: GameFilter,
    order: GameOrder,
  },
  Achievements {
    filter: AchievementFilter,
    order: AchievementOrder,
  },
  Users {
    search: Option<String>,
  },
  MyAchievements,
  MyTrophies,
}

impl CollectionKey {
  /// Derives the cache signature for this key.
  pub fn signature(&self) -> ListSignature {
    let mut hasher = Sha256::new();
    hasher.update(self.canonical().as_bytes());
    ListSignature(hex::encode(hasher.finalize()))
  }

  /// Canonical text folded into the signature. Field values are rendered
  /// with their `Debug` escaping so adjacent fields cannot run together.
  fn canonical(&self) -> String {
    match self {
      Self::Games { filter, order } => {
        let filter = filter.normalized();
        format!(
          "games:{}:{:?}:{:?}:{:?}",
          order.as_str(),
          filter.search,
          filter.platform_id,
          filter.has_achievements
        )
      }
      Self::Achievements { filter, order } => {
        let filter = filter.normalized();
        format!(
          "achievements:{}:{:?}",
          order.as_str(),
          filter.achievement_set_id
        )
      }
      Self::Users { search } => format!("users:{:?}", normalize_field(search)),
      Self::MyAchievements => "my_achievements".to_string(),
      Self::MyTrophies => "my_trophies".to_string(),
    }
  }

  /// Human-readable description of the list, for logs and diagnostics.
  pub fn describe(&self) -> String {
    match self {
      Self::Games { filter, order } => {
        let filter = filter.normalized();
        let mut parts = Vec::new();
        if let Some(search) = &filter.search {
          parts.push(format!("search '{search}'"));
        }
        if let Some(platform) = &filter.platform_id {
          parts.push(format!("platform {platform}"));
        }
        match filter.has_achievements {
          Some(true) => parts.push("with achievements".to_string()),
          Some(false) => parts.push("without achievements".to_string()),
          None => {}
        }
        if parts.is_empty() {
          format!("games by {order}")
        } else {
          format!("games ({}) by {order}", parts.join(", "))
        }
      }
      Self::Achievements { filter, order } => match &filter.normalized().achievement_set_id {
        Some(set) => format!("achievements in set {set} by {order}"),
        None => format!("achievements by {order}"),
      },
      Self::Users { search } => match normalize_field(search) {
        Some(search) => format!("users matching '{search}'"),
        None => "all users".to_string(),
      },
      Self::MyAchievements => "my achievements".to_string(),
      Self::MyTrophies => "my trophies".to_string(),
    }
  }
}
