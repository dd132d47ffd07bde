//! Filter and sort-order inputs for the paginated collection queries.
//!
//! Filters serialize exactly like the query variables the web client sends:
//! unset fields are omitted rather than sent as null. `normalized` collapses
//! the remaining absent-versus-empty ambiguity so that two requests meaning
//! the same list also key the same cache entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filter input for the games collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameFilter {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub search: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub platform_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub has_achievements: Option<bool>,
}

impl GameFilter {
  /// Collapses empty strings to absent fields. An empty search box and no
  /// search box describe the same list.
  pub fn normalized(&self) -> GameFilter {
    GameFilter {
      search: normalize_field(&self.search),
      platform_id: normalize_field(&self.platform_id),
      has_achievements: self.has_achievements,
    }
  }

  /// True when no field survives normalization.
  pub fn is_empty(&self) -> bool {
    let normalized = self.normalized();
    normalized.search.is_none()
      && normalized.platform_id.is_none()
      && normalized.has_achievements.is_none()
  }
}

/// Filter input for the achievements collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementFilter {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub achievement_set_id: Option<String>,
}

impl AchievementFilter {
  pub fn normalized(&self) -> AchievementFilter {
    AchievementFilter {
      achievement_set_id: normalize_field(&self.achievement_set_id),
    }
  }
}

/// Empty strings carry no filtering intent; treat them as absent.
pub(crate) fn normalize_field(value: &Option<String>) -> Option<String> {
  match value {
    Some(text) if !text.is_empty() => Some(text.clone()),
    _ => None,
  }
}

/// Sort orders accepted by the games collection, named as on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameOrder {
  #[default]
  TitleAsc,
  TitleDesc,
  CreatedAtDesc,
  CreatedAtAsc,
  AchievementCountDesc,
  TrophyCountDesc,
}

impl GameOrder {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::TitleAsc => "TITLE_ASC",
      Self::TitleDesc => "TITLE_DESC",
      Self::CreatedAtDesc => "CREATED_AT_DESC",
      Self::CreatedAtAsc => "CREATED_AT_ASC",
      Self::AchievementCountDesc => "ACHIEVEMENT_COUNT_DESC",
      Self::TrophyCountDesc => "TROPHY_COUNT_DESC",
    }
  }
}

impl fmt::Display for GameOrder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for GameOrder {
  type Err = String;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value.trim().to_uppercase().replace('-', "_").as_str() {
      "TITLE_ASC" => Ok(Self::TitleAsc),
      "TITLE_DESC" => Ok(Self::TitleDesc),
      "CREATED_AT_DESC" => Ok(Self::CreatedAtDesc),
      "CREATED_AT_ASC" => Ok(Self::CreatedAtAsc),
      "ACHIEVEMENT_COUNT_DESC" => Ok(Self::AchievementCountDesc),
      "TROPHY_COUNT_DESC" => Ok(Self::TrophyCountDesc),
      other => Err(format!("unknown game sort order '{other}'")),
    }
  }
}

/// Sort orders accepted by the achievements collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementOrder {
  #[default]
  TitleAsc,
  TitleDesc,
  CreatedAtDesc,
  CreatedAtAsc,
}

impl AchievementOrder {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::TitleAsc => "TITLE_ASC",
      Self::TitleDesc => "TITLE_DESC",
      Self::CreatedAtDesc => "CREATED_AT_DESC",
      Self::CreatedAtAsc => "CREATED_AT_ASC",
    }
  }
}

impl fmt::Display for AchievementOrder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
