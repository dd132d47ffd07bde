//! Serde-deserializable domain types matching the tracker API's fragments.
//!
//! These mirror the fields the list views actually select, so a connection
//! payload deserializes straight into them without an intermediate layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Abbreviated game reference embedded inside other nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRef {
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub cover_url: Option<String>,
}

/// Game fields selected by the library and admin list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub cover_url: Option<String>,
  pub achievement_count: u32,
  pub trophy_count: u32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Achievement fields selected by the admin achievement list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementSummary {
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub icon_url: Option<String>,
  pub game_id: String,
  /// Completion state for the viewing user; false when signed out.
  #[serde(default)]
  pub is_completed: bool,
  #[serde(default)]
  pub user_count: u32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub game: GameRef,
}

/// Abbreviated achievement reference embedded in earned-achievement nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRef {
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub icon_url: Option<String>,
  pub game: GameRef,
}

/// User fields selected by the user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
  pub id: String,
  pub email: String,
  #[serde(default)]
  pub name: Option<String>,
  pub achievement_count: u32,
  pub trophy_count: u32,
  /// Only selected by the admin directory, absent elsewhere.
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
}

/// One achievement the viewer has completed (`myAchievements` node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedAchievement {
  pub id: String,
  pub created_at: DateTime<Utc>,
  pub achievement: AchievementRef,
}

/// One trophy the viewer has earned (`myTrophies` node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrophyAward {
  pub id: String,
  pub created_at: DateTime<Utc>,
  pub game: GameRef,
}
