//! Payload shapes for the bulk achievement-creation mutation.

use serde::{Deserialize, Serialize};

use crate::importer::{AchievementRecord, ImportBatch};

/// Variables for the bulk-create mutation, serialized exactly as the
/// admin import dialog submits them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateRequest {
  pub achievement_set_id: String,
  pub achievements: Vec<AchievementRecord>,
}

impl BulkCreateRequest {
  pub fn new(achievement_set_id: impl Into<String>, batch: ImportBatch) -> Self {
    Self {
      achievement_set_id: achievement_set_id.into(),
      achievements: batch.into_records(),
    }
  }
}

/// Structured error payload carried by write mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
  pub code: String,
  pub message: String,
  #[serde(default)]
  pub field: Option<String>,
}

/// Outcome of the bulk-create mutation. Duplicate titles within the target
/// set are skipped server-side rather than rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateResult {
  pub success: bool,
  #[serde(default)]
  pub created_count: u32,
  #[serde(default)]
  pub skipped_count: u32,
  #[serde(default)]
  pub error: Option<ApiError>,
}

impl BulkCreateResult {
  /// One-line outcome message in the product's wording.
  pub fn summary(&self) -> String {
    if self.success {
      format!(
        "Imported {} achievements, skipped {}.",
        self.created_count, self.skipped_count
      )
    } else {
      match &self.error {
        Some(error) => error.message.clone(),
        None => "Import failed.".to_string(),
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_request_serializes_with_wire_field_names() {
    let batch = ImportBatch::parse("title,points\nFirst Blood,10").unwrap();
    let request = BulkCreateRequest::new("set-1", batch);

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "achievementSetId": "set-1",
        "achievements": [
          {
            "title": "First Blood",
            "description": null,
            "points": 10,
            "iconUrl": null
          }
        ]
      })
    );
  }

  #[test]
  fn test_result_summary_wording() {
    let ok = BulkCreateResult {
      success: true,
      created_count: 4,
      skipped_count: 1,
      error: None,
    };
    assert_eq!(ok.summary(), "Imported 4 achievements, skipped 1.");

    let failed: BulkCreateResult = serde_json::from_str(
      r#"{
        "success": false,
        "createdCount": 0,
        "skippedCount": 0,
        "error": { "code": "NOT_FOUND", "message": "Achievement set not found.", "field": "achievementSetId" }
      }"#,
    )
    .unwrap();
    assert_eq!(failed.summary(), "Achievement set not found.");

    let bare = BulkCreateResult {
      success: false,
      created_count: 0,
      skipped_count: 0,
      error: None,
    };
    assert_eq!(bare.summary(), "Import failed.");
  }
}
