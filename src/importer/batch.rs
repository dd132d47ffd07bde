//! Header resolution and row-to-record mapping.
//!
//! The first tokenized row names the columns; matching is case-insensitive
//! and ignores surrounding whitespace, and unrecognized columns are simply
//! skipped. Data rows are then judged individually: a row without a title
//! is dropped, every other defect degrades to a default. Only structural
//! problems reject the whole file, as [`ParseError`] enumerates.

use serde::Serialize;
use tracing::debug;

use super::error::ParseError;
use super::rows::scan_rows;

/// Column names the importer recognizes, lowercased.
pub const RECOGNIZED_COLUMNS: [&str; 4] = ["title", "description", "points", "iconurl"];

/// One achievement row ready for bulk creation. Serializes with the field
/// names the mutation input expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
  pub title: String,
  pub description: Option<String>,
  pub points: u32,
  pub icon_url: Option<String>,
}

/// The outcome of a successful parse: at least one record, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBatch {
  records: Vec<AchievementRecord>,
}

impl ImportBatch {
  /// Parses CSV text into a batch of achievement records.
  ///
  /// Fails only for the structural reasons in [`ParseError`]. Individual
  /// rows never fail: a row with a blank title is dropped, a missing or
  /// unparsable points cell becomes 0, and blank description or icon cells
  /// become `None`.
  pub fn parse(text: &str) -> Result<ImportBatch, ParseError> {
    let rows = scan_rows(text);
    if rows.is_empty() {
      return Err(ParseError::EmptyInput);
    }

    let header: Vec<String> = rows[0]
      .iter()
      .map(|cell| cell.trim().to_lowercase())
      .collect();
    let title_idx = find_column(&header, "title").ok_or(ParseError::MissingTitleColumn)?;
    let description_idx = find_column(&header, "description");
    let points_idx = find_column(&header, "points");
    let icon_idx = find_column(&header, "iconurl");

    let mut records = Vec::new();
    for row in rows.iter().skip(1) {
      let title = row.get(title_idx).map(|cell| cell.trim()).unwrap_or("");
      if title.is_empty() {
        continue;
      }

      let points = points_idx
        .and_then(|idx| row.get(idx))
        .and_then(|cell| cell.trim().parse::<u32>().ok())
        .unwrap_or(0);

      records.push(AchievementRecord {
        title: title.to_string(),
        description: optional_cell(row, description_idx),
        points,
        icon_url: optional_cell(row, icon_idx),
      });
    }

    if records.is_empty() {
      return Err(ParseError::NoValidRows);
    }

    debug!(
      rows = rows.len() - 1,
      records = records.len(),
      "parsed import batch"
    );
    Ok(ImportBatch { records })
  }

  pub fn records(&self) -> &[AchievementRecord] {
    &self.records
  }

  pub fn into_records(self) -> Vec<AchievementRecord> {
    self.records
  }

  /// Number of records in the batch; always at least 1.
  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }
}

impl IntoIterator for ImportBatch {
  type Item = AchievementRecord;
  type IntoIter = std::vec::IntoIter<AchievementRecord>;

  fn into_iter(self) -> Self::IntoIter {
    self.records.into_iter()
  }
}

/// First matching column wins when a header repeats.
fn find_column(header: &[String], name: &str) -> Option<usize> {
  header.iter().position(|column| column == name)
}

/// Trimmed cell content, with blank or missing cells collapsed to `None`.
fn optional_cell(row: &[String], idx: Option<usize>) -> Option<String> {
  let value = row.get(idx?)?.trim();
  if value.is_empty() {
    None
  } else {
    Some(value.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(
    title: &str,
    description: Option<&str>,
    points: u32,
    icon_url: Option<&str>,
  ) -> AchievementRecord {
    AchievementRecord {
      title: title.to_string(),
      description: description.map(str::to_string),
      points,
      icon_url: icon_url.map(str::to_string),
    }
  }

  #[test]
  fn test_empty_input_is_rejected() {
    assert_eq!(ImportBatch::parse(""), Err(ParseError::EmptyInput));
    assert_eq!(ImportBatch::parse("\n\n"), Err(ParseError::EmptyInput));
  }

  #[test]
  fn test_missing_title_column_is_rejected() {
    assert_eq!(
      ImportBatch::parse("description,points\nSome text,5"),
      Err(ParseError::MissingTitleColumn)
    );
  }

  #[test]
  fn test_rows_without_titles_are_dropped() {
    let batch = ImportBatch::parse("title,points\nFirst,10\n,5\n  ,3").unwrap();
    assert_eq!(batch.records(), &[record("First", None, 10, None)]);
  }

  #[test]
  fn test_all_rows_dropped_is_rejected() {
    assert_eq!(
      ImportBatch::parse("title,points\n,5\n  ,3"),
      Err(ParseError::NoValidRows)
    );
  }

  #[test]
  fn test_header_only_is_rejected() {
    assert_eq!(
      ImportBatch::parse("title,points\n"),
      Err(ParseError::NoValidRows)
    );
  }

  #[test]
  fn test_header_matching_ignores_case_and_whitespace() {
    let batch = ImportBatch::parse(
      " Title , DESCRIPTION , Points , IconUrl \nFirst,Do a thing,5,https://x/i.png",
    )
    .unwrap();
    assert_eq!(
      batch.records(),
      &[record("First", Some("Do a thing"), 5, Some("https://x/i.png"))]
    );
  }

  #[test]
  fn test_column_order_is_irrelevant_and_extras_are_ignored() {
    let batch =
      ImportBatch::parse("points,unlocked,title,notes\n10,yes,First,ignore me").unwrap();
    assert_eq!(batch.records(), &[record("First", None, 10, None)]);
  }

  #[test]
  fn test_title_only_file_parses() {
    let batch = ImportBatch::parse("title\n\n\nSolo").unwrap();
    assert_eq!(batch.records(), &[record("Solo", None, 0, None)]);
  }

  #[test]
  fn test_quoted_cells_and_embedded_newlines() {
    let batch = ImportBatch::parse(
      "title,description\n\"Hello, World\",\"A \"\"quoted\"\" phrase\"\n\"Multi\nline\",plain",
    )
    .unwrap();
    assert_eq!(
      batch.records(),
      &[
        record("Hello, World", Some("A \"quoted\" phrase"), 0, None),
        record("Multi\nline", Some("plain"), 0, None),
      ]
    );
  }

  #[test]
  fn test_unparsable_points_become_zero() {
    let batch = ImportBatch::parse("title,points\nOnly,notanumber").unwrap();
    assert_eq!(batch.records()[0].points, 0);

    let batch = ImportBatch::parse("title,points\nNegative,-5\nHuge,99999999999").unwrap();
    assert_eq!(batch.records()[0].points, 0);
    assert_eq!(batch.records()[1].points, 0);
  }

  #[test]
  fn test_points_are_trimmed_before_parsing() {
    let batch = ImportBatch::parse("title,points\nPadded,  7  ").unwrap();
    assert_eq!(batch.records()[0].points, 7);
  }

  #[test]
  fn test_short_rows_fall_back_to_defaults() {
    let batch = ImportBatch::parse("title,description,points\nBare").unwrap();
    assert_eq!(batch.records(), &[record("Bare", None, 0, None)]);
  }

  #[test]
  fn test_blank_optional_cells_become_none() {
    let batch = ImportBatch::parse("title,description,iconurl\nFirst,  ,  ").unwrap();
    assert_eq!(batch.records(), &[record("First", None, 0, None)]);
  }

  #[test]
  fn test_values_are_trimmed() {
    let batch =
      ImportBatch::parse("title,description\n  Spaced Out  ,  a description  ").unwrap();
    assert_eq!(
      batch.records(),
      &[record("Spaced Out", Some("a description"), 0, None)]
    );
  }

  #[test]
  fn test_duplicate_columns_first_occurrence_wins() {
    let batch = ImportBatch::parse("title,points,points\nFirst,3,9").unwrap();
    assert_eq!(batch.records()[0].points, 3);
  }

  #[test]
  fn test_file_order_is_preserved() {
    let batch = ImportBatch::parse("title\nAlpha\nBeta\nGamma").unwrap();
    assert_eq!(batch.len(), 3);
    assert!(!batch.is_empty());

    let titles: Vec<String> = batch.into_iter().map(|record| record.title).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
  }
}
