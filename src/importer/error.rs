//! Structural failures that abort a CSV import.

use thiserror::Error;

/// The only three ways an import can fail outright. Everything else is
/// tolerated row by row. The display strings are shown verbatim to the
/// person importing, so their wording is part of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
  /// Tokenizing produced no rows at all.
  #[error("CSV file is empty.")]
  EmptyInput,
  /// The header row has no `title` column, so no row could ever be valid.
  #[error("CSV must include a 'title' column.")]
  MissingTitleColumn,
  /// Every data row was dropped for lacking a usable title.
  #[error("No valid rows found in CSV.")]
  NoValidRows,
}
