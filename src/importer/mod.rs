//! Tolerant CSV ingestion for bulk achievement creation.
//!
//! Parsing runs in two stages. [`scan_rows`] tokenizes the raw text into
//! rows of cells and never fails; [`ImportBatch::parse`] then resolves the
//! header and maps each data row to an [`AchievementRecord`], dropping rows
//! it cannot use. The philosophy is to salvage as much of a messy
//! spreadsheet export as possible and reserve hard failure for files that
//! could never produce a record.

mod batch;
mod error;
mod rows;

pub use batch::{AchievementRecord, ImportBatch, RECOGNIZED_COLUMNS};
pub use error::ParseError;
pub use rows::scan_rows;
