//! Client-side data core for the Questlog achievement tracker.
//!
//! Two subsystems carry the weight here. The list cache ([`cache`] and
//! [`query`]) assembles cursor-paginated collection responses into
//! continuous lists keyed by what was asked for, so filter changes,
//! refreshes, and load-more all resolve to the right list. The importer
//! ([`importer`]) turns messy spreadsheet exports into achievement records
//! for bulk creation, salvaging whatever rows it can. [`api`] holds the
//! wire vocabulary both sides share.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod importer;
pub mod logging;
pub mod query;

pub use cache::{CacheError, CachedList, CollectionKey, ListSignature, PagedListCache};
pub use importer::{AchievementRecord, ImportBatch, ParseError};
pub use query::{ListQuery, PageRequest, DEFAULT_PAGE_SIZE};
