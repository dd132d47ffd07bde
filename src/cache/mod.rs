//! Client-side cache for cursor-paginated collection lists.
//!
//! This module keeps the pieces the loaders build on:
//! - Derives a stable signature for each (collection, filter, sort) triple
//! - Assembles successive pages into one continuous list per signature
//! - Tracks each list's pagination frontier for load-more decisions
//! - Rejects continuation pages that have no base list to extend

mod pages;
mod signature;

pub use pages::{merge_page, CacheError, CachedList, PagedListCache};
pub use signature::{CollectionKey, ListSignature};
