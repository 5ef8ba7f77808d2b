//! Sentence entries and the derived views over them
//!
//! This module provides:
//! - The `Entry` model (the shape the spreadsheet web app speaks)
//! - Day-key normalization for heterogeneous spreadsheet dates
//! - Pure grouping/filter views (per day, all, bookmarked only)

pub mod datekey;
pub mod index;
pub mod models;

pub use datekey::normalize;
pub use index::{day_keys, distinct_day_count, has_entries_on_day, select, Selector};
pub use models::Entry;
