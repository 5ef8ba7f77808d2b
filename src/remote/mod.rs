//! Remote spreadsheet persistence
//!
//! All entries live in a Google-Sheets-style store fronted by an Apps
//! Script web app. The client here does bulk reads, appends, and bookmark
//! updates against that endpoint.

pub mod client;

pub use client::{RemoteError, SheetClient};

/// The persistence seam the study session toggles bookmarks through.
///
/// Keyed by (raw date source, sentence text): the sheet has no id column,
/// so that pair is the natural key for locating a row.
pub trait BookmarkStore {
    fn set_bookmark(&self, date: &str, sentence: &str, bookmark: bool) -> Result<(), RemoteError>;
}
