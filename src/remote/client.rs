//! HTTP client for the spreadsheet web app

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use thiserror::Error;

use super::BookmarkStore;
use crate::entries::Entry;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },
}

/// Mutating command posted to the web app. The script dispatches on the
/// `action` field; a read is a plain GET with no body.
#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
enum SheetCommand<'a> {
    Append {
        #[serde(flatten)]
        entry: &'a Entry,
    },
    UpdateBookmark {
        date: &'a str,
        sentence: &'a str,
        bookmark: bool,
    },
}

/// Client for the Apps Script web app backing the sentence sheet.
pub struct SheetClient {
    client: Client,
    web_app_url: String,
}

impl SheetClient {
    pub fn new(web_app_url: &str, timeout_secs: u64) -> Result<Self, RemoteError> {
        if !web_app_url.starts_with("http://") && !web_app_url.starts_with("https://") {
            return Err(RemoteError::InvalidUrl(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            web_app_url: web_app_url.to_string(),
        })
    }

    /// Bulk-read the whole sheet as a JSON array of entries.
    pub fn fetch_entries(&self) -> Result<Vec<Entry>, RemoteError> {
        let response = self.client.get(&self.web_app_url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Server {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        Ok(response.json()?)
    }

    /// Append a new row to the sheet.
    pub fn add_entry(&self, entry: &Entry) -> Result<(), RemoteError> {
        self.post_command(&SheetCommand::Append { entry })
    }

    fn post_command(&self, command: &SheetCommand) -> Result<(), RemoteError> {
        let response = self.client.post(&self.web_app_url).json(command).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Server {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        Ok(())
    }
}

impl BookmarkStore for SheetClient {
    fn set_bookmark(&self, date: &str, sentence: &str, bookmark: bool) -> Result<(), RemoteError> {
        self.post_command(&SheetCommand::UpdateBookmark {
            date,
            sentence,
            bookmark,
        })
    }
}
