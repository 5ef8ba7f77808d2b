//! Data model for recorded sentences

use serde::{Deserialize, Serialize};

/// One recorded sentence/meaning pair, date-tagged by the spreadsheet.
///
/// Entries have no id column; within a loaded collection identity is
/// positional, and the (date source, sentence) pair acts as the natural key
/// when pushing a bookmark change back to the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Raw date cell as the sheet returns it. May be empty, an ISO-8601
    /// timestamp, a `YYYY-MM-DD` prefix, or whatever the sheet produced.
    pub date: String,
    pub sentence: String,
    pub meaning: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hint: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reference_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Entry {
    pub fn new(date: String, sentence: String, meaning: String) -> Self {
        Self {
            date,
            sentence,
            meaning,
            hint: String::new(),
            reference_url: String::new(),
            bookmark: None,
            created_at: None,
        }
    }

    /// An absent bookmark column reads as not bookmarked.
    pub fn is_bookmarked(&self) -> bool {
        self.bookmark.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_defaults_to_false() {
        let entry = Entry::new("2024-05-01".into(), "A".into(), "a".into());
        assert!(!entry.is_bookmarked());
    }

    #[test]
    fn test_deserialize_sparse_row() {
        // Sheets rows frequently omit the optional columns entirely
        let entry: Entry = serde_json::from_str(
            r#"{"date":"2024-05-01","sentence":"Break a leg.","meaning":"행운을 빌어"}"#,
        )
        .unwrap();
        assert_eq!(entry.hint, "");
        assert_eq!(entry.reference_url, "");
        assert_eq!(entry.bookmark, None);
        assert!(!entry.is_bookmarked());
    }

    #[test]
    fn test_serialize_skips_empty_optionals() {
        let entry = Entry::new("2024-05-01".into(), "A".into(), "a".into());
        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("hint"));
        assert!(!object.contains_key("referenceUrl"));
        assert!(!object.contains_key("bookmark"));
        assert!(!object.contains_key("createdAt"));
    }
}
