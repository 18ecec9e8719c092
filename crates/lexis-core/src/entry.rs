//! Lexical entry model
//!
//! An [`Entry`] is one headword with optional variation, part of speech and
//! notes. Each entry owns one or more [`Sense`] rows holding its meanings.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::transfer::MEANING_SEPARATOR;

/// One headword record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub headword: String,
    pub variation: Option<String>,
    pub part_of_speech: Option<String>,
    pub notes: Option<String>,
}

/// One meaning belonging to exactly one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub id: i64,
    pub entry_id: i64,
    pub meaning: String,
}

/// An entry together with its meanings in sense-id order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    #[serde(flatten)]
    pub entry: Entry,
    pub meanings: Vec<String>,
}

/// Caller-supplied fields for creating or replacing an entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub headword: String,
    pub variation: Option<String>,
    pub part_of_speech: Option<String>,
    pub notes: Option<String>,
    pub meanings: Vec<String>,
}

impl EntryDraft {
    pub fn new<I, S>(headword: impl Into<String>, meanings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headword: headword.into(),
            meanings: meanings.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_variation(mut self, variation: impl Into<String>) -> Self {
        self.variation = Some(variation.into());
        self
    }

    pub fn with_part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = Some(pos.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Trimmed, non-blank meanings in the order given
    pub fn clean_meanings(&self) -> Vec<String> {
        self.meanings
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Check the draft and return the meanings that will be stored.
    ///
    /// Rejects a blank headword and a meaning list with nothing but blanks.
    /// A meaning may not contain the tabular meaning separator, since it
    /// would come back as two senses after a CSV export and import.
    pub fn validate(&self) -> Result<Vec<String>> {
        if self.headword.trim().is_empty() {
            crate::bail_validation!("headword is required");
        }
        let meanings = self.clean_meanings();
        if meanings.is_empty() {
            crate::bail_validation!(format!(
                "at least one meaning is required for '{}'",
                self.headword.trim()
            ));
        }
        if let Some(bad) = meanings.iter().find(|m| m.contains(MEANING_SEPARATOR)) {
            crate::bail_validation!(format!(
                "meaning '{}' may not contain '{}'",
                bad, MEANING_SEPARATOR
            ));
        }
        Ok(meanings)
    }
}

/// Blank optional fields are stored as NULL
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Normalized form of a headword used for duplicate grouping
pub fn normalize_headword(headword: &str) -> String {
    headword.trim().to_lowercase()
}
