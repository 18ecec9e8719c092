//! Import/export of entries with their meanings
//!
//! Two external shapes share the field names
//! `id, headword, variation, part_of_speech, notes, meanings`:
//! - tabular (CSV): `meanings` is one cell joined with [`MEANING_SEPARATOR`]
//! - structured (JSON): `meanings` is a list of strings
//!
//! Exported ids are informational; import always assigns fresh ids.

mod structured;
mod tabular;

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::db::Lexicon;
use crate::entry::{EntryDraft, EntryRecord};
use crate::error::{LexisError, Result};

pub use structured::{read_json, write_json};
pub use tabular::{read_csv, write_csv, CSV_HEADER};

/// Separator between meanings in a tabular `meanings` cell
pub const MEANING_SEPARATOR: &str = ";;";

/// Join meanings into one tabular cell
pub fn join_meanings(meanings: &[String]) -> String {
    meanings.join(MEANING_SEPARATOR)
}

/// Split a tabular cell back into trimmed, non-blank meanings
pub fn split_meanings(cell: &str) -> Vec<String> {
    cell.split(MEANING_SEPARATOR)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry in external form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headword: String,
    #[serde(default)]
    pub variation: Option<String>,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meanings: Vec<String>,
}

impl From<EntryRecord> for TransferRecord {
    fn from(record: EntryRecord) -> Self {
        TransferRecord {
            id: Some(record.entry.id),
            headword: record.entry.headword,
            variation: record.entry.variation,
            part_of_speech: record.entry.part_of_speech,
            notes: record.entry.notes,
            meanings: record.meanings,
        }
    }
}

impl From<&TransferRecord> for EntryDraft {
    fn from(record: &TransferRecord) -> Self {
        EntryDraft {
            headword: record.headword.clone(),
            variation: record.variation.clone(),
            part_of_speech: record.part_of_speech.clone(),
            notes: record.notes.clone(),
            meanings: record.meanings.clone(),
        }
    }
}

/// Outcome of an import
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub senses: usize,
    /// Records with a blank headword or no meanings
    pub skipped: usize,
}

/// External file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferFormat {
    Csv,
    Json,
}

impl TransferFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for TransferFormat {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(TransferFormat::Csv),
            "json" => Ok(TransferFormat::Json),
            other => Err(LexisError::invalid_argument("transfer format", other)),
        }
    }
}

impl fmt::Display for TransferFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferFormat::Csv => write!(f, "csv"),
            TransferFormat::Json => write!(f, "json"),
        }
    }
}

/// Write every entry of `lexicon` to `path`; returns the number of records
#[tracing::instrument(skip(lexicon, path), fields(path = %path.display()))]
pub fn export_file(lexicon: &Lexicon, format: TransferFormat, path: &Path) -> Result<usize> {
    let records = lexicon.export_records()?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match format {
        TransferFormat::Csv => write_csv(&records, &mut writer)?,
        TransferFormat::Json => write_json(&records, &mut writer)?,
    }
    writer.flush()?;

    tracing::debug!(records = records.len(), "export written");
    Ok(records.len())
}

/// Parse `path` completely, then import it in one transaction
#[tracing::instrument(skip(lexicon, path), fields(path = %path.display()))]
pub fn import_file(
    lexicon: &mut Lexicon,
    format: TransferFormat,
    path: &Path,
) -> Result<ImportReport> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let records = match format {
        TransferFormat::Csv => read_csv(reader)?,
        TransferFormat::Json => read_json(reader)?,
    };

    lexicon.import_records(&records)
}

#[cfg(test)]
mod tests;
