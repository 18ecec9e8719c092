//! CSV form: one row per entry, meanings joined in a single cell

use std::io::{Read, Write};

use serde::Deserialize;

use super::{join_meanings, split_meanings, TransferRecord};
use crate::error::{LexisError, Result};

pub const CSV_HEADER: [&str; 6] = [
    "id",
    "headword",
    "variation",
    "part_of_speech",
    "notes",
    "meanings",
];

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    headword: String,
    #[serde(default)]
    variation: Option<String>,
    #[serde(default)]
    part_of_speech: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    meanings: String,
}

impl From<CsvRow> for TransferRecord {
    fn from(row: CsvRow) -> Self {
        TransferRecord {
            id: row.id.and_then(|id| id.trim().parse().ok()),
            headword: row.headword,
            variation: row.variation,
            part_of_speech: row.part_of_speech,
            notes: row.notes,
            meanings: split_meanings(&row.meanings),
        }
    }
}

/// Write a header row and one row per record; NULL fields become empty cells
pub fn write_csv<W: Write>(records: &[TransferRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for record in records {
        wtr.write_record([
            record.id.map(|id| id.to_string()).unwrap_or_default().as_str(),
            record.headword.as_str(),
            record.variation.as_deref().unwrap_or_default(),
            record.part_of_speech.as_deref().unwrap_or_default(),
            record.notes.as_deref().unwrap_or_default(),
            join_meanings(&record.meanings).as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Read rows by header name; absent columns read as empty
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<TransferRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| LexisError::format("csv", e))?
        .clone();
    if !headers.iter().any(|h| h == "headword") {
        return Err(LexisError::format("csv", "missing 'headword' column"));
    }

    let mut records = Vec::new();
    for (index, row) in rdr.deserialize::<CsvRow>().enumerate() {
        // header is line 1
        let row = row.map_err(|e| LexisError::format("csv", format!("line {}: {}", index + 2, e)))?;
        records.push(TransferRecord::from(row));
    }

    Ok(records)
}
