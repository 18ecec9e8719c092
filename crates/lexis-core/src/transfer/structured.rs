//! JSON form: an array of objects with `meanings` as a list

use std::io::{Read, Write};

use super::TransferRecord;
use crate::error::{LexisError, Result};

pub fn write_json<W: Write>(records: &[TransferRecord], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

pub fn read_json<R: Read>(reader: R) -> Result<Vec<TransferRecord>> {
    let mut records: Vec<TransferRecord> =
        serde_json::from_reader(reader).map_err(|e| LexisError::format("json", e))?;

    // Lists are consumed as-is apart from trimming; blank items drop out
    for record in &mut records {
        record.meanings = record
            .meanings
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();
    }

    Ok(records)
}
