use rusqlite::{params, Connection};

use crate::db::ids::IdAllocator;
use crate::entry::{non_blank, EntryDraft};
use crate::error::{LexisError, Result};

/// Insert one entry row plus one sense row per meaning on `conn`.
///
/// `meanings` must already be validated; the caller owns the transaction.
pub(crate) fn insert_entry_rows(
    conn: &Connection,
    ids: &mut IdAllocator,
    draft: &EntryDraft,
    meanings: &[String],
) -> Result<i64> {
    let entry_id = ids.next_entry();

    conn.execute(
        "INSERT INTO Entry (id, headword, variation, part_of_speech, notes) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            entry_id,
            &draft.headword,
            non_blank(draft.variation.as_deref()),
            non_blank(draft.part_of_speech.as_deref()),
            non_blank(draft.notes.as_deref()),
        ],
    )
    .map_err(|e| {
        LexisError::db_operation(&format!("insert entry '{}'", draft.headword), e)
    })?;

    insert_senses(conn, ids, entry_id, meanings)?;

    Ok(entry_id)
}

fn insert_senses(
    conn: &Connection,
    ids: &mut IdAllocator,
    entry_id: i64,
    meanings: &[String],
) -> Result<()> {
    let mut stmt = conn
        .prepare_cached("INSERT INTO Senses (id, entry_id, meaning) VALUES (?1, ?2, ?3)")
        .map_err(|e| LexisError::db_operation("prepare sense insert", e))?;

    for meaning in meanings {
        stmt.execute(params![ids.next_sense(), entry_id, meaning])
            .map_err(|e| {
                LexisError::db_operation(&format!("insert sense for entry {}", entry_id), e)
            })?;
    }

    Ok(())
}

/// Remove an entry's senses and then the entry itself.
///
/// Returns `(senses_removed, entries_removed)`.
pub(crate) fn delete_entry_rows(conn: &Connection, entry_id: i64) -> Result<(usize, usize)> {
    let senses = conn
        .execute("DELETE FROM Senses WHERE entry_id = ?1", params![entry_id])
        .map_err(|e| {
            LexisError::db_operation(&format!("delete senses of entry {}", entry_id), e)
        })?;
    let entries = conn
        .execute("DELETE FROM Entry WHERE id = ?1", params![entry_id])
        .map_err(|e| LexisError::db_operation(&format!("delete entry {}", entry_id), e))?;
    Ok((senses, entries))
}

impl crate::db::Lexicon {
    /// Create an entry with its senses in one transaction
    #[tracing::instrument(skip(self, draft), fields(headword = %draft.headword))]
    pub fn create_entry(&mut self, draft: &EntryDraft) -> Result<i64> {
        let meanings = draft.validate()?;

        let mut ids = self.ids;
        let tx = self
            .conn
            .transaction()
            .map_err(|e| LexisError::transaction("create entry", e))?;
        let entry_id = insert_entry_rows(&tx, &mut ids, draft, &meanings)?;
        tx.commit()
            .map_err(|e| LexisError::transaction("create entry", e))?;
        self.ids = ids;

        tracing::debug!(entry_id, senses = meanings.len(), "entry created");
        Ok(entry_id)
    }

    /// Replace an entry's fields and its whole sense set.
    ///
    /// Senses are deleted and reinserted, not diffed.
    #[tracing::instrument(skip(self, draft), fields(headword = %draft.headword))]
    pub fn update_entry(&mut self, id: i64, draft: &EntryDraft) -> Result<()> {
        let meanings = draft.validate()?;

        let mut ids = self.ids;
        let tx = self
            .conn
            .transaction()
            .map_err(|e| LexisError::transaction("update entry", e))?;

        let changed = tx
            .execute(
                "UPDATE Entry SET headword = ?1, variation = ?2, part_of_speech = ?3, notes = ?4 WHERE id = ?5",
                params![
                    &draft.headword,
                    non_blank(draft.variation.as_deref()),
                    non_blank(draft.part_of_speech.as_deref()),
                    non_blank(draft.notes.as_deref()),
                    id,
                ],
            )
            .map_err(|e| LexisError::db_operation(&format!("update entry {}", id), e))?;
        if changed == 0 {
            return Err(LexisError::not_found("entry", id));
        }

        tx.execute("DELETE FROM Senses WHERE entry_id = ?1", params![id])
            .map_err(|e| LexisError::db_operation(&format!("delete senses of entry {}", id), e))?;
        insert_senses(&tx, &mut ids, id, &meanings)?;

        tx.commit()
            .map_err(|e| LexisError::transaction("update entry", e))?;
        self.ids = ids;

        tracing::debug!(entry_id = id, senses = meanings.len(), "entry updated");
        Ok(())
    }

    /// Delete an entry and its senses (senses first) in one transaction.
    ///
    /// Returns the number of senses removed with the entry.
    #[tracing::instrument(skip(self))]
    pub fn delete_entry(&mut self, id: i64) -> Result<usize> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| LexisError::transaction("delete entry", e))?;

        let (senses, entries) = delete_entry_rows(&tx, id)?;
        if entries == 0 {
            // dropping the transaction rolls back any sense deletion
            return Err(LexisError::not_found("entry", id));
        }

        tx.commit()
            .map_err(|e| LexisError::transaction("delete entry", e))?;

        tracing::debug!(entry_id = id, senses, "entry deleted");
        Ok(senses)
    }
}
