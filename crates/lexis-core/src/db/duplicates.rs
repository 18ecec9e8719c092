//! Duplicate headword detection and consolidation
//!
//! Headwords are duplicates when they are equal after trimming and
//! lowercasing. In every group the entry with the lowest id is the master:
//! its headword casing, variation, part of speech and notes survive.

use std::collections::BTreeMap;

use rusqlite::params;
use serde::Serialize;

use super::entries::delete_entry_rows;
use crate::entry::normalize_headword;
use crate::error::{LexisError, Result};

/// Entries sharing one normalized headword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub normalized_headword: String,
    pub count: usize,
    /// Ascending; the first id is the master
    pub member_ids: Vec<i64>,
}

impl DuplicateGroup {
    pub fn master_id(&self) -> i64 {
        self.member_ids[0]
    }

    pub fn non_master_ids(&self) -> &[i64] {
        &self.member_ids[1..]
    }
}

/// Outcome of a merge or delete-duplicates pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DedupReport {
    pub groups: usize,
    pub entries_removed: usize,
    /// Senses moved onto a master (merge only)
    pub senses_reassigned: usize,
    /// Senses removed with their entry (delete only)
    pub senses_discarded: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Consolidation {
    Merge,
    Delete,
}

impl Consolidation {
    fn label(&self) -> &'static str {
        match self {
            Consolidation::Merge => "merge duplicates",
            Consolidation::Delete => "delete duplicates",
        }
    }
}

impl super::Lexicon {
    /// Every normalized headword held by more than one entry.
    ///
    /// Groups are ordered by normalized headword. Blank headwords never group.
    pub fn find_duplicate_groups(&self) -> Result<Vec<DuplicateGroup>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, headword FROM Entry ORDER BY id")
            .map_err(|e| LexisError::db_operation("prepare duplicate scan", e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                ))
            })
            .map_err(|e| LexisError::db_operation("scan headwords", e))?;

        let mut by_headword: BTreeMap<String, Vec<i64>> = BTreeMap::new();
        for row in rows {
            let (id, headword) = row.map_err(|e| LexisError::db_operation("read headword", e))?;
            let normalized = normalize_headword(&headword);
            if normalized.is_empty() {
                continue;
            }
            by_headword.entry(normalized).or_default().push(id);
        }

        Ok(by_headword
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(normalized_headword, member_ids)| DuplicateGroup {
                normalized_headword,
                count: member_ids.len(),
                member_ids,
            })
            .collect())
    }

    /// Fold every duplicate group into its master.
    ///
    /// Senses of non-master members are re-owned by the master (none are
    /// dropped or deduplicated), then the emptied entries are deleted.
    #[tracing::instrument(skip(self))]
    pub fn merge_duplicates(&mut self) -> Result<DedupReport> {
        self.consolidate(Consolidation::Merge)
    }

    /// Keep only the master of every duplicate group; other members are
    /// deleted together with their senses.
    #[tracing::instrument(skip(self))]
    pub fn delete_duplicates(&mut self) -> Result<DedupReport> {
        self.consolidate(Consolidation::Delete)
    }

    /// Each group commits on its own: a failure leaves already processed
    /// groups committed and the failing group untouched.
    fn consolidate(&mut self, mode: Consolidation) -> Result<DedupReport> {
        let groups = self.find_duplicate_groups()?;
        let mut report = DedupReport::default();

        for group in &groups {
            let tx = self
                .conn
                .transaction()
                .map_err(|e| LexisError::transaction(mode.label(), e))?;
            let master_id = group.master_id();

            for &duplicate_id in group.non_master_ids() {
                match mode {
                    Consolidation::Merge => {
                        let moved = tx
                            .execute(
                                "UPDATE Senses SET entry_id = ?1 WHERE entry_id = ?2",
                                params![master_id, duplicate_id],
                            )
                            .map_err(|e| {
                                LexisError::db_operation(
                                    &format!(
                                        "move senses of entry {} to {}",
                                        duplicate_id, master_id
                                    ),
                                    e,
                                )
                            })?;
                        tx.execute("DELETE FROM Entry WHERE id = ?1", params![duplicate_id])
                            .map_err(|e| {
                                LexisError::db_operation(
                                    &format!("delete entry {}", duplicate_id),
                                    e,
                                )
                            })?;
                        report.senses_reassigned += moved;
                    }
                    Consolidation::Delete => {
                        let (senses, _) = delete_entry_rows(&tx, duplicate_id)?;
                        report.senses_discarded += senses;
                    }
                }
                report.entries_removed += 1;
            }

            tx.commit()
                .map_err(|e| LexisError::transaction(mode.label(), e))?;
            report.groups += 1;

            tracing::debug!(
                headword = %group.normalized_headword,
                master_id,
                removed = group.non_master_ids().len(),
                "duplicate group consolidated"
            );
        }

        tracing::info!(
            groups = report.groups,
            entries_removed = report.entries_removed,
            "{} complete",
            mode.label()
        );
        Ok(report)
    }
}
