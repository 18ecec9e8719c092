use crate::entry::EntryDraft;
use crate::error::{LexisError, Result};
use crate::transfer::{ImportReport, TransferRecord};

use super::entries::insert_entry_rows;

impl super::Lexicon {
    /// Flat export view of every entry, ordered by id
    pub fn export_records(&self) -> Result<Vec<TransferRecord>> {
        Ok(self
            .list_entries()?
            .into_iter()
            .map(TransferRecord::from)
            .collect())
    }

    /// Insert `records` as new entries in a single transaction.
    ///
    /// Incoming ids are ignored. Records without a headword or without any
    /// non-blank meaning are skipped and counted. No deduplication happens:
    /// importing the same records twice stores them twice.
    #[tracing::instrument(skip(self, records), fields(records = records.len()))]
    pub fn import_records(&mut self, records: &[TransferRecord]) -> Result<ImportReport> {
        let mut report = ImportReport::default();
        let mut ids = self.ids;

        let tx = self
            .conn
            .transaction()
            .map_err(|e| LexisError::transaction("import", e))?;

        for (index, record) in records.iter().enumerate() {
            let draft = EntryDraft::from(record);
            let meanings = match draft.validate() {
                Ok(meanings) => meanings,
                Err(e) => {
                    tracing::warn!(record = index + 1, reason = %e, "skipping import record");
                    report.skipped += 1;
                    continue;
                }
            };

            insert_entry_rows(&tx, &mut ids, &draft, &meanings)?;
            report.imported += 1;
            report.senses += meanings.len();
        }

        tx.commit()
            .map_err(|e| LexisError::transaction("import", e))?;
        self.ids = ids;

        tracing::info!(
            imported = report.imported,
            skipped = report.skipped,
            "import complete"
        );
        Ok(report)
    }
}
