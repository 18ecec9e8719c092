//! Confirmed, backed-up lexicon operations
//!
//! A [`Session`] pairs an open [`Lexicon`] with its configuration and a
//! [`Prompter`]. Destructive operations ask for confirmation, take a backup
//! and then report what happened through the injected prompter.

use std::cell::RefCell;
use std::path::Path;

use crate::backup::backup_lexicon;
use crate::config::LexiconConfig;
use crate::db::{DedupReport, DuplicateGroup, Lexicon};
use crate::entry::EntryDraft;
use crate::error::Result;
use crate::transfer::{export_file, import_file, ImportReport, TransferFormat};

/// Asks the user yes/no questions and shows them messages
pub trait Prompter {
    fn confirm(&self, question: &str) -> bool;
    fn notify(&self, message: &str);
}

/// Says yes to everything and remembers what it was told
#[derive(Debug, Default)]
pub struct AutoConfirm {
    messages: RefCell<Vec<String>>,
}

impl AutoConfirm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Prompter for AutoConfirm {
    fn confirm(&self, question: &str) -> bool {
        tracing::debug!(question, "auto-confirmed");
        true
    }

    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Result of a guarded operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Done(T),
    /// The prompter declined; nothing was changed
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn done(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }
}

/// Human-readable line for one duplicate group
pub fn describe_group(group: &DuplicateGroup) -> String {
    let ids = group
        .member_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Duplicate headword: {} (appears {} times) ids=[{}]",
        group.normalized_headword, group.count, ids
    )
}

pub struct Session<'a, P: Prompter> {
    lexicon: &'a mut Lexicon,
    config: &'a LexiconConfig,
    prompter: &'a P,
}

impl<'a, P: Prompter> Session<'a, P> {
    pub fn new(lexicon: &'a mut Lexicon, config: &'a LexiconConfig, prompter: &'a P) -> Self {
        Self {
            lexicon,
            config,
            prompter,
        }
    }

    fn backup(&self) {
        if !self.config.backup.enabled {
            return;
        }
        if let Some(path) = self.lexicon.path() {
            let dir = self.config.backup_dir_for(path);
            backup_lexicon(path, &dir);
        }
    }

    /// Create a new entry, or replace entry `id` when given
    pub fn save(&mut self, id: Option<i64>, draft: &EntryDraft) -> Result<i64> {
        let id = match id {
            Some(id) => {
                self.lexicon.update_entry(id, draft)?;
                id
            }
            None => self.lexicon.create_entry(draft)?,
        };
        self.prompter
            .notify(&format!("Saved '{}' (id {})", draft.headword.trim(), id));
        Ok(id)
    }

    pub fn delete_entry(&mut self, id: i64) -> Result<Outcome<usize>> {
        if !self
            .prompter
            .confirm(&format!("Delete entry {} and all of its meanings?", id))
        {
            return Ok(Outcome::Cancelled);
        }
        self.backup();
        let senses = self.lexicon.delete_entry(id)?;
        self.prompter
            .notify(&format!("Deleted entry {} ({} meanings)", id, senses));
        Ok(Outcome::Done(senses))
    }

    /// Report duplicate groups through the prompter and return them
    pub fn show_duplicates(&self) -> Result<Vec<DuplicateGroup>> {
        let groups = self.lexicon.find_duplicate_groups()?;
        if groups.is_empty() {
            self.prompter.notify("No duplicate headwords found.");
        }
        for group in &groups {
            self.prompter.notify(&describe_group(group));
        }
        Ok(groups)
    }

    pub fn merge_duplicates(&mut self) -> Result<Outcome<DedupReport>> {
        if !self.prompter.confirm(
            "Merge duplicate headwords? Meanings move to the oldest entry of each group.",
        ) {
            return Ok(Outcome::Cancelled);
        }
        self.backup();
        let report = self.lexicon.merge_duplicates()?;
        self.prompter.notify(&format!(
            "Merged {} duplicate group(s): {} entries removed, {} meanings moved",
            report.groups, report.entries_removed, report.senses_reassigned
        ));
        Ok(Outcome::Done(report))
    }

    pub fn delete_duplicates(&mut self) -> Result<Outcome<DedupReport>> {
        if !self.prompter.confirm(
            "Delete duplicate headwords? Only the oldest entry of each group is kept.",
        ) {
            return Ok(Outcome::Cancelled);
        }
        self.backup();
        let report = self.lexicon.delete_duplicates()?;
        self.prompter.notify(&format!(
            "Deleted {} duplicate entries in {} group(s), {} meanings discarded",
            report.entries_removed, report.groups, report.senses_discarded
        ));
        Ok(Outcome::Done(report))
    }

    pub fn export_csv(&self, path: &Path) -> Result<usize> {
        self.export(TransferFormat::Csv, path)
    }

    pub fn export_json(&self, path: &Path) -> Result<usize> {
        self.export(TransferFormat::Json, path)
    }

    fn export(&self, format: TransferFormat, path: &Path) -> Result<usize> {
        let count = export_file(self.lexicon, format, path)?;
        self.prompter.notify(&format!(
            "Exported {} entries to {}",
            count,
            path.display()
        ));
        Ok(count)
    }

    pub fn import_csv(&mut self, path: &Path) -> Result<Outcome<ImportReport>> {
        self.import(TransferFormat::Csv, path)
    }

    pub fn import_json(&mut self, path: &Path) -> Result<Outcome<ImportReport>> {
        self.import(TransferFormat::Json, path)
    }

    fn import(&mut self, format: TransferFormat, path: &Path) -> Result<Outcome<ImportReport>> {
        if self.config.import.confirm
            && !self.prompter.confirm(&format!(
                "Import {}? Existing entries are kept and duplicates may be created.",
                path.display()
            ))
        {
            return Ok(Outcome::Cancelled);
        }
        self.backup();
        let report = import_file(self.lexicon, format, path)?;
        let mut message = format!(
            "Imported {} entries ({} meanings) from {}",
            report.imported,
            report.senses,
            path.display()
        );
        if report.skipped > 0 {
            message.push_str(&format!(", skipped {}", report.skipped));
        }
        self.prompter.notify(&message);
        Ok(Outcome::Done(report))
    }
}
