
use crate::db::Lexicon;
use crate::entry::EntryDraft;

/// In-memory lexicon seeded with `(headword, meanings)` pairs; ids follow order
pub(super) fn lexicon_with(entries: &[(&str, &[&str])]) -> Lexicon {
    let mut lexicon = Lexicon::open_in_memory().unwrap();
    for (headword, meanings) in entries {
        lexicon
            .create_entry(&EntryDraft::new(*headword, meanings.iter().copied()))
            .unwrap();
    }
    lexicon
}

/// Senses whose owner is gone; must always be zero
pub(super) fn assert_no_orphans(lexicon: &Lexicon) {
    assert_eq!(lexicon.count_orphaned_senses().unwrap(), 0);
}
