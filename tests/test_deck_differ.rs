//! DeckDiffer facade tests, including file-based comparison.

mod common;

use std::io::Write;
use std::sync::Arc;
use std::thread;

use deck_diff::{DeckDiffError, DeckDiffer};
use tempfile::NamedTempFile;

fn write_list(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn builder_defaults_to_minimal_contract() {
    let differ = DeckDiffer::builder().build();
    assert!(!differ.options().detect_printing_changes);
    assert_eq!(differ.to_string(), "DeckDiffer(detect_printing_changes=false)");
}

#[test]
fn builder_enables_printing_changes() {
    let differ = DeckDiffer::builder().detect_printing_changes(true).build();
    assert!(differ.options().detect_printing_changes);

    let diff = differ.compare("1 Sol Ring (ltc) [284]", "1 Sol Ring (fdn) [355]");
    assert_eq!(diff.mainboard.printing_changes.len(), 1);
    assert!(diff.mainboard.cards_in.is_empty());
}

// ---------------------------------------------------------------------------
// compare
// ---------------------------------------------------------------------------

#[test]
fn compare_texts() {
    let differ = DeckDiffer::default();
    let diff = differ.compare("1 Sol Ring", "3 Sol Ring");
    assert_eq!(diff.mainboard.quantity_changes[0].delta, 2);
}

#[test]
fn compare_plain_text_against_csv() {
    let differ = DeckDiffer::default();
    let diff = differ.compare(
        "4 Lightning Bolt (2X2) 117 *F*\n2 Counterspell",
        common::CSV_EXPORT,
    );
    assert_eq!(diff.mainboard.cards_in.len(), 1);
    assert_eq!(diff.mainboard.cards_in[0].name, "Sheoldred, the Apocalypse");
    assert_eq!(diff.mainboard.unchanged_count, 2);
}

#[test]
fn diff_accepts_parsed_lists() {
    let differ = DeckDiffer::default();
    let before = differ.parse(common::ARENA_COMMANDER);
    let after = differ.parse(common::ARENA_COMMANDER);
    let diff = differ.diff(&before, &after);
    assert!(diff.is_empty());
    assert_eq!(diff.commanders, vec!["Atraxa, Praetors' Voice".to_string()]);
}

// ---------------------------------------------------------------------------
// compare_files
// ---------------------------------------------------------------------------

#[test]
fn compare_files_reads_both_lists() {
    let before = write_list(common::ARENA_COMMANDER);
    let after = write_list("Commander\n1 Atraxa, Praetors' Voice\n\nDeck\n1 Sol Ring\n36 Forest\n");

    let diff = DeckDiffer::default()
        .compare_files(before.path(), after.path())
        .unwrap();

    assert_eq!(diff.mainboard.cards_out.len(), 1);
    assert_eq!(diff.mainboard.cards_out[0].name, "Arcane Signet");
    assert_eq!(diff.mainboard.quantity_changes[0].name, "Forest");
    assert_eq!(diff.mainboard.quantity_changes[0].delta, 1);
}

#[test]
fn compare_files_missing_file_is_io_error() {
    let before = write_list("1 Sol Ring");
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let result = DeckDiffer::default().compare_files(before.path(), &missing);
    assert!(matches!(result, Err(DeckDiffError::Io(_))));
    let err_msg = format!("{}", result.unwrap_err());
    assert!(err_msg.contains("IO error"));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn differ_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DeckDiffer>();

    let differ = Arc::new(DeckDiffer::default());
    let expected = differ.compare(common::PRINTED_LIST, common::CSV_EXPORT);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let differ = Arc::clone(&differ);
            thread::spawn(move || differ.compare(common::PRINTED_LIST, common::CSV_EXPORT))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
