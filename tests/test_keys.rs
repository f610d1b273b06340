//! Card key normalization tests.

use deck_diff::keys::{bare_key, front_face, is_double_faced, key_for};
use deck_diff::models::{CardEntry, CardKey};

// ---------------------------------------------------------------------------
// key_for
// ---------------------------------------------------------------------------

#[test]
fn key_for_plain_entry_is_bare_lowercase() {
    let entry = CardEntry::new("Lightning Bolt", 4);
    assert_eq!(key_for(&entry), CardKey::Bare("lightning bolt".to_string()));
}

#[test]
fn key_for_printed_entry_is_composite() {
    let entry = CardEntry::new("Sol Ring", 1).with_printing("LTC", "284");
    assert_eq!(
        key_for(&entry),
        CardKey::Composite("sol ring".to_string(), "284".to_string())
    );
    assert_eq!(entry.set_code.as_deref(), Some("ltc"));
}

#[test]
fn key_for_needs_both_set_and_number() {
    let mut entry = CardEntry::new("Sol Ring", 1);
    entry.collector_number = Some("284".to_string());
    assert_eq!(key_for(&entry), bare_key("Sol Ring"));

    let mut entry = CardEntry::new("Sol Ring", 1);
    entry.set_code = Some("ltc".to_string());
    assert_eq!(key_for(&entry), bare_key("Sol Ring"));
}

#[test]
fn key_for_ignores_quantity_and_foil() {
    let a = CardEntry::new("Sol Ring", 1).with_printing("ltc", "284");
    let b = CardEntry::new("SOL RING", 7)
        .with_printing("ltc", "284")
        .with_foil(true);
    assert_eq!(key_for(&a), key_for(&b));
}

#[test]
fn composite_key_renders_with_separator() {
    let key = CardKey::Composite("sol ring".to_string(), "284".to_string());
    assert_eq!(key.to_string(), "sol ring|284");
    assert_eq!(key.name(), "sol ring");
    assert_eq!(key.collector_number(), Some("284"));
    assert_eq!(key.to_bare(), bare_key("Sol Ring"));
}

#[test]
fn composite_key_with_separator_in_name_does_not_collide() {
    let tricky = CardKey::Bare("a|1".to_string());
    let composite = CardKey::Composite("a".to_string(), "1".to_string());
    assert_ne!(tricky, composite);
}

#[test]
fn keys_serialize_as_strings() {
    let key = CardKey::Composite("sol ring".to_string(), "284".to_string());
    assert_eq!(serde_json::to_string(&key).unwrap(), "\"sol ring|284\"");
}

// ---------------------------------------------------------------------------
// front_face
// ---------------------------------------------------------------------------

#[test]
fn front_face_splits_double_faced_names() {
    assert_eq!(front_face("Sheoldred // The True Scriptures"), "Sheoldred");
    assert!(is_double_faced("Sheoldred // The True Scriptures"));
}

#[test]
fn front_face_returns_single_names_unchanged() {
    assert_eq!(front_face("Sol Ring"), "Sol Ring");
    assert!(!is_double_faced("Sol Ring"));
}

#[test]
fn front_face_requires_spaced_separator() {
    assert_eq!(front_face("Fire//Ice"), "Fire//Ice");
}

#[test]
fn with_name_keeps_the_printing() {
    let key = CardKey::Composite("sheoldred // the true scriptures".to_string(), "100".to_string());
    assert_eq!(
        key.with_name("sheoldred"),
        CardKey::Composite("sheoldred".to_string(), "100".to_string())
    );
}
