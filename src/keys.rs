//! Card key normalization shared by the parser, the differ, and any external
//! lookup that needs to address cards the same way.
//!
//! Every function here is pure: no state, no I/O.

use crate::config::DFC_SEPARATOR;
use crate::models::{CardEntry, CardKey};

/// Compute the section key for an entry.
///
/// Composite (`name` + collector number) when both set code and collector
/// number are present, bare lowercased name otherwise.
pub fn key_for(entry: &CardEntry) -> CardKey {
    let name = entry.display_name.to_lowercase();
    match (&entry.set_code, &entry.collector_number) {
        (Some(_), Some(number)) => CardKey::Composite(name, number.clone()),
        _ => CardKey::Bare(name),
    }
}

/// Bare key for a card name.
pub fn bare_key(name: &str) -> CardKey {
    CardKey::Bare(name.to_lowercase())
}

/// Front face of a double-faced card name, or the whole name.
///
/// ```
/// use deck_diff::keys::front_face;
///
/// assert_eq!(front_face("Sheoldred // The True Scriptures"), "Sheoldred");
/// assert_eq!(front_face("Sol Ring"), "Sol Ring");
/// ```
pub fn front_face(name: &str) -> &str {
    match name.find(DFC_SEPARATOR) {
        Some(idx) => &name[..idx],
        None => name,
    }
}

pub fn is_double_faced(name: &str) -> bool {
    name.contains(DFC_SEPARATOR)
}
