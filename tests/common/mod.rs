//! Shared deck-list fixtures for the integration tests.

#![allow(dead_code)]

use deck_diff::keys::bare_key;
use deck_diff::models::{CardEntry, SectionDiff, SectionMap};

/// Arena-style export with a commander block.
pub const ARENA_COMMANDER: &str = "\
Commander
1 Atraxa, Praetors' Voice

Deck
1 Sol Ring
1 Arcane Signet
35 Forest
";

/// Plain text with set codes, collector numbers, foil markers and a sideboard.
pub const PRINTED_LIST: &str = "\
1 Sol Ring (LTC) 284
4 Lightning Bolt (2X2) 117 *F*
1 Sheoldred // The True Scriptures (MOM) 100
SB: 2 Pyroblast (ICE) 212

SIDEBOARD:
3 Duress (M19) 94
";

/// CSV export with the usual collection-manager columns.
pub const CSV_EXPORT: &str = "\
Quantity,Name,Set,Collector Number,Foil
4,Lightning Bolt,2X2,117,foil
1,\"Sheoldred, the Apocalypse\",DMU,107,
2,Counterspell,,,
";

/// Look up an entry by bare name.
pub fn bare<'a>(map: &'a SectionMap, name: &str) -> Option<&'a CardEntry> {
    map.get(&bare_key(name))
}

/// Sum of all quantities in a section.
pub fn total(map: &SectionMap) -> i64 {
    map.values().map(|e| i64::from(e.quantity)).sum()
}

/// Net quantity movement described by a section diff.
pub fn net_change(diff: &SectionDiff) -> i64 {
    let added: i64 = diff.cards_in.iter().map(|c| i64::from(c.quantity)).sum();
    let removed: i64 = diff.cards_out.iter().map(|c| i64::from(c.quantity)).sum();
    let changed: i64 = diff.quantity_changes.iter().map(|c| c.delta).sum();
    added - removed + changed
}

/// Number of keys the diff accounts for.
pub fn accounted_keys(diff: &SectionDiff) -> usize {
    diff.cards_in.len() + diff.cards_out.len() + diff.quantity_changes.len() + diff.unchanged_count
}
