//! Deck-list parsing.
//!
//! Turns free-form deck-list text into a [`ParsedList`]. Two input modes are
//! supported and chosen from the first non-blank line: CSV exports with a
//! header row, and plain text (`4 Lightning Bolt`, `1x Sol Ring (ltc) 284 *F*`,
//! `Sideboard` headers, `SB:` prefixes, ...).
//!
//! Parsing never fails. Lines the grammar cannot make sense of become card
//! lines with quantity 1, and every such guess is reported as a
//! [`ParseWarning`].

pub mod csv;
pub mod line;

pub use self::csv::{looks_like_csv_header, CsvLayout};
pub use line::{classify, ClassifiedCard, Confidence, LineKind};

use log::warn;

use crate::error::ParseWarning;
use crate::keys::key_for;
use crate::models::{CardEntry, ParsedList, Section};

/// A parsed list plus the degradations met along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub list: ParsedList,
    pub warnings: Vec<ParseWarning>,
}

/// Parse deck-list text into its mainboard, sideboard and commander sections.
pub fn parse(text: &str) -> ParsedList {
    parse_with_diagnostics(text).list
}

/// Parse deck-list text and keep the warnings.
pub fn parse_with_diagnostics(text: &str) -> ParseReport {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut warnings = Vec::new();

    let first = text
        .lines()
        .enumerate()
        .find(|(_, line)| !line.trim().is_empty());

    if let Some((offset, header)) = first {
        if looks_like_csv_header(header.trim()) {
            match CsvLayout::from_header(header) {
                Ok(layout) => {
                    let body = text.trim_start();
                    let list = layout.parse(body, offset, &mut warnings);
                    return ParseReport { list, warnings };
                }
                Err(reason) => {
                    warn!("{}; parsing as plain text", reason);
                    warnings.push(ParseWarning::MalformedInput(reason));
                }
            }
        }
    }

    let list = parse_plain(text, &mut warnings);
    ParseReport { list, warnings }
}

/// Plain-text mode: a section state machine driven by [`classify`].
fn parse_plain(text: &str, warnings: &mut Vec<ParseWarning>) -> ParsedList {
    let mut list = ParsedList::default();
    let mut current = Section::Mainboard;

    for (idx, raw) in text.lines().enumerate() {
        match classify(raw) {
            LineKind::Blank | LineKind::CsvHeaderRow => {}
            LineKind::SectionHeader(section) => current = section,
            LineKind::CardLine(card) => {
                note_fallback(&card, idx + 1, raw, warnings);
                insert_entry(&mut list, current, card.entry);
            }
            LineKind::SideboardPrefixedCardLine(card) => {
                note_fallback(&card, idx + 1, raw, warnings);
                insert_entry(&mut list, Section::Sideboard, card.entry);
            }
        }
    }

    list
}

fn note_fallback(card: &ClassifiedCard, line: usize, raw: &str, warnings: &mut Vec<ParseWarning>) {
    if card.confidence == Confidence::Fallback {
        warn!("Line {} read as a best-effort card line: {}", line, raw.trim());
        warnings.push(ParseWarning::MalformedLine {
            line,
            text: raw.trim().to_string(),
        });
    }
}

/// Fold an entry into a section, merging with an existing entry under the same key.
pub(crate) fn insert_entry(list: &mut ParsedList, section: Section, entry: CardEntry) {
    let key = key_for(&entry);
    let map = list.section_mut(section);
    let merged = match map.remove(&key) {
        Some(existing) => merge_entries(existing, entry),
        None => entry,
    };
    map.insert(key, merged);
}

/// Merge two entries that resolved to the same key.
///
/// Quantities are summed; the incoming entry's printing metadata (set code,
/// collector number, foil) wins. The existing display name is kept.
pub fn merge_entries(existing: CardEntry, incoming: CardEntry) -> CardEntry {
    CardEntry {
        display_name: existing.display_name,
        quantity: existing.quantity.saturating_add(incoming.quantity),
        set_code: incoming.set_code,
        collector_number: incoming.collector_number,
        is_foil: incoming.is_foil,
    }
}
