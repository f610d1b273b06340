//! Single-line classification for plain-text deck lists.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::{self, SIDEBOARD_PREFIX};
use crate::models::{CardEntry, Section};
use crate::parser::csv::looks_like_csv_header;

// qty? name (SET)? number? [NUM]? *MARKER*?
static CARD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^(?:(?P<qty>\d+)[xX]?\s+)?
        (?P<name>.+?)
        (?:\s+\((?P<set>[A-Za-z0-9]{2,6})\)(?:\s+(?P<number>[A-Za-z0-9][A-Za-z0-9\-★†]*))?)?
        (?:\s+\[(?P<bracket>[^\]\s]+)\])?
        (?:\s+\*(?P<marker>[^*\s]+)\*)?
        $",
    )
    .expect("card line pattern is valid")
});

static HEADER_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\d+\)$").expect("header count pattern is valid"));

static SECTION_HEADERS: LazyLock<HashMap<&'static str, Section>> =
    LazyLock::new(config::section_headers);

// ---------------------------------------------------------------------------
// LineKind
// ---------------------------------------------------------------------------

/// How sure the classifier is about a card line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// The line followed the card grammar, leading quantity included.
    Recognized,
    /// Best-effort guess: quantity defaulted to 1.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCard {
    pub entry: CardEntry,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    SectionHeader(Section),
    CsvHeaderRow,
    CardLine(ClassifiedCard),
    /// A card line written with the `SB:` prefix; always sideboard.
    SideboardPrefixedCardLine(ClassifiedCard),
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify one physical line of a plain-text deck list.
///
/// Never fails: anything that is not blank, a header, or a CSV header row
/// becomes a card line, at worst a [`Confidence::Fallback`] one.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if let Some(rest) = trimmed.strip_prefix(SIDEBOARD_PREFIX) {
        let rest = rest.trim();
        if rest.is_empty() {
            return LineKind::SectionHeader(Section::Sideboard);
        }
        return LineKind::SideboardPrefixedCardLine(parse_card(rest));
    }

    if let Some(section) = section_header(trimmed) {
        return LineKind::SectionHeader(section);
    }

    if looks_like_csv_header(trimmed) {
        return LineKind::CsvHeaderRow;
    }

    LineKind::CardLine(parse_card(trimmed))
}

/// Recognize `Sideboard`, `// Sideboard`, `Sideboard:`, `Sideboard (15)` and friends.
fn section_header(trimmed: &str) -> Option<Section> {
    let text = trimmed.strip_prefix("//").unwrap_or(trimmed).trim();
    let text = text.strip_suffix(':').unwrap_or(text).trim_end();
    let text = HEADER_COUNT.replace(text, "");
    let text = text.trim_end_matches(':').trim().to_lowercase();
    SECTION_HEADERS.get(text.as_str()).copied()
}

/// Parse a trimmed, non-empty card line.
fn parse_card(trimmed: &str) -> ClassifiedCard {
    match CARD_LINE.captures(trimmed) {
        Some(caps) => card_from_captures(trimmed, &caps),
        None => fallback(trimmed),
    }
}

fn card_from_captures(trimmed: &str, caps: &Captures<'_>) -> ClassifiedCard {
    let quantity = match caps.name("qty") {
        Some(m) => match m.as_str().parse::<u32>() {
            Ok(q) => Some(q),
            Err(_) => return fallback(trimmed),
        },
        None => None,
    };

    let number = caps.name("number").or_else(|| caps.name("bracket"));
    let marker = caps.name("marker");
    let name_start = caps.name("name").map_or(0, |m| m.start());

    // A lone trailing parenthetical is part of the name unless it is shaped like a set code.
    let (name, set_code) = match caps.name("set") {
        Some(set) if number.is_none() && marker.is_none() && !is_set_code(set.as_str()) => {
            (trimmed[name_start..].trim(), None)
        }
        set => (
            caps.name("name").map_or(trimmed, |m| m.as_str().trim()),
            set.map(|m| m.as_str().to_lowercase()),
        ),
    };
    let collector_number = number.map(|m| m.as_str().to_string());
    let is_foil = marker.map(|m| is_foil_marker(m.as_str())).unwrap_or(false);

    let entry = CardEntry {
        display_name: name.to_string(),
        quantity: quantity.unwrap_or(1),
        set_code,
        collector_number,
        is_foil,
    };
    let confidence = if quantity.is_some() {
        Confidence::Recognized
    } else {
        Confidence::Fallback
    };
    ClassifiedCard { entry, confidence }
}

/// `LTC`, `M21`, `2x2`: contains a digit or is all upper-case letters.
fn is_set_code(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit()) || text.chars().all(|c| c.is_ascii_uppercase())
}

fn fallback(trimmed: &str) -> ClassifiedCard {
    ClassifiedCard {
        entry: CardEntry::new(trimmed, 1),
        confidence: Confidence::Fallback,
    }
}

/// `*F*` is foil; etched (`*E*`, `*ETCHED*`) counts as foil too.
pub fn is_foil_marker(marker: &str) -> bool {
    let upper = marker.trim_matches('*').to_uppercase();
    upper.contains('F') || upper == "E" || upper == "ETCHED"
}
