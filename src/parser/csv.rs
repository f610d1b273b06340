//! CSV deck exports: a header row maps columns positionally to card fields.

use log::warn;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::{self, CsvField, FOIL_VALUES};
use crate::error::ParseWarning;
use crate::models::{CardEntry, ParsedList, Section};
use crate::parser::insert_entry;

static CSV_COLUMNS: LazyLock<HashMap<&'static str, CsvField>> =
    LazyLock::new(config::csv_columns);

/// True when `line` is comma separated and names at least one known column.
pub fn looks_like_csv_header(line: &str) -> bool {
    if !line.contains(',') {
        return false;
    }
    header_tokens(line)
        .iter()
        .any(|token| CSV_COLUMNS.contains_key(token.as_str()))
}

/// Lower-cased header cells, split with the same quoting rules as the rows.
fn header_tokens(line: &str) -> Vec<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => record.iter().map(str::to_lowercase).collect(),
        _ => Vec::new(),
    }
}

/// Quantity cell: `2` or `2x`. An empty cell means one copy.
fn parse_quantity(cell: &str) -> Option<u32> {
    if cell.is_empty() {
        return Some(1);
    }
    let digits = cell.strip_suffix(['x', 'X']).unwrap_or(cell).trim_end();
    digits.parse::<u32>().ok()
}

// ---------------------------------------------------------------------------
// CsvLayout
// ---------------------------------------------------------------------------

/// Column positions resolved from a CSV header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvLayout {
    pub quantity: usize,
    pub name: usize,
    pub set_code: Option<usize>,
    pub collector_number: Option<usize>,
    pub foil: Option<usize>,
    pub board: Option<usize>,
}

impl CsvLayout {
    /// Resolve the layout from a header line.
    ///
    /// Fails with a human-readable reason when the quantity or name column
    /// cannot be found; the caller then treats the document as plain text.
    pub fn from_header(line: &str) -> std::result::Result<Self, String> {
        let mut quantity = None;
        let mut name = None;
        let mut layout = CsvLayout::default();

        for (idx, token) in header_tokens(line).iter().enumerate() {
            let Some(field) = CSV_COLUMNS.get(token.as_str()) else {
                continue;
            };
            // First column wins when a field appears twice.
            match field {
                CsvField::Quantity => {
                    quantity.get_or_insert(idx);
                }
                CsvField::Name => {
                    name.get_or_insert(idx);
                }
                CsvField::SetCode => {
                    layout.set_code.get_or_insert(idx);
                }
                CsvField::CollectorNumber => {
                    layout.collector_number.get_or_insert(idx);
                }
                CsvField::Foil => {
                    layout.foil.get_or_insert(idx);
                }
                CsvField::Board => {
                    layout.board.get_or_insert(idx);
                }
            }
        }

        match (quantity, name) {
            (Some(q), Some(n)) => {
                layout.quantity = q;
                layout.name = n;
                Ok(layout)
            }
            (None, Some(_)) => Err(format!("CSV header {:?} has no quantity column", line)),
            (_, None) => Err(format!("CSV header {:?} has no name column", line)),
        }
    }

    /// Parse a CSV document whose first line is the header this layout came from.
    ///
    /// `line_offset` is the number of lines that preceded the header in the
    /// original text, so warnings point at real line numbers.
    pub fn parse(
        &self,
        text: &str,
        line_offset: usize,
        warnings: &mut Vec<ParseWarning>,
    ) -> ParsedList {
        let mut list = ParsedList::default();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping unreadable CSV row: {}", e);
                    let line = e.position().map(|p| p.line() as usize).unwrap_or(0);
                    warnings.push(ParseWarning::MalformedLine {
                        line: line + line_offset,
                        text: e.to_string(),
                    });
                    continue;
                }
            };
            let line = record.position().map(|p| p.line() as usize).unwrap_or(0) + line_offset;

            let name = record.get(self.name).unwrap_or("");
            if name.is_empty() {
                let text = record.iter().collect::<Vec<_>>().join(",");
                warn!("Skipping CSV row {} without a card name: {}", line, text);
                warnings.push(ParseWarning::MalformedLine { line, text });
                continue;
            }

            let raw_quantity = record.get(self.quantity).unwrap_or("");
            let quantity = match parse_quantity(raw_quantity) {
                Some(q) => q,
                None => {
                    let text = record.iter().collect::<Vec<_>>().join(",");
                    warn!(
                        "CSV row {} has an unreadable quantity {:?}; counting one copy",
                        line, raw_quantity
                    );
                    warnings.push(ParseWarning::MalformedLine { line, text });
                    1
                }
            };

            let entry = CardEntry {
                display_name: name.to_string(),
                quantity,
                set_code: cell(&record, self.set_code).map(|s| s.to_lowercase()),
                collector_number: cell(&record, self.collector_number).map(str::to_string),
                is_foil: cell(&record, self.foil)
                    .map(|f| FOIL_VALUES.contains(&f.to_lowercase().as_str()))
                    .unwrap_or(false),
            };
            let section = cell(&record, self.board)
                .map(section_for_board)
                .unwrap_or_default();

            insert_entry(&mut list, section, entry);
        }

        list
    }
}

/// Non-empty cell at an optional column.
fn cell(record: &csv::StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| record.get(i)).filter(|s| !s.is_empty())
}

fn section_for_board(value: &str) -> Section {
    let lower = value.to_lowercase();
    if lower.contains("commander") {
        Section::Commander
    } else if lower.contains("side") {
        Section::Sideboard
    } else {
        Section::Mainboard
    }
}
