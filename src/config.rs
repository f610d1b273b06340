use std::collections::HashMap;

use crate::models::Section;

/// Separator between the faces of a double-faced card name.
pub const DFC_SEPARATOR: &str = " // ";

/// Separator used when a composite [`CardKey`](crate::models::CardKey) is rendered as text.
pub const COMPOSITE_SEPARATOR: char = '|';

/// Line prefix that forces a card into the sideboard.
pub const SIDEBOARD_PREFIX: &str = "SB:";

/// Canonical CSV fields a header column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsvField {
    Quantity,
    Name,
    SetCode,
    CollectorNumber,
    Foil,
    Board,
}

pub fn csv_columns() -> HashMap<&'static str, CsvField> {
    HashMap::from([
        ("quantity", CsvField::Quantity),
        ("qty", CsvField::Quantity),
        ("count", CsvField::Quantity),
        ("amount", CsvField::Quantity),
        ("name", CsvField::Name),
        ("card name", CsvField::Name),
        ("card", CsvField::Name),
        ("set", CsvField::SetCode),
        ("set code", CsvField::SetCode),
        ("edition", CsvField::SetCode),
        ("edition code", CsvField::SetCode),
        ("collector number", CsvField::CollectorNumber),
        ("collector_number", CsvField::CollectorNumber),
        ("collector #", CsvField::CollectorNumber),
        ("number", CsvField::CollectorNumber),
        ("card number", CsvField::CollectorNumber),
        ("foil", CsvField::Foil),
        ("finish", CsvField::Foil),
        ("printing", CsvField::Foil),
        ("board", CsvField::Board),
        ("section", CsvField::Board),
        ("category", CsvField::Board),
    ])
}

pub fn section_headers() -> HashMap<&'static str, Section> {
    HashMap::from([
        ("mainboard", Section::Mainboard),
        ("main", Section::Mainboard),
        ("main deck", Section::Mainboard),
        ("maindeck", Section::Mainboard),
        ("deck", Section::Mainboard),
        ("sideboard", Section::Sideboard),
        ("side", Section::Sideboard),
        ("commander", Section::Commander),
        ("commanders", Section::Commander),
    ])
}

/// CSV foil cell values that mean the printing is foil (etched included).
pub const FOIL_VALUES: &[&str] = &["foil", "etched", "true", "yes", "y", "1"];
