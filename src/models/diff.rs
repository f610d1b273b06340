use serde::{Deserialize, Serialize};

use crate::error::Result;

// ---------------------------------------------------------------------------
// Diff entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIn {
    pub name: String,
    pub quantity: u32,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
    pub is_foil: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOut {
    pub name: String,
    pub quantity: u32,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
    pub is_foil: bool,
}

/// A card whose count changed. `delta` is never zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChange {
    pub name: String,
    pub old_qty: u32,
    pub new_qty: u32,
    pub delta: i64,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
    pub is_foil: bool,
}

/// A card kept at the same count but swapped to a different printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintingChange {
    pub name: String,
    pub quantity: u32,
    pub old_set_code: Option<String>,
    pub old_collector_number: Option<String>,
    pub old_is_foil: bool,
    pub new_set_code: Option<String>,
    pub new_collector_number: Option<String>,
    pub new_is_foil: bool,
}

// ---------------------------------------------------------------------------
// SectionDiff
// ---------------------------------------------------------------------------

/// Changelog of a single section. Every list is sorted by `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDiff {
    pub cards_in: Vec<CardIn>,
    pub cards_out: Vec<CardOut>,
    pub quantity_changes: Vec<QuantityChange>,
    #[serde(default)]
    pub printing_changes: Vec<PrintingChange>,
    pub total_unique_cards: usize,
    pub unchanged_count: usize,
}

impl SectionDiff {
    /// True when any card entered, left, changed count or changed printing.
    pub fn has_changes(&self) -> bool {
        !self.cards_in.is_empty()
            || !self.cards_out.is_empty()
            || !self.quantity_changes.is_empty()
            || !self.printing_changes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// DiffResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub mainboard: SectionDiff,
    pub sideboard: SectionDiff,
    pub has_sideboard: bool,
    pub commanders: Vec<String>,
}

impl DiffResult {
    /// True when neither mainboard nor sideboard changed.
    pub fn is_empty(&self) -> bool {
        !self.mainboard.has_changes() && !self.sideboard.has_changes()
    }

    /// Serialize the result with the stable field names consumers rely on.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
