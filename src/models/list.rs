use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::card::{CardEntry, CardKey};

/// One section's cards, ordered by key so iteration is deterministic.
pub type SectionMap = BTreeMap<CardKey, CardEntry>;

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Mainboard,
    Sideboard,
    Commander,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Section::Mainboard => "mainboard",
            Section::Sideboard => "sideboard",
            Section::Commander => "commander",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// ParsedList — Normalized form of one deck-list document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedList {
    pub mainboard: SectionMap,
    pub sideboard: SectionMap,
    pub commanders: SectionMap,
}

impl ParsedList {
    pub fn section(&self, section: Section) -> &SectionMap {
        match section {
            Section::Mainboard => &self.mainboard,
            Section::Sideboard => &self.sideboard,
            Section::Commander => &self.commanders,
        }
    }

    pub(crate) fn section_mut(&mut self, section: Section) -> &mut SectionMap {
        match section {
            Section::Mainboard => &mut self.mainboard,
            Section::Sideboard => &mut self.sideboard,
            Section::Commander => &mut self.commanders,
        }
    }

    /// True when no section holds any entry.
    pub fn is_empty(&self) -> bool {
        self.mainboard.is_empty() && self.sideboard.is_empty() && self.commanders.is_empty()
    }

    /// Total number of physical cards across all sections.
    pub fn total_cards(&self) -> u64 {
        [&self.mainboard, &self.sideboard, &self.commanders]
            .into_iter()
            .flat_map(|map| map.values())
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    /// Display names of the commander section, in key order.
    pub fn commander_names(&self) -> Vec<String> {
        self.commanders
            .values()
            .map(|entry| entry.display_name.clone())
            .collect()
    }
}
