//! Deck-list changelogs for Magic: The Gathering.
//!
//! Parses deck lists in the common export formats (plain text with optional
//! set codes, collector numbers and foil markers, or CSV with a header row)
//! and computes a reconciled diff between two versions: cards in, cards out,
//! quantity changes and, optionally, printing swaps.
//!
//! # Quick start
//!
//! ```
//! use deck_diff::{compute_diff, parse};
//!
//! let before = parse("4 Lightning Bolt");
//! let after = parse("4 Lightning Bolt\n2 Counterspell");
//!
//! let diff = compute_diff(&before, &after);
//! assert_eq!(diff.mainboard.cards_in[0].name, "Counterspell");
//! assert_eq!(diff.mainboard.cards_in[0].quantity, 2);
//! ```
//!
//! Options go through [`DeckDiffer`]:
//!
//! ```
//! use deck_diff::DeckDiffer;
//!
//! let differ = DeckDiffer::builder().detect_printing_changes(true).build();
//! let diff = differ.compare("1 Sol Ring (ltc) [284]", "1 Sol Ring (fdn) [355]");
//! assert_eq!(diff.mainboard.printing_changes.len(), 1);
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod keys;
pub mod models;
pub mod parser;

pub use diff::{compute_diff, compute_diff_with, diff_section, diff_section_with, DiffOptions};
pub use error::{DeckDiffError, ParseWarning, Result};
pub use models::{CardEntry, CardKey, DiffResult, ParsedList, Section, SectionDiff};
pub use parser::{classify, parse, parse_with_diagnostics, LineKind, ParseReport};

use std::fmt;
use std::fs;
use std::path::Path;

// ---------------------------------------------------------------------------
// DeckDifferBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring a [`DeckDiffer`].
///
/// Use [`DeckDiffer::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DeckDifferBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct DeckDifferBuilder {
    options: DiffOptions,
}

impl DeckDifferBuilder {
    /// Report printing swaps (same card, same count, different set or
    /// collector number or foil state) in `printing_changes`.
    ///
    /// Defaults to `false`; a pure printing swap is then invisible.
    pub fn detect_printing_changes(mut self, detect: bool) -> Self {
        self.options.detect_printing_changes = detect;
        self
    }

    pub fn build(self) -> DeckDiffer {
        DeckDiffer {
            options: self.options,
        }
    }
}

// ---------------------------------------------------------------------------
// DeckDiffer
// ---------------------------------------------------------------------------

/// Parses and compares deck lists with a fixed set of [`DiffOptions`].
///
/// Holds no mutable state, so one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckDiffer {
    options: DiffOptions,
}

impl DeckDiffer {
    /// Create a new builder for configuring the differ.
    pub fn builder() -> DeckDifferBuilder {
        DeckDifferBuilder::default()
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Parse one deck list.
    pub fn parse(&self, text: &str) -> ParsedList {
        parser::parse(text)
    }

    /// Diff two already parsed lists.
    pub fn diff(&self, before: &ParsedList, after: &ParsedList) -> DiffResult {
        diff::compute_diff_with(before, after, &self.options)
    }

    /// Parse both texts and diff them.
    pub fn compare(&self, before: &str, after: &str) -> DiffResult {
        self.diff(&self.parse(before), &self.parse(after))
    }

    /// Read two deck-list files and diff them.
    ///
    /// The only failure is reading either file.
    pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        before: P,
        after: Q,
    ) -> Result<DiffResult> {
        let before = fs::read_to_string(before)?;
        let after = fs::read_to_string(after)?;
        Ok(self.compare(&before, &after))
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DeckDiffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DeckDiffer(detect_printing_changes={})",
            self.options.detect_printing_changes
        )
    }
}
