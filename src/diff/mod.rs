//! Reconciliation differ.
//!
//! Compares two parsed deck lists section by section. Before any counting,
//! keys are reconciled (see [`reconcile`]) so that the same physical card
//! lines up even when the two lists write it differently: `Front // Back`
//! against `Front`, one specific printing against a bare name, or several
//! printings against a single bare entry.
//!
//! The differ is total and deterministic: any two lists produce a result and
//! the same inputs always produce the same ordering.

pub mod reconcile;

use std::collections::BTreeSet;

use crate::models::{
    CardEntry, CardIn, CardKey, CardOut, DiffResult, ParsedList, PrintingChange, QuantityChange,
    SectionDiff, SectionMap,
};

/// Knobs for the differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Report cards kept at the same count but swapped to another printing.
    pub detect_printing_changes: bool,
}

/// Diff one section with default options.
pub fn diff_section(before: &SectionMap, after: &SectionMap) -> SectionDiff {
    diff_section_with(before, after, &DiffOptions::default())
}

pub fn diff_section_with(
    before: &SectionMap,
    after: &SectionMap,
    options: &DiffOptions,
) -> SectionDiff {
    let (before, after) = reconcile::reconcile(before, after);
    let keys: BTreeSet<&CardKey> = before.keys().chain(after.keys()).collect();

    let mut diff = SectionDiff {
        total_unique_cards: keys.len(),
        ..SectionDiff::default()
    };

    for key in keys {
        let old = before.get(key);
        let new = after.get(key);
        let before_qty = old.map_or(0, |e| e.quantity);
        let after_qty = new.map_or(0, |e| e.quantity);
        // What the card looks like now, or what it looked like before it left.
        let Some(shown) = new.or(old) else {
            continue;
        };

        if before_qty == 0 && after_qty > 0 {
            diff.cards_in.push(CardIn {
                name: shown.display_name.clone(),
                quantity: after_qty,
                set_code: shown.set_code.clone(),
                collector_number: shown.collector_number.clone(),
                is_foil: shown.is_foil,
            });
        } else if before_qty > 0 && after_qty == 0 {
            diff.cards_out.push(CardOut {
                name: shown.display_name.clone(),
                quantity: before_qty,
                set_code: shown.set_code.clone(),
                collector_number: shown.collector_number.clone(),
                is_foil: shown.is_foil,
            });
        } else if before_qty != after_qty {
            diff.quantity_changes.push(QuantityChange {
                name: shown.display_name.clone(),
                old_qty: before_qty,
                new_qty: after_qty,
                delta: i64::from(after_qty) - i64::from(before_qty),
                set_code: shown.set_code.clone(),
                collector_number: shown.collector_number.clone(),
                is_foil: shown.is_foil,
            });
        } else {
            diff.unchanged_count += 1;
            if options.detect_printing_changes {
                if let (Some(old), Some(new)) = (old, new) {
                    if let Some(change) = printing_change(old, new) {
                        diff.printing_changes.push(change);
                    }
                }
            }
        }
    }

    diff.cards_in.sort_by(|a, b| a.name.cmp(&b.name));
    diff.cards_out.sort_by(|a, b| a.name.cmp(&b.name));
    diff.quantity_changes.sort_by(|a, b| a.name.cmp(&b.name));
    diff.printing_changes.sort_by(|a, b| a.name.cmp(&b.name));
    diff
}

/// A printing swap: both sides pin a printing and it differs.
fn printing_change(old: &CardEntry, new: &CardEntry) -> Option<PrintingChange> {
    if !old.has_printing() || !new.has_printing() || old.quantity == 0 {
        return None;
    }
    let unchanged = old.set_code == new.set_code
        && old.collector_number == new.collector_number
        && old.is_foil == new.is_foil;
    if unchanged {
        return None;
    }
    Some(PrintingChange {
        name: new.display_name.clone(),
        quantity: new.quantity,
        old_set_code: old.set_code.clone(),
        old_collector_number: old.collector_number.clone(),
        old_is_foil: old.is_foil,
        new_set_code: new.set_code.clone(),
        new_collector_number: new.collector_number.clone(),
        new_is_foil: new.is_foil,
    })
}

/// Diff two parsed lists with default options.
pub fn compute_diff(before: &ParsedList, after: &ParsedList) -> DiffResult {
    compute_diff_with(before, after, &DiffOptions::default())
}

/// Diff mainboard and sideboard; commanders are carried from `after`, or
/// from `before` when `after` names none.
pub fn compute_diff_with(
    before: &ParsedList,
    after: &ParsedList,
    options: &DiffOptions,
) -> DiffResult {
    let commanders = match after.commander_names() {
        names if !names.is_empty() => names,
        _ => before.commander_names(),
    };

    DiffResult {
        mainboard: diff_section_with(&before.mainboard, &after.mainboard, options),
        sideboard: diff_section_with(&before.sideboard, &after.sideboard, options),
        has_sideboard: !before.sideboard.is_empty() || !after.sideboard.is_empty(),
        commanders,
    }
}
