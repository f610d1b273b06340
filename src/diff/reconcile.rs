//! Key reconciliation between a "before" and an "after" section.
//!
//! Both input maps are left untouched; reconciliation returns two new maps
//! whose keys line up wherever the two sides describe the same card.

use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::keys::front_face;
use crate::models::{CardEntry, CardKey, SectionMap};
use crate::parser::merge_entries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Before,
    After,
}

/// Align the keys of `before` and `after`.
pub(crate) fn reconcile(before: &SectionMap, after: &SectionMap) -> (SectionMap, SectionMap) {
    // Step 1: double-faced names against front faces, both directions.
    let before = resolve_aliases(before.clone(), after);
    let after = resolve_aliases(after.clone(), &before);

    // Step 2: composite keys against bare keys, per card name.
    let plans = plan_names(&before, &after);
    if plans.is_empty() {
        return (before, after);
    }
    (
        apply(before, &plans, Side::Before),
        apply(after, &plans, Side::After),
    )
}

// ---------------------------------------------------------------------------
// Step 1: DFC alias resolution
// ---------------------------------------------------------------------------

/// Re-key `Front // Back` entries to `Front` when `other` only knows the front face.
fn resolve_aliases(map: SectionMap, other: &SectionMap) -> SectionMap {
    let other_names: HashSet<&str> = other.keys().map(CardKey::name).collect();
    let mut out = SectionMap::new();

    for (key, entry) in map {
        let alias = if other.contains_key(&key) {
            None
        } else {
            let front = front_face(key.name());
            (front != key.name() && other_names.contains(front)).then(|| key.with_name(front))
        };
        fold(&mut out, alias.unwrap_or(key), entry);
    }

    out
}

// ---------------------------------------------------------------------------
// Step 2: composite/bare reconciliation
// ---------------------------------------------------------------------------

/// Keys one side holds for a single card name.
#[derive(Debug, Default, PartialEq, Eq)]
struct NameGroup {
    bare: bool,
    composites: BTreeSet<CardKey>,
}

impl NameGroup {
    fn is_lone_bare(&self) -> bool {
        self.bare && self.composites.is_empty()
    }

    fn is_composite_only(&self) -> bool {
        !self.bare && !self.composites.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Plan {
    /// The side's lone bare key becomes the other side's single composite key.
    RenameBare { side: Side, to: CardKey },
    /// The listed sides fold all their keys for the name into one bare entry.
    Collapse { before: bool, after: bool },
}

enum Action<'a> {
    Keep,
    Rename(&'a CardKey),
    Collapse,
}

impl Plan {
    fn action(&self, side: Side, key: &CardKey) -> Action<'_> {
        match self {
            Plan::RenameBare { side: s, to } if *s == side && !key.is_composite() => {
                Action::Rename(to)
            }
            Plan::Collapse { before, .. } if side == Side::Before && *before => Action::Collapse,
            Plan::Collapse { after, .. } if side == Side::After && *after => Action::Collapse,
            _ => Action::Keep,
        }
    }
}

fn groups(map: &SectionMap) -> BTreeMap<&str, NameGroup> {
    let mut groups: BTreeMap<&str, NameGroup> = BTreeMap::new();
    for key in map.keys() {
        let group = groups.entry(key.name()).or_default();
        match key {
            CardKey::Bare(_) => group.bare = true,
            CardKey::Composite(..) => {
                group.composites.insert(key.clone());
            }
        }
    }
    groups
}

/// Decide, per name present on both sides, how the keys must move.
fn plan_names(before: &SectionMap, after: &SectionMap) -> HashMap<String, Plan> {
    let before_groups = groups(before);
    let after_groups = groups(after);
    let mut plans = HashMap::new();

    for (name, b) in &before_groups {
        let Some(a) = after_groups.get(name) else {
            continue;
        };
        if let Some(plan) = plan_name(b, a) {
            plans.insert(name.to_string(), plan);
        }
    }

    plans
}

fn plan_name(before: &NameGroup, after: &NameGroup) -> Option<Plan> {
    if before == after {
        return None;
    }

    if before.is_lone_bare() && after.is_composite_only() {
        return Some(match single(&after.composites) {
            Some(key) => Plan::RenameBare {
                side: Side::Before,
                to: key.clone(),
            },
            None => Plan::Collapse {
                before: false,
                after: true,
            },
        });
    }

    if after.is_lone_bare() && before.is_composite_only() {
        return Some(match single(&before.composites) {
            Some(key) => Plan::RenameBare {
                side: Side::After,
                to: key.clone(),
            },
            None => Plan::Collapse {
                before: true,
                after: false,
            },
        });
    }

    if before.is_composite_only()
        && after.is_composite_only()
        && !before.composites.is_disjoint(&after.composites)
    {
        // Shared printings: diff at printing level.
        return None;
    }

    Some(Plan::Collapse {
        before: true,
        after: true,
    })
}

fn single(keys: &BTreeSet<CardKey>) -> Option<&CardKey> {
    match keys.len() {
        1 => keys.iter().next(),
        _ => None,
    }
}

fn apply(map: SectionMap, plans: &HashMap<String, Plan>, side: Side) -> SectionMap {
    let mut out = SectionMap::new();
    let mut collapsed: BTreeMap<CardKey, Vec<CardEntry>> = BTreeMap::new();

    for (key, entry) in map {
        let action = plans
            .get(key.name())
            .map(|plan| plan.action(side, &key))
            .unwrap_or(Action::Keep);
        match action {
            Action::Keep => fold(&mut out, key, entry),
            Action::Rename(to) => fold(&mut out, to.clone(), entry),
            Action::Collapse => collapsed.entry(key.to_bare()).or_default().push(entry),
        }
    }

    for (key, entries) in collapsed {
        fold(&mut out, key, collapse_printings(entries));
    }

    out
}

/// Fold several printings of one card into a single entry.
///
/// A lone entry keeps its printing. Several entries sum their quantities and
/// lose collector number and foil; the set code survives only if all agree.
fn collapse_printings(mut entries: Vec<CardEntry>) -> CardEntry {
    if entries.len() == 1 {
        if let Some(entry) = entries.pop() {
            return entry;
        }
    }

    let display_name = entries
        .first()
        .map(|e| e.display_name.clone())
        .unwrap_or_default();
    debug!(
        "Ambiguous printing for {}: collapsing {} entries",
        display_name,
        entries.len()
    );

    let quantity = entries
        .iter()
        .fold(0u32, |acc, e| acc.saturating_add(e.quantity));
    let first_set = entries.first().and_then(|e| e.set_code.clone());
    let shared_set = entries
        .iter()
        .all(|e| e.set_code == first_set)
        .then_some(first_set)
        .flatten();

    CardEntry {
        display_name,
        quantity,
        set_code: shared_set,
        collector_number: None,
        is_foil: false,
    }
}

/// Insert, merging with an entry already under `key`.
fn fold(map: &mut SectionMap, key: CardKey, entry: CardEntry) {
    let merged = match map.remove(&key) {
        Some(existing) => merge_entries(existing, entry),
        None => entry,
    };
    map.insert(key, merged);
}
