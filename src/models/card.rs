use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::config::COMPOSITE_SEPARATOR;

// ---------------------------------------------------------------------------
// CardEntry — One card line of a deck list
// ---------------------------------------------------------------------------

/// A card as it appears on one line (or one CSV row) of a deck list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub display_name: String,
    pub quantity: u32,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
    #[serde(default)]
    pub is_foil: bool,
}

impl CardEntry {
    /// Create an entry with no printing metadata.
    pub fn new(display_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            display_name: display_name.into(),
            quantity,
            set_code: None,
            collector_number: None,
            is_foil: false,
        }
    }

    /// Attach a set code and collector number. The set code is lowercased.
    pub fn with_printing(mut self, set_code: &str, collector_number: &str) -> Self {
        self.set_code = Some(set_code.to_lowercase());
        self.collector_number = Some(collector_number.to_string());
        self
    }

    pub fn with_foil(mut self, is_foil: bool) -> Self {
        self.is_foil = is_foil;
        self
    }

    /// True when both set code and collector number are known.
    pub fn has_printing(&self) -> bool {
        self.set_code.is_some() && self.collector_number.is_some()
    }
}

// ---------------------------------------------------------------------------
// CardKey — Lookup key of a card inside a parsed section
// ---------------------------------------------------------------------------

/// Identity of a card within one section.
///
/// `Bare` holds the lowercased name. `Composite` additionally pins a specific
/// printing by collector number and is only built when the entry carries both
/// a set code and a collector number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardKey {
    Bare(String),
    Composite(String, String),
}

impl CardKey {
    /// The lowercased name portion of the key.
    pub fn name(&self) -> &str {
        match self {
            CardKey::Bare(name) | CardKey::Composite(name, _) => name,
        }
    }

    pub fn collector_number(&self) -> Option<&str> {
        match self {
            CardKey::Bare(_) => None,
            CardKey::Composite(_, number) => Some(number),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, CardKey::Composite(..))
    }

    /// Same key shape (bare or same collector number) under a different name.
    pub fn with_name(&self, name: &str) -> CardKey {
        match self {
            CardKey::Bare(_) => CardKey::Bare(name.to_string()),
            CardKey::Composite(_, number) => CardKey::Composite(name.to_string(), number.clone()),
        }
    }

    /// Drop the printing part of the key.
    pub fn to_bare(&self) -> CardKey {
        CardKey::Bare(self.name().to_string())
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKey::Bare(name) => write!(f, "{}", name),
            CardKey::Composite(name, number) => {
                write!(f, "{}{}{}", name, COMPOSITE_SEPARATOR, number)
            }
        }
    }
}

// Serialized as text so keyed maps stay valid JSON objects.
impl Serialize for CardKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
