use phf::{Map, phf_map};
use std::collections::HashMap;

pub const HELIX: &str = "Helix";
pub const STRAND: &str = "Strand";
pub const OTHER: &str = "Other";
pub const GAP: &str = "gap";

static DSSP_DEFAULT: Map<char, &'static str> = phf_map! {
    'H' => HELIX, 'G' => HELIX, 'I' => HELIX,
    'E' => STRAND, 'B' => STRAND,
    'T' => OTHER, 'S' => OTHER,
};

static STRIDE_DEFAULT: Map<char, &'static str> = phf_map! {
    'H' => HELIX, 'G' => HELIX, 'I' => HELIX,
    'E' => STRAND, 'B' => STRAND,
    'T' => OTHER, 'C' => OTHER,
};

/// Translates raw one-letter secondary-structure codes into human-readable labels.
///
/// The table owns its entries: a caller-supplied map is copied on construction, so lookups
/// can never observe or mutate the caller's map. Codes absent from the table translate to
/// [`OTHER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<char, String>,
}

impl TranslationTable {
    pub fn dssp_default() -> Self {
        Self::from_static(&DSSP_DEFAULT)
    }

    pub fn stride_default() -> Self {
        Self::from_static(&STRIDE_DEFAULT)
    }

    pub fn from_map(map: &HashMap<char, String>) -> Self {
        Self {
            entries: map.clone(),
        }
    }

    fn from_static(map: &Map<char, &'static str>) -> Self {
        Self {
            entries: map
                .entries()
                .map(|(code, label)| (*code, (*label).to_string()))
                .collect(),
        }
    }

    pub fn translate(&self, code: char) -> &str {
        self.entries.get(&code).map_or(OTHER, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
