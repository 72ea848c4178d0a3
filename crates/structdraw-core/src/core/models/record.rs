use serde::Serialize;
use std::collections::HashMap;

/// Per-atom B-factors grouped by residue, in atom order.
pub type BFactorTable = HashMap<ResidueKey, Vec<f64>>;

/// The normalized per-residue record produced by every algorithm parser.
///
/// This is the contract between the parsers and everything downstream: chain construction only
/// ever sees these records, never the raw tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidueRecord {
    pub residue_index: i32,
    /// `None` when the source column is blank.
    #[serde(serialize_with = "serialize_optional_char")]
    pub insertion_code: Option<char>,
    pub chain_id: String,
    pub amino_acid: char,
    #[serde(rename = "secondary_structure")]
    pub ss_label: String,
    #[serde(rename = "secondary_structure_code")]
    pub ss_code: char,
}

impl ResidueRecord {
    /// Key used to join this record with a B-factor table.
    pub fn key(&self) -> ResidueKey {
        ResidueKey {
            chain_id: self.chain_id.clone(),
            residue_index: self.residue_index,
            insertion_code: self.insertion_code,
        }
    }
}

/// Identifies a residue across the algorithm output and the coordinate file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueKey {
    pub chain_id: String,
    pub residue_index: i32,
    pub insertion_code: Option<char>,
}

impl ResidueKey {
    pub fn new(chain_id: impl Into<String>, residue_index: i32, insertion_code: Option<char>) -> Self {
        Self {
            chain_id: chain_id.into(),
            residue_index,
            insertion_code,
        }
    }
}

/// Normalizes an insertion-code column: blanks and the CIF placeholders `?`/`.` mean "none".
pub fn insertion_code_from(raw: Option<char>) -> Option<char> {
    raw.filter(|c| !matches!(c, ' ' | '?' | '.'))
}

fn serialize_optional_char<S: serde::Serializer>(
    value: &Option<char>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(c) => serializer.serialize_char(*c),
        None => serializer.serialize_str(""),
    }
}
