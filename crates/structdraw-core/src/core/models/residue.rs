use super::record::ResidueRecord;
use crate::core::utils::translation::GAP;
use std::fmt;

/// Position of a residue in its source numbering, or the placeholder inserted by an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueIndex {
    Number(i32),
    Gap,
}

impl fmt::Display for ResidueIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResidueIndex::Number(n) => write!(f, "{}", n),
            ResidueIndex::Gap => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub index: ResidueIndex,
    pub insertion_code: Option<char>, // None when the source had no insertion code
    pub amino_acid: Option<char>,     // None for alignment gaps
    pub secondary_structure: String,  // Translated label, e.g. "Helix"
    pub secondary_structure_code: Option<char>,
    b_factors: Vec<f64>, // Per-atom values in file order; empty when no atom was observed
}

impl Residue {
    pub fn from_record(record: &ResidueRecord, b_factors: Vec<f64>) -> Self {
        Self {
            index: ResidueIndex::Number(record.residue_index),
            insertion_code: record.insertion_code,
            amino_acid: Some(record.amino_acid),
            secondary_structure: record.ss_label.clone(),
            secondary_structure_code: Some(record.ss_code),
            b_factors,
        }
    }

    /// The placeholder inserted wherever an alignment has a `-`.
    pub fn gap() -> Self {
        Self {
            index: ResidueIndex::Gap,
            insertion_code: None,
            amino_acid: None,
            secondary_structure: GAP.to_string(),
            secondary_structure_code: None,
            b_factors: Vec::new(),
        }
    }

    pub fn is_gap(&self) -> bool {
        self.index == ResidueIndex::Gap
    }

    pub fn b_factors(&self) -> &[f64] {
        &self.b_factors
    }

    /// One-letter code as displayed on a glyph; empty for gaps.
    pub fn amino_acid_label(&self) -> String {
        self.amino_acid.map(String::from).unwrap_or_default()
    }
}
