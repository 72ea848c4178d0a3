use super::residue::Residue;
use thiserror::Error;

/// Character that marks a gap column in an aligned sequence.
pub const ALIGNMENT_GAP: char = '-';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error(
        "Aligned sequence for chain '{chain_id}' has {found} non-gap positions, but the chain has {expected} residues"
    )]
    AlignmentLengthMismatch {
        chain_id: String,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub id: String,        // Chain identifier (e.g., "A")
    pub algorithm: String, // Tool that produced the secondary-structure assignment
    pub model_id: String,  // Source structure file
    residues: Vec<Residue>,
}

impl Chain {
    pub fn new(
        id: impl Into<String>,
        algorithm: impl Into<String>,
        model_id: impl Into<String>,
        residues: Vec<Residue>,
    ) -> Self {
        Self {
            id: id.into(),
            algorithm: algorithm.into(),
            model_id: model_id.into(),
            residues,
        }
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Re-threads the residues along a gapped sequence.
    ///
    /// Every non-gap character of `aligned` consumes the next existing residue in order; every
    /// `-` inserts a [`Residue::gap`] placeholder. The characters themselves are not compared
    /// against the residues' amino acids.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::AlignmentLengthMismatch`] when the number of non-gap characters
    /// differs from the current residue count. The chain is left unchanged in that case.
    pub fn align_seq(&mut self, aligned: &str) -> Result<(), ChainError> {
        let found = aligned.chars().filter(|&c| c != ALIGNMENT_GAP).count();
        if found != self.residues.len() {
            return Err(ChainError::AlignmentLengthMismatch {
                chain_id: self.id.clone(),
                expected: self.residues.len(),
                found,
            });
        }

        let mut existing = std::mem::take(&mut self.residues).into_iter();
        self.residues = aligned
            .chars()
            .filter_map(|c| {
                if c == ALIGNMENT_GAP {
                    Some(Residue::gap())
                } else {
                    existing.next()
                }
            })
            .collect();
        Ok(())
    }

    /// Looks up a chain-level attribute by name, as shown in diagram annotations.
    pub fn attribute(&self, key: &str) -> Option<String> {
        match key {
            "chain_id" => Some(self.id.clone()),
            "algorithm" => Some(self.algorithm.clone()),
            "model_id" => Some(self.model_id.clone()),
            "residue_count" => Some(self.residues.len().to_string()),
            _ => None,
        }
    }
}
