use super::chain::Chain;
use super::record::{BFactorTable, ResidueRecord};
use super::residue::Residue;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Chain '{chain_id}' not found in model '{model_id}' (available: {available})")]
    ChainNotFound {
        chain_id: String,
        model_id: String,
        available: String,
    },
}

/// All chains obtained from one structure file and one secondary-structure algorithm run.
///
/// Chains keep the order in which their first residue appeared in the algorithm output.
#[derive(Debug, Clone, Default)]
pub struct StructureModel {
    model_id: String,
    algorithm: String,
    chains: Vec<Chain>,
    /// Lookup map from chain identifier to its position in `chains`.
    chain_index: HashMap<String, usize>,
}

impl StructureModel {
    /// Groups normalized records into chains.
    ///
    /// # Arguments
    ///
    /// * `model_id` - Identifier of the source structure file.
    /// * `algorithm` - Name of the tool that produced `records`.
    /// * `records` - Parser output, in file order.
    /// * `b_factors` - Optional per-residue B-factor table; residues without an entry receive an
    ///   empty vector.
    /// * `include_only` - Optional list of chain ids to keep. Ids that do not occur in the
    ///   records are ignored.
    pub fn from_records(
        model_id: impl Into<String>,
        algorithm: impl Into<String>,
        records: &[ResidueRecord],
        b_factors: Option<&BFactorTable>,
        include_only: Option<&[String]>,
    ) -> Self {
        let model_id = model_id.into();
        let algorithm = algorithm.into();

        let mut order: Vec<String> = Vec::new();
        let mut grouped: HashMap<String, Vec<Residue>> = HashMap::new();
        for record in records {
            if let Some(filter) = include_only {
                if !filter.iter().any(|id| *id == record.chain_id) {
                    continue;
                }
            }
            let values = b_factors
                .and_then(|table| table.get(&record.key()))
                .cloned()
                .unwrap_or_default();
            grouped
                .entry(record.chain_id.clone())
                .or_insert_with(|| {
                    order.push(record.chain_id.clone());
                    Vec::new()
                })
                .push(Residue::from_record(record, values));
        }

        let mut chains = Vec::with_capacity(order.len());
        let mut chain_index = HashMap::with_capacity(order.len());
        for chain_id in order {
            let residues = grouped.remove(&chain_id).unwrap_or_default();
            debug!(
                "Model '{}': chain '{}' with {} residues",
                model_id,
                chain_id,
                residues.len()
            );
            chain_index.insert(chain_id.clone(), chains.len());
            chains.push(Chain::new(chain_id, algorithm.clone(), model_id.clone(), residues));
        }

        Self {
            model_id,
            algorithm,
            chains,
            chain_index,
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn chain_ids(&self) -> Vec<&str> {
        self.chains.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn into_chains(self) -> Vec<Chain> {
        self.chains
    }

    pub fn chain(&self, chain_id: &str) -> Result<&Chain, ModelError> {
        let idx = self.position(chain_id)?;
        Ok(&self.chains[idx])
    }

    pub fn chain_mut(&mut self, chain_id: &str) -> Result<&mut Chain, ModelError> {
        let idx = self.position(chain_id)?;
        Ok(&mut self.chains[idx])
    }

    fn position(&self, chain_id: &str) -> Result<usize, ModelError> {
        self.chain_index
            .get(chain_id)
            .copied()
            .ok_or_else(|| ModelError::ChainNotFound {
                chain_id: chain_id.to_string(),
                model_id: self.model_id.clone(),
                available: self.chain_ids().join(", "),
            })
    }
}
