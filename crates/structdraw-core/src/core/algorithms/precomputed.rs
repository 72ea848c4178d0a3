use super::{Algorithm, AlgorithmError};
use crate::core::models::record::ResidueRecord;
use std::path::Path;
use tracing::debug;

/// Replays output that an algorithm already produced, without launching any process.
///
/// Parsing is delegated to the wrapped adapter, so the text must be in that tool's format.
pub struct Precomputed {
    parser: Box<dyn Algorithm>,
    output: String,
}

impl Precomputed {
    pub fn new(parser: Box<dyn Algorithm>, output: impl Into<String>) -> Self {
        Self {
            parser,
            output: output.into(),
        }
    }
}

impl Algorithm for Precomputed {
    fn name(&self) -> &str {
        self.parser.name()
    }

    fn run(&self, structure_file: &Path) -> Result<String, AlgorithmError> {
        debug!(
            "Using precomputed {} output for {}",
            self.parser.name(),
            structure_file.display()
        );
        Ok(self.output.clone())
    }

    fn process_data(&self, output: &str) -> Vec<ResidueRecord> {
        self.parser.process_data(output)
    }
}
