//! Adapters for the external secondary-structure assignment tools.
//!
//! Each adapter knows how to invoke its tool on a structure file and how to turn the tool's
//! text output into normalized [`ResidueRecord`]s. Parsing never fails: lines that do not fit
//! the expected layout are skipped, so empty or garbage output simply yields no records.

pub mod dssp;
pub mod precomputed;
pub mod stride;

use crate::core::models::record::ResidueRecord;
use crate::core::utils::translation::TranslationTable;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::{debug, warn};

pub use dssp::Dssp;
pub use precomputed::Precomputed;
pub use stride::Stride;

const SUPPORTED_ALGORITHMS: &str = "dssp, mkdssp, stride";

#[derive(Debug, Error)]
pub enum AlgorithmError {
    #[error("Algorithm '{name}' is not supported (supported: {SUPPORTED_ALGORITHMS})")]
    Unsupported { name: String },
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// A secondary-structure assignment tool.
pub trait Algorithm {
    /// Provenance name recorded on every chain built from this tool's output.
    fn name(&self) -> &str;

    /// Runs the tool on `structure_file` and returns its raw standard output.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::Spawn`] if the process cannot be started. A non-zero exit
    /// status is not an error; whatever the tool printed is returned and left to the parser.
    fn run(&self, structure_file: &Path) -> Result<String, AlgorithmError>;

    /// Parses raw tool output into normalized records, in output order.
    fn process_data(&self, output: &str) -> Vec<ResidueRecord>;
}

/// Builds an adapter from its command name (case-insensitive).
///
/// `dssp` and `mkdssp` select the DSSP adapter, `stride` the Stride adapter. The given name is
/// kept as the executable to invoke. `translation` overrides the tool's default code table.
pub fn algorithm_from_name(
    name: &str,
    translation: Option<TranslationTable>,
) -> Result<Box<dyn Algorithm>, AlgorithmError> {
    match name.to_ascii_lowercase().as_str() {
        "dssp" | "mkdssp" => Ok(Box::new(Dssp::new(name, translation))),
        "stride" => Ok(Box::new(Stride::new(name, translation))),
        _ => Err(AlgorithmError::Unsupported {
            name: name.to_string(),
        }),
    }
}

/// Runs `program` with `args`, blocking until it exits, and returns its standard output.
pub(crate) fn run_command(program: &str, args: &[&OsStr]) -> Result<String, AlgorithmError> {
    debug!("Running {} with {} argument(s)", program, args.len());
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| AlgorithmError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        warn!(
            "'{}' exited with {}: {}",
            program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
