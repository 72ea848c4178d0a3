pub mod align;
pub mod draw;
pub mod records;

use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use std::path::Path;
use structdraw::core::algorithms::{Algorithm, Precomputed, algorithm_from_name};
use structdraw::core::utils::translation::TranslationTable;
use tracing::info;

/// Builds the named algorithm adapter, replaying `saved_output` instead of running the tool
/// when it is given.
pub fn build_algorithm(
    name: &str,
    translation: Option<TranslationTable>,
    saved_output: Option<&Path>,
) -> Result<Box<dyn Algorithm>> {
    let algorithm = algorithm_from_name(name, translation)?;
    let Some(path) = saved_output else {
        return Ok(algorithm);
    };
    info!("Using saved {} output from {:?}", name, path);
    let output = std::fs::read_to_string(path)?;
    Ok(Box::new(Precomputed::new(algorithm, output)))
}

pub fn progress_handler(quiet: bool) -> CliProgressHandler {
    if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    }
}
