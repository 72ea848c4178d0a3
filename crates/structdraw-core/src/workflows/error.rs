use crate::core::algorithms::AlgorithmError;
use crate::core::io::alignment::AlignmentError;
use crate::core::io::detect::DetectError;
use crate::core::models::chain::ChainError;
use crate::core::models::model::ModelError;
use crate::render::color::ColorModeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Algorithm error: {0}")]
    Algorithm(#[from] AlgorithmError),

    #[error("Structure file error: {0}")]
    Detect(#[from] DetectError),

    #[error("Failed to read B-factors from '{path}': {source}")]
    BFactors {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Alignment file error: {0}")]
    Alignment(#[from] AlignmentError),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Color mode error: {0}")]
    ColorMode(#[from] ColorModeError),

    #[error("Failed to write '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Nothing to draw: no chains were selected")]
    NoChains,
}
