use crate::error::{CliError, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use structdraw::render::color::{Color, ColorBand};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub algorithm: Option<FileAlgorithmConfig>,
    pub chain: Option<FileChainConfig>,
    pub color: Option<FileColorConfig>,
    pub title: Option<FileTitleConfig>,
    pub background: Option<Color>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileAlgorithmConfig {
    pub name: Option<String>,
    /// One-letter code to label, replacing the algorithm's built-in table.
    pub translation: Option<HashMap<String, String>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileChainConfig {
    pub shape_size: Option<u32>,
    pub split: Option<usize>,
    pub show_amino_code: Option<bool>,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub annotation: Option<BTreeMap<String, bool>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileColorConfig {
    pub mode: Option<String>,
    pub sub_mode: Option<String>,
    pub palette: Option<HashMap<String, Color>>,
    pub bands: Option<Vec<ColorBand>>,
    pub palette_file: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileTitleConfig {
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub position: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }
}
