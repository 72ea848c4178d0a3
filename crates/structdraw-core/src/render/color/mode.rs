use super::amino::AminoAcidMode;
use super::bfactor::BFactorMode;
use super::palette::{Color, PaletteSpec};
use super::structure::StructureMode;
use crate::core::models::residue::Residue;
use thiserror::Error;

pub const AVAILABLE_MODES: &[&str] = &["structure", "aa", "b_factor"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorModeError {
    #[error("Unknown color mode '{mode}' (available: {available})")]
    UnknownMode { mode: String, available: String },
    #[error("Unknown sub-mode '{sub_mode}' for color mode '{mode}' (available: {available})")]
    UnknownSubMode {
        mode: &'static str,
        sub_mode: String,
        available: String,
    },
    #[error("Color mode '{mode}' expects a {expected} palette")]
    PaletteKind {
        mode: &'static str,
        expected: &'static str,
    },
}

/// A strategy that assigns a fill color to every residue of a chain.
pub trait ColorMode {
    fn name(&self) -> &'static str;

    fn sub_mode(&self) -> &str;

    fn color_for(&self, residue: &Residue) -> Color;
}

/// Builds the coloring strategy for `(mode, sub_mode)`, both case-insensitive.
///
/// `palette` replaces the mode's built-in palette; it must be categorical for `structure` and
/// `aa`, and a band list for `b_factor`.
pub fn create_mode(
    mode: &str,
    sub_mode: &str,
    palette: Option<&PaletteSpec>,
) -> Result<Box<dyn ColorMode>, ColorModeError> {
    match mode.to_ascii_lowercase().as_str() {
        "structure" => Ok(Box::new(StructureMode::new(sub_mode, palette)?)),
        "aa" => Ok(Box::new(AminoAcidMode::new(sub_mode, palette)?)),
        "b_factor" => Ok(Box::new(BFactorMode::new(sub_mode, palette)?)),
        _ => Err(ColorModeError::UnknownMode {
            mode: mode.to_string(),
            available: AVAILABLE_MODES.join(", "),
        }),
    }
}

/// Checks `sub_mode` against the allowed set of `mode`, returning the canonical spelling.
pub(crate) fn validate_sub_mode(
    mode: &'static str,
    sub_mode: &str,
    available: &[&'static str],
) -> Result<&'static str, ColorModeError> {
    let lowered = sub_mode.to_ascii_lowercase();
    available
        .iter()
        .find(|candidate| **candidate == lowered)
        .copied()
        .ok_or_else(|| ColorModeError::UnknownSubMode {
            mode,
            sub_mode: sub_mode.to_string(),
            available: available.join(", "),
        })
}
