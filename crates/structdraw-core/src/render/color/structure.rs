use super::mode::{ColorMode, ColorModeError, validate_sub_mode};
use super::palette::{Color, PaletteSpec, categorical, normalize_keys};
use crate::core::models::residue::Residue;
use std::collections::HashMap;

const MODE: &str = "structure";
const SUB_MODES: &[&str] = &["secondary"];

/// Colors residues by their secondary-structure label (`helix`, `strand`, `other`, `gap`).
#[derive(Debug, Clone)]
pub struct StructureMode {
    sub_mode: &'static str,
    palette: HashMap<String, Color>,
}

impl StructureMode {
    pub fn new(sub_mode: &str, palette: Option<&PaletteSpec>) -> Result<Self, ColorModeError> {
        let sub_mode = validate_sub_mode(MODE, sub_mode, SUB_MODES)?;
        let palette = match palette {
            None => Self::default_palette(),
            Some(PaletteSpec::Categorical(map)) => normalize_keys(map),
            Some(PaletteSpec::Bands(_)) => {
                return Err(ColorModeError::PaletteKind {
                    mode: MODE,
                    expected: "categorical",
                });
            }
        };
        Ok(Self { sub_mode, palette })
    }

    pub fn default_palette() -> HashMap<String, Color> {
        categorical(&[
            ("helix", Color::rgb(0, 128, 0)),
            ("strand", Color::rgb(0, 0, 255)),
            ("other", Color::WHITE),
            ("gap", Color::BLACK),
        ])
    }
}

impl ColorMode for StructureMode {
    fn name(&self) -> &'static str {
        MODE
    }

    fn sub_mode(&self) -> &str {
        self.sub_mode
    }

    fn color_for(&self, residue: &Residue) -> Color {
        self.palette
            .get(&residue.secondary_structure.to_ascii_lowercase())
            .copied()
            .unwrap_or(Color::NEUTRAL_GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(label: &str) -> Residue {
        let mut residue = Residue::gap();
        residue.secondary_structure = label.to_string();
        residue
    }

    #[test]
    fn default_palette_matches_labels_case_insensitively() {
        let mode = StructureMode::new("secondary", None).unwrap();
        assert_eq!(mode.color_for(&labelled("Helix")), Color::rgb(0, 128, 0));
        assert_eq!(mode.color_for(&labelled("STRAND")), Color::rgb(0, 0, 255));
        assert_eq!(mode.color_for(&labelled("Other")), Color::WHITE);
        assert_eq!(mode.color_for(&Residue::gap()), Color::BLACK);
    }

    #[test]
    fn unknown_labels_fall_back_to_gray() {
        let mode = StructureMode::new("secondary", None).unwrap();
        assert_eq!(mode.color_for(&labelled("Spiral")), Color::NEUTRAL_GRAY);
    }

    #[test]
    fn custom_palette_replaces_defaults() {
        let mut map = HashMap::new();
        map.insert("Helix".to_string(), Color::rgb(255, 0, 0));
        let mode = StructureMode::new("secondary", Some(&PaletteSpec::Categorical(map))).unwrap();
        assert_eq!(mode.color_for(&labelled("helix")), Color::rgb(255, 0, 0));
        assert_eq!(mode.color_for(&labelled("Strand")), Color::NEUTRAL_GRAY);
    }
}
