use super::mode::{ColorMode, ColorModeError, validate_sub_mode};
use super::palette::{Color, PaletteSpec, categorical, normalize_keys, uppercase_keys};
use crate::core::models::residue::Residue;
use crate::core::utils::identifiers::hydropathy;
use std::collections::HashMap;

const MODE: &str = "aa";
const SUB_MODES: &[&str] = &["hydrophilicity", "single_aa"];

/// Colors residues by amino-acid identity or by side-chain polarity.
#[derive(Debug, Clone)]
pub struct AminoAcidMode {
    sub_mode: &'static str,
    palette: HashMap<String, Color>,
}

impl AminoAcidMode {
    pub fn new(sub_mode: &str, palette: Option<&PaletteSpec>) -> Result<Self, ColorModeError> {
        let sub_mode = validate_sub_mode(MODE, sub_mode, SUB_MODES)?;
        let palette = match palette {
            None if sub_mode == "hydrophilicity" => Self::hydrophilicity_palette(),
            None => Self::single_aa_palette(),
            Some(PaletteSpec::Categorical(map)) if sub_mode == "hydrophilicity" => {
                normalize_keys(map)
            }
            Some(PaletteSpec::Categorical(map)) => uppercase_keys(map),
            Some(PaletteSpec::Bands(_)) => {
                return Err(ColorModeError::PaletteKind {
                    mode: MODE,
                    expected: "categorical",
                });
            }
        };
        Ok(Self { sub_mode, palette })
    }

    pub fn hydrophilicity_palette() -> HashMap<String, Color> {
        categorical(&[
            ("hydrophobic", Color::rgb(255, 0, 0)),
            ("hydrophilic", Color::rgb(0, 255, 255)),
        ])
    }

    pub fn single_aa_palette() -> HashMap<String, Color> {
        uppercase_keys(&categorical(&[
            ("A", Color::rgb(0xF4, 0x43, 0x36)),
            ("R", Color::rgb(0xE9, 0x1E, 0x63)),
            ("N", Color::rgb(0x9C, 0x27, 0xB0)),
            ("D", Color::rgb(0x67, 0x3A, 0xB7)),
            ("C", Color::rgb(0x3F, 0x51, 0xB5)),
            ("E", Color::rgb(0x21, 0x96, 0xF3)),
            ("Q", Color::rgb(0x03, 0xA9, 0xF4)),
            ("G", Color::rgb(0x00, 0xBC, 0xD4)),
            ("H", Color::rgb(0x00, 0x96, 0x88)),
            ("I", Color::rgb(0x4C, 0xAF, 0x50)),
            ("L", Color::rgb(0x8B, 0xC3, 0x4A)),
            ("K", Color::rgb(0xCD, 0xDC, 0x39)),
            ("M", Color::rgb(0xFF, 0xEB, 0x3B)),
            ("F", Color::rgb(0xFF, 0xC1, 0x07)),
            ("P", Color::rgb(0xFF, 0x98, 0x00)),
            ("S", Color::rgb(0xFF, 0x57, 0x22)),
            ("T", Color::rgb(0x79, 0x55, 0x48)),
            ("W", Color::rgb(0x9E, 0x9E, 0x9E)),
            ("Y", Color::rgb(0x60, 0x7D, 0x8B)),
            ("V", Color::rgb(0x00, 0x00, 0x00)),
        ]))
    }

    fn category(&self, amino_acid: char) -> Option<String> {
        match self.sub_mode {
            "hydrophilicity" => hydropathy(amino_acid).map(|h| h.as_str().to_string()),
            // Lowercase letters are DSSP's bridged cysteines, not palette entries.
            _ => Some(amino_acid.to_string()),
        }
    }
}

impl ColorMode for AminoAcidMode {
    fn name(&self) -> &'static str {
        MODE
    }

    fn sub_mode(&self) -> &str {
        self.sub_mode
    }

    fn color_for(&self, residue: &Residue) -> Color {
        residue
            .amino_acid
            .and_then(|aa| self.category(aa))
            .and_then(|key| self.palette.get(&key).copied())
            .unwrap_or(Color::NEUTRAL_GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_amino_acid(aa: char) -> Residue {
        let mut residue = Residue::gap();
        residue.amino_acid = Some(aa);
        residue
    }

    #[test]
    fn hydrophilicity_classifies_canonical_residues() {
        let mode = AminoAcidMode::new("hydrophilicity", None).unwrap();
        assert_eq!(mode.color_for(&with_amino_acid('L')), Color::rgb(255, 0, 0));
        assert_eq!(mode.color_for(&with_amino_acid('K')), Color::rgb(0, 255, 255));
        assert_eq!(mode.color_for(&with_amino_acid('X')), Color::NEUTRAL_GRAY);
    }

    #[test]
    fn single_aa_uses_per_letter_palette() {
        let mode = AminoAcidMode::new("single_aa", None).unwrap();
        assert_eq!(mode.color_for(&with_amino_acid('A')), Color::rgb(0xF4, 0x43, 0x36));
        assert_eq!(mode.color_for(&with_amino_acid('V')), Color::BLACK);
        assert_eq!(mode.color_for(&with_amino_acid('B')), Color::NEUTRAL_GRAY);
    }

    #[test]
    fn single_aa_is_case_sensitive() {
        let mode = AminoAcidMode::new("single_aa", None).unwrap();
        assert_eq!(mode.color_for(&with_amino_acid('a')), Color::NEUTRAL_GRAY);
        assert_eq!(mode.color_for(&with_amino_acid('c')), Color::NEUTRAL_GRAY);
        assert_eq!(mode.color_for(&with_amino_acid('C')), Color::rgb(0x3F, 0x51, 0xB5));

        let custom = PaletteSpec::Categorical(HashMap::from([("w".to_string(), Color::WHITE)]));
        let mode = AminoAcidMode::new("single_aa", Some(&custom)).unwrap();
        assert_eq!(mode.color_for(&with_amino_acid('W')), Color::WHITE);
        assert_eq!(mode.color_for(&with_amino_acid('w')), Color::NEUTRAL_GRAY);
    }

    #[test]
    fn gaps_have_no_amino_acid_and_are_gray() {
        let mode = AminoAcidMode::new("single_aa", None).unwrap();
        assert_eq!(mode.color_for(&Residue::gap()), Color::NEUTRAL_GRAY);
    }
}
