use super::mode::{ColorMode, ColorModeError, validate_sub_mode};
use super::palette::{Color, ColorBand, PaletteSpec};
use crate::core::models::residue::Residue;

const MODE: &str = "b_factor";
const SUB_MODES: &[&str] = &["mean", "median", "lowest", "highest", "a_fold"];

/// How a residue's per-atom B-factors are reduced to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Median,
    Lowest,
    Highest,
}

impl Reduction {
    /// Reduces `values`; an empty slice reduces to `0.0`.
    pub fn apply(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        match self {
            Reduction::Mean => values.iter().sum::<f64>() / values.len() as f64,
            Reduction::Median => {
                let mut sorted = values.to_vec();
                sorted.sort_by(f64::total_cmp);
                let mid = sorted.len() / 2;
                if sorted.len() % 2 == 0 {
                    (sorted[mid - 1] + sorted[mid]) / 2.0
                } else {
                    sorted[mid]
                }
            }
            Reduction::Lowest => values.iter().copied().fold(f64::INFINITY, f64::min),
            Reduction::Highest => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Colors residues by an aggregate of their B-factors, looked up in ordered half-open bands.
///
/// The `a_fold` sub-mode reads predicted-structure confidence scores stored in the B-factor
/// column: it takes the lowest value and uses a 0-100 confidence palette by default.
#[derive(Debug, Clone)]
pub struct BFactorMode {
    sub_mode: &'static str,
    reduction: Reduction,
    bands: Vec<ColorBand>,
}

impl BFactorMode {
    pub fn new(sub_mode: &str, palette: Option<&PaletteSpec>) -> Result<Self, ColorModeError> {
        let sub_mode = validate_sub_mode(MODE, sub_mode, SUB_MODES)?;
        let reduction = match sub_mode {
            "mean" => Reduction::Mean,
            "median" => Reduction::Median,
            "highest" => Reduction::Highest,
            _ => Reduction::Lowest,
        };
        let bands = match palette {
            None if sub_mode == "a_fold" => Self::confidence_bands(),
            None => Self::default_bands(),
            Some(PaletteSpec::Bands(bands)) => bands.clone(),
            Some(PaletteSpec::Categorical(_)) => {
                return Err(ColorModeError::PaletteKind {
                    mode: MODE,
                    expected: "band",
                });
            }
        };
        Ok(Self {
            sub_mode,
            reduction,
            bands,
        })
    }

    pub fn default_bands() -> Vec<ColorBand> {
        vec![
            ColorBand::new(0.0, 20.0, Color::rgb(0, 0, 255)),
            ColorBand::new(20.0, 40.0, Color::rgb(0, 255, 255)),
            ColorBand::new(40.0, 60.0, Color::rgb(0, 255, 0)),
            ColorBand::new(60.0, 80.0, Color::rgb(255, 255, 0)),
            ColorBand::new(80.0, 200.0, Color::rgb(255, 0, 0)),
        ]
    }

    /// pLDDT bands. Like every band these are half-open, so a score of exactly
    /// `100.0` matches none of them and renders neutral gray.
    pub fn confidence_bands() -> Vec<ColorBand> {
        vec![
            ColorBand::new(0.0, 20.0, Color::rgb(0xFF, 0x00, 0x00)),
            ColorBand::new(20.0, 50.0, Color::rgb(0xFF, 0x7F, 0x00)),
            ColorBand::new(50.0, 70.0, Color::rgb(0xFF, 0xFF, 0x00)),
            ColorBand::new(70.0, 90.0, Color::rgb(0xAD, 0xD8, 0xE6)),
            ColorBand::new(90.0, 100.0, Color::rgb(0x00, 0x00, 0xFF)),
        ]
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }
}

impl ColorMode for BFactorMode {
    fn name(&self) -> &'static str {
        MODE
    }

    fn sub_mode(&self) -> &str {
        self.sub_mode
    }

    fn color_for(&self, residue: &Residue) -> Color {
        let value = self.reduction.apply(residue.b_factors());
        self.bands
            .iter()
            .find(|band| band.contains(value))
            .map_or(Color::NEUTRAL_GRAY, |band| band.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::record::ResidueRecord;

    fn with_b_factors(values: &[f64]) -> Residue {
        let record = ResidueRecord {
            residue_index: 1,
            insertion_code: None,
            chain_id: "A".to_string(),
            amino_acid: 'A',
            ss_label: "Helix".to_string(),
            ss_code: 'H',
        };
        Residue::from_record(&record, values.to_vec())
    }

    #[test]
    fn reductions_follow_their_names() {
        let values = [30.0, 10.0, 40.0, 20.0];
        assert_eq!(Reduction::Mean.apply(&values), 25.0);
        assert_eq!(Reduction::Median.apply(&values), 25.0);
        assert_eq!(Reduction::Median.apply(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(Reduction::Lowest.apply(&values), 10.0);
        assert_eq!(Reduction::Highest.apply(&values), 40.0);
        assert_eq!(Reduction::Mean.apply(&[]), 0.0);
    }

    #[test]
    fn a_fold_takes_lowest_value_and_confidence_palette() {
        let mode = BFactorMode::new("a_fold", None).unwrap();
        assert_eq!(mode.reduction(), Reduction::Lowest);
        assert_eq!(mode.color_for(&with_b_factors(&[95.0, 92.0])), Color::rgb(0, 0, 255));
        assert_eq!(mode.color_for(&with_b_factors(&[95.0, 45.0])), Color::rgb(0xFF, 0x7F, 0));
    }

    #[test]
    fn perfect_confidence_falls_outside_the_top_band() {
        let mode = BFactorMode::new("a_fold", None).unwrap();
        assert_eq!(mode.color_for(&with_b_factors(&[99.99])), Color::rgb(0, 0, 255));
        assert_eq!(mode.color_for(&with_b_factors(&[100.0])), Color::NEUTRAL_GRAY);
    }

    #[test]
    fn band_edges_belong_to_the_upper_band() {
        let mode = BFactorMode::new("mean", None).unwrap();
        assert_eq!(mode.color_for(&with_b_factors(&[20.0])), Color::rgb(0, 255, 255));
        assert_eq!(mode.color_for(&with_b_factors(&[19.5])), Color::rgb(0, 0, 255));
    }

    #[test]
    fn empty_vector_aggregates_to_zero_and_out_of_range_is_gray() {
        let mode = BFactorMode::new("highest", None).unwrap();
        assert_eq!(mode.color_for(&with_b_factors(&[])), Color::rgb(0, 0, 255));
        assert_eq!(mode.color_for(&with_b_factors(&[250.0])), Color::NEUTRAL_GRAY);
        assert_eq!(mode.color_for(&with_b_factors(&[-1.0])), Color::NEUTRAL_GRAY);
    }

    #[test]
    fn custom_bands_replace_defaults() {
        let bands = vec![ColorBand::new(0.0, 1000.0, Color::WHITE)];
        let mode = BFactorMode::new("median", Some(&PaletteSpec::Bands(bands))).unwrap();
        assert_eq!(mode.color_for(&with_b_factors(&[500.0])), Color::WHITE);
    }
}
