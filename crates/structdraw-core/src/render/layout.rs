use super::color::ColorMode;
use super::glyph::{Glyph, GlyphClass, assign_position_tags};
use super::surface::{DrawSurface, Pixel, TextMeasure};
use crate::core::models::chain::Chain;
use std::ops::Range;
use tracing::trace;

/// `count` glyphs of `size` pixels, saturating at `i32::MAX`.
fn pixels(count: usize, size: i32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX).saturating_mul(size)
}

/// How a residue range is broken into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitInfo {
    pub full_chunk_size: usize,
    /// Glyphs on the final partial row; `0` when every row is full.
    pub last_chunk_size: usize,
    pub split_levels: usize,
}

impl SplitInfo {
    pub fn compute(count: usize, split: Option<usize>) -> Self {
        match split {
            None | Some(0) => Self {
                full_chunk_size: count,
                last_chunk_size: 0,
                split_levels: 1,
            },
            Some(split) => {
                let split_levels = count.div_ceil(split);
                Self {
                    full_chunk_size: split,
                    last_chunk_size: count.saturating_sub(split * split_levels.saturating_sub(1)),
                    split_levels,
                }
            }
        }
    }

    /// Glyph index ranges of every row, full rows first.
    ///
    /// A partial last row equal in length to a full row is still emitted once, as a full row.
    pub fn rows(&self) -> Vec<Range<usize>> {
        let partial = self.last_chunk_size > 0 && self.last_chunk_size < self.full_chunk_size;
        let full_rows = if partial {
            self.split_levels - 1
        } else {
            self.split_levels
        };
        let mut rows: Vec<Range<usize>> = (0..full_rows)
            .map(|level| {
                let start = level * self.full_chunk_size;
                start..start + self.full_chunk_size
            })
            .collect();
        if partial {
            let start = full_rows * self.full_chunk_size;
            rows.push(start..start + self.last_chunk_size);
        }
        rows
    }
}

/// The glyph rows of one chain.
#[derive(Debug, Clone)]
pub struct ResidueTrack {
    glyphs: Vec<Glyph>,
    shape_size: i32,
    split_info: SplitInfo,
}

impl ResidueTrack {
    /// Builds one glyph per residue in `range` (clamped to the chain), colored by `color_mode`.
    pub fn new(
        chain: &Chain,
        range: Range<usize>,
        shape_size: i32,
        split: Option<usize>,
        show_amino_code: bool,
        color_mode: &dyn ColorMode,
        measure: &(impl TextMeasure + ?Sized),
    ) -> Self {
        let end = range.end.min(chain.len());
        let start = range.start.min(end);
        let residues = &chain.residues()[start..end];

        let classes: Vec<GlyphClass> = residues
            .iter()
            .map(|r| GlyphClass::from_label(&r.secondary_structure))
            .collect();
        let tags = assign_position_tags(&classes);
        let glyphs: Vec<Glyph> = residues
            .iter()
            .zip(tags)
            .map(|(residue, tag)| {
                Glyph::new(
                    residue,
                    tag,
                    shape_size,
                    color_mode.color_for(residue),
                    show_amino_code,
                    measure,
                )
            })
            .collect();
        trace!(
            "Chain '{}': {} glyphs for residues {}..{}",
            chain.id,
            glyphs.len(),
            start,
            end
        );

        Self {
            split_info: SplitInfo::compute(glyphs.len(), split),
            glyphs,
            shape_size,
        }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn split_info(&self) -> SplitInfo {
        self.split_info
    }

    pub fn width(&self) -> i32 {
        let margin = self.shape_size.saturating_mul(2);
        pixels(self.split_info.full_chunk_size, self.shape_size).saturating_add(margin)
    }

    pub fn height(&self) -> i32 {
        pixels(self.split_info.split_levels, self.shape_size).saturating_add(self.shape_size)
    }

    /// Draws the rows top to bottom, each starting one glyph size right of `x_offset`.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, x_offset: i32, y_offset: i32) {
        let padding = self.shape_size;
        let mut y = y_offset;
        for row in self.split_info.rows() {
            let glyphs = &self.glyphs[row];
            for (column, glyph) in glyphs.iter().enumerate() {
                let x = column as i32 * self.shape_size + padding + x_offset;
                glyph.draw(Pixel::new(x, y), surface);
            }
            y += glyphs.iter().map(Glyph::height).max().unwrap_or(0);
        }
    }
}
