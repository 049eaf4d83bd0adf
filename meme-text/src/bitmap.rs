//! Built-in bitmap font used when no TrueType font can be found.
//!
//! Backed by the pre-rasterized 16px Noto Sans Mono glyphs. The font has a
//! fixed cell size and ignores the requested pixel size, so auto-fit
//! degrades gracefully instead of failing. Only the ASCII range is covered:
//! anything else (Cyrillic included) renders as `?`.

use noto_sans_mono_bitmap::{get_raster, get_raster_width, FontWeight, RasterHeight, RasterizedChar};

use crate::mask::CoverageMask;
use crate::measure::{BoundingBox, Measure};

const WEIGHT: FontWeight = FontWeight::Regular;
const HEIGHT: RasterHeight = RasterHeight::Size16;

/// Fixed-size monospace fallback font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitmapFont;

impl BitmapFont {
    /// Cell height in pixels.
    pub const CELL_HEIGHT: u32 = 16;

    /// Cell width in pixels (same for every glyph).
    pub fn cell_width(&self) -> u32 {
        get_raster_width(WEIGHT, HEIGHT) as u32
    }

    fn glyph(ch: char) -> Option<RasterizedChar> {
        get_raster(ch, WEIGHT, HEIGHT).or_else(|| get_raster('?', WEIGHT, HEIGHT))
    }

    /// Rasterize one line. The mask spans the full cell box of the line.
    pub fn rasterize(&self, text: &str) -> CoverageMask {
        let bounds = self.line_bounds(text);
        let mut mask = CoverageMask::new(bounds);
        let cell = self.cell_width() as i32;

        for (i, ch) in text.chars().enumerate() {
            let Some(glyph) = Self::glyph(ch) else {
                continue;
            };
            let left = i as i32 * cell;
            for (row, pixels) in glyph.raster().iter().enumerate() {
                let width = glyph.width().min(pixels.len());
                mask.blit(left, row as i32, width as u32, 1, &pixels[..width]);
            }
        }

        mask
    }

    /// Cell box of a line: one cell per char, full cell height.
    pub fn line_bounds(&self, text: &str) -> BoundingBox {
        let chars = text.chars().count() as i32;
        if chars == 0 {
            return BoundingBox::EMPTY;
        }
        BoundingBox::new(0, 0, chars * self.cell_width() as i32, Self::CELL_HEIGHT as i32)
    }
}

impl Measure for BitmapFont {
    fn measure(&mut self, _font_size: u32, text: &str) -> BoundingBox {
        self.line_bounds(text)
    }
}

// ===================================================================
// Tests
// ===================================================================
