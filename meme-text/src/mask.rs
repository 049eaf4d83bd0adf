//! Coverage mask: CPU-side 8-bit alpha buffer for one rendered line.
//!
//! Glyph bitmaps are blitted into the mask at their ink position. The mask
//! carries its own origin (`left`, `top`) in line coordinates, the same
//! space [`BoundingBox`] uses, so a caller drawing a line at `(x, y)` puts
//! mask pixel `(col, row)` at `(x + left + col, y + top + row)`.
//!
//! Overlapping glyphs combine with `max`, which keeps kerned pairs from
//! doubling their shared edge.

use crate::measure::BoundingBox;

/// 8-bit coverage for one line of text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverageMask {
    /// X of the first column in line coordinates.
    pub left: i32,
    /// Y of the first row in line coordinates.
    pub top: i32,
    pub width: u32,
    pub height: u32,
    /// Row-major coverage, `width * height` bytes.
    pub data: Vec<u8>,
}

impl CoverageMask {
    /// Zeroed mask covering `bounds`.
    pub fn new(bounds: BoundingBox) -> Self {
        let width = bounds.width();
        let height = bounds.height();
        Self {
            left: bounds.x0,
            top: bounds.y0,
            width,
            height,
            data: vec![0u8; (width as usize) * (height as usize)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.left,
            self.top,
            self.left + self.width as i32,
            self.top + self.height as i32,
        )
    }

    /// Coverage at a point in line coordinates (0 outside the mask).
    pub fn get(&self, x: i32, y: i32) -> u8 {
        let col = x - self.left;
        let row = y - self.top;
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return 0;
        }
        self.data[row as usize * self.width as usize + col as usize]
    }

    /// Number of pixels with any coverage.
    pub fn covered_pixels(&self) -> usize {
        self.data.iter().filter(|&&a| a > 0).count()
    }

    /// Blit a glyph bitmap whose top-left ink pixel sits at `(left, top)`.
    ///
    /// Handles both alpha-only (1 byte/pixel) and RGBA (4 bytes/pixel,
    /// alpha channel used). Pixels outside the mask are clipped.
    pub fn blit(&mut self, left: i32, top: i32, width: u32, height: u32, bitmap: &[u8]) {
        let expected_rgba = (width as usize) * (height as usize) * 4;
        let expected_alpha = (width as usize) * (height as usize);

        let is_rgba = bitmap.len() >= expected_rgba && expected_rgba > 0;
        if !is_rgba && bitmap.len() < expected_alpha {
            log::warn!(
                "glyph bitmap too short: {} bytes for {}x{}",
                bitmap.len(),
                width,
                height
            );
            return;
        }

        for row in 0..height {
            let dst_y = top + row as i32 - self.top;
            if dst_y < 0 || dst_y >= self.height as i32 {
                continue;
            }
            for col in 0..width {
                let dst_x = left + col as i32 - self.left;
                if dst_x < 0 || dst_x >= self.width as i32 {
                    continue;
                }

                let src_idx = (row * width + col) as usize;
                let alpha = if is_rgba {
                    bitmap[src_idx * 4 + 3]
                } else {
                    bitmap[src_idx]
                };

                let dst_idx = dst_y as usize * self.width as usize + dst_x as usize;
                self.data[dst_idx] = self.data[dst_idx].max(alpha);
            }
        }
    }
}

// ===================================================================
// Tests
// ===================================================================
