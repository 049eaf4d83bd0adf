//! Stroked text drawing on an RGB canvas.
//!
//! A line is drawn in two passes from the same coverage mask:
//!
//! ```text
//!   mask ──dilate(r)──▶ outline mask ──blend(black)──▶ canvas
//!   mask ──────────────────────────────blend(white)──▶ canvas
//! ```
//!
//! Dilation takes the maximum coverage over a disc of radius `r`, so the
//! outline extends `r` pixels past the glyph edge in every direction and
//! the fill sits fully inside it.

use image::{Rgb, RgbImage};
use meme_text::{BoundingBox, CoverageMask};

pub const FILL_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
pub const STROKE_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Offsets `(dx, dy)` with `dx² + dy² <= r²`.
fn disc_offsets(radius: u32) -> Vec<(i32, i32)> {
    let r = radius as i32;
    let r2 = r * r;
    let mut offsets = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Grow a mask by `radius` pixels using a disc structuring element.
pub fn dilate(mask: &CoverageMask, radius: u32) -> CoverageMask {
    if radius == 0 || mask.is_empty() {
        return mask.clone();
    }

    let r = radius as i32;
    let src = mask.bounds();
    let mut out = CoverageMask::new(BoundingBox::new(
        src.x0 - r,
        src.y0 - r,
        src.x1 + r,
        src.y1 + r,
    ));
    let offsets = disc_offsets(radius);
    let out_width = out.width as usize;

    for row in 0..mask.height {
        for col in 0..mask.width {
            let alpha = mask.data[(row * mask.width + col) as usize];
            if alpha == 0 {
                continue;
            }
            // Source pixel (col, row) lands at (col + r, row + r) in `out`.
            let cx = col as i32 + r;
            let cy = row as i32 + r;
            for &(dx, dy) in &offsets {
                let idx = (cy + dy) as usize * out_width + (cx + dx) as usize;
                if out.data[idx] < alpha {
                    out.data[idx] = alpha;
                }
            }
        }
    }
    out
}

#[inline]
fn mix(dst: u8, src: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((dst as u32 * (255 - a) + src as u32 * a + 127) / 255) as u8
}

/// Alpha-blend `color` through `mask` onto `canvas`, with the mask's line
/// origin at `(x, y)`. Pixels falling outside the canvas are clipped.
pub fn blend_mask(canvas: &mut RgbImage, mask: &CoverageMask, x: i32, y: i32, color: Rgb<u8>) {
    let (canvas_w, canvas_h) = canvas.dimensions();
    for row in 0..mask.height {
        let py = y + mask.top + row as i32;
        if py < 0 || py >= canvas_h as i32 {
            continue;
        }
        for col in 0..mask.width {
            let px = x + mask.left + col as i32;
            if px < 0 || px >= canvas_w as i32 {
                continue;
            }
            let alpha = mask.data[(row * mask.width + col) as usize];
            if alpha == 0 {
                continue;
            }
            let pixel = canvas.get_pixel_mut(px as u32, py as u32);
            for (channel, &src) in pixel.0.iter_mut().zip(color.0.iter()) {
                *channel = mix(*channel, src, alpha);
            }
        }
    }
}

/// Draw one line: black outline of `stroke_width`, then white fill.
pub fn draw_stroked(
    canvas: &mut RgbImage,
    mask: &CoverageMask,
    x: i32,
    y: i32,
    stroke_width: u32,
) {
    if mask.is_empty() {
        return;
    }
    let outline = dilate(mask, stroke_width);
    blend_mask(canvas, &outline, x, y, STROKE_COLOR);
    blend_mask(canvas, mask, x, y, FILL_COLOR);
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dot() -> CoverageMask {
        let mut mask = CoverageMask::new(BoundingBox::new(0, 0, 1, 1));
        mask.data[0] = 255;
        mask
    }

    #[test]
    fn test_disc_offsets() {
        assert_eq!(disc_offsets(0), vec![(0, 0)]);
        // Radius 1: centre plus the four neighbours.
        assert_eq!(disc_offsets(1).len(), 5);
        // Radius 2: 13 lattice points inside the circle.
        assert_eq!(disc_offsets(2).len(), 13);
    }

    #[test]
    fn test_dilate_zero_is_identity() {
        let mask = dot();
        assert_eq!(dilate(&mask, 0), mask);
    }

    #[test]
    fn test_dilate_grows_bounds() {
        let out = dilate(&dot(), 2);
        assert_eq!(out.bounds(), BoundingBox::new(-2, -2, 3, 3));
        assert_eq!(out.covered_pixels(), 13);
        assert_eq!(out.get(0, 0), 255);
        assert_eq!(out.get(2, 0), 255);
        assert_eq!(out.get(2, 2), 0, "corner is outside the disc");
    }

    #[test]
    fn test_dilate_keeps_max_coverage() {
        let mut mask = CoverageMask::new(BoundingBox::new(0, 0, 2, 1));
        mask.data.copy_from_slice(&[100, 200]);
        let out = dilate(&mask, 1);
        assert_eq!(out.get(0, 0), 200);
        assert_eq!(out.get(-1, 0), 100);
        assert_eq!(out.get(2, 0), 200);
    }

    #[test]
    fn test_mix() {
        assert_eq!(mix(0, 255, 255), 255);
        assert_eq!(mix(200, 0, 0), 200);
        assert_eq!(mix(0, 255, 128), 128);
    }

    #[test]
    fn test_blend_clips_to_canvas() {
        let mut canvas = RgbImage::new(2, 2);
        let mut mask = CoverageMask::new(BoundingBox::new(0, 0, 3, 3));
        mask.data.fill(255);
        blend_mask(&mut canvas, &mask, -1, -1, FILL_COLOR);
        for pixel in canvas.pixels() {
            assert_eq!(pixel.0, [255, 255, 255]);
        }
    }

    #[test]
    fn test_blend_uses_mask_origin() {
        let mut canvas = RgbImage::new(10, 10);
        let mut mask = CoverageMask::new(BoundingBox::new(2, 3, 3, 4));
        mask.data[0] = 255;
        blend_mask(&mut canvas, &mask, 4, 4, FILL_COLOR);
        assert_eq!(canvas.get_pixel(6, 7).0, [255, 255, 255]);
        assert_eq!(canvas.get_pixel(4, 4).0, [0, 0, 0]);
    }

    #[test]
    fn test_draw_stroked_outline_under_fill() {
        let mut canvas = RgbImage::from_pixel(20, 20, Rgb([100, 100, 100]));
        draw_stroked(&mut canvas, &dot(), 10, 10, 3);
        assert_eq!(canvas.get_pixel(10, 10).0, [255, 255, 255], "fill on top");
        assert_eq!(canvas.get_pixel(13, 10).0, [0, 0, 0], "outline edge");
        assert_eq!(canvas.get_pixel(10, 7).0, [0, 0, 0]);
        assert_eq!(canvas.get_pixel(14, 10).0, [100, 100, 100], "beyond radius");
    }

    #[test]
    fn test_draw_empty_mask_is_noop() {
        let mut canvas = RgbImage::from_pixel(4, 4, Rgb([9, 9, 9]));
        let before = canvas.clone();
        draw_stroked(&mut canvas, &CoverageMask::default(), 0, 0, 5);
        assert_eq!(canvas, before);
    }
}
