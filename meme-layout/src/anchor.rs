//! Anchor resolution: from a named position to per-line pixel origins.
//!
//! Each [`PositionId`] maps to a fixed [`Geometry`]: an anchor point as a
//! fraction of the image size plus the alignment of the block against it.
//!
//! ```text
//!            top (0.50, 0.05)
//!   left_1 (0.05, 0.20)          right_1 (0.95, 0.20)
//!   left_2 (0.05, 0.40)          right_2 (0.95, 0.40)
//!   left_3 (0.05, 0.60)          right_3 (0.95, 0.60)
//!   left_4 (0.05, 0.80)          right_4 (0.95, 0.80)
//!           bottom (0.50, 0.95)
//! ```
//!
//! Vertical placement clamps the whole block into `[5, h - block - 5]`.
//! Horizontal placement clamps every line on its own into
//! `[margin, w - line - margin]` with `margin = 5%` of the width.

use meme_core::{HAlign, PositionId, VAlign};
use meme_text::Measure;

use crate::fit::line_spacing;

/// Minimum distance between a block and the top/bottom image edge.
pub const EDGE_PADDING: i32 = 5;
const MARGIN_RATIO: f64 = 0.05;

/// Where a block hangs off the image, independent of image size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Anchor x as a fraction of image width.
    pub x_ratio: f64,
    /// Anchor y as a fraction of image height.
    pub y_ratio: f64,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

impl Geometry {
    const fn new(x_ratio: f64, y_ratio: f64, h_align: HAlign, v_align: VAlign) -> Self {
        Self {
            x_ratio,
            y_ratio,
            h_align,
            v_align,
        }
    }

    /// Anchor point in pixels.
    pub fn anchor_point(&self, image_width: u32, image_height: u32) -> (i32, i32) {
        (
            (self.x_ratio * f64::from(image_width)) as i32,
            (self.y_ratio * f64::from(image_height)) as i32,
        )
    }
}

/// Fixed anchor table lookup.
pub fn resolve(position: PositionId) -> Geometry {
    use HAlign::{Center, Left, Right};
    use VAlign::{Bottom, Top};

    match position {
        PositionId::Top => Geometry::new(0.50, 0.05, Center, Top),
        PositionId::Left1 => Geometry::new(0.05, 0.20, Left, Top),
        PositionId::Left2 => Geometry::new(0.05, 0.40, Left, Top),
        PositionId::Left3 => Geometry::new(0.05, 0.60, Left, Top),
        PositionId::Left4 => Geometry::new(0.05, 0.80, Left, Top),
        PositionId::Right1 => Geometry::new(0.95, 0.20, Right, Top),
        PositionId::Right2 => Geometry::new(0.95, 0.40, Right, Top),
        PositionId::Right3 => Geometry::new(0.95, 0.60, Right, Top),
        PositionId::Right4 => Geometry::new(0.95, 0.80, Right, Top),
        PositionId::Bottom => Geometry::new(0.50, 0.95, Center, Bottom),
    }
}

/// A wrapped line with its measured ink extents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedLine {
    pub text: String,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

/// Measure every line at the final size.
pub fn measure_lines<M: Measure + ?Sized>(
    measure: &mut M,
    lines: &[String],
    font_size: u32,
) -> Vec<RenderedLine> {
    lines
        .iter()
        .map(|line| {
            let bounds = measure.measure(font_size, line);
            RenderedLine {
                text: line.clone(),
                pixel_width: bounds.width(),
                pixel_height: bounds.height(),
            }
        })
        .collect()
}

/// Total height of stacked lines, using the final-layout spacing.
pub fn block_height(lines: &[RenderedLine], font_size: u32) -> u32 {
    let gaps = lines.len().saturating_sub(1) as u32;
    lines.iter().map(|l| l.pixel_height).sum::<u32>() + line_spacing(font_size) * gaps
}

/// Horizontal margin for an image of this width.
pub fn side_margin(image_width: u32) -> i32 {
    (f64::from(image_width) * MARGIN_RATIO) as i32
}

/// Per-line `(x, y)` origins, top to bottom.
pub fn place(
    geometry: &Geometry,
    lines: &[RenderedLine],
    font_size: u32,
    image_width: u32,
    image_height: u32,
) -> Vec<(i32, i32)> {
    let spacing = line_spacing(font_size) as i32;
    let total = block_height(lines, font_size) as i32;
    let (base_x, base_y) = geometry.anchor_point(image_width, image_height);

    let start_y = match geometry.v_align {
        VAlign::Top => base_y,
        VAlign::Middle => base_y - total / 2,
        VAlign::Bottom => base_y - total,
    };
    let mut y = start_y
        .min(image_height as i32 - total - EDGE_PADDING)
        .max(EDGE_PADDING);

    let margin = side_margin(image_width);
    let mut origins = Vec::with_capacity(lines.len());
    for line in lines {
        let line_width = line.pixel_width as i32;
        let x = match geometry.h_align {
            HAlign::Left => base_x,
            HAlign::Center => base_x - line_width / 2,
            HAlign::Right => base_x - line_width,
        };
        let x = x.min(image_width as i32 - line_width - margin).max(margin);

        origins.push((x, y));
        y += line.pixel_height as i32 + spacing;
    }
    origins
}

// ===================================================================
// Tests
// ===================================================================
