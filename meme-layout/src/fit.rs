//! Auto-fit: shrink the font until a wrapped block fits its height budget.
//!
//! The search starts at the size class's base size and steps down by 2px to
//! a floor of 14px, accepting the first size whose pre-check height fits in
//! 35% of the image height. Lines may be at most 45% of the image width.
//!
//! The pre-check counts a `0.15 × size` gap after *every* line, while the
//! final placement pass spaces lines by `0.12 × size` (see
//! [`line_spacing`]). The two constants are deliberately different; merging
//! them changes which sizes get accepted.

use meme_core::SizeClass;
use meme_text::Measure;

use crate::wrap::wrap;

/// Smallest font size the search will try.
pub const MIN_FONT_SIZE: u32 = 14;
/// Decrement between attempts (pixels).
pub const SIZE_STEP: u32 = 2;

const MAX_WIDTH_RATIO: f64 = 0.45;
const MAX_HEIGHT_RATIO: f64 = 0.35;
const FIT_GAP_RATIO: f64 = 0.15;
const LINE_SPACING_RATIO: f64 = 0.12;
const STROKE_RATIO: f64 = 0.08;
const MIN_STROKE_WIDTH: u32 = 2;

/// Outcome of the size search for one block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FitResult {
    pub font_size: u32,
    /// Lines wrapped at `font_size`. Never empty.
    pub lines: Vec<String>,
    pub stroke_width: u32,
    /// True when no size met the budget and the floor was used anyway.
    pub overflow: bool,
}

/// Widest a line may be on an image of this width.
pub fn max_line_width(image_width: u32) -> u32 {
    (f64::from(image_width) * MAX_WIDTH_RATIO) as u32
}

/// Tallest a block may be on an image of this height.
pub fn max_block_height(image_height: u32) -> f64 {
    f64::from(image_height) * MAX_HEIGHT_RATIO
}

/// Gap between stacked lines in the final layout.
pub fn line_spacing(font_size: u32) -> u32 {
    (f64::from(font_size) * LINE_SPACING_RATIO) as u32
}

/// Outline width for a given font size, never below 2px.
pub fn stroke_width(font_size: u32) -> u32 {
    ((f64::from(font_size) * STROKE_RATIO).round() as u32).max(MIN_STROKE_WIDTH)
}

/// Height used to accept or reject a size: every line's ink height plus a
/// `0.15 × size` gap per line.
pub fn precheck_height<M: Measure + ?Sized>(
    measure: &mut M,
    lines: &[String],
    font_size: u32,
) -> u32 {
    let gap = (f64::from(font_size) * FIT_GAP_RATIO) as u32;
    lines
        .iter()
        .map(|line| measure.measure(font_size, line).height() + gap)
        .sum()
}

/// Find the largest size (in 2px steps from the base) that fits the budget.
pub fn fit<M: Measure + ?Sized>(
    measure: &mut M,
    text: &str,
    size_class: SizeClass,
    image_width: u32,
    image_height: u32,
) -> FitResult {
    let base_size = size_class.base_size(image_height);
    let max_width = max_line_width(image_width);
    let budget = max_block_height(image_height);

    let mut font_size = base_size;
    while font_size >= MIN_FONT_SIZE {
        let lines = wrap(measure, text, font_size, max_width);
        let height = precheck_height(measure, &lines, font_size);
        if f64::from(height) <= budget {
            log::debug!(
                "fit: {} line(s) at {}px (base {}px, {}px of {:.0}px)",
                lines.len(),
                font_size,
                base_size,
                height,
                budget
            );
            return FitResult {
                font_size,
                lines,
                stroke_width: stroke_width(font_size),
                overflow: false,
            };
        }
        font_size -= SIZE_STEP;
    }

    log::debug!(
        "fit: nothing from {}px down fits {:.0}px, using {}px",
        base_size,
        budget,
        MIN_FONT_SIZE
    );
    FitResult {
        font_size: MIN_FONT_SIZE,
        lines: wrap(measure, text, MIN_FONT_SIZE, max_width),
        stroke_width: stroke_width(MIN_FONT_SIZE),
        overflow: true,
    }
}

// ===================================================================
// Tests
// ===================================================================
