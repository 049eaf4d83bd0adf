//! Bridge: one caption in, one fully positioned block out.
//!
//! Runs the whole layout pipeline for a single block:
//! resolve → fit → measure → place.

use meme_core::{PositionId, SizeClass};
use meme_text::Measure;

use crate::anchor::{block_height, measure_lines, place, resolve, Geometry};
use crate::fit::fit;

/// A line ready to draw: text plus its pixel origin and ink extents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedLine {
    pub text: String,
    /// Line origin (left pen position, top of the line box).
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Layout of one text block.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockLayout {
    pub position: PositionId,
    pub geometry: Geometry,
    pub font_size: u32,
    pub stroke_width: u32,
    pub lines: Vec<PlacedLine>,
    /// Text did not fit even at the floor size.
    pub overflow: bool,
}

impl BlockLayout {
    /// Total stacked height including inter-line spacing.
    pub fn height(&self) -> u32 {
        match (self.lines.first(), self.lines.last()) {
            (Some(first), Some(last)) => (last.y + last.height as i32 - first.y).max(0) as u32,
            _ => 0,
        }
    }
}

/// Lay out `text` at `position` on an image of the given size.
///
/// `text` is used as-is; callers upper-case and skip blank blocks first.
pub fn layout_block<M: Measure + ?Sized>(
    measure: &mut M,
    text: &str,
    position: PositionId,
    size_class: SizeClass,
    image_width: u32,
    image_height: u32,
) -> BlockLayout {
    let geometry = resolve(position);
    let fitted = fit(measure, text, size_class, image_width, image_height);
    let rendered = measure_lines(measure, &fitted.lines, fitted.font_size);
    let origins = place(
        &geometry,
        &rendered,
        fitted.font_size,
        image_width,
        image_height,
    );

    log::debug!(
        "layout: {} → {} line(s), {}px font, {}px tall",
        position,
        rendered.len(),
        fitted.font_size,
        block_height(&rendered, fitted.font_size)
    );

    let lines = rendered
        .into_iter()
        .zip(origins)
        .map(|(line, (x, y))| PlacedLine {
            text: line.text,
            x,
            y,
            width: line.pixel_width,
            height: line.pixel_height,
        })
        .collect();

    BlockLayout {
        position,
        geometry,
        font_size: fitted.font_size,
        stroke_width: fitted.stroke_width,
        lines,
        overflow: fitted.overflow,
    }
}

// ===================================================================
// Tests
// ===================================================================
