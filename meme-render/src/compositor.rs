//! Compositor: ties font resolution, layout, and drawing together into a
//! single `generate()` call.

use image::RgbImage;
use std::path::{Path, PathBuf};

use meme_core::TextBlock;
use meme_layout::{layout_block, BlockLayout};
use meme_text::{FontHandle, FontResolver};

use crate::canvas::{self, ImageSource};
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::output::OutputStore;
use crate::stroke::draw_stroked;

/// Statistics returned after each composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComposeStats {
    /// Blocks laid out and drawn.
    pub blocks_drawn: u32,
    /// Blocks skipped for having no visible text.
    pub blocks_skipped: u32,
    /// Lines drawn across all blocks.
    pub lines_drawn: u32,
    /// Blocks drawn at the floor size because nothing fit.
    pub blocks_overflowed: u32,
    /// The built-in bitmap font was used.
    pub bitmap_fallback: bool,
}

/// An in-memory composited canvas.
#[derive(Clone, Debug)]
pub struct ComposedMeme {
    pub canvas: RgbImage,
    /// One entry per drawn block, in draw order.
    pub layouts: Vec<BlockLayout>,
    pub stats: ComposeStats,
}

/// A meme written to disk.
#[derive(Clone, Debug)]
pub struct GeneratedMeme {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub stats: ComposeStats,
}

/// Renders caption blocks onto images.
///
/// Holds read-only configuration only; share one across threads freely.
/// Each call resolves its own font and owns its own canvas.
///
/// # Usage
///
/// ```ignore
/// let compositor = Compositor::new(RenderConfig::default());
/// let blocks = vec![TextBlock::new("when the build", PositionId::Top, SizeClass::Large)];
/// let meme = compositor.generate(Path::new("template.jpg"), &blocks)?;
/// println!("{}", meme.path.display());
/// ```
#[derive(Clone, Debug)]
pub struct Compositor {
    fonts: FontResolver,
    output: OutputStore,
}

impl Compositor {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            fonts: config.font_resolver(),
            output: config.output_store(),
        }
    }

    /// Build from explicit parts, e.g. a bitmap-only resolver in tests.
    pub fn with_parts(fonts: FontResolver, output: OutputStore) -> Self {
        Self { fonts, output }
    }

    pub fn fonts(&self) -> &FontResolver {
        &self.fonts
    }

    pub fn output(&self) -> &OutputStore {
        &self.output
    }

    /// Decode an in-memory image into an RGB canvas.
    pub fn load_canvas(bytes: &[u8]) -> Result<RgbImage, RenderError> {
        canvas::decode_canvas(bytes)
    }

    /// Read and decode an image file into an RGB canvas.
    pub fn load_canvas_from_path(path: &Path) -> Result<RgbImage, RenderError> {
        canvas::open_canvas(path)
    }

    /// Draw `blocks` onto `canvas` in order. Never fails.
    pub fn compose(&self, canvas: RgbImage, blocks: &[TextBlock]) -> ComposedMeme {
        let mut font = self.fonts.resolve();
        compose_with(&mut font, canvas, blocks)
    }

    /// Load → compose → save. Returns the written path.
    pub fn generate<'a>(
        &self,
        source: impl Into<ImageSource<'a>>,
        blocks: &[TextBlock],
    ) -> Result<GeneratedMeme, RenderError> {
        let canvas = canvas::load_canvas(source.into())?;
        let (width, height) = canvas.dimensions();

        let composed = self.compose(canvas, blocks);
        let path = self.output.save(&composed.canvas)?;

        log::info!(
            "generated {} ({}x{}, {} block(s), {} line(s))",
            path.display(),
            width,
            height,
            composed.stats.blocks_drawn,
            composed.stats.lines_drawn
        );

        Ok(GeneratedMeme {
            path,
            width,
            height,
            stats: composed.stats,
        })
    }
}

/// Draw `blocks` with an already-resolved font.
///
/// Blank blocks are skipped; the rest are upper-cased, laid out against
/// the canvas size, and drawn in submission order, so a later block paints
/// over an earlier one where they overlap.
pub fn compose_with(font: &mut FontHandle, mut canvas: RgbImage, blocks: &[TextBlock]) -> ComposedMeme {
    let (width, height) = canvas.dimensions();
    let mut layouts = Vec::with_capacity(blocks.len());
    let mut stats = ComposeStats {
        bitmap_fallback: font.is_fallback(),
        ..ComposeStats::default()
    };

    for (index, block) in blocks.iter().enumerate() {
        if block.is_blank() {
            log::debug!("block {index} at {} has no text, skipping", block.position);
            stats.blocks_skipped += 1;
            continue;
        }

        let text = block.text.to_uppercase();
        let layout = layout_block(font, &text, block.position, block.size_class, width, height);

        for line in &layout.lines {
            let mask = font.rasterize(layout.font_size, &line.text);
            draw_stroked(&mut canvas, &mask, line.x, line.y, layout.stroke_width);
        }

        stats.blocks_drawn += 1;
        stats.lines_drawn += layout.lines.len() as u32;
        if layout.overflow {
            stats.blocks_overflowed += 1;
        }
        layouts.push(layout);
    }

    ComposedMeme {
        canvas,
        layouts,
        stats,
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use meme_core::{PositionId, SizeClass};

    const BACKGROUND: Rgb<u8> = Rgb([60, 90, 120]);

    fn bitmap_compositor() -> Compositor {
        Compositor::with_parts(
            FontResolver::bitmap_only(),
            OutputStore::new("unused", 92),
        )
    }

    fn blank_canvas(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, BACKGROUND)
    }

    fn changed_pixels(a: &RgbImage, b: &RgbImage) -> usize {
        a.pixels().zip(b.pixels()).filter(|(p, q)| p != q).count()
    }

    #[test]
    fn test_compositor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Compositor>();
    }

    #[test]
    fn test_no_blocks_leaves_canvas_untouched() {
        let canvas = blank_canvas(200, 100);
        let meme = bitmap_compositor().compose(canvas.clone(), &[]);
        assert_eq!(meme.canvas, canvas);
        assert_eq!(meme.stats.blocks_drawn, 0);
        assert!(meme.layouts.is_empty());
    }

    #[test]
    fn test_blank_blocks_are_skipped() {
        let canvas = blank_canvas(200, 100);
        let blocks = [
            TextBlock::new("", PositionId::Top, SizeClass::Large),
            TextBlock::new("   \t", PositionId::Bottom, SizeClass::Small),
        ];
        let meme = bitmap_compositor().compose(canvas.clone(), &blocks);
        assert_eq!(meme.canvas, canvas);
        assert_eq!(meme.stats.blocks_skipped, 2);
        assert_eq!(meme.stats.blocks_drawn, 0);
    }

    #[test]
    fn test_text_is_drawn_with_stroke_and_fill() {
        let canvas = blank_canvas(400, 300);
        let blocks = [TextBlock::new("hello", PositionId::Top, SizeClass::Medium)];
        let meme = bitmap_compositor().compose(canvas.clone(), &blocks);

        assert_eq!(meme.stats.blocks_drawn, 1);
        assert_eq!(meme.stats.lines_drawn, 1);
        assert!(meme.stats.bitmap_fallback);
        assert!(changed_pixels(&canvas, &meme.canvas) > 0);

        let bright = meme.canvas.pixels().filter(|p| p.0.iter().all(|&c| c > 200)).count();
        let dark = meme.canvas.pixels().filter(|p| p.0.iter().all(|&c| c < 40)).count();
        assert!(bright > 0, "fill missing");
        assert!(dark > 0, "stroke missing");
    }

    #[test]
    fn test_drawing_stays_near_layout() {
        let canvas = blank_canvas(400, 300);
        let blocks = [TextBlock::new("caption", PositionId::Bottom, SizeClass::Small)];
        let meme = bitmap_compositor().compose(canvas.clone(), &blocks);

        let layout = &meme.layouts[0];
        let line = &layout.lines[0];
        let pad = layout.stroke_width as i32 + 1;
        for (x, y, pixel) in meme.canvas.enumerate_pixels() {
            if *pixel == BACKGROUND {
                continue;
            }
            let (x, y) = (x as i32, y as i32);
            assert!(
                x >= line.x - pad
                    && x < line.x + line.width as i32 + pad
                    && y >= line.y - pad
                    && y < line.y + line.height as i32 + pad,
                "pixel ({x}, {y}) drawn outside line box {line:?}"
            );
        }
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        let c = bitmap_compositor();
        let lower = c.compose(
            blank_canvas(300, 200),
            &[TextBlock::new("such wow", PositionId::Left2, SizeClass::Auto)],
        );
        let upper = c.compose(
            blank_canvas(300, 200),
            &[TextBlock::new("SUCH WOW", PositionId::Left2, SizeClass::Auto)],
        );
        assert_eq!(lower.canvas, upper.canvas);
        assert_eq!(lower.layouts[0].lines[0].text, "SUCH WOW");
    }

    #[test]
    fn test_layouts_follow_submission_order() {
        let blocks = [
            TextBlock::new("first", PositionId::Bottom, SizeClass::Small),
            TextBlock::new(" ", PositionId::Top, SizeClass::Small),
            TextBlock::new("second", PositionId::Right3, SizeClass::Small),
        ];
        let meme = bitmap_compositor().compose(blank_canvas(500, 500), &blocks);
        let positions: Vec<_> = meme.layouts.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![PositionId::Bottom, PositionId::Right3]);
    }

    #[test]
    fn test_later_block_paints_over_earlier() {
        let c = bitmap_compositor();
        let a = TextBlock::new("AAAA", PositionId::Top, SizeClass::Medium);
        let b = TextBlock::new("MMMM", PositionId::Top, SizeClass::Medium);

        let together = c.compose(blank_canvas(300, 200), &[a.clone(), b.clone()]);
        let a_first = c.compose(blank_canvas(300, 200), &[a.clone()]);
        let then_b = c.compose(a_first.canvas, &[b.clone()]);
        assert_eq!(together.canvas, then_b.canvas);

        let reversed = c.compose(blank_canvas(300, 200), &[b, a]);
        assert_ne!(together.canvas, reversed.canvas);
    }

    #[test]
    fn test_overflow_is_counted() {
        let text = "LOREM ".repeat(100);
        let meme = bitmap_compositor().compose(
            blank_canvas(100, 60),
            &[TextBlock::new(text, PositionId::Top, SizeClass::Large)],
        );
        assert_eq!(meme.stats.blocks_overflowed, 1);
        assert_eq!(meme.layouts[0].font_size, 14);
    }

    #[test]
    fn test_load_canvas_rejects_garbage() {
        assert!(matches!(
            Compositor::load_canvas(&[0u8; 32]),
            Err(RenderError::Decode(_))
        ));
    }
}
