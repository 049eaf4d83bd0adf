//! Text engine: measures and rasterizes lines using `cosmic-text`.
//!
//! Each engine owns a private `FontSystem` holding exactly one face, loaded
//! from a file path, plus a `SwashCache` for glyph rasterization. Lines are
//! shaped without wrapping; wrapping is the layout crate's job.
//!
//! Measurements are ink bounds (the union of the glyph bitmap placements),
//! relative to the left pen position at the top of the line box. A small
//! LRU memo keeps auto-fit from re-shaping the same word at the same size.

use cosmic_text::{
    fontdb, Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Stretch, Style, SwashCache,
    SwashContent, Weight,
};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::mask::CoverageMask;
use crate::measure::{BoundingBox, Measure};

/// Distinct `(size, text)` measurements remembered per engine.
const MEASURE_CACHE_CAPACITY: usize = 1024;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("failed to read font file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no usable font face in {}", .0.display())]
    NoFaces(PathBuf),
}

/// One glyph bitmap positioned in line coordinates.
struct GlyphBitmap {
    left: i32,
    top: i32,
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

impl GlyphBitmap {
    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.left,
            self.top,
            self.left + self.width as i32,
            self.top + self.height as i32,
        )
    }
}

/// Single-face text engine wrapping cosmic-text.
pub struct TextEngine {
    font_system: FontSystem,
    swash_cache: SwashCache,
    path: PathBuf,
    family: String,
    weight: Weight,
    style: Style,
    stretch: Stretch,
    measure_cache: LruCache<(u32, String), BoundingBox>,
}

impl TextEngine {
    /// Load the first face of a font file.
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let mut db = fontdb::Database::new();
        db.load_font_file(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (family, weight, style, stretch) = {
            let face = db
                .faces()
                .next()
                .ok_or_else(|| FontError::NoFaces(path.to_path_buf()))?;
            let family = face
                .families
                .first()
                .map(|(name, _)| name.clone())
                .ok_or_else(|| FontError::NoFaces(path.to_path_buf()))?;
            (family, face.weight, face.style, face.stretch)
        };

        log::debug!(
            "TextEngine: loaded {:?} (weight {}) from {}",
            family,
            weight.0,
            path.display()
        );

        let capacity = NonZeroUsize::new(MEASURE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Ok(Self {
            font_system: FontSystem::new_with_locale_and_db(String::from("en-US"), db),
            swash_cache: SwashCache::new(),
            path: path.to_path_buf(),
            family,
            weight,
            style,
            stretch,
            measure_cache: LruCache::new(capacity),
        })
    }

    /// File the face was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Family name reported by the face.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Number of memoized measurements.
    pub fn cached_measurements(&self) -> usize {
        self.measure_cache.len()
    }

    /// Rasterize one line into a coverage mask positioned like [`Measure::measure`].
    pub fn rasterize(&mut self, font_size: u32, text: &str) -> CoverageMask {
        let glyphs = self.shape_line(font_size, text);
        let bounds = glyphs
            .iter()
            .fold(BoundingBox::EMPTY, |acc, g| acc.union(&g.bounds()));

        let mut mask = CoverageMask::new(bounds);
        for g in &glyphs {
            mask.blit(g.left, g.top, g.width, g.height, &g.coverage);
        }
        mask
    }

    /// Shape a single unwrapped line and rasterize every glyph via swash.
    fn shape_line(&mut self, font_size: u32, text: &str) -> Vec<GlyphBitmap> {
        if text.is_empty() {
            return Vec::new();
        }

        let px = font_size.max(1) as f32;
        let metrics = Metrics::new(px, px);
        let attrs = Attrs::new()
            .family(Family::Name(&self.family))
            .weight(self.weight)
            .style(self.style)
            .stretch(self.stretch);

        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut glyphs = Vec::new();
        for run in buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical = glyph.physical((0.0, run.line_y), 1.0);

                let Some(image) = self
                    .swash_cache
                    .get_image(&mut self.font_system, physical.cache_key)
                else {
                    continue; // whitespace or missing glyph
                };

                let placement = image.placement;
                if placement.width == 0 || placement.height == 0 {
                    continue;
                }

                let coverage = match image.content {
                    SwashContent::Mask => image.data.clone(),
                    SwashContent::Color | SwashContent::SubpixelMask => {
                        image.data.chunks_exact(4).map(|px| px[3]).collect()
                    }
                };

                glyphs.push(GlyphBitmap {
                    left: physical.x + placement.left,
                    top: physical.y - placement.top,
                    width: placement.width,
                    height: placement.height,
                    coverage,
                });
            }
        }
        glyphs
    }
}

impl Measure for TextEngine {
    fn measure(&mut self, font_size: u32, text: &str) -> BoundingBox {
        if text.is_empty() {
            return BoundingBox::EMPTY;
        }

        let key = (font_size, text.to_string());
        if let Some(bounds) = self.measure_cache.get(&key) {
            return *bounds;
        }

        let bounds = self
            .shape_line(font_size, text)
            .iter()
            .fold(BoundingBox::EMPTY, |acc, g| acc.union(&g.bounds()));
        self.measure_cache.put(key, bounds);
        bounds
    }
}

// ===================================================================
// Tests
// ===================================================================
