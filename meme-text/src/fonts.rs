//! Font resolution: pick the first usable font from an ordered path list.
//!
//! The candidate list is process-wide, read-only configuration: build a
//! [`FontResolver`] once and share it (it is `Clone + Send + Sync`, the
//! paths live behind an `Arc`). Each generation call asks it for a fresh
//! [`FontHandle`]; nothing is cached across calls.
//!
//! ```text
//! FontResolver
//!   └── candidates: Arc<[PathBuf]>
//!         │ resolve()
//!         ├── first path that exists and parses ──► FontHandle::Outline
//!         └── nothing usable                     ──► FontHandle::Bitmap
//! ```
//!
//! Missing fonts are never an error. They only degrade output quality:
//! the bitmap fallback is ASCII-only and fixed-size.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::bitmap::BitmapFont;
use crate::engine::TextEngine;
use crate::mask::CoverageMask;
use crate::measure::{BoundingBox, Measure};

/// Bold sans faces with Cyrillic coverage, in order of preference.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/liberation-fonts/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

// ── Font handle ─────────────────────────────────────────────────────

/// A font ready for measuring and drawing.
pub enum FontHandle {
    /// Scalable face loaded from disk.
    Outline(Box<TextEngine>),
    /// Built-in fixed-size fallback.
    Bitmap(BitmapFont),
}

impl FontHandle {
    /// Handle for the built-in bitmap font.
    pub fn fallback() -> Self {
        Self::Bitmap(BitmapFont)
    }

    /// True when running on the built-in bitmap font.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Bitmap(_))
    }

    /// Rasterize one line, positioned like [`Measure::measure`].
    pub fn rasterize(&mut self, font_size: u32, text: &str) -> CoverageMask {
        match self {
            Self::Outline(engine) => engine.rasterize(font_size, text),
            Self::Bitmap(font) => font.rasterize(text),
        }
    }
}

impl Measure for FontHandle {
    fn measure(&mut self, font_size: u32, text: &str) -> BoundingBox {
        match self {
            Self::Outline(engine) => engine.measure(font_size, text),
            Self::Bitmap(font) => font.measure(font_size, text),
        }
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outline(engine) => f
                .debug_struct("Outline")
                .field("family", &engine.family())
                .field("path", &engine.path())
                .finish(),
            Self::Bitmap(_) => f.write_str("Bitmap"),
        }
    }
}

impl fmt::Display for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outline(engine) => {
                write!(f, "{} ({})", engine.family(), engine.path().display())
            }
            Self::Bitmap(_) => f.write_str("built-in bitmap font"),
        }
    }
}

// ── Resolver ────────────────────────────────────────────────────────

/// Ordered list of candidate font files.
#[derive(Clone, Debug)]
pub struct FontResolver {
    candidates: Arc<[PathBuf]>,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_PATHS.iter().copied())
    }
}

impl FontResolver {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: paths.into_iter().map(Into::<PathBuf>::into).collect(),
        }
    }

    /// Resolver with no candidates; always yields the bitmap font.
    pub fn bitmap_only() -> Self {
        Self::new(std::iter::empty::<PathBuf>())
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// First candidate that exists on disk.
    pub fn find_font_path(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.exists())
    }

    /// Open the first candidate that exists and parses as a font.
    ///
    /// A candidate that exists but fails to load is logged and skipped.
    /// With nothing usable, returns the built-in bitmap font.
    pub fn resolve(&self) -> FontHandle {
        for path in self.candidates.iter().filter(|p| p.exists()) {
            match TextEngine::from_file(path) {
                Ok(engine) => {
                    log::debug!("FontResolver: using {}", path.display());
                    return FontHandle::Outline(Box::new(engine));
                }
                Err(e) => log::warn!("FontResolver: skipping candidate: {e}"),
            }
        }

        log::warn!(
            "FontResolver: none of {} candidate fonts usable, using built-in bitmap font",
            self.candidates.len()
        );
        FontHandle::fallback()
    }
}

// ===================================================================
// Tests
// ===================================================================
