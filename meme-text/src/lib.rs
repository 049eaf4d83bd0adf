//! # meme-text
//!
//! Font resolution, text measurement and glyph rasterization for the meme
//! engine.
//!
//! ## Architecture
//!
//! ```text
//! FontResolver (ordered candidate paths)
//!     │ resolve()
//!     ▼
//! FontHandle ──┬── Outline(TextEngine)   cosmic-text FontSystem + SwashCache
//!              └── Bitmap(BitmapFont)    built-in 16px ASCII fallback
//!     │
//!     ├── measure(size, text)   ──► BoundingBox   (Measure trait)
//!     └── rasterize(size, text) ──► CoverageMask  (8-bit alpha, one line)
//! ```
//!
//! - **`fonts`**: candidate path list, [`FontResolver`], [`FontHandle`].
//! - **`engine`**: TrueType/OpenType measurement and rasterization.
//! - **`bitmap`**: fixed-size fallback font.
//! - **`mask`**: [`CoverageMask`], the per-line alpha buffer.
//! - **`measure`**: [`BoundingBox`] and the [`Measure`] trait.

pub mod bitmap;
pub mod engine;
pub mod fonts;
pub mod mask;
pub mod measure;

// Re-exports for ergonomic use.
pub use bitmap::BitmapFont;
pub use engine::{FontError, TextEngine};
pub use fonts::{FontHandle, FontResolver, DEFAULT_FONT_PATHS};
pub use mask::CoverageMask;
pub use measure::{BoundingBox, Measure};
