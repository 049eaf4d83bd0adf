//! # meme-layout
//!
//! Turns a caption plus an anchor into positioned lines: wraps words against
//! measured widths, shrinks the font until the block fits its vertical
//! budget, then resolves per-line pixel origins.
//!
//! ## Pipeline
//!
//! ```text
//! (text, PositionId, SizeClass, image w×h)
//!     │
//!     ├── anchor::resolve(position) ──► Geometry
//!     ├── fit::fit(...)             ──► font size, wrapped lines, stroke   (uses wrap::wrap)
//!     ├── anchor::measure_lines     ──► RenderedLine { width, height }
//!     └── anchor::place(...)        ──► (x, y) per line
//!     ▼
//! bridge::BlockLayout { PlacedLine* }
//! ```
//!
//! Every step is a pure function of its inputs and a [`Measure`](meme_text::Measure)
//! implementation. Nothing here fails: oversized text falls back to the
//! floor font size, and out-of-bounds anchors are clamped.

pub mod anchor;
pub mod bridge;
pub mod fit;
pub mod wrap;

pub use anchor::{measure_lines, place, resolve, Geometry, RenderedLine};
pub use bridge::{layout_block, BlockLayout, PlacedLine};
pub use fit::{fit, FitResult, MIN_FONT_SIZE};
pub use wrap::wrap;
