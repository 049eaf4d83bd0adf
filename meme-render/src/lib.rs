//! # meme-render
//!
//! CPU compositor for meme captions, built on the `image` crate.
//!
//! ## Architecture
//!
//! ```text
//!  ImageSource (path | bytes)
//!       │  canvas::load_canvas()        ◀─── decode + convert to RGB8
//!       ▼
//!  Compositor::compose(canvas, blocks)
//!       │  for each non-blank block, in order:
//!       │    meme_layout::layout_block()  ◀─── fit, wrap, place
//!       │    FontHandle::rasterize()      ◀─── coverage per line
//!       │    stroke::draw_stroked()       ◀─── black outline, white fill
//!       ▼
//!  OutputStore::save()                  ◀─── meme_<id>.jpg, optimized JPEG q92
//! ```
//!
//! ## Crate modules
//!
//! - [`canvas`]: source image decoding
//! - [`compositor`]: per-call orchestration
//! - [`config`]: render configuration (JSON)
//! - [`error`]: [`RenderError`]
//! - [`output`]: JPEG encoding and unique output paths
//! - [`stroke`]: mask dilation and alpha blending

pub mod canvas;
pub mod compositor;
pub mod config;
pub mod error;
pub mod output;
pub mod stroke;

// Re-exports for convenience
pub use canvas::{decode_canvas, load_canvas, open_canvas, ImageSource};
pub use compositor::{compose_with, ComposeStats, ComposedMeme, Compositor, GeneratedMeme};
pub use config::RenderConfig;
pub use error::RenderError;
pub use output::{clamp_quality, encode_jpeg, OutputStore, DEFAULT_JPEG_QUALITY, MIN_JPEG_QUALITY};
