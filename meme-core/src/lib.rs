//! # meme-core
//!
//! Data model shared by every stage of the meme pipeline.
//!
//! ## Architecture
//!
//! ```text
//! caller (CLI / bot / web)
//!     │  Vec<TextBlock { text, PositionId, SizeClass }>
//!     ▼
//! meme-layout ──► meme-text (measure)
//!     │
//!     ▼
//! meme-render ──► JPEG on disk
//! ```
//!
//! - **`block`**: [`TextBlock`], validation, JSON block lists.
//! - **`position`**: the closed anchor set and the size classes.

pub mod block;
pub mod position;

pub use block::{parse_blocks_json, BlockError, TextBlock, MAX_TEXT_LENGTH};
pub use position::{HAlign, PositionId, SizeClass, VAlign, MAX_BASE_SIZE, MIN_BASE_SIZE};
