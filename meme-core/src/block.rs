//! Text blocks: one unit of caption text plus where and how big to draw it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::position::{PositionId, SizeClass};

/// Longest caption callers accept for a single block (characters).
pub const MAX_TEXT_LENGTH: usize = 200;

#[derive(Error, Debug)]
pub enum BlockError {
    #[error("text block is empty")]
    Empty,
    #[error("text block has {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },
    #[error("unknown position: {0}")]
    UnknownPosition(String),
    #[error("invalid block list: {0}")]
    Json(#[from] serde_json::Error),
}

/// One caption to lay out on the image.
///
/// On the wire the size class travels as `font_size`:
///
/// ```json
/// {"text": "one does not simply", "position": "top", "font_size": "large"}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    #[serde(default)]
    pub position: PositionId,
    #[serde(rename = "font_size", alias = "size_class", default)]
    pub size_class: SizeClass,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, position: PositionId, size_class: SizeClass) -> Self {
        Self {
            text: text.into(),
            position,
            size_class,
        }
    }

    /// True when the block has nothing to draw.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Caller-side validation: non-blank and within [`MAX_TEXT_LENGTH`].
    ///
    /// The compositor does not call this. It skips blank blocks and draws
    /// long ones anyway.
    pub fn validate(&self) -> Result<(), BlockError> {
        if self.is_blank() {
            return Err(BlockError::Empty);
        }
        let len = self.text.chars().count();
        if len > MAX_TEXT_LENGTH {
            return Err(BlockError::TooLong {
                len,
                max: MAX_TEXT_LENGTH,
            });
        }
        Ok(())
    }
}

/// Parse a JSON array of blocks.
pub fn parse_blocks_json(json: &str) -> Result<Vec<TextBlock>, BlockError> {
    Ok(serde_json::from_str(json)?)
}

// ===================================================================
// Tests
// ===================================================================
