//! Render configuration.
//!
//! Loaded from JSON; every field is optional:
//!
//! ```json
//! { "font_paths": ["/usr/share/fonts/..."], "output_dir": "data/generated", "jpeg_quality": 92 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use meme_text::{FontResolver, DEFAULT_FONT_PATHS};

use crate::error::RenderError;
use crate::output::{OutputStore, DEFAULT_JPEG_QUALITY};

/// Directory generated memes land in unless configured otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "data/generated";

/// Read-only settings shared by every generation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Font candidates, tried in order.
    pub font_paths: Vec<PathBuf>,
    pub output_dir: PathBuf,
    /// JPEG quality. Values below `MIN_JPEG_QUALITY` (75) are raised to it.
    pub jpeg_quality: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_paths: DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, RenderError> {
        let json = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn font_resolver(&self) -> FontResolver {
        FontResolver::new(self.font_paths.iter().cloned())
    }

    pub fn output_store(&self) -> OutputStore {
        OutputStore::new(self.output_dir.clone(), self.jpeg_quality)
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.jpeg_quality, 92);
        assert_eq!(config.output_dir, PathBuf::from("data/generated"));
        assert_eq!(config.font_paths.len(), DEFAULT_FONT_PATHS.len());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(
            RenderConfig::from_json_str("{}").unwrap(),
            RenderConfig::default()
        );
    }

    #[test]
    fn test_partial_json() {
        let config =
            RenderConfig::from_json_str(r#"{"output_dir": "/tmp/memes", "jpeg_quality": 80}"#)
                .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/memes"));
        assert_eq!(config.jpeg_quality, 80);
        assert_eq!(config.font_paths, RenderConfig::default().font_paths);
    }

    #[test]
    fn test_empty_font_list_resolves_bitmap() {
        let config = RenderConfig::from_json_str(r#"{"font_paths": []}"#).unwrap();
        assert!(config.font_resolver().candidates().is_empty());
        assert!(config.font_resolver().resolve().is_fallback());
    }

    #[test]
    fn test_low_quality_is_raised_to_floor() {
        let config = RenderConfig::from_json_str(r#"{"jpeg_quality": 10}"#).unwrap();
        assert_eq!(config.output_store().quality(), crate::output::MIN_JPEG_QUALITY);
    }

    #[test]
    fn test_invalid_json() {
        let err = RenderConfig::from_json_str(r#"{"jpeg_quality": "high"}"#).unwrap_err();
        assert!(matches!(err, RenderError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RenderConfig::from_json_file(Path::new("/nonexistent/meme.json")).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }
}
