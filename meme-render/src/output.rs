//! JPEG output.
//!
//! Every generated meme gets a fresh name, `meme_<12 hex>.jpg`, taken from
//! a v4 UUID. Concurrent writers never pick the same path, so there is no
//! locking around the output directory.
//!
//! Files are encoded with per-image optimized Huffman tables at a high
//! quality. Quality can be tuned but never drops below
//! [`MIN_JPEG_QUALITY`].

use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::RenderError;

pub const DEFAULT_JPEG_QUALITY: u8 = 92;
/// Lowest quality a caller may configure.
pub const MIN_JPEG_QUALITY: u8 = 75;

const NAME_PREFIX: &str = "meme_";
const NAME_HEX_LEN: usize = 12;

/// Clamp a requested quality into `MIN_JPEG_QUALITY..=100`.
pub fn clamp_quality(quality: u8) -> u8 {
    quality.clamp(MIN_JPEG_QUALITY, 100)
}

fn encode_rgb(canvas: &RgbImage, quality: u8, optimize: bool) -> Result<Vec<u8>, RenderError> {
    let (width, height) = canvas.dimensions();
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(RenderError::TooLarge { width, height });
    };

    let mut bytes = Vec::new();
    let mut encoder = Encoder::new(&mut bytes, clamp_quality(quality));
    encoder.set_optimized_huffman_tables(optimize);
    encoder
        .encode(canvas.as_raw(), w, h, ColorType::Rgb)
        .map_err(RenderError::Encode)?;
    Ok(bytes)
}

/// Encode `canvas` as JPEG with optimized Huffman tables.
pub fn encode_jpeg(canvas: &RgbImage, quality: u8) -> Result<Vec<u8>, RenderError> {
    encode_rgb(canvas, quality, true)
}

/// Writes composited memes into one directory.
#[derive(Clone, Debug)]
pub struct OutputStore {
    dir: PathBuf,
    quality: u8,
}

impl OutputStore {
    pub fn new(dir: impl Into<PathBuf>, quality: u8) -> Self {
        Self {
            dir: dir.into(),
            quality: clamp_quality(quality),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// A fresh, unused-with-overwhelming-probability output path.
    pub fn next_path(&self) -> PathBuf {
        let id = Uuid::new_v4().simple().to_string();
        self.dir
            .join(format!("{NAME_PREFIX}{}.jpg", &id[..NAME_HEX_LEN]))
    }

    /// Encode and write `canvas`, creating the directory if needed.
    pub fn save(&self, canvas: &RgbImage) -> Result<PathBuf, RenderError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| RenderError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let bytes = encode_jpeg(canvas, self.quality)?;
        let path = self.next_path();
        std::fs::write(&path, &bytes).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;

        log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }
}

/// Whether `name` looks like a file this store would produce.
pub fn is_output_name(name: &str) -> bool {
    name.strip_prefix(NAME_PREFIX)
        .and_then(|rest| rest.strip_suffix(".jpg"))
        .is_some_and(|id| {
            id.len() == NAME_HEX_LEN
                && id.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        })
}

// ===================================================================
// Tests
// ===================================================================
