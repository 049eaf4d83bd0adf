use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// Source image unreadable or corrupt. Fatal for the call.
    #[error("cannot decode source image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode output image: {0}")]
    Encode(#[source] jpeg_encoder::EncodingError),
    #[error("{width}x{height} is too large for JPEG output")]
    TooLarge { width: u32, height: u32 },
    #[error("invalid render config: {0}")]
    Config(#[from] serde_json::Error),
}
