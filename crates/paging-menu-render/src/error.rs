//! Error types for the render crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading render resources.
#[derive(Error, Debug)]
pub enum RenderError {
    /// An image could not be decoded.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// An image file could not be read.
    #[error("failed to read image '{path}': {source}")]
    ImageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An image with a zero, negative or non-finite dimension.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    /// A font file could not be loaded.
    #[error("failed to load font: {0}")]
    FontLoad(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
