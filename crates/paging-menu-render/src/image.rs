//! Image handles with intrinsic dimensions.
//!
//! Menu items only need to know how large an image is; pixel data is kept
//! alongside when the image was decoded so a renderer can upload it later.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{RenderError, RenderResult};
use crate::types::Size;

/// Where an image came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A named image whose pixels are supplied elsewhere (e.g. an asset catalog).
    Named(String),
    /// An image decoded from a file.
    File(PathBuf),
    /// An image decoded from an in-memory buffer.
    Memory,
}

/// An image with a fixed intrinsic size.
///
/// Cloning is cheap; decoded pixels are shared.
#[derive(Clone)]
pub struct Image {
    source: ImageSource,
    size: Size,
    pixels: Option<Arc<image::RgbaImage>>,
}

impl Image {
    /// Create a named image of the given intrinsic size without pixel data.
    ///
    /// Both dimensions must be finite and positive.
    pub fn new(name: impl Into<String>, size: Size) -> RenderResult<Self> {
        if !size.width.is_finite()
            || !size.height.is_finite()
            || size.width <= 0.0
            || size.height <= 0.0
        {
            return Err(RenderError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }

        Ok(Self {
            source: ImageSource::Named(name.into()),
            size,
            pixels: None,
        })
    }

    /// Decode an image from encoded bytes (PNG, JPEG, ...).
    pub fn from_memory(bytes: &[u8]) -> RenderResult<Self> {
        Self::decode(bytes, ImageSource::Memory)
    }

    /// Read and decode an image file.
    pub fn open(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| RenderError::ImageIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(&bytes, ImageSource::File(path.to_path_buf()))
    }

    fn decode(bytes: &[u8], source: ImageSource) -> RenderResult<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: width as f32,
                height: height as f32,
            });
        }

        tracing::trace!(?source, width, height, "decoded image");

        Ok(Self {
            source,
            size: Size::from((width, height)),
            pixels: Some(Arc::new(rgba)),
        })
    }

    /// The intrinsic size of the image.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Decoded RGBA pixels, if the image was decoded.
    pub fn pixels(&self) -> Option<&image::RgbaImage> {
        self.pixels.as_deref()
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        let same_pixels = match (&self.pixels, &other.pixels) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_pixels && self.source == other.source && self.size == other.size
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("source", &self.source)
            .field("size", &self.size)
            .field("decoded", &self.pixels.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn named_image_keeps_size() {
        let img = Image::new("home", Size::new(24.0, 18.0)).unwrap();
        assert_eq!(img.width(), 24.0);
        assert_eq!(img.height(), 18.0);
        assert!(img.pixels().is_none());
        assert_eq!(img.source(), &ImageSource::Named("home".into()));
    }

    #[test]
    fn named_image_rejects_bad_dimensions() {
        assert!(Image::new("bad", Size::new(-1.0, 10.0)).is_err());
        assert!(Image::new("bad", Size::new(f32::NAN, 10.0)).is_err());
        assert!(matches!(
            Image::new("flat", Size::new(10.0, 0.0)),
            Err(RenderError::InvalidDimensions { width, height }) if width == 10.0 && height == 0.0
        ));
        assert!(Image::new("empty", Size::ZERO).is_err());
    }

    #[test]
    fn decode_png_from_memory() {
        let img = Image::from_memory(&encode_png(7, 3)).unwrap();
        assert_eq!(img.size(), Size::new(7.0, 3.0));
        assert_eq!(img.pixels().map(|p| p.dimensions()), Some((7, 3)));
    }

    #[test]
    fn decode_garbage_fails() {
        let err = Image::from_memory(b"not an image").unwrap_err();
        assert!(matches!(err, RenderError::ImageDecode(_)));
    }

    #[test]
    fn open_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, encode_png(4, 5)).unwrap();

        let img = Image::open(&path).unwrap();
        assert_eq!(img.size(), Size::new(4.0, 5.0));
        assert_eq!(img.source(), &ImageSource::File(path));

        let missing = Image::open(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(missing, RenderError::ImageIo { .. }));
    }

    #[test]
    fn clones_compare_equal() {
        let img = Image::from_memory(&encode_png(2, 2)).unwrap();
        let other = Image::from_memory(&encode_png(2, 2)).unwrap();
        assert_eq!(img, img.clone());
        assert_ne!(img, other);
    }
}
