//! Decoded source image.
//!
//! [`SourceImage`] owns the decoded RGBA pixel buffer for one conversion.
//! It is immutable once constructed and read-only to the pipeline.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use super::error::ConvertError;
use crate::color::Rgb;

/// A decoded source photo: width, height, and a row-major RGBA buffer.
///
/// Construct from an already-decoded buffer with
/// [`from_rgba()`](Self::from_rgba), or decode raster bytes (PNG, JPEG, GIF,
/// WebP, BMP) with [`decode()`](Self::decode).
///
/// # Example
///
/// ```
/// use rct_flower_art::SourceImage;
///
/// // A 2x1 image: one red pixel, one blue pixel
/// let source = SourceImage::from_rgba(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
/// assert_eq!(source.width(), 2);
/// assert_eq!(source.height(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: RgbaImage,
}

impl SourceImage {
    /// Create a source image from a decoded row-major RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::BufferSizeMismatch`] if `rgba` is not exactly
    /// `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, ConvertError> {
        let expected = width as usize * height as usize * 4;
        let actual = rgba.len();
        let image = RgbaImage::from_raw(width, height, rgba).ok_or(
            ConvertError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual,
            },
        )?;
        Ok(Self { image })
    }

    /// Decode a source image from raw file bytes.
    ///
    /// The format is sniffed from the bytes; anything the `image` crate's
    /// enabled decoders support (PNG, JPEG, GIF, WebP, BMP) is accepted.
    /// Non-image input surfaces as [`ConvertError::Decode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, ConvertError> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self { image })
    }

    /// Source width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Source height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Resample into a render buffer of the given dimensions.
    ///
    /// Bilinear (triangle) filtering, the same class of resampling a canvas
    /// `drawImage` applies in the reference behavior. Alpha is carried
    /// through the resize but ignored by cell sampling.
    pub(crate) fn resample(&self, width: u32, height: u32) -> RenderBuffer {
        RenderBuffer {
            image: imageops::resize(&self.image, width, height, FilterType::Triangle),
        }
    }
}

/// The intermediate uniformly-scaled image that grid cells sample from.
pub(crate) struct RenderBuffer {
    image: RgbaImage,
}

impl RenderBuffer {
    /// RGB value at `(x, y)`. Alpha is dropped.
    ///
    /// Callers only pass in-bounds sample points ([`SamplingGrid`] reports
    /// out-of-bounds centers as `None` before this is reached).
    ///
    /// [`SamplingGrid`]: crate::grid::SamplingGrid
    #[inline]
    pub(crate) fn rgb_at(&self, x: u32, y: u32) -> Rgb {
        let pixel = self.image.get_pixel(x, y);
        Rgb::new(pixel[0], pixel[1], pixel[2])
    }
}
