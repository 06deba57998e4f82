//! Unified error type for the conversion pipeline.
//!
//! [`ConvertError`] wraps every failure a conversion request can surface
//! into a single enum for convenient `?` propagation in application code.
//! Validation failures abort the conversion with no partial output; a
//! degenerate (zero-area) grid is NOT an error and comes back as a valid
//! empty result instead.

use thiserror::Error;

use crate::grid::InvalidCellSize;

/// Unified error type for the conversion pipeline.
///
/// # Example
///
/// ```
/// use rct_flower_art::{ConvertError, PixelArtConverter, SourceImage};
///
/// fn convert(bytes: &[u8]) -> Result<Vec<u8>, ConvertError> {
///     let source = SourceImage::decode(bytes)?;
///     let art = PixelArtConverter::with_rct_flowers().convert(&source, 8)?;
///     art.to_png()
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Non-positive cell size supplied by the caller
    #[error(transparent)]
    InvalidCellSize(#[from] InvalidCellSize),

    /// RGBA buffer length does not match the declared dimensions
    #[error(
        "pixel buffer is {actual} bytes, but {width}x{height} RGBA requires {expected}"
    )]
    BufferSizeMismatch {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Required buffer length in bytes
        expected: usize,
        /// Supplied buffer length in bytes
        actual: usize,
    },

    /// Input bytes are not a decodable image
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// PNG encoding of the output bitmap failed
    #[error("PNG encode error: {0}")]
    PngEncode(String),
}
