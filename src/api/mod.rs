//! Public API for the conversion pipeline.
//!
//! This module provides the high-level surface: the [`PixelArtConverter`]
//! builder, the [`SourceImage`] input type, and the unified [`ConvertError`].

mod converter;
mod error;
mod source;

pub use converter::{PixelArtConverter, DEFAULT_MAX_DIMENSION};
pub use error::ConvertError;
pub use source::SourceImage;
