//! Output types for the conversion pipeline.
//!
//! This module provides [`PixelArt`], the canonical result of a conversion:
//! the painted bitmap plus the row-major color grid, with PNG encoding for
//! the downloadable artifact.

mod pixel_art;

pub use pixel_art::{PixelArt, DOWNLOAD_FILE_NAME};
