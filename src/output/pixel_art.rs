//! PixelArt: the painted bitmap plus the row-major color grid.
//!
//! [`PixelArt`] is the canonical output of a conversion. The color grid is
//! what the build-guide summarizer consumes; the bitmap is what the caller
//! displays or downloads.

use crate::api::ConvertError;
use crate::color::Rgb;

/// Conventional file name for the downloadable PNG artifact.
pub const DOWNLOAD_FILE_NAME: &str = "rct-flower-pixel-art.png";

/// The result of one conversion: painted bitmap and resolved color grid.
///
/// The bitmap is `grid_width * cell_size` by `grid_height * cell_size`
/// RGBA pixels, every cell an opaque block of its resolved palette color.
/// The grid holds the same resolution, one [`Rgb`] per cell, row-major.
/// Both are immutable once returned; the caller owns them outright.
///
/// A degenerate conversion (zero-area grid) produces an empty `PixelArt`
/// with no rows and a zero-length bitmap.
pub struct PixelArt {
    /// RGBA bytes, row-major, fully opaque.
    pixels: Vec<u8>,
    /// Bitmap width in pixels (`grid_width * cell_size`).
    width: u32,
    /// Bitmap height in pixels (`grid_height * cell_size`).
    height: u32,
    /// Side length of one painted cell block.
    cell_size: u32,
    /// Resolved palette colors, one per cell, row-major.
    grid: Vec<Vec<Rgb>>,
}

impl PixelArt {
    /// Create a `PixelArt` from a painted bitmap and its color grid.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels` is `width * height * 4` bytes and that
    /// the grid rows match the bitmap dimensions.
    pub fn new(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        cell_size: u32,
        grid: Vec<Vec<Rgb>>,
    ) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 4,
            "bitmap length must match {}x{} RGBA",
            width,
            height,
        );
        debug_assert_eq!(grid.len() as u32 * cell_size, height);
        debug_assert!(grid
            .iter()
            .all(|row| row.len() as u32 * cell_size == width));
        Self {
            pixels,
            width,
            height,
            cell_size,
            grid,
        }
    }

    /// The empty result of a degenerate (zero-area) conversion.
    pub fn empty(cell_size: u32) -> Self {
        Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
            cell_size,
            grid: Vec::new(),
        }
    }

    /// RGBA bitmap bytes, row-major, fully opaque.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bitmap width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Bitmap height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Side length of one painted cell block.
    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// The row-major color grid: one resolved palette color per cell.
    #[inline]
    pub fn grid(&self) -> &[Vec<Rgb>] {
        &self.grid
    }

    /// Number of cells across.
    #[inline]
    pub fn grid_width(&self) -> u32 {
        self.grid.first().map_or(0, |row| row.len() as u32)
    }

    /// Number of cells down.
    #[inline]
    pub fn grid_height(&self) -> u32 {
        self.grid.len() as u32
    }

    /// Returns true if this is the degenerate empty result.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Encode the bitmap as a PNG (RGBA, 8-bit).
    ///
    /// The conventional download name for the result is
    /// [`DOWNLOAD_FILE_NAME`].
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::PngEncode`] if encoding fails, including for
    /// the empty result (PNG cannot represent a zero-dimension image).
    pub fn to_png(&self) -> Result<Vec<u8>, ConvertError> {
        if self.is_empty() {
            return Err(ConvertError::PngEncode(
                "cannot encode an empty (zero-area) pixel art bitmap".to_string(),
            ));
        }

        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
            writer
                .write_image_data(&self.pixels)
                .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        }
        Ok(out)
    }
}
