//! PixelArtConverter builder -- the primary entry point for the crate.
//!
//! [`PixelArtConverter`] wraps the quantization pipeline behind a fluent
//! builder: it owns the palette, carries the render-dimension cap, and turns
//! a [`SourceImage`] plus a cell size into a [`PixelArt`].

use tracing::debug;

use super::error::ConvertError;
use super::source::SourceImage;
use crate::color::Rgb;
use crate::grid::SamplingGrid;
use crate::output::PixelArt;
use crate::palette::{rct_flowers, Palette};

/// Default cap on the longer render dimension, matching the reference
/// behavior's 400-pixel intermediate canvas.
pub const DEFAULT_MAX_DIMENSION: u32 = 400;

/// Converts decoded photos into palette-quantized pixel art.
///
/// # Design
///
/// - Constructor requires a [`Palette`] (no invalid states); the built-in
///   table is one call away via [`with_rct_flowers()`](Self::with_rct_flowers)
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`convert()`](Self::convert) takes `&self`, so the converter is
///   **reusable** across requests; each call is a pure function of
///   (image, cell size, palette) with no state retained in between.
///   A caller that re-converts with fresh parameters simply drops the
///   superseded [`PixelArt`] -- stale results are never merged.
///
/// # Example
///
/// ```
/// use rct_flower_art::{PixelArtConverter, SourceImage};
///
/// let source = SourceImage::from_rgba(64, 64, vec![0u8; 64 * 64 * 4]).unwrap();
///
/// let converter = PixelArtConverter::with_rct_flowers().max_dimension(64);
/// let art = converter.convert(&source, 8).unwrap();
///
/// assert_eq!(art.grid_width(), 8);
/// assert_eq!(art.grid_height(), 8);
/// ```
pub struct PixelArtConverter {
    palette: Palette,
    max_dimension: u32,
}

impl PixelArtConverter {
    /// Create a converter with the given palette.
    ///
    /// The render-dimension cap defaults to [`DEFAULT_MAX_DIMENSION`].
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }

    /// Create a converter using the built-in RCT flower palette.
    pub fn with_rct_flowers() -> Self {
        Self::new(rct_flowers().clone())
    }

    /// Set the cap on the longer render dimension.
    ///
    /// Zero is not rejected: it floors both render dimensions to zero and
    /// every conversion degrades to the empty result.
    #[inline]
    pub fn max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// The palette this converter resolves against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Convert a source image into pixel art at the given cell size.
    ///
    /// Pipeline:
    /// 1. Build the sampling grid (scale, render and grid dimensions)
    /// 2. Resample the source into the render buffer
    /// 3. For each grid cell in row-major order: sample the cell center,
    ///    resolve the nearest palette color, record it in the color grid,
    ///    and paint an opaque `cell_size x cell_size` block in the bitmap
    ///
    /// A zero-area grid (cell size larger than the render dimensions, or a
    /// degenerate source) returns an empty [`PixelArt`], not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidCellSize`] if `cell_size` is zero.
    pub fn convert(
        &self,
        source: &SourceImage,
        cell_size: u32,
    ) -> Result<PixelArt, ConvertError> {
        let grid = SamplingGrid::build(
            source.width(),
            source.height(),
            self.max_dimension,
            cell_size,
        )?;

        debug!(
            src_width = source.width(),
            src_height = source.height(),
            render_width = grid.render_width(),
            render_height = grid.render_height(),
            grid_width = grid.grid_width(),
            grid_height = grid.grid_height(),
            cell_size,
            "converting image"
        );

        if grid.is_empty() {
            return Ok(PixelArt::empty(cell_size));
        }

        let render = source.resample(grid.render_width(), grid.render_height());

        // Output bitmap covers whole cells only; the remainder strip past the
        // last full cell is cropped, as in the reference behavior.
        let out_width = grid.grid_width() * cell_size;
        let out_height = grid.grid_height() * cell_size;
        let mut pixels = vec![0u8; out_width as usize * out_height as usize * 4];

        let mut rows = Vec::with_capacity(grid.grid_height() as usize);
        for y in 0..grid.grid_height() {
            let mut row = Vec::with_capacity(grid.grid_width() as usize);
            for x in 0..grid.grid_width() {
                let resolved = match grid.sample_point(x, y) {
                    Some((sx, sy)) => self.palette.find_nearest(render.rgb_at(sx, sy)),
                    // Boundary rounding pushed the center out of bounds
                    None => Rgb::BLACK,
                };
                paint_cell(&mut pixels, out_width, x, y, cell_size, resolved);
                row.push(resolved);
            }
            rows.push(row);
        }

        Ok(PixelArt::new(pixels, out_width, out_height, cell_size, rows))
    }
}

/// Fill the axis-aligned `cell_size x cell_size` block at cell `(x, y)` with
/// `color`, fully opaque.
fn paint_cell(pixels: &mut [u8], out_width: u32, x: u32, y: u32, cell_size: u32, color: Rgb) {
    let [r, g, b] = color.to_bytes();
    for row in 0..cell_size {
        let py = y * cell_size + row;
        let start = ((py * out_width + x * cell_size) * 4) as usize;
        for px in pixels[start..start + cell_size as usize * 4].chunks_exact_mut(4) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            px[3] = 255;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: a solid-color RGBA source image.
    fn solid_source(width: u32, height: u32, color: Rgb) -> SourceImage {
        let [r, g, b] = color.to_bytes();
        let rgba: Vec<u8> = [r, g, b, 255]
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        SourceImage::from_rgba(width, height, rgba).unwrap()
    }

    fn two_color_converter() -> PixelArtConverter {
        PixelArtConverter::new(Palette::from_hex(&["#000000", "#ffffff"]).unwrap())
    }

    #[test]
    fn test_zero_cell_size_fails() {
        let source = solid_source(8, 8, Rgb::BLACK);
        let result = two_color_converter().convert(&source, 0);
        assert!(matches!(result, Err(ConvertError::InvalidCellSize(_))));
    }

    #[test]
    fn test_degenerate_grid_is_empty_result() {
        // Cell size exceeds both render dimensions
        let source = solid_source(8, 8, Rgb::BLACK);
        let art = two_color_converter()
            .max_dimension(8)
            .convert(&source, 20)
            .unwrap();
        assert!(art.is_empty());
        assert_eq!(art.grid(), &[] as &[Vec<Rgb>]);
        assert_eq!(art.pixels(), &[] as &[u8]);
    }

    #[test]
    fn test_solid_source_resolves_to_single_palette_color() {
        // Near-white source, two-entry palette: every cell resolves white
        let source = solid_source(32, 32, Rgb::new(230, 230, 230));
        let art = two_color_converter()
            .max_dimension(32)
            .convert(&source, 8)
            .unwrap();

        assert_eq!(art.grid_width(), 4);
        assert_eq!(art.grid_height(), 4);
        for row in art.grid() {
            for &cell in row {
                assert_eq!(cell, Rgb::new(255, 255, 255));
            }
        }
    }

    #[test]
    fn test_bitmap_blocks_match_grid() {
        let source = solid_source(16, 16, Rgb::new(10, 10, 10));
        let art = two_color_converter()
            .max_dimension(16)
            .convert(&source, 4)
            .unwrap();

        assert_eq!(art.width(), 16);
        assert_eq!(art.height(), 16);
        // Every bitmap pixel is opaque black
        for px in art.pixels().chunks_exact(4) {
            assert_eq!(px, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn test_left_right_halves_resolve_independently() {
        // Left half dark, right half light, 2x1 grid
        let mut rgba = Vec::with_capacity(16 * 8 * 4);
        for _y in 0..8 {
            for x in 0..16 {
                let v = if x < 8 { 10u8 } else { 245 };
                rgba.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let source = SourceImage::from_rgba(16, 8, rgba).unwrap();
        let art = two_color_converter()
            .max_dimension(16)
            .convert(&source, 8)
            .unwrap();

        assert_eq!(art.grid_width(), 2);
        assert_eq!(art.grid_height(), 1);
        assert_eq!(art.grid()[0][0], Rgb::new(0, 0, 0));
        assert_eq!(art.grid()[0][1], Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_converter_is_reusable_and_deterministic() {
        let source = solid_source(24, 24, Rgb::new(40, 40, 40));
        let converter = two_color_converter().max_dimension(24);

        let first = converter.convert(&source, 6).unwrap();
        let second = converter.convert(&source, 6).unwrap();
        assert_eq!(first.grid(), second.grid());
        assert_eq!(first.pixels(), second.pixels());
    }

    #[test]
    fn test_grid_dimensions_follow_cell_size() {
        let source = solid_source(100, 50, Rgb::BLACK);
        let converter = two_color_converter(); // max_dimension 400 -> 400x200 render
        let art = converter.convert(&source, 8).unwrap();
        assert_eq!(art.grid_width(), 50);
        assert_eq!(art.grid_height(), 25);
        assert_eq!(art.cell_size(), 8);
        assert_eq!(art.width(), 400);
        assert_eq!(art.height(), 200);
    }

    #[test]
    fn test_paint_cell_fills_exact_block() {
        // 2x1 cells of size 2: paint cell (1, 0) red, leave cell (0, 0) zeroed
        let mut pixels = vec![0u8; 4 * 2 * 4];
        paint_cell(&mut pixels, 4, 1, 0, 2, Rgb::new(255, 0, 0));

        let pixel = |x: usize, y: usize| &pixels[(y * 4 + x) * 4..(y * 4 + x) * 4 + 4];
        assert_eq!(pixel(0, 0), &[0, 0, 0, 0]);
        assert_eq!(pixel(1, 1), &[0, 0, 0, 0]);
        assert_eq!(pixel(2, 0), &[255, 0, 0, 255]);
        assert_eq!(pixel(3, 1), &[255, 0, 0, 255]);
    }
}
