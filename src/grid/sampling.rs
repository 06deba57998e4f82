//! Sampling grid builder.
//!
//! [`SamplingGrid`] derives all conversion geometry from the source
//! dimensions, the maximum render dimension, and the cell size. It is
//! recomputed per conversion request and never persisted.

use thiserror::Error;

/// Error for a non-positive cell size.
///
/// The interactive caller normally constrains cell size to 4..=20, but the
/// grid builder validates defensively rather than crashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid cell size {0} (must be a positive integer)")]
pub struct InvalidCellSize(pub u32);

/// Conversion geometry for one request.
///
/// The source image is first uniformly scaled so its longer side does not
/// exceed `max_dimension` (sources smaller than `max_dimension` are scaled
/// *up* — intentional, carried over from the reference behavior), then
/// divided into square cells of `cell_size` rendered pixels. Each cell is
/// represented by one sample point at its center.
///
/// # Example
///
/// ```
/// use rct_flower_art::SamplingGrid;
///
/// let grid = SamplingGrid::build(800, 400, 400, 8).unwrap();
/// assert_eq!(grid.render_width(), 400);
/// assert_eq!(grid.render_height(), 200);
/// assert_eq!(grid.grid_width(), 50);
/// assert_eq!(grid.grid_height(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingGrid {
    render_width: u32,
    render_height: u32,
    grid_width: u32,
    grid_height: u32,
    cell_size: u32,
}

impl SamplingGrid {
    /// Compute the grid for a source image and cell size.
    ///
    /// Steps:
    /// 1. `scale = min(max_dimension / src_width, max_dimension / src_height)`
    /// 2. render dimensions = floored scaled source dimensions
    /// 3. grid dimensions = render dimensions / `cell_size` (floor division)
    ///
    /// A zero source dimension or `max_dimension` floors the render
    /// dimensions to zero, which yields an empty grid — a valid degenerate
    /// result, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCellSize`] if `cell_size` is zero.
    pub fn build(
        src_width: u32,
        src_height: u32,
        max_dimension: u32,
        cell_size: u32,
    ) -> Result<Self, InvalidCellSize> {
        if cell_size == 0 {
            return Err(InvalidCellSize(cell_size));
        }

        let (render_width, render_height) = if src_width == 0 || src_height == 0 {
            (0, 0)
        } else {
            let scale = f64::min(
                f64::from(max_dimension) / f64::from(src_width),
                f64::from(max_dimension) / f64::from(src_height),
            );
            (
                (f64::from(src_width) * scale).floor() as u32,
                (f64::from(src_height) * scale).floor() as u32,
            )
        };

        Ok(Self {
            render_width,
            render_height,
            grid_width: render_width / cell_size,
            grid_height: render_height / cell_size,
            cell_size,
        })
    }

    /// Width of the intermediate render buffer, in pixels.
    #[inline]
    pub fn render_width(&self) -> u32 {
        self.render_width
    }

    /// Height of the intermediate render buffer, in pixels.
    #[inline]
    pub fn render_height(&self) -> u32 {
        self.render_height
    }

    /// Number of cells across.
    #[inline]
    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    /// Number of cells down.
    #[inline]
    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    /// Side length of one square cell, in rendered pixels.
    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Returns true if the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grid_width == 0 || self.grid_height == 0
    }

    /// Representative sample point for cell `(x, y)`: the cell's center.
    ///
    /// `sample = floor(cell_index * cell_size + cell_size / 2)` per axis.
    /// Returns `None` if the point falls outside the render bounds; the
    /// pipeline substitutes the pure-black fallback for such cells instead
    /// of sampling out of bounds.
    pub fn sample_point(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        let sample_x = x * self.cell_size + self.cell_size / 2;
        let sample_y = y * self.cell_size + self.cell_size / 2;
        if sample_x < self.render_width && sample_y < self.render_height {
            Some((sample_x, sample_y))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_dimension_vector() {
        // 800x400 at max 400 halves to 400x200; cell 8 gives 50x25
        let grid = SamplingGrid::build(800, 400, 400, 8).unwrap();
        assert_eq!(grid.render_width(), 400);
        assert_eq!(grid.render_height(), 200);
        assert_eq!(grid.grid_width(), 50);
        assert_eq!(grid.grid_height(), 25);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_small_source_is_upscaled() {
        // 100x50 at max 400 scales by 4 (the longer side reaches 400)
        let grid = SamplingGrid::build(100, 50, 400, 8).unwrap();
        assert_eq!(grid.render_width(), 400);
        assert_eq!(grid.render_height(), 200);
    }

    #[test]
    fn test_non_divisible_dimensions_floor() {
        // 403x201 render with cell 8: 50x25 cells, remainder dropped
        let grid = SamplingGrid::build(403, 201, 403, 8).unwrap();
        assert_eq!(grid.render_width(), 403);
        assert_eq!(grid.render_height(), 201);
        assert_eq!(grid.grid_width(), 50);
        assert_eq!(grid.grid_height(), 25);
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        assert_eq!(
            SamplingGrid::build(800, 400, 400, 0),
            Err(InvalidCellSize(0))
        );
    }

    #[test]
    fn test_cell_larger_than_render_is_empty_not_error() {
        let grid = SamplingGrid::build(10, 10, 10, 20).unwrap();
        assert_eq!(grid.render_width(), 10);
        assert_eq!(grid.grid_width(), 0);
        assert_eq!(grid.grid_height(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_source_dimension_is_empty() {
        let grid = SamplingGrid::build(0, 100, 400, 8).unwrap();
        assert_eq!(grid.render_width(), 0);
        assert_eq!(grid.render_height(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_max_dimension_is_empty() {
        let grid = SamplingGrid::build(800, 400, 0, 8).unwrap();
        assert_eq!(grid.render_width(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_sample_point_is_cell_center() {
        let grid = SamplingGrid::build(400, 200, 400, 8).unwrap();
        assert_eq!(grid.sample_point(0, 0), Some((4, 4)));
        assert_eq!(grid.sample_point(3, 2), Some((28, 20)));
        // Last cell of each axis still lands inside the render bounds
        assert_eq!(grid.sample_point(49, 24), Some((396, 196)));
    }

    #[test]
    fn test_sample_point_odd_cell_size_floors() {
        // cell 5: center offset floor(5/2) = 2
        let grid = SamplingGrid::build(50, 50, 50, 5).unwrap();
        assert_eq!(grid.sample_point(1, 0), Some((7, 2)));
    }

    #[test]
    fn test_sample_point_out_of_bounds_is_none() {
        let grid = SamplingGrid::build(400, 200, 400, 8).unwrap();
        // Beyond the last column/row the center leaves the render bounds
        assert_eq!(grid.sample_point(50, 0), None);
        assert_eq!(grid.sample_point(0, 25), None);
    }

    #[test]
    fn test_all_in_grid_sample_points_in_bounds() {
        // Grid cells never sample past the render buffer: grid dimensions
        // are floor-divided, so the last center is < grid * cell <= render.
        let grid = SamplingGrid::build(403, 317, 397, 7).unwrap();
        for y in 0..grid.grid_height() {
            for x in 0..grid.grid_width() {
                let point = grid.sample_point(x, y);
                assert!(point.is_some(), "cell ({}, {}) sampled out of bounds", x, y);
            }
        }
    }
}
