//! Per-row build-guide summaries.
//!
//! The build guide is read row by row, top to bottom: for each row, the
//! distinct colors it uses and how many tiles of each to place. Cells
//! already hold resolved palette colors, so grouping is by exact equality.

use crate::color::Rgb;
use crate::output::PixelArt;
use crate::palette::Palette;

/// One distinct color within a row: the color, its display name, and how
/// many cells of the row hold it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowColorCount {
    /// The resolved palette color.
    pub color: Rgb,
    /// Display name from the palette table, or the hex string if unnamed.
    pub display_name: String,
    /// Number of cells in the row equal to this color.
    pub count: usize,
}

/// Color breakdown for one grid row.
///
/// Entries are unique by color, in first-occurrence order within the row.
/// That order is a presentation detail, not a contract: consumers should
/// treat the (color, count) pairs as a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSummary {
    entries: Vec<RowColorCount>,
    width: usize,
}

impl RowSummary {
    /// Distinct colors in this row with their counts.
    #[inline]
    pub fn entries(&self) -> &[RowColorCount] {
        &self.entries
    }

    /// Number of cells in the row ("N flowers wide").
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Summarize a resolved color grid into one [`RowSummary`] per row.
///
/// Rows are independent: no cross-row aggregation. Within a row, cells are
/// grouped by exact color equality and counted; each distinct color gets
/// its display name from the palette (hex fallback for unnamed colors).
/// A linear scan per cell suffices — rows are at most a few hundred cells
/// and hold only a handful of distinct colors.
///
/// # Example
///
/// ```
/// use rct_flower_art::{summarize, Palette, Rgb};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// let black = Rgb::new(0, 0, 0);
/// let white = Rgb::new(255, 255, 255);
/// let grid = vec![vec![black, white, black]];
///
/// let rows = summarize(&grid, &palette);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].width(), 3);
///
/// let entries = rows[0].entries();
/// assert_eq!(entries[0].color, black);
/// assert_eq!(entries[0].count, 2);
/// assert_eq!(entries[1].color, white);
/// assert_eq!(entries[1].count, 1);
/// ```
pub fn summarize(grid: &[Vec<Rgb>], palette: &Palette) -> Vec<RowSummary> {
    grid.iter()
        .map(|row| {
            let mut counts: Vec<(Rgb, usize)> = Vec::new();
            for &cell in row {
                match counts.iter_mut().find(|(color, _)| *color == cell) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((cell, 1)),
                }
            }

            RowSummary {
                entries: counts
                    .into_iter()
                    .map(|(color, count)| RowColorCount {
                        color,
                        display_name: palette.display_name(color),
                        count,
                    })
                    .collect(),
                width: row.len(),
            }
        })
        .collect()
}

/// Summarize a conversion result directly.
///
/// Convenience over [`summarize`] for callers holding a [`PixelArt`].
pub fn summarize_art(art: &PixelArt, palette: &Palette) -> Vec<RowSummary> {
    summarize(art.grid(), palette)
}
