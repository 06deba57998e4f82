//! Palette table with name lookup and nearest-color matching.
//!
//! This module provides the core [`Palette`] type: a fixed, ordered list of
//! reference colors with optional display names, validated once at load time
//! and immutable afterwards.

use std::collections::HashMap;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// One palette table entry: a reference color plus an optional display name.
///
/// Entries without a name fall back to the color's own hex string as their
/// display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// The reference color.
    pub color: Rgb,
    /// Optional human-readable name shown in the build guide.
    pub name: Option<String>,
}

impl PaletteEntry {
    /// Create an unnamed entry.
    pub fn new(color: Rgb) -> Self {
        Self { color, name: None }
    }

    /// Create a named entry.
    pub fn named(color: Rgb, name: impl Into<String>) -> Self {
        Self {
            color,
            name: Some(name.into()),
        }
    }
}

/// A fixed, ordered palette of reference colors.
///
/// `Palette` is validated once at construction and never mutated: the entry
/// order is the tie-break order for nearest-color resolution, and the name
/// map is the display-name source for the build guide.
///
/// # Validation
///
/// Loading rejects empty tables and any entry whose color string does not
/// normalize to exactly 6 hex digits ([`PaletteError::MalformedEntry`]).
/// Duplicate colors are permitted: resolution still returns the first entry
/// at minimal distance, while the name map is written in table order so the
/// last entry naming a color wins.
///
/// # Example
///
/// ```
/// use rct_flower_art::{Palette, Rgb};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// assert_eq!(palette.len(), 2);
///
/// let near_black = palette.find_nearest(Rgb::new(10, 10, 10));
/// assert_eq!(near_black, Rgb::new(0, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    /// Table entries in source order.
    entries: Vec<PaletteEntry>,
    /// Color -> display name, written in table order (last write wins).
    names: HashMap<Rgb, String>,
}

impl Palette {
    /// Create a palette from validated entries.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `entries` is empty.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut names = HashMap::new();
        for entry in &entries {
            if let Some(name) = &entry.name {
                names.insert(entry.color, name.clone());
            }
        }

        Ok(Self { entries, names })
    }

    /// Create an unnamed palette from hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::MalformedEntry`] for the first string that
    /// does not normalize to exactly 6 hex digits, or
    /// [`PaletteError::EmptyPalette`] for an empty table.
    ///
    /// # Example
    ///
    /// ```
    /// use rct_flower_art::{Palette, PaletteError};
    ///
    /// let palette = Palette::from_hex(&["#172323", "#233333"]).unwrap();
    /// assert_eq!(palette.len(), 2);
    ///
    /// // Truncated source-table strings are rejected, not tolerated
    /// let result = Palette::from_hex(&["#172323", "#537b7"]);
    /// assert!(matches!(result, Err(PaletteError::MalformedEntry { index: 1, .. })));
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let entries = colors
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                Rgb::from_str(value)
                    .map(PaletteEntry::new)
                    .map_err(|source| PaletteError::MalformedEntry {
                        index,
                        value: value.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Create a palette from hex color strings with optional display names.
    ///
    /// # Errors
    ///
    /// Same validation as [`from_hex()`](Self::from_hex).
    pub fn from_hex_named(table: &[(&str, Option<&str>)]) -> Result<Self, PaletteError> {
        let entries = table
            .iter()
            .enumerate()
            .map(|(index, &(value, name))| {
                let color =
                    Rgb::from_str(value).map_err(|source| PaletteError::MalformedEntry {
                        index,
                        value: value.to_string(),
                        source,
                    })?;
                Ok(match name {
                    Some(name) => PaletteEntry::named(color, name),
                    None => PaletteEntry::new(color),
                })
            })
            .collect::<Result<Vec<_>, PaletteError>>()?;
        Self::new(entries)
    }

    /// Returns the number of entries in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: always `false` since empty palettes are rejected at load time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the table entries in source order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Iterate over the palette colors in table order.
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.entries.iter().map(|entry| entry.color)
    }

    /// Returns true if `color` is one of the palette's reference colors.
    pub fn contains(&self, color: Rgb) -> bool {
        self.entries.iter().any(|entry| entry.color == color)
    }

    /// Display name for a reference color.
    ///
    /// Plain map lookup with a default: entries without a name display as
    /// their own hex string.
    ///
    /// # Example
    ///
    /// ```
    /// use rct_flower_art::{Palette, PaletteEntry, Rgb};
    ///
    /// let palette = Palette::new(vec![
    ///     PaletteEntry::named(Rgb::new(0, 0, 0), "Black"),
    ///     PaletteEntry::new(Rgb::new(0x17, 0x23, 0x23)),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(palette.display_name(Rgb::new(0, 0, 0)), "Black");
    /// assert_eq!(palette.display_name(Rgb::new(0x17, 0x23, 0x23)), "#172323");
    /// ```
    pub fn display_name(&self, color: Rgb) -> String {
        self.names
            .get(&color)
            .cloned()
            .unwrap_or_else(|| color.to_string())
    }

    /// Find the palette color nearest to `color` under Euclidean RGB distance.
    ///
    /// Linear scan in table order; on ties the first entry encountered wins.
    /// That tie-break is part of the contract (deterministic output grids),
    /// so the scan uses a strict `<` against the best distance so far and
    /// must not be reordered. O(len) per call — fine for the small fixed
    /// tables this crate works with.
    ///
    /// Never fails: the palette is non-empty by construction.
    pub fn find_nearest(&self, color: Rgb) -> Rgb {
        let mut best = self.entries[0].color;
        let mut best_dist = color.distance_squared(best);

        for entry in &self.entries[1..] {
            let dist = color.distance_squared(entry.color);
            if dist < best_dist {
                best_dist = dist;
                best = entry.color;
            }
        }

        best
    }
}
