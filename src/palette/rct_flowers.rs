//! The built-in RollerCoaster Tycoon flower palette.
//!
//! Reference colors extracted from the game's flower tiles, in source-table
//! order (the order is load-bearing: it is the nearest-color tie-break
//! order). A subset of entries carries display names; the rest display as
//! their hex string.
//!
//! The source table also contained 13 truncated hex strings (see
//! [`EXCLUDED_SOURCE_ENTRIES`]). Their intended values are unknown, so they
//! are excluded here rather than guessed at, pending reconciliation against
//! the game data.

use std::sync::OnceLock;

use super::Palette;

/// The RCT flower color table: `(hex, optional display name)`.
///
/// 114 verified 6-hex-digit entries. Do not reorder.
const RCT_FLOWER_TABLE: &[(&str, Option<&str>)] = &[
    ("#172323", Some("Darkest Teal")),
    ("#233333", None),
    ("#2f4343", None),
    ("#3f5353", None),
    ("#4b6363", None),
    ("#5b7373", None),
    ("#6f8383", Some("Slate")),
    ("#5b5b13", Some("Dark Olive")),
    ("#6b6b1f", None),
    ("#777b2f", None),
    ("#878b3b", None),
    ("#979b4f", None),
    ("#a7af5f", None),
    ("#777777", Some("Grey")),
    ("#bcbc8b", None),
    ("#432b07", Some("Dark Brown")),
    ("#573b0b", None),
    ("#6f4b17", None),
    ("#7b571f", None),
    ("#8f6327", None),
    ("#9f7333", None),
    ("#b38343", None),
    ("#bf9757", None),
    ("#cbaf6f", Some("Tan")),
    ("#e7dba3", Some("Sand")),
    ("#471b00", None),
    ("#5f2b00", None),
    ("#773300", None),
    ("#8f5307", None),
    ("#a76f07", Some("Amber")),
    ("#bf8b0f", None),
    ("#cf9f1b", None),
    ("#e7b72f", Some("Gold")),
    ("#ff6f6f", Some("Salmon")),
    ("#230000", None),
    ("#4f0000", Some("Dark Red")),
    ("#5f0707", None),
    ("#6f0f0f", None),
    ("#7f1b1b", None),
    ("#8f2727", None),
    ("#9f3333", Some("Brick Red")),
    ("#af3f3f", None),
    ("#cf6767", None),
    ("#df7777", None),
    ("#ef8787", None),
    ("#ff9f9f", Some("Pink")),
    ("#176767", None),
    ("#275757", None),
    ("#476f2b", None),
    ("#577f33", None),
    ("#6f8f43", None),
    ("#7f9f4f", None),
    ("#8faf5b", None),
    ("#9fbf67", None),
    ("#afcf73", Some("Light Olive")),
    ("#cf8f4f", None),
    ("#9f3f00", None),
    ("#135300", Some("Dark Green")),
    ("#176700", None),
    ("#1f7b00", None),
    ("#278f07", Some("Green")),
    ("#cfaf47", None),
    ("#8b7f3f", None),
    ("#7f6343", None),
    ("#ff5300", Some("Orange")),
    ("#ff6300", None),
    ("#3fb06c", Some("Emerald")),
    ("#3f0f0f", None),
    ("#4b0f0b", None),
    ("#53bf7f", Some("Jade")),
    ("#af6b3f", None),
    ("#272b2f", None),
    ("#373b97", Some("Indigo")),
    ("#733b3f", None),
    ("#833f6f", Some("Plum")),
    ("#c2b07f", None),
    ("#2b7b0f", None),
    ("#371b07", None),
    ("#472f0f", None),
    ("#5b3433", None),
    ("#6b47f3", None),
    ("#7b5b74", None),
    ("#8b6f8f", None),
    ("#9b7f8f", None),
    ("#ab8f9f", None),
    ("#bfa3b3", None),
    ("#cfb3c3", None),
    ("#dfb3d3", None),
    ("#efc7e3", Some("Pale Pink")),
    ("#5fb33b", None),
    ("#63b39b", None),
    ("#77777f", None),
    ("#8b8b93", None),
    ("#a3a3a7", Some("Silver")),
    ("#c7c7c3", None),
    ("#eeeee3", Some("White")),
    ("#003f5f", None),
    ("#1b2b8b", Some("Navy")),
    ("#273097", None),
    ("#00534b", None),
    ("#005f53", None),
    ("#005f57", None),
    ("#00635b", None),
    ("#007b7f", Some("Teal")),
    ("#007f36", None),
    ("#249f93", None),
    ("#359f9f", None),
    ("#53afaf", None),
    ("#67bfbf", None),
    ("#7bcfcf", None),
    ("#8fdfdf", None),
    ("#a3efef", None),
    ("#b7ffff", Some("Pale Cyan")),
    ("#000000", Some("Black")),
];

/// Truncated strings found in the source flower table.
///
/// These do not normalize to 6 hex digits and their intended values are
/// unknown, so the built-in palette excludes them. Kept here verbatim for
/// reconciliation against the game data; loading any of them through
/// [`Palette::from_hex`] fails with `PaletteError::MalformedEntry`.
pub const EXCLUDED_SOURCE_ENTRIES: &[&str] = &[
    "#537b7", "#9f9f3a3", "#7fef3", "#ff5f", "#ff7f3", "#30527", "#5b7f0",
    "#cf53d", "#53b07", "#4b60f73", "#27b2f", "#5373f", "#2af07",
];

static RCT_FLOWERS: OnceLock<Palette> = OnceLock::new();

/// The built-in RCT flower palette, loaded once and shared process-wide.
///
/// # Example
///
/// ```
/// use rct_flower_art::{rct_flowers, Rgb};
///
/// let palette = rct_flowers();
/// assert_eq!(palette.len(), 114);
/// assert_eq!(palette.display_name(Rgb::new(0, 0, 0)), "Black");
/// ```
pub fn rct_flowers() -> &'static Palette {
    RCT_FLOWERS.get_or_init(|| {
        // The table is static data; validity is pinned by unit tests below.
        Palette::from_hex_named(RCT_FLOWER_TABLE)
            .expect("built-in RCT flower table is well-formed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::palette::PaletteError;

    #[test]
    fn test_builtin_table_loads() {
        let palette = rct_flowers();
        assert_eq!(palette.len(), 114);
        assert!(!palette.is_empty());
    }

    #[test]
    fn test_builtin_table_has_no_duplicates() {
        let palette = rct_flowers();
        let mut seen = std::collections::HashSet::new();
        for color in palette.colors() {
            assert!(seen.insert(color), "duplicate color {} in builtin table", color);
        }
    }

    #[test]
    fn test_builtin_contains_black_last() {
        // Black is the final source-table entry and the out-of-bounds
        // fallback color; both rely on it being present.
        let palette = rct_flowers();
        let colors: Vec<Rgb> = palette.colors().collect();
        assert_eq!(colors.last(), Some(&Rgb::BLACK));
    }

    #[test]
    fn test_builtin_first_entry_is_darkest_teal() {
        // Table order is the tie-break order; the first entry is pinned.
        let palette = rct_flowers();
        let first = palette.colors().next().unwrap();
        assert_eq!(first, Rgb::new(0x17, 0x23, 0x23));
        assert_eq!(palette.display_name(first), "Darkest Teal");
    }

    #[test]
    fn test_excluded_source_entries_are_rejected() {
        // Every excluded string must fail palette loading -- if one of these
        // starts parsing, the exclusion list is stale.
        for &entry in EXCLUDED_SOURCE_ENTRIES {
            let result = Palette::from_hex(&[entry]);
            assert!(
                matches!(result, Err(PaletteError::MalformedEntry { .. })),
                "{:?} unexpectedly loaded",
                entry
            );
        }
    }

    #[test]
    fn test_shared_instance() {
        let a = rct_flowers() as *const Palette;
        let b = rct_flowers() as *const Palette;
        assert_eq!(a, b, "rct_flowers() should return the same shared instance");
    }
}
