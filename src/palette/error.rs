//! Error types for palette loading and color parsing
//!
//! Malformed table entries are a data-quality defect and are rejected when
//! the palette is loaded, never tolerated silently at lookup time.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when a hex color string does not normalize to exactly 6 hex
/// digits, or contains non-hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has the wrong length (must be exactly 6 digits after
    /// stripping the optional `#`)
    #[error("invalid hex color length {found} (expected exactly 6 hex digits)")]
    InvalidLength {
        /// Digit count actually found
        found: usize,
    },

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
///
/// Returned when a palette table cannot be loaded: either no entries were
/// provided, or an entry's color string is malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in the palette
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// A table entry whose color string does not normalize to 6 hex digits.
    ///
    /// The index refers to the entry's position in the source table, so the
    /// defective row can be located for source-of-truth reconciliation.
    #[error("malformed palette entry {value:?} at index {index}: {source}")]
    MalformedEntry {
        /// Position of the defective entry in the source table
        index: usize,
        /// The offending color string, verbatim
        value: String,
        /// The underlying parse failure
        source: ParseColorError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_message() {
        assert_eq!(PaletteError::EmptyPalette.to_string(), "palette cannot be empty");
    }

    #[test]
    fn test_malformed_entry_names_the_row() {
        let err = PaletteError::MalformedEntry {
            index: 7,
            value: "#537b7".to_string(),
            source: ParseColorError::InvalidLength { found: 5 },
        };
        let message = err.to_string();
        assert!(message.contains("#537b7"), "message: {}", message);
        assert!(message.contains("index 7"), "message: {}", message);
    }
}
