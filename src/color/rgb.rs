//! Exact 24-bit RGB color type
//!
//! [`Rgb`] is the canonical color representation of the crate: three 8-bit
//! channels, no alpha. It parses from and displays as a `#rrggbb` hex string,
//! the form the palette table and build guide use.

use std::fmt;
use std::str::FromStr;

// Re-export path for ParseColorError - wired through the palette module
use crate::palette::ParseColorError;

/// An exact 24-bit RGB color.
///
/// Values are 8-bit channels. Two colors are equal iff all three channels
/// match; equality is what the build-guide summarizer groups by, so no
/// tolerance or rounding is involved anywhere in the type.
///
/// # Example
///
/// ```
/// use rct_flower_art::Rgb;
///
/// let teal: Rgb = "#172323".parse().unwrap();
/// assert_eq!(teal.to_string(), "#172323");
/// assert_eq!(teal.to_bytes(), [0x17, 0x23, 0x23]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black, the defined fallback for out-of-bounds sample points.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a new color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Euclidean distance to another color in integer RGB space.
    ///
    /// `sqrt((r1-r2)² + (g1-g2)² + (b1-b2)²)`. Symmetric, and zero iff the
    /// two colors are equal componentwise. Deliberately the simplest metric:
    /// no perceptual weighting of any kind.
    ///
    /// # Example
    ///
    /// ```
    /// use rct_flower_art::Rgb;
    ///
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// assert_eq!(black.distance(black), 0.0);
    /// assert_eq!(black.distance(white), white.distance(black));
    /// ```
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        f64::from(self.distance_squared(other)).sqrt()
    }

    /// Squared Euclidean distance in integer RGB space.
    ///
    /// Used by the nearest-color scan: the square root is monotonic, so
    /// comparing squared distances selects the same minimum (ties included)
    /// without a sqrt per palette entry.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl fmt::Display for Rgb {
    /// Formats as the canonical lowercase `#rrggbb` hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts exactly 6 hex digits, with or without a leading `#`. Leading
    /// and trailing whitespace is trimmed; parsing is case-insensitive.
    ///
    /// Shorthand 3-digit hex is rejected: the palette data model treats
    /// anything that does not normalize to exactly 6 hex digits as a
    /// malformed entry, and parsing is where that rule is enforced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rct_flower_art::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::new(255, 255, 255));
    ///
    /// // Truncated entries (a known defect class in the source table) fail
    /// assert!("#537b7".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Byte length plus ASCII check keeps the digit-pair slicing below
        // on char boundaries for any input
        if s.len() != 6 || !s.is_ascii() {
            return Err(ParseColorError::InvalidLength {
                found: s.chars().count(),
            });
        }

        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Self::new(r, g, b))
    }
}
