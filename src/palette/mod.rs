//! Palette types and the built-in RCT flower table
//!
//! This module provides the fixed reference-color table ([`Palette`]),
//! loaded and validated once, with name lookup and nearest-color matching.

mod error;
#[allow(clippy::module_inception)]
mod palette;
mod rct_flowers;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, PaletteEntry};
pub use rct_flowers::{rct_flowers, EXCLUDED_SOURCE_ENTRIES};
