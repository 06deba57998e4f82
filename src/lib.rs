//! rct-flower-art: photos to RollerCoaster Tycoon flower pixel art
//!
//! This library converts a decoded photo into quantized pixel art whose
//! palette is restricted to the fixed set of RollerCoaster Tycoon flower
//! colors, and derives a row-by-row build guide: how many tiles of which
//! flower color to place per row.
//!
//! # Quick Start
//!
//! The [`PixelArtConverter`] builder is the primary entry point:
//!
//! ```
//! use rct_flower_art::{summarize, rct_flowers, PixelArtConverter, SourceImage};
//!
//! // A 64x64 black photo (black is a palette color)
//! let source = SourceImage::from_rgba(64, 64, vec![0u8; 64 * 64 * 4]).unwrap();
//!
//! let converter = PixelArtConverter::with_rct_flowers().max_dimension(64);
//! let art = converter.convert(&source, 8).unwrap();
//!
//! assert_eq!(art.grid_width(), 8);
//! assert_eq!(art.grid_height(), 8);
//!
//! let guide = summarize(art.grid(), rct_flowers());
//! assert_eq!(guide.len(), 8);
//! assert_eq!(guide[0].entries()[0].display_name, "Black");
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! raw image bytes            (PNG/JPEG/... from the host UI)
//!     |
//!     v
//! SourceImage                (decoded RGBA buffer, caller-owned)
//!     |
//!     v
//! SamplingGrid               (uniform scale to max_dimension, floored
//!     |                       render and grid dimensions, cell centers)
//!     v
//! render buffer              (bilinear resample at render dimensions)
//!     |
//!     v
//! per-cell resolution        (sample cell center -> nearest palette
//!     |                       color, Euclidean RGB, first entry wins ties)
//!     v
//! PixelArt                   (opaque cell-block bitmap + color grid)
//!     |
//!     v
//! summarize()                (per-row distinct colors with counts and
//!                             display names -- the build guide)
//! ```
//!
//! # Design
//!
//! The whole pipeline is a pure function of (image, cell size, palette):
//! no state is retained between conversions, the palette is a process-wide
//! constant shared read-only, and a caller superseding an in-flight result
//! simply drops the stale [`PixelArt`]. The interactive
//! re-render-on-input-change behavior of the original UI is the caller's
//! job: call [`PixelArtConverter::convert`] again with fresh parameters.
//! A failed conversion returns an error without touching any previously
//! returned result.
//!
//! # Palette Validation
//!
//! The palette table is validated once at load time. Color strings must
//! normalize to exactly 6 hex digits; the original flower table's truncated
//! entries are a known data defect and are rejected, not silently carried
//! (see [`palette::EXCLUDED_SOURCE_ENTRIES`]).

pub mod api;
pub mod color;
pub mod grid;
pub mod output;
pub mod palette;
pub mod summary;


pub use api::{ConvertError, PixelArtConverter, SourceImage, DEFAULT_MAX_DIMENSION};
pub use color::Rgb;
pub use grid::{InvalidCellSize, SamplingGrid};
pub use output::{PixelArt, DOWNLOAD_FILE_NAME};
pub use palette::{rct_flowers, Palette, PaletteEntry, PaletteError, ParseColorError};
pub use summary::{summarize, summarize_art, RowColorCount, RowSummary};
