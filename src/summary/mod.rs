//! Build-guide summarizer
//!
//! This module turns a resolved color grid into per-row breakdowns: which
//! reference colors a row uses, how many cells of each, under what display
//! name.

mod build_guide;

pub use build_guide::{summarize, summarize_art, RowColorCount, RowSummary};
