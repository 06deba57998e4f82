//! Color value type and distance metric
//!
//! This module provides [`Rgb`], the exact 24-bit color type used throughout
//! the conversion pipeline, with strict hex parsing and Euclidean distance.

mod rgb;

pub use rgb::Rgb;
