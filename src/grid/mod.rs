//! Sampling grid geometry
//!
//! This module computes the downscale factor, render dimensions, grid
//! dimensions, and per-cell sample coordinates for a conversion request.

mod sampling;

pub use sampling::{InvalidCellSize, SamplingGrid};
