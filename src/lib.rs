//! Randomized photo-collage generation with rejection-sampling collision avoidance
//!
//! The system classifies a pool of decoded images into background and
//! foreground layers, then stochastically places them onto a canvas while
//! bounding pairwise overlap and keeping the head region of already-placed
//! images visible.

#![forbid(unsafe_code)]

/// Placement engine, attempt sampling, and collaborator contracts
pub mod algorithm;
/// Transparency inspection and background/foreground classification
pub mod analysis;
/// Rectangle primitives and occlusion rules
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Software canvas rasterization of accepted placements
pub mod render;

pub use io::error::{CollageError, Result};
