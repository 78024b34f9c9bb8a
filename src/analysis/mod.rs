//! Image inspection and layer classification
//!
//! Decoded inputs are inspected once for alpha transparency and routed into
//! a background or foreground layer; the layer only biases the order in
//! which the placement engine attempts candidates.

/// Background/foreground routing of decoded images
pub mod classifier;
/// Alpha-channel inspection
pub mod transparency;

pub use classifier::{Candidate, Layer, SourceImage};
