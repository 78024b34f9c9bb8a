//! Placement engine and randomized attempt sampling
//!
//! The engine walks the combined candidate sequence once, drawing each
//! accepted placement immediately; a bounded retry loop with rejection
//! sampling keeps pairwise overlap under the configured IoU ceiling and
//! keeps head bands of earlier placements visible.

/// Placement engine, configuration, and collaborator contracts
pub mod engine;
/// Randomized geometry sampling for a single placement attempt
pub mod sampler;

pub use engine::{Phase, Placement, PlacementConfig, PlacementEngine, Renderer, RunSummary};
