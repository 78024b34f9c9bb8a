//! Rectangle primitives and occlusion rules
//!
//! Everything in this module is pure geometry: the axis-aligned rectangle
//! type, the intersection-over-union metric, and the head-band predicate
//! built on top of it. No function here can fail.

/// Head-band occlusion predicate for placed rectangles
pub mod occlusion;
/// Axis-aligned rectangle representation and overlap metric
pub mod rect;

pub use rect::Rect;
