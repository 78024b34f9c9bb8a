//! Head-band occlusion rules for placed rectangles
//!
//! The top slice of every placed rectangle is treated as a protected "head"
//! region that later placements must not cover. The band height is a
//! per-run fraction of the rectangle's height.

use crate::geometry::rect::{Rect, iou};

/// IoU above which a candidate counts as occluding a protected head band
///
/// Fixed tolerance separating true occlusion from negligible numerical
/// overlap. Not a tunable parameter.
pub const HEAD_OVERLAP_TOLERANCE: f64 = 0.01;

/// Top slice of a placed rectangle treated as its protected head region
///
/// Keeps `x`, `y` and `w`, scales the height by `head_ratio`. A ratio of
/// zero yields a degenerate zero-height band that can never be occluded.
pub const fn head_rect(rect: &Rect, head_ratio: f64) -> Rect {
    Rect::new(rect.x, rect.y, rect.w, rect.h * head_ratio)
}

/// Check whether a candidate occludes the head band of any placed rectangle
pub fn overlaps_any_head(candidate: &Rect, placed: &[Rect], head_ratio: f64) -> bool {
    placed
        .iter()
        .any(|rect| iou(candidate, &head_rect(rect, head_ratio)) > HEAD_OVERLAP_TOLERANCE)
}
