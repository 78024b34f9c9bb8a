//! Axis-aligned rectangle representation and the intersection-over-union metric

/// Axis-aligned rectangle in canvas pixel coordinates
///
/// Stored as top-left corner plus extent. A fresh value is constructed for
/// every placement attempt; rectangles are never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge in pixels
    pub x: f64,
    /// Top edge in pixels
    pub y: f64,
    /// Width in pixels
    pub w: f64,
    /// Height in pixels
    pub h: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extent
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Area in square pixels
    pub const fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Right edge coordinate
    pub const fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge coordinate
    pub const fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// Intersection-over-union of two rectangles
///
/// Returns a value in `[0, 1]`: `0.0` for disjoint rectangles, `1.0` for
/// identical ones. Symmetric in its arguments. A zero-area intersection
/// short-circuits before the division, which also covers degenerate
/// zero-extent rectangles.
pub fn iou(a: &Rect, b: &Rect) -> f64 {
    let x1 = a.x.max(b.x);
    let y1 = a.y.max(b.y);
    let x2 = a.right().min(b.right());
    let y2 = a.bottom().min(b.bottom());

    let intersection = (x2 - x1).max(0.0) * (y2 - y1).max(0.0);
    if intersection <= 0.0 {
        return 0.0;
    }

    intersection / (a.area() + b.area() - intersection)
}
