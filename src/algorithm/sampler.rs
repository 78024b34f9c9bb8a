//! Randomized geometry sampling for a single placement attempt

use crate::algorithm::engine::PlacementConfig;
use crate::geometry::rect::Rect;
use rand::Rng;

/// One sampled placement attempt: canvas geometry plus rotation
#[derive(Debug, Clone, Copy)]
pub struct Attempt {
    /// Proposed rectangle on the canvas
    pub rect: Rect,
    /// Rotation in degrees, clockwise positive
    pub angle_degrees: f64,
}

/// Sample one placement attempt for an image with the given intrinsic size
///
/// Draw width is an integer sampled uniformly from `[min_size, max_size)`;
/// height follows from the image's aspect ratio. Position is floored to
/// whole pixels within the canvas. Returns `None` when the sampled size
/// cannot fit the canvas on either axis; an empty sampling range is a
/// failed attempt, not an error.
pub fn sample_attempt<R: Rng>(
    rng: &mut R,
    config: &PlacementConfig,
    image_width: u32,
    image_height: u32,
) -> Option<Attempt> {
    let size_span = f64::from(config.max_size - config.min_size);
    let size = rng
        .random::<f64>()
        .mul_add(size_span, f64::from(config.min_size))
        .floor();

    let ratio = f64::from(image_height) / f64::from(image_width);
    let draw_w = size;
    let draw_h = size * ratio;

    let span_x = f64::from(config.canvas_width) - draw_w;
    let span_y = f64::from(config.canvas_height) - draw_h;
    if span_x < 0.0 || span_y < 0.0 {
        return None;
    }

    let x = (rng.random::<f64>() * span_x).floor();
    let y = (rng.random::<f64>() * span_y).floor();
    let angle_degrees = rng
        .random::<f64>()
        .mul_add(config.rotation_max - config.rotation_min, config.rotation_min);

    Some(Attempt {
        rect: Rect::new(x, y, draw_w, draw_h),
        angle_degrees,
    })
}
