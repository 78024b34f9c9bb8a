//! Off-screen RGBA canvas compositor
//!
//! Implements the engine's renderer contract in software: each accepted
//! placement is drawn centered on its rectangle, rotated clockwise by the
//! accepted angle, scaled to the rectangle's extent, and composited
//! source-over onto the canvas. The transform is local to each draw call.

use crate::algorithm::engine::Renderer;
use crate::geometry::rect::Rect;
use image::{Rgba, RgbaImage};

/// Off-screen RGBA canvas that rasterizes rotated placements
pub struct CanvasRenderer {
    canvas: RgbaImage,
}

impl CanvasRenderer {
    /// Create a fully transparent canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
        }
    }

    /// Borrow the composited canvas
    pub const fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Consume the renderer and return the composited canvas
    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, image: &RgbaImage, rect: &Rect, angle_degrees: f64) {
        let theta = angle_degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        let center_x = rect.x + rect.w / 2.0;
        let center_y = rect.y + rect.h / 2.0;
        let half_w = rect.w / 2.0;
        let half_h = rect.h / 2.0;

        // Bounding box of the rotated rectangle, clamped to the canvas
        let extent_x = half_w.mul_add(cos.abs(), half_h * sin.abs());
        let extent_y = half_w.mul_add(sin.abs(), half_h * cos.abs());
        let min_x = (center_x - extent_x).floor().max(0.0) as u32;
        let min_y = (center_y - extent_y).floor().max(0.0) as u32;
        let max_x = ((center_x + extent_x).ceil().max(0.0) as u32).min(self.canvas.width());
        let max_y = ((center_y + extent_y).ceil().max(0.0) as u32).min(self.canvas.height());

        for py in min_y..max_y {
            for px in min_x..max_x {
                let dx = f64::from(px) + 0.5 - center_x;
                let dy = f64::from(py) + 0.5 - center_y;

                // Inverse rotation into the unrotated rectangle's frame
                let u = dx.mul_add(cos, dy * sin);
                let v = (-dx).mul_add(sin, dy * cos);
                if u < -half_w || u > half_w || v < -half_h || v > half_h {
                    continue;
                }

                let source_x = (u + half_w) / rect.w * f64::from(image.width());
                let source_y = (v + half_h) / rect.h * f64::from(image.height());
                let source = sample_bilinear(image, source_x, source_y);
                if source[3] <= 0.0 {
                    continue;
                }

                let dest = *self.canvas.get_pixel(px, py);
                self.canvas.put_pixel(px, py, blend_over(source, dest));
            }
        }
    }
}

fn pixel_channels(image: &RgbaImage, x: u32, y: u32) -> [f64; 4] {
    let pixel = image.get_pixel(x, y).0;
    [
        f64::from(pixel[0]),
        f64::from(pixel[1]),
        f64::from(pixel[2]),
        f64::from(pixel[3]),
    ]
}

fn lerp4(a: [f64; 4], b: [f64; 4], t: f64) -> [f64; 4] {
    [
        (b[0] - a[0]).mul_add(t, a[0]),
        (b[1] - a[1]).mul_add(t, a[1]),
        (b[2] - a[2]).mul_add(t, a[2]),
        (b[3] - a[3]).mul_add(t, a[3]),
    ]
}

// Bilinear sample at continuous source coordinates, clamped at the edges
fn sample_bilinear(image: &RgbaImage, source_x: f64, source_y: f64) -> [f64; 4] {
    let fx = source_x - 0.5;
    let fy = source_y - 0.5;
    let base_x = fx.floor();
    let base_y = fy.floor();
    let tx = fx - base_x;
    let ty = fy - base_y;

    let last_x = image.width() - 1;
    let last_y = image.height() - 1;
    let clamp = |value: f64, last: u32| value.clamp(0.0, f64::from(last)) as u32;

    let x0 = clamp(base_x, last_x);
    let x1 = clamp(base_x + 1.0, last_x);
    let y0 = clamp(base_y, last_y);
    let y1 = clamp(base_y + 1.0, last_y);

    let top = lerp4(pixel_channels(image, x0, y0), pixel_channels(image, x1, y0), tx);
    let bottom = lerp4(pixel_channels(image, x0, y1), pixel_channels(image, x1, y1), tx);
    lerp4(top, bottom, ty)
}

// Source-over compositing in straight (non-premultiplied) alpha
fn blend_over(source: [f64; 4], dest: Rgba<u8>) -> Rgba<u8> {
    let source_alpha = source[3] / 255.0;
    let dest_alpha = f64::from(dest.0[3]) / 255.0;
    let out_alpha = dest_alpha.mul_add(1.0 - source_alpha, source_alpha);
    if out_alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: f64, d: f64| {
        let value = s.mul_add(source_alpha, d * dest_alpha * (1.0 - source_alpha)) / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend(source[0], f64::from(dest.0[0])),
        blend(source[1], f64::from(dest.0[1])),
        blend(source[2], f64::from(dest.0[2])),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
