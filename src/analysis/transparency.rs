//! Alpha-channel inspection for layer routing

use image::RgbaImage;

/// Check whether any pixel of the image is less than fully opaque
///
/// Scans the entire alpha channel, so cost is proportional to the pixel
/// count. Callers are expected to consult the result at most once per image
/// rather than re-scanning.
pub fn has_transparency(image: &RgbaImage) -> bool {
    image.pixels().any(|pixel| pixel.0[3] < u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_fully_opaque_image() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
        assert!(!has_transparency(&image));
    }

    #[test]
    fn test_single_translucent_pixel() {
        let mut image = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
        image.put_pixel(3, 2, Rgba([200, 100, 50, 254]));
        assert!(has_transparency(&image));
    }

    #[test]
    fn test_fully_transparent_image() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        assert!(has_transparency(&image));
    }
}
