//! Background/foreground routing of decoded source images

use crate::analysis::transparency::has_transparency;
use image::RgbaImage;

/// Layer membership assigned during classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Attempted first, so it tends to land at the bottom of the draw order
    Background,
    /// Attempted after every background candidate
    Foreground,
}

/// Decoded input image plus the file name it was loaded from
///
/// The name is kept because routing inspects the file extension, not the
/// decoded pixel format.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Original file name
    pub name: String,
    /// Decoded RGBA bitmap
    pub image: RgbaImage,
}

/// Placement candidate produced by classification
///
/// Owned by the placement engine for the duration of one run and never
/// mutated. Intrinsic dimensions are used to preserve aspect ratio.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Original file name
    pub name: String,
    /// Decoded RGBA bitmap
    pub image: RgbaImage,
    /// Assigned layer
    pub layer: Layer,
}

impl Candidate {
    /// Intrinsic bitmap width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Intrinsic bitmap height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Split decoded images into background and foreground layers
///
/// An image is routed to the background only when the policy flag is set,
/// its file name ends in a PNG extension (case-insensitive) and it contains
/// no transparent pixels; everything else goes to the foreground. Input
/// order is preserved within each layer. The transparency scan only runs
/// when the cheaper gates already passed, so it happens at most once per
/// image.
pub fn classify(
    sources: Vec<SourceImage>,
    non_transparent_png_bottom: bool,
) -> (Vec<Candidate>, Vec<Candidate>) {
    let mut background = Vec::new();
    let mut foreground = Vec::new();

    for source in sources {
        let is_png = source.name.to_lowercase().ends_with(".png");
        let layer = if non_transparent_png_bottom && is_png && !has_transparency(&source.image) {
            Layer::Background
        } else {
            Layer::Foreground
        };

        let candidate = Candidate {
            name: source.name,
            image: source.image,
            layer,
        };
        match layer {
            Layer::Background => background.push(candidate),
            Layer::Foreground => foreground.push(candidate),
        }
    }

    (background, foreground)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn source(name: &str, alpha: u8) -> SourceImage {
        SourceImage {
            name: name.to_string(),
            image: RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, alpha])),
        }
    }

    #[test]
    fn test_opaque_png_goes_to_background_when_policy_enabled() {
        let (background, foreground) = classify(vec![source("photo.png", 255)], true);
        assert_eq!(background.len(), 1);
        assert!(foreground.is_empty());
        assert_eq!(background.first().map(|c| c.layer), Some(Layer::Background));
    }

    #[test]
    fn test_opaque_png_goes_to_foreground_when_policy_disabled() {
        let (background, foreground) = classify(vec![source("photo.png", 255)], false);
        assert!(background.is_empty());
        assert_eq!(foreground.len(), 1);
    }

    #[test]
    fn test_transparent_png_always_goes_to_foreground() {
        let (background, foreground) = classify(vec![source("sticker.png", 128)], true);
        assert!(background.is_empty());
        assert_eq!(foreground.len(), 1);
    }

    #[test]
    fn test_non_png_opaque_image_goes_to_foreground() {
        let (background, foreground) = classify(vec![source("photo.jpg", 255)], true);
        assert!(background.is_empty());
        assert_eq!(foreground.len(), 1);
    }

    #[test]
    fn test_png_extension_check_is_case_insensitive() {
        let (background, foreground) = classify(vec![source("PHOTO.PNG", 255)], true);
        assert_eq!(background.len(), 1);
        assert!(foreground.is_empty());
    }

    #[test]
    fn test_input_order_preserved_within_layers() {
        let sources = vec![
            source("a.png", 255),
            source("b.jpg", 255),
            source("c.png", 255),
            source("d.png", 0),
        ];
        let (background, foreground) = classify(sources, true);
        let background_names: Vec<_> = background.iter().map(|c| c.name.as_str()).collect();
        let foreground_names: Vec<_> = foreground.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(background_names, vec!["a.png", "c.png"]);
        assert_eq!(foreground_names, vec!["b.jpg", "d.png"]);
    }
}
