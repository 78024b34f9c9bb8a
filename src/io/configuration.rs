//! Runtime configuration defaults

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1920;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1080;

/// Default upper bound on the number of placements attempted
pub const DEFAULT_IMAGE_COUNT: usize = 20;

/// Default minimum draw width in pixels
pub const DEFAULT_MIN_SIZE: u32 = 100;
/// Default maximum draw width in pixels (exclusive)
pub const DEFAULT_MAX_SIZE: u32 = 400;

/// Default maximum allowed intersection-over-union between placed images
pub const DEFAULT_MAX_IOU: f64 = 0.2;

/// Default retry budget per candidate before it is skipped
pub const DEFAULT_MAX_ATTEMPTS: usize = 200;

/// Default lower rotation bound in degrees
pub const DEFAULT_ROTATION_MIN: f64 = -30.0;
/// Default upper rotation bound in degrees
pub const DEFAULT_ROTATION_MAX: f64 = 30.0;

/// Default fraction of a placed image's height protected as its head band
pub const DEFAULT_HEAD_RATIO: f64 = 0.3;

// Output settings
/// Default output file name
pub const DEFAULT_OUTPUT_NAME: &str = "collage.png";
