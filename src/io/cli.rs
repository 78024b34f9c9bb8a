//! Command-line interface for generating collages from image folders

use crate::algorithm::engine::{PlacementConfig, PlacementEngine, RunSummary};
use crate::analysis::classifier::SourceImage;
use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_HEAD_RATIO, DEFAULT_IMAGE_COUNT,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_IOU, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE,
    DEFAULT_OUTPUT_NAME, DEFAULT_ROTATION_MAX, DEFAULT_ROTATION_MIN, DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::image::{collect_paths, export_canvas_as_png, load_sources};
use crate::io::progress::{NullSink, ProgressBarSink};
use crate::render::canvas::CanvasRenderer;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "randcollage")]
#[command(
    version,
    about = "Generate a random photo collage with overlap-aware placement"
)]
/// Command-line arguments for the collage generator
pub struct Cli {
    /// Input image file or directory of images
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub canvas_width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub canvas_height: u32,

    /// Maximum number of images to place
    #[arg(short = 'c', long, default_value_t = DEFAULT_IMAGE_COUNT)]
    pub count: usize,

    /// Minimum draw width in pixels
    #[arg(long, default_value_t = DEFAULT_MIN_SIZE)]
    pub min_size: u32,

    /// Maximum draw width in pixels (exclusive)
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: u32,

    /// Maximum allowed overlap (intersection-over-union) between images
    #[arg(long, default_value_t = DEFAULT_MAX_IOU)]
    pub max_iou: f64,

    /// Placement attempts per image before it is skipped
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Lower rotation bound in degrees
    #[arg(long, default_value_t = DEFAULT_ROTATION_MIN, allow_negative_numbers = true)]
    pub rotation_min: f64,

    /// Upper rotation bound in degrees
    #[arg(long, default_value_t = DEFAULT_ROTATION_MAX, allow_negative_numbers = true)]
    pub rotation_max: f64,

    /// Fraction of each placed image's height protected from occlusion
    #[arg(long, default_value_t = DEFAULT_HEAD_RATIO)]
    pub head_ratio: f64,

    /// Route fully opaque PNG inputs to the bottom layer
    #[arg(short = 'b', long)]
    pub bottom: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Build the placement configuration from the parsed arguments
    pub const fn placement_config(&self) -> PlacementConfig {
        PlacementConfig {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            image_count: self.count,
            min_size: self.min_size,
            max_size: self.max_size,
            max_iou: self.max_iou,
            max_attempts: self.max_attempts,
            rotation_min: self.rotation_min,
            rotation_max: self.rotation_max,
            head_ratio: self.head_ratio,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one generation run from input folder to exported PNG
pub struct CollageProcessor {
    cli: Cli,
}

impl CollageProcessor {
    /// Create a processor from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load sources, run the placement engine, and export the canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be read, no usable images are
    /// found, the configuration is invalid, or the export fails.
    // Allow print for user feedback on placement shortfall
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        let paths = collect_paths(&self.cli.target)?;
        let sources = load_sources(&paths);

        let config = self.cli.placement_config();
        let mut engine = PlacementEngine::new(config, StdRng::seed_from_u64(self.cli.seed))?;
        let mut renderer = CanvasRenderer::new(config.canvas_width, config.canvas_height);

        let summary = self.run_engine(&mut engine, sources, &mut renderer)?;

        export_canvas_as_png(renderer.canvas(), &self.cli.output)?;

        if !self.cli.quiet && summary.placed < summary.total {
            eprintln!(
                "Placed {} of {} images (attempt budget exhausted for the rest)",
                summary.placed, summary.total
            );
        }

        Ok(())
    }

    fn run_engine(
        &self,
        engine: &mut PlacementEngine<StdRng>,
        sources: Vec<SourceImage>,
        renderer: &mut CanvasRenderer,
    ) -> Result<RunSummary> {
        if self.cli.should_show_progress() {
            let mut progress = ProgressBarSink::new();
            engine.run_from_sources(sources, self.cli.bottom, renderer, &mut progress)
        } else {
            let mut progress = NullSink;
            engine.run_from_sources(sources, self.cli.bottom, renderer, &mut progress)
        }
    }
}
