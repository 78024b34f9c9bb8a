//! Rejection-sampling placement engine and its collaborator contracts

use crate::algorithm::sampler::{Attempt, sample_attempt};
use crate::analysis::classifier::{Candidate, SourceImage, classify};
use crate::geometry::occlusion::overlaps_any_head;
use crate::geometry::rect::{Rect, iou};
use crate::io::error::{CollageError, Result, invalid_parameter};
use crate::io::progress::ProgressSink;
use image::RgbaImage;
use rand::Rng;

/// Drawing surface contract for accepted placements
///
/// The image must be drawn centered on the rectangle's midpoint, rotated by
/// the angle in degrees (clockwise positive), at exactly the rectangle's
/// extent. The transform must not leak into subsequent draws.
pub trait Renderer {
    /// Draw one accepted placement
    fn draw(&mut self, image: &RgbaImage, rect: &Rect, angle_degrees: f64);
}

/// Immutable configuration for one generation run
#[derive(Debug, Clone, Copy)]
pub struct PlacementConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Upper bound on the number of candidates attempted
    pub image_count: usize,
    /// Minimum sampled draw width in pixels
    pub min_size: u32,
    /// Maximum sampled draw width in pixels (exclusive)
    pub max_size: u32,
    /// Maximum allowed intersection-over-union against accepted placements
    pub max_iou: f64,
    /// Retry budget per candidate
    pub max_attempts: usize,
    /// Lower rotation bound in degrees
    pub rotation_min: f64,
    /// Upper rotation bound in degrees
    pub rotation_max: f64,
    /// Fraction of each placed image's height protected as its head band
    pub head_ratio: f64,
}

impl PlacementConfig {
    /// Validate structural bounds before a run begins
    ///
    /// Degenerate ranges would otherwise survive into the sampler and
    /// silently produce empty or inverted sampling intervals.
    ///
    /// # Errors
    ///
    /// Returns `CollageError::InvalidParameter` for non-positive canvas
    /// dimensions, counts, or sizes, an inverted size or rotation range,
    /// or a ratio outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 {
            return Err(invalid_parameter(
                "canvas_width",
                &self.canvas_width,
                &"must be positive",
            ));
        }
        if self.canvas_height == 0 {
            return Err(invalid_parameter(
                "canvas_height",
                &self.canvas_height,
                &"must be positive",
            ));
        }
        if self.image_count == 0 {
            return Err(invalid_parameter(
                "image_count",
                &self.image_count,
                &"must be positive",
            ));
        }
        if self.min_size == 0 {
            return Err(invalid_parameter(
                "min_size",
                &self.min_size,
                &"must be positive",
            ));
        }
        if self.min_size >= self.max_size {
            return Err(invalid_parameter(
                "min_size",
                &self.min_size,
                &format!("must be less than max_size ({})", self.max_size),
            ));
        }
        if !(0.0..=1.0).contains(&self.max_iou) {
            return Err(invalid_parameter(
                "max_iou",
                &self.max_iou,
                &"must be within [0, 1]",
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"must be positive",
            ));
        }
        if self.rotation_min > self.rotation_max {
            return Err(invalid_parameter(
                "rotation_min",
                &self.rotation_min,
                &format!("must not exceed rotation_max ({})", self.rotation_max),
            ));
        }
        if !(0.0..=1.0).contains(&self.head_ratio) {
            return Err(invalid_parameter(
                "head_ratio",
                &self.head_ratio,
                &"must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Lifecycle of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No run started yet
    Idle,
    /// Routing sources into background and foreground layers
    Classifying,
    /// Attempting randomized placements
    Placing,
    /// Terminal: final counts are available
    Done,
}

/// Committed geometry for one successfully placed candidate
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    /// Index into the combined candidate sequence
    pub candidate_index: usize,
    /// Accepted rectangle on the canvas
    pub rect: Rect,
    /// Accepted rotation in degrees
    pub angle_degrees: f64,
}

/// Final counts and accepted placements of a run, in draw order
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of candidates successfully placed
    pub placed: usize,
    /// Number of candidates attempted
    pub total: usize,
    /// Accepted placements, earliest drawn first
    pub placements: Vec<Placement>,
}

/// Randomized placement engine with bounded-retry rejection sampling
///
/// Candidates are evaluated strictly sequentially; every accept/reject
/// decision is made against all previously accepted rectangles, so the
/// engine owns the accepted set exclusively for the duration of a run.
pub struct PlacementEngine<R: Rng> {
    config: PlacementConfig,
    rng: R,
    phase: Phase,
}

impl<R: Rng> PlacementEngine<R> {
    /// Create an engine for one generation run
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: PlacementConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            phase: Phase::Idle,
        })
    }

    /// Current lifecycle phase
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Classify raw sources, then place the resulting candidates
    ///
    /// # Errors
    ///
    /// Returns `CollageError::NoUsableImages` when classification leaves
    /// nothing to place.
    pub fn run_from_sources(
        &mut self,
        sources: Vec<SourceImage>,
        non_transparent_png_bottom: bool,
        renderer: &mut impl Renderer,
        progress: &mut impl ProgressSink,
    ) -> Result<RunSummary> {
        self.phase = Phase::Classifying;
        let (background, foreground) = classify(sources, non_transparent_png_bottom);
        self.run(background, foreground, renderer, progress)
    }

    /// Place candidates onto the canvas, background layer first
    ///
    /// Only the first `image_count` candidates of the combined sequence are
    /// attempted. A candidate whose retry budget is exhausted is skipped
    /// silently, so the final placed count may fall short of the total.
    /// The progress sink receives exactly one `report` per candidate.
    ///
    /// # Errors
    ///
    /// Returns `CollageError::NoUsableImages` when both layers are empty.
    pub fn run(
        &mut self,
        background: Vec<Candidate>,
        foreground: Vec<Candidate>,
        renderer: &mut impl Renderer,
        progress: &mut impl ProgressSink,
    ) -> Result<RunSummary> {
        let mut candidates = background;
        candidates.extend(foreground);
        if candidates.is_empty() {
            return Err(CollageError::NoUsableImages);
        }

        self.phase = Phase::Placing;
        let total = self.config.image_count.min(candidates.len());
        let mut placed_rects: Vec<Rect> = Vec::with_capacity(total);
        let mut placements: Vec<Placement> = Vec::with_capacity(total);

        for (index, candidate) in candidates.iter().take(total).enumerate() {
            if let Some(attempt) = self.try_place(candidate, &placed_rects) {
                renderer.draw(&candidate.image, &attempt.rect, attempt.angle_degrees);
                placed_rects.push(attempt.rect);
                placements.push(Placement {
                    candidate_index: index,
                    rect: attempt.rect,
                    angle_degrees: attempt.angle_degrees,
                });
            }

            // One notification per candidate, placed or skipped. This is
            // also the engine's only cooperative yield point; the inner
            // attempt loop runs to completion.
            let percent = (placements.len() * 100 / total) as u8;
            progress.report(
                percent,
                &format!("Placing image {} of {total}", placements.len()),
            );
        }

        self.phase = Phase::Done;
        let placed = placements.len();
        progress.finish(&format!("Placed {placed} of {total} images"));

        Ok(RunSummary {
            placed,
            total,
            placements,
        })
    }

    // Bounded retry loop for one candidate. Rejection here is expected and
    // absorbed; None means the budget ran out.
    fn try_place(&mut self, candidate: &Candidate, placed_rects: &[Rect]) -> Option<Attempt> {
        for _ in 0..self.config.max_attempts {
            let Some(attempt) = sample_attempt(
                &mut self.rng,
                &self.config,
                candidate.width(),
                candidate.height(),
            ) else {
                continue;
            };

            if placed_rects
                .iter()
                .any(|rect| iou(&attempt.rect, rect) > self.config.max_iou)
            {
                continue;
            }
            if overlaps_any_head(&attempt.rect, placed_rects, self.config.head_ratio) {
                continue;
            }

            return Some(attempt);
        }
        None
    }
}
