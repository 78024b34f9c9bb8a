//! Scenario tests for the rejection-sampling placement engine

use image::{Rgba, RgbaImage};
use rand::{SeedableRng, rngs::StdRng};
use randcollage::CollageError;
use randcollage::algorithm::engine::{Phase, PlacementConfig, PlacementEngine, Renderer};
use randcollage::analysis::classifier::{Candidate, Layer, SourceImage};
use randcollage::geometry::rect::{Rect, iou};
use randcollage::io::progress::ProgressSink;

#[derive(Default)]
struct RecordingRenderer {
    draws: Vec<(u32, u32)>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, image: &RgbaImage, _rect: &Rect, _angle_degrees: f64) {
        self.draws.push((image.width(), image.height()));
    }
}

#[derive(Default)]
struct RecordingSink {
    reports: Vec<u8>,
    finished: bool,
}

impl ProgressSink for RecordingSink {
    fn report(&mut self, percent: u8, _message: &str) {
        self.reports.push(percent);
    }

    fn finish(&mut self, _message: &str) {
        self.finished = true;
    }
}

fn candidate(width: u32, height: u32, layer: Layer) -> Candidate {
    Candidate {
        name: format!("{width}x{height}.png"),
        image: RgbaImage::from_pixel(width, height, Rgba([50, 50, 50, 255])),
        layer,
    }
}

fn foregrounds(count: usize, width: u32, height: u32) -> Vec<Candidate> {
    (0..count)
        .map(|_| candidate(width, height, Layer::Foreground))
        .collect()
}

fn engine(config: PlacementConfig, seed: u64) -> PlacementEngine<StdRng> {
    match PlacementEngine::new(config, StdRng::seed_from_u64(seed)) {
        Ok(engine) => engine,
        Err(err) => unreachable!("valid test configuration rejected: {err}"),
    }
}

const fn base_config() -> PlacementConfig {
    PlacementConfig {
        canvas_width: 100,
        canvas_height: 100,
        image_count: 3,
        min_size: 1,
        max_size: 2,
        max_iou: 1.0,
        max_attempts: 1,
        rotation_min: 0.0,
        rotation_max: 0.0,
        head_ratio: 0.0,
    }
}

// Size 1 placements on a 100x100 canvas never bind the IoU constraint
#[test]
fn test_tiny_candidates_all_place_on_first_attempt() {
    let mut engine = engine(base_config(), 11);
    let mut renderer = RecordingRenderer::default();
    let mut sink = RecordingSink::default();

    let Ok(summary) = engine.run(Vec::new(), foregrounds(3, 1, 1), &mut renderer, &mut sink) else {
        unreachable!("non-empty candidate set must not fail");
    };

    assert_eq!(summary.placed, 3);
    assert_eq!(summary.total, 3);
    assert_eq!(renderer.draws.len(), 3);
}

// With zero allowed overlap, a second full-canvas image can never fit
#[test]
fn test_full_canvas_second_candidate_exhausts_attempts() {
    let mut config = base_config();
    config.image_count = 2;
    config.min_size = 100;
    config.max_size = 101;
    config.max_iou = 0.0;
    config.max_attempts = 5;

    let mut engine = engine(config, 11);
    let mut renderer = RecordingRenderer::default();
    let mut sink = RecordingSink::default();

    let Ok(summary) = engine.run(Vec::new(), foregrounds(2, 100, 100), &mut renderer, &mut sink)
    else {
        unreachable!("non-empty candidate set must not fail");
    };

    assert_eq!(summary.placed, 1);
    assert_eq!(summary.total, 2);
    assert_eq!(renderer.draws.len(), 1);
}

// With the whole rectangle protected as head band, overlap is rejected
// even though the plain IoU ceiling of 1.0 would allow it
#[test]
fn test_full_head_band_blocks_otherwise_allowed_overlap() {
    let mut config = base_config();
    config.image_count = 2;
    config.min_size = 100;
    config.max_size = 101;
    config.max_iou = 1.0;
    config.max_attempts = 5;
    config.head_ratio = 1.0;

    let mut engine = engine(config, 11);
    let mut renderer = RecordingRenderer::default();
    let mut sink = RecordingSink::default();

    let Ok(summary) = engine.run(Vec::new(), foregrounds(2, 100, 100), &mut renderer, &mut sink)
    else {
        unreachable!("non-empty candidate set must not fail");
    };

    assert_eq!(summary.placed, 1);
}

#[test]
fn test_progress_reported_once_per_candidate() {
    let mut config = base_config();
    config.image_count = 4;

    let mut engine = engine(config, 11);
    let mut renderer = RecordingRenderer::default();
    let mut sink = RecordingSink::default();

    let Ok(_summary) = engine.run(Vec::new(), foregrounds(4, 1, 1), &mut renderer, &mut sink)
    else {
        unreachable!("non-empty candidate set must not fail");
    };

    assert_eq!(sink.reports, vec![25, 50, 75, 100]);
    assert!(sink.finished);
}

#[test]
fn test_skipped_candidates_still_notify_progress() {
    let mut config = base_config();
    config.image_count = 2;
    config.min_size = 100;
    config.max_size = 101;
    config.max_iou = 0.0;
    config.max_attempts = 3;

    let mut engine = engine(config, 11);
    let mut renderer = RecordingRenderer::default();
    let mut sink = RecordingSink::default();

    let Ok(_summary) = engine.run(Vec::new(), foregrounds(2, 100, 100), &mut renderer, &mut sink)
    else {
        unreachable!("non-empty candidate set must not fail");
    };

    // One call per candidate; the percent does not advance for the skip
    assert_eq!(sink.reports, vec![50, 50]);
}

#[test]
fn test_pairwise_iou_never_exceeds_ceiling() {
    let config = PlacementConfig {
        canvas_width: 400,
        canvas_height: 400,
        image_count: 12,
        min_size: 40,
        max_size: 80,
        max_iou: 0.25,
        max_attempts: 30,
        rotation_min: -20.0,
        rotation_max: 20.0,
        head_ratio: 0.2,
    };

    let mut engine = engine(config, 99);
    let mut renderer = RecordingRenderer::default();
    let mut sink = RecordingSink::default();

    let Ok(summary) = engine.run(Vec::new(), foregrounds(12, 50, 50), &mut renderer, &mut sink)
    else {
        unreachable!("non-empty candidate set must not fail");
    };

    assert!(summary.placed <= 12);
    let rects: Vec<Rect> = summary.placements.iter().map(|p| p.rect).collect();
    for (i, a) in rects.iter().enumerate() {
        for b in rects.iter().skip(i + 1) {
            assert!(
                iou(a, b) <= 0.25 + 1e-9,
                "accepted placements exceed the IoU ceiling"
            );
        }
    }
}

#[test]
fn test_placed_count_bounded_by_image_count() {
    let mut config = base_config();
    config.image_count = 3;

    let mut engine = engine(config, 11);
    let mut renderer = RecordingRenderer::default();
    let mut sink = RecordingSink::default();

    let Ok(summary) = engine.run(Vec::new(), foregrounds(5, 1, 1), &mut renderer, &mut sink)
    else {
        unreachable!("non-empty candidate set must not fail");
    };

    // Only the first image_count candidates are ever attempted
    assert_eq!(summary.total, 3);
    assert!(summary.placed <= 3);
    assert_eq!(sink.reports.len(), 3);
}

#[test]
fn test_empty_candidate_set_is_rejected() {
    let mut engine = engine(base_config(), 11);
    let mut renderer = RecordingRenderer::default();
    let mut sink = RecordingSink::default();

    let result = engine.run(Vec::new(), Vec::new(), &mut renderer, &mut sink);
    assert!(matches!(result, Err(CollageError::NoUsableImages)));
    assert!(sink.reports.is_empty());
}

#[test]
fn test_phase_progression_across_a_run() {
    let mut engine = engine(base_config(), 11);
    assert_eq!(engine.phase(), Phase::Idle);

    let mut renderer = RecordingRenderer::default();
    let mut sink = RecordingSink::default();
    let Ok(_summary) = engine.run(Vec::new(), foregrounds(3, 1, 1), &mut renderer, &mut sink)
    else {
        unreachable!("non-empty candidate set must not fail");
    };

    assert_eq!(engine.phase(), Phase::Done);
}

// Background candidates come first in the combined sequence, so they are
// drawn first and end up at the bottom of the canvas stack
#[test]
fn test_background_layer_is_drawn_first() {
    let mut config = base_config();
    config.image_count = 2;
    config.min_size = 5;
    config.max_size = 6;
    config.max_attempts = 10;
    config.canvas_width = 200;
    config.canvas_height = 200;

    let mut engine = engine(config, 11);
    let mut renderer = RecordingRenderer::default();
    let mut sink = RecordingSink::default();

    let background = vec![candidate(7, 5, Layer::Background)];
    let foreground = vec![candidate(3, 4, Layer::Foreground)];
    let Ok(summary) = engine.run(background, foreground, &mut renderer, &mut sink) else {
        unreachable!("non-empty candidate set must not fail");
    };

    assert_eq!(renderer.draws.first(), Some(&(7, 5)));
    assert_eq!(summary.placements.first().map(|p| p.candidate_index), Some(0));
}

// An opaque PNG supplied after a transparent one still sorts to the front
// of the candidate sequence when the bottom-layer policy is enabled
#[test]
fn test_run_from_sources_applies_bottom_policy() {
    let mut config = base_config();
    config.image_count = 2;
    config.min_size = 5;
    config.max_size = 6;
    config.max_attempts = 10;
    config.canvas_width = 200;
    config.canvas_height = 200;

    let mut engine = engine(config, 11);
    let mut renderer = RecordingRenderer::default();
    let mut sink = RecordingSink::default();

    let sources = vec![
        SourceImage {
            name: "sticker.png".to_string(),
            image: RgbaImage::from_pixel(3, 3, Rgba([10, 10, 10, 0])),
        },
        SourceImage {
            name: "base.png".to_string(),
            image: RgbaImage::from_pixel(2, 2, Rgba([10, 10, 10, 255])),
        },
    ];

    let Ok(_summary) = engine.run_from_sources(sources, true, &mut renderer, &mut sink) else {
        unreachable!("non-empty source set must not fail");
    };

    assert_eq!(renderer.draws.first(), Some(&(2, 2)));
}
