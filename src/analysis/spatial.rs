//! Spatial Organization Analyzers
//!
//! How the writing sits on the canvas, and how uniform the size of each
//! written unit is.

use super::geometry::BoundingBox;
use super::stats::coefficient_of_variation;
use crate::capture::types::{CanvasSize, Stroke};
use crate::constants::{
    clamp_score, CANVAS_OVERUSE_SCORE, CANVAS_USAGE_STEPS, CENTERING_PENALTY_SCALE,
    LETTER_SIZE_CV_SCALE, NEUTRAL_LETTER_SIZE_SCORE, NEUTRAL_SCORE,
};

/// Score how much of one canvas axis the writing spans.
///
/// Both cramming into a corner and running off the edges are penalized.
pub fn canvas_usage_score(ratio: f64) -> f64 {
    CANVAS_USAGE_STEPS
        .iter()
        .find(|(bound, _)| ratio < *bound)
        .map(|(_, score)| *score)
        .unwrap_or(CANVAS_OVERUSE_SCORE)
}

/// Score how close the writing's center is to the canvas center, floored at 0
pub fn centering_score(bbox: &BoundingBox, canvas: &CanvasSize) -> f64 {
    let (cx, cy) = canvas.center();
    let (bx, by) = bbox.center();
    let offset = (bx - cx).hypot(by - cy);
    let max_offset = cx.hypot(cy);
    if max_offset == 0.0 {
        return 100.0;
    }
    clamp_score(100.0 - CENTERING_PENALTY_SCALE * (offset / max_offset))
}

/// Spatial organization in [0, 100].
///
/// Unweighted mean of horizontal usage, vertical usage and centering,
/// rounded. Neutral when there is nothing drawn or the canvas has a zero
/// dimension.
pub fn spatial_organization(strokes: &[Stroke], canvas: &CanvasSize) -> f64 {
    if !canvas.is_usable() {
        return NEUTRAL_SCORE;
    }
    let Some(bbox) = BoundingBox::from_points(strokes.iter().flat_map(|s| s.points.iter())) else {
        return NEUTRAL_SCORE;
    };

    let width_score = canvas_usage_score(bbox.width() / canvas.width);
    let height_score = canvas_usage_score(bbox.height() / canvas.height);
    let center_score = centering_score(&bbox, canvas);

    clamp_score((width_score + height_score + center_score) / 3.0).round()
}

/// Letter-size consistency in [0, 100].
///
/// Each stroke with at least two samples is taken as one letter-sized unit
/// and measured by the larger side of its bounding box. Multi-stroke
/// glyphs are therefore counted once per stroke. Fewer than two units
/// yield the lenient neutral score, since a single unit cannot be
/// inconsistent.
pub fn letter_size_consistency(strokes: &[Stroke]) -> f64 {
    let sizes: Vec<f64> = strokes
        .iter()
        .filter(|s| s.len() >= 2)
        .filter_map(|s| BoundingBox::from_points(&s.points))
        .map(|b| b.max_dimension())
        .collect();

    if sizes.len() < 2 {
        return NEUTRAL_LETTER_SIZE_SCORE;
    }

    match coefficient_of_variation(&sizes) {
        Some(cv) => clamp_score(100.0 - cv * LETTER_SIZE_CV_SCALE),
        // every unit collapsed to a point: nothing to compare
        None => NEUTRAL_LETTER_SIZE_SCORE,
    }
}
