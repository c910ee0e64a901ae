//! Velocity & Pause Profiling
//!
//! Writing fluency from the time axis of the capture: how evenly the pen
//! moves, how fast it travels overall, and where it stops. All timing comes
//! from sample timestamps, never from sample indices, because the capture
//! surface has no fixed sampling cadence.

use super::geometry::path_length;
use super::stats::coefficient_of_variation;
use crate::capture::types::Stroke;
use crate::constants::{
    clamp_score, INTER_STROKE_PAUSE_MS, INTRA_STROKE_PAUSE_MS, NEUTRAL_SCORE, SPEED_CV_SCALE,
};

/// Result of pause analysis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HesitationAnalysis {
    /// Long pauses between strokes plus long stalls inside strokes
    pub count: u32,
    /// Mean of all positive gaps between consecutive strokes (ms)
    pub avg_pause: f64,
}

/// Instantaneous speeds (px/ms) for every consecutive sample pair with a
/// positive time delta
pub fn speed_samples(strokes: &[Stroke]) -> Vec<f64> {
    strokes
        .iter()
        .flat_map(|s| s.points.windows(2))
        .filter_map(|w| {
            let dt = w[1].millis_since(&w[0]);
            if dt > 0 {
                Some(w[0].distance_to(&w[1]) / dt as f64)
            } else {
                None
            }
        })
        .collect()
}

/// Speed consistency in [0, 100].
///
/// Penalizes the coefficient of variation of instantaneous speed. Uniform
/// pacing scores 100; frequent starts and stops score low. Fewer than two
/// samples, or a zero mean speed, yield the neutral score.
pub fn speed_consistency(strokes: &[Stroke]) -> f64 {
    let speeds = speed_samples(strokes);
    match coefficient_of_variation(&speeds) {
        Some(cv) => clamp_score(100.0 - cv * SPEED_CV_SCALE),
        None => NEUTRAL_SCORE,
    }
}

/// Average drawing speed (px/ms): total traced distance over total time the
/// pen was down. 0 when no stroke spans any time.
pub fn avg_stroke_speed(strokes: &[Stroke]) -> f64 {
    let distance: f64 = strokes.iter().map(|s| path_length(&s.points)).sum();
    let duration = strokes
        .iter()
        .map(|s| s.duration_ms().max(0))
        .fold(0i64, i64::saturating_add);
    if duration > 0 {
        distance / duration as f64
    } else {
        0.0
    }
}

/// Count hesitations and average the gaps between strokes.
///
/// A gap between strokes longer than the inter-stroke threshold is one
/// hesitation; every positive gap, long or short, feeds the average pause.
/// Inside a stroke, any sample gap longer than the intra-stroke threshold
/// is an additional hesitation.
pub fn analyze_hesitations(strokes: &[Stroke]) -> HesitationAnalysis {
    let mut count = 0u32;
    let mut total_pause = 0.0;
    let mut gaps = 0usize;

    for pair in strokes.windows(2) {
        let (Some(prev_end), Some(next_start)) = (pair[0].last(), pair[1].first()) else {
            continue;
        };
        let gap = next_start.millis_since(prev_end);
        if gap > INTER_STROKE_PAUSE_MS {
            count += 1;
        }
        if gap > 0 {
            total_pause += gap as f64;
            gaps += 1;
        }
    }

    for stroke in strokes {
        count += stroke
            .points
            .windows(2)
            .filter(|w| w[1].millis_since(&w[0]) > INTRA_STROKE_PAUSE_MS)
            .count() as u32;
    }

    let avg_pause = if gaps > 0 {
        total_pause / gaps as f64
    } else {
        0.0
    };

    HesitationAnalysis { count, avg_pause }
}
