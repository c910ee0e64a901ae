//! Scoring Constants
//!
//! Every weight, threshold and sentinel used by the analyzers, the
//! aggregator and the risk classifier. The classifier thresholds were
//! calibrated against these exact values, so they are not configurable.

/// Score reported by an analyzer that has no signal to work with
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Letter-size consistency's "insufficient data" score. Deliberately more
/// lenient than [`NEUTRAL_SCORE`]: single-stroke sessions cannot exhibit
/// inconsistency.
pub const NEUTRAL_LETTER_SIZE_SCORE: f64 = 70.0;

/// Pressure is not sensed by the capture surface; the metric is a fixed value.
pub const WRITING_PRESSURE_VARIANCE_PLACEHOLDER: f64 = 50.0;

// ---------------------------------------------------------------------------
// Analyzer parameters
// ---------------------------------------------------------------------------

/// Smoothness penalty per unit of mean |angle| / π
pub const SMOOTHNESS_ANGLE_SCALE: f64 = 120.0;

/// Speed consistency penalty per unit of coefficient of variation
pub const SPEED_CV_SCALE: f64 = 40.0;

/// Letter-size consistency penalty per unit of coefficient of variation
pub const LETTER_SIZE_CV_SCALE: f64 = 60.0;

/// Strokes whose chord is at or below this length (px) are noise for precision
pub const MIN_PRECISION_CHORD_PX: f64 = 5.0;

/// Canvas-usage step map: (upper bound exclusive, score)
pub const CANVAS_USAGE_STEPS: [(f64, f64); 3] = [(0.1, 20.0), (0.3, 60.0), (0.8, 100.0)];

/// Canvas-usage score at or above the last step (edge clipping)
pub const CANVAS_OVERUSE_SCORE: f64 = 80.0;

/// Centering penalty at maximum eccentricity
pub const CENTERING_PENALTY_SCALE: f64 = 80.0;

/// Tremor window must span less than this (ms)
pub const TREMOR_WINDOW_MS: i64 = 200;

/// Both joint angles must exceed this (radians)
pub const TREMOR_MIN_ANGLE_RAD: f64 = 1.2;

/// Gap between strokes that counts as a hesitation (strictly greater)
pub const INTER_STROKE_PAUSE_MS: i64 = 400;

/// Gap inside a stroke that counts as a hesitation (strictly greater)
pub const INTRA_STROKE_PAUSE_MS: i64 = 600;

// ---------------------------------------------------------------------------
// Aggregation weights
// ---------------------------------------------------------------------------

pub const MOTOR_SMOOTHNESS_WEIGHT: f64 = 0.40;
pub const MOTOR_PRECISION_WEIGHT: f64 = 0.30;
pub const MOTOR_TREMOR_WEIGHT: f64 = 0.30;
/// Penalty points per detected tremor
pub const TREMOR_PENALTY_PER_COUNT: f64 = 8.0;

pub const FLUENCY_SPEED_WEIGHT: f64 = 0.40;
pub const FLUENCY_HESITATION_WEIGHT: f64 = 0.35;
pub const FLUENCY_PAUSE_WEIGHT: f64 = 0.25;
/// Penalty points per hesitation
pub const HESITATION_PENALTY_PER_COUNT: f64 = 10.0;
/// Average pause (ms) per penalty point
pub const PAUSE_MS_PER_PENALTY_POINT: f64 = 20.0;

pub const SPATIAL_ORGANIZATION_WEIGHT: f64 = 0.60;
pub const SPATIAL_LETTER_SIZE_WEIGHT: f64 = 0.40;

pub const CONSISTENCY_SPEED_WEIGHT: f64 = 0.30;
pub const CONSISTENCY_LETTER_SIZE_WEIGHT: f64 = 0.40;
pub const CONSISTENCY_SMOOTHNESS_WEIGHT: f64 = 0.30;

pub const OVERALL_MOTOR_WEIGHT: f64 = 0.30;
pub const OVERALL_FLUENCY_WEIGHT: f64 = 0.25;
pub const OVERALL_SPATIAL_WEIGHT: f64 = 0.20;
pub const OVERALL_CONSISTENCY_WEIGHT: f64 = 0.25;

// ---------------------------------------------------------------------------
// Risk thresholds
// ---------------------------------------------------------------------------

pub const MOTOR_CONTROL_THRESHOLD: f64 = 50.0;
pub const MICRO_TREMOR_THRESHOLD: u32 = 8;
pub const WRITING_FLUENCY_THRESHOLD: f64 = 45.0;
pub const HESITATION_THRESHOLD: u32 = 6;
pub const SPATIAL_AWARENESS_THRESHOLD: f64 = 40.0;
pub const CONSISTENCY_THRESHOLD: f64 = 40.0;
pub const STROKE_PRECISION_THRESHOLD: f64 = 35.0;

/// Clamp a score into [0, 100]
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
