//! Domain & Overall Scores
//!
//! Fixed linear combinations of the per-metric scores. Every penalty term
//! saturates at 100 before weighting, and each domain score and the overall
//! score are clamped again at the boundary. Domain scores stay fractional so
//! the risk thresholds see the exact value; only the overall score is rounded.

use crate::analysis::DysgraphiaMetrics;
use crate::constants::*;
use serde::{Deserialize, Serialize};

/// The four mid-level composite scores, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScores {
    pub motor_control: f64,
    pub writing_fluency: f64,
    pub spatial_awareness: f64,
    pub consistency: f64,
}

/// `100 - min(points, 100)`
fn saturating_penalty(points: f64) -> f64 {
    100.0 - points.min(100.0)
}

impl DomainScores {
    pub fn from_metrics(m: &DysgraphiaMetrics) -> Self {
        let motor_control = MOTOR_SMOOTHNESS_WEIGHT * m.stroke_smoothness
            + MOTOR_PRECISION_WEIGHT * m.stroke_precision
            + MOTOR_TREMOR_WEIGHT
                * saturating_penalty(m.micro_tremor_count as f64 * TREMOR_PENALTY_PER_COUNT);

        let writing_fluency = FLUENCY_SPEED_WEIGHT * m.speed_consistency
            + FLUENCY_HESITATION_WEIGHT
                * saturating_penalty(m.hesitation_count as f64 * HESITATION_PENALTY_PER_COUNT)
            + FLUENCY_PAUSE_WEIGHT
                * saturating_penalty(m.avg_pause_duration / PAUSE_MS_PER_PENALTY_POINT);

        let spatial_awareness = SPATIAL_ORGANIZATION_WEIGHT * m.spatial_organization
            + SPATIAL_LETTER_SIZE_WEIGHT * m.letter_size_consistency;

        let consistency = CONSISTENCY_SPEED_WEIGHT * m.speed_consistency
            + CONSISTENCY_LETTER_SIZE_WEIGHT * m.letter_size_consistency
            + CONSISTENCY_SMOOTHNESS_WEIGHT * m.stroke_smoothness;

        Self {
            motor_control: clamp_score(motor_control),
            writing_fluency: clamp_score(writing_fluency),
            spatial_awareness: clamp_score(spatial_awareness),
            consistency: clamp_score(consistency),
        }
    }

    /// Weighted overall score in [0, 100]
    pub fn overall(&self) -> u8 {
        let raw = OVERALL_MOTOR_WEIGHT * self.motor_control
            + OVERALL_FLUENCY_WEIGHT * self.writing_fluency
            + OVERALL_SPATIAL_WEIGHT * self.spatial_awareness
            + OVERALL_CONSISTENCY_WEIGHT * self.consistency;
        clamp_score(raw).round() as u8
    }
}
