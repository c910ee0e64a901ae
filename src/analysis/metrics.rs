//! Per-session handwriting metrics

use super::kinematics::{analyze_hesitations, avg_stroke_speed, speed_consistency};
use super::motor::{micro_tremor_count, stroke_precision, stroke_smoothness};
use super::spatial::{letter_size_consistency, spatial_organization};
use crate::capture::types::{CanvasSize, Stroke};
use crate::constants::WRITING_PRESSURE_VARIANCE_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// Raw and derived metrics for one analysis call.
///
/// Field names serialize in camelCase; the report layer reads them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DysgraphiaMetrics {
    pub stroke_count: usize,
    /// Session time supplied by the caller (ms)
    pub total_time: i64,
    pub hesitation_count: u32,
    /// px/ms
    pub avg_stroke_speed: f64,
    pub stroke_smoothness: f64,
    pub speed_consistency: f64,
    pub spatial_organization: f64,
    pub stroke_precision: f64,
    pub micro_tremor_count: u32,
    /// ms
    pub avg_pause_duration: f64,
    /// Not sensed; always the placeholder value
    pub writing_pressure_variance: f64,
    pub letter_size_consistency: f64,
}

impl DysgraphiaMetrics {
    /// Run every analyzer over the strokes
    pub fn compute(strokes: &[Stroke], total_time_ms: i64, canvas: &CanvasSize) -> Self {
        let hesitation = analyze_hesitations(strokes);

        Self {
            stroke_count: strokes.len(),
            total_time: total_time_ms,
            hesitation_count: hesitation.count,
            avg_stroke_speed: avg_stroke_speed(strokes),
            stroke_smoothness: stroke_smoothness(strokes),
            speed_consistency: speed_consistency(strokes),
            spatial_organization: spatial_organization(strokes, canvas),
            stroke_precision: stroke_precision(strokes),
            micro_tremor_count: micro_tremor_count(strokes),
            avg_pause_duration: hesitation.avg_pause,
            writing_pressure_variance: WRITING_PRESSURE_VARIANCE_PLACEHOLDER,
            letter_size_consistency: letter_size_consistency(strokes),
        }
    }
}
