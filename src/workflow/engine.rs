//! Analysis Engine
//!
//! The single entry point from strokes to a screening verdict:
//!
//! ```text
//! strokes ─▶ analyzers ─▶ DysgraphiaMetrics ─▶ DomainScores ─▶ risk table ─▶ narrative
//! ```
//!
//! `analyze` does no I/O and holds no state between calls, so any number of
//! sessions can be analyzed concurrently.

use crate::analysis::DysgraphiaMetrics;
use crate::capture::types::{CanvasSize, PromptType, Stroke};
use crate::scoring::narrative::{self, NarrativeContext};
use crate::scoring::{classify, DomainScores, FlaggedCondition, RiskLevel};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The engine's output for one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DysgraphiaAnalysisResult {
    /// Weighted overall score in [0, 100]
    pub overall_score: u8,
    pub risk_level: RiskLevel,
    pub metrics: DysgraphiaMetrics,
    pub domain_scores: DomainScores,
    /// Conditions in rule order, no duplicates
    pub flagged_conditions: Vec<FlaggedCondition>,
    pub summary: String,
    pub recommendations: Vec<String>,
}

impl DysgraphiaAnalysisResult {
    pub fn is_flagged(&self, condition: FlaggedCondition) -> bool {
        self.flagged_conditions.contains(&condition)
    }
}

/// Analyze one flattened collection of strokes.
///
/// Strokes are not validated here; see [`crate::capture::validation`].
pub fn analyze(
    strokes: &[Stroke],
    total_time_ms: i64,
    canvas_width: f64,
    canvas_height: f64,
    prompt_type: PromptType,
    student_name: &str,
    grade: u8,
) -> DysgraphiaAnalysisResult {
    let canvas = CanvasSize::new(canvas_width, canvas_height);
    let metrics = DysgraphiaMetrics::compute(strokes, total_time_ms, &canvas);
    let domain_scores = DomainScores::from_metrics(&metrics);
    let overall_score = domain_scores.overall();
    let assessment = classify(&domain_scores, &metrics);

    let ctx = NarrativeContext {
        student_name,
        grade,
        prompt_type,
        overall_score,
        domains: &domain_scores,
        level: assessment.level,
        conditions: &assessment.conditions,
    };
    let summary = narrative::summary(&ctx);
    let recommendations = narrative::recommendations(&assessment.conditions);

    debug!(
        strokes = metrics.stroke_count,
        overall = overall_score,
        risk = %assessment.level,
        flagged = assessment.conditions.len(),
        "Handwriting analysis complete"
    );

    DysgraphiaAnalysisResult {
        overall_score,
        risk_level: assessment.level,
        metrics,
        domain_scores,
        flagged_conditions: assessment.conditions,
        summary,
        recommendations,
    }
}
