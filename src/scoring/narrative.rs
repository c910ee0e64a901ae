//! Summary & Recommendations
//!
//! Fixed templates keyed on the risk level and the flagged conditions.
//! No randomness: the same assessment always reads the same way.

use super::aggregate::DomainScores;
use super::risk::{FlaggedCondition, RiskLevel};
use crate::capture::types::PromptType;

/// Printed with every report
pub const SCREENING_DISCLAIMER: &str =
    "This is a screening result, not a diagnosis. Please consult a qualified professional for a formal evaluation.";

/// How many flagged conditions a summary names
const SUMMARY_CONDITION_LIMIT: usize = 2;

const GENERIC_RECOMMENDATIONS: [&str; 2] = [
    "Keep practicing handwriting regularly to maintain good writing habits.",
    "Encourage creative writing activities to keep building fluency and confidence.",
];

/// Everything the templates interpolate
#[derive(Debug, Clone, Copy)]
pub struct NarrativeContext<'a> {
    pub student_name: &'a str,
    pub grade: u8,
    pub prompt_type: PromptType,
    pub overall_score: u8,
    pub domains: &'a DomainScores,
    pub level: RiskLevel,
    pub conditions: &'a [FlaggedCondition],
}

/// Prose summary for the report
pub fn summary(ctx: &NarrativeContext<'_>) -> String {
    let d = ctx.domains;
    let intro = format!(
        "{} (Grade {}) completed the {} writing task with an overall score of {}/100.",
        ctx.student_name, ctx.grade, ctx.prompt_type, ctx.overall_score
    );

    match ctx.level {
        RiskLevel::Low => format!(
            "{} Motor control ({:.0}), writing fluency ({:.0}), spatial awareness ({:.0}) and \
             consistency ({:.0}) are within the expected range, and no significant indicators \
             of handwriting difficulty were observed.",
            intro, d.motor_control, d.writing_fluency, d.spatial_awareness, d.consistency
        ),
        RiskLevel::Moderate => format!(
            "{} Some areas need attention, including {}. Domain scores: motor control {:.0}, \
             writing fluency {:.0}, spatial awareness {:.0}, consistency {:.0}. Targeted practice \
             and continued monitoring are recommended.",
            intro,
            leading_conditions(ctx.conditions),
            d.motor_control,
            d.writing_fluency,
            d.spatial_awareness,
            d.consistency
        ),
        RiskLevel::High => format!(
            "{} The writing shows several indicators associated with dysgraphia, including {}. \
             Domain scores: motor control {:.0}, writing fluency {:.0}, spatial awareness {:.0}, \
             consistency {:.0}. A comprehensive evaluation by an occupational therapist or \
             learning specialist is strongly recommended.",
            intro,
            leading_conditions(ctx.conditions),
            d.motor_control,
            d.writing_fluency,
            d.spatial_awareness,
            d.consistency
        ),
    }
}

fn leading_conditions(conditions: &[FlaggedCondition]) -> String {
    if conditions.is_empty() {
        return "general handwriting skills".to_string();
    }
    conditions
        .iter()
        .take(SUMMARY_CONDITION_LIMIT)
        .map(|c| c.label().to_lowercase())
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Fixed advice for one condition
pub fn recommendations_for(condition: FlaggedCondition) -> &'static [&'static str] {
    match condition {
        FlaggedCondition::FineMotorControlDeficit => &[
            "Practice fine motor activities such as tracing, mazes and clay modeling for 10 to 15 minutes daily.",
            "Try a pencil grip or a thicker pencil to support a comfortable, controlled grasp.",
        ],
        FlaggedCondition::MicroTremorPattern => &[
            "Consult an occupational therapist to assess hand stability.",
            "Warm up with hand-strengthening exercises such as squeezing a soft ball or picking up objects with tweezers.",
        ],
        FlaggedCondition::WritingFluencyDifficulty => &[
            "Build fluency with short, timed copying exercises using familiar words.",
            "Allow extra time for written work and reduce copying load where possible.",
        ],
        FlaggedCondition::ExcessiveHesitations => &[
            "Practice letter formation through guided tracing so that letter shapes become automatic.",
        ],
        FlaggedCondition::SpatialOrganizationDifficulty => &[
            "Use lined or graph paper with highlighted margins to guide letter placement and spacing.",
            "Practice writing inside boxes or marked spaces to build spatial awareness.",
        ],
        FlaggedCondition::InconsistentFormation => &[
            "Practice keeping letters a consistent size using three-line handwriting paper.",
        ],
        FlaggedCondition::PoorStrokePrecision => &[
            "Do connect-the-dots and line-tracing activities to improve stroke control.",
        ],
    }
}

/// Recommendations for every flagged condition in order, or generic
/// encouragement when nothing was flagged
pub fn recommendations(conditions: &[FlaggedCondition]) -> Vec<String> {
    if conditions.is_empty() {
        return GENERIC_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect();
    }
    conditions
        .iter()
        .flat_map(|c| recommendations_for(*c).iter())
        .map(|s| s.to_string())
        .collect()
}
