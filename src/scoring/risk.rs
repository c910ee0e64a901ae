//! Risk Classification
//!
//! An ordered table of threshold rules folded over an initial `Low` risk.
//! Each rule that fires records a flagged condition and escalates the risk.
//! Risk never goes down, but the order matters: a "step up" rule that runs
//! after another rule has already reached `Moderate` lands on `High`.

use super::aggregate::DomainScores;
use crate::analysis::DysgraphiaMetrics;
use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Screening risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a firing rule moves the risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    /// Low becomes Moderate; anything higher is kept
    AtLeastModerate,
    /// Low becomes Moderate, Moderate becomes High
    StepUp,
}

impl Escalation {
    pub fn apply(self, level: RiskLevel) -> RiskLevel {
        match (self, level) {
            (_, RiskLevel::Low) => RiskLevel::Moderate,
            (Escalation::StepUp, RiskLevel::Moderate) => RiskLevel::High,
            (_, current) => current,
        }
    }
}

/// Named indicator emitted when a rule fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlaggedCondition {
    #[serde(rename = "Fine Motor Control Deficit")]
    FineMotorControlDeficit,
    #[serde(rename = "Micro-Tremor Pattern Detected")]
    MicroTremorPattern,
    #[serde(rename = "Writing Fluency Difficulty")]
    WritingFluencyDifficulty,
    #[serde(rename = "Excessive Hesitations/Pauses")]
    ExcessiveHesitations,
    #[serde(rename = "Spatial Organization Difficulty")]
    SpatialOrganizationDifficulty,
    #[serde(rename = "Inconsistent Letter/Stroke Formation")]
    InconsistentFormation,
    #[serde(rename = "Poor Stroke Precision")]
    PoorStrokePrecision,
}

impl FlaggedCondition {
    pub fn label(&self) -> &'static str {
        match self {
            FlaggedCondition::FineMotorControlDeficit => "Fine Motor Control Deficit",
            FlaggedCondition::MicroTremorPattern => "Micro-Tremor Pattern Detected",
            FlaggedCondition::WritingFluencyDifficulty => "Writing Fluency Difficulty",
            FlaggedCondition::ExcessiveHesitations => "Excessive Hesitations/Pauses",
            FlaggedCondition::SpatialOrganizationDifficulty => "Spatial Organization Difficulty",
            FlaggedCondition::InconsistentFormation => "Inconsistent Letter/Stroke Formation",
            FlaggedCondition::PoorStrokePrecision => "Poor Stroke Precision",
        }
    }
}

impl fmt::Display for FlaggedCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the classification table
#[derive(Clone, Copy)]
pub struct RiskRule {
    pub condition: FlaggedCondition,
    pub escalation: Escalation,
    pub fires: fn(&DomainScores, &DysgraphiaMetrics) -> bool,
}

impl RiskRule {
    /// Escalated level if the rule fires, `None` otherwise
    pub fn evaluate(
        &self,
        level: RiskLevel,
        domains: &DomainScores,
        metrics: &DysgraphiaMetrics,
    ) -> Option<RiskLevel> {
        (self.fires)(domains, metrics).then(|| self.escalation.apply(level))
    }
}

impl fmt::Debug for RiskRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiskRule")
            .field("condition", &self.condition)
            .field("escalation", &self.escalation)
            .finish()
    }
}

fn weak_motor_control(d: &DomainScores, _: &DysgraphiaMetrics) -> bool {
    d.motor_control < MOTOR_CONTROL_THRESHOLD
}

fn frequent_tremor(_: &DomainScores, m: &DysgraphiaMetrics) -> bool {
    m.micro_tremor_count > MICRO_TREMOR_THRESHOLD
}

fn weak_fluency(d: &DomainScores, _: &DysgraphiaMetrics) -> bool {
    d.writing_fluency < WRITING_FLUENCY_THRESHOLD
}

fn frequent_hesitation(_: &DomainScores, m: &DysgraphiaMetrics) -> bool {
    m.hesitation_count > HESITATION_THRESHOLD
}

fn weak_spatial_awareness(d: &DomainScores, _: &DysgraphiaMetrics) -> bool {
    d.spatial_awareness < SPATIAL_AWARENESS_THRESHOLD
}

fn weak_consistency(d: &DomainScores, _: &DysgraphiaMetrics) -> bool {
    d.consistency < CONSISTENCY_THRESHOLD
}

fn imprecise_strokes(_: &DomainScores, m: &DysgraphiaMetrics) -> bool {
    m.stroke_precision < STROKE_PRECISION_THRESHOLD
}

/// The classification table, in evaluation order
pub const RISK_RULES: [RiskRule; 7] = [
    RiskRule {
        condition: FlaggedCondition::FineMotorControlDeficit,
        escalation: Escalation::AtLeastModerate,
        fires: weak_motor_control,
    },
    RiskRule {
        condition: FlaggedCondition::MicroTremorPattern,
        escalation: Escalation::StepUp,
        fires: frequent_tremor,
    },
    RiskRule {
        condition: FlaggedCondition::WritingFluencyDifficulty,
        escalation: Escalation::StepUp,
        fires: weak_fluency,
    },
    RiskRule {
        condition: FlaggedCondition::ExcessiveHesitations,
        escalation: Escalation::AtLeastModerate,
        fires: frequent_hesitation,
    },
    RiskRule {
        condition: FlaggedCondition::SpatialOrganizationDifficulty,
        escalation: Escalation::AtLeastModerate,
        fires: weak_spatial_awareness,
    },
    RiskRule {
        condition: FlaggedCondition::InconsistentFormation,
        escalation: Escalation::AtLeastModerate,
        fires: weak_consistency,
    },
    RiskRule {
        condition: FlaggedCondition::PoorStrokePrecision,
        escalation: Escalation::AtLeastModerate,
        fires: imprecise_strokes,
    },
];

/// Outcome of running the classification table
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Conditions in rule order, each at most once
    pub conditions: Vec<FlaggedCondition>,
}

/// Run every rule in order over the domain scores and raw metrics
pub fn classify(domains: &DomainScores, metrics: &DysgraphiaMetrics) -> RiskAssessment {
    let initial = RiskAssessment {
        level: RiskLevel::Low,
        conditions: Vec::new(),
    };

    RISK_RULES.iter().fold(initial, |mut acc, rule| {
        if let Some(level) = rule.evaluate(acc.level, domains, metrics) {
            debug!(
                condition = %rule.condition,
                from = %acc.level,
                to = %level,
                "Risk rule fired"
            );
            acc.level = level;
            acc.conditions.push(rule.condition);
        }
        acc
    })
}
