//! Scoring
//!
//! Everything downstream of the per-metric analyzers:
//! - Domain and overall scores (fixed weighted sums)
//! - Ordered risk classification with flagged conditions
//! - Summary and recommendation text

pub mod aggregate;
pub mod risk;
pub mod narrative;

pub use aggregate::DomainScores;
pub use narrative::SCREENING_DISCLAIMER;
pub use risk::{classify, FlaggedCondition, RiskAssessment, RiskLevel};
