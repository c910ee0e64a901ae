//! # Handwriting Screener
//!
//! A stroke-analysis engine that screens children's handwriting for motor,
//! fluency and spatial indicators associated with dysgraphia.
//!
//! ## Overview
//!
//! The library takes the pen strokes captured while a student works through a
//! drawing prompt (a letter, word, sentence or shape), measures them, and
//! produces a screening verdict: a 0-100 overall score, four domain scores,
//! a risk level, the conditions that were flagged, a prose summary and a list
//! of recommendations.
//!
//! The result is a screening signal, not a diagnosis.
//!
//! ## Quick Start
//!
//! ```no_run
//! use handwriting_screener::{analyze, PromptType, Stroke, StrokePoint};
//!
//! let stroke = Stroke::new(
//!     vec![
//!         StrokePoint::new(100.0, 150.0, 0),
//!         StrokePoint::new(150.0, 150.0, 250),
//!         StrokePoint::new(200.0, 150.0, 500),
//!     ],
//!     3.0,
//! );
//!
//! let result = analyze(&[stroke], 500, 300.0, 300.0, PromptType::Letter, "Asha", 3);
//! println!("{} ({})", result.overall_score, result.risk_level);
//! println!("{}", result.summary);
//! ```
//!
//! ## Architecture
//!
//! - [`capture`]: Stroke data model and input validation
//! - [`analysis`]: Per-metric analyzers and the metrics record
//! - [`scoring`]: Domain aggregation, risk rules and narrative text
//! - [`constants`]: Every threshold, scale and weight the engine uses
//! - [`workflow`]: The `analyze` entry point and screening sessions
//! - [`app`]: CLI and configuration management
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Strokes   │───▶│  Analyzers  │───▶│   Domain    │───▶│ Risk Rules  │
//! │  + canvas   │    │  (metrics)  │    │   Scores    │    │  (ordered)  │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//!                                                                 │
//!                                                                 ▼
//!                                                          ┌─────────────┐
//!                                                          │  Summary &  │
//!                                                          │    Recs     │
//!                                                          └─────────────┘
//! ```

pub mod capture;
pub mod analysis;
pub mod constants;
pub mod scoring;
pub mod app;
pub mod workflow;

// Re-export commonly used types
pub use capture::types::{CanvasSize, PromptType, Stroke, StrokePoint};
pub use capture::validation::ValidationError;
pub use analysis::DysgraphiaMetrics;
pub use scoring::{DomainScores, FlaggedCondition, RiskLevel};
pub use workflow::{analyze, DysgraphiaAnalysisResult, Session};

/// Result type alias for the screener
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the screener
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Validation error in prompt {prompt}: {source}")]
    InvalidPrompt {
        /// Zero-based index into the session's prompts
        prompt: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
