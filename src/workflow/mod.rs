//! Workflow Module
//!
//! The analysis entry point and the session envelope that feeds it.

pub mod engine;
pub mod session;

pub use engine::{analyze, DysgraphiaAnalysisResult};
pub use session::{PromptCapture, Session, SessionMetadata};
