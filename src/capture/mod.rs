//! Stroke capture module
//!
//! Types produced by the drawing surface, and the validation stage that
//! sits between capture and analysis.

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::{collect_issues, validate_canvas, validate_strokes, ValidationError};
