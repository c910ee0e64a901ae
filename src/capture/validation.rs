//! Capture Validation
//!
//! Checks captured strokes before they are handed to the analysis engine.
//! The analyzers themselves are total and never inspect their input for
//! NaN or out-of-order timestamps; this stage is where such data is caught.

use super::types::{CanvasSize, Stroke};

/// A defect in captured stroke data
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("stroke {stroke} has no points")]
    EmptyStroke { stroke: usize },

    #[error("stroke {stroke}, point {point}: coordinate is not finite")]
    NonFiniteCoordinate { stroke: usize, point: usize },

    #[error("stroke {stroke}: width is not finite")]
    NonFiniteWidth { stroke: usize },

    #[error("stroke {stroke}, point {point}: negative timestamp {time}")]
    NegativeTimestamp { stroke: usize, point: usize, time: i64 },

    #[error("stroke {stroke}, point {point}: time went backwards ({previous} -> {current})")]
    TimeWentBackwards {
        stroke: usize,
        point: usize,
        previous: i64,
        current: i64,
    },

    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
}

/// Return the first problem found in the strokes, if any
pub fn validate_strokes(strokes: &[Stroke]) -> Result<(), ValidationError> {
    match collect_stroke_issues(strokes).into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(()),
    }
}

/// Reject non-finite or negative canvas dimensions.
///
/// A zero dimension is accepted: spatial organization treats it as
/// "no signal" and reports its neutral score.
pub fn validate_canvas(canvas: &CanvasSize) -> Result<(), ValidationError> {
    let ok = |v: f64| v.is_finite() && v >= 0.0;
    if ok(canvas.width) && ok(canvas.height) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        })
    }
}

/// Collect every problem in the strokes and canvas
pub fn collect_issues(strokes: &[Stroke], canvas: &CanvasSize) -> Vec<ValidationError> {
    let mut issues = Vec::new();
    if let Err(e) = validate_canvas(canvas) {
        issues.push(e);
    }
    issues.extend(collect_stroke_issues(strokes));
    issues
}

fn collect_stroke_issues(strokes: &[Stroke]) -> Vec<ValidationError> {
    let mut issues = Vec::new();

    for (si, stroke) in strokes.iter().enumerate() {
        if stroke.points.is_empty() {
            issues.push(ValidationError::EmptyStroke { stroke: si });
            continue;
        }
        if !stroke.width.is_finite() {
            issues.push(ValidationError::NonFiniteWidth { stroke: si });
        }

        let mut previous: Option<i64> = None;
        for (pi, point) in stroke.points.iter().enumerate() {
            if !point.x.is_finite() || !point.y.is_finite() {
                issues.push(ValidationError::NonFiniteCoordinate { stroke: si, point: pi });
            }
            if point.time < 0 {
                issues.push(ValidationError::NegativeTimestamp {
                    stroke: si,
                    point: pi,
                    time: point.time,
                });
            }
            if let Some(prev) = previous {
                if point.time < prev {
                    issues.push(ValidationError::TimeWentBackwards {
                        stroke: si,
                        point: pi,
                        previous: prev,
                        current: point.time,
                    });
                }
            }
            previous = Some(point.time);
        }
    }

    issues
}
