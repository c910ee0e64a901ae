//! Core types for stroke capture
//!
//! Defines the data handed over by the drawing surface: timestamped points
//! grouped into strokes, the canvas they were drawn on, and the prompt kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single pen/touch sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    /// Horizontal position (canvas pixels)
    pub x: f64,
    /// Vertical position (canvas pixels, growing downward)
    pub y: f64,
    /// Capture time in milliseconds
    pub time: i64,
}

impl StrokePoint {
    pub fn new(x: f64, y: f64, time: i64) -> Self {
        Self { x, y, time }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &StrokePoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Milliseconds elapsed from `earlier` to this point (may be negative
    /// on malformed input, saturates at the `i64` bounds)
    pub fn millis_since(&self, earlier: &StrokePoint) -> i64 {
        self.time.saturating_sub(earlier.time)
    }
}

/// One continuous contact-down to contact-up gesture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Samples in temporal order
    pub points: Vec<StrokePoint>,
    /// Rendered line width
    #[serde(default = "default_stroke_width")]
    pub width: f64,
}

fn default_stroke_width() -> f64 {
    3.0
}

impl Stroke {
    pub fn new(points: Vec<StrokePoint>, width: f64) -> Self {
        Self { points, width }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&StrokePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&StrokePoint> {
        self.points.last()
    }

    /// Time from first to last sample (0 for fewer than two samples)
    pub fn duration_ms(&self) -> i64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => last.millis_since(first),
            _ => 0,
        }
    }
}

/// Pixel dimensions of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Both dimensions are non-zero
    pub fn is_usable(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
        }
    }
}

/// Kind of drawing prompt the strokes answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptType {
    /// Single letter or digit
    Letter,
    /// A whole word
    Word,
    /// A copied sentence
    Sentence,
    /// Geometric shape (circle, square, zig-zag line)
    Shape,
    /// Strokes pooled across prompts of different kinds
    Mixed,
}

impl PromptType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptType::Letter => "letter",
            PromptType::Word => "word",
            PromptType::Sentence => "sentence",
            PromptType::Shape => "shape",
            PromptType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for PromptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letter" => Ok(PromptType::Letter),
            "word" => Ok(PromptType::Word),
            "sentence" => Ok(PromptType::Sentence),
            "shape" => Ok(PromptType::Shape),
            "mixed" => Ok(PromptType::Mixed),
            other => Err(format!("unknown prompt type '{}'", other)),
        }
    }
}
