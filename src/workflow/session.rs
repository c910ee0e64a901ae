//! Screening Sessions
//!
//! A session is what the capture surface hands over after a student works
//! through one or more drawing prompts. It defines the on-disk JSON format
//! used by the CLI and the bridge from captured prompts to engine calls.

use super::engine::{analyze, DysgraphiaAnalysisResult};
use crate::capture::types::{CanvasSize, PromptType, Stroke};
use crate::capture::validation::{validate_canvas, validate_strokes};
use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

/// Current session format version
pub const CURRENT_FORMAT_VERSION: &str = "1.0";

/// Session metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionMetadata {
    /// Unique session ID
    pub id: Uuid,
    /// Student display name used in the summary
    pub student_name: String,
    /// School grade
    pub grade: u8,
    /// Session start time
    pub started_at: DateTime<Utc>,
    /// Session end time
    pub ended_at: Option<DateTime<Utc>>,
    /// Version of the session format
    pub format_version: String,
}

impl SessionMetadata {
    pub fn new(student_name: String, grade: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_name,
            grade,
            started_at: Utc::now(),
            ended_at: None,
            format_version: CURRENT_FORMAT_VERSION.to_string(),
        }
    }
}

impl Default for SessionMetadata {
    fn default() -> Self {
        Self::new(String::new(), 0)
    }
}

/// Strokes drawn for one prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptCapture {
    pub prompt_type: PromptType,
    pub strokes: Vec<Stroke>,
    /// Time the student spent on the prompt (ms)
    #[serde(default)]
    pub total_time_ms: i64,
}

impl PromptCapture {
    pub fn new(prompt_type: PromptType, strokes: Vec<Stroke>, total_time_ms: i64) -> Self {
        Self {
            prompt_type,
            strokes,
            total_time_ms,
        }
    }
}

/// A complete screening session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub metadata: SessionMetadata,
    /// Drawing surface size; the configured default is used when absent
    #[serde(default)]
    pub canvas: Option<CanvasSize>,
    pub prompts: Vec<PromptCapture>,
}

/// Strokes from every prompt concatenated in order
#[derive(Debug, Clone)]
pub struct FlattenedSession {
    pub strokes: Vec<Stroke>,
    pub total_time_ms: i64,
    pub prompt_type: PromptType,
}

impl Session {
    /// Create a new session with no prompts
    pub fn new(student_name: String, grade: u8, canvas: Option<CanvasSize>) -> Self {
        Self {
            metadata: SessionMetadata::new(student_name, grade),
            canvas,
            prompts: Vec::new(),
        }
    }

    pub fn add_prompt(&mut self, prompt: PromptCapture) {
        self.prompts.push(prompt);
    }

    /// Mark the session as finished
    pub fn finalize(&mut self) {
        self.metadata.ended_at = Some(Utc::now());
    }

    /// Total number of strokes across prompts
    pub fn stroke_count(&self) -> usize {
        self.prompts.iter().map(|p| p.strokes.len()).sum()
    }

    /// Prompt type shared by all prompts, or `Mixed`
    pub fn prompt_type(&self) -> PromptType {
        let mut kinds = self.prompts.iter().map(|p| p.prompt_type);
        match kinds.next() {
            Some(first) if kinds.all(|k| k == first) => first,
            Some(_) => PromptType::Mixed,
            None => PromptType::Mixed,
        }
    }

    /// Concatenate strokes across prompts and sum their times
    pub fn flatten(&self) -> FlattenedSession {
        FlattenedSession {
            strokes: self
                .prompts
                .iter()
                .flat_map(|p| p.strokes.iter().cloned())
                .collect(),
            total_time_ms: self
                .prompts
                .iter()
                .map(|p| p.total_time_ms)
                .fold(0i64, i64::saturating_add),
            prompt_type: self.prompt_type(),
        }
    }

    /// Canvas to analyze against
    pub fn canvas_or(&self, fallback: CanvasSize) -> CanvasSize {
        self.canvas.unwrap_or(fallback)
    }

    /// Check the captured data.
    ///
    /// In strict mode the first problem is returned as an error, tagged with
    /// the prompt it was found in. Otherwise problems are logged and the data
    /// is accepted as is.
    pub fn check(&self, canvas: &CanvasSize, strict: bool) -> crate::Result<()> {
        let result = validate_canvas(canvas)
            .map_err(Error::from)
            .and_then(|_| {
                self.prompts.iter().enumerate().try_for_each(|(i, p)| {
                    validate_strokes(&p.strokes).map_err(|source| Error::InvalidPrompt {
                        prompt: i,
                        source,
                    })
                })
            });

        match result {
            Ok(()) => Ok(()),
            Err(e) if strict => Err(e),
            Err(e) => {
                warn!(
                    session = %self.metadata.id,
                    error = %e,
                    "Invalid capture data; analyzing anyway"
                );
                Ok(())
            }
        }
    }

    /// Validate, then analyze all prompts as one pooled stroke set
    pub fn analyze(&self, canvas: CanvasSize, strict: bool) -> crate::Result<DysgraphiaAnalysisResult> {
        self.check(&canvas, strict)?;
        let flat = self.flatten();

        info!(
            student = %self.metadata.student_name,
            prompts = self.prompts.len(),
            strokes = flat.strokes.len(),
            "Analyzing session"
        );

        Ok(analyze(
            &flat.strokes,
            flat.total_time_ms,
            canvas.width,
            canvas.height,
            flat.prompt_type,
            &self.metadata.student_name,
            self.metadata.grade,
        ))
    }

    /// Validate, then analyze each prompt on its own
    pub fn analyze_prompts(
        &self,
        canvas: CanvasSize,
        strict: bool,
    ) -> crate::Result<Vec<DysgraphiaAnalysisResult>> {
        self.check(&canvas, strict)?;

        Ok(self
            .prompts
            .iter()
            .map(|p| {
                analyze(
                    &p.strokes,
                    p.total_time_ms,
                    canvas.width,
                    canvas.height,
                    p.prompt_type,
                    &self.metadata.student_name,
                    self.metadata.grade,
                )
            })
            .collect())
    }

    /// Save session to a file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load session from a file.
    ///
    /// Logs a warning if the session was saved with an unknown format version,
    /// since some fields may then fall back to defaults.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let session: Session = serde_json::from_str(&content)?;
        if session.metadata.format_version != CURRENT_FORMAT_VERSION {
            warn!(
                student = %session.metadata.student_name,
                found = %session.metadata.format_version,
                expected = CURRENT_FORMAT_VERSION,
                "Session has different format version; some fields may use default values"
            );
        }
        Ok(session)
    }
}
