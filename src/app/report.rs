//! Report Rendering

use crate::scoring::SCREENING_DISCLAIMER;
use crate::workflow::DysgraphiaAnalysisResult;
use std::fmt::{self, Write};

/// Plain-text report builder
pub struct ReportBuilder {
    buffer: String,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    /// Render one or more titled results followed by the disclaimer
    pub fn build(
        &mut self,
        sections: &[(String, &DysgraphiaAnalysisResult)],
    ) -> Result<String, fmt::Error> {
        self.buffer.clear();
        write_report(&mut self.buffer, sections)?;
        Ok(std::mem::take(&mut self.buffer))
    }
}

/// Write the text report into any `fmt::Write` sink, stopping at the first
/// failed write
pub fn write_report<W: Write>(
    out: &mut W,
    sections: &[(String, &DysgraphiaAnalysisResult)],
) -> fmt::Result {
    for (i, (title, result)) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_result(out, title, result)?;
    }
    write!(out, "\nNote: {}\n", SCREENING_DISCLAIMER)
}

fn write_result<W: Write>(out: &mut W, title: &str, r: &DysgraphiaAnalysisResult) -> fmt::Result {
    writeln!(out, "== {} ==", title)?;
    writeln!(out)?;
    writeln!(out, "Overall score: {}/100", r.overall_score)?;
    writeln!(out, "Risk level:    {}", r.risk_level)?;
    writeln!(out)?;

    let d = &r.domain_scores;
    writeln!(out, "Domain scores:")?;
    writeln!(out, "  Motor control      {:>3.0}", d.motor_control)?;
    writeln!(out, "  Writing fluency    {:>3.0}", d.writing_fluency)?;
    writeln!(out, "  Spatial awareness  {:>3.0}", d.spatial_awareness)?;
    writeln!(out, "  Consistency        {:>3.0}", d.consistency)?;
    writeln!(out)?;

    let m = &r.metrics;
    writeln!(
        out,
        "Strokes: {}  Time: {} ms  Tremors: {}  Hesitations: {}",
        m.stroke_count, m.total_time, m.micro_tremor_count, m.hesitation_count
    )?;
    writeln!(out)?;

    writeln!(out, "Flagged conditions:")?;
    if r.flagged_conditions.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for condition in &r.flagged_conditions {
        writeln!(out, "  - {}", condition)?;
    }
    writeln!(out)?;

    writeln!(out, "Summary:")?;
    writeln!(out, "  {}", r.summary)?;
    writeln!(out)?;

    writeln!(out, "Recommendations:")?;
    for (i, rec) in r.recommendations.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, rec)?;
    }
    Ok(())
}

/// Render results as JSON; a single result is emitted as an object
pub fn render_json(results: &[DysgraphiaAnalysisResult], pretty: bool) -> crate::Result<String> {
    let json = match results {
        [single] if pretty => serde_json::to_string_pretty(single)?,
        [single] => serde_json::to_string(single)?,
        many if pretty => serde_json::to_string_pretty(many)?,
        many => serde_json::to_string(many)?,
    };
    Ok(json)
}
