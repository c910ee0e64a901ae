//! Integration tests for the analysis pipeline
//!
//! These tests drive the public `analyze` entry point end to end:
//! strokes -> metrics -> domain scores -> risk rules -> narrative

use handwriting_screener::capture::types::{PromptType, Stroke, StrokePoint};
use handwriting_screener::scoring::SCREENING_DISCLAIMER;
use handwriting_screener::{analyze, DysgraphiaAnalysisResult, FlaggedCondition, RiskLevel};

/// Horizontal 100px line drawn left to right in 500ms
fn line(y: f64, t0: i64) -> Stroke {
    Stroke::new(
        (0..=10)
            .map(|i| StrokePoint::new(100.0 + i as f64 * 10.0, y, t0 + i as i64 * 50))
            .collect(),
        3.0,
    )
}

/// Sawtooth with sharp alternating turns every 15ms
fn zig_zag(points: usize, t0: i64) -> Stroke {
    Stroke::new(
        (0..points)
            .map(|i| {
                let y = if i % 2 == 0 { 100.0 } else { 105.0 };
                StrokePoint::new(50.0 + i as f64 * 5.0, y, t0 + i as i64 * 15)
            })
            .collect(),
        2.0,
    )
}

fn run(strokes: &[Stroke], total_time: i64) -> DysgraphiaAnalysisResult {
    analyze(strokes, total_time, 300.0, 300.0, PromptType::Word, "Asha", 3)
}

fn assert_in_range(r: &DysgraphiaAnalysisResult) {
    let m = &r.metrics;
    for (name, v) in [
        ("stroke_smoothness", m.stroke_smoothness),
        ("speed_consistency", m.speed_consistency),
        ("spatial_organization", m.spatial_organization),
        ("stroke_precision", m.stroke_precision),
        ("letter_size_consistency", m.letter_size_consistency),
        ("motor_control", r.domain_scores.motor_control),
        ("writing_fluency", r.domain_scores.writing_fluency),
        ("spatial_awareness", r.domain_scores.spatial_awareness),
        ("consistency", r.domain_scores.consistency),
    ] {
        assert!((0.0..=100.0).contains(&v), "{} out of range: {}", name, v);
    }
    assert!(r.overall_score <= 100);
}

#[test]
fn test_analysis_is_deterministic() {
    let strokes = vec![line(100.0, 0), zig_zag(20, 900), line(200.0, 2000)];
    let a = run(&strokes, 2600);
    let b = run(&strokes, 2600);
    assert_eq!(a, b);
}

#[test]
fn test_scores_stay_in_range_for_varied_input() {
    let inputs: Vec<Vec<Stroke>> = vec![
        vec![],
        vec![Stroke::new(vec![], 3.0)],
        vec![Stroke::new(vec![StrokePoint::new(0.0, 0.0, 0)], 3.0)],
        vec![zig_zag(60, 0)],
        vec![line(10.0, 0), line(290.0, 5000), zig_zag(12, 9000)],
        // Drawn far outside the canvas
        vec![Stroke::new(
            vec![
                StrokePoint::new(-500.0, -500.0, 0),
                StrokePoint::new(900.0, 900.0, 10),
                StrokePoint::new(-500.0, 900.0, 20),
            ],
            3.0,
        )],
        // All samples share one timestamp
        vec![Stroke::new(
            (0..10).map(|i| StrokePoint::new(i as f64, i as f64 * 2.0, 7)).collect(),
            3.0,
        )],
    ];

    for strokes in &inputs {
        assert_in_range(&run(strokes, 10_000));
    }
}

#[test]
fn test_extreme_timestamps_do_not_overflow() {
    let stroke = |t0: i64, t1: i64| {
        Stroke::new(
            vec![
                StrokePoint::new(100.0, 100.0, t0),
                StrokePoint::new(150.0, 120.0, t1),
            ],
            3.0,
        )
    };
    let inputs = vec![
        vec![stroke(-10, i64::MAX)],
        vec![stroke(i64::MIN, i64::MAX)],
        vec![stroke(i64::MIN, i64::MAX), stroke(i64::MIN, i64::MAX)],
        vec![stroke(i64::MAX, i64::MIN), stroke(0, 10)],
    ];

    for strokes in &inputs {
        let r = run(strokes, i64::MAX);
        assert_in_range(&r);
        assert!(r.metrics.avg_stroke_speed.is_finite());
        assert!(r.metrics.avg_pause_duration.is_finite());
    }
}

#[test]
fn test_zero_canvas_does_not_panic() {
    let r = analyze(&[line(100.0, 0)], 500, 0.0, 0.0, PromptType::Letter, "X", 1);
    assert_in_range(&r);
}

#[test]
fn test_empty_session_is_neutral() {
    let r = run(&[], 0);
    assert_eq!(r.metrics.stroke_count, 0);
    assert_eq!(r.metrics.stroke_smoothness, 50.0);
    assert_eq!(r.metrics.letter_size_consistency, 70.0);
    assert_eq!(r.metrics.writing_pressure_variance, 50.0);
    assert_eq!(r.metrics.avg_stroke_speed, 0.0);
    assert_eq!(r.risk_level, RiskLevel::Low);
    assert!(r.flagged_conditions.is_empty());
}

#[test]
fn test_neat_letters_are_low_risk() {
    let strokes = vec![line(100.0, 0), line(150.0, 500), line(200.0, 1000)];
    let r = run(&strokes, 1500);

    assert_eq!(r.metrics.stroke_smoothness, 100.0);
    assert_eq!(r.metrics.stroke_precision, 100.0);
    assert!((r.metrics.speed_consistency - 100.0).abs() < 1e-9);
    assert_eq!(r.metrics.spatial_organization, 100.0);
    assert_eq!(r.metrics.letter_size_consistency, 100.0);
    assert_eq!(r.metrics.hesitation_count, 0);
    assert_eq!(r.overall_score, 100);
    assert_eq!(r.risk_level, RiskLevel::Low);
    assert!(r.summary.contains("no significant indicators"));
}

#[test]
fn test_tremor_pattern_is_flagged() {
    let r = run(&[zig_zag(30, 0)], 450);
    assert_eq!(r.metrics.micro_tremor_count, 27);
    assert!(r.is_flagged(FlaggedCondition::MicroTremorPattern));
    assert!(r.risk_level >= RiskLevel::Moderate);
    assert!(r
        .recommendations
        .iter()
        .any(|rec| rec.contains("occupational therapist")));
}

#[test]
fn test_precision_just_below_threshold_is_flagged() {
    // Up 327, across 346, down 327: chord 346 over a 1000px path
    let detour = Stroke::new(
        vec![
            StrokePoint::new(20.0, 20.0, 0),
            StrokePoint::new(20.0, 347.0, 300),
            StrokePoint::new(366.0, 347.0, 600),
            StrokePoint::new(366.0, 20.0, 900),
        ],
        3.0,
    );
    let r = analyze(&[detour], 900, 400.0, 400.0, PromptType::Shape, "Asha", 3);

    assert!((r.metrics.stroke_precision - 34.6).abs() < 1e-9);
    assert!(r.is_flagged(FlaggedCondition::PoorStrokePrecision));
}

#[test]
fn test_pause_at_threshold_is_not_hesitation() {
    // First stroke ends at 500ms
    let r = run(&[line(100.0, 0), line(150.0, 900)], 1400);
    assert_eq!(r.metrics.hesitation_count, 0);
    assert_eq!(r.metrics.avg_pause_duration, 400.0);

    let r = run(&[line(100.0, 0), line(150.0, 901)], 1401);
    assert_eq!(r.metrics.hesitation_count, 1);
    assert_eq!(r.metrics.avg_pause_duration, 401.0);
}

#[test]
fn test_frequent_pauses_are_flagged() {
    // Eight strokes separated by one-second pauses
    let strokes: Vec<Stroke> = (0..8)
        .map(|k| line(40.0 + k as f64 * 30.0, k as i64 * 1500))
        .collect();
    let r = run(&strokes, 11_500);

    assert_eq!(r.metrics.hesitation_count, 7);
    assert_eq!(r.metrics.avg_pause_duration, 1000.0);
    assert!(r.is_flagged(FlaggedCondition::ExcessiveHesitations));
    assert!(r.risk_level >= RiskLevel::Moderate);
}

#[test]
fn test_flagged_conditions_follow_rule_order() {
    let strokes = vec![zig_zag(40, 0), zig_zag(40, 5000), zig_zag(40, 10_000)];
    let r = run(&strokes, 12_000);

    let order = [
        FlaggedCondition::FineMotorControlDeficit,
        FlaggedCondition::MicroTremorPattern,
        FlaggedCondition::WritingFluencyDifficulty,
        FlaggedCondition::ExcessiveHesitations,
        FlaggedCondition::SpatialOrganizationDifficulty,
        FlaggedCondition::InconsistentFormation,
        FlaggedCondition::PoorStrokePrecision,
    ];
    let positions: Vec<usize> = r
        .flagged_conditions
        .iter()
        .map(|c| order.iter().position(|o| o == c).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_summary_names_student_and_prompt() {
    let r = analyze(&[line(150.0, 0)], 500, 300.0, 300.0, PromptType::Sentence, "Kabir", 5);
    assert!(r
        .summary
        .starts_with("Kabir (Grade 5) completed the sentence writing task"));
    assert!(!r.summary.contains(SCREENING_DISCLAIMER));
}

#[test]
fn test_total_time_is_echoed_not_derived() {
    let r = run(&[line(100.0, 0)], 99_999);
    assert_eq!(r.metrics.total_time, 99_999);
}
