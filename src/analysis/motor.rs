//! Motor Control Analyzers
//!
//! Local stroke shape: how much the pen turns at each sample, how directly
//! it travels, and whether it reverses direction in rapid tremor-like
//! bursts.

use super::geometry::{angle_between, chord_length, path_length};
use crate::capture::types::Stroke;
use crate::constants::{
    clamp_score, MIN_PRECISION_CHORD_PX, NEUTRAL_SCORE, SMOOTHNESS_ANGLE_SCALE,
    TREMOR_MIN_ANGLE_RAD, TREMOR_WINDOW_MS,
};
use std::f64::consts::PI;

/// Stroke smoothness in [0, 100].
///
/// Averages the absolute turning angle over every interior point of every
/// stroke with at least three samples. Straight or gently curving strokes
/// score near 100; jittery strokes with large frequent swings score low.
pub fn stroke_smoothness(strokes: &[Stroke]) -> f64 {
    let mut total_angle = 0.0;
    let mut joints = 0usize;

    for stroke in strokes.iter().filter(|s| s.len() >= 3) {
        for w in stroke.points.windows(3) {
            total_angle += angle_between(&w[0], &w[1], &w[2]).abs();
            joints += 1;
        }
    }

    if joints == 0 {
        return NEUTRAL_SCORE;
    }

    let mean_angle = total_angle / joints as f64;
    clamp_score(100.0 - (mean_angle / PI) * SMOOTHNESS_ANGLE_SCALE)
}

/// Stroke precision in [0, 100].
///
/// For each stroke whose chord exceeds the noise floor, the ratio of chord
/// to traced path length. A ratio near 1 means the pen went where it meant
/// to go; a low ratio means wobble relative to net displacement.
pub fn stroke_precision(strokes: &[Stroke]) -> f64 {
    let ratios: Vec<f64> = strokes
        .iter()
        .filter(|s| s.len() >= 2)
        .filter_map(|s| {
            let chord = chord_length(&s.points);
            if chord <= MIN_PRECISION_CHORD_PX {
                return None;
            }
            Some(chord / path_length(&s.points))
        })
        .collect();

    if ratios.is_empty() {
        return NEUTRAL_SCORE;
    }

    let avg = ratios.iter().sum::<f64>() / ratios.len() as f64;
    clamp_score(avg * 100.0)
}

/// Number of micro-tremor events across all strokes.
///
/// A tremor is two consecutive sharp joints turning in opposite directions
/// within a short window: for the four points `i-2..=i+1`, the turns at
/// `i-1` and `i` both exceed the angle threshold, have opposite signs, and
/// the whole window spans less than the time threshold.
pub fn micro_tremor_count(strokes: &[Stroke]) -> u32 {
    let mut count = 0u32;

    for stroke in strokes.iter().filter(|s| s.len() >= 4) {
        let pts = &stroke.points;
        for i in 2..pts.len() - 1 {
            if pts[i + 1].millis_since(&pts[i - 2]) >= TREMOR_WINDOW_MS {
                continue;
            }
            let first = angle_between(&pts[i - 2], &pts[i - 1], &pts[i]);
            let second = angle_between(&pts[i - 1], &pts[i], &pts[i + 1]);
            if first.abs() > TREMOR_MIN_ANGLE_RAD
                && second.abs() > TREMOR_MIN_ANGLE_RAD
                && first * second < 0.0
            {
                count += 1;
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::types::StrokePoint;

    fn stroke(points: &[(f64, f64, i64)]) -> Stroke {
        Stroke::new(
            points.iter().map(|&(x, y, t)| StrokePoint::new(x, y, t)).collect(),
            2.0,
        )
    }

    fn straight_line(len: usize) -> Stroke {
        stroke(
            &(0..len)
                .map(|i| (i as f64 * 10.0, 50.0, i as i64 * 20))
                .collect::<Vec<_>>(),
        )
    }

    fn zig_zag(len: usize, step_ms: i64) -> Stroke {
        stroke(
            &(0..len)
                .map(|i| {
                    let y = if i % 2 == 0 { 0.0 } else { 10.0 };
                    (i as f64 * 10.0, y, i as i64 * step_ms)
                })
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_smoothness_neutral_without_joints() {
        assert_eq!(stroke_smoothness(&[]), NEUTRAL_SCORE);
        let short = stroke(&[(0.0, 0.0, 0), (10.0, 0.0, 10)]);
        assert_eq!(stroke_smoothness(&[short]), NEUTRAL_SCORE);
    }

    #[test]
    fn test_smoothness_straight_line_is_perfect() {
        assert_eq!(stroke_smoothness(&[straight_line(10)]), 100.0);
    }

    #[test]
    fn test_smoothness_zig_zag_is_penalized() {
        // Every joint turns by π/2: 100 - 0.5 * 120 = 40
        assert!((stroke_smoothness(&[zig_zag(10, 20)]) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_smoothness_reversal_clamps_to_zero() {
        let back_and_forth = stroke(&[
            (0.0, 0.0, 0),
            (10.0, 0.0, 10),
            (0.0, 0.0, 20),
            (10.0, 0.0, 30),
        ]);
        assert_eq!(stroke_smoothness(&[back_and_forth]), 0.0);
    }

    #[test]
    fn test_precision_straight_line() {
        assert_eq!(stroke_precision(&[straight_line(10)]), 100.0);
    }

    #[test]
    fn test_precision_ignores_tiny_strokes() {
        let dot = stroke(&[(0.0, 0.0, 0), (3.0, 4.0, 10)]);
        assert_eq!(stroke_precision(&[dot]), NEUTRAL_SCORE);
        let single = stroke(&[(0.0, 0.0, 0)]);
        assert_eq!(stroke_precision(&[single]), NEUTRAL_SCORE);
    }

    #[test]
    fn test_precision_detour() {
        // up 4, across 6, down 4: chord 6, path 14
        let detour = stroke(&[(0.0, 0.0, 0), (0.0, 4.0, 10), (6.0, 4.0, 20), (6.0, 0.0, 30)]);
        let expected = 6.0_f64 / 14.0 * 100.0;
        assert_eq!(stroke_precision(&[detour]), expected);
    }

    #[test]
    fn test_precision_averages_strokes() {
        let straight = straight_line(5);
        let detour = stroke(&[(0.0, 0.0, 0), (0.0, 4.0, 10), (6.0, 4.0, 20), (6.0, 0.0, 30)]);
        let expected = (1.0 + 6.0 / 14.0) / 2.0 * 100.0_f64;
        assert_eq!(stroke_precision(&[straight, detour]), expected);
    }

    #[test]
    fn test_tremor_counts_every_window_in_zig_zag() {
        for len in [4, 5, 12, 20] {
            assert_eq!(micro_tremor_count(&[zig_zag(len, 20)]), (len - 3) as u32);
        }
    }

    #[test]
    fn test_tremor_requires_fast_window() {
        // 3 intervals of 70ms = 210ms per window
        assert_eq!(micro_tremor_count(&[zig_zag(12, 70)]), 0);
        // 3 intervals of 66ms = 198ms per window
        assert_eq!(micro_tremor_count(&[zig_zag(12, 66)]), 9);
    }

    #[test]
    fn test_tremor_requires_opposite_turns() {
        // A square spiral turns the same way at every corner
        let square = stroke(&[
            (0.0, 0.0, 0),
            (10.0, 0.0, 10),
            (10.0, 10.0, 20),
            (0.0, 10.0, 30),
            (0.0, 0.0, 40),
        ]);
        assert_eq!(micro_tremor_count(&[square]), 0);
    }

    #[test]
    fn test_tremor_ignores_short_strokes() {
        assert_eq!(micro_tremor_count(&[zig_zag(3, 10)]), 0);
        assert_eq!(micro_tremor_count(&[]), 0);
    }

    #[test]
    fn test_tremor_ignores_smooth_lines() {
        assert_eq!(micro_tremor_count(&[straight_line(30)]), 0);
    }
}
