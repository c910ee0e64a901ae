//! Geometry Primitives
//!
//! Angles, distances and bounding boxes over stroke points. Everything here
//! is pure math and tolerates degenerate input: coincident points read as
//! "no direction change", empty point sets have no bounding box.

use crate::capture::types::StrokePoint;

/// Vectors shorter than this are treated as zero-length
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Signed angle (radians) between the vectors p1→p2 and p2→p3.
///
/// Computed as `atan2(cross, dot)`, so the result lies in (−π, π]. A positive
/// value is a turn toward +y. If either vector has zero length the turn is
/// undefined and 0 is returned.
pub fn angle_between(p1: &StrokePoint, p2: &StrokePoint, p3: &StrokePoint) -> f64 {
    let (ax, ay) = (p2.x - p1.x, p2.y - p1.y);
    let (bx, by) = (p3.x - p2.x, p3.y - p2.y);

    if ax.hypot(ay) < DEGENERATE_EPSILON || bx.hypot(by) < DEGENERATE_EPSILON {
        return 0.0;
    }

    let cross = ax * by - ay * bx;
    let dot = ax * bx + ay * by;
    cross.atan2(dot)
}

/// Euclidean distance between two points
pub fn distance(a: &StrokePoint, b: &StrokePoint) -> f64 {
    a.distance_to(b)
}

/// Total traced distance along the points
pub fn path_length(points: &[StrokePoint]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

/// Straight-line distance from the first to the last point
pub fn chord_length(points: &[StrokePoint]) -> f64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => distance(first, last),
        _ => 0.0,
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Bounding box of a point set, `None` when empty
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a StrokePoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(iter.fold(init, |b, p| BoundingBox {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Larger of width and height
    pub fn max_dimension(&self) -> f64 {
        self.width().max(self.height())
    }
}
