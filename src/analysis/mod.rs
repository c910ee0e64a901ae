//! Stroke analysis
//!
//! Turns raw strokes into bounded per-metric scores and raw counts:
//! - Geometry primitives (turning angle, distance, bounding boxes)
//! - Motor control: smoothness, precision, micro-tremor
//! - Kinematics: speed consistency, average speed, hesitations
//! - Spatial: canvas organization, letter-size consistency
//!
//! Every analyzer is total. When input is too thin to measure, it returns
//! a neutral score instead of a "good" or "bad" one.

pub mod geometry;
pub mod stats;
pub mod motor;
pub mod kinematics;
pub mod spatial;
pub mod metrics;

pub use geometry::{angle_between, distance, BoundingBox};
pub use kinematics::HesitationAnalysis;
pub use metrics::DysgraphiaMetrics;
