mod sample_curve;

pub use sample_curve::SampleCurve;

use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// Parameters controlling how curves are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Number of samples per continuous piece (at least 2 are taken).
    pub samples: usize,
    /// Gap left on each side of a discontinuity.
    pub dt: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            samples: 240,
            dt: 0.1,
        }
    }
}

/// A polyline approximation of a piece of curve, in data coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}
