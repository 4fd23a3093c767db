use crate::error::Result;
use crate::geometry::{ParamRange, Parametrization};
use crate::scene::Color;
use crate::tessellation::{Polyline, SampleCurve, SamplingParams};

/// A sampled piece of curve with its drawing colour.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSegment {
    pub pieces: Vec<Polyline>,
    pub color: Color,
}

impl CurveSegment {
    /// Samples `curve` over `range`, optionally through a parameter
    /// transform.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform produces a non-finite parameter.
    pub fn sample(
        curve: &dyn Parametrization,
        range: ParamRange,
        transform: Option<&dyn Fn(f64) -> f64>,
        sampling: SamplingParams,
        discontinuities: &[f64],
        color: Color,
    ) -> Result<Self> {
        let mut op = SampleCurve::new(curve, range, sampling).with_discontinuities(discontinuities);
        if let Some(f) = transform {
            op = op.with_transform(f);
        }
        Ok(Self {
            pieces: op.execute()?,
            color,
        })
    }

    /// Number of sampled points over all pieces.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.pieces.iter().map(|p| p.points.len()).sum()
    }
}
