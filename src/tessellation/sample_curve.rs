use crate::error::{GeometryError, Result};
use crate::geometry::{ParamRange, Parametrization};

use super::{Polyline, SamplingParams};

/// Samples a parametrization over a parameter range into polylines.
///
/// The range is cut around the declared discontinuities, and the curve is
/// also broken wherever it evaluates to a non-finite point, so the result
/// may hold several pieces.
pub struct SampleCurve<'a> {
    curve: &'a dyn Parametrization,
    range: ParamRange,
    params: SamplingParams,
    transform: Option<&'a dyn Fn(f64) -> f64>,
    discontinuities: &'a [f64],
}

impl<'a> SampleCurve<'a> {
    /// Creates a new `SampleCurve` operation.
    #[must_use]
    pub fn new(curve: &'a dyn Parametrization, range: ParamRange, params: SamplingParams) -> Self {
        Self {
            curve,
            range,
            params,
            transform: None,
            discontinuities: &[],
        }
    }

    /// Samples `curve(transform(t))` instead of `curve(t)`.
    #[must_use]
    pub fn with_transform(mut self, transform: &'a dyn Fn(f64) -> f64) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Parameters (before any transform) where the curve is not continuous.
    #[must_use]
    pub fn with_discontinuities(mut self, discontinuities: &'a [f64]) -> Self {
        self.discontinuities = discontinuities;
        self
    }

    /// Executes the sampling, returning the continuous pieces in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform maps a parameter to a non-finite
    /// value.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Vec<Polyline>> {
        let n = self.params.samples.max(2);
        let mut pieces = Vec::new();

        for piece in self.range.split_around(self.discontinuities, self.params.dt) {
            let mut current = Polyline::default();
            for i in 0..n {
                let t = piece.t_min + piece.length() * (i as f64) / ((n - 1) as f64);
                let s = match self.transform {
                    Some(f) => f(t),
                    None => t,
                };
                if !s.is_finite() {
                    return Err(GeometryError::NonFiniteParameter { value: s }.into());
                }
                let p = self.curve.point(s);
                if p.x.is_finite() && p.y.is_finite() {
                    current.points.push(p);
                } else if !current.points.is_empty() {
                    flush(&mut pieces, std::mem::take(&mut current));
                }
            }
            flush(&mut pieces, current);
        }

        Ok(pieces)
    }
}

/// Keeps a piece only if it can be drawn as a line.
fn flush(pieces: &mut Vec<Polyline>, piece: Polyline) {
    if piece.points.len() >= 2 {
        pieces.push(piece);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::geometry::FnParametrization;
    use crate::math::Point2;

    fn circle() -> FnParametrization {
        FnParametrization::new(f64::cos, f64::sin)
    }

    #[test]
    fn samples_include_both_ends() {
        let c = circle();
        let range = ParamRange::new(0.0, PI).unwrap();
        let params = SamplingParams { samples: 5, dt: 0.1 };
        let pieces = SampleCurve::new(&c, range, params).execute().unwrap();
        assert_eq!(pieces.len(), 1);
        let pts = &pieces[0].points;
        assert_eq!(pts.len(), 5);
        assert!((pts[0] - Point2::new(1.0, 0.0)).norm() < 1e-12);
        assert!((pts[4] - Point2::new(-1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn transform_is_applied_before_evaluation() {
        let c = circle();
        let range = ParamRange::new(0.0, PI).unwrap();
        let params = SamplingParams { samples: 3, dt: 0.1 };
        let mirror = |t: f64| -t;
        let pieces = SampleCurve::new(&c, range, params)
            .with_transform(&mirror)
            .execute()
            .unwrap();
        let mid = pieces[0].points[1];
        assert!((mid - Point2::new(0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn discontinuities_split_pieces() {
        let hyperbola = FnParametrization::new(|t| t, |t| 1.0 / t);
        let range = ParamRange::new(-1.0, 1.0).unwrap();
        let params = SamplingParams { samples: 10, dt: 0.1 };
        let pieces = SampleCurve::new(&hyperbola, range, params)
            .with_discontinuities(&[0.0])
            .execute()
            .unwrap();
        assert_eq!(pieces.len(), 2);
        assert!(pieces.iter().all(|p| p.points.len() == 10));
    }

    #[test]
    fn non_finite_points_break_the_polyline() {
        let pole = FnParametrization::new(|t| t, |t| if t == 0.0 { f64::INFINITY } else { t });
        let range = ParamRange::new(-1.0, 1.0).unwrap();
        let params = SamplingParams { samples: 5, dt: 0.1 };
        let pieces = SampleCurve::new(&pole, range, params).execute().unwrap();
        assert_eq!(pieces.len(), 2);
    }
}
