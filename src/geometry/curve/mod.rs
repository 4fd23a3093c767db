use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A plane curve `t -> (x(t), y(t))`.
pub trait Parametrization: Send + Sync {
    /// Abscissa of the point of parameter `t`.
    fn x(&self, t: f64) -> f64;

    /// Ordinate of the point of parameter `t`.
    fn y(&self, t: f64) -> f64;

    /// Evaluates the curve at parameter `t`.
    fn point(&self, t: f64) -> Point2 {
        Point2::new(self.x(t), self.y(t))
    }
}

/// A parametrization backed by two plain functions.
#[derive(Debug, Clone, Copy)]
pub struct FnParametrization {
    x: fn(f64) -> f64,
    y: fn(f64) -> f64,
}

impl FnParametrization {
    #[must_use]
    pub fn new(x: fn(f64) -> f64, y: fn(f64) -> f64) -> Self {
        Self { x, y }
    }
}

impl Parametrization for FnParametrization {
    fn x(&self, t: f64) -> f64 {
        (self.x)(t)
    }

    fn y(&self, t: f64) -> f64 {
        (self.y)(t)
    }
}

/// A closed interval of parameters, `t_min < t_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl ParamRange {
    /// Creates a new parameter range.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or `t_min >= t_max`.
    pub fn new(t_min: f64, t_max: f64) -> Result<Self> {
        if !t_min.is_finite() || !t_max.is_finite() || t_min >= t_max {
            return Err(GeometryError::InvalidRange {
                start: t_min,
                end: t_max,
            }
            .into());
        }
        Ok(Self { t_min, t_max })
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.t_max - self.t_min
    }

    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }

    /// Cuts the range around each discontinuity `d`, leaving out
    /// `]d - dt, d + dt[`. Pieces that vanish are dropped.
    #[must_use]
    pub fn split_around(&self, discontinuities: &[f64], dt: f64) -> Vec<ParamRange> {
        let mut cuts: Vec<f64> = discontinuities
            .iter()
            .copied()
            .filter(|d| self.contains(*d))
            .collect();
        cuts.sort_by(f64::total_cmp);

        let mut pieces = Vec::with_capacity(cuts.len() + 1);
        let mut start = self.t_min;
        for d in cuts {
            let end = d - dt;
            if end > start {
                pieces.push(ParamRange { t_min: start, t_max: end });
            }
            start = start.max(d + dt);
        }
        if self.t_max > start {
            pieces.push(ParamRange {
                t_min: start,
                t_max: self.t_max,
            });
        }
        pieces
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn fn_parametrization_evaluates_both_coordinates() {
        let circle = FnParametrization::new(f64::cos, f64::sin);
        let p = circle.point(FRAC_PI_2);
        assert!((p - Point2::new(0.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn range_rejects_reversed_bounds() {
        assert!(ParamRange::new(1.0, 0.0).is_err());
        assert!(ParamRange::new(0.0, f64::NAN).is_err());
        assert!(ParamRange::new(-PI, PI).is_ok());
    }

    #[test]
    fn split_without_discontinuity_keeps_range() {
        let r = ParamRange::new(-5.0, 7.0).unwrap();
        assert_eq!(r.split_around(&[], 0.1), vec![r]);
        assert_eq!(r.split_around(&[10.0], 0.1), vec![r]);
    }

    #[test]
    fn split_around_two_poles() {
        let r = ParamRange::new(-5.0, 7.0).unwrap();
        let pieces = r.split_around(&[1.0, -1.0], 0.1);
        assert_eq!(pieces.len(), 3);
        assert!((pieces[0].t_max + 1.1).abs() < 1e-12);
        assert!((pieces[1].t_min + 0.9).abs() < 1e-12);
        assert!((pieces[1].t_max - 0.9).abs() < 1e-12);
        assert!((pieces[2].t_min - 1.1).abs() < 1e-12);
    }

    #[test]
    fn split_at_boundary_drops_empty_piece() {
        let r = ParamRange::new(0.0, 1.0).unwrap();
        let pieces = r.split_around(&[0.0], 0.1);
        assert_eq!(pieces.len(), 1);
        assert!((pieces[0].t_min - 0.1).abs() < 1e-12);
    }
}
