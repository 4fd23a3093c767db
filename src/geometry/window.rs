use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// The rectangle of data coordinates shown by the axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewWindow {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl ViewWindow {
    /// Creates a new view window.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or if the bounds of an axis
    /// are not strictly ordered.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self> {
        let finite = [min_x, max_x, min_y, max_y].iter().all(|v| v.is_finite());
        if !finite || min_x >= max_x || min_y >= max_y {
            return Err(GeometryError::InvalidWindow {
                min_x,
                max_x,
                min_y,
                max_y,
            }
            .into());
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Returns whether `p` lies in the window, borders included.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min_x - TOLERANCE
            && p.x <= self.max_x + TOLERANCE
            && p.y >= self.min_y - TOLERANCE
            && p.y <= self.max_y + TOLERANCE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_with_ordered_bounds() {
        let w = ViewWindow::new(-1.2, 1.2, -0.2, 1.8).unwrap();
        assert!((w.min_y() + 0.2).abs() < f64::EPSILON);
        assert!(w.contains(&Point2::new(1.2, 1.8)));
        assert!(!w.contains(&Point2::new(0.0, 2.0)));
    }

    #[test]
    fn new_with_swapped_bounds_fails() {
        assert!(ViewWindow::new(1.0, -1.0, -1.0, 1.0).is_err());
        assert!(ViewWindow::new(-1.0, 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn new_with_infinite_bound_fails() {
        assert!(ViewWindow::new(f64::NEG_INFINITY, 1.0, -1.0, 1.0).is_err());
    }
}
