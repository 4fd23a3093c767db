use crate::error::{GeometryError, Result};
use crate::math::clip_2d::clip_line_to_rect;
use crate::math::{Point2, TOLERANCE};

use super::ViewWindow;

/// An infinite line given by its implicit equation `a * x + b * y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    /// Creates a new line from its implicit coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` and `b` are both zero.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if a.abs() < TOLERANCE && b.abs() < TOLERANCE {
            return Err(GeometryError::DegenerateLine.into());
        }
        Ok(Self { a, b, c })
    }

    /// Creates the line `y = slope * x + intercept`.
    #[must_use]
    pub fn from_slope_intercept(slope: f64, intercept: f64) -> Self {
        Self {
            a: -slope,
            b: 1.0,
            c: -intercept,
        }
    }

    /// Creates the line `x = x0`.
    #[must_use]
    pub fn vertical(x0: f64) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: -x0,
        }
    }

    /// Returns `(a, b, c)`.
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.a.abs() < TOLERANCE
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.b.abs() < TOLERANCE
    }

    /// Returns the endpoints of the part of the line visible in `window`,
    /// or `None` when nothing of it can be drawn.
    #[must_use]
    pub fn clip(&self, window: &ViewWindow) -> Option<(Point2, Point2)> {
        clip_line_to_rect(
            self.a,
            self.b,
            self.c,
            window.min_x(),
            window.max_x(),
            window.min_y(),
            window.max_y(),
        )
    }
}
