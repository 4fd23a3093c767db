use crate::error::Result;
use crate::math::Vector2;
use crate::tex;

use super::SymmetryRule;

/// A tangent direction at a parameter, as shown on screen.
///
/// `direction` is the vector written in the narration (often with integer
/// coordinates); the arrow drawn on the axes is `direction * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentVector {
    param: f64,
    direction: Vector2,
    scale: f64,
}

impl TangentVector {
    #[must_use]
    pub fn new(param: f64, direction: Vector2, scale: f64) -> Self {
        Self {
            param,
            direction,
            scale,
        }
    }

    #[must_use]
    pub fn param(&self) -> f64 {
        self.param
    }

    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The vector drawn from the curve point.
    #[must_use]
    pub fn drawn(&self) -> Vector2 {
        self.direction * self.scale
    }

    /// The displayed direction as a LaTeX column vector.
    #[must_use]
    pub fn direction_latex(&self) -> String {
        tex::column(&[self.direction.x, self.direction.y])
    }

    /// Image of this tangent under `rule`; see [`SymmetryRule::reflect_tangent`].
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is not finite.
    pub fn reflected(&self, rule: &SymmetryRule) -> Result<Self> {
        rule.reflect_tangent(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawn_vector_is_scaled() {
        let t = TangentVector::new(0.0, Vector2::new(0.0, 2.0), 0.2);
        assert!((t.drawn() - Vector2::new(0.0, 0.4)).norm() < 1e-12);
        assert_eq!(t.direction(), Vector2::new(0.0, 2.0));
    }

    #[test]
    fn direction_renders_as_column() {
        let t = TangentVector::new(0.0, Vector2::new(-3.0, 0.0), 1.0 / 15.0);
        assert_eq!(
            t.direction_latex(),
            "\\begin{pmatrix}-3\\\\0\\end{pmatrix}"
        );
    }
}
