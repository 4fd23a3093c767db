use std::fmt;

use crate::error::{GeometryError, Result};
use crate::geometry::{Line, ViewWindow};
use crate::math::rational::Coefficient;
use crate::math::Point2;
use crate::scene::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Oblique,
}

impl Orientation {
    /// Word inserted after "asymptote" in the label, with its leading space.
    fn qualifier(self) -> &'static str {
        match self {
            Self::Horizontal => " horizontale",
            Self::Vertical => " verticale",
            Self::Oblique => "",
        }
    }
}

/// An asymptote `a * x + b * y + c = 0`, with its French label.
///
/// Coefficients keep their exact form so the equation reads `y=\frac{x}{2}`
/// rather than `y=0.5x`. The equation is always rendered as `x=c` or
/// `y=mx+p`.
#[derive(Debug, Clone, PartialEq)]
pub struct AsymptoteDescriptor {
    a: Coefficient,
    b: Coefficient,
    c: Coefficient,
    line: Line,
    color: Color,
}

impl AsymptoteDescriptor {
    /// # Errors
    ///
    /// Returns an error if `a` and `b` are both zero.
    pub fn from_coefficients(
        a: impl Into<Coefficient>,
        b: impl Into<Coefficient>,
        c: impl Into<Coefficient>,
    ) -> Result<Self> {
        let (a, b, c) = (a.into(), b.into(), c.into());
        if a.is_zero() && b.is_zero() {
            return Err(GeometryError::DegenerateLine.into());
        }
        let line = Line::new(a.to_f64(), b.to_f64(), c.to_f64())?;
        Ok(Self {
            a,
            b,
            c,
            line,
            color: Color::WHITE,
        })
    }

    /// The asymptote `y = slope * x + intercept`.
    #[must_use]
    pub fn from_slope_intercept(
        slope: impl Into<Coefficient>,
        intercept: impl Into<Coefficient>,
    ) -> Self {
        let (slope, intercept) = (slope.into(), intercept.into());
        Self {
            a: -slope,
            b: Coefficient::from(1),
            c: -intercept,
            line: Line::from_slope_intercept(slope.to_f64(), intercept.to_f64()),
            color: Color::WHITE,
        }
    }

    /// The horizontal asymptote `y = c`.
    #[must_use]
    pub fn horizontal(c: impl Into<Coefficient>) -> Self {
        Self::from_slope_intercept(0, c)
    }

    /// The vertical asymptote `x = c`.
    #[must_use]
    pub fn vertical(c: impl Into<Coefficient>) -> Self {
        let c = c.into();
        Self {
            a: Coefficient::from(1),
            b: Coefficient::from(0),
            c: -c,
            line: Line::vertical(c.to_f64()),
            color: Color::WHITE,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.a.is_zero() {
            Orientation::Horizontal
        } else if self.b.is_zero() {
            Orientation::Vertical
        } else {
            Orientation::Oblique
        }
    }

    /// Equation in LaTeX maths, without delimiters: `x=-2`,
    /// `y=\frac{x}{2}-\frac{3}{4}`.
    #[must_use]
    pub fn equation_latex(&self) -> String {
        self.equation("=", Coefficient::to_latex)
    }

    /// Equation in plain text: `x = -2`, `y = x/2 - 3/4`.
    #[must_use]
    pub fn equation_plain(&self) -> String {
        self.equation(" = ", Coefficient::to_plain)
    }

    fn equation(&self, eq: &str, render: fn(Coefficient, &str) -> String) -> String {
        let Self { a, b, c, .. } = *self;
        match self.orientation() {
            Orientation::Horizontal => format!("y{eq}{}", render(-c / b, "")),
            Orientation::Vertical => format!("x{eq}{}", render(-c / a, "")),
            Orientation::Oblique => {
                let slope = render(-a / b, "x");
                let intercept = -c / b;
                if intercept.is_zero() {
                    return format!("y{eq}{slope}");
                }
                let sign = if intercept.is_negative() { '-' } else { '+' };
                let pad = if eq.starts_with(' ') { " " } else { "" };
                format!(
                    "y{eq}{slope}{pad}{sign}{pad}{}",
                    render(intercept.abs(), "")
                )
            }
        }
    }

    /// `asymptote verticale d'équation $x=-2$`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "asymptote{} d'équation ${}$",
            self.orientation().qualifier(),
            self.equation_latex()
        )
    }

    #[must_use]
    pub fn line(&self) -> &Line {
        &self.line
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Visible part of the asymptote in `window`.
    #[must_use]
    pub fn clip(&self, window: &ViewWindow) -> Option<(Point2, Point2)> {
        self.line.clip(window)
    }
}

impl fmt::Display for AsymptoteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.equation_plain())
    }
}

/// Behaviour of the curve when the parameter runs to a bound where the
/// point goes to infinity.
#[derive(Debug, Clone, PartialEq)]
pub enum InfiniteBranch {
    Asymptote(AsymptoteDescriptor),
    /// Parabolic branch along `axis`, one of `(Ox)`, `(Oy)` or
    /// `$D : y = \alpha x$`. Narrated, never drawn.
    Parabolic { axis: String },
}

impl InfiniteBranch {
    #[must_use]
    pub fn parabolic(axis: impl Into<String>) -> Self {
        Self::Parabolic { axis: axis.into() }
    }

    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Asymptote(asymptote) => asymptote.label(),
            Self::Parabolic { axis } => format!("branche parabolique d'axe {axis}"),
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Asymptote(asymptote) => asymptote.color(),
            Self::Parabolic { .. } => Color::WHITE,
        }
    }

    /// Visible part of the branch's line, `None` for parabolic branches.
    #[must_use]
    pub fn clip(&self, window: &ViewWindow) -> Option<(Point2, Point2)> {
        match self {
            Self::Asymptote(asymptote) => asymptote.clip(window),
            Self::Parabolic { .. } => None,
        }
    }
}

impl From<AsymptoteDescriptor> for InfiniteBranch {
    fn from(asymptote: AsymptoteDescriptor) -> Self {
        Self::Asymptote(asymptote)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn vertical_keeps_sign() {
        let asymptote = AsymptoteDescriptor::from_coefficients(1, 0, 2).unwrap();
        assert_eq!(asymptote.orientation(), Orientation::Vertical);
        assert_eq!(asymptote.equation_latex(), "x=-2");
        assert_eq!(asymptote.equation_plain(), "x = -2");
        assert_eq!(asymptote.label(), "asymptote verticale d'équation $x=-2$");
    }

    #[test]
    fn slope_intercept_fractions() {
        let asymptote = AsymptoteDescriptor::from_slope_intercept(
            Coefficient::fraction(1, 2),
            Coefficient::fraction(-3, 4),
        );
        assert_eq!(asymptote.orientation(), Orientation::Oblique);
        assert_eq!(asymptote.equation_plain(), "y = x/2 - 3/4");
        assert_eq!(asymptote.equation_latex(), "y=\\frac{x}{2}-\\frac{3}{4}");
        assert_eq!(
            asymptote.label(),
            "asymptote d'équation $y=\\frac{x}{2}-\\frac{3}{4}$"
        );
    }

    #[test]
    fn horizontal_zero() {
        let asymptote = AsymptoteDescriptor::horizontal(0);
        assert_eq!(asymptote.orientation(), Orientation::Horizontal);
        assert_eq!(asymptote.equation_plain(), "y = 0");
        assert!(asymptote.line().is_horizontal());
    }

    #[test]
    fn orientation_agrees_with_line_on_tiny_coefficients() {
        let asymptote = AsymptoteDescriptor::from_coefficients(1e-12, 1, 0).unwrap();
        assert_eq!(asymptote.orientation(), Orientation::Horizontal);
        assert!(asymptote.line().is_horizontal());
    }

    #[test]
    fn vertical_fraction() {
        let asymptote = AsymptoteDescriptor::vertical(Coefficient::fraction(-1, 2));
        assert_eq!(asymptote.equation_latex(), "x=-\\frac{1}{2}");
        assert!(asymptote.line().is_vertical());
        let (a, b, c) = asymptote.line().coefficients();
        assert!((a - 1.0).abs() < 1e-12 && b.abs() < 1e-12 && (c - 0.5).abs() < 1e-12);
    }

    #[test]
    fn oblique_through_origin_has_no_intercept() {
        let asymptote = AsymptoteDescriptor::from_coefficients(-2, 1, 0).unwrap();
        assert_eq!(asymptote.equation_plain(), "y = 2x");
        let unit = AsymptoteDescriptor::from_slope_intercept(-1, 3);
        assert_eq!(unit.equation_plain(), "y = -x + 3");
    }

    #[test]
    fn float_coefficients_render_approximately() {
        let asymptote = AsymptoteDescriptor::from_slope_intercept(0.5, 1);
        assert_eq!(asymptote.equation_plain(), "y = 0.5x + 1");
    }

    #[test]
    fn degenerate_coefficients_fail() {
        assert!(AsymptoteDescriptor::from_coefficients(0, 0, 1).is_err());
    }

    #[test]
    fn clipping_through_descriptor() {
        let window = ViewWindow::new(-4.8, 8.2, -5.2, 5.2).unwrap();
        let (p, q) = AsymptoteDescriptor::vertical(Coefficient::fraction(-1, 2))
            .clip(&window)
            .unwrap();
        assert!((p.x + 0.5).abs() < 1e-12 && (q.x + 0.5).abs() < 1e-12);
        assert!(AsymptoteDescriptor::vertical(10).clip(&window).is_none());
    }

    #[test]
    fn parabolic_branch_is_not_drawn() {
        let window = ViewWindow::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let branch = InfiniteBranch::parabolic("(Ox)");
        assert_eq!(branch.label(), "branche parabolique d'axe (Ox)");
        assert!(branch.clip(&window).is_none());
    }
}
