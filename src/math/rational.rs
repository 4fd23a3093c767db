use std::fmt;
use std::ops::{Div, Neg};

use num_rational::Rational64;

use super::TOLERANCE;

/// A coefficient that stays exact as long as every operand is exact.
///
/// Integers and [`Rational64`] values are exact; any `f64` operand turns the
/// result approximate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coefficient {
    Exact(Rational64),
    Approx(f64),
}

impl Coefficient {
    /// Builds the exact fraction `numer / denom`.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero, like [`Rational64::new`].
    #[must_use]
    pub fn fraction(numer: i64, denom: i64) -> Self {
        Self::Exact(Rational64::new(numer, denom))
    }

    /// Returns the value as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Exact(r) => *r.numer() as f64 / *r.denom() as f64,
            Self::Approx(v) => v,
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Exact(r) => *r.numer() == 0,
            Self::Approx(v) => v.abs() < TOLERANCE,
        }
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Exact(r) => *r.numer() < 0,
            Self::Approx(v) => v < 0.0,
        }
    }

    #[must_use]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// Renders `self * var` in LaTeX, sign first, with unit coefficients and
    /// unit denominators elided: `-\frac{3x}{4}`, `x`, `-2`.
    ///
    /// `var` may be empty, in which case a unit coefficient renders as `1`.
    #[must_use]
    pub fn to_latex(self, var: &str) -> String {
        self.render(var, |num, den| format!("\\frac{{{num}}}{{{den}}}"))
    }

    /// Plain-text counterpart of [`Coefficient::to_latex`]: `-3x/4`, `x/2`.
    #[must_use]
    pub fn to_plain(self, var: &str) -> String {
        self.render(var, |num, den| format!("{num}/{den}"))
    }

    fn render(self, var: &str, fraction: impl Fn(&str, i64) -> String) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        match self.abs() {
            Self::Exact(r) => {
                let num = if *r.numer() == 1 && !var.is_empty() {
                    var.to_owned()
                } else {
                    format!("{}{var}", r.numer())
                };
                if *r.denom() == 1 {
                    format!("{sign}{num}")
                } else {
                    format!("{sign}{}", fraction(&num, *r.denom()))
                }
            }
            Self::Approx(v) => {
                if (v - 1.0).abs() < TOLERANCE && !var.is_empty() {
                    format!("{sign}{var}")
                } else {
                    format!("{sign}{v}{var}")
                }
            }
        }
    }
}

impl From<i64> for Coefficient {
    fn from(value: i64) -> Self {
        Self::Exact(Rational64::from_integer(value))
    }
}

impl From<i32> for Coefficient {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<Rational64> for Coefficient {
    fn from(value: Rational64) -> Self {
        Self::Exact(value)
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Self::Approx(value)
    }
}

impl Neg for Coefficient {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Exact(r) => Self::Exact(-r),
            Self::Approx(v) => Self::Approx(-v),
        }
    }
}

impl Div for Coefficient {
    type Output = Self;

    /// Divides two coefficients. Exact division by an exact zero falls back
    /// to the float result (an infinity) instead of panicking.
    fn div(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Exact(a), Self::Exact(b)) if *b.numer() != 0 => Self::Exact(a / b),
            _ => Self::Approx(self.to_f64() / rhs.to_f64()),
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_exact() {
        assert_eq!(Coefficient::from(3), Coefficient::fraction(3, 1));
    }

    #[test]
    fn exact_division_stays_exact() {
        let q = Coefficient::from(3) / Coefficient::from(-4);
        assert_eq!(q, Coefficient::fraction(-3, 4));
    }

    #[test]
    fn float_operand_makes_result_approximate() {
        let q = Coefficient::from(1) / Coefficient::from(4.0);
        assert_eq!(q, Coefficient::Approx(0.25));
    }

    #[test]
    fn exact_division_by_zero_is_infinite() {
        let q = Coefficient::from(1) / Coefficient::from(0);
        assert!(q.to_f64().is_infinite());
    }

    #[test]
    fn unit_coefficient_is_elided() {
        assert_eq!(Coefficient::from(1).to_latex("x"), "x");
        assert_eq!(Coefficient::from(-1).to_latex("x"), "-x");
        assert_eq!(Coefficient::from(1).to_latex(""), "1");
        assert_eq!(Coefficient::Approx(1.0).to_plain("x"), "x");
    }

    #[test]
    fn unit_denominator_is_elided_and_sign_kept() {
        assert_eq!(Coefficient::from(-2).to_latex(""), "-2");
        assert_eq!(Coefficient::from(5).to_plain("x"), "5x");
    }

    #[test]
    fn fractions_put_variable_on_numerator() {
        assert_eq!(Coefficient::fraction(1, 2).to_latex("x"), "\\frac{x}{2}");
        assert_eq!(Coefficient::fraction(-3, 4).to_latex("x"), "-\\frac{3x}{4}");
        assert_eq!(Coefficient::fraction(1, 2).to_plain("x"), "x/2");
        assert_eq!(Coefficient::fraction(3, 4).to_plain(""), "3/4");
    }

    #[test]
    fn approximate_zero_uses_geometric_tolerance() {
        assert!(Coefficient::Approx(1e-12).is_zero());
        assert!(Coefficient::Approx(-1e-12).is_zero());
        assert!(!Coefficient::Approx(1e-8).is_zero());
        assert!(Coefficient::fraction(0, 5).is_zero());
    }

    #[test]
    fn floats_render_with_display() {
        assert_eq!(Coefficient::Approx(-0.5).to_plain("x"), "-0.5x");
        assert_eq!(Coefficient::Approx(2.0).to_latex(""), "2");
    }
}
