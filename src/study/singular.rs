use std::fmt;

use crate::tex::{self, D};

use super::TangentVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    #[must_use]
    pub fn of(n: u32) -> Self {
        if n % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Even => "pair",
            Self::Odd => "impair",
        })
    }
}

/// Local shape of a curve at a point, read from the parities of `p` (order
/// of the first non-zero derivative) and `q` (order of the first derivative
/// not collinear to it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Ordinary,
    Inflection,
    FirstKindCusp,
    SecondKindCusp,
}

impl PointKind {
    #[must_use]
    pub fn from_orders(p: u32, q: u32) -> Self {
        match (Parity::of(p), Parity::of(q)) {
            (Parity::Odd, Parity::Even) => Self::Ordinary,
            (Parity::Odd, Parity::Odd) => Self::Inflection,
            (Parity::Even, Parity::Odd) => Self::FirstKindCusp,
            (Parity::Even, Parity::Even) => Self::SecondKindCusp,
        }
    }

    /// Parities of `p` and `q` for this kind.
    #[must_use]
    pub fn parities(self) -> (Parity, Parity) {
        match self {
            Self::Ordinary => (Parity::Odd, Parity::Even),
            Self::Inflection => (Parity::Odd, Parity::Odd),
            Self::FirstKindCusp => (Parity::Even, Parity::Odd),
            Self::SecondKindCusp => (Parity::Even, Parity::Even),
        }
    }

    /// Qualifier following "point" in French.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ordinary => "ordinaire",
            Self::Inflection => "d'inflexion",
            Self::FirstKindCusp => "de rebroussement de 1ère espèce",
            Self::SecondKindCusp => "de rebroussement de 2ème espèce",
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (p, q) = self.parities();
        write!(
            f,
            "p est {p} et q est {q}. Il s'agit d'un point {}.",
            self.label()
        )
    }
}

/// A point studied locally: its parameter label, the tangent drawn there,
/// and the orders `p` and `q`.
#[derive(Debug, Clone, PartialEq)]
pub struct SingularPoint {
    label: String,
    tangent: TangentVector,
    p: u32,
    q: u32,
    kind: PointKind,
}

impl SingularPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, tangent: TangentVector, p: u32, q: u32) -> Self {
        Self {
            label: label.into(),
            tangent,
            p,
            q,
            kind: PointKind::from_orders(p, q),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn tangent(&self) -> &TangentVector {
        &self.tangent
    }

    #[must_use]
    pub fn orders(&self) -> (u32, u32) {
        (self.p, self.q)
    }

    #[must_use]
    pub fn kind(&self) -> PointKind {
        self.kind
    }

    /// LaTeX lines presenting the local study, shown one below the other.
    #[must_use]
    pub fn narration(&self) -> Vec<String> {
        let label = &self.label;
        let direction = self.tangent.direction_latex();
        let zero = tex::vect("0");
        let om = tex::vect("OM");
        let mut lines = Vec::with_capacity(5);

        let (intro, derivative) = if self.p > 1 {
            let p = self.p;
            (
                format!("Le point de paramètre {label} est singulier."),
                tex::frac(format!("{D}^{p}{om}"), format!("{D}t^{p}")),
            )
        } else {
            (
                format!("Étudions le point de paramètre {label}."),
                tex::frac(format!("{D} {om}"), format!("{D}t")),
            )
        };
        lines.push(intro);
        lines.push(format!(
            "On trouve ${derivative}({label})={direction}\\ne {zero}$"
        ));

        let q = self.q;
        lines.push(format!(
            "De plus, ${}({label})$ ne lui est pas colinéaire.",
            tex::frac(format!("{D}^{q}{om}"), format!("{D}t^{q}"))
        ));
        lines.push(format!("Au paramètre {label}, {}", self.kind));
        lines.push(format!("La tangente est dirigée par ${direction}$"));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;

    #[test]
    fn kinds_from_parities() {
        assert_eq!(PointKind::from_orders(1, 2), PointKind::Ordinary);
        assert_eq!(PointKind::from_orders(1, 3), PointKind::Inflection);
        assert_eq!(PointKind::from_orders(2, 3), PointKind::FirstKindCusp);
        assert_eq!(PointKind::from_orders(2, 4), PointKind::SecondKindCusp);
    }

    #[test]
    fn kind_description() {
        assert_eq!(
            PointKind::FirstKindCusp.to_string(),
            "p est pair et q est impair. Il s'agit d'un point de rebroussement de 1ère espèce."
        );
    }

    #[test]
    fn singular_narration() {
        let tangent = TangentVector::new(0.0, Vector2::new(-3.0, 0.0), 1.0 / 15.0);
        let point = SingularPoint::new("0", tangent, 2, 3);
        let lines = point.narration();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Le point de paramètre 0 est singulier.");
        assert!(lines[1].contains("^2"));
        assert!(lines[1].contains("\\begin{pmatrix}-3\\\\0\\end{pmatrix}"));
        assert!(lines[2].contains("^3"));
        assert!(lines[3].ends_with("de rebroussement de 1ère espèce."));
    }

    #[test]
    fn regular_narration_uses_first_derivative() {
        let tangent = TangentVector::new(1.0, Vector2::new(1.0, 1.0), 1.0);
        let lines = SingularPoint::new("1", tangent, 1, 3).narration();
        assert_eq!(lines[0], "Étudions le point de paramètre 1.");
        assert!(!lines[1].contains("^1"));
    }
}
