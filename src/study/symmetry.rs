use std::fmt;
use std::sync::Arc;

use crate::error::{GeometryError, Result};
use crate::geometry::{ParamRange, Parametrization};
use crate::math::{Point2, Vector2};
use crate::scene::{Color, Text, TEXT_RIGHT};
use crate::tessellation::SamplingParams;

use super::{CurveSegment, TangentVector};

/// Parameter transform `t -> t'`.
pub type ParamMap = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Linear map sending `M(t)` (as a vector from the origin) to `M(t')`.
pub type PointMap = Arc<dyn Fn(Vector2) -> Vector2 + Send + Sync>;

/// The three intervals quoted while reducing the study interval, as LaTeX.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymmetryIntervals {
    /// The interval studied before the reduction.
    pub full: String,
    /// The half kept, described by `M(t)`.
    pub kept: String,
    /// The other half, described by the symmetric points.
    pub mirrored: String,
}

/// A symmetry of the curve: `M(t') = reflection(M(t))` with `t' = transform(t)`.
///
/// Besides the maps, a rule carries what the narration needs: the label of
/// the transformed parameter (`-t`, `$\pi-t$`), two sample parameters for
/// the moving-point animation, presentation and conclusion texts, the
/// reduction intervals, and the reduced range over which the curve is
/// actually computed before mirroring.
#[derive(Clone)]
pub struct SymmetryRule {
    transform: ParamMap,
    reflection: PointMap,
    label: String,
    samples: (f64, f64),
    presentation: Text,
    conclusion: Text,
    intervals: SymmetryIntervals,
    reduced_range: ParamRange,
    color: Color,
}

impl SymmetryRule {
    /// Creates a rule with empty texts, samples at the ends of
    /// `reduced_range`, and a white colour.
    pub fn new(
        transform: impl Fn(f64) -> f64 + Send + Sync + 'static,
        reflection: impl Fn(Vector2) -> Vector2 + Send + Sync + 'static,
        label: impl Into<String>,
        reduced_range: ParamRange,
    ) -> Self {
        Self {
            transform: Arc::new(transform),
            reflection: Arc::new(reflection),
            label: label.into(),
            samples: (reduced_range.t_min, reduced_range.t_max),
            presentation: Text::tex(""),
            conclusion: Text::tex(""),
            intervals: SymmetryIntervals::default(),
            reduced_range,
            color: Color::WHITE,
        }
    }

    /// Two parameters between which `M(t)` and its image are animated.
    #[must_use]
    pub fn with_samples(mut self, t1: f64, t2: f64) -> Self {
        self.samples = (t1, t2);
        self
    }

    /// Presentation (`On a M(-t) = ...`) and conclusion texts, shown in the
    /// right column at the usual scale.
    #[must_use]
    pub fn with_texts(mut self, presentation: &str, conclusion: &str) -> Self {
        self.presentation = Text::tex(presentation).scale(0.7).at(TEXT_RIGHT);
        self.conclusion = Text::tex(conclusion).scale(0.7).at(TEXT_RIGHT);
        self
    }

    /// Replaces the conclusion text, for custom placement.
    #[must_use]
    pub fn with_conclusion(mut self, conclusion: Text) -> Self {
        self.conclusion = conclusion;
        self
    }

    #[must_use]
    pub fn with_intervals(mut self, full: &str, kept: &str, mirrored: &str) -> Self {
        self.intervals = SymmetryIntervals {
            full: full.to_owned(),
            kept: kept.to_owned(),
            mirrored: mirrored.to_owned(),
        };
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn samples(&self) -> (f64, f64) {
        self.samples
    }

    #[must_use]
    pub fn presentation(&self) -> &Text {
        &self.presentation
    }

    #[must_use]
    pub fn conclusion(&self) -> &Text {
        &self.conclusion
    }

    #[must_use]
    pub fn intervals(&self) -> &SymmetryIntervals {
        &self.intervals
    }

    #[must_use]
    pub fn reduced_range(&self) -> ParamRange {
        self.reduced_range
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Parameter of the symmetric point of `M(t)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` or its image is not a finite number.
    pub fn reflect_parameter(&self, t: f64) -> Result<f64> {
        if !t.is_finite() {
            return Err(GeometryError::NonFiniteParameter { value: t }.into());
        }
        let image = (self.transform)(t);
        if !image.is_finite() {
            return Err(GeometryError::NonFiniteParameter { value: image }.into());
        }
        Ok(image)
    }

    /// Symmetric of a curve point.
    #[must_use]
    pub fn reflect_point(&self, p: &Point2) -> Point2 {
        Point2::from((self.reflection)(p.coords))
    }

    /// Image of a direction vector.
    #[must_use]
    pub fn reflect_vector(&self, v: Vector2) -> Vector2 {
        (self.reflection)(v)
    }

    /// Tangent at the symmetric point: transformed parameter, reflected
    /// drawn vector, unit scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is not finite.
    pub fn reflect_tangent(&self, tangent: &TangentVector) -> Result<TangentVector> {
        let param = self.reflect_parameter(tangent.param())?;
        Ok(TangentVector::new(
            param,
            self.reflect_vector(tangent.drawn()),
            1.0,
        ))
    }

    /// Samples the mirror image of the reduced range, `curve(transform(t))`
    /// for `t` in the reduced range, in the rule's colour.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform produces a non-finite parameter.
    pub fn extend_segment(
        &self,
        curve: &dyn Parametrization,
        sampling: SamplingParams,
        discontinuities: &[f64],
    ) -> Result<CurveSegment> {
        let transform = |t: f64| (self.transform)(t);
        CurveSegment::sample(
            curve,
            self.reduced_range,
            Some(&transform),
            sampling,
            discontinuities,
            self.color,
        )
    }

    /// Texts reducing the study interval, in two groups shown one after the
    /// other: "when t runs over the kept half ..." then "... the image runs
    /// over the other half".
    #[must_use]
    pub fn reduction_lines(&self) -> (Vec<String>, Vec<String>) {
        let SymmetryIntervals { kept, mirrored, .. } = &self.intervals;
        (
            vec![
                format!("Lorsque t parcourt {kept}"),
                "M(t) décrit une partie de la courbe.".to_owned(),
            ],
            vec![
                format!("{} parcourt alors {mirrored}", self.label),
                format!("et M({}) décrit l'autre partie", self.label),
                "de la courbe.".to_owned(),
            ],
        )
    }
}

impl fmt::Debug for SymmetryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetryRule")
            .field("label", &self.label)
            .field("samples", &self.samples)
            .field("intervals", &self.intervals)
            .field("reduced_range", &self.reduced_range)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
