use std::fmt;
use std::sync::Arc;

use crate::error::{DefinitionError, GeometryError, Result};
use crate::geometry::{ParamRange, Parametrization, ViewWindow};
use crate::math::Vector2;
use crate::scene::{Color, Scene, SceneObject, Text, DOWN, LEFT, UP};
use crate::study::{InfiniteBranch, SingularPoint, SymmetryRule, TangentVector};

/// Per-curve step plugged into the fixed sequence.
pub type Hook = Arc<dyn Fn(&mut Scene<'_>, &CurveDefinition) -> Result<()> + Send + Sync>;

/// Axes drawn for a curve: data window, tick steps and on-screen lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesConfig {
    pub window: ViewWindow,
    pub x_step: Option<f64>,
    pub y_step: Option<f64>,
    pub x_length: f64,
    pub y_length: f64,
}

impl AxesConfig {
    #[must_use]
    pub fn to_object(&self) -> SceneObject {
        SceneObject::Axes {
            window: self.window,
            x_step: self.x_step,
            y_step: self.y_step,
            x_length: self.x_length,
            y_length: self.y_length,
        }
    }
}

/// Where the `x(t)`, `y(t)` and `M(t)` labels sit around their dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendOffsets {
    pub x: Vector2,
    pub y: Vector2,
    pub m: Vector2,
}

impl Default for LegendOffsets {
    fn default() -> Self {
        Self {
            x: DOWN / 3.0,
            y: LEFT / 3.0,
            m: UP / 2.0,
        }
    }
}

/// A point placed in the introduction to show how `x(t)` and `y(t)` give
/// `M(t)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePoint {
    pub param: f64,
    pub legend: LegendOffsets,
    pub caption: Option<Text>,
}

/// A regular point whose tangent is shown, with the label of its parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPoint {
    pub label: String,
    pub tangent: TangentVector,
}

/// A parameter range drawn as is when the curve has no symmetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRange {
    pub range: ParamRange,
    pub color: Option<Color>,
}

/// Optional steps a curve adds to the fixed sequence. Missing hooks do
/// nothing.
#[derive(Clone, Default)]
pub struct Hooks {
    /// After the generic introduction.
    pub intro_extra: Option<Hook>,
    /// Presents the curve next to the freshly placed axes.
    pub announce_curve: Option<Hook>,
    /// Its own stage right after the symmetries, usually full screen.
    pub variation_table: Option<Hook>,
    /// Before the asymptotes are listed and drawn.
    pub asymptote_study: Option<Hook>,
    /// Recap in the right column just before the final trace.
    pub variations: Option<Hook>,
    /// After the final trace.
    pub epilogue: Option<Hook>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("intro_extra", &self.intro_extra.is_some())
            .field("announce_curve", &self.announce_curve.is_some())
            .field("variation_table", &self.variation_table.is_some())
            .field("asymptote_study", &self.asymptote_study.is_some())
            .field("variations", &self.variations.is_some())
            .field("epilogue", &self.epilogue.is_some())
            .finish()
    }
}

/// Everything the sequencer needs to know about one curve. Read-only once
/// built.
pub struct CurveDefinition {
    name: String,
    curve: Arc<dyn Parametrization>,
    axes: AxesConfig,
    samples: Vec<SamplePoint>,
    symmetries: Vec<SymmetryRule>,
    regular_points: Vec<RegularPoint>,
    singular_points: Vec<SingularPoint>,
    branches: Vec<InfiniteBranch>,
    trace_ranges: Vec<TraceRange>,
    discontinuities: Vec<f64>,
    dt: f64,
    legend_interval: Option<f64>,
    hooks: Hooks,
}

impl CurveDefinition {
    #[must_use]
    pub fn builder(name: impl Into<String>, curve: impl Parametrization + 'static) -> CurveBuilder {
        CurveBuilder::new(name, Arc::new(curve))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn curve(&self) -> &dyn Parametrization {
        self.curve.as_ref()
    }

    #[must_use]
    pub fn axes(&self) -> &AxesConfig {
        &self.axes
    }

    #[must_use]
    pub fn window(&self) -> &ViewWindow {
        &self.axes.window
    }

    #[must_use]
    pub fn samples(&self) -> &[SamplePoint] {
        &self.samples
    }

    #[must_use]
    pub fn symmetries(&self) -> &[SymmetryRule] {
        &self.symmetries
    }

    #[must_use]
    pub fn regular_points(&self) -> &[RegularPoint] {
        &self.regular_points
    }

    #[must_use]
    pub fn singular_points(&self) -> &[SingularPoint] {
        &self.singular_points
    }

    #[must_use]
    pub fn branches(&self) -> &[InfiniteBranch] {
        &self.branches
    }

    #[must_use]
    pub fn trace_ranges(&self) -> &[TraceRange] {
        &self.trace_ranges
    }

    #[must_use]
    pub fn discontinuities(&self) -> &[f64] {
        &self.discontinuities
    }

    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Reading time specific to this curve, if any.
    #[must_use]
    pub fn legend_interval(&self) -> Option<f64> {
        self.legend_interval
    }

    #[must_use]
    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }
}

impl fmt::Debug for CurveDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveDefinition")
            .field("name", &self.name)
            .field("axes", &self.axes)
            .field("samples", &self.samples)
            .field("symmetries", &self.symmetries)
            .field("regular_points", &self.regular_points)
            .field("singular_points", &self.singular_points)
            .field("branches", &self.branches)
            .field("trace_ranges", &self.trace_ranges)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

/// Collects a curve definition. Nothing is checked until
/// [`CurveBuilder::build`].
pub struct CurveBuilder {
    name: String,
    curve: Arc<dyn Parametrization>,
    window: (f64, f64, f64, f64),
    steps: (Option<f64>, Option<f64>),
    lengths: (f64, f64),
    sample_params: Vec<f64>,
    legends: Vec<LegendOffsets>,
    default_legends: bool,
    captions: Vec<Text>,
    uncaptioned: bool,
    symmetries: Vec<SymmetryRule>,
    regular_points: Vec<RegularPoint>,
    singular_points: Vec<SingularPoint>,
    branches: Vec<InfiniteBranch>,
    trace_ranges: Vec<(f64, f64, Option<Color>)>,
    discontinuities: Vec<f64>,
    dt: f64,
    legend_interval: Option<f64>,
    hooks: Hooks,
}

impl CurveBuilder {
    fn new(name: impl Into<String>, curve: Arc<dyn Parametrization>) -> Self {
        Self {
            name: name.into(),
            curve,
            window: (-1.2, 1.2, -1.2, 1.2),
            steps: (Some(1.0), Some(1.0)),
            lengths: (6.0, 6.0),
            sample_params: Vec::new(),
            legends: Vec::new(),
            default_legends: false,
            captions: Vec::new(),
            uncaptioned: false,
            symmetries: Vec::new(),
            regular_points: Vec::new(),
            singular_points: Vec::new(),
            branches: Vec::new(),
            trace_ranges: Vec::new(),
            discontinuities: Vec::new(),
            dt: 0.1,
            legend_interval: None,
            hooks: Hooks::default(),
        }
    }

    #[must_use]
    pub fn window(mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        self.window = (min_x, max_x, min_y, max_y);
        self
    }

    /// Tick steps; `None` leaves the axis without ticks.
    #[must_use]
    pub fn steps(mut self, x_step: Option<f64>, y_step: Option<f64>) -> Self {
        self.steps = (x_step, y_step);
        self
    }

    /// On-screen axes lengths.
    #[must_use]
    pub fn lengths(mut self, x_length: f64, y_length: f64) -> Self {
        self.lengths = (x_length, y_length);
        self
    }

    #[must_use]
    pub fn sample_params(mut self, params: &[f64]) -> Self {
        self.sample_params = params.to_vec();
        self
    }

    /// Label offsets, one per sample parameter.
    #[must_use]
    pub fn legends(mut self, legends: Vec<LegendOffsets>) -> Self {
        self.legends = legends;
        self.default_legends = false;
        self
    }

    /// Places every sample label at [`LegendOffsets::default`].
    #[must_use]
    pub fn default_legends(mut self) -> Self {
        self.legends.clear();
        self.default_legends = true;
        self
    }

    /// Texts shown before each sample point, one per sample parameter.
    #[must_use]
    pub fn captions(mut self, captions: Vec<Text>) -> Self {
        self.captions = captions;
        self.uncaptioned = false;
        self
    }

    /// Places the sample points without any text before them.
    #[must_use]
    pub fn uncaptioned(mut self) -> Self {
        self.captions.clear();
        self.uncaptioned = true;
        self
    }

    /// Adds a symmetry. Symmetries are presented in declaration order and
    /// drawn in reverse order.
    #[must_use]
    pub fn symmetry(mut self, rule: SymmetryRule) -> Self {
        self.symmetries.push(rule);
        self
    }

    #[must_use]
    pub fn regular_point(mut self, label: impl Into<String>, tangent: TangentVector) -> Self {
        self.regular_points.push(RegularPoint {
            label: label.into(),
            tangent,
        });
        self
    }

    #[must_use]
    pub fn singular_point(mut self, point: SingularPoint) -> Self {
        self.singular_points.push(point);
        self
    }

    #[must_use]
    pub fn branch(mut self, branch: impl Into<InfiniteBranch>) -> Self {
        self.branches.push(branch.into());
        self
    }

    #[must_use]
    pub fn trace_range(mut self, t_min: f64, t_max: f64) -> Self {
        self.trace_ranges.push((t_min, t_max, None));
        self
    }

    #[must_use]
    pub fn trace_range_colored(mut self, t_min: f64, t_max: f64, color: Color) -> Self {
        self.trace_ranges.push((t_min, t_max, Some(color)));
        self
    }

    /// Parameters where the curve jumps, avoided by `dt` on each side.
    #[must_use]
    pub fn discontinuities(mut self, params: &[f64], dt: f64) -> Self {
        self.discontinuities = params.to_vec();
        self.dt = dt;
        self
    }

    #[must_use]
    pub fn legend_interval(mut self, seconds: f64) -> Self {
        self.legend_interval = Some(seconds);
        self
    }

    #[must_use]
    pub fn hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Validates and freezes the definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the window or a trace range is invalid, a
    /// sample, tangent or discontinuity parameter is not finite, `dt` or the
    /// legend interval is not a positive number, the legends or captions do
    /// not match the sample parameters, or a curve without symmetry has
    /// nothing to trace.
    pub fn build(mut self) -> Result<CurveDefinition> {
        let (min_x, max_x, min_y, max_y) = self.window;
        let window = ViewWindow::new(min_x, max_x, min_y, max_y)?;

        let params = self
            .sample_params
            .iter()
            .chain(&self.discontinuities)
            .copied()
            .chain(self.regular_points.iter().map(|p| p.tangent.param()))
            .chain(self.singular_points.iter().map(|p| p.tangent().param()));
        for value in params {
            if !value.is_finite() {
                return Err(GeometryError::NonFiniteParameter { value }.into());
            }
        }
        check_positive("dt", self.dt)?;
        if let Some(seconds) = self.legend_interval {
            check_positive("legend interval", seconds)?;
        }

        let expected = self.sample_params.len();
        if self.default_legends {
            self.legends = vec![LegendOffsets::default(); expected];
        }
        check_len("legends", expected, self.legends.len())?;
        if !self.uncaptioned {
            check_len("captions", expected, self.captions.len())?;
        }

        if self.symmetries.is_empty() && self.trace_ranges.is_empty() {
            return Err(DefinitionError::MissingTraceRange.into());
        }
        let trace_ranges = self
            .trace_ranges
            .into_iter()
            .map(|(t_min, t_max, color)| {
                Ok(TraceRange {
                    range: ParamRange::new(t_min, t_max)?,
                    color,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut captions = self.captions.into_iter();
        let samples = self
            .sample_params
            .into_iter()
            .zip(self.legends)
            .map(|(param, legend)| SamplePoint {
                param,
                legend,
                caption: captions.next(),
            })
            .collect();

        Ok(CurveDefinition {
            name: self.name,
            curve: self.curve,
            axes: AxesConfig {
                window,
                x_step: self.steps.0,
                y_step: self.steps.1,
                x_length: self.lengths.0,
                y_length: self.lengths.1,
            },
            samples,
            symmetries: self.symmetries,
            regular_points: self.regular_points,
            singular_points: self.singular_points,
            branches: self.branches,
            trace_ranges,
            discontinuities: self.discontinuities,
            dt: self.dt,
            legend_interval: self.legend_interval,
            hooks: self.hooks,
        })
    }
}

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<()> {
    if found == expected {
        Ok(())
    } else {
        Err(DefinitionError::LengthMismatch {
            what,
            expected,
            found,
        }
        .into())
    }
}

fn check_positive(what: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DefinitionError::NotPositive { what, value }.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::error::CurveStudyError;
    use crate::geometry::FnParametrization;

    fn circle() -> CurveBuilder {
        CurveDefinition::builder("cercle", FnParametrization::new(f64::cos, f64::sin))
    }

    #[test]
    fn defaults() {
        let def = circle().trace_range(-PI, PI).build().unwrap();
        assert_eq!(def.name(), "cercle");
        assert!((def.window().max_x() - 1.2).abs() < 1e-12);
        assert_eq!(def.axes().x_step, Some(1.0));
        assert!((def.dt() - 0.1).abs() < 1e-12);
        assert!(def.legend_interval().is_none());
        assert_eq!(def.trace_ranges().len(), 1);
    }

    #[test]
    fn missing_trace_range_is_rejected() {
        let err = circle().build().unwrap_err();
        assert!(matches!(
            err,
            CurveStudyError::Definition(DefinitionError::MissingTraceRange)
        ));
    }

    #[test]
    fn caption_count_must_match_samples() {
        let err = circle()
            .trace_range(-PI, PI)
            .sample_params(&[0.0, 1.0, 2.0])
            .default_legends()
            .captions(vec![Text::plain("Plaçons M(0)")])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CurveStudyError::Definition(DefinitionError::LengthMismatch {
                what: "captions",
                expected: 3,
                found: 1,
            })
        ));
    }

    #[test]
    fn samples_need_legends_unless_defaults_are_asked_for() {
        let err = circle()
            .trace_range(-PI, PI)
            .sample_params(&[0.0, 1.0])
            .uncaptioned()
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CurveStudyError::Definition(DefinitionError::LengthMismatch {
                what: "legends",
                expected: 2,
                found: 0,
            })
        ));

        let def = circle()
            .trace_range(-PI, PI)
            .sample_params(&[0.0, 1.0])
            .default_legends()
            .uncaptioned()
            .build()
            .unwrap();
        assert_eq!(def.samples().len(), 2);
        assert_eq!(def.samples()[1].legend, LegendOffsets::default());
        assert!(def.samples()[0].caption.is_none());
    }

    #[test]
    fn empty_captions_do_not_match_samples() {
        let err = circle()
            .trace_range(-PI, PI)
            .sample_params(&[0.0, 1.0])
            .default_legends()
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CurveStudyError::Definition(DefinitionError::LengthMismatch {
                what: "captions",
                expected: 2,
                found: 0,
            })
        ));
    }

    #[test]
    fn non_finite_tangent_params_are_rejected() {
        let tangent = TangentVector::new(f64::NAN, Vector2::new(1.0, 0.0), 1.0);
        let err = circle()
            .trace_range(-PI, PI)
            .regular_point("nan", tangent)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CurveStudyError::Geometry(GeometryError::NonFiniteParameter { value }) if value.is_nan()
        ));

        let err = circle()
            .trace_range(-PI, PI)
            .discontinuities(&[f64::INFINITY], 0.1)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CurveStudyError::Geometry(GeometryError::NonFiniteParameter { .. })
        ));
    }

    #[test]
    fn legend_interval_and_dt_must_be_positive() {
        let err = circle()
            .trace_range(-PI, PI)
            .legend_interval(-2.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CurveStudyError::Definition(DefinitionError::NotPositive {
                what: "legend interval",
                ..
            })
        ));
        for dt in [0.0, -0.1, f64::NAN] {
            let err = circle()
                .trace_range(-PI, PI)
                .discontinuities(&[0.0], dt)
                .build()
                .unwrap_err();
            assert!(matches!(
                err,
                CurveStudyError::Definition(DefinitionError::NotPositive { what: "dt", .. })
            ));
        }
    }

    #[test]
    fn invalid_window_and_range_are_rejected() {
        assert!(circle().trace_range(-PI, PI).window(1.0, -1.0, 0.0, 1.0).build().is_err());
        assert!(circle().trace_range(1.0, 1.0).build().is_err());
        assert!(circle()
            .trace_range(-PI, PI)
            .sample_params(&[f64::NAN])
            .build()
            .is_err());
    }
}
