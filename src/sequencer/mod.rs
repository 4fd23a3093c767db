//! Turns a [`CurveDefinition`] into the fixed pedagogical script.

mod definition;
mod settings;
mod stages;

pub use definition::{
    AxesConfig, CurveBuilder, CurveDefinition, Hook, Hooks, LegendOffsets, RegularPoint,
    SamplePoint, TraceRange,
};
pub use settings::SequencerSettings;

use tracing::info;

use crate::error::Result;
use crate::scene::{Renderer, Scene};

/// The parts of a curve study, in the order they are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Intro,
    SamplePoints,
    CurveAnnouncement,
    Symmetries,
    VariationTable,
    RegularPoints,
    SingularPoints,
    Asymptotes,
    VariationsRecap,
    FullTrace,
}

impl Stage {
    pub const ALL: [Self; 10] = [
        Self::Intro,
        Self::SamplePoints,
        Self::CurveAnnouncement,
        Self::Symmetries,
        Self::VariationTable,
        Self::RegularPoints,
        Self::SingularPoints,
        Self::Asymptotes,
        Self::VariationsRecap,
        Self::FullTrace,
    ];

    /// Name of the video section opened by the stage. The variation table
    /// closes the symmetry section and opens none.
    #[must_use]
    pub fn section(self) -> Option<&'static str> {
        let name = match self {
            Self::Intro => "Intro",
            Self::SamplePoints => "Quelques points",
            Self::CurveAnnouncement => "Annonce courbe",
            Self::Symmetries => "Symetries",
            Self::VariationTable => return None,
            Self::RegularPoints => "Points reguliers",
            Self::SingularPoints => "Points singuliers",
            Self::Asymptotes => "Asymptotes",
            Self::VariationsRecap => "(Rappels) variations",
            Self::FullTrace => "Tracé",
        };
        Some(name)
    }
}

/// Plays curve studies on a renderer.
///
/// # Example
///
/// ```
/// use curve_study::curves;
/// use curve_study::scene::Script;
/// use curve_study::sequencer::{CurveSequencer, SequencerSettings};
///
/// let definition = curves::unit_circle::definition().unwrap();
/// let mut script = Script::new();
/// CurveSequencer::new(SequencerSettings::default())
///     .run(&definition, &mut script)
///     .unwrap();
/// assert_eq!(script.drawn_curves().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurveSequencer {
    settings: SequencerSettings,
}

impl CurveSequencer {
    #[must_use]
    pub fn new(settings: SequencerSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &SequencerSettings {
        &self.settings
    }

    /// Plays the whole study of `definition`, or only the final trace when
    /// the settings skip the study.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the renderer, a hook, or the
    /// geometry.
    pub fn run(&self, definition: &CurveDefinition, renderer: &mut dyn Renderer) -> Result<()> {
        let interval = definition
            .legend_interval()
            .unwrap_or(self.settings.legend_interval);
        let mut scene = Scene::new(renderer, self.settings.clone()).with_legend_interval(interval);
        info!(
            curve = definition.name(),
            skip_study = self.settings.skip_study,
            "starting curve study"
        );

        if self.settings.skip_study {
            scene.place_axes(definition.axes().to_object())?;
            stages::full_trace(&mut scene, definition)?;
        } else {
            for stage in Stage::ALL {
                stages::play(stage, &mut scene, definition)?;
            }
        }
        run_hook(&mut scene, definition, definition.hooks().epilogue.as_ref())?;

        info!(curve = definition.name(), "curve study done");
        Ok(())
    }
}

fn run_hook(
    scene: &mut Scene<'_>,
    definition: &CurveDefinition,
    hook: Option<&Hook>,
) -> Result<()> {
    match hook {
        Some(hook) => hook(scene, definition),
        None => Ok(()),
    }
}
