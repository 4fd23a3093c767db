//! The unit circle, the smallest possible study: no symmetry, no point of
//! interest, one trace range.

use std::f64::consts::PI;
use std::sync::Arc;

use crate::error::Result;
use crate::geometry::FnParametrization;
use crate::scene::{Scene, Text, TEXT_RIGHT};
use crate::sequencer::{CurveDefinition, Hooks};

/// # Errors
///
/// Never fails in practice; the builder validates the constants.
pub fn definition() -> Result<CurveDefinition> {
    CurveDefinition::builder("unit-circle", FnParametrization::new(f64::cos, f64::sin))
        .steps(None, None)
        .trace_range(-PI, PI)
        .hooks(Hooks {
            announce_curve: Some(Arc::new(announce)),
            ..Hooks::default()
        })
        .build()
}

fn announce(scene: &mut Scene<'_>, _: &CurveDefinition) -> Result<()> {
    let first = scene.spawn(Text::tex("On étudie la courbe").at(TEXT_RIGHT))?;
    scene.show_texts(&[first], true)?;
    let second = scene.spawn(Text::tex("$x(t) = \\cos(t),\\ y(t) = \\sin(t)$").below(first))?;
    scene.show_texts(&[second], false)?;
    scene.wait(1.0)?;
    let conclusion = scene.spawn(Text::tex("On l'étudie sur $[-\\pi, \\pi]$.").at(TEXT_RIGHT))?;
    scene.show_texts(&[conclusion], true)
}
