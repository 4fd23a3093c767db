//! A Lissajous figure `t -> (cos t, sin 2t)`, introduced by placing a few
//! points by hand.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::sync::Arc;

use crate::error::Result;
use crate::geometry::{FnParametrization, ParamRange};
use crate::math::Vector2;
use crate::scene::{Color, Scene, Text, DOWN, RIGHT, TEXT_RIGHT, UP};
use crate::sequencer::{CurveDefinition, Hooks, LegendOffsets};
use crate::study::{SymmetryRule, TangentVector};

use super::{announce_parametrization, announce_period, stack};

fn x(t: f64) -> f64 {
    t.cos()
}

fn y(t: f64) -> f64 {
    (2.0 * t).sin()
}

/// # Errors
///
/// Never fails in practice; the builder validates the constants.
pub fn definition() -> Result<CurveDefinition> {
    let below_left = LegendOffsets::default();
    let above_right = LegendOffsets {
        x: UP / 3.0,
        y: RIGHT / 3.0,
        m: DOWN / 2.0,
    };
    let caption = |body: &str, dx: f64| Text::plain(body).at(UP * 3.2 + RIGHT * dx);

    let ox = SymmetryRule::new(
        |t| -t,
        |m: Vector2| Vector2::new(m.x, -m.y),
        "-t",
        ParamRange::new(0.0, PI)?,
    )
    .with_samples(0.2, 1.0)
    .with_texts(
        "On a $M(-t) = \\begin{pmatrix}x(t) \\\\ -y(t) \\end{pmatrix}$",
        "M(-t) est le symétrique de M(t) par rapport à (Ox)",
    )
    .with_intervals("$[-\\pi, \\pi]$", "$[0, \\pi]$", "$[-\\pi, 0]$")
    .with_color(Color::BLUE_B);

    let origin = SymmetryRule::new(
        |t| PI - t,
        |m: Vector2| -m,
        "$\\pi-t$",
        ParamRange::new(0.0, FRAC_PI_2)?,
    )
    .with_samples(0.3, 1.2)
    .with_texts(
        "On a $M(\\pi-t) = \\begin{pmatrix}-x(t) \\\\ -y(t) \\end{pmatrix}$",
        "$M(\\pi-t)$ est le symétrique de M(t) par rapport à O",
    )
    .with_intervals(
        "$[0, \\pi]$",
        "$[0, \\frac{\\pi}{2}]$",
        "$[\\frac{\\pi}{2}, \\pi]$",
    )
    .with_color(Color::GREEN_B);

    CurveDefinition::builder("lissajous", FnParametrization::new(x, y))
        .sample_params(&[0.0, 1.0, 2.0])
        .legends(vec![below_left, below_left, above_right])
        .captions(vec![
            caption("Plaçons M(0)", 3.0),
            caption("puis M(1)", 2.0),
            caption("et M(2)", 2.0),
        ])
        .symmetry(ox)
        .symmetry(origin)
        .regular_point(
            "0",
            TangentVector::new(0.0, Vector2::new(0.0, 2.0), 1.0 / 5.0),
        )
        .regular_point(
            "$\\frac{\\pi}{4}$",
            TangentVector::new(FRAC_PI_4, Vector2::new(-1.0, 0.0), 2.0 / 5.0),
        )
        .regular_point(
            "$\\frac{\\pi}{2}$",
            TangentVector::new(
                FRAC_PI_2,
                Vector2::new(-1.0, -2.0),
                2.0 / 5.0 / 5.0_f64.sqrt(),
            ),
        )
        .hooks(Hooks {
            intro_extra: Some(Arc::new(intro)),
            announce_curve: Some(Arc::new(announce)),
            variations: Some(Arc::new(variations)),
            ..Hooks::default()
        })
        .build()
}

fn intro(scene: &mut Scene<'_>, _: &CurveDefinition) -> Result<()> {
    scene.wait(1.0)?;
    let reminder = scene.spawn(Text::paragraph(&[
        "Rappelons tout d'abord l'interprétation",
        "graphique des fonctions coordonnées.",
        "On note M(t) le point de paramètre t.",
    ]))?;
    scene.show_texts(&[reminder], true)?;
    scene.wait(4.0)?;
    scene.clear_texts()
}

fn announce(scene: &mut Scene<'_>, _: &CurveDefinition) -> Result<()> {
    let formula = announce_parametrization(scene, "\\cos(t)", "\\sin(2t)")?;
    scene.wait(1.0)?;
    announce_period(scene, formula)
}

fn variations(scene: &mut Scene<'_>, _: &CurveDefinition) -> Result<()> {
    let ids = stack(
        scene,
        vec![
            Text::tex("$x$ est décroissante sur $[0, \\frac{\\pi}{2}]$.")
                .at(TEXT_RIGHT)
                .scale(0.7),
            Text::tex("$y$ est croissante sur $[0, \\frac{\\pi}{4}]$,").scale(0.7),
            Text::tex("puis décroissante sur $[\\frac{\\pi}{4}, \\frac{\\pi}{2}]$").scale(0.7),
        ],
    )?;
    scene.show_texts(&ids[..1], true)?;
    scene.wait(1.0)?;
    scene.show_texts(&ids[1..], false)?;
    scene.wait(1.5)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::scene::LEFT;

    #[test]
    fn three_captioned_samples() {
        let def = definition().unwrap();
        assert_eq!(def.samples().len(), 3);
        assert!(def.samples().iter().all(|s| s.caption.is_some()));
        assert_eq!(def.samples()[2].legend.m, DOWN / 2.0);
        assert_eq!(def.samples()[0].legend.y, LEFT / 3.0);
    }

    #[test]
    fn point_symmetry_maps_the_curve_onto_itself() {
        let def = definition().unwrap();
        let rule = &def.symmetries()[1];
        let curve = def.curve();
        for t in [0.2, 1.0, 2.5] {
            let image = curve.point(rule.reflect_parameter(t).unwrap());
            let expected = rule.reflect_point(&curve.point(t));
            assert!((image - expected).norm() < 1e-12);
        }
    }
}
