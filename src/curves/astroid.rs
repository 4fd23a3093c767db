//! The astroid `t -> (cos³ t, sin³ t)`: three nested symmetries and a cusp.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};
use std::sync::Arc;

use crate::error::Result;
use crate::geometry::{FnParametrization, ParamRange};
use crate::math::Vector2;
use crate::scene::{Color, Scene, Text, LEFT, TEXT_RIGHT};
use crate::sequencer::{CurveDefinition, Hooks};
use crate::study::{SingularPoint, SymmetryRule, TangentVector};
use crate::tex::{self, Direction};

use super::{announce_parametrization, announce_period, stack};

const PI_2: &str = "\\frac{\\pi}{2}";
const PI_4: &str = "\\frac{\\pi}{4}";

fn x(t: f64) -> f64 {
    t.cos().powi(3)
}

fn y(t: f64) -> f64 {
    t.sin().powi(3)
}

fn column(cells: [&str; 2]) -> String {
    tex::vector(&cells, Direction::Column)
}

/// # Errors
///
/// Never fails in practice; the builder validates the constants.
pub fn definition() -> Result<CurveDefinition> {
    let ox = SymmetryRule::new(
        |t| -t,
        |m: Vector2| Vector2::new(m.x, -m.y),
        "-t",
        ParamRange::new(0.0, PI)?,
    )
    .with_samples(1.0, 2.0)
    .with_texts(
        &format!("On a $M(-t) = {}$", column(["x(t)", "-y(t)"])),
        "M(-t) est le symétrique de M(t) par rapport à (Ox)",
    )
    .with_intervals("$[-\\pi, \\pi]$", "$[0, \\pi]$", "$[-\\pi, 0]$")
    .with_color(Color::BLUE);

    let oy = SymmetryRule::new(
        |t| PI - t,
        |m: Vector2| Vector2::new(-m.x, m.y),
        "$\\pi-t$",
        ParamRange::new(0.0, FRAC_PI_2)?,
    )
    .with_samples(0.0, 0.8)
    .with_texts(
        &format!("On a $M(\\pi-t) = {}$", column(["-x(t)", "y(t)"])),
        "",
    )
    .with_conclusion(
        Text::tex("$M(\\pi-t)$ est le symétrique de M(t)\\\\ par rapport à (Oy)")
            .scale(0.7)
            .at(TEXT_RIGHT + LEFT * 0.3),
    )
    .with_intervals(
        "$[0, \\pi]$",
        &format!("$[0, {PI_2}]$"),
        &format!("$[{PI_2}, \\pi]$"),
    )
    .with_color(Color::ORANGE);

    let diagonal = SymmetryRule::new(
        |t| FRAC_PI_2 - t,
        |m: Vector2| Vector2::new(m.y, m.x),
        format!("${PI_2}-t$"),
        ParamRange::new(0.0, FRAC_PI_4)?,
    )
    .with_samples(0.2, 0.6)
    .with_texts(
        &format!("On a $M({PI_2}-t) = {}$", column(["y(t)", "x(t)"])),
        &format!("$M({PI_2} - t)$ est le symétrique de M(t)\\\\ par rapport à $D : y = x$"),
    )
    .with_intervals(
        &format!("$[0, {PI_2}]$"),
        &format!("$[0, {PI_4}]$"),
        &format!("$[{PI_4}, {PI_2}]$"),
    )
    .with_color(Color::GREEN);

    CurveDefinition::builder("astroid", FnParametrization::new(x, y))
        .legend_interval(1.4)
        .symmetry(ox)
        .symmetry(oy)
        .symmetry(diagonal)
        .regular_point(
            format!("${PI_4}$"),
            TangentVector::new(FRAC_PI_4, Vector2::new(-1.0, 1.0), 1.0 / 5.0 / SQRT_2),
        )
        .singular_point(SingularPoint::new(
            "0",
            TangentVector::new(0.0, Vector2::new(-3.0, 0.0), 1.0 / 15.0),
            2,
            3,
        ))
        .hooks(Hooks {
            announce_curve: Some(Arc::new(announce)),
            variations: Some(Arc::new(variations)),
            ..Hooks::default()
        })
        .build()
}

fn announce(scene: &mut Scene<'_>, _: &CurveDefinition) -> Result<()> {
    let formula = announce_parametrization(scene, "\\cos^3(t)", "\\sin^3(t)")?;
    scene.wait(1.0)?;
    announce_period(scene, formula)
}

fn variations(scene: &mut Scene<'_>, _: &CurveDefinition) -> Result<()> {
    let ids = stack(
        scene,
        vec![
            Text::tex(format!("$x$ est décroissante sur $[0, {PI_4}]$."))
                .at(TEXT_RIGHT)
                .scale(0.7),
            Text::tex(format!("$y$ est croissante sur $[0, {PI_4}]$."))
                .scale(0.7),
        ],
    )?;
    scene.show_texts(&ids[..1], true)?;
    scene.wait(1.0)?;
    scene.show_texts(&ids[1..], false)?;
    scene.wait(1.5)
}
