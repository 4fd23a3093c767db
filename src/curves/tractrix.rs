//! The tractrix `t -> (t - th t, 1 / ch t)`, followed by its kinematic
//! interpretation: a man pulled on a leash by a dog chasing a squirrel.

use std::sync::Arc;

use crate::error::Result;
use crate::geometry::{FnParametrization, ParamRange};
use crate::math::{Point2, Vector2};
use crate::scene::{Animation, Color, ObjectId, Pivot, Scene, SceneObject, Text, DOWN, RIGHT, UP};
use crate::sequencer::{CurveDefinition, Hooks};
use crate::study::{AsymptoteDescriptor, SingularPoint, SymmetryRule, TangentVector};
use crate::tex;

use super::{announce_parametrization, read_asset, stack};

const VARIATIONS_FILE: &str = "variations_tractrix.tex";

/// Samples per moving point path in the epilogue.
const PATH_SAMPLES: u32 = 60;

fn x(t: f64) -> f64 {
    t - t.tanh()
}

fn y(t: f64) -> f64 {
    1.0 / t.cosh()
}

/// # Errors
///
/// Never fails in practice; the builder validates the constants.
pub fn definition() -> Result<CurveDefinition> {
    let oy = SymmetryRule::new(
        |t| -t,
        |m: Vector2| Vector2::new(-m.x, m.y),
        "-t",
        ParamRange::new(0.0, 4.0)?,
    )
    .with_samples(2.0, 3.0)
    .with_texts(
        &format!(
            "On a $M(-t) = {}$",
            tex::vector(&["-x(t)", "y(t)"], tex::Direction::Column)
        ),
        "M(-t) est le symétrique de M(t) par rapport à (Oy)",
    )
    .with_intervals("$\\mathbb{R}$", "$[0, +\\infty[$", "$]-\\infty, 0]$")
    .with_color(Color::BLUE);

    CurveDefinition::builder("tractrix", FnParametrization::new(x, y))
        .window(-3.9, 3.9, -0.2, 1.8)
        .steps(None, None)
        .lengths(6.0, 2.0)
        .legend_interval(1.4)
        .symmetry(oy)
        .singular_point(SingularPoint::new(
            "0",
            TangentVector::new(0.0, Vector2::new(0.0, -1.0), 0.5),
            2,
            3,
        ))
        .branch(AsymptoteDescriptor::horizontal(0))
        .hooks(Hooks {
            intro_extra: Some(Arc::new(intro)),
            announce_curve: Some(Arc::new(announce)),
            variation_table: Some(Arc::new(variation_table)),
            asymptote_study: Some(Arc::new(asymptote_study)),
            epilogue: Some(Arc::new(epilogue)),
            ..Hooks::default()
        })
        .build()
}

fn th() -> String {
    tex::operator("th")
}

fn ch() -> String {
    tex::operator("ch")
}

fn sh() -> String {
    tex::operator("sh")
}

fn intro(scene: &mut Scene<'_>, _: &CurveDefinition) -> Result<()> {
    scene.wait(0.5)?;
    let title = scene.spawn(Text::plain("La tractrice"))?;
    scene.show_texts(&[title], true)?;
    scene.wait(1.5)
}

fn announce(scene: &mut Scene<'_>, _: &CurveDefinition) -> Result<()> {
    announce_parametrization(
        scene,
        &format!("t - {}(t)", th()),
        &tex::frac(1, format!("{}(t)", ch())),
    )?;
    scene.wait(1.5)
}

fn variation_table(scene: &mut Scene<'_>, _: &CurveDefinition) -> Result<()> {
    scene.announce_episode("Étude des variations", false)?;
    let (th, ch, sh) = (th(), ch(), sh());
    let equivalent = tex::command("underset", &[&"+\\infty", &"\\sim"]);
    let derivatives = tex::env(
        "cases",
        &format!(
            "x'(t) = {th}^2(t) \\\\ y'(t) = -{}",
            tex::frac(format!("{sh}(t)"), format!("{ch}^2(t)"))
        ),
    );

    let ids = stack(
        scene,
        vec![
            Text::tex("On trouve après dérivation : ").at(UP * 3.0),
            Text::tex(format!("${derivatives}$")),
            Text::tex(format!(
                "On utilise ${ch}(t){equivalent}{sh}(t){equivalent}{}$,",
                tex::frac("e^t", 2)
            )),
            Text::tex("et on obtient le tableau suivant"),
        ],
    )?;
    scene.show_texts(&ids[..2], true)?;
    scene.wait(1.2)?;
    scene.show_texts(&ids[2..], false)?;
    scene.wait(2.0)?;

    let body = read_asset(scene, VARIATIONS_FILE)?;
    let template = scene.settings().tex.extended(&["{variations}"]);
    let table = scene.spawn(Text::tex(body).scale(0.7).template(template))?;
    scene.show_texts(&[table], true)?;
    scene.wait(3.0)?;
    scene.play(vec![Animation::Scale {
        id: table,
        factor: 0.8,
        about: Pivot::OwnCentre,
    }])?;
    scene.play(vec![Animation::Shift {
        id: table,
        by: UP * 1.5,
    }])?;

    let summary = stack(
        scene,
        vec![
            Text::tex("On étudie 1 point singulier,").below(table).scale(0.8),
            Text::tex("et 1 branche infinie.").scale(0.8),
        ],
    )?;
    scene.show_texts(&summary[..1], false)?;
    scene.wait(1.0)?;
    scene.show_texts(&summary[1..], false)?;
    scene.wait(1.2)
}

fn asymptote_study(scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    let lim = tex::tends_to("t", "+\\infty");
    let limits = tex::env("cases", &format!("x(t) {lim} +\\infty \\\\y(t) {lim} 0"));
    let mut texts = vec![Text::tex(format!("On a ${limits}$")).at(UP)];
    if let Some(branch) = def.branches().first() {
        texts.push(Text::tex(format!("Et on obtient une {}", branch.label())));
    }
    let ids = stack(scene, texts)?;
    scene.show_texts(&ids[..1], true)?;
    scene.wait(1.5)?;
    scene.show_texts(&ids[1..], false)?;
    scene.wait(2.0)?;
    scene.clear_texts()
}

fn orange_dot(at: Point2) -> SceneObject {
    SceneObject::Dot {
        at,
        color: Color::ORANGE,
        scale: 1.0,
    }
}

/// A dot with its letter, returned as `[dot, letter]`.
fn named_point(
    scene: &mut Scene<'_>,
    at: Point2,
    name: &str,
    side: Vector2,
) -> Result<[ObjectId; 2]> {
    let dot = scene.spawn(orange_dot(at))?;
    let letter = scene.spawn(Text::tex(name).scale(0.8).next_to(dot, side * 0.5))?;
    Ok([dot, letter])
}

fn epilogue(scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    interpretation(scene)?;
    follow_the_dog(scene, def)
}

/// Sets the story: the leash, the dog, the squirrel, and the assumptions.
fn interpretation(scene: &mut Scene<'_>) -> Result<()> {
    scene.announce_episode("Interprétation cinématique", false)?;
    let story = stack(
        scene,
        vec![
            Text::tex("Monsieur F. se promène avec son chien Doug.").at(UP * 1.5),
            Text::tex("Doug est tenu en laisse."),
        ],
    )?;
    scene.show_texts(&story, true)?;
    scene.wait(2.0)?;
    scene.clear_texts()?;
    scene.show_axes()?;

    let [f, f_name] = named_point(scene, Point2::new(0.0, 3.0), "F", RIGHT)?;
    let [d, d_name] = named_point(scene, Point2::new(0.0, 2.0), "D", DOWN)?;
    let leash = scene.spawn(SceneObject::Link {
        from: f,
        to: d,
        color: Color::ORANGE,
    })?;
    let walkers = [f, d, f_name, d_name, leash];
    scene.add(&walkers)?;
    scene.play(vec![
        Animation::MoveAlong {
            id: f,
            path: vec![Point2::new(0.0, 3.0), Point2::new(0.0, 1.0)],
            run_time: 2.0,
        },
        Animation::MoveAlong {
            id: d,
            path: vec![Point2::new(0.0, 2.0), Point2::origin()],
            run_time: 2.0,
        },
    ])?;
    scene.wait(1.0)?;

    let mut animations: Vec<Animation> =
        walkers.iter().map(|&id| Animation::FadeOut { id }).collect();
    animations.extend(scene.hide_axes_animations());
    scene.play(animations)?;
    let squirrel_seen = scene.spawn(
        Text::tex("À l'instant t=0, Doug aperçoit un écureuil.").below(story[1]),
    )?;
    scene.show_texts(&story, false)?;
    scene.show_texts(&[squirrel_seen], false)?;
    scene.wait(1.5)?;
    scene.clear_texts()?;
    let mut animations: Vec<Animation> =
        walkers.iter().map(|&id| Animation::FadeIn { id }).collect();
    animations.extend(scene.show_axes_animations());
    scene.play(animations)?;

    let [e, e_name] = named_point(scene, Point2::new(2.0, 0.0), "E", DOWN)?;
    scene.fade_in(&[e, e_name])?;
    scene.wait(1.0)?;
    let flees = scene.spawn(Text::tex("L'écureuil fuit !").at(DOWN * 3.0))?;
    scene.show_texts(&[flees], true)?;
    scene.wait(1.0)?;
    let heading = scene.spawn(SceneObject::Arrow {
        from: Point2::new(2.3, 0.0),
        to: Point2::new(3.3, 0.0),
        color: Color::WHITE,
    })?;
    scene.play(vec![Animation::Create {
        id: heading,
        run_time: 1.0,
    }])?;
    scene.wait(2.0)?;
    scene.clear_texts()?;

    let mut animations: Vec<Animation> = [e, e_name, heading]
        .iter()
        .chain(&walkers)
        .map(|&id| Animation::FadeOut { id })
        .collect();
    animations.extend(scene.hide_axes_animations());
    scene.play(animations)?;

    let assumptions = stack(
        scene,
        vec![
            Text::tex("Quelle sera la trajectoire de Monsieur F., entraîné par Doug ?")
                .at(UP * 2.0),
            Text::tex("On suppose que : "),
            Text::tex(format!(
                "- La laisse est de longueur constante : $\\|{}\\|=1$",
                tex::vect("FD")
            )),
            Text::tex("- Elle donne la direction du mouvement (tangente)"),
            Text::tex("- Doug court à vitesse constante"),
        ],
    )?;
    for id in assumptions {
        scene.show_texts(&[id], false)?;
        scene.wait(1.0)?;
    }
    scene.wait(1.0)?;
    scene.clear_texts()?;
    scene.show_axes()
}

/// Runs the dog along the axis: the man, one leash length behind, draws
/// the tractrix.
fn follow_the_dog(scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    let end = def
        .symmetries()
        .first()
        .map_or(4.0, |rule| rule.reduced_range().t_max);
    let params: Vec<f64> = (0..=PATH_SAMPLES)
        .map(|i| end * f64::from(i) / f64::from(PATH_SAMPLES))
        .collect();
    let curve = def.curve();

    let [f, f_name] = named_point(scene, curve.point(0.0), "F", UP + RIGHT)?;
    let [d, d_name] = named_point(scene, Point2::origin(), "D", DOWN)?;
    let [e, e_name] = named_point(scene, Point2::new(2.0, 0.0), "E", DOWN)?;
    let leash = scene.spawn(SceneObject::Link {
        from: f,
        to: d,
        color: Color::ORANGE,
    })?;
    scene.add(&[f, f_name, d, d_name, leash, e, e_name])?;

    let run_time = 4.0;
    scene.play(vec![
        Animation::MoveAlong {
            id: f,
            path: params.iter().map(|&t| curve.point(t)).collect(),
            run_time,
        },
        Animation::MoveAlong {
            id: d,
            path: params.iter().map(|&t| Point2::new(t, 0.0)).collect(),
            run_time,
        },
        Animation::MoveAlong {
            id: e,
            path: params.iter().map(|&t| Point2::new(2.0 + 0.8 * t, 0.0)).collect(),
            run_time,
        },
    ])?;
    scene.wait(1.0)?;

    let conclusion = scene.spawn(
        Text::tex("Monsieur F. suit notre courbe, appelée tractrice.").at(DOWN * 3.0),
    )?;
    scene.show_texts(&[conclusion], true)?;
    scene.wait(3.0)
}
