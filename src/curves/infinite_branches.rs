//! `t -> (t² / (t - 1), t / (t² - 1))`: no symmetry, two regular points and
//! three kinds of asymptote, read off a variation table.

use std::sync::Arc;

use crate::error::Result;
use crate::geometry::FnParametrization;
use crate::math::rational::Coefficient;
use crate::math::Vector2;
use crate::scene::{
    Animation, Color, ObjectId, Pivot, Scene, SceneObject, Text, DOWN, LEFT, RIGHT, UP,
};
use crate::sequencer::{CurveDefinition, Hooks};
use crate::study::{AsymptoteDescriptor, TangentVector};
use crate::tex;

use super::{announce_parametrization, read_asset, stack};

const VARIATIONS_FILE: &str = "variations_infinite_branches.tex";

/// Name under which the variation table is kept for the asymptote study.
const KEPT_TABLE: &str = "variation_table";

fn x(t: f64) -> f64 {
    t * t / (t - 1.0)
}

fn y(t: f64) -> f64 {
    t / (t * t - 1.0)
}

/// # Errors
///
/// Never fails in practice; the builder validates the constants.
pub fn definition() -> Result<CurveDefinition> {
    let down = |t| TangentVector::new(t, Vector2::new(0.0, -1.0), 1.0);
    CurveDefinition::builder("infinite-branches", FnParametrization::new(x, y))
        .window(-4.8, 8.2, -5.2, 5.2)
        .steps(Some(1.0), Some(1.0))
        .legend_interval(1.5)
        .trace_range(-5.0, -1.1)
        .trace_range(-0.9, 1.0 - 1.0 / 6.0)
        .trace_range(1.0 + 1.0 / 6.0, 7.0)
        .regular_point("0", down(0.0))
        .regular_point("2", down(2.0))
        .branch(AsymptoteDescriptor::horizontal(0))
        .branch(AsymptoteDescriptor::vertical(Coefficient::fraction(-1, 2)))
        .branch(AsymptoteDescriptor::from_slope_intercept(
            Coefficient::fraction(1, 2),
            Coefficient::fraction(-3, 4),
        ))
        .hooks(Hooks {
            announce_curve: Some(Arc::new(announce)),
            variation_table: Some(Arc::new(variation_table)),
            asymptote_study: Some(Arc::new(asymptote_study)),
            ..Hooks::default()
        })
        .build()
}

fn announce(scene: &mut Scene<'_>, _: &CurveDefinition) -> Result<()> {
    let formula = announce_parametrization(
        scene,
        &tex::frac("t^2", "t - 1"),
        &tex::frac("t", "t^2 - 1"),
    )?;
    scene.wait(1.5)?;
    let no_symmetry = scene.spawn(
        Text::tex("Cette courbe ne présente pas de symétrie.")
            .below(formula)
            .scale(0.7),
    )?;
    scene.show_texts(&[no_symmetry], false)
}

fn ring(center: Vector2, size: f64, color: Color) -> SceneObject {
    SceneObject::Ring {
        center,
        width: size,
        height: size,
        color,
    }
}

fn variation_table(scene: &mut Scene<'_>, _: &CurveDefinition) -> Result<()> {
    scene.announce_episode("Étude des variations", false)?;
    let derivatives = tex::env(
        "cases",
        &format!(
            "x'(t) = {} \\\\ y'(t) = {}",
            tex::frac("t(t-2)", "(t-1)^2"),
            tex::frac("-t^2-1", "(t^2-1)^2")
        ),
    );
    let ids = stack(
        scene,
        vec![
            Text::tex("On trouve après dérivation : ").at(UP * 3.0),
            Text::tex(format!("${derivatives}$")),
            Text::tex("Les limites ne sont pas indéterminées,"),
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
    scene.wait(2.0)?;

    let mut regular_rings = Vec::new();
    for center in [UP * 1.8 + LEFT * 0.05, UP * 1.8 + RIGHT * 4.05] {
        regular_rings.push(scene.spawn(ring(center, 1.0, Color::WHITE))?);
    }
    let mut branch_rings = Vec::new();
    for dx in [LEFT * 4.5, LEFT * 2.2, RIGHT * 2.0, RIGHT * 5.7] {
        branch_rings.push(scene.spawn(ring(UP * 2.35 + dx, 0.6, Color::BLUE_B))?);
    }
    let mut group = vec![table];
    group.extend_from_slice(&branch_rings);

    // The rings follow the table, so everything shrinks around its centre.
    let moved: Vec<ObjectId> = group.iter().chain(&regular_rings).copied().collect();
    scene.play(
        moved
            .iter()
            .map(|&id| Animation::Scale {
                id,
                factor: 0.6,
                about: Pivot::CentreOf { id: table },
            })
            .collect(),
    )?;
    scene.play(
        moved
            .iter()
            .map(|&id| Animation::Shift { id, by: UP * 1.5 })
            .collect(),
    )?;

    let summary = stack(
        scene,
        vec![
            Text::tex("On étudie 2 points réguliers,").at(DOWN * 1.5),
            Text::tex("et 4 branches infinies."),
        ],
    )?;
    scene.show_texts(&summary[..1], false)?;
    scene.fade_in(&regular_rings)?;
    scene.wait(1.0)?;
    scene.fade_out(&regular_rings)?;
    scene.show_texts(&summary[1..], false)?;
    scene.fade_in(&branch_rings)?;
    scene.wait(1.5)?;

    scene.fade_out(&branch_rings)?;
    scene.clear_texts()?;
    scene.keep(KEPT_TABLE, group);
    Ok(())
}

/// Limits narrated before each branch, in the order of the definition.
fn branch_limits() -> [String; 3] {
    let at = |lim: &str| tex::tends_to("t", lim);
    let inf = at("\\pm\\infty");
    let minus_one = at("-1");
    let one = at("1");
    [
        tex::env("cases", &format!("x(t) {inf} \\pm\\infty \\\\ y(t) {inf} 0")),
        tex::env(
            "cases",
            &format!(
                "x(t) {minus_one} -{} \\\\ y(t) {minus_one} \\pm\\infty",
                tex::frac(1, 2)
            ),
        ),
        tex::env("cases", &format!("x(t) {one} \\pm\\infty \\\\ y(t) {one} \\pm\\infty")),
    ]
}

/// Brings the kept table back for a moment, shifted down.
fn recall_table(scene: &mut Scene<'_>) -> Result<()> {
    let recall = scene.spawn(Text::tex("Rappelons tout d'abord les variations.").at(UP * 3.0))?;
    scene.show_texts(&[recall], true)?;
    let group = scene.kept(KEPT_TABLE);
    scene.play(
        group
            .iter()
            .map(|&id| Animation::Shift {
                id,
                by: DOWN * 1.5,
            })
            .collect(),
    )?;
    scene.fade_in(&group)?;
    scene.wait(2.0)?;
    scene.fade_out(&group)
}

fn asymptote_study(scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    recall_table(scene)?;

    let limits = branch_limits();
    let Some((oblique, direct)) = def.branches().split_last() else {
        return Ok(());
    };
    for (limit, branch) in limits.iter().zip(direct) {
        let ids = stack(
            scene,
            vec![
                Text::tex(format!("On a ${limit}$")).at(UP),
                Text::tex(format!("d'où une {}", branch.label())).scale(0.8),
            ],
        )?;
        scene.show_texts(&ids[..1], true)?;
        scene.wait(1.5)?;
        scene.show_texts(&ids[1..], false)?;
        scene.wait(1.5)?;
    }

    // Both coordinates diverge at t = 1: the line only follows from the
    // limits of y/x and y - x/2.
    let one = tex::tends_to("t", "1");
    let ids = stack(
        scene,
        vec![
            Text::tex(format!("On a ${}$", limits[2])).at(UP * 2.0),
            Text::tex("En $t=1$, on calcule"),
            Text::tex(format!(
                "${} = {} {one} {}$",
                tex::frac("y(t)", "x(t)"),
                tex::frac(1, "t(t+1)"),
                tex::frac(1, 2)
            )),
            Text::tex(format!(
                "$y(t) - {} = -{} {one} -{}$",
                tex::frac("x(t)", 2),
                tex::frac("t(t+2)", "2(t+1)"),
                tex::frac(3, 4)
            )),
            Text::tex(format!("d'où une {}", oblique.label())).scale(0.8),
        ],
    )?;
    scene.show_texts(&ids[..1], true)?;
    scene.wait(1.5)?;
    for &id in &ids[1..] {
        scene.show_texts(&[id], false)?;
        scene.wait(1.5)?;
    }
    scene.clear_texts()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::scene::{Action, Script};
    use crate::sequencer::SequencerSettings;

    #[test]
    fn oblique_asymptote_matches_the_curve() {
        for t in [1.0 + 1e-4, 1.0 - 1e-4] {
            let gap = y(t) - (0.5 * x(t) - 0.75);
            assert!(gap.abs() < 1e-3);
        }
    }

    #[test]
    fn regular_points_have_vertical_tangents() {
        let def = definition().unwrap();
        assert_eq!(def.regular_points().len(), 2);
        for point in def.regular_points() {
            let t = point.tangent.param();
            let h = 1e-6;
            let dx = (x(t + h) - x(t - h)) / (2.0 * h);
            assert_relative_eq!(dx, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn tables_and_rings_shrink_around_the_table() {
        let def = definition().unwrap();
        let mut script = Script::new();
        let settings = SequencerSettings {
            assets_dir: std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
            ..SequencerSettings::default()
        };
        {
            let mut scene = Scene::new(&mut script, settings);
            variation_table(&mut scene, &def).unwrap();
        }

        let scales: Vec<(ObjectId, Pivot)> = script
            .actions()
            .iter()
            .filter_map(|action| match action {
                Action::Play { animations } => Some(animations),
                _ => None,
            })
            .flatten()
            .filter_map(|animation| match animation {
                Animation::Scale { id, about, .. } => Some((*id, *about)),
                _ => None,
            })
            .collect();
        assert_eq!(scales.len(), 7);
        let table = scales[0].0;
        assert!(scales
            .iter()
            .all(|(_, about)| *about == Pivot::CentreOf { id: table }));
    }

    #[test]
    fn three_branches_three_ranges() {
        let def = definition().unwrap();
        assert!(def.symmetries().is_empty());
        assert_eq!(def.trace_ranges().len(), 3);
        let labels: Vec<String> = def.branches().iter().map(|b| b.label()).collect();
        assert_eq!(
            labels,
            [
                "asymptote horizontale d'équation $y=0$",
                "asymptote verticale d'équation $x=-\\frac{1}{2}$",
                "asymptote d'équation $y=\\frac{x}{2}-\\frac{3}{4}$",
            ]
        );
    }
}
