use tracing::{debug, info, warn};

use crate::error::Result;
use crate::geometry::ParamRange;
use crate::math::{Point2, Vector2};
use crate::scene::{
    Animation, Color, ObjectId, Pivot, Scene, SceneObject, Text, RIGHT, TEXT_RIGHT, UP,
};
use crate::study::{CurveSegment, InfiniteBranch, SymmetryRule, TangentVector};
use crate::tessellation::SamplingParams;

use super::{run_hook, CurveDefinition, Stage};

/// Plays one stage, with its episode announcement and section marker.
pub(super) fn play(stage: Stage, scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    match stage {
        Stage::RegularPoints => {
            if !def.regular_points().is_empty() {
                scene.announce_episode("Étude de quelques points réguliers", false)?;
            }
        }
        Stage::SingularPoints => {
            let n = def.singular_points().len();
            if n > 0 {
                let s = plural(n);
                scene.announce_episode(&format!("Étude locale{s}"), false)?;
            }
        }
        Stage::Asymptotes => {
            let n = def.branches().len();
            if n > 0 {
                let s = plural(n);
                scene.announce_episode(&format!("Étude de{s} branche{s} infinie{s}"), false)?;
            }
        }
        _ => {}
    }
    if let Some(name) = stage.section() {
        scene.section(name)?;
    }

    match stage {
        Stage::Intro => intro(scene, def),
        Stage::SamplePoints => sample_points(scene, def),
        Stage::CurveAnnouncement => announce_curve(scene, def),
        Stage::Symmetries => symmetries(scene, def),
        Stage::VariationTable => run_hook(scene, def, def.hooks().variation_table.as_ref()),
        Stage::RegularPoints => regular_points(scene, def),
        Stage::SingularPoints => singular_points(scene, def),
        Stage::Asymptotes => {
            asymptotes(scene, def)?;
            scene.announce_episode("Tracé", true)
        }
        Stage::VariationsRecap => run_hook(scene, def, def.hooks().variations.as_ref()),
        Stage::FullTrace => full_trace(scene, def),
    }
}

fn plural(n: usize) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

fn intro(scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    let title = scene.spawn(Text::plain("Étude et tracé d'une courbe paramétrée"))?;
    scene.show_texts(&[title], true)?;
    scene.wait(1.0)?;
    scene.clear_texts()?;
    run_hook(scene, def, def.hooks().intro_extra.as_ref())
}

/// Places a few points to show how `x(t)` and `y(t)` locate `M(t)`.
fn sample_points(scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    if def.samples().is_empty() {
        scene.set_episode(1);
        return Ok(());
    }
    scene.announce_episode("Placer un point d'une courbe", false)?;
    scene.place_axes(def.axes().to_object())?;

    let warning = scene.spawn(
        Text::paragraph(&[
            "Remarquer que la valeur du",
            "paramètre n'apparaît pas",
            "directement sur le tracé.",
        ])
        .at(RIGHT * 4.0 + UP)
        .scale(0.5),
    )?;
    scene.fade_in(&[warning])?;

    let curve = def.curve();
    let mut dots: Option<[ObjectId; 3]> = None;
    let mut labels: Vec<ObjectId> = Vec::new();
    let mut captioned = false;

    for sample in def.samples() {
        let t = sample.param;
        if let Some(caption) = &sample.caption {
            let id = scene.spawn(caption.clone())?;
            scene.show_texts(&[id], true)?;
            scene.wait(1.0)?;
            captioned = true;
        }

        let targets = [
            Point2::new(curve.x(t), 0.0),
            Point2::new(0.0, curve.y(t)),
            curve.point(t),
        ];
        let current = if let Some(current) = dots {
            scene.fade_out(&labels)?;
            scene.play(
                current
                    .iter()
                    .zip(targets)
                    .map(|(&id, to)| Animation::MoveTo { id, to })
                    .collect(),
            )?;
            current
        } else {
            let mut spawned = [ObjectId(0); 3];
            for (slot, at) in spawned.iter_mut().zip(targets) {
                *slot = scene.spawn(SceneObject::Dot {
                    at,
                    color: Color::WHITE,
                    scale: 1.0,
                })?;
            }
            scene.add(&spawned)?;
            spawned
        };
        dots = Some(current);

        let [px, py, pm] = current;
        labels = vec![
            scene.spawn(Text::plain(format!("x({t})")).next_to(px, sample.legend.x).scale(0.5))?,
            scene.spawn(Text::plain(format!("y({t})")).next_to(py, sample.legend.y).scale(0.5))?,
            scene.spawn(Text::plain(format!("M({t})")).next_to(pm, sample.legend.m).scale(0.7))?,
        ];
        scene.add(&labels)?;
        scene.wait(1.0)?;
    }
    scene.wait(1.0)?;

    let mut shown: Vec<ObjectId> = dots.map(Vec::from).unwrap_or_default();
    shown.extend(labels);
    scene.remove(&shown)?;
    if captioned {
        let mut faded = vec![warning];
        faded.extend_from_slice(scene.current_texts());
        scene.fade_out(&faded)?;
        scene.forget_texts();
    } else {
        scene.fade_out(&[warning])?;
    }
    Ok(())
}

fn announce_curve(scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    let has_samples = !def.samples().is_empty();
    scene.announce_episode("La courbe à étudier", has_samples)?;
    scene.wait(1.0)?;
    scene.clear_texts()?;
    if !has_samples {
        scene.place_axes(def.axes().to_object())?;
    }
    run_hook(scene, def, def.hooks().announce_curve.as_ref())?;
    scene.wait(2.0)
}

fn symmetries(scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    scene.show_axes()?;
    for rule in def.symmetries() {
        present_symmetry(scene, def, rule)?;
    }
    scene.wait(1.0)
}

/// Presents a symmetry: statement, a point and its image moving together,
/// conclusion, then the reduction of the study interval.
fn present_symmetry(
    scene: &mut Scene<'_>,
    def: &CurveDefinition,
    rule: &SymmetryRule,
) -> Result<()> {
    debug!(symmetry = rule.label(), "presenting symmetry");
    let curve = def.curve();

    let presentation = scene.spawn(rule.presentation().clone())?;
    scene.show_texts(&[presentation], true)?;
    scene.wait(1.2)?;

    let (t1, t2) = rule.samples();
    let dot = |at| SceneObject::Dot {
        at,
        color: Color::WHITE,
        scale: 1.0,
    };
    let m = scene.spawn(dot(curve.point(t1)))?;
    let m_label = scene.spawn(Text::tex("M(t)").next_to(m, UP / 2.0))?;
    let image = scene.spawn(dot(curve.point(rule.reflect_parameter(t1)?)))?;
    let image_label =
        scene.spawn(Text::tex(format!("M({})", rule.label())).next_to(image, UP / 2.0))?;
    let moving = [m, m_label, image, image_label];
    scene.add(&moving)?;
    scene.wait(1.0)?;
    scene.play(vec![
        Animation::MoveTo {
            id: m,
            to: curve.point(t2),
        },
        Animation::MoveTo {
            id: image,
            to: curve.point(rule.reflect_parameter(t2)?),
        },
    ])?;
    scene.wait(1.0)?;

    let conclusion = scene.spawn(rule.conclusion().clone())?;
    scene.show_texts(&[conclusion], true)?;
    scene.wait(1.2)?;

    let (first, second) = rule.reduction_lines();
    let mut previous: Option<ObjectId> = None;
    let mut first_ids = Vec::new();
    for line in first {
        let text = Text::tex(line).scale(0.7);
        let text = match previous {
            Some(prev) => text.below(prev),
            None => text.at(TEXT_RIGHT),
        };
        let id = scene.spawn(text)?;
        first_ids.push(id);
        previous = Some(id);
    }
    scene.show_texts(&first_ids, true)?;
    scene.wait(2.0)?;

    let mut second_ids = Vec::new();
    for line in second {
        let mut text = Text::tex(line).scale(0.7);
        if let Some(prev) = previous {
            text = text.below(prev);
        }
        let id = scene.spawn(text)?;
        second_ids.push(id);
        previous = Some(id);
    }
    scene.show_texts(&second_ids, false)?;
    scene.wait(3.5)?;

    let kept = &rule.intervals().kept;
    let summary = scene.spawn(
        Text::tex(format!("On étudie la courbe sur {kept}."))
            .at(TEXT_RIGHT)
            .scale(0.7),
    )?;
    scene.show_texts(&[summary], true)?;
    scene.fade_out(&moving)?;
    scene.wait(1.0)
}

fn regular_points(scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    let points = def.regular_points();
    if points.is_empty() {
        return Ok(());
    }

    scene.hide_axes()?;
    let l1 = scene.spawn(
        Text::tex(
            "S'il est non nul, le vecteur $\\frac{\\text{d}\\overrightarrow{OM}}{\\text{d}t}(t_0)$",
        )
        .at(UP * 3.0),
    )?;
    let l2 = scene.spawn(Text::tex("dirige la tangente à l'instant $t_0$.").below(l1))?;
    let l3 = scene.spawn(Text::tex("Il s'agit du vecteur vitesse instantanée.").below(l2))?;
    scene.show_texts(&[l1, l2], true)?;
    scene.wait(1.0)?;
    scene.show_texts(&[l3], false)?;
    scene.wait(2.0)?;
    scene.clear_texts()?;
    scene.show_axes()?;

    for point in points {
        let tangent = &point.tangent;
        info!(param = tangent.param(), "regular point");
        let at = def.curve().point(tangent.param());
        let dot = scene.spawn(SceneObject::Dot {
            at,
            color: Color::WHITE,
            scale: 0.7,
        })?;
        scene.add_to_axes_group(dot);
        scene.fade_in(&[dot])?;
        let label = scene.spawn(
            Text::tex(format!("M({})", point.label))
                .next_to(dot, UP / 2.0)
                .scale(0.5),
        )?;
        scene.fade_in(&[label])?;

        let legend = scene.spawn(
            Text::tex(format!("Au paramètre {}, la tangente", point.label))
                .at(TEXT_RIGHT)
                .scale(0.7),
        )?;
        let direction = scene.spawn(
            Text::tex(format!("est dirigée par ${}$", tangent.direction_latex()))
                .below(legend)
                .scale(0.7),
        )?;
        scene.show_texts(&[legend, direction], true)?;
        scene.wait(1.0)?;

        let mut animations = vec![Animation::FadeOut { id: label }];
        animations.extend(tangent_animations(scene, def, tangent, false, Color::WHITE)?);
        scene.play(animations)?;
        scene.wait(0.7)?;
        scene.clear_texts()?;
    }
    Ok(())
}

fn singular_points(scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    scene.hide_axes()?;
    let points = def.singular_points();
    for (i, point) in points.iter().enumerate() {
        info!(param = point.tangent().param(), kind = ?point.kind(), "singular point");
        let mut previous: Option<ObjectId> = None;
        for line in point.narration() {
            let (text, replace) = match previous {
                Some(prev) => (Text::tex(line).below(prev), false),
                None => (Text::tex(line).at(UP * 3.0), true),
            };
            let id = scene.spawn(text)?;
            scene.show_texts(&[id], replace)?;
            scene.wait(1.5)?;
            previous = Some(id);
        }
        scene.wait(1.0)?;
        scene.clear_texts()?;
        scene.show_axes()?;
        draw_tangent(scene, def, point.tangent(), Color::WHITE)?;
        scene.wait(1.0)?;
        if i + 1 < points.len() {
            scene.hide_axes()?;
        }
    }
    Ok(())
}

/// Lists the infinite branches in the right column and draws the visible
/// asymptotes, dashed.
fn asymptotes(scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    run_hook(scene, def, def.hooks().asymptote_study.as_ref())?;

    let mut anchor = scene.spawn(Text::plain("En image").at(TEXT_RIGHT + UP).scale(0.5))?;
    scene.show_axes()?;
    let branches = def.branches();
    for (i, branch) in branches.iter().enumerate() {
        let opening = if i == 0 { "Traçons" } else { "puis" };
        let closing = if i + 1 == branches.len() { "." } else { "," };
        let article = match branch {
            InfiniteBranch::Asymptote(_) => "l'",
            InfiniteBranch::Parabolic { .. } => "la ",
        };
        let text = scene.spawn(
            Text::tex(format!("{opening} {article}{}{closing}", branch.label()))
                .below(anchor)
                .scale(0.7),
        )?;
        scene.show_texts(&[text], false)?;
        scene.wait(1.0)?;
        anchor = text;

        match branch.clip(def.window()) {
            Some((from, to)) => {
                let line = scene.spawn(SceneObject::Line {
                    from,
                    to,
                    color: branch.color(),
                    dashed: true,
                })?;
                scene.add_to_axes_group(line);
                scene.fade_in(&[line])?;
            }
            None => match branch {
                InfiniteBranch::Asymptote(asymptote) => {
                    warn!(asymptote = %asymptote, "asymptote not visible in the window");
                }
                InfiniteBranch::Parabolic { axis } => {
                    debug!(axis = axis.as_str(), "parabolic branch, nothing to draw");
                }
            },
        }
        scene.wait(1.0)?;
    }
    scene.wait(1.0)
}

/// Draws the curve: declared trace ranges when there is no symmetry,
/// otherwise the reduced range of the innermost symmetry and its mirror
/// images, innermost first, with the mirrored tangents.
pub(super) fn full_trace(scene: &mut Scene<'_>, def: &CurveDefinition) -> Result<()> {
    let mut previous = scene.spawn(
        Text::tex("On obtient finalement le tracé")
            .at(TEXT_RIGHT)
            .scale(0.7),
    )?;
    scene.show_texts(&[previous], true)?;
    scene.wait(1.0)?;

    let sampling = SamplingParams {
        samples: scene.settings().samples_per_segment,
        dt: def.dt(),
    };

    if def.symmetries().is_empty() {
        for trace in def.trace_ranges() {
            let segment = sample(def, trace.range, sampling, trace.color.unwrap_or_default())?;
            draw_segment(scene, segment)?;
        }
    } else {
        let regular: Vec<TangentVector> = def.regular_points().iter().map(|p| p.tangent).collect();
        let mut mirrored: Vec<TangentVector> =
            def.singular_points().iter().map(|p| *p.tangent()).collect();
        let count = def.symmetries().len();

        for (i, rule) in def.symmetries().iter().rev().enumerate() {
            let intervals = rule.intervals();
            if i == 0 {
                let text = scene.spawn(
                    Text::tex(format!("d'abord sur l'intervalle {},", intervals.kept))
                        .scale(0.7)
                        .below(previous),
                )?;
                scene.show_texts(&[text], false)?;
                previous = text;
                let segment = sample(def, rule.reduced_range(), sampling, Color::WHITE)?;
                draw_segment(scene, segment)?;
            }

            let closing = if i + 1 < count { "," } else { "." };
            let text = scene.spawn(
                Text::tex(format!(
                    "puis sur {} en traçant les M({}){closing}",
                    intervals.full,
                    rule.label()
                ))
                .color(rule.color())
                .scale(0.7)
                .below(previous),
            )?;
            scene.show_texts(&[text], false)?;
            previous = text;

            let images = regular
                .iter()
                .chain(&mirrored)
                .map(|tangent| tangent.reflected(rule))
                .collect::<Result<Vec<_>>>()?;
            for image in &images {
                draw_tangent(scene, def, image, rule.color())?;
            }
            mirrored.extend(images);

            let segment = rule.extend_segment(def.curve(), sampling, def.discontinuities())?;
            draw_segment(scene, segment)?;
        }
    }

    scene.wait(2.0)?;
    scene.clear_texts()?;
    let group = scene.axes_group().to_vec();
    scene.play(
        group
            .iter()
            .map(|&id| Animation::Shift {
                id,
                by: RIGHT * 3.0,
            })
            .collect(),
    )?;
    scene.play(
        group
            .iter()
            .map(|&id| Animation::Scale {
                id,
                factor: 1.2,
                about: Pivot::Data {
                    at: Point2::origin(),
                },
            })
            .collect(),
    )?;
    scene.wait(2.0)
}

fn sample(
    def: &CurveDefinition,
    range: ParamRange,
    sampling: SamplingParams,
    color: Color,
) -> Result<CurveSegment> {
    CurveSegment::sample(
        def.curve(),
        range,
        None,
        sampling,
        def.discontinuities(),
        color,
    )
}

fn draw_segment(scene: &mut Scene<'_>, segment: CurveSegment) -> Result<()> {
    debug!(
        pieces = segment.pieces.len(),
        points = segment.point_count(),
        color = %segment.color,
        "drawing segment"
    );
    let id = scene.spawn(SceneObject::Curve {
        pieces: segment.pieces,
        color: segment.color,
    })?;
    let run_time = scene.settings().create_run_time;
    scene.play(vec![Animation::Create { id, run_time }])?;
    scene.add_to_axes_group(id);
    scene.wait(1.0)
}

/// Shows the point at once and fades the tangent arrow in.
fn draw_tangent(
    scene: &mut Scene<'_>,
    def: &CurveDefinition,
    tangent: &TangentVector,
    color: Color,
) -> Result<()> {
    let animations = tangent_animations(scene, def, tangent, true, color)?;
    scene.play(animations)
}

/// Declares the tangent arrow (and its point when `with_point`) on the axes
/// and returns the arrow's fade-in.
fn tangent_animations(
    scene: &mut Scene<'_>,
    def: &CurveDefinition,
    tangent: &TangentVector,
    with_point: bool,
    color: Color,
) -> Result<Vec<Animation>> {
    let from = def.curve().point(tangent.param());
    if with_point {
        let dot = scene.spawn(SceneObject::Dot {
            at: from,
            color,
            scale: 0.7,
        })?;
        scene.add_to_axes_group(dot);
        scene.add(&[dot])?;
    }
    let drawn: Vector2 = tangent.drawn();
    let arrow = scene.spawn(SceneObject::Arrow {
        from,
        to: from + drawn,
        color,
    })?;
    scene.add_to_axes_group(arrow);
    Ok(vec![Animation::FadeIn { id: arrow }])
}
