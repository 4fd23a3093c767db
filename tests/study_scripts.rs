#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use curve_study::curves;
use curve_study::error::{CurveStudyError, DefinitionError, GeometryError};
use curve_study::geometry::FnParametrization;
use curve_study::math::Vector2;
use curve_study::scene::{Action, Color, SceneObject, Script, Text};
use curve_study::sequencer::{CurveDefinition, CurveSequencer, SequencerSettings, Stage};
use curve_study::study::{SingularPoint, TangentVector};

fn settings() -> SequencerSettings {
    SequencerSettings {
        samples_per_segment: 32,
        assets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
        ..SequencerSettings::default()
    }
}

fn record(name: &str, settings: SequencerSettings) -> Script {
    let definition = curves::by_name(name).unwrap();
    let mut script = Script::new();
    CurveSequencer::new(settings)
        .run(&definition, &mut script)
        .unwrap();
    script
}

fn spawned_texts(script: &Script) -> Vec<&str> {
    script
        .actions()
        .iter()
        .filter_map(|action| match action {
            Action::Spawn {
                object: SceneObject::Text(text),
                ..
            } => Some(text.body.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn every_curve_plays_every_section() {
    let expected: Vec<&str> = Stage::ALL.iter().filter_map(|s| s.section()).collect();
    for name in curves::NAMES {
        let script = record(name, settings());
        assert_eq!(script.sections(), expected, "{name}");
    }
}

#[test]
fn without_symmetry_each_trace_range_is_one_curve() {
    let script = record("unit-circle", settings());
    assert_eq!(script.drawn_curves().len(), 1);

    let script = record("infinite-branches", settings());
    let drawn = script.drawn_curves();
    assert_eq!(drawn.len(), 3);
    assert!(drawn.iter().all(|(_, color)| *color == Color::WHITE));
}

#[test]
fn astroid_draws_innermost_symmetry_first() {
    let script = record("astroid", settings());
    let colors: Vec<Color> = script.drawn_curves().iter().map(|(_, c)| *c).collect();
    assert_eq!(
        colors,
        [Color::WHITE, Color::GREEN, Color::ORANGE, Color::BLUE]
    );
}

#[test]
fn astroid_trace_covers_the_whole_curve() {
    let script = record("astroid", settings());
    let (last, _) = script.drawn_curves()[3];
    let lowest = last
        .iter()
        .flat_map(|p| &p.points)
        .map(|p| p.y)
        .fold(f64::INFINITY, f64::min);
    assert!(lowest < -0.99);
}

#[test]
fn skip_study_only_draws() {
    let script = record(
        "lissajous",
        SequencerSettings {
            skip_study: true,
            ..settings()
        },
    );
    assert!(script.sections().is_empty());
    assert_eq!(script.drawn_curves().len(), 3);
    assert!(episodes(&script).is_empty());
}

fn episodes(script: &Script) -> Vec<&str> {
    spawned_texts(script)
        .into_iter()
        .filter(|t| t.starts_with("Épisode"))
        .collect()
}

#[test]
fn placing_points_is_episode_zero() {
    let script = record("lissajous", settings());
    let numbers = episodes(&script);
    assert_eq!(numbers.first(), Some(&"Épisode 0"));
    assert_eq!(numbers.get(1), Some(&"Épisode 1"));

    let script = record("unit-circle", settings());
    assert_eq!(episodes(&script).first(), Some(&"Épisode 1"));
}

#[test]
fn episodes_can_be_disabled() {
    let script = record(
        "tractrix",
        SequencerSettings {
            episodes: false,
            ..settings()
        },
    );
    assert!(episodes(&script).is_empty());
    assert_eq!(script.sections().len(), 9);
}

#[test]
fn asymptotes_are_announced_in_order() {
    let script = record("infinite-branches", settings());
    let texts = spawned_texts(&script);
    let opening = texts
        .iter()
        .position(|t| t.starts_with("Traçons l'asymptote horizontale"))
        .unwrap();
    assert!(texts[opening + 1].starts_with("puis l'asymptote verticale"));
    assert!(texts[opening + 2].starts_with("puis l'asymptote d'équation"));
    assert!(texts[opening + 2].ends_with('.'));
}

#[test]
fn oblique_asymptote_is_concluded_after_its_derivation() {
    let script = record("infinite-branches", settings());
    let texts = spawned_texts(&script);
    let position = |prefix: &str| texts.iter().position(|t| t.starts_with(prefix)).unwrap();
    let derivation = position("En $t=1$, on calcule");
    let difference = position("$y(t) - ");
    let conclusion = position("d'où une asymptote d'équation $y=\\frac{x}{2}");
    assert!(derivation < difference);
    assert!(difference < conclusion);
    assert!(position("d'où une asymptote horizontale") < derivation);
    assert!(position("d'où une asymptote verticale") < derivation);
}

#[test]
fn missing_asset_aborts_the_run() {
    let empty = tempfile::tempdir().unwrap();
    let definition = curves::by_name("tractrix").unwrap();
    let mut script = Script::new();
    let err = CurveSequencer::new(SequencerSettings {
        assets_dir: empty.path().to_owned(),
        ..settings()
    })
    .run(&definition, &mut script)
    .unwrap_err();
    assert!(matches!(
        err,
        CurveStudyError::Asset { ref path, .. } if path.ends_with("variations_tractrix.tex")
    ));
}

#[test]
fn mismatched_captions_are_rejected() {
    let err = CurveDefinition::builder("circle", FnParametrization::new(f64::cos, f64::sin))
        .trace_range(-1.0, 1.0)
        .sample_params(&[0.0, 1.0])
        .default_legends()
        .captions(vec![Text::plain("Plaçons M(0)")])
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        CurveStudyError::Definition(DefinitionError::LengthMismatch {
            what: "captions",
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn samples_without_captions_are_rejected() {
    let err = CurveDefinition::builder("circle", FnParametrization::new(f64::cos, f64::sin))
        .trace_range(-1.0, 1.0)
        .sample_params(&[0.0, 1.0])
        .default_legends()
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        CurveStudyError::Definition(DefinitionError::LengthMismatch {
            what: "captions",
            expected: 2,
            found: 0
        })
    ));
}

#[test]
fn nan_singular_point_is_rejected() {
    let cusp = SingularPoint::new(
        "nan",
        TangentVector::new(f64::NAN, Vector2::new(1.0, 0.0), 1.0),
        2,
        3,
    );
    let err = CurveDefinition::builder("circle", FnParametrization::new(f64::cos, f64::sin))
        .trace_range(-1.0, 1.0)
        .singular_point(cusp)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        CurveStudyError::Geometry(GeometryError::NonFiniteParameter { .. })
    ));
}

#[test]
fn negative_legend_interval_is_rejected() {
    let err = CurveDefinition::builder("circle", FnParametrization::new(f64::cos, f64::sin))
        .trace_range(-1.0, 1.0)
        .legend_interval(-2.0)
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("legend interval"), "{err}");
}

#[test]
fn script_serialises_to_json() {
    let script = record("unit-circle", settings());
    let json: serde_json::Value = serde_json::from_str(&script.to_json().unwrap()).unwrap();
    let actions = json["actions"].as_array().unwrap();
    assert_eq!(actions.len(), script.actions().len());
}
