//! The curves studied in the videos. Content only: the sequence itself
//! lives in [`crate::sequencer`].

pub mod astroid;
pub mod infinite_branches;
pub mod lissajous;
pub mod tractrix;
pub mod unit_circle;

use std::fs;

use crate::error::{CurveStudyError, DefinitionError, Result};
use crate::scene::{ObjectId, Scene, Text, TEXT_RIGHT};
use crate::sequencer::CurveDefinition;
use crate::tex::{self, Direction};

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 5] = [
    "astroid",
    "lissajous",
    "tractrix",
    "unit-circle",
    "infinite-branches",
];

/// Builds a curve definition from its name.
///
/// # Errors
///
/// Returns an error if the name is unknown or the definition is invalid.
pub fn by_name(name: &str) -> Result<CurveDefinition> {
    match name {
        "astroid" => astroid::definition(),
        "lissajous" => lissajous::definition(),
        "tractrix" => tractrix::definition(),
        "unit-circle" => unit_circle::definition(),
        "infinite-branches" => infinite_branches::definition(),
        other => Err(DefinitionError::UnknownCurve(other.to_owned()).into()),
    }
}

/// Reads a pre-formatted LaTeX file from the assets directory.
fn read_asset(scene: &Scene<'_>, file: &str) -> Result<String> {
    let path = scene.settings().assets_dir.join(file);
    fs::read_to_string(&path).map_err(|source| CurveStudyError::Asset { path, source })
}

/// Spawns texts stacked top-down: the first keeps its placement, each next
/// one goes below the previous.
fn stack(scene: &mut Scene<'_>, texts: Vec<Text>) -> Result<Vec<ObjectId>> {
    let mut ids: Vec<ObjectId> = Vec::with_capacity(texts.len());
    for text in texts {
        let text = match ids.last() {
            Some(&prev) => text.below(prev),
            None => text,
        };
        ids.push(scene.spawn(text)?);
    }
    Ok(ids)
}

/// Shows "La courbe étudiée ici est" and the parametrization in the right
/// column, returning the formula's id.
fn announce_parametrization(scene: &mut Scene<'_>, x: &str, y: &str) -> Result<ObjectId> {
    let formula = format!(
        "t \\mapsto {} = {}",
        tex::vector(&["x(t)", "y(t)"], Direction::Column),
        tex::vector(&[x, y], Direction::Column)
    );
    let ids = stack(
        scene,
        vec![
            Text::plain("La courbe étudiée ici est")
                .scale(0.7)
                .at(TEXT_RIGHT),
            Text::math(formula).scale(0.7),
        ],
    )?;
    scene.show_texts(&ids, true)?;
    Ok(ids[1])
}

/// "Comme M(t+2π) = M(t), on l'étudie sur [-π, π]" below `anchor`.
fn announce_period(scene: &mut Scene<'_>, anchor: ObjectId) -> Result<()> {
    let first = scene.spawn(Text::tex("Comme $M(t+2\\pi) = M(t)$,").below(anchor).scale(0.7))?;
    let second = scene.spawn(
        Text::tex("on l'étudie sur $[-\\pi, \\pi]$")
            .below(first)
            .scale(0.7),
    )?;
    scene.show_texts(&[first, second], false)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn every_name_builds() {
        for name in NAMES {
            let def = by_name(name).unwrap();
            assert!(!def.name().is_empty());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = by_name("cardioid").unwrap_err();
        assert!(matches!(
            err,
            CurveStudyError::Definition(DefinitionError::UnknownCurve(ref name))
                if name == "cardioid"
        ));
    }
}
