use std::collections::HashMap;

use serde::Serialize;

use crate::error::{RenderError, Result};
use crate::tessellation::Polyline;

use super::{Action, Animation, Color, ObjectId, Placement, SceneObject, Text};

/// The animation engine, seen from the sequencer.
///
/// Every call blocks until the action is fully rendered. An error aborts
/// the whole run.
pub trait Renderer {
    /// Executes one action.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot execute the action.
    fn play(&mut self, action: Action) -> Result<()>;
}

/// A renderer that records the actions, for export to an external engine.
///
/// Object references are checked as actions arrive, so a script that
/// records without error only mentions declared objects.
#[derive(Debug, Default, Serialize)]
pub struct Script {
    actions: Vec<Action>,
    #[serde(skip)]
    objects: HashMap<ObjectId, SceneObject>,
}

impl Script {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Returns the declaration of an object.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Section names in order.
    #[must_use]
    pub fn sections(&self) -> Vec<&str> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::Section { name } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Curves drawn with a `Create` animation, in drawing order.
    #[must_use]
    pub fn drawn_curves(&self) -> Vec<(&[Polyline], Color)> {
        self.animations()
            .filter_map(|anim| match anim {
                Animation::Create { id, .. } => match self.objects.get(id) {
                    Some(SceneObject::Curve { pieces, color }) => {
                        Some((pieces.as_slice(), *color))
                    }
                    _ => None,
                },
                _ => None,
            })
            .collect()
    }

    /// Objects faded in, in order.
    pub fn faded_in(&self) -> impl Iterator<Item = &SceneObject> {
        self.animations().filter_map(|anim| match anim {
            Animation::FadeIn { id } => self.objects.get(id),
            _ => None,
        })
    }

    /// Sum of the explicit waits, in seconds.
    #[must_use]
    pub fn total_wait(&self) -> f64 {
        self.actions
            .iter()
            .map(|a| match a {
                Action::Wait { seconds } => *seconds,
                _ => 0.0,
            })
            .sum()
    }

    /// Serialises the recorded actions.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn animations(&self) -> impl Iterator<Item = &Animation> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::Play { animations } => Some(animations),
                _ => None,
            })
            .flatten()
    }

    fn check(&self, id: ObjectId) -> Result<()> {
        if self.objects.contains_key(&id) {
            Ok(())
        } else {
            Err(RenderError::UnknownObject(id.0).into())
        }
    }
}

impl Renderer for Script {
    fn play(&mut self, action: Action) -> Result<()> {
        match &action {
            Action::Spawn { id, object } => {
                match object {
                    SceneObject::Text(Text {
                        placement: Placement::NextTo { target, .. },
                        ..
                    }) => self.check(*target)?,
                    SceneObject::Link { from, to, .. } => {
                        self.check(*from)?;
                        self.check(*to)?;
                    }
                    _ => {}
                }
                self.objects.insert(*id, object.clone());
            }
            Action::Add { ids } | Action::Remove { ids } => {
                for id in ids {
                    self.check(*id)?;
                }
            }
            Action::Play { animations } => {
                for anim in animations {
                    self.check(anim.target())?;
                }
            }
            Action::Section { .. } | Action::Wait { .. } => {}
        }
        self.actions.push(action);
        Ok(())
    }
}
