use serde::Serialize;

use crate::math::{Point2, Vector2};

use super::{ObjectId, SceneObject};

/// One step of the script, executed in order and to completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Starts a new video section.
    Section { name: String },
    /// Declares an object without showing it.
    Spawn { id: ObjectId, object: SceneObject },
    /// Shows objects instantly.
    Add { ids: Vec<ObjectId> },
    /// Hides objects instantly.
    Remove { ids: Vec<ObjectId> },
    /// Runs animations together and waits for all of them.
    Play { animations: Vec<Animation> },
    Wait { seconds: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Animation {
    FadeIn { id: ObjectId },
    FadeOut { id: ObjectId },
    /// Moves an object to a point in data coordinates.
    MoveTo { id: ObjectId, to: Point2 },
    /// Draws a stroke progressively.
    Create { id: ObjectId, run_time: f64 },
    /// Translates by a screen vector.
    Shift { id: ObjectId, by: Vector2 },
    Scale {
        id: ObjectId,
        factor: f64,
        about: Pivot,
    },
    /// Moves an object through points in data coordinates at constant
    /// speed.
    MoveAlong {
        id: ObjectId,
        path: Vec<Point2>,
        run_time: f64,
    },
}

/// Fixed point of a [`Animation::Scale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "pivot", rename_all = "snake_case")]
pub enum Pivot {
    /// The scaled object's own centre.
    OwnCentre,
    /// A point in data coordinates.
    Data { at: Point2 },
    /// The centre of another object, as it is when the animation starts.
    CentreOf { id: ObjectId },
}

impl Animation {
    /// The object this animation acts on.
    #[must_use]
    pub fn target(&self) -> ObjectId {
        match self {
            Self::FadeIn { id }
            | Self::FadeOut { id }
            | Self::MoveTo { id, .. }
            | Self::Create { id, .. }
            | Self::Shift { id, .. }
            | Self::Scale { id, .. }
            | Self::MoveAlong { id, .. } => *id,
        }
    }
}
