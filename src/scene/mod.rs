//! The boundary with the animation engine.
//!
//! Sequencing code never draws anything itself: it declares objects and
//! plays [`Action`]s on a [`Renderer`]. Curve objects live in data
//! coordinates, texts in screen units (the frame is 14.2 x 8 units, origin
//! at the centre, y pointing up).

mod action;
mod color;
mod object;
mod renderer;
mod state;

pub use action::{Action, Animation, Pivot};
pub use color::Color;
pub use object::{ObjectId, Placement, SceneObject, Text, TextKind};
pub use renderer::{Renderer, Script};
pub use state::Scene;

use crate::math::Vector2;

pub const ORIGIN: Vector2 = Vector2::new(0.0, 0.0);
pub const UP: Vector2 = Vector2::new(0.0, 1.0);
pub const DOWN: Vector2 = Vector2::new(0.0, -1.0);
pub const LEFT: Vector2 = Vector2::new(-1.0, 0.0);
pub const RIGHT: Vector2 = Vector2::new(1.0, 0.0);

/// Top of the right-hand column once the axes sit on the left.
pub const TEXT_RIGHT: Vector2 = Vector2::new(3.0, 3.0);
