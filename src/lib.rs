pub mod curves;
pub mod error;
pub mod geometry;
pub mod math;
pub mod scene;
pub mod sequencer;
pub mod study;
pub mod tessellation;
pub mod tex;

pub use error::{CurveStudyError, Result};
