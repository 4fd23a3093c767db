pub mod curve;
mod line;
mod window;

pub use curve::{FnParametrization, ParamRange, Parametrization};
pub use line::Line;
pub use window::ViewWindow;
