//! What a curve study says about a curve: symmetries, tangents, local
//! behaviour at singular points, infinite branches.

mod asymptote;
mod segment;
mod singular;
mod symmetry;
mod tangent;

pub use asymptote::{AsymptoteDescriptor, InfiniteBranch, Orientation};
pub use segment::CurveSegment;
pub use singular::{Parity, PointKind, SingularPoint};
pub use symmetry::{ParamMap, PointMap, SymmetryIntervals, SymmetryRule};
pub use tangent::TangentVector;
