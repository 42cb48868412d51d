#[macro_use]
pub mod testing;

pub mod align;
pub mod atom;
pub mod axis;
pub mod config;
pub mod error;
pub mod io;
pub mod point;
pub mod structure;

pub use align::{align_axes, align_structures, AxisPair, RigidTransform};
pub use axis::extract_axis_points;
pub use error::{AxisError, ConfigError, SequenceRole, StructureError};
pub use point::{Point3, PointSequence};
pub use structure::{Chain, Model, Residue, Structure};
