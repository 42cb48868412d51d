use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Represents a named atom in a residue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub(crate) name: String,
    pub(crate) position: Vector3<f64>,
}

impl Atom {
    pub fn new(name: impl Into<String>, position: Vector3<f64>) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    /// The atom name as it appears in the structure file, without padding (e.g. `CA`, `N`)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }
}
