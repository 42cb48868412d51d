use std::ops::Deref;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A single axis point, in the units of the source structure (usually ångström).
pub type Point3 = Vector3<f64>;

/// An ordered list of axis points.
///
/// Index `i` corresponds to the `i`-th residue visited when the points were extracted, so two
/// sequences are only comparable position by position. Points are owned copies and never alias
/// the structure they came from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSequence(Vec<Point3>);

impl PointSequence {
    pub fn new(points: Vec<Point3>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point3] {
        &self.0
    }
}

impl Deref for PointSequence {
    type Target = [Point3];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Point3> for PointSequence {
    fn from_iter<T: IntoIterator<Item = Point3>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
