//! Rigid alignment of one axis onto another.
use nalgebra::Matrix3;

use crate::{
    axis::extract_axis_points,
    error::{AxisError, SequenceRole},
    point::{Point3, PointSequence},
    structure::Structure,
};

/// A translation followed by a rotation.
///
/// Points are treated as row vectors: `p` maps to `(p + translation) · rotation`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RigidTransform {
    pub translation: Point3,
    pub rotation: Matrix3<f64>,
}

impl RigidTransform {
    pub fn new(translation: Point3, rotation: Matrix3<f64>) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// A pure translation
    pub fn from_translation(translation: Point3) -> Self {
        Self::new(translation, Matrix3::identity())
    }

    pub fn apply_point(&self, point: &Point3) -> Point3 {
        // row vector times R is the column vector R^T * p
        self.rotation.tr_mul(&(point + self.translation))
    }

    /// Applies the transform to every point independently, keeping length and order.
    pub fn apply(&self, points: &PointSequence) -> PointSequence {
        points.iter().map(|point| self.apply_point(point)).collect()
    }
}

/// Two axes whose points correspond position by position: `moving[i]` is assumed to sit
/// opposite `reference[i]`.
///
/// Nothing beyond that is matched or checked. The lengths may differ, in which case the
/// trailing points of the longer sequence simply have no partner.
#[derive(Copy, Clone, Debug)]
pub struct AxisPair<'a> {
    reference: &'a PointSequence,
    moving: &'a PointSequence,
}

impl<'a> AxisPair<'a> {
    /// Pairs up two axes. Both need at least one point, since the first points anchor the
    /// alignment.
    pub fn new(
        reference: &'a PointSequence,
        moving: &'a PointSequence,
    ) -> Result<Self, AxisError> {
        if reference.is_empty() {
            return Err(AxisError::EmptyPointSequence(SequenceRole::Reference));
        }
        if moving.is_empty() {
            return Err(AxisError::EmptyPointSequence(SequenceRole::Moving));
        }

        Ok(Self { reference, moving })
    }

    pub fn reference(&self) -> &'a PointSequence {
        self.reference
    }

    pub fn moving(&self) -> &'a PointSequence {
        self.moving
    }

    /// The transform that puts the first moving point onto the first reference point.
    ///
    /// The rotation is always the identity: no rotational fit is attempted, so only the
    /// anchor pair influences the result.
    pub fn anchored_transform(&self) -> RigidTransform {
        let translation = self.reference[0] - self.moving[0];
        log::debug!("anchor translation: {translation:?}");

        RigidTransform::from_translation(translation)
    }

    /// Moves the moving axis into the frame of the reference axis.
    pub fn align(&self) -> PointSequence {
        let transform = self.anchored_transform();
        let aligned = transform.apply(self.moving);
        log::debug!(
            "aligned {} moving points onto a reference of {} points",
            aligned.len(),
            self.reference.len()
        );
        aligned
    }
}

/// Aligns `moving` onto `reference`, see [`AxisPair::align`].
pub fn align_axes(
    reference: &PointSequence,
    moving: &PointSequence,
) -> Result<PointSequence, AxisError> {
    Ok(AxisPair::new(reference, moving)?.align())
}

/// Extracts the axes of both structures and aligns the second onto the first.
pub fn align_structures(
    reference: &Structure,
    moving: &Structure,
) -> Result<PointSequence, AxisError> {
    let reference = extract_axis_points(reference)?;
    let moving = extract_axis_points(moving)?;
    align_axes(&reference, &moving)
}
