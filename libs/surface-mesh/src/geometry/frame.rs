//! Orthonormal frames built from a tangent direction.

use super::{Vector, VectorExt, E1, E2, E3};
use crate::error::MeshResult;

/// An orthonormal triple attached to a point of a curve or segment.
///
/// - `tangent`: the primary direction, normalized
/// - `normal`: the trial vector with its tangent component removed
/// - `binormal`: `tangent × normal`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Unit tangent vector.
    pub tangent: Vector,
    /// Unit normal vector (perpendicular to tangent).
    pub normal: Vector,
    /// Unit binormal vector (`tangent × normal`).
    pub binormal: Vector,
}

impl Frame {
    /// Builds a frame from a tangent and a trial normal.
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` if the tangent has zero length or the trial
    /// normal is parallel to the tangent.
    pub fn from_tangent_normal(tangent: Vector, normal: Vector) -> MeshResult<Self> {
        let tangent = tangent.unit("tangent vector")?;
        Self::orthogonalize(tangent, normal)
    }

    /// Builds a frame from a tangent alone.
    ///
    /// The trial normal is the first of `E1`, `E2`, `E3` that is not parallel
    /// to the tangent, so this only fails for a zero tangent.
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` if the tangent has zero length.
    pub fn from_tangent(tangent: Vector) -> MeshResult<Self> {
        let tangent = tangent.unit("tangent vector")?;
        Self::orthogonalize(tangent, E1)
            .or_else(|_| Self::orthogonalize(tangent, E2))
            .or_else(|_| Self::orthogonalize(tangent, E3))
    }

    fn orthogonalize(tangent: Vector, trial: Vector) -> MeshResult<Self> {
        let normal = (trial - tangent * trial.dot(tangent)).unit("normal vector")?;
        Ok(Self {
            tangent,
            normal,
            binormal: tangent.cross(normal),
        })
    }

    /// Point on the circle of `radius` around the tangent axis at angle `phi`,
    /// measured from the normal towards the binormal.
    pub fn circle_offset(&self, radius: f64, phi: f64) -> Vector {
        radius * (phi.cos() * self.normal + phi.sin() * self.binormal)
    }
}
