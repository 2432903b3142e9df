//! # Geometry
//!
//! Points, free vectors and orthonormal frames.
//!
//! Points and vectors are both `glam::DVec3`; the aliases document intent at
//! the call sites. The extra operations the builders need on top of glam
//! (orthogonal complement, parallel test, checked normalization) live in
//! [`VectorExt`].

mod frame;

pub use frame::Frame;

use crate::error::{MeshError, MeshResult};
use glam::DVec3;

/// A location in space.
pub type Point = DVec3;

/// A free displacement in space.
pub type Vector = DVec3;

/// First unit basis vector.
pub const E1: Vector = DVec3::X;
/// Second unit basis vector.
pub const E2: Vector = DVec3::Y;
/// Third unit basis vector.
pub const E3: Vector = DVec3::Z;

/// Vector operations used by frame construction and curve differentiation.
pub trait VectorExt {
    /// Component of `self` orthogonal to `other`.
    ///
    /// Returns `self - other * (self·other)/(other·other)`; a zero `other`
    /// leaves `self` unchanged.
    fn orthogonal_to(self, other: Vector) -> Vector;

    /// True when `self` and `other` span no plane (zero cross product).
    fn is_parallel(self, other: Vector) -> bool;

    /// True when `self` is orthogonal to `other` within `tolerance`.
    fn is_orthogonal(self, other: Vector, tolerance: f64) -> bool;

    /// Unit vector in the direction of `self`.
    ///
    /// # Errors
    ///
    /// `MeshError::DegenerateGeometry` if `self` has zero length.
    fn unit(self, what: &str) -> MeshResult<Vector>;
}

impl VectorExt for DVec3 {
    fn orthogonal_to(self, other: Vector) -> Vector {
        let norm2 = other.length_squared();
        if norm2 == 0.0 {
            return self;
        }
        self - other * (self.dot(other) / norm2)
    }

    fn is_parallel(self, other: Vector) -> bool {
        self.cross(other).length_squared() == 0.0
    }

    fn is_orthogonal(self, other: Vector, tolerance: f64) -> bool {
        self.dot(other).abs() <= tolerance * self.length() * other.length()
    }

    fn unit(self, what: &str) -> MeshResult<Vector> {
        let norm = self.length();
        if norm == 0.0 || !norm.is_finite() {
            return Err(MeshError::degenerate(format!("{what} has norm 0")));
        }
        Ok(self / norm)
    }
}
