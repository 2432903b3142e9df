//! # Plane for BSP Operations
//!
//! Oriented plane with point classification.

use config::constants::BSP_EPSILON;
use glam::DVec3;

/// Classification of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Front,
    Back,
    Coplanar,
    /// Polygon has vertices on both sides.
    Spanning,
}

/// A plane `normal · p = w` with unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    /// Creates a plane from a normal (normalized here) and a point on it.
    ///
    /// Returns `None` for a zero normal.
    pub fn through(point: DVec3, normal: DVec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self {
            normal,
            w: normal.dot(point),
        })
    }

    /// Plane through three points, oriented so they wind counter-clockwise
    /// when seen from the front.
    ///
    /// Returns `None` for a degenerate triangle.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        Self::through(a, (b - a).cross(c - a))
    }

    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn flip(&self) -> Plane {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Positive in front, negative behind.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    pub fn classify_point(&self, point: DVec3) -> Classification {
        let dist = self.signed_distance(point);
        if dist > BSP_EPSILON {
            Classification::Front
        } else if dist < -BSP_EPSILON {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }
}
