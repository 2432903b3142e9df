//! # Arrow Primitive
//!
//! Prism shaft with a pointed head, from a tail point to a tip point.
//!
//! ## Layout
//!
//! ```text
//! vertex 0           tail center
//! 3 phi + 1          shaft ring at the tail
//! 3 phi + 2          shaft ring at the head base
//! 3 phi + 3          flared ring at the head base
//! last               tip
//! ```

use config::constants::{
    TessellationConfig, ARROW_FLARE_FACTOR, ARROW_HEAD_RADII, DEFAULT_ARROW_STEPS, MIN_ANGULAR_STEPS,
};
use std::f64::consts::TAU;
use tracing::debug_span;

use crate::builder::{MeshBuilder, SurfaceBuilder};
use crate::error::{MeshError, MeshResult};
use crate::geometry::{Frame, Point};
use crate::mesh::Mesh;

/// Builds an arrow of shaft radius `radius` with `steps` angular slices.
///
/// The head base sits `2 * radius` behind the tip and flares to twice the
/// shaft radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowBuilder {
    from: Point,
    to: Point,
    radius: f64,
    steps: u32,
}

impl ArrowBuilder {
    /// # Errors
    ///
    /// `InvalidParameter` for fewer than three slices or a radius that is not
    /// positive and finite.
    pub fn new(from: Point, to: Point, radius: f64, steps: u32) -> MeshResult<Self> {
        if steps < MIN_ANGULAR_STEPS {
            return Err(MeshError::invalid_parameter(format!(
                "arrow needs at least {MIN_ANGULAR_STEPS} steps, got {steps}"
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "arrow radius must be positive: {radius}"
            )));
        }
        Ok(Self {
            from,
            to,
            radius,
            steps,
        })
    }

    /// Arrow with the default slice count.
    ///
    /// # Errors
    ///
    /// As [`ArrowBuilder::new`].
    pub fn with_default_steps(from: Point, to: Point, radius: f64) -> MeshResult<Self> {
        Self::new(from, to, radius, DEFAULT_ARROW_STEPS)
    }

    /// Arrow with the slice count of a shared tessellation configuration.
    ///
    /// # Errors
    ///
    /// As [`ArrowBuilder::new`].
    pub fn from_config(from: Point, to: Point, radius: f64, config: &TessellationConfig) -> MeshResult<Self> {
        Self::new(from, to, radius, config.angular_steps)
    }

    #[inline]
    fn vertex(phi: u32, z: u32) -> u32 {
        3 * phi + z + 1
    }

    /// Center of the head base.
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` if tail and tip coincide.
    pub fn head(&self) -> MeshResult<Point> {
        let frame = Frame::from_tangent(self.to - self.from)?;
        Ok(self.to - ARROW_HEAD_RADII * self.radius * frame.tangent)
    }
}

impl SurfaceBuilder for ArrowBuilder {
    fn build(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        let _span = debug_span!("arrow", steps = self.steps, radius = self.radius).entered();
        let steps = self.steps;
        builder.begin_surface(3 * steps as usize + 2, 6 * steps as usize)?;

        builder.add_vertex(self.from);

        let frame = Frame::from_tangent(self.to - self.from)?;
        let head = self.to - ARROW_HEAD_RADII * self.radius * frame.tangent;
        let deltaphi = TAU / f64::from(steps);
        for phi in 0..steps {
            let angle = f64::from(phi) * deltaphi;
            let o = self.radius * (angle.cos() * frame.binormal + angle.sin() * frame.normal);
            builder.add_vertex(self.from + o);
            builder.add_vertex(head + o);
            builder.add_vertex(head + ARROW_FLARE_FACTOR * o);
        }

        builder.add_vertex(self.to);
        let apex = builder.last_vertex()?;
        builder.phase("vertices");

        for phi in 0..steps {
            let next = (phi + 1) % steps;
            let v = Self::vertex;
            // tail cap
            builder.add_facet(0, v(phi, 0), v(next, 0))?;
            // shaft
            builder.add_facet(v(phi, 0), v(phi, 1), v(next, 0))?;
            builder.add_facet(v(next, 0), v(phi, 1), v(next, 1))?;
            // back of the head
            builder.add_facet(v(phi, 1), v(phi, 2), v(next, 1))?;
            builder.add_facet(v(next, 1), v(phi, 2), v(next, 2))?;
            // head
            builder.add_facet(v(phi, 2), apex, v(next, 2))?;
        }
        builder.phase("facets");
        Ok(())
    }
}

/// Creates an arrow mesh from `from` to `to`.
///
/// # Example
///
/// ```rust
/// use surface_mesh::primitives::create_arrow;
/// use glam::DVec3;
///
/// let mesh = create_arrow(DVec3::ZERO, DVec3::new(0.0, 0.0, 1.0), 0.03, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 50);
/// assert!(mesh.is_closed());
/// ```
pub fn create_arrow(from: Point, to: Point, radius: f64, steps: u32) -> MeshResult<Mesh> {
    ArrowBuilder::new(from, to, radius, steps)?.to_mesh()
}
