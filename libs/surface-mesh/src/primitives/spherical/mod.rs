//! # Spherical Surfaces
//!
//! Latitude-longitude tessellation of spheres and of star-shaped surfaces
//! given by a radius function `f(theta, phi)`.
//!
//! With `delta = π / (2 steps)` there are `2 steps - 1` latitude rings of
//! `4 steps` points each, plus one vertex per pole:
//!
//! ```text
//! 0                                     north pole
//! 4 steps (theta - 1) + phi + 1         ring theta, sample phi
//! last                                  south pole
//! ```

use std::f64::consts::PI;
use std::fmt;
use tracing::debug_span;

use crate::builder::{MeshBuilder, SurfaceBuilder};
use crate::error::{MeshError, MeshResult};
use crate::function::SphericalFunction;
use crate::mesh::Mesh;

/// Builds a sphere of `radius` around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereBuilder {
    radius: f64,
    steps: u32,
}

impl SphereBuilder {
    /// # Errors
    ///
    /// `InvalidParameter` for zero steps or a radius that is not positive
    /// and finite.
    pub fn new(radius: f64, steps: u32) -> MeshResult<Self> {
        check_steps(steps)?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "sphere radius must be positive: {radius}"
            )));
        }
        Ok(Self { radius, steps })
    }
}

impl SurfaceBuilder for SphereBuilder {
    fn build(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        let _span = debug_span!("sphere", radius = self.radius, steps = self.steps).entered();
        let radius = self.radius;
        emit(builder, self.steps, |_theta, _phi| radius)
    }
}

/// Builds the surface `r = f(theta, phi)` in spherical coordinates.
///
/// `theta` is the polar angle from the north pole, `phi` the azimuth.
#[derive(Clone)]
pub struct SphericalSurfaceBuilder<F> {
    function: F,
    steps: u32,
}

impl<F> fmt::Debug for SphericalSurfaceBuilder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SphericalSurfaceBuilder")
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

impl<F: SphericalFunction> SphericalSurfaceBuilder<F> {
    /// # Errors
    ///
    /// `InvalidParameter` for zero steps.
    pub fn new(function: F, steps: u32) -> MeshResult<Self> {
        check_steps(steps)?;
        Ok(Self { function, steps })
    }
}

impl<F: SphericalFunction> SurfaceBuilder for SphericalSurfaceBuilder<F> {
    fn build(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        let _span = debug_span!("spherical_surface", steps = self.steps).entered();
        emit(builder, self.steps, |theta, phi| self.function.radius(theta, phi))
    }
}

fn check_steps(steps: u32) -> MeshResult<()> {
    if steps == 0 {
        return Err(MeshError::invalid_parameter("spherical surface needs at least one step"));
    }
    Ok(())
}

fn emit(builder: &mut MeshBuilder, steps: u32, radius: impl Fn(f64, f64) -> f64) -> MeshResult<()> {
    // sized in usize so oversized step counts hit the vertex limit, not u32 overflow
    let grid = (4 * steps as usize).saturating_mul(2 * steps as usize - 1);
    builder.begin_surface(grid.saturating_add(2), grid.saturating_mul(2))?;
    let ring = 4 * steps;
    let rings = 2 * steps - 1;

    let delta = PI / f64::from(2 * steps);
    builder.add_vertex_xyz(0.0, 0.0, radius(0.0, 0.0));
    for theta in 1..2 * steps {
        let angle = f64::from(theta) * delta;
        let (sin_theta, cos_theta) = angle.sin_cos();
        for phi in 0..ring {
            let azimuth = f64::from(phi) * delta;
            let r = radius(angle, azimuth);
            let st = r * sin_theta;
            builder.add_vertex_xyz(st * azimuth.cos(), st * azimuth.sin(), r * cos_theta);
        }
    }
    builder.add_vertex_xyz(0.0, 0.0, -radius(PI, 0.0));
    builder.phase("vertices");

    for i in 1..ring {
        builder.add_facet(0, i, i + 1)?;
    }
    builder.add_facet(0, ring, 1)?;
    builder.phase("north cap");

    let south = builder.last_vertex()?;
    for i in 1..ring {
        builder.add_facet(south, south - i, south - i - 1)?;
    }
    builder.add_facet(south, south - ring, south - 1)?;
    builder.phase("south cap");

    for theta in 1..rings {
        let t = ring * (theta - 1) + 1;
        for phi in 0..ring - 1 {
            builder.add_facet(t + phi, t + phi + ring, t + phi + 1)?;
            builder.add_facet(t + phi + 1, t + phi + ring, t + phi + ring + 1)?;
        }
        builder.add_facet(t, t + ring - 1, t + 2 * ring - 1)?;
        builder.add_facet(t, t + 2 * ring - 1, t + ring)?;
    }
    builder.phase("strips");
    Ok(())
}

/// Creates a sphere mesh.
///
/// # Example
///
/// ```rust
/// use surface_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(2.0, 3).unwrap();
/// assert_eq!(mesh.vertex_count(), 5 * 12 + 2);
/// assert!(mesh.is_closed());
/// ```
pub fn create_sphere(radius: f64, steps: u32) -> MeshResult<Mesh> {
    SphereBuilder::new(radius, steps)?.to_mesh()
}
