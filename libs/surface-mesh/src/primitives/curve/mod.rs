//! # Tube Primitive
//!
//! Closed tube of constant radius around a space curve.
//!
//! Rings of `phisteps` points are placed at `steps + 1` equally spaced
//! parameters, each in the plane spanned by the curve's normal and binormal.
//! Two apex vertices at the curve's end points close the tube with fans.

use config::constants::{TessellationConfig, MIN_ANGULAR_STEPS};
use std::f64::consts::TAU;
use std::fmt;
use tracing::debug_span;

use crate::builder::{MeshBuilder, SurfaceBuilder};
use crate::domain::Interval;
use crate::error::{MeshError, MeshResult};
use crate::function::{CurveFunction, Line, SampledCurve};
use crate::geometry::Point;
use crate::mesh::Mesh;

/// Builds a tube around `curve` over `interval`.
#[derive(Clone)]
pub struct CurveBuilder<C> {
    curve: C,
    interval: Interval,
    steps: u32,
    phisteps: u32,
    radius: f64,
}

impl<C> fmt::Debug for CurveBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveBuilder")
            .field("interval", &self.interval)
            .field("steps", &self.steps)
            .field("phisteps", &self.phisteps)
            .field("radius", &self.radius)
            .finish_non_exhaustive()
    }
}

impl<C: CurveFunction> CurveBuilder<C> {
    /// # Errors
    ///
    /// `InvalidParameter` for fewer than three ring points or a radius that
    /// is not positive and finite.
    pub fn new(curve: C, interval: Interval, steps: u32, phisteps: u32, radius: f64) -> MeshResult<Self> {
        if phisteps < MIN_ANGULAR_STEPS {
            return Err(MeshError::invalid_parameter(format!(
                "tube needs at least {MIN_ANGULAR_STEPS} ring points, got {phisteps}"
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "tube radius must be positive: {radius}"
            )));
        }
        Ok(Self {
            curve,
            interval,
            steps,
            phisteps,
            radius,
        })
    }

    /// Tube with ring points and derivative step taken from a shared
    /// tessellation configuration.
    ///
    /// # Errors
    ///
    /// As [`CurveBuilder::new`], plus `InvalidParameter` for a step the
    /// configuration did not validate.
    pub fn from_config(
        curve: C,
        interval: Interval,
        steps: u32,
        radius: f64,
        config: &TessellationConfig,
    ) -> MeshResult<CurveBuilder<SampledCurve<C>>> {
        let curve = SampledCurve::new(curve, config.curve_delta_t)?;
        CurveBuilder::new(curve, interval, steps, config.angular_steps, radius)
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    #[inline]
    fn vertex(&self, t: u32, phi: u32) -> u32 {
        t * self.phisteps + (phi % self.phisteps) + 1
    }
}

impl<C: CurveFunction> SurfaceBuilder for CurveBuilder<C> {
    fn build(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        let _span = debug_span!(
            "tube",
            steps = self.steps,
            phisteps = self.phisteps,
            radius = self.radius
        )
        .entered();
        let (steps, phisteps) = (self.steps, self.phisteps);
        let rings = if steps == 0 { 0 } else { steps as usize + 1 };
        let grid = rings.saturating_mul(phisteps as usize);
        builder.begin_surface(grid.saturating_add(2), grid.saturating_mul(2))?;

        builder.add_vertex(self.curve.position(self.interval.min));
        if steps == 0 {
            builder.add_vertex(self.curve.position(self.interval.max));
            builder.phase("vertices");
            return Ok(());
        }

        let deltaphi = TAU / f64::from(phisteps);
        for t in 0..=steps {
            let param = self.interval.sample(t, steps);
            let center = self.curve.position(param);
            let frame = self.curve.frenet_frame(param)?;
            for phi in 0..phisteps {
                builder.add_vertex(center + frame.circle_offset(self.radius, f64::from(phi) * deltaphi));
            }
        }

        builder.add_vertex(self.curve.position(self.interval.max));
        let end = builder.last_vertex()?;
        builder.phase("vertices");

        for phi in 0..phisteps {
            builder.add_facet(0, self.vertex(0, phi + 1), self.vertex(0, phi))?;
        }
        builder.phase("start cap");

        for t in 0..steps {
            for phi in 0..phisteps {
                let a = self.vertex(t, phi);
                let b = self.vertex(t + 1, phi);
                let c = self.vertex(t, phi + 1);
                let d = self.vertex(t + 1, phi + 1);
                builder.add_facet(a, c, b)?;
                builder.add_facet(c, d, b)?;
            }
        }
        builder.phase("bands");

        for phi in 0..phisteps {
            builder.add_facet(end, self.vertex(steps, phi), self.vertex(steps, phi + 1))?;
        }
        builder.phase("end cap");
        Ok(())
    }
}

/// Straight tube between two points, one band long.
#[derive(Debug, Clone)]
pub struct LineBuilder {
    inner: CurveBuilder<Line>,
}

impl LineBuilder {
    /// # Errors
    ///
    /// As [`CurveBuilder::new`].
    pub fn new(line: Line, interval: Interval, phisteps: u32, radius: f64) -> MeshResult<Self> {
        Ok(Self {
            inner: CurveBuilder::new(line, interval, 1, phisteps, radius)?,
        })
    }

    /// Tube from `from` to `to`.
    ///
    /// # Errors
    ///
    /// As [`CurveBuilder::new`].
    pub fn between(from: Point, to: Point, phisteps: u32, radius: f64) -> MeshResult<Self> {
        Self::new(Line::between(from, to), Interval::new(0.0, 1.0), phisteps, radius)
    }
}

impl SurfaceBuilder for LineBuilder {
    fn build(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        self.inner.build(builder)
    }
}

/// Creates a tube mesh around `curve`.
pub fn create_tube<C: CurveFunction>(
    curve: C,
    interval: Interval,
    steps: u32,
    phisteps: u32,
    radius: f64,
) -> MeshResult<Mesh> {
    CurveBuilder::new(curve, interval, steps, phisteps, radius)?.to_mesh()
}

/// Creates a straight tube mesh from `from` to `to`.
///
/// # Example
///
/// ```rust
/// use surface_mesh::primitives::create_line;
/// use glam::DVec3;
///
/// let mesh = create_line(DVec3::ZERO, DVec3::X, 8, 0.1).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 * 8 + 2);
/// assert!(mesh.is_closed());
/// ```
pub fn create_line(from: Point, to: Point, phisteps: u32, radius: f64) -> MeshResult<Mesh> {
    LineBuilder::between(from, to, phisteps, radius)?.to_mesh()
}

#[cfg(test)]
mod tests;
