//! # Polar Slab
//!
//! Thickened surface over a polar parameter domain `(r, phi)`.
//!
//! ## Topology
//!
//! Two flags of the [`PolarDomain`] select one of four shapes:
//!
//! | `closed()` | `contains0()` | shape |
//! |---|---|---|
//! | yes | yes | disc: pole fan, outer rim |
//! | yes | no | annulus: outer and inner rim |
//! | no | yes | sector: pole fan, radial walls, outer rim |
//! | no | no | annular sector: radial walls, both rims |
//!
//! A closed domain reuses the `phi = 0` samples for `phi = 2π`. A domain
//! containing the pole collapses the innermost ring into one top and one
//! bottom vertex, emitted last; grid ring 0 is then the first ring after it.

use config::constants::MIN_ANGULAR_STEPS;
use std::fmt;
use tracing::debug_span;

use crate::builder::{MeshBuilder, SurfaceBuilder};
use crate::domain::PolarDomain;
use crate::error::{MeshError, MeshResult};
use crate::function::PointFunction;
use crate::mesh::Mesh;

/// Builds a slab of thickness `h` over a polar domain.
#[derive(Clone)]
pub struct PolarSurfaceBuilder<F> {
    function: F,
    domain: PolarDomain,
    rsteps: u32,
    phisteps: u32,
    h: f64,
}

impl<F> fmt::Debug for PolarSurfaceBuilder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolarSurfaceBuilder")
            .field("domain", &self.domain)
            .field("rsteps", &self.rsteps)
            .field("phisteps", &self.phisteps)
            .field("h", &self.h)
            .finish_non_exhaustive()
    }
}

impl<F: PointFunction> PolarSurfaceBuilder<F> {
    /// # Errors
    ///
    /// `InvalidParameter` if `rsteps` or `phisteps` is zero, if a closed
    /// domain has fewer than three angular steps, or if the thickness is not
    /// positive and finite.
    pub fn new(function: F, domain: PolarDomain, rsteps: u32, phisteps: u32, h: f64) -> MeshResult<Self> {
        if rsteps == 0 || phisteps == 0 {
            return Err(MeshError::invalid_parameter(format!(
                "polar slab needs at least one step per axis, got {rsteps}x{phisteps}"
            )));
        }
        if domain.closed() && phisteps < MIN_ANGULAR_STEPS {
            return Err(MeshError::invalid_parameter(format!(
                "closed polar slab needs at least {MIN_ANGULAR_STEPS} angular steps, got {phisteps}"
            )));
        }
        if !h.is_finite() || h <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "slab thickness must be positive: {h}"
            )));
        }
        Ok(Self {
            function,
            domain,
            rsteps,
            phisteps,
            h,
        })
    }

    pub fn domain(&self) -> &PolarDomain {
        &self.domain
    }

    /// Top vertex of grid ring `r` at angular sample `phi`; the bottom vertex
    /// follows at `+1`.
    #[inline]
    fn vertex(&self, r: u32, phi: u32) -> u32 {
        if self.domain.closed() {
            let phi = if phi == self.phisteps { 0 } else { phi };
            2 * (r * self.phisteps + phi)
        } else {
            2 * (r * (self.phisteps + 1) + phi)
        }
    }

    /// Index of the outermost grid ring.
    #[inline]
    fn rlimit(&self) -> u32 {
        if self.domain.contains0() {
            self.rsteps - 1
        } else {
            self.rsteps
        }
    }

    /// Number of vertices the builder emits.
    pub fn expected_vertex_count(&self) -> usize {
        let rings = self.rlimit() as usize + 1;
        let samples = if self.domain.closed() {
            self.phisteps as usize
        } else {
            self.phisteps as usize + 1
        };
        let pole = if self.domain.contains0() { 2 } else { 0 };
        rings.saturating_mul(samples).saturating_mul(2).saturating_add(pole)
    }

    /// Number of facets the builder emits.
    pub fn expected_facet_count(&self) -> usize {
        let (rlimit, phisteps) = (self.rlimit() as usize, self.phisteps as usize);
        // grid, outer rim, and either the pole fan or the inner rim
        let mut count = (rlimit + 1).saturating_mul(phisteps).saturating_mul(4);
        if !self.domain.closed() {
            count = count.saturating_add(4 * rlimit + if self.domain.contains0() { 4 } else { 0 });
        }
        count
    }

    fn add_vertices(&self, builder: &mut MeshBuilder) {
        let half = self.h / 2.0;
        let samples = if self.domain.closed() {
            self.phisteps
        } else {
            self.phisteps + 1
        };
        let first = if self.domain.contains0() { 1 } else { 0 };
        for r in first..=self.rsteps {
            let radius = self.domain.r.sample(r, self.rsteps);
            for phi in 0..samples {
                let angle = self.domain.phi.sample(phi, self.phisteps);
                let p = self.function.point(radius, angle);
                let d = self.function.direction(radius, angle);
                builder.add_vertex(p + d * half);
                builder.add_vertex(p - d * half);
            }
        }
        if self.domain.contains0() {
            let (radius, angle) = (self.domain.r.min, self.domain.phi.min);
            let p = self.function.point(radius, angle);
            let d = self.function.direction(radius, angle);
            builder.add_vertex(p + d * half);
            builder.add_vertex(p - d * half);
        }
        builder.phase("vertices");
    }

    fn add_grid(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        for r in 0..self.rlimit() {
            for phi in 0..self.phisteps {
                let inner = self.vertex(r, phi);
                let outer = self.vertex(r + 1, phi);
                let inner_next = self.vertex(r, phi + 1);
                let outer_next = self.vertex(r + 1, phi + 1);
                builder.add_facet(inner, outer, inner_next)?;
                builder.add_facet(outer, outer_next, inner_next)?;
                builder.add_facet(inner + 1, inner_next + 1, outer + 1)?;
                builder.add_facet(outer + 1, inner_next + 1, outer_next + 1)?;
            }
        }
        builder.phase("grid");
        Ok(())
    }

    fn add_pole_fan(&self, builder: &mut MeshBuilder, top: u32, bottom: u32) -> MeshResult<()> {
        for phi in 0..self.phisteps {
            let here = self.vertex(0, phi);
            let next = self.vertex(0, phi + 1);
            builder.add_facet(top, here, next)?;
            builder.add_facet(bottom, next + 1, here + 1)?;
        }
        builder.phase("pole fan");
        Ok(())
    }

    fn add_radial_walls(&self, builder: &mut MeshBuilder, pole: Option<(u32, u32)>) -> MeshResult<()> {
        let last = self.phisteps;
        for r in 0..self.rlimit() {
            let a = self.vertex(r, 0);
            let b = self.vertex(r + 1, 0);
            builder.add_facet(a, a + 1, b)?;
            builder.add_facet(a + 1, b + 1, b)?;
        }
        if let Some((top, bottom)) = pole {
            let a = self.vertex(0, 0);
            builder.add_facet(a + 1, a, top)?;
            builder.add_facet(bottom, a + 1, top)?;
        }
        for r in 0..self.rlimit() {
            let a = self.vertex(r, last);
            let b = self.vertex(r + 1, last);
            builder.add_facet(a, b, a + 1)?;
            builder.add_facet(b, b + 1, a + 1)?;
        }
        if let Some((top, bottom)) = pole {
            let a = self.vertex(0, last);
            builder.add_facet(a, a + 1, top)?;
            builder.add_facet(a + 1, bottom, top)?;
        }
        builder.phase("radial walls");
        Ok(())
    }

    fn add_rims(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        let rim = self.rlimit();
        for phi in 0..self.phisteps {
            let a = self.vertex(rim, phi);
            let b = self.vertex(rim, phi + 1);
            builder.add_facet(a, a + 1, b + 1)?;
            builder.add_facet(a, b + 1, b)?;
        }
        if !self.domain.contains0() {
            for phi in 0..self.phisteps {
                let a = self.vertex(0, phi);
                let b = self.vertex(0, phi + 1);
                builder.add_facet(a, b, a + 1)?;
                builder.add_facet(b, b + 1, a + 1)?;
            }
        }
        builder.phase("rims");
        Ok(())
    }
}

impl<F: PointFunction> SurfaceBuilder for PolarSurfaceBuilder<F> {
    fn build(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        let _span = debug_span!(
            "polar_slab",
            closed = self.domain.closed(),
            contains0 = self.domain.contains0(),
            rsteps = self.rsteps,
            phisteps = self.phisteps,
            h = self.h
        )
        .entered();
        builder.begin_surface(self.expected_vertex_count(), self.expected_facet_count())?;
        self.add_vertices(builder);
        self.add_grid(builder)?;

        let pole = if self.domain.contains0() {
            let bottom = builder.last_vertex()?;
            Some((bottom - 1, bottom))
        } else {
            None
        };
        if let Some((top, bottom)) = pole {
            self.add_pole_fan(builder, top, bottom)?;
        }
        if !self.domain.closed() {
            self.add_radial_walls(builder, pole)?;
        }
        self.add_rims(builder)
    }
}

/// Creates a polar slab mesh.
///
/// # Example
///
/// ```rust
/// use surface_mesh::domain::{Interval, PolarDomain};
/// use surface_mesh::function::PolarHeight;
/// use surface_mesh::primitives::create_polar_surface;
///
/// let disc = PolarDomain::full(Interval::new(0.0, 1.0));
/// let mesh = create_polar_surface(PolarHeight(|r: f64, _phi: f64| r * r), disc, 5, 12, 0.1).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 * 5 * 12 + 2);
/// assert!(mesh.is_closed());
/// ```
pub fn create_polar_surface<F: PointFunction>(
    function: F,
    domain: PolarDomain,
    rsteps: u32,
    phisteps: u32,
    h: f64,
) -> MeshResult<Mesh> {
    PolarSurfaceBuilder::new(function, domain, rsteps, phisteps, h)?.to_mesh()
}
