//! # Cartesian Slab
//!
//! Thickened surface over a rectangular parameter domain.
//!
//! Each grid point `(x, y)` yields a top vertex at `p + d h/2` and a bottom
//! vertex at `p - d h/2`, where `p` and `d` are the point function's point
//! and direction. Top and bottom vertex of a grid point are adjacent:
//!
//! ```text
//! vertex(x, y)     = 2 (x (ysteps + 1) + y)   top
//! vertex(x, y) + 1                            bottom
//! ```

use std::fmt;
use tracing::debug_span;

use crate::builder::{MeshBuilder, SurfaceBuilder};
use crate::domain::CartesianDomain;
use crate::error::{MeshError, MeshResult};
use crate::function::PointFunction;
use crate::mesh::Mesh;

/// Builds a slab of thickness `h` over a Cartesian domain.
#[derive(Clone)]
pub struct CartesianSurfaceBuilder<F> {
    function: F,
    domain: CartesianDomain,
    xsteps: u32,
    ysteps: u32,
    h: f64,
}

impl<F> fmt::Debug for CartesianSurfaceBuilder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartesianSurfaceBuilder")
            .field("domain", &self.domain)
            .field("xsteps", &self.xsteps)
            .field("ysteps", &self.ysteps)
            .field("h", &self.h)
            .finish_non_exhaustive()
    }
}

impl<F: PointFunction> CartesianSurfaceBuilder<F> {
    /// # Errors
    ///
    /// `InvalidParameter` for zero steps or a thickness that is not positive
    /// and finite.
    pub fn new(function: F, domain: CartesianDomain, xsteps: u32, ysteps: u32, h: f64) -> MeshResult<Self> {
        if xsteps == 0 || ysteps == 0 {
            return Err(MeshError::invalid_parameter(format!(
                "slab needs at least one step per axis, got {xsteps}x{ysteps}"
            )));
        }
        if !h.is_finite() || h <= 0.0 {
            return Err(MeshError::invalid_parameter(format!("slab thickness must be positive: {h}")));
        }
        Ok(Self {
            function,
            domain,
            xsteps,
            ysteps,
            h,
        })
    }

    #[inline]
    fn vertex(&self, x: u32, y: u32) -> u32 {
        2 * (x * (self.ysteps + 1) + y)
    }

    fn add_vertices(&self, builder: &mut MeshBuilder) {
        let half = self.h / 2.0;
        for x in 0..=self.xsteps {
            let u = self.domain.x.sample(x, self.xsteps);
            for y in 0..=self.ysteps {
                let v = self.domain.y.sample(y, self.ysteps);
                let p = self.function.point(u, v);
                let d = self.function.direction(u, v);
                builder.add_vertex(p + d * half);
                builder.add_vertex(p - d * half);
            }
        }
        builder.phase("vertices");
    }

    fn add_grid(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        for x in 0..self.xsteps {
            for y in 0..self.ysteps {
                let v00 = self.vertex(x, y);
                let v10 = self.vertex(x + 1, y);
                let v01 = self.vertex(x, y + 1);
                let v11 = self.vertex(x + 1, y + 1);
                builder.add_facet(v00, v10, v01)?;
                builder.add_facet(v00 + 1, v01 + 1, v10 + 1)?;
                builder.add_facet(v01, v10, v11)?;
                builder.add_facet(v01 + 1, v11 + 1, v10 + 1)?;
            }
        }
        builder.phase("grid");
        Ok(())
    }

    fn add_walls(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        let (xmax, ymax) = (self.xsteps, self.ysteps);
        for x in 0..xmax {
            let a = self.vertex(x, 0);
            let b = self.vertex(x + 1, 0);
            builder.add_facet(a, a + 1, b)?;
            builder.add_facet(b, a + 1, b + 1)?;

            let a = self.vertex(x, ymax);
            let b = self.vertex(x + 1, ymax);
            builder.add_facet(a, b, a + 1)?;
            builder.add_facet(b, b + 1, a + 1)?;
        }
        for y in 0..ymax {
            let a = self.vertex(0, y);
            let b = self.vertex(0, y + 1);
            builder.add_facet(a, b, a + 1)?;
            builder.add_facet(b, b + 1, a + 1)?;

            let a = self.vertex(xmax, y);
            let b = self.vertex(xmax, y + 1);
            builder.add_facet(a, a + 1, b)?;
            builder.add_facet(a + 1, b + 1, b)?;
        }
        builder.phase("walls");
        Ok(())
    }
}

impl<F: PointFunction> SurfaceBuilder for CartesianSurfaceBuilder<F> {
    fn build(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        let _span = debug_span!(
            "cartesian_slab",
            xsteps = self.xsteps,
            ysteps = self.ysteps,
            h = self.h
        )
        .entered();
        let (xs, ys) = (self.xsteps as usize, self.ysteps as usize);
        let grid = (xs + 1).saturating_mul(ys + 1);
        builder.begin_surface(grid.saturating_mul(2), grid.saturating_mul(4))?;
        self.add_vertices(builder);
        self.add_grid(builder)?;
        self.add_walls(builder)
    }
}

/// Creates a Cartesian slab mesh.
///
/// # Example
///
/// ```rust
/// use surface_mesh::domain::{CartesianDomain, Interval};
/// use surface_mesh::function::CartesianHeight;
/// use surface_mesh::primitives::create_cartesian_surface;
///
/// let domain = CartesianDomain::new(Interval::new(-1.0, 1.0), Interval::new(-1.0, 1.0));
/// let surface = CartesianHeight(|x: f64, y: f64| x * y);
/// let mesh = create_cartesian_surface(surface, domain, 10, 10, 0.1).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 * 11 * 11);
/// assert!(mesh.is_closed());
/// ```
pub fn create_cartesian_surface<F: PointFunction>(
    function: F,
    domain: CartesianDomain,
    xsteps: u32,
    ysteps: u32,
    h: f64,
) -> MeshResult<Mesh> {
    CartesianSurfaceBuilder::new(function, domain, xsteps, ysteps, h)?.to_mesh()
}
