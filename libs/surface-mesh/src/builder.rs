//! # Mesh Builder
//!
//! Accumulator shared by every surface builder, and the [`SurfaceBuilder`]
//! trait the builders implement.
//!
//! A builder emits vertices first and facets afterwards. Facet indices are
//! checked against the number of vertices emitted so far, so a facet can
//! never dangle.

use config::constants::MAX_VERTICES;
use glam::DVec3;
use tracing::{debug, trace};

use crate::diagnostics::Diagnostics;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Collects vertices and facets for one builder invocation.
///
/// # Example
///
/// ```rust
/// use surface_mesh::MeshBuilder;
/// use glam::DVec3;
///
/// let mut builder = MeshBuilder::new();
/// builder.add_vertex(DVec3::ZERO);
/// builder.add_vertex(DVec3::X);
/// builder.add_vertex(DVec3::Y);
/// builder.add_facet(0, 1, 2).unwrap();
/// assert!(builder.add_facet(0, 1, 3).is_err());
/// assert_eq!(builder.facet_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MeshBuilder {
    mesh: Mesh,
    diagnostics: Diagnostics,
    pending: Vec<u32>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accumulator that reports through `diagnostics`.
    pub fn with_diagnostics(diagnostics: Diagnostics) -> Self {
        Self {
            mesh: Mesh::new(),
            diagnostics,
            pending: Vec::new(),
        }
    }

    #[inline]
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    /// Clears vertices and facets and pre-allocates for the coming surface.
    ///
    /// # Errors
    ///
    /// `TooManyVertices` if `vertex_capacity` exceeds `MAX_VERTICES`.
    pub fn begin_surface(&mut self, vertex_capacity: usize, facet_capacity: usize) -> MeshResult<()> {
        if vertex_capacity > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertex_capacity,
                max: MAX_VERTICES,
            });
        }
        self.mesh = Mesh::with_capacity(vertex_capacity, facet_capacity);
        self.pending.clear();
        Ok(())
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, point: DVec3) -> u32 {
        let index = self.mesh.add_vertex(point);
        if self.diagnostics.emissions_enabled() {
            trace!(index, x = point.x, y = point.y, z = point.z, "vertex");
        }
        index
    }

    pub fn add_vertex_xyz(&mut self, x: f64, y: f64, z: f64) -> u32 {
        self.add_vertex(DVec3::new(x, y, z))
    }

    /// Appends a facet with the given winding.
    ///
    /// # Errors
    ///
    /// `InvalidVertexIndex` if any index is not below `vertex_count()`. The
    /// mesh is left untouched in that case.
    pub fn add_facet(&mut self, i: u32, j: u32, k: u32) -> MeshResult<()> {
        let vertex_count = self.vertex_count();
        if let Some(&index) = [i, j, k].iter().find(|&&index| index >= vertex_count) {
            return Err(MeshError::InvalidVertexIndex {
                index,
                vertex_count,
            });
        }
        self.mesh.add_triangle(i, j, k);
        if self.diagnostics.emissions_enabled() {
            trace!(i, j, k, "facet");
        }
        Ok(())
    }

    /// Starts a facet to be given corner by corner.
    ///
    /// Discards corners of a facet that was begun but never ended.
    pub fn begin_facet(&mut self) {
        self.pending.clear();
    }

    /// Adds one corner to the facet opened by [`begin_facet`](Self::begin_facet).
    ///
    /// # Errors
    ///
    /// `InvalidVertexIndex` if `index` is not below `vertex_count()`.
    pub fn add_vertex_to_facet(&mut self, index: u32) -> MeshResult<()> {
        let vertex_count = self.vertex_count();
        if index >= vertex_count {
            return Err(MeshError::InvalidVertexIndex {
                index,
                vertex_count,
            });
        }
        self.pending.push(index);
        Ok(())
    }

    /// Closes the open facet.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless exactly three corners were given.
    pub fn end_facet(&mut self) -> MeshResult<()> {
        let corners = std::mem::take(&mut self.pending);
        match corners.as_slice() {
            &[i, j, k] => self.add_facet(i, j, k),
            other => Err(MeshError::invalid_parameter(format!(
                "facet needs 3 corners, got {}",
                other.len()
            ))),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.mesh.vertex_count() as u32
    }

    #[inline]
    pub fn facet_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Index of the most recently emitted vertex.
    ///
    /// # Errors
    ///
    /// `InvalidVertexIndex` if nothing has been emitted yet.
    pub fn last_vertex(&self) -> MeshResult<u32> {
        self.vertex_count()
            .checked_sub(1)
            .ok_or(MeshError::InvalidVertexIndex {
                index: 0,
                vertex_count: 0,
            })
    }

    /// Logs a phase summary when summaries are enabled.
    pub fn phase(&self, name: &str) {
        if self.diagnostics.summaries_enabled() {
            debug!(
                phase = name,
                vertices = self.vertex_count(),
                facets = self.facet_count(),
                "surface phase done"
            );
        }
    }

    /// Hands out the accumulated mesh and leaves the builder empty.
    pub fn finish(&mut self) -> Mesh {
        self.pending.clear();
        std::mem::take(&mut self.mesh)
    }

    /// Ends the surface: logs the totals and hands out the mesh.
    pub fn end_surface(&mut self) -> Mesh {
        self.phase("surface");
        self.finish()
    }
}

/// A parametric description that can emit itself into a [`MeshBuilder`].
pub trait SurfaceBuilder {
    /// Emits all vertices and facets of the surface.
    fn build(&self, builder: &mut MeshBuilder) -> MeshResult<()>;

    /// Builds a fresh mesh without diagnostics.
    fn to_mesh(&self) -> MeshResult<Mesh> {
        self.to_mesh_with(Diagnostics::default())
    }

    /// Builds a fresh mesh reporting through `diagnostics`.
    fn to_mesh_with(&self, diagnostics: Diagnostics) -> MeshResult<Mesh> {
        let mut builder = MeshBuilder::with_diagnostics(diagnostics);
        self.build(&mut builder)?;
        Ok(builder.end_surface())
    }
}
