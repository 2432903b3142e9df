//! # Mesh Data Structure
//!
//! Closed triangle mesh produced by the surface builders.

use std::collections::HashMap;

use glam::{DMat4, DVec3};

/// Indexed triangle mesh in double precision.
///
/// Builders emit every facet counter-clockwise when seen from outside, so a
/// closed mesh has a positive [`signed_volume`](Mesh::signed_volume).
///
/// # Example
///
/// ```rust
/// use surface_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty mesh with room for the given counts.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices. No bounds checking happens here;
    /// [`MeshBuilder::add_facet`](crate::MeshBuilder::add_facet) is the
    /// checked entry point.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index, if any.
    #[inline]
    pub fn vertex(&self, index: u32) -> Option<DVec3> {
        self.vertices.get(index as usize).copied()
    }

    /// Returns the triangle at the given index, if any.
    #[inline]
    pub fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        self.triangles.get(index).copied()
    }

    /// Axis-aligned bounds of all vertices.
    ///
    /// Returns (min, max) corners; an empty mesh yields two zero vectors.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Signed enclosed volume (divergence theorem over the facets).
    ///
    /// Positive for a closed mesh wound outward, negative if wound inward.
    /// Facets with out-of-range indices are skipped.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .filter_map(|tri| self.corners(tri))
            .map(|[a, b, c]| a.dot(b.cross(c)))
            .sum::<f64>()
            / 6.0
    }

    /// Number of directed edges that have no oppositely directed partner.
    ///
    /// Zero means every undirected edge is used exactly twice with opposite
    /// directions, i.e. the mesh is closed and consistently oriented.
    pub fn edge_balance_defects(&self) -> usize {
        let mut balance: HashMap<(u32, u32), i64> = HashMap::new();
        for tri in &self.triangles {
            for k in 0..3 {
                let (a, b) = (tri[k], tri[(k + 1) % 3]);
                if a < b {
                    *balance.entry((a, b)).or_insert(0) += 1;
                } else {
                    *balance.entry((b, a)).or_insert(0) -= 1;
                }
            }
        }
        balance.values().map(|v| v.unsigned_abs() as usize).sum()
    }

    /// True if the mesh is non-empty, index-valid and edge balanced.
    pub fn is_closed(&self) -> bool {
        !self.triangles.is_empty() && self.validate() && self.edge_balance_defects() == 0
    }

    /// Transforms all vertices by a 4x4 matrix.
    ///
    /// A matrix with negative determinant turns the mesh inside out.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Translates the mesh by a vector.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// mesh.translate(DVec3::new(10.0, 0.0, 0.0));
    /// ```
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Appends another mesh, offsetting its indices.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Checks that every triangle index refers to an existing vertex.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;
        self.triangles
            .iter()
            .all(|tri| tri.iter().all(|&i| i < vertex_count))
    }

    pub(crate) fn corners(&self, tri: &[u32; 3]) -> Option<[DVec3; 3]> {
        Some([
            self.vertex(tri[0])?,
            self.vertex(tri[1])?,
            self.vertex(tri[2])?,
        ])
    }
}
