//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry over closed meshes using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine; result.invert()
//! - Intersection: A.invert(); B.clipTo(A); B.invert(); A.clipTo(B); B.clipTo(A); combine; result.invert()
//!
//! Results are closed as point sets but may carry T-junctions where a facet
//! of one operand was split and its neighbour was not.
//!
//! ## Example
//!
//! ```rust
//! use surface_mesh::ops::boolean::difference;
//! use surface_mesh::primitives::create_box;
//! use glam::DVec3;
//!
//! let a = create_box(DVec3::splat(-1.0), DVec3::splat(1.0)).unwrap();
//! let b = create_box(DVec3::ZERO, DVec3::splat(2.0)).unwrap();
//! let result = difference(&a, &b).unwrap();
//! assert!((result.signed_volume() - 7.0).abs() < 1e-6);
//! ```

mod bsp;
mod plane;
mod polygon;

use std::collections::HashMap;

use config::constants::COORDINATE_SCALE;
use glam::{DMat4, DVec3};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{MeshError, MeshResult};
use crate::geometry::{Frame, Point, Vector, VectorExt};
use crate::mesh::Mesh;
use crate::primitives::create_box;
use bsp::BspTree;
use polygon::Polygon;

#[cfg(test)]
mod tests;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compute union of two meshes.
///
/// # Errors
///
/// `BooleanFailed` if either mesh has dangling facet indices.
pub fn union(a: &Mesh, b: &Mesh) -> MeshResult<Mesh> {
    let polys_a = checked_polygons(a, "union")?;
    let polys_b = checked_polygons(b, "union")?;

    if polys_a.is_empty() {
        return Ok(b.clone());
    }
    if polys_b.is_empty() {
        return Ok(a.clone());
    }

    let tree = union_trees(BspTree::new(polys_a), BspTree::new(polys_b));
    let result = polygons_to_mesh(&tree.into_polygons());
    debug!(triangles = result.triangle_count(), "union done");
    Ok(result)
}

/// Compute difference of two meshes (A - B).
///
/// # Errors
///
/// `BooleanFailed` if either mesh has dangling facet indices.
pub fn difference(a: &Mesh, b: &Mesh) -> MeshResult<Mesh> {
    let polys_a = checked_polygons(a, "difference")?;
    let polys_b = checked_polygons(b, "difference")?;

    if polys_a.is_empty() {
        return Ok(Mesh::new());
    }
    if polys_b.is_empty() {
        return Ok(a.clone());
    }

    let mut tree_a = BspTree::new(polys_a);
    let mut tree_b = BspTree::new(polys_b);

    // A - B = ~(~A | B)
    tree_a.invert();
    tree_a.clip_to(&tree_b);
    tree_b.clip_to(&tree_a);
    tree_b.invert();
    tree_b.clip_to(&tree_a);
    tree_b.invert();

    let result = polygons_to_mesh(&inverted(combine(tree_a, tree_b)));
    debug!(triangles = result.triangle_count(), "difference done");
    Ok(result)
}

/// Compute intersection of two meshes.
///
/// # Errors
///
/// `BooleanFailed` if either mesh has dangling facet indices.
pub fn intersection(a: &Mesh, b: &Mesh) -> MeshResult<Mesh> {
    let polys_a = checked_polygons(a, "intersection")?;
    let polys_b = checked_polygons(b, "intersection")?;

    if polys_a.is_empty() || polys_b.is_empty() {
        return Ok(Mesh::new());
    }

    let mut tree_a = BspTree::new(polys_a);
    let mut tree_b = BspTree::new(polys_b);

    // A & B = ~(~A | ~B)
    tree_a.invert();
    tree_b.clip_to(&tree_a);
    tree_b.invert();
    tree_a.clip_to(&tree_b);
    tree_b.clip_to(&tree_a);

    let result = polygons_to_mesh(&inverted(combine(tree_a, tree_b)));
    debug!(triangles = result.triangle_count(), "intersection done");
    Ok(result)
}

/// Union of many meshes.
///
/// The BSP trees of all inputs are built in parallel, then folded left to
/// right. An empty slice yields an empty mesh.
///
/// # Errors
///
/// `BooleanFailed` if any mesh has dangling facet indices.
pub fn union_all(meshes: &[Mesh]) -> MeshResult<Mesh> {
    let trees = meshes
        .par_iter()
        .map(|mesh| checked_polygons(mesh, "union_all"))
        .filter(|polys| polys.as_ref().map_or(true, |p| !p.is_empty()))
        .map(|polys| polys.map(BspTree::new))
        .collect::<MeshResult<Vec<_>>>()?;
    debug!(inputs = meshes.len(), solids = trees.len(), "union_all trees built");

    let Some(tree) = trees.into_iter().reduce(union_trees) else {
        return Ok(Mesh::new());
    };
    Ok(polygons_to_mesh(&tree.into_polygons()))
}

/// Closed half-space `normal · p <= offset`.
///
/// `normal` is kept at unit length, so `offset` is the signed distance of the
/// boundary plane from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfSpace {
    normal: Vector,
    offset: f64,
}

impl HalfSpace {
    /// Half-space `normal · p <= offset`; `normal` need not be unit length.
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` if `normal` has zero length.
    pub fn new(normal: Vector, offset: f64) -> MeshResult<Self> {
        let length = normal.length();
        let normal = normal.unit("half-space normal")?;
        Ok(Self {
            normal,
            offset: offset / length,
        })
    }

    /// Half-space bounded by the plane through `point`, with `outward`
    /// pointing away from the kept side.
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` if `outward` has zero length.
    pub fn through(point: Point, outward: Vector) -> MeshResult<Self> {
        let normal = outward.unit("half-space normal")?;
        Ok(Self {
            normal,
            offset: normal.dot(point),
        })
    }

    /// Half-space with a normal the caller guarantees to be unit length.
    pub(crate) const fn from_unit_normal(normal: Vector, offset: f64) -> Self {
        Self { normal, offset }
    }

    #[inline]
    pub fn normal(&self) -> Vector {
        self.normal
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Positive outside, negative inside.
    #[inline]
    pub fn signed_distance(&self, point: Point) -> f64 {
        self.normal.dot(point) - self.offset
    }

    pub fn contains(&self, point: Point) -> bool {
        self.signed_distance(point) <= 0.0
    }

    /// The complementary half-space sharing the same boundary plane.
    pub fn complement(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }
}

/// Keeps the part of `mesh` inside `half_space`.
///
/// The half-space is stood in for by a box aligned with its boundary plane
/// and large enough to hold the whole mesh, which is then intersected with
/// the mesh.
///
/// # Errors
///
/// `BooleanFailed` if the mesh has dangling facet indices.
pub fn clip_half_space(mesh: &Mesh, half_space: &HalfSpace) -> MeshResult<Mesh> {
    if !mesh.validate() {
        return Err(MeshError::boolean_failed("half-space clip: mesh has dangling facet indices"));
    }
    let Some((nearest, farthest)) = mesh
        .vertices()
        .iter()
        .map(|v| half_space.signed_distance(*v))
        .fold(None, |acc: Option<(f64, f64)>, d| match acc {
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
            None => Some((d, d)),
        })
    else {
        return Ok(Mesh::new());
    };

    if farthest <= 0.0 {
        debug!("half-space contains the whole mesh");
        return Ok(mesh.clone());
    }
    if nearest >= 0.0 {
        debug!("half-space misses the mesh");
        return Ok(Mesh::new());
    }

    let (min, max) = mesh.bounding_box();
    let center = (min + max) * 0.5;
    let reach = (max - min).length() + 1.0;

    // local x runs along the normal, local x = 0 is the boundary plane
    let frame = Frame::from_tangent(half_space.normal())?;
    let origin = center - half_space.normal() * half_space.signed_distance(center);
    let placement = DMat4::from_cols(
        frame.tangent.extend(0.0),
        frame.normal.extend(0.0),
        frame.binormal.extend(0.0),
        origin.extend(1.0),
    );
    let mut slab = create_box(
        DVec3::new(nearest - 1.0, -reach, -reach),
        DVec3::new(0.0, reach, reach),
    )?;
    slab.transform(&placement);

    intersection(mesh, &slab)
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

fn checked_polygons(mesh: &Mesh, operation: &str) -> MeshResult<Vec<Polygon>> {
    if !mesh.validate() {
        return Err(MeshError::boolean_failed(format!(
            "{operation}: mesh has dangling facet indices"
        )));
    }
    Ok(mesh_to_polygons(mesh))
}

/// Each triangle becomes a polygon; degenerate triangles are dropped.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    mesh.triangles()
        .iter()
        .filter_map(|tri| mesh.corners(tri))
        .filter_map(|corners| Polygon::from_vertices(corners.to_vec()))
        .collect()
}

/// Fan-triangulates the polygons, welding vertices that agree after
/// quantization to `1 / COORDINATE_SCALE`.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::with_capacity(polygons.len() * 2, polygons.len() * 2);
    let mut welded: HashMap<(i64, i64, i64), u32> = HashMap::new();
    let mut index_of = |mesh: &mut Mesh, v: DVec3| {
        let key = (
            (v.x * COORDINATE_SCALE).round() as i64,
            (v.y * COORDINATE_SCALE).round() as i64,
            (v.z * COORDINATE_SCALE).round() as i64,
        );
        *welded.entry(key).or_insert_with(|| mesh.add_vertex(v))
    };

    for poly in polygons {
        let indices: Vec<u32> = poly.vertices().iter().map(|v| index_of(&mut mesh, *v)).collect();
        for i in 1..indices.len().saturating_sub(1) {
            let (a, b, c) = (indices[0], indices[i], indices[i + 1]);
            // collapsed by welding
            if a == b || b == c || a == c {
                continue;
            }
            mesh.add_triangle(a, b, c);
        }
    }
    mesh
}

fn union_trees(mut a: BspTree, mut b: BspTree) -> BspTree {
    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(b.into_polygons());
    a
}

fn combine(a: BspTree, b: BspTree) -> Vec<Polygon> {
    let mut polygons = a.into_polygons();
    polygons.extend(b.into_polygons());
    polygons
}

fn inverted(mut polygons: Vec<Polygon>) -> Vec<Polygon> {
    for poly in &mut polygons {
        poly.flip();
    }
    polygons
}
