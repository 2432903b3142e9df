//! # Box Primitive
//!
//! Axis-aligned box spanned by two opposite corners.

use glam::DVec3;
use tracing::debug_span;

use crate::builder::{MeshBuilder, SurfaceBuilder};
use crate::error::MeshResult;
use crate::geometry::Point;
use crate::mesh::Mesh;

/// Facets of the box over the fixed corner order of [`BoxBuilder::corners`].
const FACETS: [[u32; 3]; 12] = [
    // front (y = min)
    [0, 1, 3],
    [1, 5, 3],
    // back (y = max)
    [2, 4, 6],
    [4, 7, 6],
    // right (x = max)
    [1, 6, 5],
    [6, 7, 5],
    // left (x = min)
    [0, 3, 2],
    [3, 4, 2],
    // bottom (z = min)
    [0, 2, 1],
    [2, 6, 1],
    // top (z = max)
    [3, 5, 4],
    [4, 5, 7],
];

/// Builds the 8 vertices and 12 facets of an axis-aligned box.
///
/// The corners may be given in any order; they are reduced to the
/// componentwise minimum and maximum on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxBuilder {
    min: Point,
    max: Point,
}

impl BoxBuilder {
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
    }

    /// Corner positions in emission order.
    pub fn corners(&self) -> [Point; 8] {
        let (a, b) = (self.min, self.max);
        [
            DVec3::new(a.x, a.y, a.z),
            DVec3::new(b.x, a.y, a.z),
            DVec3::new(a.x, b.y, a.z),
            DVec3::new(a.x, a.y, b.z),
            DVec3::new(a.x, b.y, b.z),
            DVec3::new(b.x, a.y, b.z),
            DVec3::new(b.x, b.y, a.z),
            DVec3::new(b.x, b.y, b.z),
        ]
    }
}

impl SurfaceBuilder for BoxBuilder {
    fn build(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        let _span = debug_span!("box", min = ?self.min, max = ?self.max).entered();
        builder.begin_surface(8, 12)?;
        for corner in self.corners() {
            builder.add_vertex(corner);
        }
        builder.phase("vertices");
        for [i, j, k] in FACETS {
            builder.add_facet(i, j, k)?;
        }
        builder.phase("facets");
        Ok(())
    }
}

/// Creates a box mesh from two opposite corners.
///
/// # Example
///
/// ```rust
/// use surface_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::splat(1.0), DVec3::splat(-1.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert!(mesh.is_closed());
/// ```
pub fn create_box(a: Point, b: Point) -> MeshResult<Mesh> {
    BoxBuilder::new(a, b).to_mesh()
}
