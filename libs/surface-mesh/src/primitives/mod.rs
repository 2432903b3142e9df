//! # Primitives
//!
//! Surface builders for boxes, arrows, tubes, slabs and spheres.
//!
//! Every builder implements [`SurfaceBuilder`](crate::SurfaceBuilder) and
//! produces a closed mesh whose facets are wound counter-clockwise when seen
//! from outside. The `create_*` functions are shorthands for
//! `Builder::new(..).to_mesh()`.

pub mod arrow;
pub mod cartesian;
pub mod cuboid;
pub mod curve;
pub mod icosahedral;
pub mod polar;
pub mod spherical;

pub use arrow::{create_arrow, ArrowBuilder};
pub use cartesian::{create_cartesian_surface, CartesianSurfaceBuilder};
pub use cuboid::{create_box, BoxBuilder};
pub use curve::{create_line, create_tube, CurveBuilder, LineBuilder};
pub use icosahedral::IcosahedralSphereBuilder;
pub use polar::{create_polar_surface, PolarSurfaceBuilder};
pub use spherical::{create_sphere, SphereBuilder, SphericalSurfaceBuilder};
