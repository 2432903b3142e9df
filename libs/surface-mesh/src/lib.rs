//! # Surface Mesh
//!
//! Tessellation of parametric primitives into closed, outward-wound triangle
//! meshes, plus the solid operations needed to combine them and cut them
//! into printable parts.
//!
//! ## Architecture
//!
//! ```text
//! geometry / domain / function  →  SurfaceBuilder  →  MeshBuilder  →  Mesh
//!                                                                      ↓
//!                                         ops::boolean / ops::parts / export
//! ```
//!
//! ## Builders
//!
//! - **Box**: axis-aligned, from two opposite corners
//! - **Arrow**: prism shaft with a flared conical head
//! - **Curve**: tube of fixed radius around a space curve (and straight lines)
//! - **Cartesian / polar slabs**: thickened graphs over rectangular domains
//! - **Spheres**: UV sphere and radial graphs over the sphere
//!
//! ## Usage
//!
//! ```rust
//! use surface_mesh::primitives::{create_arrow, create_box};
//! use surface_mesh::ops::difference;
//! use glam::DVec3;
//!
//! let block = create_box(DVec3::splat(-1.0), DVec3::splat(1.0)).unwrap();
//! let arrow = create_arrow(DVec3::new(0.0, 0.0, -2.0), DVec3::new(0.0, 0.0, 2.0), 0.2, 8).unwrap();
//! let drilled = difference(&block, &arrow).unwrap();
//! assert!(drilled.signed_volume() < block.signed_volume());
//! ```

pub mod builder;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod export;
pub mod function;
pub mod geometry;
pub mod mesh;
pub mod ops;
pub mod primitives;

#[cfg(test)]
mod test_support;

pub use builder::{MeshBuilder, SurfaceBuilder};
pub use diagnostics::Diagnostics;
pub use error::{MeshError, MeshResult};
pub use geometry::{Frame, Point, Vector, VectorExt, E1, E2, E3};
pub use mesh::Mesh;
pub use ops::boolean::{clip_half_space, difference, intersection, union, union_all, HalfSpace};
