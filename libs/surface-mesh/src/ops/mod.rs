//! # Mesh Operations
//!
//! Boolean operations (CSG) on closed meshes, and cutting solids into named
//! parts.

pub mod boolean;
pub mod parts;

pub use boolean::{clip_half_space, difference, intersection, union, union_all, HalfSpace};
pub use parts::{Part, PartWriter};
