//! # Icosahedral Sphere
//!
//! Placeholder for a sphere refined from an icosahedron. Building it always
//! fails with [`MeshError::NotImplemented`]; use
//! [`SphereBuilder`](super::SphereBuilder) instead.

use tracing::warn;

use crate::builder::{MeshBuilder, SurfaceBuilder};
use crate::error::{MeshError, MeshResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcosahedralSphereBuilder {
    pub radius: f64,
    pub subdivisions: u32,
}

impl IcosahedralSphereBuilder {
    pub fn new(radius: f64, subdivisions: u32) -> Self {
        Self {
            radius,
            subdivisions,
        }
    }
}

impl SurfaceBuilder for IcosahedralSphereBuilder {
    fn build(&self, builder: &mut MeshBuilder) -> MeshResult<()> {
        if builder.diagnostics().summaries_enabled() {
            warn!(radius = self.radius, "icosahedral sphere requested");
        }
        Err(MeshError::not_implemented("icosahedral sphere"))
    }
}
