//! Shared assertions for builder tests.

use crate::mesh::Mesh;

/// Asserts the mesh is index-valid, edge balanced and wound outward.
pub fn assert_closed_outward(mesh: &Mesh) {
    assert!(mesh.validate(), "mesh has dangling facet indices");
    assert_eq!(
        mesh.edge_balance_defects(),
        0,
        "mesh has unpaired directed edges"
    );
    let volume = mesh.signed_volume();
    assert!(volume > 0.0, "mesh is wound inward (volume {volume})");
}

/// Asserts every vertex lies within `tolerance` of distance `radius` from the origin.
pub fn assert_on_sphere(mesh: &Mesh, radius: f64, tolerance: f64) {
    for v in mesh.vertices() {
        let distance = v.length();
        assert!(
            (distance - radius).abs() <= tolerance,
            "vertex {v} at distance {distance}, expected {radius}"
        );
    }
}
