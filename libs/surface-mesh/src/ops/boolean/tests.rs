//! # Boolean Operation Tests

use super::*;
use approx::assert_relative_eq;

/// Cube of edge `size` centered at `center`.
fn cube_at(center: DVec3, size: f64) -> Mesh {
    let half = DVec3::splat(size / 2.0);
    create_box(center - half, center + half).unwrap()
}

fn broken_mesh() -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_vertex(DVec3::ZERO);
    mesh.add_triangle(0, 1, 2);
    mesh
}

// =============================================================================
// UNION TESTS
// =============================================================================

#[test]
fn test_union_empty_a() {
    let b = cube_at(DVec3::ZERO, 1.0);
    let result = union(&Mesh::new(), &b).unwrap();
    assert_eq!(result, b);
}

#[test]
fn test_union_empty_b() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let result = union(&a, &Mesh::new()).unwrap();
    assert_eq!(result, a);
}

#[test]
fn test_union_non_overlapping() {
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);
    let result = union(&a, &b).unwrap();
    assert_eq!(result.vertex_count(), 16);
    assert_eq!(result.triangle_count(), 24);
    assert!(result.is_closed());
    assert_relative_eq!(result.signed_volume(), 2.0, epsilon = 1e-9);
}

#[test]
fn test_union_overlapping() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);
    let result = union(&a, &b).unwrap();
    assert_relative_eq!(result.signed_volume(), 12.0, epsilon = 1e-6);
    let (min, max) = result.bounding_box();
    assert_relative_eq!(min.x, -1.0, epsilon = 1e-9);
    assert_relative_eq!(max.x, 2.0, epsilon = 1e-9);
}

#[test]
fn test_union_rejects_dangling_indices() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let err = union(&a, &broken_mesh()).unwrap_err();
    assert!(matches!(err, MeshError::BooleanFailed { .. }));
}

// =============================================================================
// DIFFERENCE TESTS
// =============================================================================

#[test]
fn test_difference_empty_operands() {
    let a = cube_at(DVec3::ZERO, 1.0);
    assert!(difference(&Mesh::new(), &a).unwrap().is_empty());
    assert_eq!(difference(&a, &Mesh::new()).unwrap(), a);
}

#[test]
fn test_difference_overlapping() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);
    let result = difference(&a, &b).unwrap();
    assert_relative_eq!(result.signed_volume(), 4.0, epsilon = 1e-6);
    let (min, max) = result.bounding_box();
    assert_relative_eq!(min.x, -1.0, epsilon = 1e-9);
    assert_relative_eq!(max.x, 0.0, epsilon = 1e-9);
}

#[test]
fn test_difference_hole() {
    let a = cube_at(DVec3::ZERO, 4.0);
    let b = cube_at(DVec3::ZERO, 2.0);
    let result = difference(&a, &b).unwrap();
    assert_relative_eq!(result.signed_volume(), 64.0 - 8.0, epsilon = 1e-6);
}

#[test]
fn test_difference_disjoint_keeps_a() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);
    let result = difference(&a, &b).unwrap();
    assert_relative_eq!(result.signed_volume(), 1.0, epsilon = 1e-9);
    assert!(result.is_closed());
}

// =============================================================================
// INTERSECTION TESTS
// =============================================================================

#[test]
fn test_intersection_empty_operand() {
    let a = cube_at(DVec3::ZERO, 1.0);
    assert!(intersection(&a, &Mesh::new()).unwrap().is_empty());
    assert!(intersection(&Mesh::new(), &a).unwrap().is_empty());
}

#[test]
fn test_intersection_overlapping() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);
    let result = intersection(&a, &b).unwrap();
    assert_relative_eq!(result.signed_volume(), 4.0, epsilon = 1e-6);
    let (min, max) = result.bounding_box();
    assert_relative_eq!(min.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(max.x, 1.0, epsilon = 1e-9);
}

#[test]
fn test_intersection_disjoint_is_empty() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);
    let result = intersection(&a, &b).unwrap();
    assert_eq!(result.triangle_count(), 0);
}

// =============================================================================
// UNION_ALL TESTS
// =============================================================================

#[test]
fn test_union_all_empty_slice() {
    assert!(union_all(&[]).unwrap().is_empty());
}

#[test]
fn test_union_all_disjoint() {
    let meshes: Vec<Mesh> = (0..4)
        .map(|i| cube_at(DVec3::new(f64::from(i) * 3.0, 0.0, 0.0), 1.0))
        .collect();
    let result = union_all(&meshes).unwrap();
    assert_relative_eq!(result.signed_volume(), 4.0, epsilon = 1e-9);
}

#[test]
fn test_union_all_matches_pairwise_union() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);
    let all = union_all(&[a.clone(), Mesh::new(), b.clone()]).unwrap();
    let pair = union(&a, &b).unwrap();
    assert_relative_eq!(all.signed_volume(), pair.signed_volume(), epsilon = 1e-9);
}

#[test]
fn test_union_all_rejects_dangling_indices() {
    let err = union_all(&[cube_at(DVec3::ZERO, 1.0), broken_mesh()]).unwrap_err();
    assert!(matches!(err, MeshError::BooleanFailed { .. }));
}

// =============================================================================
// HALF-SPACE TESTS
// =============================================================================

#[test]
fn test_half_space_new_normalizes() {
    let half_space = HalfSpace::new(DVec3::new(0.0, 0.0, 2.0), 1.0).unwrap();
    assert_relative_eq!(half_space.normal().z, 1.0);
    assert_relative_eq!(half_space.offset(), 0.5);
    assert!(half_space.contains(DVec3::new(3.0, 3.0, 0.5)));
    assert!(!half_space.contains(DVec3::new(0.0, 0.0, 0.6)));
}

#[test]
fn test_half_space_zero_normal() {
    let err = HalfSpace::new(DVec3::ZERO, 1.0).unwrap_err();
    assert!(matches!(err, MeshError::DegenerateGeometry { .. }));
}

#[test]
fn test_half_space_complement() {
    let half_space = HalfSpace::through(DVec3::new(0.0, 0.0, 0.5), DVec3::Z).unwrap();
    let other = half_space.complement();
    assert!(half_space.contains(DVec3::ZERO));
    assert!(!other.contains(DVec3::ZERO));
    assert!(other.contains(DVec3::Z));
}

#[test]
fn test_clip_half_space_box() {
    let cube = cube_at(DVec3::ZERO, 2.0);
    let half_space = HalfSpace::through(DVec3::new(0.0, 0.0, 0.5), DVec3::Z).unwrap();
    let result = clip_half_space(&cube, &half_space).unwrap();
    assert_relative_eq!(result.signed_volume(), 6.0, epsilon = 1e-6);
    let (min, max) = result.bounding_box();
    assert_relative_eq!(min.z, -1.0, epsilon = 1e-9);
    assert_relative_eq!(max.z, 0.5, epsilon = 1e-9);
}

#[test]
fn test_clip_half_space_oblique() {
    let cube = cube_at(DVec3::ZERO, 2.0);
    // the diagonal plane x + y = 0 halves the cube
    let half_space = HalfSpace::new(DVec3::new(1.0, 1.0, 0.0), 0.0).unwrap();
    let result = clip_half_space(&cube, &half_space).unwrap();
    assert_relative_eq!(result.signed_volume(), 4.0, epsilon = 1e-6);
    for v in result.vertices() {
        assert!(v.x + v.y <= 1e-6);
    }
}

#[test]
fn test_clip_half_space_trivial_cases() {
    let cube = cube_at(DVec3::ZERO, 2.0);
    let all = HalfSpace::through(DVec3::new(0.0, 0.0, 5.0), DVec3::Z).unwrap();
    assert_eq!(clip_half_space(&cube, &all).unwrap(), cube);
    let none = HalfSpace::through(DVec3::new(0.0, 0.0, -5.0), DVec3::Z).unwrap();
    assert!(clip_half_space(&cube, &none).unwrap().is_empty());
    assert!(clip_half_space(&Mesh::new(), &all).unwrap().is_empty());
}

// =============================================================================
// CONVERSION TESTS
// =============================================================================

#[test]
fn test_polygons_to_mesh_welds_shared_corners() {
    let cube = cube_at(DVec3::ZERO, 1.0);
    let mesh = polygons_to_mesh(&mesh_to_polygons(&cube));
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh.is_closed());
}

#[test]
fn test_mesh_to_polygons_drops_degenerate() {
    let mut mesh = Mesh::new();
    mesh.add_vertex(DVec3::ZERO);
    mesh.add_vertex(DVec3::X);
    mesh.add_vertex(DVec3::X * 2.0);
    mesh.add_triangle(0, 1, 2);
    assert!(mesh_to_polygons(&mesh).is_empty());
}
