//! Tests for tube generation.

use super::*;
use crate::error::MeshError;
use crate::geometry::Vector;
use crate::test_support::assert_closed_outward;
use approx::assert_relative_eq;

/// Circular helix of radius 1 and pitch 2π * 0.3.
struct Helix;

impl CurveFunction for Helix {
    fn position(&self, t: f64) -> Point {
        Point::new(t.cos(), t.sin(), 0.3 * t)
    }
}

#[test]
fn test_tube_counts() {
    for (steps, phisteps) in [(1, 3), (4, 8), (20, 12)] {
        let mesh = create_tube(Helix, Interval::new(0.0, 3.0), steps, phisteps, 0.1).unwrap();
        let rings = steps as usize + 1;
        assert_eq!(mesh.vertex_count(), rings * phisteps as usize + 2);
        assert_eq!(mesh.triangle_count(), 2 * phisteps as usize * rings);
    }
}

#[test]
fn test_helix_tube_closed_outward() {
    let mesh = create_tube(Helix, Interval::new(0.0, 6.0), 40, 10, 0.1).unwrap();
    assert_closed_outward(&mesh);
}

#[test]
fn test_tube_apexes_are_curve_endpoints() {
    let interval = Interval::new(0.5, 2.5);
    let mesh = create_tube(Helix, interval, 5, 6, 0.1).unwrap();
    assert_eq!(mesh.vertex(0), Some(Helix.position(0.5)));
    let last = mesh.vertex_count() as u32 - 1;
    assert_eq!(mesh.vertex(last), Some(Helix.position(2.5)));
}

#[test]
fn test_tube_rings_keep_radius() {
    let interval = Interval::new(0.0, 2.0);
    let (steps, phisteps) = (4, 7);
    let builder = CurveBuilder::new(Helix, interval, steps, phisteps, 0.25).unwrap();
    let mesh = builder.to_mesh().unwrap();
    for t in 0..=steps {
        let center = Helix.position(interval.sample(t, steps));
        for phi in 0..phisteps {
            let p = mesh.vertex(builder.vertex(t, phi)).unwrap();
            assert_relative_eq!((p - center).length(), 0.25, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_zero_steps_emits_only_apexes() {
    let mesh = create_tube(Helix, Interval::new(0.0, 1.0), 0, 6, 0.1).unwrap();
    assert_eq!(mesh.vertex_count(), 2);
    assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn test_tube_rejects_small_rings() {
    let err = CurveBuilder::new(Helix, Interval::new(0.0, 1.0), 3, 2, 0.1).unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter { .. }));
    assert!(CurveBuilder::new(Helix, Interval::new(0.0, 1.0), 3, 6, -1.0).is_err());
}

#[test]
fn test_line_tube_closed_outward() {
    for to in [Point::X, Point::Y, Point::Z, Point::new(1.0, -2.0, 0.5)] {
        let mesh = create_line(Point::new(0.1, 0.2, 0.3), to, 6, 0.05).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * 6 + 2);
        assert_eq!(mesh.triangle_count(), 4 * 6);
        assert_closed_outward(&mesh);
    }
}

#[test]
fn test_line_tube_volume_is_prism() {
    // 4-gon of circumradius r has area 2 r^2
    let mesh = create_line(Point::ZERO, Point::new(0.0, 0.0, 2.0), 4, 0.5).unwrap();
    assert_relative_eq!(mesh.signed_volume(), 2.0 * 0.25 * 2.0, epsilon = 1e-12);
}

#[test]
fn test_degenerate_line_fails() {
    let err = create_line(Point::ONE, Point::ONE, 6, 0.1).unwrap_err();
    assert!(matches!(err, MeshError::DegenerateGeometry { .. }));
}

#[test]
fn test_config_step_sets_ring_planes() {
    let interval = Interval::new(0.0, 2.0);
    let (steps, radius) = (4, 0.25);
    let analytic = |t: f64| Vector::new(-t.sin(), t.cos(), 0.3).normalize();
    for (delta_t, tilted) in [(1e-6, false), (0.5, true)] {
        let config = TessellationConfig::new(9, delta_t).unwrap();
        let builder = CurveBuilder::from_config(Helix, interval, steps, radius, &config).unwrap();
        let mesh = builder.to_mesh().unwrap();
        assert_eq!(mesh.vertex_count(), (steps as usize + 1) * 9 + 2);
        assert_closed_outward(&mesh);

        let mut worst: f64 = 0.0;
        for t in 0..=steps {
            let param = interval.sample(t, steps);
            let center = Helix.position(param);
            let sampled = builder.curve().tangent(param).unwrap();
            for phi in 0..9 {
                let offset = mesh.vertex(builder.vertex(t, phi)).unwrap() - center;
                assert!(offset.dot(sampled).abs() < 1e-9);
                worst = worst.max(offset.dot(analytic(param)).abs());
            }
        }
        assert_eq!(worst > 1e-3, tilted, "delta_t {delta_t}: worst tilt {worst}");
    }
}

#[test]
fn test_config_rejects_invalid_tube() {
    let config = TessellationConfig::default();
    assert!(CurveBuilder::from_config(Helix, Interval::new(0.0, 1.0), 3, 0.0, &config).is_err());
}
