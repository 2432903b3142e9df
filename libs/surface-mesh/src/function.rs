//! # Function Capabilities
//!
//! Traits describing what a builder needs to know about the surface or curve
//! it tessellates, plus small adapters between them.
//!
//! ## Traits
//!
//! - [`CartesianFunction`], [`PolarFunction`]: scalar heights over a domain
//! - [`PointFunction`]: surface point and thickness direction
//! - [`CurveFunction`]: space curve with (optionally analytic) derivatives
//! - [`SphericalFunction`]: radius as a function of polar and azimuth angle
//!
//! [`SampledCurve`] re-samples any curve's derivatives with a chosen step.
//!
//! Closures `Fn(f64, f64) -> f64` are scalar functions, so
//! `CartesianHeight(|x, y| x * y)` is a ready-made point function.

use config::constants::DEFAULT_CURVE_DELTA_T;

use crate::error::{MeshError, MeshResult};
use crate::geometry::{Frame, Point, Vector, VectorExt, E1, E2, E3};

/// Scalar height over Cartesian parameters.
pub trait CartesianFunction {
    fn height(&self, x: f64, y: f64) -> f64;
}

/// Scalar height over polar parameters.
pub trait PolarFunction {
    fn height(&self, r: f64, phi: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> CartesianFunction for F {
    fn height(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

impl<F: Fn(f64, f64) -> f64> PolarFunction for F {
    fn height(&self, r: f64, phi: f64) -> f64 {
        self(r, phi)
    }
}

/// Surface point plus the direction along which a slab is thickened.
///
/// Slab builders place their two sheets at `point ± direction * h/2`.
pub trait PointFunction {
    fn point(&self, u: f64, v: f64) -> Point;
    fn direction(&self, u: f64, v: f64) -> Vector;
}

impl<T: PointFunction + ?Sized> PointFunction for &T {
    fn point(&self, u: f64, v: f64) -> Point {
        (**self).point(u, v)
    }

    fn direction(&self, u: f64, v: f64) -> Vector {
        (**self).direction(u, v)
    }
}

/// Graph `(x, y, f(x, y))` of a Cartesian height, thickened along `E3`.
#[derive(Debug, Clone, Copy)]
pub struct CartesianHeight<F>(pub F);

impl<F: CartesianFunction> PointFunction for CartesianHeight<F> {
    fn point(&self, x: f64, y: f64) -> Point {
        Point::new(x, y, self.0.height(x, y))
    }

    fn direction(&self, _x: f64, _y: f64) -> Vector {
        E3
    }
}

/// Graph `(r cos φ, r sin φ, f(r, φ))` of a polar height, thickened along `E3`.
#[derive(Debug, Clone, Copy)]
pub struct PolarHeight<F>(pub F);

impl<F: PolarFunction> PointFunction for PolarHeight<F> {
    fn point(&self, r: f64, phi: f64) -> Point {
        Point::new(r * phi.cos(), r * phi.sin(), self.0.height(r, phi))
    }

    fn direction(&self, _r: f64, _phi: f64) -> Vector {
        E3
    }
}

/// Radius of a star-shaped surface around the origin.
pub trait SphericalFunction {
    fn radius(&self, theta: f64, phi: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> SphericalFunction for F {
    fn radius(&self, theta: f64, phi: f64) -> f64 {
        self(theta, phi)
    }
}

/// A parametrized space curve.
///
/// Only [`position`](CurveFunction::position) is required. Tangent and
/// normal fall back to forward differences with step
/// [`delta_t`](CurveFunction::delta_t); curves that know their derivatives
/// override them.
pub trait CurveFunction {
    fn position(&self, t: f64) -> Point;

    fn delta_t(&self) -> f64 {
        DEFAULT_CURVE_DELTA_T
    }

    /// Unit tangent at `t`.
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` if the curve does not move over one step.
    fn tangent(&self, t: f64) -> MeshResult<Vector> {
        default_tangent(self, t)
    }

    /// Vector pointing towards the turn of the curve at `t`.
    ///
    /// # Errors
    ///
    /// Whatever the tangent evaluation returns.
    fn normal(&self, t: f64) -> MeshResult<Vector> {
        default_normal(self, t)
    }

    /// Orthonormal frame at `t`.
    ///
    /// Where the curve does not turn the normal vanishes; the frame then
    /// falls back to [`Frame::from_tangent`].
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` if the tangent vanishes.
    fn frenet_frame(&self, t: f64) -> MeshResult<Frame> {
        let tangent = self.tangent(t)?;
        let normal = self.normal(t)?;
        Frame::from_tangent_normal(tangent, normal).or_else(|_| Frame::from_tangent(tangent))
    }
}

/// Forward-difference unit tangent `normalize(position(t + Δt) - position(t))`.
///
/// # Errors
///
/// `DegenerateGeometry` if both positions coincide.
pub fn default_tangent<C: CurveFunction + ?Sized>(curve: &C, t: f64) -> MeshResult<Vector> {
    let dt = curve.delta_t();
    (curve.position(t + dt) - curve.position(t)).unit("curve tangent")
}

/// Forward-difference normal `tangent(t + Δt).orthogonal_to(tangent(t))`.
///
/// Not normalized; zero on straight stretches.
///
/// # Errors
///
/// Propagates tangent failures.
pub fn default_normal<C: CurveFunction + ?Sized>(curve: &C, t: f64) -> MeshResult<Vector> {
    let dt = curve.delta_t();
    let here = curve.tangent(t)?;
    let ahead = curve.tangent(t + dt)?;
    Ok(ahead.orthogonal_to(here))
}

/// A curve whose derivatives are always estimated by forward differences
/// with a fixed step, whatever the wrapped curve provides.
///
/// # Example
///
/// ```rust
/// use surface_mesh::function::{CurveFunction, Line, SampledCurve};
/// use glam::DVec3;
///
/// let curve = SampledCurve::new(Line::between(DVec3::ZERO, DVec3::X), 0.25).unwrap();
/// assert_eq!(curve.delta_t(), 0.25);
/// assert_eq!(curve.tangent(0.0).unwrap(), DVec3::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledCurve<C> {
    curve: C,
    delta_t: f64,
}

impl<C: CurveFunction> SampledCurve<C> {
    /// # Errors
    ///
    /// `InvalidParameter` if `delta_t` is not positive and finite.
    pub fn new(curve: C, delta_t: f64) -> MeshResult<Self> {
        if !delta_t.is_finite() || delta_t <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "curve step must be positive: {delta_t}"
            )));
        }
        Ok(Self { curve, delta_t })
    }

    pub fn inner(&self) -> &C {
        &self.curve
    }
}

impl<C: CurveFunction> CurveFunction for SampledCurve<C> {
    fn position(&self, t: f64) -> Point {
        self.curve.position(t)
    }

    fn delta_t(&self) -> f64 {
        self.delta_t
    }
}

/// Straight line `p0 + t r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    origin: Point,
    direction: Vector,
}

impl Line {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Line with `position(0) == from` and `position(1) == to`.
    pub fn between(from: Point, to: Point) -> Self {
        Self::new(from, to - from)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }
}

impl CurveFunction for Line {
    fn position(&self, t: f64) -> Point {
        self.origin + t * self.direction
    }

    fn tangent(&self, _t: f64) -> MeshResult<Vector> {
        Ok(self.direction)
    }

    fn normal(&self, _t: f64) -> MeshResult<Vector> {
        let trial = if E1.is_parallel(self.direction) { E2 } else { E1 };
        Ok(trial.orthogonal_to(self.direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use approx::assert_relative_eq;

    struct Circle;

    impl CurveFunction for Circle {
        fn position(&self, t: f64) -> Point {
            Point::new(t.cos(), t.sin(), 0.0)
        }
    }

    struct Stationary;

    impl CurveFunction for Stationary {
        fn position(&self, _t: f64) -> Point {
            Point::new(1.0, 1.0, 1.0)
        }
    }

    #[test]
    fn test_closure_is_cartesian_height() {
        let surface = CartesianHeight(|x: f64, y: f64| x * y);
        assert_eq!(surface.point(2.0, 3.0), Point::new(2.0, 3.0, 6.0));
        assert_eq!(surface.direction(2.0, 3.0), E3);
    }

    #[test]
    fn test_polar_height_maps_to_plane() {
        let surface = PolarHeight(|r: f64, _phi: f64| r * r);
        let p = surface.point(2.0, std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_default_tangent_of_circle() {
        let tangent = Circle.tangent(0.0).unwrap();
        assert_relative_eq!(tangent.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(tangent.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_default_normal_points_inward() {
        let normal = Circle.normal(0.0).unwrap();
        assert!(normal.x < 0.0);
        assert!(normal.dot(Circle.tangent(0.0).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn test_sampled_curve_uses_its_step() {
        let coarse = SampledCurve::new(Circle, 0.5).unwrap();
        assert_eq!(coarse.delta_t(), 0.5);
        // the chord from 0 to Δt is tilted back by Δt / 2
        let tangent = coarse.tangent(0.0).unwrap();
        assert_relative_eq!(tangent.x, -(0.25_f64).sin(), epsilon = 1e-12);
        assert_relative_eq!(tangent.y, (0.25_f64).cos(), epsilon = 1e-12);
        assert_eq!(coarse.position(1.0), Circle.position(1.0));
    }

    #[test]
    fn test_sampled_curve_overrides_analytic_derivatives() {
        let line = Line::between(Point::ZERO, Point::new(0.0, 0.0, 2.0));
        let sampled = SampledCurve::new(line, 1e-2).unwrap();
        assert_relative_eq!(sampled.tangent(0.3).unwrap().length(), 1.0, epsilon = 1e-12);
        assert_eq!(sampled.normal(0.3).unwrap(), Vector::ZERO);
        assert_eq!(sampled.inner(), &line);
    }

    #[test]
    fn test_sampled_curve_rejects_bad_step() {
        for step in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SampledCurve::new(Circle, step),
                Err(MeshError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_frenet_frame_of_circle() {
        let frame = Circle.frenet_frame(0.0).unwrap();
        assert_relative_eq!(frame.normal.x, -1.0, epsilon = 1e-3);
        assert_relative_eq!(frame.binormal.z, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_stationary_curve_is_degenerate() {
        let err = Stationary.tangent(0.0).unwrap_err();
        assert!(matches!(err, MeshError::DegenerateGeometry { .. }));
        assert!(Stationary.frenet_frame(0.0).is_err());
    }

    #[test]
    fn test_line_normal_avoids_parallel_axis() {
        let along_x = Line::new(Point::ZERO, Vector::new(3.0, 0.0, 0.0));
        assert_eq!(along_x.normal(0.0).unwrap(), E2);

        let along_z = Line::between(Point::ZERO, Point::new(0.0, 0.0, 2.0));
        assert_eq!(along_z.normal(0.5).unwrap(), E1);
        assert_eq!(along_z.position(0.5), Point::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_line_frame_is_orthonormal() {
        let line = Line::new(Point::ZERO, Vector::new(1.0, 1.0, 1.0));
        let frame = line.frenet_frame(0.0).unwrap();
        assert!(frame.tangent.dot(frame.normal).abs() < 1e-12);
        assert_relative_eq!(frame.binormal.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_straight_default_curve_falls_back_to_tangent_frame() {
        struct Ray;
        impl CurveFunction for Ray {
            fn position(&self, t: f64) -> Point {
                Point::new(0.0, 0.0, t)
            }
        }
        let frame = Ray.frenet_frame(0.25).unwrap();
        assert_relative_eq!(frame.tangent.z, 1.0, epsilon = 1e-12);
        assert!(frame.normal.dot(frame.tangent).abs() < 1e-12);
    }
}
