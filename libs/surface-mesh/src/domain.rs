//! # Parameter Domains
//!
//! Closed intervals and the rectangular domains built from them.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Closed interval `[min, max]`.
///
/// Equality is exact value equality. [`Interval::FULL_CIRCLE`] is compared
/// with `==` to decide whether an angular range wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// The angular range `[0, 2π]`.
    pub const FULL_CIRCLE: Interval = Interval { min: 0.0, max: TAU };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Parameter value of sample `i` out of `steps` equal subdivisions.
    #[inline]
    pub fn sample(&self, i: u32, steps: u32) -> f64 {
        self.min + f64::from(i) * self.length() / f64::from(steps)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Rectangular domain in Cartesian parameters `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianDomain {
    pub x: Interval,
    pub y: Interval,
}

impl CartesianDomain {
    pub const fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }
}

/// Domain in polar parameters `(r, phi)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarDomain {
    pub r: Interval,
    pub phi: Interval,
}

impl PolarDomain {
    pub const fn new(r: Interval, phi: Interval) -> Self {
        Self { r, phi }
    }

    /// Full disc or annulus of the given radial range.
    pub const fn full(r: Interval) -> Self {
        Self {
            r,
            phi: Interval::FULL_CIRCLE,
        }
    }

    /// True if the angular range is exactly the full circle.
    pub fn closed(&self) -> bool {
        self.phi == Interval::FULL_CIRCLE
    }

    /// True if the radial range starts at the pole.
    pub fn contains0(&self) -> bool {
        self.r.min == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_interval_length_and_sample() {
        let interval = Interval::new(-1.0, 3.0);
        assert_eq!(interval.length(), 4.0);
        assert_eq!(interval.sample(0, 4), -1.0);
        assert_eq!(interval.sample(2, 4), 1.0);
        assert_eq!(interval.sample(4, 4), 3.0);
        assert!(interval.contains(0.0));
        assert!(!interval.contains(3.5));
    }

    #[test]
    fn test_full_circle_equality_is_exact() {
        assert_eq!(Interval::new(0.0, 2.0 * PI), Interval::FULL_CIRCLE);
        assert_ne!(Interval::new(0.0, 2.0 * PI - 1e-15), Interval::FULL_CIRCLE);
    }

    #[test]
    fn test_polar_topology_flags() {
        let disc = PolarDomain::full(Interval::new(0.0, 1.0));
        assert!(disc.closed());
        assert!(disc.contains0());

        let sector = PolarDomain::new(Interval::new(0.5, 1.0), Interval::new(0.0, PI));
        assert!(!sector.closed());
        assert!(!sector.contains0());
    }

    #[test]
    fn test_cartesian_domain_fields() {
        let domain = CartesianDomain::new(Interval::new(0.0, 1.0), Interval::new(2.0, 5.0));
        assert_eq!(domain.x.length(), 1.0);
        assert_eq!(domain.y.length(), 3.0);
    }
}
