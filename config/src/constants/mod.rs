//! Centralized configuration values shared across the surface mesh workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Plane thickness used by the BSP solid algebra when classifying points.
///
/// Points closer than this to a splitting plane count as coplanar.
///
/// # Examples
/// ```
/// use config::constants::BSP_EPSILON;
/// assert!(BSP_EPSILON < 1e-3);
/// ```
pub const BSP_EPSILON: f64 = 1e-5;

/// Scale applied to coordinates before quantizing them for vertex welding.
///
/// Two vertices whose coordinates agree after multiplying by this factor
/// and rounding are merged into one.
///
/// # Examples
/// ```
/// use config::constants::COORDINATE_SCALE;
/// let key = (0.1234567 * COORDINATE_SCALE).round() as i64;
/// assert_eq!(key, 123457);
/// ```
pub const COORDINATE_SCALE: f64 = 1e6;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Smallest number of angular samples a ring or fan may have.
///
/// Fewer than three points around a ring make the wrap-around facets
/// degenerate.
///
/// # Examples
/// ```
/// use config::constants::MIN_ANGULAR_STEPS;
/// assert_eq!(MIN_ANGULAR_STEPS, 3);
/// ```
pub const MIN_ANGULAR_STEPS: u32 = 3;

/// Default angular step count for arrows.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_ARROW_STEPS, MIN_ANGULAR_STEPS};
/// assert!(DEFAULT_ARROW_STEPS >= MIN_ANGULAR_STEPS);
/// ```
pub const DEFAULT_ARROW_STEPS: u32 = 4;

/// Default parameter step for finite-difference tangents and normals of
/// curves that do not supply analytic derivatives.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CURVE_DELTA_T;
/// assert!(DEFAULT_CURVE_DELTA_T > 0.0 && DEFAULT_CURVE_DELTA_T < 1e-2);
/// ```
pub const DEFAULT_CURVE_DELTA_T: f64 = 1e-4;

/// Arrowhead base sits this many shaft radii back from the tip.
///
/// # Examples
/// ```
/// use config::constants::ARROW_HEAD_RADII;
/// assert_eq!(ARROW_HEAD_RADII, 2.0);
/// ```
pub const ARROW_HEAD_RADII: f64 = 2.0;

/// Radius multiplier of the arrowhead flare relative to the shaft.
///
/// # Examples
/// ```
/// use config::constants::ARROW_FLARE_FACTOR;
/// assert!(ARROW_FLARE_FACTOR > 1.0);
/// ```
pub const ARROW_FLARE_FACTOR: f64 = 2.0;

// =============================================================================
// LIMITS
// =============================================================================

/// Upper bound on vertices a single builder invocation may emit.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// assert!(MAX_VERTICES <= u32::MAX as usize);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Immutable snapshot of tessellation settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::TessellationConfig;
/// let config = TessellationConfig::default();
/// assert!(config.curve_delta_t > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationConfig {
    /// Angular step count for rings and fans.
    pub angular_steps: u32,
    /// Finite-difference step used when a curve is tessellated from this
    /// configuration.
    pub curve_delta_t: f64,
}

impl TessellationConfig {
    /// Builds a configuration enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::constants::TessellationConfig;
    /// let cfg = TessellationConfig::new(24, 1.0e-3).expect("valid config");
    /// assert_eq!(cfg.angular_steps, 24);
    /// ```
    pub fn new(angular_steps: u32, curve_delta_t: f64) -> Result<Self, ConfigError> {
        if angular_steps < MIN_ANGULAR_STEPS {
            return Err(ConfigError::InvalidSteps(angular_steps));
        }
        if !curve_delta_t.is_finite() || curve_delta_t <= 0.0 {
            return Err(ConfigError::InvalidDeltaT(curve_delta_t));
        }
        Ok(Self {
            angular_steps,
            curve_delta_t,
        })
    }
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            angular_steps: DEFAULT_ARROW_STEPS,
            curve_delta_t: DEFAULT_CURVE_DELTA_T,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the angular step count is too small to form a ring.
    InvalidSteps(u32),
    /// Raised when the finite-difference step is not a positive finite number.
    InvalidDeltaT(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSteps(value) => {
                write!(f, "angular_steps must be >= {MIN_ANGULAR_STEPS}: {value}")
            }
            ConfigError::InvalidDeltaT(value) => {
                write!(f, "curve_delta_t must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
