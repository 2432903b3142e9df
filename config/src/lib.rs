//! # Config Crate
//!
//! Centralized configuration constants for the surface tessellation
//! workspace. Tolerances, default step counts and safety limits are defined
//! here so the mesh builders never carry their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{TessellationConfig, MIN_ANGULAR_STEPS};
//!
//! // Shared settings are validated once
//! let config = TessellationConfig::new(16, 1e-3).unwrap();
//! assert_eq!(config.angular_steps, 16);
//!
//! // A ring needs at least three angular samples
//! let requested = 2;
//! assert!(requested < MIN_ANGULAR_STEPS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No global state**: Values are constants or plain copyable structs
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
