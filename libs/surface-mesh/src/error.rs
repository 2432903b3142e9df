//! # Mesh Errors
//!
//! Error types for surface tessellation and solid operations.

use thiserror::Error;

/// Errors that can occur while building or combining meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A facet referenced a vertex that has not been emitted yet.
    #[error("Invalid vertex index {index}: only {vertex_count} vertices emitted")]
    InvalidVertexIndex { index: u32, vertex_count: u32 },

    /// Zero-length tangent, normal or axis during frame construction
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Builder parameters outside the supported range
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Builder exists but has no tessellation yet
    #[error("Not implemented: {builder}")]
    NotImplemented { builder: &'static str },

    /// Boolean operation failed
    #[error("Boolean operation failed: {message}")]
    BooleanFailed { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Writing a mesh failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a boolean operation failed error.
    pub fn boolean_failed(message: impl Into<String>) -> Self {
        Self::BooleanFailed {
            message: message.into(),
        }
    }

    /// Creates a not-implemented error for the named builder.
    pub fn not_implemented(builder: &'static str) -> Self {
        Self::NotImplemented { builder }
    }
}

/// Result alias used throughout the crate.
pub type MeshResult<T> = Result<T, MeshError>;
