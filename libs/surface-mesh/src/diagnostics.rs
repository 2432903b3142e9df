//! # Diagnostics
//!
//! Per-invocation verbosity for the mesh builders.
//!
//! There is no process-wide debug level. A [`Diagnostics`] value travels with
//! the [`MeshBuilder`](crate::MeshBuilder) and decides which `tracing` events
//! a builder emits; the installed subscriber still filters them as usual.

/// Verbosity settings carried by a mesh builder.
///
/// - `level == 0`: silent
/// - `level >= 1`: one `debug!` summary per build phase
/// - `level >= 2` or `trace_emissions`: one `trace!` per vertex and facet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub level: u32,
    pub trace_emissions: bool,
}

impl Diagnostics {
    /// No builder output at all.
    pub const fn silent() -> Self {
        Self {
            level: 0,
            trace_emissions: false,
        }
    }

    /// Phase summaries only.
    pub const fn summary() -> Self {
        Self {
            level: 1,
            trace_emissions: false,
        }
    }

    /// Phase summaries plus every emitted vertex and facet.
    pub const fn verbose() -> Self {
        Self {
            level: 2,
            trace_emissions: true,
        }
    }

    #[inline]
    pub fn summaries_enabled(&self) -> bool {
        self.level >= 1
    }

    #[inline]
    pub fn emissions_enabled(&self) -> bool {
        self.trace_emissions || self.level >= 2
    }
}
