//! # OFF Export
//!
//! Writes meshes in the Object File Format:
//!
//! ```text
//! OFF
//! <vertices> <faces> 0
//! x y z            (one line per vertex)
//! 3 i j k          (one line per triangle)
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Writes `mesh` as OFF text to `writer`.
///
/// # Errors
///
/// `InvalidVertexIndex` if a facet dangles, `Io` if writing fails.
pub fn write_off<W: Write>(mesh: &Mesh, writer: &mut W) -> MeshResult<()> {
    let vertex_count = mesh.vertex_count() as u32;
    if let Some(&index) = mesh.triangles().iter().flatten().find(|&&i| i >= vertex_count) {
        return Err(MeshError::InvalidVertexIndex {
            index,
            vertex_count,
        });
    }

    writeln!(writer, "OFF")?;
    writeln!(writer, "{} {} 0", mesh.vertex_count(), mesh.triangle_count())?;
    for v in mesh.vertices() {
        writeln!(writer, "{} {} {}", v.x, v.y, v.z)?;
    }
    for [i, j, k] in mesh.triangles() {
        writeln!(writer, "3 {i} {j} {k}")?;
    }
    Ok(())
}

/// Renders `mesh` as an OFF string.
///
/// # Example
///
/// ```rust
/// use surface_mesh::export::to_off_string;
/// use surface_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::ZERO, DVec3::ONE).unwrap();
/// let text = to_off_string(&mesh).unwrap();
/// assert!(text.starts_with("OFF\n8 12 0\n"));
/// ```
pub fn to_off_string(mesh: &Mesh) -> MeshResult<String> {
    let mut buffer = Vec::new();
    write_off(mesh, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

/// Writes `mesh` to an OFF file at `path`, replacing any existing file.
pub fn write_off_file<P: AsRef<Path>>(mesh: &Mesh, path: P) -> MeshResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_off(mesh, &mut writer)?;
    writer.flush()?;
    debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "wrote OFF file"
    );
    Ok(())
}
