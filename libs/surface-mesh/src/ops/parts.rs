//! # Named Parts
//!
//! Cuts a solid along the coordinate planes into printable halves and writes
//! each half to `<prefix>-<name>.off`.

use std::fmt;
use std::path::{Path, PathBuf};

use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::boolean::{clip_half_space, HalfSpace};
use crate::error::MeshResult;
use crate::export::write_off_file;
use crate::mesh::Mesh;

/// A half of space bounded by one of the coordinate planes.
///
/// | Part   | Kept region |
/// |--------|-------------|
/// | Left   | `x <= 0`    |
/// | Right  | `x >= 0`    |
/// | Front  | `y <= 0`    |
/// | Back   | `y >= 0`    |
/// | Top    | `z <= 0`    |
/// | Bottom | `z >= 0`    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    Left,
    Right,
    Front,
    Back,
    Top,
    Bottom,
}

impl Part {
    pub const ALL: [Part; 6] = [
        Part::Left,
        Part::Right,
        Part::Front,
        Part::Back,
        Part::Top,
        Part::Bottom,
    ];

    /// Lower-case name used in file names.
    pub fn name(self) -> &'static str {
        match self {
            Part::Left => "left",
            Part::Right => "right",
            Part::Front => "front",
            Part::Back => "back",
            Part::Top => "top",
            Part::Bottom => "bottom",
        }
    }

    /// The half-space this part keeps.
    pub fn half_space(self) -> HalfSpace {
        let outward = match self {
            Part::Left => DVec3::X,
            Part::Right => DVec3::NEG_X,
            Part::Front => DVec3::Y,
            Part::Back => DVec3::NEG_Y,
            Part::Top => DVec3::Z,
            Part::Bottom => DVec3::NEG_Z,
        };
        HalfSpace::from_unit_normal(outward, 0.0)
    }

    /// The part on the other side of the same coordinate plane.
    pub fn opposite(self) -> Part {
        match self {
            Part::Left => Part::Right,
            Part::Right => Part::Left,
            Part::Front => Part::Back,
            Part::Back => Part::Front,
            Part::Top => Part::Bottom,
            Part::Bottom => Part::Top,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Writes parts of a solid next to a common path prefix.
///
/// # Example
///
/// ```rust
/// use surface_mesh::ops::{Part, PartWriter};
///
/// let writer = PartWriter::new("out/scene");
/// assert_eq!(writer.path(Part::Left).to_str(), Some("out/scene-left.off"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartWriter {
    prefix: PathBuf,
}

impl PartWriter {
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// File path for `part`: the prefix followed by `-<name>.off`.
    pub fn path(&self, part: Part) -> PathBuf {
        let mut path = self.prefix.clone().into_os_string();
        path.push(format!("-{}.off", part.name()));
        PathBuf::from(path)
    }

    /// The portion of `mesh` inside `part`.
    pub fn cut(&self, part: Part, mesh: &Mesh) -> MeshResult<Mesh> {
        clip_half_space(mesh, &part.half_space())
    }

    /// Cuts `part` out of `mesh` and writes it; returns the written path.
    pub fn write(&self, part: Part, mesh: &Mesh) -> MeshResult<PathBuf> {
        let piece = self.cut(part, mesh)?;
        let path = self.path(part);
        write_off_file(&piece, &path)?;
        info!(
            part = part.name(),
            path = %path.display(),
            triangles = piece.triangle_count(),
            "wrote part"
        );
        Ok(path)
    }

    /// Writes every part in `parts`, stopping at the first failure.
    pub fn write_all(&self, parts: &[Part], mesh: &Mesh) -> MeshResult<Vec<PathBuf>> {
        parts.iter().map(|&part| self.write(part, mesh)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_box;
    use approx::assert_relative_eq;

    fn cube() -> Mesh {
        create_box(DVec3::new(-1.0, -2.0, -1.5), DVec3::new(1.0, 2.0, 1.5)).unwrap()
    }

    #[test]
    fn test_part_names() {
        let names: Vec<&str> = Part::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["left", "right", "front", "back", "top", "bottom"]);
        assert_eq!(Part::Top.to_string(), "top");
    }

    #[test]
    fn test_half_spaces() {
        let point = DVec3::new(0.5, -0.5, 0.5);
        assert!(!Part::Left.half_space().contains(point));
        assert!(Part::Right.half_space().contains(point));
        assert!(Part::Front.half_space().contains(point));
        assert!(!Part::Back.half_space().contains(point));
        assert!(!Part::Top.half_space().contains(point));
        assert!(Part::Bottom.half_space().contains(point));
    }

    #[test]
    fn test_top_keeps_negative_z() {
        assert!(Part::Top.half_space().contains(DVec3::NEG_Z));
        assert!(!Part::Top.half_space().contains(DVec3::Z));
        assert!(Part::Bottom.half_space().contains(DVec3::Z));
        assert!(!Part::Bottom.half_space().contains(DVec3::NEG_Z));

        let writer = PartWriter::new("unused");
        let (_, top_max) = writer.cut(Part::Top, &cube()).unwrap().bounding_box();
        assert_relative_eq!(top_max.z, 0.0, epsilon = 1e-9);
        let (bottom_min, _) = writer.cut(Part::Bottom, &cube()).unwrap().bounding_box();
        assert_relative_eq!(bottom_min.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_opposite_parts_share_boundary() {
        for part in Part::ALL {
            let a = part.half_space();
            let b = part.opposite().half_space();
            assert_eq!(a.complement(), b);
            assert_eq!(part.opposite().opposite(), part);
        }
    }

    #[test]
    fn test_path_appends_suffix() {
        let writer = PartWriter::new("scene");
        assert_eq!(writer.path(Part::Bottom), PathBuf::from("scene-bottom.off"));
        let writer = PartWriter::new(Path::new("out").join("arrow"));
        assert_eq!(writer.path(Part::Back), Path::new("out").join("arrow-back.off"));
    }

    #[test]
    fn test_cut_halves_volume() {
        let mesh = cube();
        let writer = PartWriter::new("unused");
        for part in Part::ALL {
            let piece = writer.cut(part, &mesh).unwrap();
            assert_relative_eq!(piece.signed_volume(), 12.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_write_parts() {
        let dir = tempfile::tempdir().unwrap();
        let writer = PartWriter::new(dir.path().join("cube"));
        let paths = writer.write_all(&[Part::Left, Part::Top], &cube()).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("cube-left.off"));
        for path in &paths {
            let text = std::fs::read_to_string(path).unwrap();
            assert!(text.starts_with("OFF\n"));
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Part::Front).unwrap();
        assert_eq!(json, "\"front\"");
        let part: Part = serde_json::from_str("\"bottom\"").unwrap();
        assert_eq!(part, Part::Bottom);
    }
}
