//! # Text Mesh Export
//!
//! Serializes a generated mesh to Wavefront OBJ text and reads it back.
//!
//! ## Format
//!
//! ```text
//! # <kind> level=<level> size=<size>
//! v <x> <y> <z>
//! ...
//! f <i1> <i2> <i3>
//! ...
//! ```
//!
//! Coordinates are written with the shortest representation that parses back
//! to the same `f64`. Face indices are 1-based, as OBJ requires; internally
//! they are 0-based.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use config::constants::OBJ_FILE_EXTENSION;
use tracing::debug;

use crate::error::{FractalError, FractalResult};
use crate::mesh::{Face, Point3};
use crate::request::FractalKind;

/// Mesh data recovered from OBJ text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportedMesh {
    /// Comment lines, without the leading `#` and surrounding whitespace
    pub comments: Vec<String>,
    /// Vertices in file order
    pub points: Vec<Point3>,
    /// Faces with 0-based indices
    pub faces: Vec<Face>,
}

/// OBJ rendering of a mesh, shared by the string and writer exporters.
struct ObjDocument<'a> {
    kind: FractalKind,
    level: u32,
    size: f64,
    points: &'a [Point3],
    faces: &'a [Face],
}

impl fmt::Display for ObjDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} level={} size={}", self.kind, self.level, self.size)?;
        for p in self.points {
            writeln!(f, "v {} {} {}", p.x, p.y, p.z)?;
        }
        for face in self.faces {
            writeln!(f, "f {} {} {}", face.v1 + 1, face.v2 + 1, face.v3 + 1)?;
        }
        Ok(())
    }
}

/// Writes the mesh as OBJ text to `writer`.
///
/// No geometric validation happens here; `points` and `faces` are written
/// exactly as given.
///
/// # Errors
///
/// Returns [`FractalError::Io`] if the writer fails.
pub fn write_obj<W: Write>(
    writer: &mut W,
    kind: FractalKind,
    level: u32,
    size: f64,
    points: &[Point3],
    faces: &[Face],
) -> FractalResult<()> {
    let document = ObjDocument {
        kind,
        level,
        size,
        points,
        faces,
    };
    write!(writer, "{document}")?;
    Ok(())
}

/// Returns the mesh as an OBJ document.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::{export_obj, generate, FractalKind, FractalRequest};
///
/// let mesh = generate(&FractalRequest::new(FractalKind::Tetrahedron, 0, 1.0)).unwrap();
/// let text = export_obj(FractalKind::Tetrahedron, 0, 1.0, mesh.points(), mesh.faces());
///
/// assert!(text.starts_with("# TetrahedronFractal level=0 size=1\n"));
/// assert!(text.contains("\nf 1 3 2\n"));
/// ```
pub fn export_obj(
    kind: FractalKind,
    level: u32,
    size: f64,
    points: &[Point3],
    faces: &[Face],
) -> String {
    ObjDocument {
        kind,
        level,
        size,
        points,
        faces,
    }
    .to_string()
}

/// Writes the mesh to an OBJ file at `path`.
///
/// # Errors
///
/// Returns [`FractalError::Io`] if the file cannot be created or written.
pub fn save_obj<P: AsRef<Path>>(
    path: P,
    kind: FractalKind,
    level: u32,
    size: f64,
    points: &[Point3],
    faces: &[Face],
) -> FractalResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(&mut writer, kind, level, size, points, faces)?;
    writer.flush()?;

    debug!(
        "Saved {} points, {} faces to {}",
        points.len(),
        faces.len(),
        path.display()
    );
    Ok(())
}

/// Returns the default download/output file name for a mesh.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::{suggested_file_name, FractalKind};
///
/// assert_eq!(suggested_file_name(FractalKind::Sponge, 2), "sponge_fractal_level2.obj");
/// ```
pub fn suggested_file_name(kind: FractalKind, level: u32) -> String {
    format!("{}_level{level}.{OBJ_FILE_EXTENSION}", kind.slug())
}

/// Parses OBJ text produced by [`export_obj`].
///
/// Reads `v` and triangular `f` lines, keeps `#` comments and skips blank
/// lines. Face entries may carry `/`-separated texture and normal indices;
/// only the vertex index is used.
///
/// # Errors
///
/// Returns [`FractalError::Parse`] for unknown records, malformed numbers,
/// non-triangular faces, and indices that are zero or out of range.
pub fn parse_obj(text: &str) -> FractalResult<ImportedMesh> {
    let mut mesh = ImportedMesh::default();
    let mut pending_faces = Vec::new();

    for (number, raw) in text.lines().enumerate() {
        let line_no = number + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            mesh.comments.push(comment.trim().to_string());
            continue;
        }

        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => {
                let coords = parse_triple(fields, line_no, |s| s.parse::<f64>().ok())?;
                mesh.points.push(Point3::new(coords[0], coords[1], coords[2]));
            }
            Some("f") => {
                let indices = parse_triple(fields, line_no, |s| {
                    s.split('/').next().and_then(|i| i.parse::<u32>().ok())
                })?;
                pending_faces.push((line_no, indices));
            }
            Some(other) => {
                return Err(FractalError::parse(
                    line_no,
                    format!("unsupported record '{other}'"),
                ));
            }
            None => {}
        }
    }

    let point_count = mesh.points.len() as u32;
    for (line_no, [a, b, c]) in pending_faces {
        for index in [a, b, c] {
            if index == 0 || index > point_count {
                return Err(FractalError::parse(
                    line_no,
                    format!("vertex index {index} out of range 1..={point_count}"),
                ));
            }
        }
        mesh.faces.push(Face::new(a - 1, b - 1, c - 1));
    }

    Ok(mesh)
}

fn parse_triple<'a, T: Copy + Default>(
    mut fields: impl Iterator<Item = &'a str>,
    line_no: usize,
    parse: impl Fn(&str) -> Option<T>,
) -> FractalResult<[T; 3]> {
    let mut values = [T::default(); 3];
    for slot in &mut values {
        let field = fields
            .next()
            .ok_or_else(|| FractalError::parse(line_no, "expected 3 values"))?;
        *slot = parse(field)
            .ok_or_else(|| FractalError::parse(line_no, format!("invalid value '{field}'")))?;
    }
    if fields.next().is_some() {
        return Err(FractalError::parse(line_no, "expected exactly 3 values"));
    }
    Ok(values)
}
