//! # Mesh Data Structure
//!
//! The output record of a generation call: a deduplicated point list with its
//! face list, plus the same data flattened into render-ready buffers.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A point in 3D space.
///
/// Plain numeric struct so consumers never need a math library type.
/// Equality is exact; tolerance-based identity is the weld table's job.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Point3 {
    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the coordinates as an array.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<DVec3> for Point3 {
    #[inline]
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for DVec3 {
    #[inline]
    fn from(p: Point3) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

/// A triangle as three vertex indices.
///
/// Index order is the winding order and decides which way the face points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    /// First vertex index
    pub v1: u32,
    /// Second vertex index
    pub v2: u32,
    /// Third vertex index
    pub v3: u32,
}

impl Face {
    /// Creates a face from three vertex indices.
    #[inline]
    pub const fn new(v1: u32, v2: u32, v3: u32) -> Self {
        Self { v1, v2, v3 }
    }

    /// Returns the indices in winding order.
    #[inline]
    pub fn indices(self) -> [u32; 3] {
        [self.v1, self.v2, self.v3]
    }

    /// Returns true if any index repeats.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.v1 == self.v2 || self.v2 == self.v3 || self.v1 == self.v3
    }
}

/// Result of one generation call.
///
/// `vertices` and `indices` are the render-ready buffers (3 floats per vertex,
/// 3 indices per triangle); `points` and `faces` carry the same mesh at full
/// precision for export. All four stay in lockstep.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::{generate, FractalKind, FractalRequest};
///
/// let mesh = generate(&FractalRequest::new(FractalKind::Octahedron, 0, 1.0)).unwrap();
/// assert_eq!(mesh.vertices().len(), 3 * mesh.points().len());
/// assert_eq!(mesh.indices().len(), 3 * mesh.faces().len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutput {
    vertices: Vec<f32>,
    indices: Vec<u32>,
    points: Vec<Point3>,
    faces: Vec<Face>,
}

impl GenerationOutput {
    /// Assembles an output from its four parts.
    ///
    /// Only the assembler builds outputs, so the parts are consistent by
    /// construction.
    pub(crate) fn from_parts(
        vertices: Vec<f32>,
        indices: Vec<u32>,
        points: Vec<Point3>,
        faces: Vec<Face>,
    ) -> Self {
        Self {
            vertices,
            indices,
            points,
            faces,
        }
    }

    /// Returns the flat vertex buffer `[x, y, z, x, y, z, ...]`.
    #[inline]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Returns the flat index buffer `[i0, i1, i2, ...]`.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the deduplicated points in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the faces in emission order.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the number of distinct vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if no geometry was produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() || self.faces.is_empty()
    }

    /// Consumes the output and returns the render buffers.
    pub fn into_buffers(self) -> (Vec<f32>, Vec<u32>) {
        (self.vertices, self.indices)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners; both are the origin for an empty mesh.
    pub fn bounding_box(&self) -> (Point3, Point3) {
        let Some(first) = self.points.first() else {
            return (Point3::default(), Point3::default());
        };

        let mut min = DVec3::from(*first);
        let mut max = min;
        for p in &self.points[1..] {
            let v = DVec3::from(*p);
            min = min.min(v);
            max = max.max(v);
        }

        (min.into(), max.into())
    }

    /// Checks the buffer and index invariants.
    ///
    /// Checks:
    /// - Buffer lengths match the point and face counts
    /// - All face indices are in range
    /// - No face repeats an index
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.vertices.len() != 3 * self.points.len() {
            return false;
        }
        if self.indices.len() != 3 * self.faces.len() {
            return false;
        }

        let point_count = self.points.len() as u32;
        self.faces.iter().zip(self.indices.chunks_exact(3)).all(|(face, chunk)| {
            let idx = face.indices();
            idx.iter().all(|&i| i < point_count) && !face.is_degenerate() && chunk == idx
        })
    }

    /// Computes area-weighted vertex normals as a flat `[nx, ny, nz, ...]` buffer.
    ///
    /// Follows the face winding, so a consistently wound solid gets
    /// consistently oriented normals.
    pub fn vertex_normals(&self) -> Vec<f32> {
        let mut normals = vec![DVec3::ZERO; self.points.len()];

        for face in &self.faces {
            let [a, b, c] = face.indices().map(|i| DVec3::from(self.points[i as usize]));
            let normal = (b - a).cross(c - a);
            for i in face.indices() {
                normals[i as usize] += normal;
            }
        }

        let mut result = Vec::with_capacity(normals.len() * 3);
        for n in normals {
            let n = n.normalize_or_zero();
            result.push(n.x as f32);
            result.push(n.y as f32);
            result.push(n.z as f32);
        }
        result
    }
}
