//! # Mesh Assembler
//!
//! Shared sink for all three generators. Every corner goes through the weld
//! table before a face can reference it, and faces are mirrored into the flat
//! index buffer as they arrive, so the output is consistent at every step of
//! the traversal.

use glam::DVec3;

use crate::mesh::{Face, GenerationOutput};
use crate::weld::VertexWeldTable;

/// Builds a [`GenerationOutput`] one welded corner and one face at a time.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::MeshAssembler;
/// use glam::DVec3;
///
/// let mut assembler = MeshAssembler::new();
/// let [a, b, c] = assembler.weld_all([DVec3::ZERO, DVec3::X, DVec3::Y]);
/// assembler.push_face(a, b, c);
///
/// let mesh = assembler.finish();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.indices(), &[0, 1, 2]);
/// ```
#[derive(Debug, Default)]
pub struct MeshAssembler {
    weld: VertexWeldTable,
    faces: Vec<Face>,
    indices: Vec<u32>,
}

impl MeshAssembler {
    /// Creates an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assembler sized for an expected face count.
    ///
    /// Closed meshes have roughly half as many vertices as faces.
    pub fn with_capacity(face_count: usize) -> Self {
        Self {
            weld: VertexWeldTable::with_capacity(face_count / 2 + 4),
            faces: Vec::with_capacity(face_count),
            indices: Vec::with_capacity(face_count * 3),
        }
    }

    /// Welds one point and returns its index.
    #[inline]
    pub fn weld(&mut self, position: DVec3) -> u32 {
        self.weld.lookup_or_insert(position.into())
    }

    /// Welds a fixed set of corners in order.
    pub fn weld_all<const N: usize>(&mut self, corners: [DVec3; N]) -> [u32; N] {
        corners.map(|corner| self.weld(corner))
    }

    /// Appends a face referencing already-welded indices.
    pub fn push_face(&mut self, v1: u32, v2: u32, v3: u32) {
        debug_assert!(
            (v1.max(v2).max(v3) as usize) < self.weld.len(),
            "face references an index that was never welded"
        );
        self.faces.push(Face::new(v1, v2, v3));
        self.indices.extend_from_slice(&[v1, v2, v3]);
    }

    /// Appends faces described as positions into a corner index table.
    pub fn push_faces(&mut self, corners: &[u32], table: &[[usize; 3]]) {
        for &[a, b, c] in table {
            self.push_face(corners[a], corners[b], corners[c]);
        }
    }

    /// Returns the number of faces pushed so far.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of distinct points welded so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.weld.len()
    }

    /// Finishes assembly and returns the output record.
    pub fn finish(self) -> GenerationOutput {
        let (vertices, points) = self.weld.into_parts();
        GenerationOutput::from_parts(vertices, self.indices, points, self.faces)
    }
}
