//! # Tetrahedron Fractal
//!
//! Sierpinski tetrahedron. Each cell is replaced by the four half-size
//! tetrahedra at its corners; the central octahedral region is dropped simply
//! by never recursing into it.

use glam::DVec3;

use crate::assembler::MeshAssembler;
use crate::mesh::GenerationOutput;
use crate::request::FractalKind;

/// Face table of a leaf cell, as positions into `[p1, p2, p3, p4]`.
const LEAF_FACES: [[usize; 3]; 4] = [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];

/// Generates a Sierpinski tetrahedron mesh.
///
/// `size` is the half-extent: the base corners sit at alternating corners of
/// the cube `[-size, size]^3`.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::generators::tetrahedron;
///
/// let mesh = tetrahedron::generate(1, 1.0);
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.face_count(), 16);
/// ```
pub fn generate(level: u32, size: f64) -> GenerationOutput {
    let mut assembler =
        MeshAssembler::with_capacity(FractalKind::Tetrahedron.projected_face_count(level));
    generate_into(level, size, &mut assembler);
    assembler.finish()
}

/// Runs the tetrahedron recursion into `assembler`.
pub fn generate_into(level: u32, size: f64, assembler: &mut MeshAssembler) {
    let s = size;
    subdivide(
        assembler,
        [
            DVec3::new(s, s, s),
            DVec3::new(s, -s, -s),
            DVec3::new(-s, s, -s),
            DVec3::new(-s, -s, s),
        ],
        level,
    );
}

fn midpoint(a: DVec3, b: DVec3) -> DVec3 {
    (a + b) * 0.5
}

fn subdivide(assembler: &mut MeshAssembler, corners: [DVec3; 4], level: u32) {
    if level == 0 {
        let welded = assembler.weld_all(corners);
        assembler.push_faces(&welded, &LEAF_FACES);
        return;
    }

    let [p1, p2, p3, p4] = corners;
    let m12 = midpoint(p1, p2);
    let m13 = midpoint(p1, p3);
    let m14 = midpoint(p1, p4);
    let m23 = midpoint(p2, p3);
    let m24 = midpoint(p2, p4);
    let m34 = midpoint(p3, p4);

    subdivide(assembler, [p1, m12, m13, m14], level - 1);
    subdivide(assembler, [m12, p2, m23, m24], level - 1);
    subdivide(assembler, [m13, m23, p3, m34], level - 1);
    subdivide(assembler, [m14, m24, m34, p4], level - 1);
}
