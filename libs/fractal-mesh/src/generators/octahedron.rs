//! # Octahedron Fractal
//!
//! Each octahedron is replaced by six half-scale octahedra centered halfway
//! out along its six axis tips. Child centers are absolute positions; the
//! parent center is already folded in and must not be added again.

use glam::DVec3;

use crate::assembler::MeshAssembler;
use crate::mesh::GenerationOutput;
use crate::request::FractalKind;

/// Face table of a leaf octahedron, as positions into
/// `[+y, -y, +x, -x, +z, -z]`. Four faces around the top apex, then four
/// around the bottom apex, counter-clockwise when viewed from outside.
const LEAF_FACES: [[usize; 3]; 8] = [
    [0, 4, 2],
    [0, 2, 5],
    [0, 5, 3],
    [0, 3, 4],
    [1, 2, 4],
    [1, 5, 2],
    [1, 3, 5],
    [1, 4, 3],
];

/// Unit directions of the six tips, in weld order.
const TIPS: [DVec3; 6] = [
    DVec3::Y,
    DVec3::NEG_Y,
    DVec3::X,
    DVec3::NEG_X,
    DVec3::Z,
    DVec3::NEG_Z,
];

/// Unit directions of the six child centers, in recursion order.
const CHILD_DIRECTIONS: [DVec3; 6] = [
    DVec3::X,
    DVec3::NEG_X,
    DVec3::Y,
    DVec3::NEG_Y,
    DVec3::Z,
    DVec3::NEG_Z,
];

/// Generates an octahedron fractal mesh centered at the origin.
///
/// `size` is the distance from the center to each tip.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::generators::octahedron;
///
/// let mesh = octahedron::generate(0, 1.0);
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.face_count(), 8);
/// ```
pub fn generate(level: u32, size: f64) -> GenerationOutput {
    let mut assembler =
        MeshAssembler::with_capacity(FractalKind::Octahedron.projected_face_count(level));
    generate_into(level, size, &mut assembler);
    assembler.finish()
}

/// Runs the octahedron recursion into `assembler`.
pub fn generate_into(level: u32, size: f64, assembler: &mut MeshAssembler) {
    subdivide(assembler, DVec3::ZERO, size, level);
}

fn subdivide(assembler: &mut MeshAssembler, center: DVec3, scale: f64, level: u32) {
    if level == 0 {
        let welded = assembler.weld_all(TIPS.map(|dir| center + dir * scale));
        assembler.push_faces(&welded, &LEAF_FACES);
        return;
    }

    let child_scale = scale / 2.0;
    for dir in CHILD_DIRECTIONS {
        subdivide(assembler, center + dir * child_scale, child_scale, level - 1);
    }
}
