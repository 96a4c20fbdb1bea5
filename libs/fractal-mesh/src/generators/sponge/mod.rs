//! # Sponge Fractal
//!
//! Menger sponge. Each cube is cut into a 3×3×3 grid and the 6 face-center
//! cubes and the body-center cube are dropped, leaving 20 children.

use glam::DVec3;

use crate::assembler::MeshAssembler;
use crate::mesh::GenerationOutput;
use crate::request::FractalKind;

/// Face table of a leaf cube, as positions into the corner array built by
/// [`cube_corners`]. Two triangles per side, split along a fixed diagonal,
/// counter-clockwise when viewed from outside.
const LEAF_FACES: [[usize; 3]; 12] = [
    // Front (z = max)
    [4, 5, 6],
    [4, 6, 7],
    // Back (z = min)
    [1, 0, 3],
    [1, 3, 2],
    // Top (y = max)
    [3, 7, 6],
    [3, 6, 2],
    // Bottom (y = min)
    [0, 1, 5],
    [0, 5, 4],
    // Left (x = min)
    [0, 4, 7],
    [0, 7, 3],
    // Right (x = max)
    [5, 1, 2],
    [5, 2, 6],
];

/// Generates a Menger sponge mesh centered at the origin.
///
/// `size` is the side length of the outer cube.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::generators::sponge;
///
/// let mesh = sponge::generate(1, 3.0);
/// assert_eq!(mesh.face_count(), 240);
/// assert!(mesh.vertex_count() < 160);
/// ```
pub fn generate(level: u32, size: f64) -> GenerationOutput {
    let mut assembler =
        MeshAssembler::with_capacity(FractalKind::Sponge.projected_face_count(level));
    generate_into(level, size, &mut assembler);
    assembler.finish()
}

/// Runs the sponge recursion into `assembler`.
pub fn generate_into(level: u32, size: f64, assembler: &mut MeshAssembler) {
    subdivide(assembler, DVec3::ZERO, size, level);
}

/// Returns true for grid cells the sponge keeps: at most one zero component.
fn is_kept_cell(i: i32, j: i32, k: i32) -> bool {
    [i, j, k].iter().filter(|&&c| c == 0).count() <= 1
}

fn cube_corners(center: DVec3, side: f64) -> [DVec3; 8] {
    let h = side / 2.0;
    [
        center + DVec3::new(-h, -h, -h),
        center + DVec3::new(h, -h, -h),
        center + DVec3::new(h, h, -h),
        center + DVec3::new(-h, h, -h),
        center + DVec3::new(-h, -h, h),
        center + DVec3::new(h, -h, h),
        center + DVec3::new(h, h, h),
        center + DVec3::new(-h, h, h),
    ]
}

fn subdivide(assembler: &mut MeshAssembler, center: DVec3, side: f64, level: u32) {
    if level == 0 {
        let welded = assembler.weld_all(cube_corners(center, side));
        assembler.push_faces(&welded, &LEAF_FACES);
        return;
    }

    let child_side = side / 3.0;
    for i in -1..=1 {
        for j in -1..=1 {
            for k in -1..=1 {
                if !is_kept_cell(i, j, k) {
                    continue;
                }
                let offset = DVec3::new(f64::from(i), f64::from(j), f64::from(k)) * child_side;
                subdivide(assembler, center + offset, child_side, level - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests;
