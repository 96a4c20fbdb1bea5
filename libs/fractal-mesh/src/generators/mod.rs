//! # Generators
//!
//! Recursive subdivision for the three fractal families.
//!
//! Every generator follows the same shape: a base construction sized by the
//! request, a recursion that splits a cell into child cells down to level 0,
//! and a base case that welds the cell's corners and emits a fixed face table
//! through the [`MeshAssembler`].
//!
//! | Family      | Children per cell | Faces per leaf |
//! |-------------|-------------------|----------------|
//! | Tetrahedron | 4                 | 4              |
//! | Sponge      | 20                | 12             |
//! | Octahedron  | 6                 | 8              |

pub mod octahedron;
pub mod sponge;
pub mod tetrahedron;

use crate::assembler::MeshAssembler;
use crate::request::FractalKind;

/// Runs the generator for `kind` into an existing assembler.
///
/// Does not validate `level` or `size`; callers go through
/// [`crate::generate`] for that.
pub fn generate_into(kind: FractalKind, level: u32, size: f64, assembler: &mut MeshAssembler) {
    match kind {
        FractalKind::Tetrahedron => tetrahedron::generate_into(level, size, assembler),
        FractalKind::Sponge => sponge::generate_into(level, size, assembler),
        FractalKind::Octahedron => octahedron::generate_into(level, size, assembler),
    }
}
