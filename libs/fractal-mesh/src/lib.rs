//! # Fractal Mesh
//!
//! Browser-safe procedural mesh generation for three recursive fractal
//! families, producing indexed triangle meshes with welded vertices.
//!
//! ## Architecture
//!
//! ```text
//! FractalRequest → generator recursion → MeshAssembler (VertexWeldTable)
//!                                              ↓
//!                                      GenerationOutput → OBJ text
//! ```
//!
//! ## Algorithms
//!
//! - **Tetrahedron**: Sierpinski corner recursion, 4 children per cell
//! - **Sponge**: Menger 3×3×3 grid recursion, 20 children per cell
//! - **Octahedron**: tip recursion, 6 half-scale children per cell
//! - **Welding**: quantized coordinate keys, first occurrence wins
//!
//! Output is a pure function of `(kind, level, size)`: identical requests
//! produce identical points, faces and buffers.
//!
//! ## Usage
//!
//! ```rust
//! use fractal_mesh::{export_obj, generate, FractalKind, FractalRequest};
//!
//! let request = FractalRequest::new(FractalKind::Sponge, 1, 3.0);
//! let mesh = generate(&request)?;
//! assert_eq!(mesh.face_count(), 240);
//!
//! let obj = export_obj(request.kind, request.level, request.size, mesh.points(), mesh.faces());
//! assert!(obj.starts_with("# SpongeFractal level=1 size=3"));
//! # Ok::<(), fractal_mesh::FractalError>(())
//! ```

pub mod assembler;
pub mod error;
pub mod export;
pub mod generators;
pub mod mesh;
pub mod request;
pub mod weld;

pub use assembler::MeshAssembler;
pub use config::constants::GeneratorConfig;
pub use error::{FractalError, FractalResult};
pub use export::{export_obj, parse_obj, save_obj, suggested_file_name, write_obj, ImportedMesh};
pub use mesh::{Face, GenerationOutput, Point3};
pub use request::{FractalKind, FractalRequest};
pub use weld::VertexWeldTable;

use tracing::{debug, warn};

/// Generates the mesh for a request using the default limits.
///
/// # Errors
///
/// Returns an error if the request fails [`FractalRequest::validate`].
///
/// # Example
///
/// ```rust
/// use fractal_mesh::{generate, FractalKind, FractalRequest};
///
/// let mesh = generate(&FractalRequest::new(FractalKind::Tetrahedron, 0, 1.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face_count(), 4);
/// ```
pub fn generate(request: &FractalRequest) -> FractalResult<GenerationOutput> {
    generate_with_config(request, &GeneratorConfig::default())
}

/// Generates the mesh for a request, checking it against `config`.
///
/// Each call owns a fresh weld table and output; nothing is shared between
/// calls.
///
/// # Errors
///
/// Returns an error if the request fails [`FractalRequest::validate`].
pub fn generate_with_config(
    request: &FractalRequest,
    config: &GeneratorConfig,
) -> FractalResult<GenerationOutput> {
    if let Err(err) = request.validate(config) {
        warn!("Rejected {} request: {}", request.kind, err);
        return Err(err);
    }

    debug!(
        "Generating {} level={} size={} ({} faces projected)",
        request.kind,
        request.level,
        request.size,
        request.projected_face_count()
    );

    let mut assembler = MeshAssembler::with_capacity(request.projected_face_count());
    generators::generate_into(request.kind, request.level, request.size, &mut assembler);
    let output = assembler.finish();

    debug!(
        "Generated {}: {} points, {} faces",
        request.kind,
        output.vertex_count(),
        output.face_count()
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_base_cases() {
        let expected = [
            (FractalKind::Tetrahedron, 4, 4),
            (FractalKind::Sponge, 8, 12),
            (FractalKind::Octahedron, 6, 8),
        ];
        for (kind, points, faces) in expected {
            let mesh = generate(&FractalRequest::new(kind, 0, 1.0)).unwrap();
            assert_eq!(mesh.vertex_count(), points, "{kind}");
            assert_eq!(mesh.face_count(), faces, "{kind}");
        }
    }

    #[test]
    fn test_generate_matches_direct_generator() {
        let via_request = generate(&FractalRequest::new(FractalKind::Octahedron, 2, 1.5)).unwrap();
        let direct = generators::octahedron::generate(2, 1.5);
        assert_eq!(via_request, direct);
    }

    #[test]
    fn test_generate_rejects_invalid_request() {
        let result = generate(&FractalRequest::new(FractalKind::Sponge, 1, 0.0));
        assert!(matches!(result, Err(FractalError::InvalidSize(_))));
    }

    #[test]
    fn test_generate_keeps_large_sizes_distinct() {
        // Power-of-two scales keep the arithmetic exact, so the weld counts
        // must match the unit-size meshes.
        for exponent in [50, 100] {
            let scale = 2f64.powi(exponent);

            let sponge = generate(&FractalRequest::new(FractalKind::Sponge, 1, 3.0 * scale)).unwrap();
            assert_eq!(sponge.vertex_count(), 64, "2^{exponent}");
            assert!(sponge.faces().iter().all(|f| !f.is_degenerate()));
            assert!(sponge.validate());

            let octa = generate(&FractalRequest::new(FractalKind::Octahedron, 1, scale)).unwrap();
            assert_eq!(octa.vertex_count(), 19, "2^{exponent}");
            assert!(octa.validate());
        }
    }

    #[test]
    fn test_generate_rejects_size_above_max() {
        let result = generate(&FractalRequest::new(FractalKind::Octahedron, 1, 1e301));
        assert!(matches!(result, Err(FractalError::InvalidSize(_))));
    }

    #[test]
    fn test_generate_with_tighter_config() {
        let config = GeneratorConfig::new(1, 1_000).unwrap();
        let ok = generate_with_config(&FractalRequest::new(FractalKind::Tetrahedron, 1, 1.0), &config);
        assert!(ok.is_ok());

        let too_deep =
            generate_with_config(&FractalRequest::new(FractalKind::Tetrahedron, 2, 1.0), &config);
        assert!(matches!(too_deep, Err(FractalError::InvalidLevel { .. })));
    }
}
