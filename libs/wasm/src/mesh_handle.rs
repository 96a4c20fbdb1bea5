//! # Mesh Handle
//!
//! WASM-friendly wrapper for a generated fractal that can be transferred to
//! JavaScript.

use fractal_mesh::{export_obj, FractalRequest, GenerationOutput};
use wasm_bindgen::prelude::*;

/// A handle to a generated fractal mesh.
///
/// Holds the render buffers for the scene and the full-precision mesh for
/// export, so the "download" button never regenerates.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_fractal("SpongeFractal", 2, 1.0);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///
/// const text = mesh.export_obj();
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct FractalMeshHandle {
    request: FractalRequest,
    output: GenerationOutput,
}

#[wasm_bindgen]
impl FractalMeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.output.vertex_count() as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.output.face_count() as u32
    }

    /// Returns the recursion level the mesh was generated at.
    #[wasm_bindgen(getter)]
    pub fn level(&self) -> u32 {
        self.request.level
    }

    /// Returns the base size the mesh was generated at.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> f64 {
        self.request.size
    }

    /// Returns the canonical fractal kind name.
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.request.kind.to_string()
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.output.vertices().to_vec()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.output.indices().to_vec()
    }

    /// Returns area-weighted vertex normals as a Float32Array.
    ///
    /// Format: [nx, ny, nz, nx, ny, nz, ...]
    /// Length: vertex_count * 3
    pub fn normals(&self) -> Vec<f32> {
        self.output.vertex_normals()
    }

    /// Returns true if the mesh has no geometry.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Returns the mesh as OBJ text.
    pub fn export_obj(&self) -> String {
        export_obj(
            self.request.kind,
            self.request.level,
            self.request.size,
            self.output.points(),
            self.output.faces(),
        )
    }

    /// Returns the suggested download file name.
    pub fn file_name(&self) -> String {
        fractal_mesh::suggested_file_name(self.request.kind, self.request.level)
    }
}

impl FractalMeshHandle {
    /// Wraps a generated mesh together with the request that produced it.
    pub fn new(request: FractalRequest, output: GenerationOutput) -> Self {
        Self { request, output }
    }

    /// Returns the generated mesh.
    pub fn output(&self) -> &GenerationOutput {
        &self.output
    }
}
