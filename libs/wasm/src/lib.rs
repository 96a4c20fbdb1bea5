//! WASM-facing entry points for the fractal mesh generator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which return
//! Rust error types instead of `JsValue` and need no JS host.
//!
//! ```
//! use fractal_mesh::FractalKind;
//!
//! let mesh = fractal_wasm::generate_fractal_internal(FractalKind::Sponge, 0, 1.0).unwrap();
//! assert_eq!(mesh.triangle_count(), 12);
//! ```

use config::constants::{DEFAULT_LEVEL, DEFAULT_SIZE, MAX_LEVEL};
use fractal_mesh::{generate, FractalError, FractalKind, FractalRequest};
use tracing::debug;
use wasm_bindgen::prelude::*;

mod diagnostics;
mod mesh_handle;

pub use diagnostics::{Diagnostic, Field};
pub use mesh_handle::FractalMeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "fractal-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the level bound for the level slider.
///
/// The triangle budget caps some families lower (sponge 4, octahedron 7);
/// [`validate_request`] reports those as level diagnostics.
///
/// # Examples
/// ```
/// assert_eq!(fractal_wasm::max_level(), 10);
/// ```
#[wasm_bindgen]
pub fn max_level() -> u32 {
    MAX_LEVEL
}

/// Returns the level the parameter panel starts at.
#[wasm_bindgen]
pub fn default_level() -> u32 {
    DEFAULT_LEVEL
}

/// Returns the size the parameter panel starts at.
#[wasm_bindgen]
pub fn default_size() -> f64 {
    DEFAULT_SIZE
}

/// Returns the canonical names of all fractal kinds, in menu order.
///
/// # Examples
/// ```
/// assert_eq!(fractal_wasm::fractal_kinds().len(), 3);
/// ```
#[wasm_bindgen]
pub fn fractal_kinds() -> Vec<String> {
    FractalKind::ALL.iter().map(|k| k.to_string()).collect()
}

/// Generates a fractal mesh from loose parameters.
///
/// `kind` accepts the canonical names (`"SpongeFractal"`) and short aliases
/// (`"sponge"`).
///
/// # Errors
/// Returns a JavaScript error string when the request is rejected. An
/// empty mesh is reported as its own error so the UI can show a
/// "nothing to display" state.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const mesh = generate_fractal("tetrahedron", 3, 1.0);
/// //   console.log("Triangles:", mesh.triangle_count);
/// // } catch (error) {
/// //   console.error("Generation failed:", error);
/// // }
/// ```
#[wasm_bindgen]
pub fn generate_fractal(kind: &str, level: u32, size: f64) -> Result<FractalMeshHandle, JsValue> {
    let kind: FractalKind = kind.parse().map_err(|err: FractalError| to_js_error(&err))?;
    generate_fractal_internal(kind, level, size).map_err(|err| to_js_error(&err))
}

/// Generates a fractal mesh from a JSON request such as
/// `{"kind": "SpongeFractal", "level": 2, "size": 1.0}`.
///
/// # Errors
/// Returns a JavaScript error string when the JSON is malformed or the
/// request is rejected.
#[wasm_bindgen]
pub fn generate_fractal_json(request_json: &str) -> Result<FractalMeshHandle, JsValue> {
    generate_fractal_json_internal(request_json).map_err(|diag| JsValue::from_str(&diag.to_string()))
}

/// Checks parameters without generating anything.
///
/// Returns `None` when the request is valid, otherwise the diagnostic for
/// the offending field.
#[wasm_bindgen]
pub fn validate_request(kind: &str, level: u32, size: f64) -> Option<Diagnostic> {
    let kind: FractalKind = match kind.parse() {
        Ok(kind) => kind,
        Err(err) => return Some(Diagnostic::from(err)),
    };
    FractalRequest::new(kind, level, size)
        .validate(&Default::default())
        .err()
        .map(Diagnostic::from)
}

/// Host-side generation used by the JS entry points and native tests.
///
/// # Errors
/// Returns the request validation error, or [`FractalError::EmptyMesh`] if
/// generation produced no geometry.
///
/// # Examples
/// ```
/// use fractal_mesh::FractalKind;
///
/// let mesh = fractal_wasm::generate_fractal_internal(FractalKind::Octahedron, 1, 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 19);
/// ```
pub fn generate_fractal_internal(
    kind: FractalKind,
    level: u32,
    size: f64,
) -> Result<FractalMeshHandle, FractalError> {
    let request = FractalRequest::new(kind, level, size);
    let output = generate(&request)?;
    if output.is_empty() {
        return Err(FractalError::EmptyMesh);
    }

    debug!(
        "Handing {} vertices, {} triangles to the renderer",
        output.vertex_count(),
        output.face_count()
    );
    Ok(FractalMeshHandle::new(request, output))
}

/// Host-side JSON entry point.
///
/// # Errors
/// Returns a [`Diagnostic`] for malformed JSON or a rejected request.
pub fn generate_fractal_json_internal(request_json: &str) -> Result<FractalMeshHandle, Diagnostic> {
    let request: FractalRequest = serde_json::from_str(request_json)
        .map_err(|err| Diagnostic::new(Field::Request, format!("invalid request JSON: {err}")))?;
    generate_fractal_internal(request.kind, request.level, request.size).map_err(Diagnostic::from)
}

fn to_js_error(err: &FractalError) -> JsValue {
    JsValue::from_str(&Diagnostic::from(err).to_string())
}

#[cfg(test)]
mod tests;
