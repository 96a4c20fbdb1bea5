//! Tests for the WASM-facing generation helpers.

use super::*;

/// Confirms the internal helper produces the base cube of the sponge.
#[test]
fn generate_produces_sponge_cube() {
    let mesh = generate_fractal_internal(FractalKind::Sponge, 0, 1.0).expect("generation succeeds");

    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.vertices().len(), 24); // 8 vertices * 3 components
    assert_eq!(mesh.indices().len(), 36); // 12 triangles * 3 indices
    assert!(!mesh.is_empty());
}

/// Ensures invalid parameters surface explicit errors.
#[test]
fn generate_rejects_invalid_size() {
    let err = generate_fractal_internal(FractalKind::Tetrahedron, 1, -2.0).unwrap_err();
    assert!(matches!(err, FractalError::InvalidSize(_)));
}

/// Tests that render buffers contain valid data.
#[test]
fn generate_mesh_buffers_valid() {
    let mesh = generate_fractal_internal(FractalKind::Octahedron, 2, 2.0)
        .expect("generation succeeds");

    for &v in &mesh.vertices() {
        assert!(v.is_finite(), "Vertex value should be finite");
    }

    let vertex_count = mesh.vertex_count();
    for &idx in &mesh.indices() {
        assert!(idx < vertex_count, "Index {} out of range", idx);
    }

    assert_eq!(mesh.normals().len(), mesh.vertices().len());
}

/// Tests the request metadata carried by the handle.
#[test]
fn handle_reports_request() {
    let mesh = generate_fractal_internal(FractalKind::Tetrahedron, 2, 1.5).unwrap();
    assert_eq!(mesh.kind(), "TetrahedronFractal");
    assert_eq!(mesh.level(), 2);
    assert_eq!(mesh.size(), 1.5);
    assert_eq!(mesh.file_name(), "tetrahedron_fractal_level2.obj");
}

/// Tests that the handle exports the mesh it holds.
#[test]
fn handle_exports_obj() {
    let mesh = generate_fractal_internal(FractalKind::Tetrahedron, 0, 1.0).unwrap();
    let text = mesh.export_obj();

    assert!(text.starts_with("# TetrahedronFractal level=0 size=1\n"));
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 4);
}

/// Tests the JSON request path with canonical kind names.
#[test]
fn generate_from_json() {
    let mesh = generate_fractal_json_internal(r#"{"kind":"SpongeFractal","level":1,"size":3.0}"#)
        .expect("valid json request");
    assert_eq!(mesh.triangle_count(), 240);
    assert_eq!(mesh.output().face_count(), 240);
}

/// Tests that malformed JSON is reported against the whole request.
#[test]
fn generate_from_json_rejects_malformed() {
    let diag = generate_fractal_json_internal(r#"{"kind":"Pyramid","level":1,"size":1.0}"#)
        .unwrap_err();
    assert_eq!(diag.field(), Field::Request);
    assert!(diag.message().contains("invalid request JSON"));
}

/// Tests that validation points at the offending parameter.
#[test]
fn validate_request_reports_field() {
    assert!(validate_request("sponge", 2, 1.0).is_none());

    assert_eq!(validate_request("pyramid", 2, 1.0).unwrap().field(), Field::Kind);
    assert_eq!(validate_request("sponge", 2, 0.0).unwrap().field(), Field::Size);
    assert_eq!(validate_request("sponge", 11, 1.0).unwrap().field(), Field::Level);
    assert_eq!(validate_request("sponge", 6, 1.0).unwrap().field(), Field::Level);
}

/// Tests the panel defaults.
#[test]
fn panel_defaults_are_consistent() {
    assert!(default_level() <= max_level());
    assert!(default_size() > 0.0);
    assert_eq!(
        fractal_kinds(),
        vec!["TetrahedronFractal", "SpongeFractal", "OctahedronFractal"]
    );
}
