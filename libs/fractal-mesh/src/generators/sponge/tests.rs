//! Tests for the Menger sponge generator.

use super::*;
use crate::mesh::Point3;

/// Returns the outward-facing test for every face of a mesh centered on `center`.
fn faces_point_away_from(mesh: &GenerationOutput, center: DVec3) -> bool {
    mesh.faces().iter().all(|face| {
        let [a, b, c] = face.indices().map(|i| DVec3::from(mesh.points()[i as usize]));
        let normal = (b - a).cross(c - a);
        normal.dot((a + b + c) / 3.0 - center) > 0.0
    })
}

#[test]
fn test_level_zero_counts() {
    let mesh = generate(0, 1.0);
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 12);
}

#[test]
fn test_level_zero_is_centered_cube() {
    let mesh = generate(0, 2.0);
    let (min, max) = mesh.bounding_box();
    assert_eq!(min, Point3::new(-1.0, -1.0, -1.0));
    assert_eq!(max, Point3::new(1.0, 1.0, 1.0));
}

#[test]
fn test_level_zero_winds_outward() {
    let mesh = generate(0, 1.0);
    assert!(faces_point_away_from(&mesh, DVec3::ZERO));
}

#[test]
fn test_level_zero_face_pattern() {
    let mesh = generate(0, 1.0);
    let expected: Vec<u32> = LEAF_FACES.iter().flatten().map(|&i| i as u32).collect();
    assert_eq!(mesh.indices(), expected.as_slice());
}

#[test]
fn test_kept_cells() {
    let kept: Vec<(i32, i32, i32)> = (-1..=1)
        .flat_map(|i| (-1..=1).flat_map(move |j| (-1..=1).map(move |k| (i, j, k))))
        .filter(|&(i, j, k)| is_kept_cell(i, j, k))
        .collect();

    assert_eq!(kept.len(), 20);
    assert!(!is_kept_cell(0, 0, 0));
    assert!(!is_kept_cell(1, 0, 0));
    assert!(!is_kept_cell(0, 0, -1));
    assert!(is_kept_cell(1, 1, 0));
    assert!(is_kept_cell(-1, -1, -1));
}

#[test]
fn test_level_one_counts() {
    let mesh = generate(1, 3.0);
    assert_eq!(mesh.face_count(), 240);
    // Every point of the 4x4x4 lattice is a corner of some kept cube
    assert_eq!(mesh.vertex_count(), 64);
    assert!(mesh.vertex_count() < 160);
}

#[test]
fn test_level_one_drops_center() {
    let mesh = generate(1, 3.0);
    // Kept cubes have two nonzero grid indices, so no triangle centroid
    // falls strictly inside the removed body-center cube.
    let center_hit = mesh.faces().iter().any(|face| {
        let [a, b, c] = face.indices().map(|i| DVec3::from(mesh.points()[i as usize]));
        let centroid = (a + b + c) / 3.0;
        centroid.abs().max_element() < 0.5
    });
    assert!(!center_hit);
}

#[test]
fn test_level_two_counts() {
    let mesh = generate(2, 1.0);
    assert_eq!(mesh.face_count(), 4800);
    assert_eq!(mesh.vertex_count(), 896);
    assert!(mesh.validate());
}
