//! # Vertex Welding
//!
//! Deduplicates points emitted during recursion into a dense index space.
//!
//! Recursive subdivision emits the same corner from several neighbouring
//! cells, usually with slightly different rounding. Each coordinate is
//! quantized to [`WELD_DECIMAL_PLACES`] decimal places and the triple of
//! rounded bit patterns is used as the key: the first point to claim a key owns its index.
//!
//! [`WELD_DECIMAL_PLACES`]: config::constants::WELD_DECIMAL_PLACES

use std::collections::HashMap;

use config::constants::quantize_coordinate;

use crate::mesh::Point3;

/// Quantized coordinate triple used as the weld key.
type WeldKey = (u64, u64, u64);

fn weld_key(p: Point3) -> WeldKey {
    (
        quantize_coordinate(p.x),
        quantize_coordinate(p.y),
        quantize_coordinate(p.z),
    )
}

/// Append-only map from quantized coordinates to vertex indices.
///
/// Indices are 0-based and assigned in insertion order. Stored points keep
/// their original unrounded coordinates.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::{Point3, VertexWeldTable};
///
/// let mut table = VertexWeldTable::new();
/// let a = table.lookup_or_insert(Point3::new(1.0 / 3.0, 0.0, 0.0));
/// let b = table.lookup_or_insert(Point3::new(0.333_333_3, 0.0, 0.0));
/// assert_eq!(a, b);
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VertexWeldTable {
    lookup: HashMap<WeldKey, u32>,
    points: Vec<Point3>,
    vertices: Vec<f32>,
}

impl VertexWeldTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with room for `capacity` distinct points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lookup: HashMap::with_capacity(capacity),
            points: Vec::with_capacity(capacity),
            vertices: Vec::with_capacity(capacity * 3),
        }
    }

    /// Returns the index of `p`, inserting it if no welded point matches.
    ///
    /// A new point is appended to both the point list and the flat vertex
    /// buffer and gets the next sequential index.
    pub fn lookup_or_insert(&mut self, p: Point3) -> u32 {
        let next = self.points.len() as u32;
        let index = *self.lookup.entry(weld_key(p)).or_insert(next);

        if index == next {
            self.points.push(p);
            self.vertices.extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
        }

        index
    }

    /// Returns the number of distinct points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if nothing has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the welded points in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Consumes the table, returning the flat vertex buffer and the points.
    pub fn into_parts(self) -> (Vec<f32>, Vec<Point3>) {
        (self.vertices, self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense_and_ordered() {
        let mut table = VertexWeldTable::new();
        assert_eq!(table.lookup_or_insert(Point3::new(0.0, 0.0, 0.0)), 0);
        assert_eq!(table.lookup_or_insert(Point3::new(1.0, 0.0, 0.0)), 1);
        assert_eq!(table.lookup_or_insert(Point3::new(0.0, 1.0, 0.0)), 2);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_repeat_point_returns_existing_index() {
        let mut table = VertexWeldTable::new();
        let a = table.lookup_or_insert(Point3::new(0.5, 0.5, 0.5));
        table.lookup_or_insert(Point3::new(1.0, 1.0, 1.0));
        let b = table.lookup_or_insert(Point3::new(0.5, 0.5, 0.5));
        assert_eq!(a, b);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut table = VertexWeldTable::new();
        let first = Point3::new(0.100_001, 0.0, 0.0);
        table.lookup_or_insert(first);
        table.lookup_or_insert(Point3::new(0.099_999, 0.0, 0.0));
        assert_eq!(table.points(), &[first]);
    }

    #[test]
    fn test_points_beyond_precision_stay_distinct() {
        let mut table = VertexWeldTable::new();
        let a = table.lookup_or_insert(Point3::new(0.000_01, 0.0, 0.0));
        let b = table.lookup_or_insert(Point3::new(0.000_02, 0.0, 0.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_signed_zero_welds() {
        let mut table = VertexWeldTable::new();
        let a = table.lookup_or_insert(Point3::new(0.0, 1.0, 0.0));
        let b = table.lookup_or_insert(Point3::new(-0.0, 1.0, -0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_stores_unrounded_point() {
        let mut table = VertexWeldTable::new();
        let p = Point3::new(1.0 / 3.0, 2.0 / 3.0, 0.123_456_789);
        table.lookup_or_insert(p);
        assert_eq!(table.points()[0], p);
    }

    #[test]
    fn test_vertex_buffer_tracks_points() {
        let mut table = VertexWeldTable::new();
        table.lookup_or_insert(Point3::new(1.0, 2.0, 3.0));
        table.lookup_or_insert(Point3::new(1.0, 2.0, 3.0));
        table.lookup_or_insert(Point3::new(4.0, 5.0, 6.0));
        let (vertices, points) = table.into_parts();
        assert_eq!(vertices, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(points.len(), 2);
    }
}
