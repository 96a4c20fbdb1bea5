//! # Generation Requests
//!
//! Fractal families and the `(kind, level, size)` request that drives a
//! generation call, with the precondition checks run before any recursion.

use std::fmt;
use std::str::FromStr;

use config::constants::{GeneratorConfig, DEFAULT_LEVEL, DEFAULT_SIZE, MAX_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::{FractalError, FractalResult};

/// The three supported fractal families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FractalKind {
    /// Sierpinski tetrahedron: recurse into the four corner tetrahedra.
    #[serde(rename = "TetrahedronFractal")]
    Tetrahedron,
    /// Menger sponge: recurse into 20 of the 27 grid sub-cubes.
    #[serde(rename = "SpongeFractal")]
    Sponge,
    /// Octahedron fractal: recurse into six half-scale octahedra at the tips.
    #[serde(rename = "OctahedronFractal")]
    Octahedron,
}

impl FractalKind {
    /// Every family, in menu order.
    pub const ALL: [FractalKind; 3] = [
        FractalKind::Tetrahedron,
        FractalKind::Sponge,
        FractalKind::Octahedron,
    ];

    /// Returns the canonical name written to export headers.
    pub fn name(self) -> &'static str {
        match self {
            FractalKind::Tetrahedron => "TetrahedronFractal",
            FractalKind::Sponge => "SpongeFractal",
            FractalKind::Octahedron => "OctahedronFractal",
        }
    }

    /// Returns the snake_case stem used for file names.
    pub fn slug(self) -> &'static str {
        match self {
            FractalKind::Tetrahedron => "tetrahedron_fractal",
            FractalKind::Sponge => "sponge_fractal",
            FractalKind::Octahedron => "octahedron_fractal",
        }
    }

    /// Faces emitted by one base-case cell.
    pub fn faces_per_cell(self) -> usize {
        match self {
            FractalKind::Tetrahedron => 4,
            FractalKind::Sponge => 12,
            FractalKind::Octahedron => 8,
        }
    }

    /// Child cells visited per recursion step.
    pub fn children_per_cell(self) -> usize {
        match self {
            FractalKind::Tetrahedron => 4,
            FractalKind::Sponge => 20,
            FractalKind::Octahedron => 6,
        }
    }

    /// Number of faces a generation at `level` emits before welding.
    ///
    /// Saturates at `usize::MAX` instead of overflowing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fractal_mesh::FractalKind;
    ///
    /// assert_eq!(FractalKind::Sponge.projected_face_count(1), 240);
    /// assert_eq!(FractalKind::Tetrahedron.projected_face_count(0), 4);
    /// ```
    pub fn projected_face_count(self, level: u32) -> usize {
        self.children_per_cell()
            .checked_pow(level)
            .and_then(|cells| cells.checked_mul(self.faces_per_cell()))
            .unwrap_or(usize::MAX)
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FractalKind {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tetrahedronfractal" | "tetrahedron" | "sierpinski" => Ok(FractalKind::Tetrahedron),
            "spongefractal" | "sponge" | "menger" | "cube" => Ok(FractalKind::Sponge),
            "octahedronfractal" | "octahedron" => Ok(FractalKind::Octahedron),
            _ => Err(FractalError::UnknownKind(s.to_string())),
        }
    }
}

/// Parameters of one generation call.
///
/// # Example
///
/// ```rust
/// use fractal_mesh::{FractalKind, FractalRequest};
///
/// let request = FractalRequest::new(FractalKind::Tetrahedron, 3, 2.0);
/// assert!(request.validate(&Default::default()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalRequest {
    /// Fractal family
    pub kind: FractalKind,
    /// Recursion depth, 0 is the unsubdivided primitive
    pub level: u32,
    /// Half-extent (tetrahedron, octahedron) or side length (sponge)
    pub size: f64,
}

impl FractalRequest {
    /// Creates a request. Nothing is checked until [`validate`](Self::validate).
    pub fn new(kind: FractalKind, level: u32, size: f64) -> Self {
        Self { kind, level, size }
    }

    /// Creates a request with the default level and size.
    pub fn with_defaults(kind: FractalKind) -> Self {
        Self::new(kind, DEFAULT_LEVEL, DEFAULT_SIZE)
    }

    /// Number of faces this request emits before welding.
    pub fn projected_face_count(&self) -> usize {
        self.kind.projected_face_count(self.level)
    }

    /// Checks the generation preconditions against `config`.
    ///
    /// A level within `config.max_level` can still be rejected by the
    /// triangle budget: with the default config the sponge stops at level 4
    /// and the octahedron at level 7.
    ///
    /// # Errors
    ///
    /// - [`FractalError::InvalidSize`] when size is not in `(0, MAX_SIZE]`
    /// - [`FractalError::InvalidLevel`] when level exceeds `config.max_level`
    /// - [`FractalError::TooManyTriangles`] when the projected face count
    ///   exceeds `config.max_triangles`
    pub fn validate(&self, config: &GeneratorConfig) -> FractalResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 || self.size > MAX_SIZE {
            return Err(FractalError::InvalidSize(self.size));
        }
        if self.level > config.max_level {
            return Err(FractalError::InvalidLevel {
                level: self.level,
                max: config.max_level,
            });
        }
        let projected = self.projected_face_count();
        if projected > config.max_triangles {
            return Err(FractalError::TooManyTriangles {
                count: projected,
                max: config.max_triangles,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_uses_canonical_name() {
        assert_eq!(FractalKind::Tetrahedron.to_string(), "TetrahedronFractal");
        assert_eq!(FractalKind::Sponge.to_string(), "SpongeFractal");
        assert_eq!(FractalKind::Octahedron.to_string(), "OctahedronFractal");
    }

    #[test]
    fn test_kind_parses_names_and_aliases() {
        for kind in FractalKind::ALL {
            assert_eq!(kind.name().parse::<FractalKind>().unwrap(), kind);
        }
        assert_eq!("Menger".parse::<FractalKind>().unwrap(), FractalKind::Sponge);
        assert_eq!(" sierpinski ".parse::<FractalKind>().unwrap(), FractalKind::Tetrahedron);
        assert_eq!("OCTAHEDRON".parse::<FractalKind>().unwrap(), FractalKind::Octahedron);
    }

    #[test]
    fn test_kind_rejects_unknown() {
        let err = "dodecahedron".parse::<FractalKind>().unwrap_err();
        assert!(matches!(err, FractalError::UnknownKind(name) if name == "dodecahedron"));
    }

    #[test]
    fn test_projected_face_counts() {
        assert_eq!(FractalKind::Tetrahedron.projected_face_count(2), 64);
        assert_eq!(FractalKind::Sponge.projected_face_count(2), 4800);
        assert_eq!(FractalKind::Octahedron.projected_face_count(1), 48);
    }

    #[test]
    fn test_projected_face_count_saturates() {
        assert_eq!(FractalKind::Sponge.projected_face_count(64), usize::MAX);
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        let config = GeneratorConfig::default();
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY, MAX_SIZE * 10.0] {
            let err = FractalRequest::new(FractalKind::Sponge, 1, size)
                .validate(&config)
                .unwrap_err();
            assert!(matches!(err, FractalError::InvalidSize(_)));
        }
    }

    #[test]
    fn test_validate_rejects_level_above_bound() {
        let config = GeneratorConfig::new(3, 1_000_000).unwrap();
        let err = FractalRequest::new(FractalKind::Tetrahedron, 4, 1.0)
            .validate(&config)
            .unwrap_err();
        assert!(matches!(err, FractalError::InvalidLevel { level: 4, max: 3 }));
    }

    #[test]
    fn test_validate_rejects_over_budget() {
        let config = GeneratorConfig::default();
        let err = FractalRequest::new(FractalKind::Sponge, 10, 1.0)
            .validate(&config)
            .unwrap_err();
        assert!(matches!(err, FractalError::TooManyTriangles { .. }));
    }

    #[test]
    fn test_validate_budget_caps_levels_under_bound() {
        let config = GeneratorConfig::default();
        let accepts = |kind, level| FractalRequest::new(kind, level, 1.0).validate(&config).is_ok();

        assert!(accepts(FractalKind::Tetrahedron, config.max_level));
        assert!(accepts(FractalKind::Sponge, 4));
        assert!(!accepts(FractalKind::Sponge, 5));
        assert!(accepts(FractalKind::Octahedron, 7));
        assert!(!accepts(FractalKind::Octahedron, 8));
    }

    #[test]
    fn test_validate_accepts_level_zero() {
        let config = GeneratorConfig::default();
        for kind in FractalKind::ALL {
            assert!(FractalRequest::new(kind, 0, 0.001).validate(&config).is_ok());
        }
    }

    #[test]
    fn test_with_defaults() {
        let request = FractalRequest::with_defaults(FractalKind::Octahedron);
        assert_eq!(request.level, DEFAULT_LEVEL);
        assert_eq!(request.size, DEFAULT_SIZE);
    }
}
