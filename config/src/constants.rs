//! # Configuration Constants
//!
//! Centralized constants for the fractal mesh pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Vertex weld quantization
//! - **Limits**: Recursion and output bounds
//! - **Defaults**: Values offered to callers that supply no parameters
//! - **Export**: Text mesh file conventions

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Number of decimal places kept when quantizing a coordinate into a weld key.
///
/// Two points whose coordinates agree after rounding to this many decimal
/// places are the same vertex.
///
/// # Example
///
/// ```rust
/// use config::constants::{WELD_DECIMAL_PLACES, WELD_QUANTIZATION_SCALE};
///
/// assert_eq!(10f64.powi(WELD_DECIMAL_PLACES as i32), WELD_QUANTIZATION_SCALE);
/// ```
pub const WELD_DECIMAL_PLACES: u32 = 5;

/// Multiplier applied to a coordinate before rounding it to an integer key.
///
/// Always `10^WELD_DECIMAL_PLACES`.
///
/// # Example
///
/// ```rust
/// use config::constants::WELD_QUANTIZATION_SCALE;
///
/// fn quantize(value: f64) -> i64 {
///     (value * WELD_QUANTIZATION_SCALE).round() as i64
/// }
///
/// assert_eq!(quantize(1.0 / 3.0), quantize(0.333_331));
/// assert_ne!(quantize(1.0 / 3.0), quantize(0.333_34));
/// ```
pub const WELD_QUANTIZATION_SCALE: f64 = 1e5;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum recursion level accepted by the generators.
///
/// Generation cost is exponential in the level (4^n, 20^n and 6^n leaf cells),
/// so requests above this bound are rejected before any work starts.
///
/// # Example
///
/// The projected triangle budget ([`MAX_TRIANGLES`]) is checked as well, so
/// not every family reaches this level with the default limits: the
/// octahedron stops at level 7 and the sponge at level 4.
///
/// ```rust
/// use config::constants::MAX_LEVEL;
///
/// let requested = 12;
/// let level = requested.min(MAX_LEVEL);
/// assert_eq!(level, 10);
/// ```
pub const MAX_LEVEL: u32 = 10;

/// Maximum number of triangles a single generation may produce.
///
/// Checked against the projected (pre-weld) face count of a request. It is
/// tighter than [`MAX_LEVEL`] for the faster-growing families:
///
/// | Family      | Faces at level n | Highest accepted level |
/// |-------------|------------------|------------------------|
/// | Tetrahedron | 4 · 4^n          | 10                     |
/// | Sponge      | 12 · 20^n        | 4                      |
/// | Octahedron  | 8 · 6^n          | 7                      |
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_TRIANGLES;
///
/// // A level 4 sponge: 12 faces per cube, 20^4 cubes
/// let projected = 12 * 20usize.pow(4);
/// assert!(projected < MAX_TRIANGLES);
/// ```
pub const MAX_TRIANGLES: usize = 10_000_000;

/// Largest base size accepted.
///
/// Keeps every scaled coordinate (`coordinate · WELD_QUANTIZATION_SCALE`)
/// and every midpoint sum finite.
///
/// ```rust
/// use config::constants::{MAX_SIZE, WELD_QUANTIZATION_SCALE};
///
/// assert!((2.0 * MAX_SIZE * WELD_QUANTIZATION_SCALE).is_finite());
/// ```
pub const MAX_SIZE: f64 = 1e300;

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Recursion level used when the caller does not pick one.
pub const DEFAULT_LEVEL: u32 = 2;

/// Base size used when the caller does not pick one.
///
/// Half-extent for the tetrahedron and octahedron, side length for the sponge.
pub const DEFAULT_SIZE: f64 = 1.0;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// File extension of the exported text mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::OBJ_FILE_EXTENSION;
///
/// let name = format!("mesh.{OBJ_FILE_EXTENSION}");
/// assert_eq!(name, "mesh.obj");
/// ```
pub const OBJ_FILE_EXTENSION: &str = "obj";

// =============================================================================
// GENERATOR CONFIGURATION
// =============================================================================

/// Immutable snapshot of the limits a generation request is checked against.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert_eq!(config.max_level, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Highest recursion level accepted.
    pub max_level: u32,
    /// Highest projected triangle count accepted.
    pub max_triangles: usize,
}

impl GeneratorConfig {
    /// Builds a configuration, rejecting limits looser than the global bounds
    /// or a zero triangle budget.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(4, 100_000).expect("valid config");
    /// assert_eq!(cfg.max_level, 4);
    /// ```
    pub fn new(max_level: u32, max_triangles: usize) -> Result<Self, ConfigError> {
        if max_level > MAX_LEVEL {
            return Err(ConfigError::InvalidMaxLevel(max_level));
        }
        if max_triangles == 0 || max_triangles > MAX_TRIANGLES {
            return Err(ConfigError::InvalidTriangleBudget(max_triangles));
        }
        Ok(Self {
            max_level,
            max_triangles,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            max_triangles: MAX_TRIANGLES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the level bound exceeds [`MAX_LEVEL`].
    InvalidMaxLevel(u32),
    /// Raised when the triangle budget is zero or exceeds [`MAX_TRIANGLES`].
    InvalidTriangleBudget(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxLevel(value) => {
                write!(f, "max_level must be <= {MAX_LEVEL}: {value}")
            }
            ConfigError::InvalidTriangleBudget(value) => {
                write!(f, "max_triangles must be in 1..={MAX_TRIANGLES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Quantizes one coordinate into its weld key component.
///
/// The coordinate is rounded half away from zero at
/// [`WELD_DECIMAL_PLACES`] decimal places and the bit pattern of the rounded
/// value is the key, so keys never saturate for large coordinates. `-0.0`
/// and `0.0` share a key.
///
/// # Example
///
/// ```rust
/// use config::constants::quantize_coordinate;
///
/// assert_eq!(quantize_coordinate(1.000_004), quantize_coordinate(1.0));
/// assert_eq!(quantize_coordinate(-0.0), quantize_coordinate(0.0));
/// assert_ne!(quantize_coordinate(1e15), quantize_coordinate(2e15));
/// ```
#[inline]
pub fn quantize_coordinate(value: f64) -> u64 {
    let rounded = (value * WELD_QUANTIZATION_SCALE).round();
    // Folds -0.0 into 0.0
    if rounded == 0.0 {
        0u64
    } else {
        rounded.to_bits()
    }
}
