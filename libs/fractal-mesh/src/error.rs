//! # Error Types
//!
//! Error types for fractal generation and mesh export.
//!
//! ## Error Policy
//!
//! - Requests are validated before any generator runs
//! - Generators themselves cannot fail
//! - Export and import failures carry enough context to locate the problem

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating, exporting or importing a fractal mesh.
///
/// ## Example
///
/// ```rust
/// use fractal_mesh::{generate, FractalError, FractalKind, FractalRequest};
///
/// let request = FractalRequest::new(FractalKind::Sponge, 2, -1.0);
/// match generate(&request) {
///     Ok(mesh) => println!("{} faces", mesh.face_count()),
///     Err(FractalError::InvalidSize(size)) => eprintln!("bad size {size}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum FractalError {
    /// Recursion level above the configured bound.
    #[error("Invalid level: {level} (max: {max})")]
    InvalidLevel {
        /// Requested level
        level: u32,
        /// Highest level accepted
        max: u32,
    },

    /// Size that is zero, negative, NaN or infinite.
    #[error("Invalid size: {0} (must be positive and finite)")]
    InvalidSize(f64),

    /// Projected face count over the triangle budget.
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles {
        /// Projected face count of the request
        count: usize,
        /// Budget from the generator config
        max: usize,
    },

    /// Fractal kind name that does not match any family.
    #[error("Unknown fractal kind: '{0}'")]
    UnknownKind(String),

    /// Generation finished without geometry.
    ///
    /// Valid requests never produce this; callers use it to show an
    /// explicit "nothing to display" state.
    #[error("No geometry produced")]
    EmptyMesh,

    /// Writing the exported mesh failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line in an imported text mesh.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        message: String,
    },
}

impl FractalError {
    /// Creates a parse error for the given line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for fractal operations.
pub type FractalResult<T> = Result<T, FractalError>;

// =============================================================================
// TESTS
// =============================================================================
