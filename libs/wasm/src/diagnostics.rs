//! WASM-compatible diagnostic types.
//!
//! Rejected requests are reported per parameter so the editing panel can
//! point at the offending field.

use fractal_mesh::FractalError;
use wasm_bindgen::prelude::*;

/// Request parameter a diagnostic refers to.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Kind,
    Level,
    Size,
    /// Not tied to a single parameter (parse failures, empty output).
    Request,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Field::Kind => "kind",
            Field::Level => "level",
            Field::Size => "size",
            Field::Request => "request",
        }
    }
}

/// A rejected-request message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const diag = validate_request("SpongeFractal", 9, 1.0);
/// // if (diag) highlight(diag.field_name(), diag.message());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    field: Field,
    message: String,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the parameter this diagnostic refers to.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Returns the parameter name as used in request JSON.
    pub fn field_name(&self) -> String {
        self.field.name().to_string()
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Converts this diagnostic to a plain JavaScript object.
    ///
    /// Wrapper objects cannot be posted between a worker and the main
    /// thread; plain objects can.
    pub fn to_js_object(&self) -> JsValue {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        let _ = Reflect::set(&obj, &JsValue::from_str("field"), &JsValue::from_str(self.field.name()));
        let _ = Reflect::set(&obj, &JsValue::from_str("message"), &JsValue::from_str(&self.message));
        JsValue::from(obj)
    }
}

impl Diagnostic {
    /// Creates a diagnostic for a field.
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.name(), self.message)
    }
}

impl From<&FractalError> for Diagnostic {
    fn from(err: &FractalError) -> Self {
        let field = match err {
            FractalError::UnknownKind(_) => Field::Kind,
            FractalError::InvalidLevel { .. } | FractalError::TooManyTriangles { .. } => Field::Level,
            FractalError::InvalidSize(_) => Field::Size,
            FractalError::EmptyMesh | FractalError::Io(_) | FractalError::Parse { .. } => {
                Field::Request
            }
        };
        Self::new(field, err.to_string())
    }
}

impl From<FractalError> for Diagnostic {
    fn from(err: FractalError) -> Self {
        Self::from(&err)
    }
}
