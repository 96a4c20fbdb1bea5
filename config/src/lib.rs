//! # Config Crate
//!
//! Centralized configuration constants for the fractal mesh pipeline.
//! Weld precision, recursion bounds and output budgets are defined here so
//! the generator, the WASM bindings and the CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{quantize_coordinate, DEFAULT_LEVEL, MAX_LEVEL};
//!
//! // Coordinates that agree to five decimal places share a weld key
//! assert_eq!(quantize_coordinate(0.123456789), quantize_coordinate(0.123_46));
//!
//! assert!(DEFAULT_LEVEL <= MAX_LEVEL);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Deterministic**: Nothing here depends on the host or on runtime state

pub mod constants;
