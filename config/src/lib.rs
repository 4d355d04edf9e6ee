//! # Config Crate
//!
//! Centralized configuration constants for the tube wireframe pipeline.
//! All default option values, tolerances and buffer limits are defined here
//! so the geometry crate and the WASM surface agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RADIUS_SEGMENTS, DEFAULT_THICKNESS};
//!
//! let user_thickness: Option<f64> = None;
//! let thickness = user_thickness.unwrap_or(DEFAULT_THICKNESS);
//! assert_eq!(thickness, 1.0);
//! assert_eq!(DEFAULT_RADIUS_SEGMENTS, 4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
