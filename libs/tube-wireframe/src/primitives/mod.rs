//! # Primitives
//!
//! Mesh generation for the shapes tubes are built from.

pub mod cylinder;

pub use cylinder::{create_cylinder, CylinderMesh};
