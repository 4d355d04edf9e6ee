//! # Mesh Errors
//!
//! Error types for tube wireframe generation.

use glam::DVec3;
use thiserror::Error;

/// Errors that can occur during tube wireframe generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A face references a point that does not exist
    #[error("Face {face} references point {index} but the mesh has {point_count} points")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        point_count: usize,
    },

    /// An edge endpoint that does not exist
    #[error("Edge endpoint {index} is out of range for {point_count} points")]
    MissingPoint { index: u32, point_count: usize },

    /// An edge whose endpoints coincide has no direction to orient a tube along
    #[error("Degenerate edge: {start} -> {end} has zero length")]
    DegenerateEdge { start: DVec3, end: DVec3 },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Tube options out of range
    #[error("Invalid options: {message}")]
    InvalidOptions { message: String },

    /// Unknown wireframe pattern tag
    #[error("Unknown wireframe mode: {tag}")]
    UnknownMode { tag: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid options error.
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Creates an unknown mode error.
    pub fn unknown_mode(tag: impl Into<String>) -> Self {
        Self::UnknownMode { tag: tag.into() }
    }
}
