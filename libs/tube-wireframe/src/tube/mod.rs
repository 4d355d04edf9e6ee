//! # Tubes
//!
//! Builds one cylinder per edge and places it so its axis runs from the
//! edge's start point to its end point.
//!
//! ## Steps
//!
//! 1. Build a Y-axis cylinder of the edge's length and lift it by half its
//!    length so its base sits at the local origin.
//! 2. Rotate `+Y` onto the edge direction and translate to the start point.
//! 3. Apply the caller's matrix, if any, on top of that placement.
//!
//! Normals go through the inverse transpose of the combined linear part.
//! The lifted local positions are kept as base positions.

mod orient;


pub use orient::quat_from_direction;

use config::constants::DEGENERATE_EDGE_EPSILON;
use glam::{DMat3, DMat4, DQuat, DVec2, DVec3};

use crate::error::MeshError;
use crate::options::TubeOptions;
use crate::primitives::create_cylinder;

/// A placed tube.
#[derive(Debug, Clone)]
pub struct TubeMesh {
    /// World positions
    pub positions: Vec<DVec3>,
    /// World normals
    pub normals: Vec<DVec3>,
    /// Texture coordinates
    pub uvs: Vec<DVec2>,
    /// Local positions before rotation, translation and the caller matrix
    pub base_positions: Vec<DVec3>,
    /// Triangle indices, three per triangle, local to this tube
    pub indices: Vec<u32>,
    /// Rotation that carried `+Y` onto the edge direction
    pub orientation: DQuat,
}

impl TubeMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Builds a tube from `start` to `end`.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateEdge`] when the endpoints coincide and
/// propagates invalid tube options from the cylinder primitive.
///
/// # Example
///
/// ```rust
/// use tube_wireframe::{build_tube, TubeOptions};
/// use glam::DVec3;
///
/// let tube = build_tube(DVec3::ZERO, DVec3::new(0.0, 0.0, 3.0), &TubeOptions::default(), None).unwrap();
/// assert_eq!(tube.vertex_count(), 28);
/// ```
pub fn build_tube(
    start: DVec3,
    end: DVec3,
    options: &TubeOptions,
    matrix: Option<&DMat4>,
) -> Result<TubeMesh, MeshError> {
    let direction = end - start;
    let length = direction.length();
    if !length.is_finite() || length <= DEGENERATE_EDGE_EPSILON {
        return Err(MeshError::DegenerateEdge { start, end });
    }

    let mut cylinder = create_cylinder(
        length,
        options.thickness,
        options.thickness,
        options.radius_segments,
        options.length_segments,
        options.open_ended,
    )?;
    cylinder.translate(DVec3::new(0.0, length / 2.0, 0.0));

    let orientation = quat_from_direction(direction / length);
    let placement = DMat4::from_rotation_translation(orientation, start);
    let combined = matrix.map_or(placement, |m| *m * placement);
    let normal_matrix = DMat3::from_mat4(combined).inverse().transpose();

    let positions = cylinder
        .positions
        .iter()
        .map(|&p| combined.transform_point3(p))
        .collect();
    let normals = cylinder
        .normals
        .iter()
        .map(|&n| (normal_matrix * n).normalize_or_zero())
        .collect();

    Ok(TubeMesh {
        positions,
        normals,
        uvs: cylinder.uvs,
        base_positions: cylinder.positions,
        indices: cylinder.indices,
        orientation,
    })
}
