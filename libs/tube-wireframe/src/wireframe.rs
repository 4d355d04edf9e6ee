//! # Tube Wireframe
//!
//! Entry point tying the stages together:
//!
//! ```text
//! Mesh → extract_cells → dedupe_edges → build_tube (per edge) → merge
//! ```
//!
//! The merged result is returned as a [`BufferMesh`] or converted to a
//! face-list [`Mesh`] depending on [`OutputFormat`].

use config::constants::MAX_VERTICES;
use glam::{DMat4, DVec3};
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::buffer::{BufferMesh, IndexBuffer};
use crate::edges::{dedupe_edges, Edge};
use crate::error::MeshError;
use crate::extract::extract_cells;
use crate::mesh::Mesh;
use crate::options::{OutputFormat, TubeOptions, WireframeOptions};
use crate::tube::{build_tube, TubeMesh};

/// Result of [`create_tube_wireframe`].
#[derive(Debug, Clone)]
pub enum WireframeOutput {
    /// Face-list mesh
    FaceList(Mesh),
    /// Indexed buffer mesh
    Buffer(BufferMesh),
}

impl WireframeOutput {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        match self {
            WireframeOutput::FaceList(mesh) => mesh.vertex_count(),
            WireframeOutput::Buffer(buffer) => buffer.vertex_count(),
        }
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        match self {
            WireframeOutput::FaceList(mesh) => mesh.face_count(),
            WireframeOutput::Buffer(buffer) => buffer.triangle_count(),
        }
    }

    /// Returns true if no tubes were generated.
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns the buffer mesh, if that is the held representation.
    pub fn as_buffer(&self) -> Option<&BufferMesh> {
        match self {
            WireframeOutput::Buffer(buffer) => Some(buffer),
            WireframeOutput::FaceList(_) => None,
        }
    }

    /// Returns the face-list mesh, if that is the held representation.
    pub fn as_face_list(&self) -> Option<&Mesh> {
        match self {
            WireframeOutput::FaceList(mesh) => Some(mesh),
            WireframeOutput::Buffer(_) => None,
        }
    }

    /// Converts to a buffer mesh.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOutOfRange`] when a held face list refers to
    /// a missing vertex.
    pub fn into_buffer(self) -> Result<BufferMesh, MeshError> {
        match self {
            WireframeOutput::Buffer(buffer) => Ok(buffer),
            WireframeOutput::FaceList(mesh) => BufferMesh::try_from(&mesh),
        }
    }

    /// Converts to a face-list mesh.
    pub fn into_face_list(self) -> Mesh {
        match self {
            WireframeOutput::FaceList(mesh) => mesh,
            WireframeOutput::Buffer(buffer) => buffer.to_face_mesh(),
        }
    }
}

/// Replaces every wireframe edge of `mesh` with a tube.
///
/// # Errors
///
/// - [`MeshError::InvalidOptions`] for a non-positive thickness or too few
///   segments
/// - [`MeshError::IndexOutOfRange`] when a face refers to a missing point
/// - [`MeshError::DegenerateEdge`] when an edge joins coincident points
/// - [`MeshError::TooManyVertices`] when the output would be too large
///
/// An unrecognized mode is not an error: the result is empty.
///
/// # Example
///
/// ```rust
/// use tube_wireframe::{create_tube_wireframe, Mesh, WireframeMode, WireframeOptions};
/// use glam::DVec3;
///
/// let points = vec![DVec3::ZERO, DVec3::Y, DVec3::new(1.0, 1.0, 0.0), DVec3::X];
/// let mesh = Mesh::from_quads(points, &[[0, 1, 2, 3]]);
/// let options = WireframeOptions::new()
///     .with_mode(WireframeMode::Quad)
///     .with_thickness(0.05);
///
/// let output = create_tube_wireframe(&mesh, &options).unwrap();
/// assert_eq!(output.vertex_count(), 4 * 28);
/// ```
#[instrument(skip_all, fields(
    mode = ?options.mode,
    faces = mesh.face_count(),
    points = mesh.vertex_count()
))]
pub fn create_tube_wireframe(
    mesh: &Mesh,
    options: &WireframeOptions<'_>,
) -> Result<WireframeOutput, MeshError> {
    options.tube.validate()?;
    mesh.check_indices()?;

    let edges = match options.mode {
        Some(mode) => {
            let cells = extract_cells(mesh, mode, |i, m| options.accepts(i, m));
            dedupe_edges(&cells)
        }
        None => {
            warn!("no wireframe mode selected, output is empty");
            Vec::new()
        }
    };

    let buffer = merge_tubes(mesh.vertices(), &edges, &options.tube, options.matrix.as_ref())?;

    info!(
        edges = edges.len(),
        vertices = buffer.vertex_count(),
        triangles = buffer.triangle_count(),
        wide_indices = buffer.indices.is_wide(),
        "built tube wireframe"
    );

    Ok(match options.format {
        OutputFormat::Buffer => WireframeOutput::Buffer(buffer),
        OutputFormat::FaceList => WireframeOutput::FaceList(buffer.to_face_mesh()),
    })
}

/// Builds one tube per edge and concatenates them in edge order.
///
/// Each tube's indices are offset by the number of vertices emitted before
/// it. The index width is chosen from the final vertex count.
///
/// # Errors
///
/// Fails if an edge refers to a missing point, joins coincident points, or
/// the output would exceed [`MAX_VERTICES`].
pub fn merge_tubes(
    points: &[DVec3],
    edges: &[Edge],
    tube: &TubeOptions,
    matrix: Option<&DMat4>,
) -> Result<BufferMesh, MeshError> {
    let per_tube = tube.vertex_count();
    let total = edges.len().saturating_mul(per_tube);
    if total > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: total,
            max: MAX_VERTICES,
        });
    }

    let tubes = build_tubes(points, edges, tube, matrix)?;

    let mut out = BufferMesh {
        positions: Vec::with_capacity(total),
        normals: Vec::with_capacity(total),
        uvs: Vec::with_capacity(total),
        base_positions: Vec::with_capacity(total),
        indices: IndexBuffer::default(),
    };
    let mut indices =
        Vec::with_capacity(edges.len().saturating_mul(tube.triangle_count()).saturating_mul(3));

    for t in tubes {
        let offset = out.positions.len() as u32;
        indices.extend(t.indices.iter().map(|&i| i + offset));
        out.positions.extend(t.positions);
        out.normals.extend(t.normals);
        out.uvs.extend(t.uvs);
        out.base_positions.extend(t.base_positions);
    }

    out.indices = IndexBuffer::from_indices(indices, out.positions.len());
    debug!(
        tubes = edges.len(),
        vertices = out.vertex_count(),
        "merged tubes"
    );
    Ok(out)
}

fn endpoints(points: &[DVec3], edge: &Edge) -> Result<(DVec3, DVec3), MeshError> {
    let point = |index: u32| {
        points
            .get(index as usize)
            .copied()
            .ok_or(MeshError::MissingPoint {
                index,
                point_count: points.len(),
            })
    };
    Ok((point(edge.start)?, point(edge.end)?))
}

fn build_one(
    points: &[DVec3],
    edge: &Edge,
    tube: &TubeOptions,
    matrix: Option<&DMat4>,
) -> Result<TubeMesh, MeshError> {
    let (start, end) = endpoints(points, edge)?;
    build_tube(start, end, tube, matrix)
}

#[cfg(feature = "parallel")]
fn build_tubes(
    points: &[DVec3],
    edges: &[Edge],
    tube: &TubeOptions,
    matrix: Option<&DMat4>,
) -> Result<Vec<TubeMesh>, MeshError> {
    // Indexed collect keeps edge order
    edges
        .par_iter()
        .map(|edge| build_one(points, edge, tube, matrix))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn build_tubes(
    points: &[DVec3],
    edges: &[Edge],
    tube: &TubeOptions,
    matrix: Option<&DMat4>,
) -> Result<Vec<TubeMesh>, MeshError> {
    edges
        .iter()
        .map(|edge| build_one(points, edge, tube, matrix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::WireframeMode;
    use approx::assert_relative_eq;

    fn unit_quad() -> Mesh {
        let points = vec![
            DVec3::ZERO,
            DVec3::Y,
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::X,
        ];
        Mesh::from_quads(points, &[[0, 1, 2, 3]])
    }

    #[test]
    fn test_merge_offsets_indices() {
        let points = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)];
        let edges = [Edge::new(0, 1), Edge::new(1, 2)];
        let tube = TubeOptions::default();
        let merged = merge_tubes(&points, &edges, &tube, None).unwrap();

        assert_eq!(merged.vertex_count(), 56);
        assert_eq!(merged.triangle_count(), 32);
        assert!(merged.validate());
        let indices = merged.indices.to_u32();
        assert!(indices[..48].iter().all(|&i| i < 28));
        assert!(indices[48..].iter().all(|&i| (28..56).contains(&i)));
        assert_eq!(indices[48], indices[0] + 28);
    }

    #[test]
    fn test_merge_keeps_edge_order() {
        let points = [DVec3::ZERO, DVec3::new(0.0, 2.0, 0.0), DVec3::new(0.0, 5.0, 0.0)];
        let edges = [Edge::new(1, 2), Edge::new(0, 1)];
        let merged = merge_tubes(&points, &edges, &TubeOptions::default(), None).unwrap();
        // First tube starts at point 1
        let first_bottom = merged.positions[..28]
            .iter()
            .fold(f64::INFINITY, |m, p| m.min(p.y));
        assert_relative_eq!(first_bottom, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_merge_empty() {
        let merged = merge_tubes(&[], &[], &TubeOptions::default(), None).unwrap();
        assert!(merged.is_empty());
        assert!(!merged.indices.is_wide());
    }

    #[test]
    fn test_merge_rejects_oversized_output() {
        let edges = vec![Edge::new(0, 1); MAX_VERTICES / 28 + 1];
        let err = merge_tubes(&[DVec3::ZERO, DVec3::X], &edges, &TubeOptions::default(), None)
            .unwrap_err();
        assert!(matches!(err, MeshError::TooManyVertices { .. }));
    }

    #[test]
    fn test_merge_rejects_oversized_single_tube() {
        let tube = TubeOptions {
            radius_segments: u32::MAX,
            length_segments: u32::MAX,
            ..TubeOptions::default()
        };
        let err = merge_tubes(&[DVec3::ZERO, DVec3::X], &[Edge::new(0, 1)], &tube, None)
            .unwrap_err();
        assert!(matches!(
            err,
            MeshError::TooManyVertices { count: usize::MAX, .. }
        ));
    }

    #[test]
    fn test_huge_segment_counts_fail_validation() {
        let options = WireframeOptions::new().with_tube(TubeOptions {
            radius_segments: 65_535,
            length_segments: 65_536,
            open_ended: true,
            ..TubeOptions::default()
        });
        let err = create_tube_wireframe(&unit_quad(), &options).unwrap_err();
        assert!(matches!(err, MeshError::TooManyVertices { .. }));
    }

    #[test]
    fn test_merge_rejects_missing_point() {
        let err = merge_tubes(&[DVec3::ZERO], &[Edge::new(0, 3)], &TubeOptions::default(), None)
            .unwrap_err();
        assert!(matches!(err, MeshError::MissingPoint { index: 3, .. }));
    }

    fn single_open_tube(radius_segments: u32, length_segments: u32) -> BufferMesh {
        let tube = TubeOptions {
            thickness: 0.1,
            radius_segments,
            length_segments,
            open_ended: true,
        };
        assert!(tube.validate().is_ok());
        merge_tubes(&[DVec3::ZERO, DVec3::Y], &[Edge::new(0, 1)], &tube, None).unwrap()
    }

    #[test]
    fn test_single_tube_just_below_limit_is_narrow() {
        // 13107 rows * 5 columns
        let merged = single_open_tube(4, 13_106);
        assert_eq!(merged.vertex_count(), 65_535);
        assert!(matches!(merged.indices, IndexBuffer::U16(_)));
        assert_eq!(merged.indices.iter().max(), Some(65_534));
        assert!(merged.validate());
    }

    #[test]
    fn test_single_tube_at_limit_is_wide() {
        // 256 rows * 256 columns
        let merged = single_open_tube(255, 255);
        assert_eq!(merged.vertex_count(), 65_536);
        assert!(matches!(merged.indices, IndexBuffer::U32(_)));
        assert_eq!(merged.indices.iter().max(), Some(65_535));
        assert!(merged.validate());
    }

    #[test]
    fn test_wide_indices_past_limit() {
        // 2341 tubes of 28 vertices = 65548 vertices
        let points: Vec<DVec3> = (0..=2341).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect();
        let edges: Vec<Edge> = (0..2341).map(|i| Edge::new(i, i + 1)).collect();
        let merged = merge_tubes(&points, &edges, &TubeOptions::default(), None).unwrap();
        assert_eq!(merged.vertex_count(), 65_548);
        assert!(merged.indices.is_wide());
        assert!(merged.validate());
    }

    #[test]
    fn test_quad_mode_builds_four_tubes() {
        let options = WireframeOptions::new().with_mode(WireframeMode::Quad);
        let output = create_tube_wireframe(&unit_quad(), &options).unwrap();
        assert_eq!(output.vertex_count(), 4 * 28);
        assert_eq!(output.triangle_count(), 4 * 16);
        assert!(output.as_face_list().is_some());
    }

    #[test]
    fn test_buffer_format() {
        let options = WireframeOptions::new()
            .with_mode(WireframeMode::Diagonal1)
            .with_format(OutputFormat::Buffer);
        let output = create_tube_wireframe(&unit_quad(), &options).unwrap();
        let buffer = output.as_buffer().unwrap();
        assert_eq!(buffer.vertex_count(), 28);
        assert!(!buffer.indices.is_wide());
    }

    #[test]
    fn test_missing_mode_is_empty() {
        let options = WireframeOptions::new().with_mode_tag("zigzag");
        let output = create_tube_wireframe(&unit_quad(), &options).unwrap();
        assert!(output.is_empty());
        assert_eq!(output.triangle_count(), 0);
    }

    #[test]
    fn test_invalid_options_fail_before_geometry() {
        let options = WireframeOptions::new().with_thickness(0.0);
        let err = create_tube_wireframe(&unit_quad(), &options).unwrap_err();
        assert!(matches!(err, MeshError::InvalidOptions { .. }));
    }

    #[test]
    fn test_output_conversions() {
        let options = WireframeOptions::new().with_format(OutputFormat::Buffer);
        let output = create_tube_wireframe(&unit_quad(), &options).unwrap();
        let (vertices, triangles) = (output.vertex_count(), output.triangle_count());
        let faces = output.into_face_list();
        assert_eq!(faces.vertex_count(), vertices);
        assert_eq!(faces.face_count(), triangles);
        let buffer = WireframeOutput::FaceList(faces).into_buffer().unwrap();
        assert_eq!(buffer.vertex_count(), vertices);
        assert_eq!(buffer.triangle_count(), triangles);
    }

    #[test]
    fn test_face_list_with_bad_corner_fails_conversion() {
        let mesh = Mesh::from_triangles(vec![DVec3::ZERO, DVec3::X], &[[0, 1, 2]]);
        let err = WireframeOutput::FaceList(mesh).into_buffer().unwrap_err();
        assert!(matches!(err, MeshError::IndexOutOfRange { index: 2, .. }));
    }
}
