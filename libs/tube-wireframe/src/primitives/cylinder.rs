//! # Cylinder Primitive
//!
//! Generates an open or capped cylinder (or frustum) around the Y axis,
//! centered at the origin, with per-vertex normals and UVs.
//!
//! Vertex order:
//! 1. Torso grid, `height_segments + 1` rows from top to bottom, each with
//!    `radial_segments + 1` columns (the seam column is duplicated so UVs
//!    wrap cleanly).
//! 2. Top cap, then bottom cap, unless open-ended or the radius is zero.
//!    A cap has one centre vertex per segment followed by a closed ring.

use std::f64::consts::TAU;

use config::constants::{tube_vertex_count, MAX_VERTICES};
use glam::{DVec2, DVec3};

use crate::error::MeshError;

/// Cylinder geometry with one normal and one UV per vertex.
#[derive(Debug, Clone, Default)]
pub struct CylinderMesh {
    /// Vertex positions
    pub positions: Vec<DVec3>,
    /// Vertex normals
    pub normals: Vec<DVec3>,
    /// Texture coordinates
    pub uvs: Vec<DVec2>,
    /// Triangle indices, three per triangle
    pub indices: Vec<u32>,
}

impl CylinderMesh {
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

    fn push(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Translates every position by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    /// Computes the axis-aligned bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(&first) = self.positions.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        self.positions
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)))
    }
}

/// Creates a cylinder or frustum mesh.
///
/// # Arguments
///
/// * `height` - Extent along Y, from `-height/2` to `height/2`
/// * `radius_top` - Radius at `y = height/2`
/// * `radius_bottom` - Radius at `y = -height/2`
/// * `radial_segments` - Number of segments around the circumference
/// * `height_segments` - Number of rows along the axis
/// * `open_ended` - If true, no caps are generated
///
/// # Example
///
/// ```rust
/// use tube_wireframe::primitives::create_cylinder;
///
/// let mesh = create_cylinder(2.0, 1.0, 1.0, 4, 1, false).unwrap();
/// assert_eq!(mesh.vertex_count(), 28);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
pub fn create_cylinder(
    height: f64,
    radius_top: f64,
    radius_bottom: f64,
    radial_segments: u32,
    height_segments: u32,
    open_ended: bool,
) -> Result<CylinderMesh, MeshError> {
    if height <= 0.0 || !height.is_finite() {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {height}"
        )));
    }

    if radius_bottom < 0.0 || radius_top < 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder radii must be non-negative: top={radius_top}, bottom={radius_bottom}"
        )));
    }

    if radius_bottom == 0.0 && radius_top == 0.0 {
        return Err(MeshError::degenerate(
            "Cylinder must have at least one non-zero radius",
        ));
    }

    if radial_segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Cylinder radial segments must be at least 3: {radial_segments}"
        )));
    }

    if height_segments < 1 {
        return Err(MeshError::degenerate(
            "Cylinder needs at least one height segment",
        ));
    }

    let count = tube_vertex_count(radial_segments, height_segments, open_ended);
    if count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count,
            max: MAX_VERTICES,
        });
    }

    let radial = radial_segments as usize;
    let rows = height_segments as usize;
    let half_height = height / 2.0;
    let slope = (radius_bottom - radius_top) / height;

    let mut mesh = CylinderMesh::default();

    // Torso
    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(rows + 1);
    for y in 0..=rows {
        let v = y as f64 / rows as f64;
        let radius = v * (radius_bottom - radius_top) + radius_top;
        let row = (0..=radial)
            .map(|x| {
                let u = x as f64 / radial as f64;
                let (sin, cos) = (u * TAU).sin_cos();
                mesh.push(
                    DVec3::new(radius * sin, -v * height + half_height, radius * cos),
                    DVec3::new(sin, slope, cos).normalize(),
                    DVec2::new(u, 1.0 - v),
                )
            })
            .collect();
        grid.push(row);
    }

    for x in 0..radial {
        for y in 0..rows {
            let a = grid[y][x];
            let b = grid[y + 1][x];
            let c = grid[y + 1][x + 1];
            let d = grid[y][x + 1];
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    if !open_ended {
        if radius_top > 0.0 {
            add_cap(&mut mesh, radius_top, half_height, radial, true);
        }
        if radius_bottom > 0.0 {
            add_cap(&mut mesh, radius_bottom, half_height, radial, false);
        }
    }

    Ok(mesh)
}

fn add_cap(mesh: &mut CylinderMesh, radius: f64, half_height: f64, radial: usize, top: bool) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = DVec3::new(0.0, sign, 0.0);
    let y = half_height * sign;

    // One centre per segment so each wedge gets its own UV seam
    let center_start = mesh.positions.len() as u32;
    for _ in 0..radial {
        mesh.push(DVec3::new(0.0, y, 0.0), normal, DVec2::splat(0.5));
    }

    let ring_start = mesh.positions.len() as u32;
    for x in 0..=radial {
        let u = x as f64 / radial as f64;
        let (sin, cos) = (u * TAU).sin_cos();
        mesh.push(
            DVec3::new(radius * sin, y, radius * cos),
            normal,
            DVec2::new(cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5),
        );
    }

    for x in 0..radial as u32 {
        let c = center_start + x;
        let i = ring_start + x;
        if top {
            mesh.indices.extend_from_slice(&[i, i + 1, c]);
        } else {
            mesh.indices.extend_from_slice(&[i + 1, i, c]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::tube_triangle_count;

    #[test]
    fn test_cylinder_basic() {
        let mesh = create_cylinder(10.0, 5.0, 5.0, 32, 1, false).unwrap();
        assert_eq!(mesh.vertex_count(), tube_vertex_count(32, 1, false));
        assert_eq!(mesh.triangle_count(), tube_triangle_count(32, 1, false));
        assert_eq!(mesh.normals.len(), mesh.vertex_count());
        assert_eq!(mesh.uvs.len(), mesh.vertex_count());
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn test_cylinder_is_centered_on_y() {
        let mesh = create_cylinder(10.0, 5.0, 5.0, 16, 1, false).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.y, -5.0);
        assert_relative_eq!(max.y, 5.0);
        assert_relative_eq!(max.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(max.z, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_open_ended_has_no_caps() {
        let mesh = create_cylinder(3.0, 1.0, 1.0, 6, 2, true).unwrap();
        assert_eq!(mesh.vertex_count(), 3 * 7);
        assert_eq!(mesh.triangle_count(), 2 * 6 * 2);
        assert!(mesh.normals.iter().all(|n| n.y.abs() < 1e-12));
    }

    #[test]
    fn test_torso_layout() {
        let mesh = create_cylinder(2.0, 1.0, 1.0, 4, 1, true).unwrap();
        // First column of the top row faces +Z
        assert_relative_eq!(mesh.positions[0].z, 1.0);
        assert_relative_eq!(mesh.positions[0].y, 1.0);
        assert_eq!(mesh.uvs[0], DVec2::new(0.0, 1.0));
        // Seam column duplicates the first
        assert!(mesh.positions[4].abs_diff_eq(mesh.positions[0], 1e-12));
        assert_eq!(mesh.uvs[4], DVec2::new(1.0, 1.0));
        // Bottom row
        assert_relative_eq!(mesh.positions[5].y, -1.0);
        assert_eq!(&mesh.indices[..6], &[0, 5, 1, 5, 6, 1]);
    }

    #[test]
    fn test_torso_normals_are_radial() {
        let mesh = create_cylinder(4.0, 2.0, 2.0, 8, 3, true).unwrap();
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            let radial = DVec3::new(p.x, 0.0, p.z).normalize();
            assert!(n.abs_diff_eq(radial, 1e-12));
        }
    }

    #[test]
    fn test_cap_normals_and_winding() {
        let mesh = create_cylinder(2.0, 1.0, 1.0, 4, 1, false).unwrap();
        let torso = 10;
        let cap = 9;
        assert!(mesh.normals[torso..torso + cap].iter().all(|&n| n == DVec3::Y));
        assert!(mesh.normals[torso + cap..].iter().all(|&n| n == -DVec3::Y));

        // Top cap triangles face +Y
        let tri = &mesh.indices[24..27];
        let [a, b, c] = [0, 1, 2].map(|k| mesh.positions[tri[k] as usize]);
        assert!((b - a).cross(c - a).y > 0.0);

        // Bottom cap triangles face -Y
        let tri = &mesh.indices[36..39];
        let [a, b, c] = [0, 1, 2].map(|k| mesh.positions[tri[k] as usize]);
        assert!((b - a).cross(c - a).y < 0.0);
    }

    #[test]
    fn test_torso_winding_faces_outward() {
        let mesh = create_cylinder(2.0, 1.0, 1.0, 8, 1, true).unwrap();
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [0, 1, 2].map(|k| mesh.positions[tri[k] as usize]);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(DVec3::new(centroid.x, 0.0, centroid.z)) > 0.0);
        }
    }

    #[test]
    fn test_cone_skips_top_cap() {
        let mesh = create_cylinder(2.0, 0.0, 1.0, 4, 1, false).unwrap();
        assert_eq!(mesh.vertex_count(), 10 + 9);
    }

    #[test]
    fn test_cylinder_rejects_oversized_grid() {
        let err = create_cylinder(1.0, 1.0, 1.0, u32::MAX, u32::MAX, false).unwrap_err();
        assert!(matches!(
            err,
            MeshError::TooManyVertices { count: usize::MAX, max: MAX_VERTICES }
        ));
        let err = create_cylinder(1.0, 1.0, 1.0, 65_535, 65_536, true).unwrap_err();
        assert!(matches!(err, MeshError::TooManyVertices { .. }));
    }

    #[test]
    fn test_cylinder_invalid_height() {
        assert!(create_cylinder(0.0, 5.0, 5.0, 32, 1, false).is_err());
        assert!(create_cylinder(f64::NAN, 5.0, 5.0, 32, 1, false).is_err());
    }

    #[test]
    fn test_cylinder_both_radii_zero() {
        assert!(create_cylinder(10.0, 0.0, 0.0, 32, 1, false).is_err());
    }

    #[test]
    fn test_cylinder_too_few_segments() {
        assert!(create_cylinder(10.0, 5.0, 5.0, 2, 1, false).is_err());
        assert!(create_cylinder(10.0, 5.0, 5.0, 4, 0, false).is_err());
    }
}
