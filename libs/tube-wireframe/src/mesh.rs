//! # Mesh Data Structure
//!
//! Face-list mesh representation. Each face owns its three corner indices
//! plus per-corner normals and UVs, so shading attributes may differ between
//! faces that share a point.

use config::constants::approx_zero;
use glam::{DVec2, DVec3};

use crate::error::MeshError;

/// A triangular face with per-corner shading attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// First corner index
    pub a: u32,
    /// Second corner index
    pub b: u32,
    /// Third corner index
    pub c: u32,
    /// Face normal
    pub normal: DVec3,
    /// Normals at corners a, b, c
    pub vertex_normals: [DVec3; 3],
    /// Texture coordinates at corners a, b, c
    pub vertex_uvs: [DVec2; 3],
}

impl Face {
    /// Creates a face with no shading attributes.
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self {
            a,
            b,
            c,
            normal: DVec3::ZERO,
            vertex_normals: [DVec3::ZERO; 3],
            vertex_uvs: [DVec2::ZERO; 3],
        }
    }

    /// Returns the corner indices as `[a, b, c]`.
    #[inline]
    pub fn corners(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

/// A triangle mesh stored as a point list and a face list.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the GPU boundary.
///
/// # Example
///
/// ```rust
/// use tube_wireframe::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Point positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Faces referencing `vertices`
    faces: Vec<Face>,
    /// Optional untransformed positions, one per vertex
    base_positions: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            base_positions: None,
        }
    }

    /// Creates a mesh from positions and corner triples.
    pub fn from_triangles(vertices: Vec<DVec3>, triangles: &[[u32; 3]]) -> Self {
        let faces = triangles
            .iter()
            .map(|&[a, b, c]| Face::new(a, b, c))
            .collect();
        Self {
            vertices,
            faces,
            base_positions: None,
        }
    }

    /// Creates a mesh from quads, splitting each into the face pair the
    /// paired wireframe modes expect.
    ///
    /// Quad `[a, b, c, d]` becomes faces `(a, b, d)` and `(b, c, d)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tube_wireframe::Mesh;
    /// use glam::DVec3;
    ///
    /// let points = vec![DVec3::ZERO, DVec3::Y, DVec3::new(1.0, 1.0, 0.0), DVec3::X];
    /// let mesh = Mesh::from_quads(points, &[[0, 1, 2, 3]]);
    /// assert_eq!(mesh.face(0).corners(), [0, 1, 3]);
    /// assert_eq!(mesh.face(1).corners(), [1, 2, 3]);
    /// ```
    pub fn from_quads(vertices: Vec<DVec3>, quads: &[[u32; 4]]) -> Self {
        let mut mesh = Self::with_capacity(vertices.len(), quads.len() * 2);
        mesh.vertices = vertices;
        for &[a, b, c, d] in quads {
            mesh.add_triangle(a, b, d);
            mesh.add_triangle(b, c, d);
        }
        mesh
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push(Face::new(v0, v1, v2));
    }

    /// Adds a face with its shading attributes.
    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> &Face {
        &self.faces[index]
    }

    /// Sets the per-vertex base positions.
    pub fn set_base_positions(&mut self, base_positions: Vec<DVec3>) {
        self.base_positions = Some(base_positions);
    }

    /// Returns the per-vertex base positions.
    pub fn base_positions(&self) -> Option<&[DVec3]> {
        self.base_positions.as_deref()
    }

    /// Recomputes every face normal from the corner positions.
    ///
    /// Zero-area faces and faces with out-of-range corners get a zero normal.
    pub fn compute_face_normals(&mut self) {
        for face in &mut self.faces {
            let corner = |i: u32| self.vertices.get(i as usize).copied();
            let (Some(v0), Some(v1), Some(v2)) = (corner(face.a), corner(face.b), corner(face.c))
            else {
                face.normal = DVec3::ZERO;
                continue;
            };
            let normal = (v1 - v0).cross(v2 - v0);
            let len = normal.length();
            face.normal = if approx_zero(len) {
                DVec3::ZERO
            } else {
                normal / len
            };
        }
    }

    /// Checks every face corner refers to an existing vertex.
    pub fn check_indices(&self) -> Result<(), MeshError> {
        let point_count = self.vertices.len();
        for (face_index, face) in self.faces.iter().enumerate() {
            if let Some(&index) = face
                .corners()
                .iter()
                .find(|&&i| i as usize >= point_count)
            {
                return Err(MeshError::IndexOutOfRange {
                    face: face_index,
                    index,
                    point_count,
                });
            }
        }
        Ok(())
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Exports face indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.faces.iter().flat_map(|f| f.corners()).collect()
    }
}
