//! # Buffer Mesh
//!
//! Indexed vertex-buffer representation with named per-vertex attributes,
//! and the pure conversions to and from the face-list [`Mesh`].

use config::constants::NARROW_INDEX_LIMIT;
use glam::{DVec2, DVec3};

use crate::error::MeshError;
use crate::mesh::{Face, Mesh};

/// Triangle index storage, narrow while every index fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBuffer {
    /// 16-bit indices
    U16(Vec<u16>),
    /// 32-bit indices
    U32(Vec<u32>),
}

impl Default for IndexBuffer {
    fn default() -> Self {
        IndexBuffer::U16(Vec::new())
    }
}

impl IndexBuffer {
    /// Picks the index width for a mesh with `vertex_count` vertices.
    ///
    /// Meshes below [`NARROW_INDEX_LIMIT`] vertices get `u16` indices, unless
    /// some index does not fit in 16 bits; values are never truncated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tube_wireframe::IndexBuffer;
    ///
    /// assert!(!IndexBuffer::from_indices(vec![0, 1, 2], 65_535).is_wide());
    /// assert!(IndexBuffer::from_indices(vec![0, 1, 2], 65_536).is_wide());
    /// assert!(IndexBuffer::from_indices(vec![70_000, 1, 2], 10).is_wide());
    /// ```
    pub fn from_indices(indices: Vec<u32>, vertex_count: usize) -> Self {
        if vertex_count < NARROW_INDEX_LIMIT {
            let narrow: Result<Vec<u16>, _> = indices.iter().map(|&i| u16::try_from(i)).collect();
            if let Ok(narrow) = narrow {
                return IndexBuffer::U16(narrow);
            }
        }
        IndexBuffer::U32(indices)
    }

    /// Returns true when indices are stored as `u32`.
    #[inline]
    pub fn is_wide(&self) -> bool {
        matches!(self, IndexBuffer::U32(_))
    }

    /// Returns the number of indices.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            IndexBuffer::U16(v) => v.len(),
            IndexBuffer::U32(v) => v.len(),
        }
    }

    /// Returns true if there are no indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the index at `position`, widened to `u32`.
    #[inline]
    pub fn get(&self, position: usize) -> Option<u32> {
        match self {
            IndexBuffer::U16(v) => v.get(position).map(|&i| u32::from(i)),
            IndexBuffer::U32(v) => v.get(position).copied(),
        }
    }

    /// Iterates over all indices widened to `u32`.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Returns all indices as `u32`.
    pub fn to_u32(&self) -> Vec<u32> {
        match self {
            IndexBuffer::U16(v) => v.iter().map(|&i| u32::from(i)).collect(),
            IndexBuffer::U32(v) => v.clone(),
        }
    }
}

/// Indexed triangle mesh with position, normal, uv and base position
/// attributes.
///
/// Every attribute array has one entry per vertex. `base_positions` records
/// each vertex's position before its tube was oriented and placed.
#[derive(Debug, Clone, Default)]
pub struct BufferMesh {
    /// Vertex positions
    pub positions: Vec<DVec3>,
    /// Vertex normals
    pub normals: Vec<DVec3>,
    /// Texture coordinates
    pub uvs: Vec<DVec2>,
    /// Local positions before placement
    pub base_positions: Vec<DVec3>,
    /// Triangle indices, three per triangle
    pub indices: IndexBuffer,
}

impl BufferMesh {
    /// Creates an empty buffer mesh.
    pub fn new() -> Self {
        Self::default()
    }

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

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns true if every attribute has one entry per vertex and every
    /// index refers to an existing vertex.
    pub fn validate(&self) -> bool {
        let n = self.positions.len();
        self.normals.len() == n
            && self.uvs.len() == n
            && self.base_positions.len() == n
            && self.indices.len() % 3 == 0
            && self.indices.iter().all(|i| (i as usize) < n)
    }

    /// Converts to the face-list representation.
    ///
    /// Vertices are kept one to one; each index triple becomes a face whose
    /// corner normals and UVs are read from the vertex attributes.
    pub fn to_face_mesh(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(self.vertex_count(), self.triangle_count());
        for &p in &self.positions {
            mesh.add_vertex(p);
        }

        let indices = self.indices.to_u32();
        for tri in indices.chunks_exact(3) {
            let corners = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            mesh.add_face(Face {
                a: tri[0],
                b: tri[1],
                c: tri[2],
                normal: DVec3::ZERO,
                vertex_normals: corners.map(|i| self.normals.get(i).copied().unwrap_or_default()),
                vertex_uvs: corners.map(|i| self.uvs.get(i).copied().unwrap_or_default()),
            });
        }
        mesh.compute_face_normals();
        mesh.set_base_positions(self.base_positions.clone());
        mesh
    }

    /// Exports positions as a flat f32 array for GPU.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten3(&self.positions)
    }

    /// Exports normals as a flat f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports base positions as a flat f32 array for GPU.
    pub fn base_positions_f32(&self) -> Vec<f32> {
        flatten3(&self.base_positions)
    }

    /// Exports texture coordinates as a flat f32 array for GPU.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    values
        .iter()
        .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
        .collect()
}

impl TryFrom<&Mesh> for BufferMesh {
    type Error = MeshError;

    /// Converts a face-list mesh to buffers.
    ///
    /// Corner attributes are scattered back onto vertices; when faces
    /// disagree about a shared vertex the last face wins. Missing base
    /// positions default to the vertex positions.
    ///
    /// # Errors
    /// Returns [`MeshError::IndexOutOfRange`] when a face corner refers to a
    /// vertex the mesh does not have.
    fn try_from(mesh: &Mesh) -> Result<Self, Self::Error> {
        mesh.check_indices()?;

        let n = mesh.vertex_count();
        let mut normals = vec![DVec3::ZERO; n];
        let mut uvs = vec![DVec2::ZERO; n];
        let mut indices = Vec::with_capacity(mesh.face_count() * 3);

        for face in mesh.faces() {
            for (k, corner) in face.corners().into_iter().enumerate() {
                normals[corner as usize] = face.vertex_normals[k];
                uvs[corner as usize] = face.vertex_uvs[k];
                indices.push(corner);
            }
        }

        let base_positions = mesh
            .base_positions()
            .map_or_else(|| mesh.vertices().to_vec(), <[DVec3]>::to_vec);

        Ok(Self {
            positions: mesh.vertices().to_vec(),
            normals,
            uvs,
            base_positions,
            indices: IndexBuffer::from_indices(indices, n),
        })
    }
}

impl From<&BufferMesh> for Mesh {
    fn from(buffer: &BufferMesh) -> Self {
        buffer.to_face_mesh()
    }
}
