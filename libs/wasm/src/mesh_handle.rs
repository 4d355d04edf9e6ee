//! # Wireframe Handle
//!
//! WASM-friendly wrapper for the merged tube buffers.

use tube_wireframe::{BufferMesh, IndexBuffer};
use wasm_bindgen::prelude::*;

/// Tube wireframe buffers that can be read from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const handle = create_tube_wireframe(positions, faces, '{"mode":"quad"}');
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(handle.positions(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(handle.normals(), 3));
/// geometry.setAttribute('uv', new THREE.BufferAttribute(handle.uvs(), 2));
/// geometry.setAttribute('basePosition', new THREE.BufferAttribute(handle.base_positions(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(handle.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct WireframeHandle {
    /// Vertex positions as [x, y, z, ...]
    positions: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Texture coordinates as [u, v, ...]
    uvs: Vec<f32>,
    /// Positions before placement as [x, y, z, ...]
    base_positions: Vec<f32>,
    /// Triangle indices, u16 below 65536 vertices
    indices: IndexBuffer,
}

#[wasm_bindgen]
impl WireframeHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / 3) as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Returns true if no tubes were generated.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns true when indices are 32-bit.
    pub fn wide_indices(&self) -> bool {
        self.indices.is_wide()
    }

    /// Returns the vertex positions as a Float32Array.
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the texture coordinates as a Float32Array.
    pub fn uvs(&self) -> Vec<f32> {
        self.uvs.clone()
    }

    /// Returns the pre-placement positions as a Float32Array.
    pub fn base_positions(&self) -> Vec<f32> {
        self.base_positions.clone()
    }

    /// Returns the indices as a Uint16Array or Uint32Array, matching the
    /// stored width.
    pub fn indices(&self) -> JsValue {
        match &self.indices {
            IndexBuffer::U16(v) => js_sys::Uint16Array::from(&v[..]).into(),
            IndexBuffer::U32(v) => js_sys::Uint32Array::from(&v[..]).into(),
        }
    }

    /// Returns the indices widened to a Uint32Array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.indices.to_u32()
    }
}

impl WireframeHandle {
    /// Returns the stored index buffer.
    pub fn index_buffer(&self) -> &IndexBuffer {
        &self.indices
    }
}

impl From<BufferMesh> for WireframeHandle {
    fn from(mesh: BufferMesh) -> Self {
        Self {
            positions: mesh.positions_f32(),
            normals: mesh.normals_f32(),
            uvs: mesh.uvs_f32(),
            base_positions: mesh.base_positions_f32(),
            indices: mesh.indices,
        }
    }
}
