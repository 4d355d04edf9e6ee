//! # Tube Wireframe
//!
//! Turns a triangle mesh into a wireframe made of solid tubes.
//!
//! ## Architecture
//!
//! ```text
//! Mesh (faces) → cells (per mode) → unique edges → tubes → BufferMesh / Mesh
//! ```
//!
//! ## Stages
//!
//! - **Extraction**: [`extract_cells`] reads faces one at a time
//!   (`triangle`) or two at a time as the halves of a quad (every other
//!   [`WireframeMode`]) and emits point-index loops.
//! - **Deduplication**: [`dedupe_edges`] keeps the first occurrence of each
//!   unordered point pair.
//! - **Tubes**: [`build_tube`] places a cylinder along each edge using the
//!   shortest rotation from `+Y`; [`merge_tubes`] concatenates them.
//!
//! ## Usage
//!
//! ```rust
//! use tube_wireframe::{create_tube_wireframe, Mesh, OutputFormat, WireframeOptions};
//! use glam::DVec3;
//!
//! let points = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
//! let mesh = Mesh::from_triangles(points, &[[0, 1, 2]]);
//!
//! let output = create_tube_wireframe(
//!     &mesh,
//!     &WireframeOptions::new().with_thickness(0.02).with_format(OutputFormat::Buffer),
//! )
//! .unwrap();
//! assert_eq!(output.vertex_count(), 3 * 28);
//! ```

pub mod buffer;
pub mod edges;
pub mod error;
pub mod extract;
pub mod mesh;
pub mod mode;
pub mod options;
pub mod primitives;
pub mod tube;
pub mod wireframe;

pub use buffer::{BufferMesh, IndexBuffer};
pub use edges::{cell_pairs, dedupe_edges, Edge};
pub use error::MeshError;
pub use extract::{extract_cells, extract_cells_tagged, Cell};
pub use mesh::{Face, Mesh};
pub use mode::WireframeMode;
pub use options::{FaceFilter, OutputFormat, TubeOptions, WireframeOptions};
pub use tube::{build_tube, quat_from_direction, TubeMesh};
pub use wireframe::{create_tube_wireframe, merge_tubes, WireframeOutput};
