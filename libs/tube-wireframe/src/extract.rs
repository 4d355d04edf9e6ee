//! # Cell Extraction
//!
//! Walks a face list under a [`WireframeMode`] and emits cells: closed loops
//! of point indices whose consecutive pairs become wireframe edges.
//!
//! `Triangle` emits one three-point cell per face. Every other mode reads
//! faces two at a time as the halves of one quad and emits two-point cells
//! from the mode's corner table. A trailing unpaired face is ignored.

use tracing::{debug, warn};

use crate::mesh::{Face, Mesh};
use crate::mode::WireframeMode;

/// A closed loop of point indices.
pub type Cell = Vec<u32>;

/// Gathers the cells for `mode`.
///
/// `filter` is asked once per face for `Triangle` and once per face pair
/// (with the index of the pair's first face) for the paired modes. A
/// rejected pair contributes nothing.
///
/// # Example
///
/// ```rust
/// use tube_wireframe::{extract_cells, Mesh, WireframeMode};
/// use glam::DVec3;
///
/// let points = vec![DVec3::ZERO, DVec3::Y, DVec3::new(1.0, 1.0, 0.0), DVec3::X];
/// let mesh = Mesh::from_quads(points, &[[0, 1, 2, 3]]);
///
/// let cells = extract_cells(&mesh, WireframeMode::Diagonal0, |_, _| true);
/// assert_eq!(cells, vec![vec![0, 2]]);
/// ```
pub fn extract_cells<F>(mesh: &Mesh, mode: WireframeMode, mut filter: F) -> Vec<Cell>
where
    F: FnMut(usize, WireframeMode) -> bool,
{
    let faces = mesh.faces();

    let cells: Vec<Cell> = if mode.is_paired() {
        let rules = mode.corner_rules();
        let mut cells = Vec::with_capacity(faces.len() / 2 * rules.len());
        for (pair_index, pair) in faces.chunks_exact(2).enumerate() {
            if !filter(pair_index * 2, mode) {
                continue;
            }
            let quad: [&Face; 2] = [&pair[0], &pair[1]];
            cells.extend(rules.iter().map(|rule| {
                rule.iter()
                    .map(|&(face, corner)| quad[face].corners()[corner])
                    .collect()
            }));
        }
        cells
    } else {
        faces
            .iter()
            .enumerate()
            .filter(|&(i, _)| filter(i, mode))
            .map(|(_, face)| face.corners().to_vec())
            .collect()
    };

    debug!(
        mode = %mode,
        faces = faces.len(),
        cells = cells.len(),
        "extracted wireframe cells"
    );
    cells
}

/// Gathers cells for a mode given by its string tag.
///
/// An unrecognized tag yields no cells rather than an error, so a typo in a
/// tag produces an empty wireframe. A warning is logged.
pub fn extract_cells_tagged<F>(mesh: &Mesh, tag: &str, filter: F) -> Vec<Cell>
where
    F: FnMut(usize, WireframeMode) -> bool,
{
    match WireframeMode::from_tag(tag) {
        Some(mode) => extract_cells(mesh, mode, filter),
        None => {
            warn!(tag, "unrecognized wireframe mode, no cells extracted");
            Vec::new()
        }
    }
}
