use std::cell::RefCell;

use approx::assert_relative_eq;
use config::constants::tube_vertex_count;
use glam::{DMat4, DVec3};
use tube_wireframe::{
    create_tube_wireframe, Mesh, OutputFormat, WireframeMode, WireframeOptions,
};

const TUBE_VERTICES: usize = 28;
const TUBE_TRIANGLES: usize = 16;

fn cube_points() -> Vec<DVec3> {
    vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(1.0, 0.0, 1.0),
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(0.0, 1.0, 1.0),
    ]
}

const CUBE_QUADS: [[u32; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [1, 2, 6, 5],
    [0, 4, 7, 3],
];

/// Unit cube as 12 triangles in 6 quad pairs.
fn cube() -> Mesh {
    Mesh::from_quads(cube_points(), &CUBE_QUADS)
}

fn edge_count(mode: WireframeMode) -> usize {
    let output = create_tube_wireframe(&cube(), &WireframeOptions::new().with_mode(mode)).unwrap();
    assert_eq!(output.vertex_count() % TUBE_VERTICES, 0);
    output.vertex_count() / TUBE_VERTICES
}

#[test]
fn cube_quad_mode_has_twelve_tubes() {
    let options = WireframeOptions::new()
        .with_mode(WireframeMode::Quad)
        .with_format(OutputFormat::Buffer);
    let output = create_tube_wireframe(&cube(), &options).unwrap();

    assert_eq!(output.vertex_count(), 12 * tube_vertex_count(4, 1, false));
    assert_eq!(output.triangle_count(), 12 * TUBE_TRIANGLES);
    let buffer = output.as_buffer().unwrap();
    assert!(buffer.validate());
    assert!(!buffer.indices.is_wide());
}

#[test]
fn cube_diagonal_modes_have_one_tube_per_quad() {
    assert_eq!(edge_count(WireframeMode::Diagonal0), 6);
    assert_eq!(edge_count(WireframeMode::Diagonal1), 6);
    assert_eq!(edge_count(WireframeMode::CrossHatch), 12);
}

#[test]
fn cube_triangle_mode_includes_split_diagonals() {
    // 12 cube edges plus the 6 splitting diagonals
    assert_eq!(edge_count(WireframeMode::Triangle), 18);
}

#[test]
fn cube_side_modes_have_exact_counts() {
    // Each quad contributes two opposite sides; shared cube edges collapse to 9
    assert_eq!(edge_count(WireframeMode::Horizontal), 9);
    assert_eq!(edge_count(WireframeMode::Vertical), 9);
}

#[test]
fn cube_combined_modes_are_unions() {
    // 9 sides plus 6 diagonals, none of which coincide with a cube edge
    for mode in [
        WireframeMode::Diagonal0Horizontal,
        WireframeMode::Diagonal1Horizontal,
        WireframeMode::Diagonal0Vertical,
        WireframeMode::Diagonal1Vertical,
    ] {
        assert_eq!(edge_count(mode), 15, "{mode}");
    }
}

#[test]
fn every_mode_produces_output() {
    for mode in WireframeMode::ALL {
        assert!(edge_count(mode) > 0, "{mode} produced nothing");
    }
}

#[test]
fn reject_all_filter_is_empty_not_error() {
    for mode in WireframeMode::ALL {
        let options = WireframeOptions::new()
            .with_mode(mode)
            .with_filter(|_, _| false);
        let output = create_tube_wireframe(&cube(), &options).unwrap();
        assert!(output.is_empty());
        assert_eq!(output.triangle_count(), 0);
    }
}

#[test]
fn unknown_mode_is_empty_not_error() {
    let options = WireframeOptions::new()
        .with_mode_tag("hexagonal")
        .with_format(OutputFormat::Buffer);
    let output = create_tube_wireframe(&cube(), &options).unwrap();
    assert!(output.is_empty());
}

#[test]
fn filter_sees_every_face_in_triangle_mode() {
    let calls = RefCell::new(Vec::new());
    let options = WireframeOptions::new().with_filter(|i, mode| {
        calls.borrow_mut().push((i, mode));
        true
    });
    create_tube_wireframe(&cube(), &options).unwrap();
    drop(options);

    let calls = calls.into_inner();
    assert_eq!(calls.len(), 12);
    assert!(calls.iter().enumerate().all(|(k, &(i, mode))| i == k && mode == WireframeMode::Triangle));
}

#[test]
fn filter_sees_first_face_of_each_pair_in_paired_modes() {
    let calls = RefCell::new(Vec::new());
    let options = WireframeOptions::new()
        .with_mode(WireframeMode::Quad)
        .with_filter(|i, _| {
            calls.borrow_mut().push(i);
            true
        });
    create_tube_wireframe(&cube(), &options).unwrap();
    drop(options);

    assert_eq!(calls.into_inner(), vec![0, 2, 4, 6, 8, 10]);
}

#[test]
fn filter_selects_faces() {
    // Keep only the bottom quad
    let options = WireframeOptions::new()
        .with_mode(WireframeMode::Quad)
        .with_filter(|i, _| i == 0);
    let output = create_tube_wireframe(&cube(), &options).unwrap();
    assert_eq!(output.vertex_count(), 4 * TUBE_VERTICES);

    let mesh = output.into_face_list();
    for p in mesh.vertices() {
        assert!(p.z <= 1.0 + 1e-12 && p.z >= -1.0 - 1e-12);
    }
}

#[test]
fn tubes_stay_within_thickness_of_cube() {
    let thickness = 0.1;
    let options = WireframeOptions::new()
        .with_mode(WireframeMode::Quad)
        .with_thickness(thickness)
        .with_radius_segments(4)
        .with_length_segments(2);
    let mesh = create_tube_wireframe(&cube(), &options).unwrap().into_face_list();

    let (min, max) = mesh.bounding_box();
    assert!(min.cmpge(DVec3::splat(-thickness - 1e-9)).all());
    assert!(max.cmple(DVec3::splat(1.0 + thickness + 1e-9)).all());
    assert_relative_eq!(min.x, -thickness, epsilon = 1e-9);
    assert_relative_eq!(max.y, 1.0 + thickness, epsilon = 1e-9);
}

#[test]
fn matrix_moves_every_tube() {
    let shift = DVec3::new(10.0, -4.0, 2.5);
    let plain = create_tube_wireframe(
        &cube(),
        &WireframeOptions::new().with_format(OutputFormat::Buffer),
    )
    .unwrap()
    .into_buffer()
    .unwrap();
    let moved = create_tube_wireframe(
        &cube(),
        &WireframeOptions::new()
            .with_matrix(DMat4::from_translation(shift))
            .with_format(OutputFormat::Buffer),
    )
    .unwrap()
    .into_buffer()
    .unwrap();

    assert_eq!(plain.vertex_count(), moved.vertex_count());
    for (a, b) in plain.positions.iter().zip(&moved.positions) {
        assert!((*a + shift).abs_diff_eq(*b, 1e-9));
    }
    assert_eq!(plain.base_positions, moved.base_positions);
    assert_eq!(plain.indices, moved.indices);
}

#[test]
fn output_is_deterministic() {
    let options = WireframeOptions::new()
        .with_mode(WireframeMode::CrossHatch)
        .with_format(OutputFormat::Buffer);
    let first = create_tube_wireframe(&cube(), &options).unwrap().into_buffer().unwrap();
    let second = create_tube_wireframe(&cube(), &options).unwrap().into_buffer().unwrap();
    assert_eq!(first.positions, second.positions);
    assert_eq!(first.normals, second.normals);
    assert_eq!(first.indices, second.indices);
}

#[test]
fn face_list_and_buffer_agree() {
    let faces = create_tube_wireframe(&cube(), &WireframeOptions::new()).unwrap();
    let buffer = create_tube_wireframe(
        &cube(),
        &WireframeOptions::new().with_format(OutputFormat::Buffer),
    )
    .unwrap();

    let faces = faces.into_face_list();
    let buffer = buffer.into_buffer().unwrap();
    assert_eq!(faces.vertices(), &buffer.positions[..]);
    assert_eq!(faces.indices_u32(), buffer.indices.to_u32());
    assert_eq!(faces.base_positions(), Some(&buffer.base_positions[..]));
}
