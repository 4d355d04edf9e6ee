//! WASM-facing entry points for the tube wireframe transform.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests call `create_tube_wireframe_internal`,
//! which returns Rust errors and takes a Rust filter, to avoid depending on
//! a JS host.
//!
//! ```
//! let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
//! let handle = tube_wireframe_wasm::create_tube_wireframe_internal(
//!     &positions,
//!     &[0, 1, 2],
//!     r#"{ "thickness": 0.01 }"#,
//!     None,
//! )
//! .unwrap();
//! assert_eq!(handle.vertex_count(), 3 * 28);
//! ```

use config::constants::{DEFAULT_RADIUS_SEGMENTS, DEFAULT_THICKNESS};
use glam::DVec3;
use tracing::debug;
use tube_wireframe::{create_tube_wireframe as build, Mesh, MeshError, WireframeMode};
use wasm_bindgen::prelude::*;

mod mesh_handle;
mod options;

pub use mesh_handle::WireframeHandle;
pub use options::JsOptions;

/// Face predicate supplied by native callers.
pub type RustFilter<'a> = &'a dyn Fn(usize, WireframeMode) -> bool;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "tube-wireframe-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns every wireframe mode tag, in publication order.
///
/// # Examples
/// ```
/// let modes = tube_wireframe_wasm::modes();
/// assert_eq!(modes.len(), 11);
/// assert_eq!(modes[0], "triangle");
/// ```
#[wasm_bindgen]
pub fn modes() -> Vec<String> {
    WireframeMode::ALL
        .iter()
        .map(|mode| mode.as_str().to_string())
        .collect()
}

/// Returns the default tube radius.
#[wasm_bindgen]
pub fn default_thickness() -> f64 {
    DEFAULT_THICKNESS
}

/// Returns the default number of segments around each tube.
#[wasm_bindgen]
pub fn default_radius_segments() -> u32 {
    DEFAULT_RADIUS_SEGMENTS
}

/// Builds a tube wireframe from flat typed arrays.
///
/// `positions` holds `[x, y, z, ...]`; `faces` holds three point indices per
/// face. `filter`, when given, is called as `filter(faceIndex, modeTag)`
/// and a falsy result (or a thrown exception) skips the face or face pair.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// for malformed arrays, malformed options or invalid geometry.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const handle = create_tube_wireframe(
/// //   new Float32Array(points),
/// //   new Uint32Array(faces),
/// //   JSON.stringify({ mode: "quad", thickness: 0.02 }),
/// //   (i, mode) => i < 100,
/// // );
/// ```
#[wasm_bindgen]
pub fn create_tube_wireframe(
    positions: &[f32],
    faces: &[u32],
    options_json: &str,
    filter: Option<js_sys::Function>,
) -> Result<WireframeHandle, JsValue> {
    let js_filter = filter.map(|f| {
        move |index: usize, mode: WireframeMode| {
            f.call2(
                &JsValue::NULL,
                &JsValue::from(index as u32),
                &JsValue::from_str(mode.as_str()),
            )
            .map(|result| result.is_truthy())
            .unwrap_or(false)
        }
    });
    let rust_filter = js_filter
        .as_ref()
        .map(|f| f as &dyn Fn(usize, WireframeMode) -> bool);

    create_tube_wireframe_internal(positions, faces, options_json, rust_filter)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-side implementation of [`create_tube_wireframe`].
///
/// # Errors
/// Returns [`MeshError::InvalidOptions`] when the arrays are not whole
/// triples or the JSON is malformed, and any error from the transform.
pub fn create_tube_wireframe_internal(
    positions: &[f32],
    faces: &[u32],
    options_json: &str,
    filter: Option<RustFilter<'_>>,
) -> Result<WireframeHandle, MeshError> {
    let mesh = mesh_from_arrays(positions, faces)?;
    let parsed = JsOptions::parse(options_json)?;
    debug!(?parsed, "parsed wireframe options");

    let mut options = parsed.to_wireframe_options();
    if let Some(filter) = filter {
        options = options.with_filter(filter);
    }

    let buffer = build(&mesh, &options)?.into_buffer()?;
    Ok(WireframeHandle::from(buffer))
}

/// Builds a face-list mesh from flat arrays.
pub fn mesh_from_arrays(positions: &[f32], faces: &[u32]) -> Result<Mesh, MeshError> {
    if positions.len() % 3 != 0 {
        return Err(MeshError::invalid_options(format!(
            "positions length must be a multiple of 3: {}",
            positions.len()
        )));
    }
    if faces.len() % 3 != 0 {
        return Err(MeshError::invalid_options(format!(
            "faces length must be a multiple of 3: {}",
            faces.len()
        )));
    }

    let points = positions
        .chunks_exact(3)
        .map(|p| DVec3::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2])))
        .collect();
    let triangles: Vec<[u32; 3]> = faces.chunks_exact(3).map(|f| [f[0], f[1], f[2]]).collect();
    Ok(Mesh::from_triangles(points, &triangles))
}
