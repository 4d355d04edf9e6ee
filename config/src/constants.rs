//! # Configuration Constants
//!
//! Centralized constants for the tube wireframe pipeline. Option defaults,
//! orientation tolerances and output buffer limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tube Defaults**: Default values for every tube option
//! - **Limits**: Index width crossover and safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance used when deciding whether a normalized edge direction is
/// parallel to the canonical up axis.
///
/// A direction whose Y component is within this distance of `+1` keeps the
/// identity rotation; within this distance of `-1` it gets a half turn about X.
///
/// # Example
///
/// ```rust
/// use config::constants::DIRECTION_EPSILON;
///
/// let dir_y = 0.999_995_f64;
/// assert!(dir_y > 1.0 - DIRECTION_EPSILON);
/// ```
pub const DIRECTION_EPSILON: f64 = 1e-5;

/// Minimum edge length accepted by the tube builder.
///
/// Edges shorter than this have no usable direction and are rejected as
/// degenerate instead of producing NaN normals.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_EDGE_EPSILON;
///
/// let length = 0.0_f64;
/// assert!(length <= DEGENERATE_EDGE_EPSILON);
/// ```
pub const DEGENERATE_EDGE_EPSILON: f64 = 1e-12;

// =============================================================================
// TUBE DEFAULTS
// =============================================================================

/// Default wireframe pattern tag.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_MODE_TAG;
///
/// let user_mode: Option<&str> = None;
/// assert_eq!(user_mode.unwrap_or(DEFAULT_MODE_TAG), "triangle");
/// ```
pub const DEFAULT_MODE_TAG: &str = "triangle";

/// Default tube radius.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_THICKNESS;
///
/// assert!(DEFAULT_THICKNESS > 0.0);
/// ```
pub const DEFAULT_THICKNESS: f64 = 1.0;

/// Default number of subdivisions around each tube.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_RADIUS_SEGMENTS, MIN_RADIUS_SEGMENTS};
///
/// assert!(DEFAULT_RADIUS_SEGMENTS >= MIN_RADIUS_SEGMENTS);
/// ```
pub const DEFAULT_RADIUS_SEGMENTS: u32 = 4;

/// Default number of subdivisions along each tube.
pub const DEFAULT_LENGTH_SEGMENTS: u32 = 1;

/// Whether tubes omit their end caps by default.
pub const DEFAULT_OPEN_ENDED: bool = false;

/// Smallest radial subdivision count that still encloses a volume.
pub const MIN_RADIUS_SEGMENTS: u32 = 3;

/// Smallest length subdivision count.
pub const MIN_LENGTH_SEGMENTS: u32 = 1;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Vertex count at which merged output switches to 32-bit indices.
///
/// Meshes with fewer vertices than this use `u16` indices.
///
/// # Example
///
/// ```rust
/// use config::constants::NARROW_INDEX_LIMIT;
///
/// let wide = |vertex_count: usize| vertex_count >= NARROW_INDEX_LIMIT;
/// assert!(!wide(65_535));
/// assert!(wide(65_536));
/// ```
pub const NARROW_INDEX_LIMIT: usize = 65_536;

/// Maximum number of vertices in a single output mesh.
///
/// Safety limit to prevent memory exhaustion from extremely dense wireframes.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of vertices in one generated tube.
///
/// The torso grid duplicates its seam column; each cap has one centre vertex
/// per segment plus a closed ring. Saturates at `usize::MAX` instead of
/// wrapping, so oversized requests still exceed [`MAX_VERTICES`].
///
/// # Example
///
/// ```rust
/// use config::constants::tube_vertex_count;
///
/// assert_eq!(tube_vertex_count(4, 1, false), 28);
/// assert_eq!(tube_vertex_count(4, 1, true), 10);
/// assert_eq!(tube_vertex_count(u32::MAX, u32::MAX, false), usize::MAX);
/// ```
#[inline]
pub fn tube_vertex_count(radius_segments: u32, length_segments: u32, open_ended: bool) -> usize {
    let radial = radius_segments as usize;
    let torso = (length_segments as usize)
        .saturating_add(1)
        .saturating_mul(radial.saturating_add(1));
    if open_ended {
        torso
    } else {
        let cap = radial.saturating_mul(2).saturating_add(1);
        torso.saturating_add(cap.saturating_mul(2))
    }
}

/// Number of triangles in one generated tube.
///
/// # Example
///
/// ```rust
/// use config::constants::tube_triangle_count;
///
/// assert_eq!(tube_triangle_count(4, 1, false), 16);
/// ```
#[inline]
pub fn tube_triangle_count(radius_segments: u32, length_segments: u32, open_ended: bool) -> usize {
    let radial = radius_segments as usize;
    let torso = radial
        .saturating_mul(2)
        .saturating_mul(length_segments as usize);
    if open_ended {
        torso
    } else {
        torso.saturating_add(radial.saturating_mul(2))
    }
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
