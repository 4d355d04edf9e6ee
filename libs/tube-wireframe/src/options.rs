//! # Options
//!
//! Tube geometry settings and the full option set for
//! [`create_tube_wireframe`](crate::create_tube_wireframe).

use std::fmt;

use config::constants::{
    tube_triangle_count, tube_vertex_count, DEFAULT_LENGTH_SEGMENTS, DEFAULT_OPEN_ENDED,
    DEFAULT_RADIUS_SEGMENTS, DEFAULT_THICKNESS, MAX_VERTICES, MIN_LENGTH_SEGMENTS,
    MIN_RADIUS_SEGMENTS,
};
use glam::DMat4;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mode::WireframeMode;

/// Shape of every generated tube.
///
/// Missing fields take their defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use tube_wireframe::TubeOptions;
///
/// let options: TubeOptions = serde_json::from_str(r#"{ "radiusSegments": 8 }"#).unwrap();
/// assert_eq!(options.radius_segments, 8);
/// assert_eq!(options.thickness, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TubeOptions {
    /// Tube radius
    pub thickness: f64,
    /// Subdivisions around the tube
    pub radius_segments: u32,
    /// Subdivisions along the tube
    pub length_segments: u32,
    /// Omit the end caps
    pub open_ended: bool,
}

impl Default for TubeOptions {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            radius_segments: DEFAULT_RADIUS_SEGMENTS,
            length_segments: DEFAULT_LENGTH_SEGMENTS,
            open_ended: DEFAULT_OPEN_ENDED,
        }
    }
}

impl TubeOptions {
    /// Checks the options describe a buildable tube.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidOptions`] for a bad thickness or too few
    /// segments, and [`MeshError::TooManyVertices`] when a single tube would
    /// exceed [`MAX_VERTICES`].
    pub fn validate(&self) -> Result<(), MeshError> {
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(MeshError::invalid_options(format!(
                "thickness must be positive and finite: {}",
                self.thickness
            )));
        }
        if self.radius_segments < MIN_RADIUS_SEGMENTS {
            return Err(MeshError::invalid_options(format!(
                "radius_segments must be >= {MIN_RADIUS_SEGMENTS}: {}",
                self.radius_segments
            )));
        }
        if self.length_segments < MIN_LENGTH_SEGMENTS {
            return Err(MeshError::invalid_options(format!(
                "length_segments must be >= {MIN_LENGTH_SEGMENTS}: {}",
                self.length_segments
            )));
        }
        let count = self.vertex_count();
        if count > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count,
                max: MAX_VERTICES,
            });
        }
        Ok(())
    }

    /// Vertices in one tube built with these options.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        tube_vertex_count(self.radius_segments, self.length_segments, self.open_ended)
    }

    /// Triangles in one tube built with these options.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        tube_triangle_count(self.radius_segments, self.length_segments, self.open_ended)
    }
}

/// Which mesh representation to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Face-list [`Mesh`](crate::Mesh)
    #[default]
    FaceList,
    /// Indexed [`BufferMesh`](crate::BufferMesh)
    Buffer,
}

/// Predicate deciding which faces contribute cells.
pub type FaceFilter<'a> = dyn Fn(usize, WireframeMode) -> bool + 'a;

/// Options for [`create_tube_wireframe`](crate::create_tube_wireframe).
///
/// # Example
///
/// ```rust
/// use tube_wireframe::{OutputFormat, WireframeMode, WireframeOptions};
///
/// let options = WireframeOptions::new()
///     .with_mode(WireframeMode::Quad)
///     .with_thickness(0.05)
///     .with_radius_segments(6)
///     .with_format(OutputFormat::Buffer);
/// assert_eq!(options.tube.radius_segments, 6);
/// ```
pub struct WireframeOptions<'a> {
    /// Pattern to extract. `None` stands for an unrecognized tag and
    /// produces an empty wireframe.
    pub mode: Option<WireframeMode>,
    /// Face predicate.
    ///
    /// Called once per face in `Triangle` mode but once per face pair (with
    /// the even index of the pair's first face) in every other mode.
    pub filter: Option<Box<FaceFilter<'a>>>,
    /// Tube shape
    pub tube: TubeOptions,
    /// Transform applied to every placed tube
    pub matrix: Option<DMat4>,
    /// Output representation
    pub format: OutputFormat,
}

impl Default for WireframeOptions<'_> {
    fn default() -> Self {
        Self {
            mode: Some(WireframeMode::default()),
            filter: None,
            tube: TubeOptions::default(),
            matrix: None,
            format: OutputFormat::default(),
        }
    }
}

impl fmt::Debug for WireframeOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WireframeOptions")
            .field("mode", &self.mode)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .field("tube", &self.tube)
            .field("matrix", &self.matrix)
            .field("format", &self.format)
            .finish()
    }
}

impl<'a> WireframeOptions<'a> {
    /// Creates the default options: triangle mode, unit thickness, four
    /// radial segments, face-list output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pattern.
    pub fn with_mode(mut self, mode: WireframeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the pattern from its tag. An unknown tag leaves no pattern
    /// selected, which yields an empty wireframe.
    pub fn with_mode_tag(mut self, tag: &str) -> Self {
        self.mode = WireframeMode::from_tag(tag);
        self
    }

    /// Sets the face predicate.
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(usize, WireframeMode) -> bool + 'a,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Replaces the tube shape.
    pub fn with_tube(mut self, tube: TubeOptions) -> Self {
        self.tube = tube;
        self
    }

    /// Sets the tube radius.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.tube.thickness = thickness;
        self
    }

    /// Sets the subdivisions around each tube.
    pub fn with_radius_segments(mut self, segments: u32) -> Self {
        self.tube.radius_segments = segments;
        self
    }

    /// Sets the subdivisions along each tube.
    pub fn with_length_segments(mut self, segments: u32) -> Self {
        self.tube.length_segments = segments;
        self
    }

    /// Omits or keeps the tube caps.
    pub fn with_open_ended(mut self, open_ended: bool) -> Self {
        self.tube.open_ended = open_ended;
        self
    }

    /// Sets the transform applied to every placed tube.
    pub fn with_matrix(mut self, matrix: DMat4) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Sets the output representation.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns true if the filter accepts `face_index` (always, without one).
    #[inline]
    pub fn accepts(&self, face_index: usize, mode: WireframeMode) -> bool {
        self.filter.as_ref().map_or(true, |f| f(face_index, mode))
    }
}
