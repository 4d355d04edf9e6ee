//! # JSON Options
//!
//! Option set accepted from JavaScript as a JSON string.
//!
//! ```json
//! {
//!   "mode": "cross-hatch",
//!   "thickness": 0.02,
//!   "radiusSegments": 6,
//!   "lengthSegments": 1,
//!   "openEnded": false,
//!   "matrix": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1]
//! }
//! ```
//!
//! Every field is optional. `matrix` is column-major.

use glam::DMat4;
use serde::Deserialize;
use tube_wireframe::{MeshError, OutputFormat, TubeOptions, WireframeMode, WireframeOptions};

/// Options as they arrive from JavaScript.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsOptions {
    /// Pattern tag; missing means `triangle`
    pub mode: Option<String>,
    /// Tube shape
    #[serde(flatten)]
    pub tube: TubeOptions,
    /// Column-major 4x4 transform
    pub matrix: Option<[f64; 16]>,
}

impl JsOptions {
    /// Parses options from JSON. An empty or blank string gives the defaults.
    pub fn parse(json: &str) -> Result<Self, MeshError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
            .map_err(|err| MeshError::invalid_options(format!("options JSON: {err}")))
    }

    /// Builds the library option set, always requesting buffer output.
    pub fn to_wireframe_options<'a>(&self) -> WireframeOptions<'a> {
        let mut options = WireframeOptions::new()
            .with_tube(self.tube)
            .with_format(OutputFormat::Buffer);
        options.mode = match &self.mode {
            Some(tag) => WireframeMode::from_tag(tag),
            None => Some(WireframeMode::default()),
        };
        options.matrix = self.matrix.as_ref().map(DMat4::from_cols_array);
        options
    }
}
