//! # Wireframe Modes
//!
//! The closed set of wireframe patterns and the corner table that maps each
//! quad pattern onto a pair of triangles.
//!
//! A quad `(a, b, c, d)` is expected to be split into the faces
//! `f0 = (a, b, d)` and `f1 = (b, c, d)`. Each rule below names one corner of
//! `f0` or `f1`, so `(F0_A, F1_B)` is the `a -> c` diagonal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Which face of a quad pair a corner is read from, and which corner.
pub type CornerRef = (usize, usize);

/// Corner `a` of the first face.
pub const F0_A: CornerRef = (0, 0);
/// Corner `b` of the first face.
pub const F0_B: CornerRef = (0, 1);
/// Corner `c` of the first face.
pub const F0_C: CornerRef = (0, 2);
/// Corner `a` of the second face.
pub const F1_A: CornerRef = (1, 0);
/// Corner `b` of the second face.
pub const F1_B: CornerRef = (1, 1);
/// Corner `c` of the second face.
pub const F1_C: CornerRef = (1, 2);

/// Two corners joined by one cell.
pub type CornerRule = [CornerRef; 2];

/// A wireframe pattern.
///
/// `Triangle` outlines every face. The other ten read faces in pairs and
/// emit a fixed set of quad sides and diagonals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WireframeMode {
    #[default]
    Triangle,
    Quad,
    CrossHatch,
    Diagonal0,
    Diagonal1,
    Horizontal,
    Vertical,
    Diagonal0Horizontal,
    Diagonal1Horizontal,
    Diagonal0Vertical,
    Diagonal1Vertical,
}

impl WireframeMode {
    /// Every mode, in the order the pattern list is published.
    pub const ALL: [WireframeMode; 11] = [
        WireframeMode::Triangle,
        WireframeMode::Quad,
        WireframeMode::CrossHatch,
        WireframeMode::Diagonal0,
        WireframeMode::Diagonal1,
        WireframeMode::Horizontal,
        WireframeMode::Vertical,
        WireframeMode::Diagonal0Horizontal,
        WireframeMode::Diagonal1Horizontal,
        WireframeMode::Diagonal0Vertical,
        WireframeMode::Diagonal1Vertical,
    ];

    /// Returns the string tag for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            WireframeMode::Triangle => "triangle",
            WireframeMode::Quad => "quad",
            WireframeMode::CrossHatch => "cross-hatch",
            WireframeMode::Diagonal0 => "diagonal0",
            WireframeMode::Diagonal1 => "diagonal1",
            WireframeMode::Horizontal => "horizontal",
            WireframeMode::Vertical => "vertical",
            WireframeMode::Diagonal0Horizontal => "diagonal0-horizontal",
            WireframeMode::Diagonal1Horizontal => "diagonal1-horizontal",
            WireframeMode::Diagonal0Vertical => "diagonal0-vertical",
            WireframeMode::Diagonal1Vertical => "diagonal1-vertical",
        }
    }

    /// Looks up a mode by its tag. Unknown tags resolve to `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tube_wireframe::WireframeMode;
    ///
    /// assert_eq!(WireframeMode::from_tag("cross-hatch"), Some(WireframeMode::CrossHatch));
    /// assert_eq!(WireframeMode::from_tag("zigzag"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == tag)
    }

    /// Returns true for modes that consume faces two at a time.
    #[inline]
    pub fn is_paired(self) -> bool {
        self != WireframeMode::Triangle
    }

    /// Corner rules emitted for each face pair.
    ///
    /// Empty for `Triangle`, which emits whole faces instead.
    pub fn corner_rules(self) -> &'static [CornerRule] {
        match self {
            WireframeMode::Triangle => &[],
            WireframeMode::CrossHatch => &[[F0_A, F1_B], [F0_B, F1_C]],
            WireframeMode::Diagonal0 => &[[F0_A, F1_B]],
            WireframeMode::Diagonal1 => &[[F0_B, F1_C]],
            WireframeMode::Diagonal0Vertical => &[[F0_A, F1_B], [F1_B, F1_C], [F0_A, F0_B]],
            WireframeMode::Diagonal1Vertical => &[[F0_B, F1_C], [F1_B, F1_C], [F0_A, F0_B]],
            WireframeMode::Diagonal0Horizontal => &[[F0_A, F1_B], [F1_A, F1_B], [F0_A, F0_C]],
            WireframeMode::Diagonal1Horizontal => &[[F0_B, F1_C], [F1_A, F1_B], [F0_A, F0_C]],
            WireframeMode::Quad => &[[F1_A, F1_B], [F0_A, F0_C], [F1_B, F1_C], [F0_A, F0_B]],
            WireframeMode::Horizontal => &[[F1_A, F1_B], [F0_A, F0_C]],
            WireframeMode::Vertical => &[[F1_B, F1_C], [F0_A, F0_B]],
        }
    }
}

impl fmt::Display for WireframeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WireframeMode {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| MeshError::unknown_mode(s))
    }
}
