//! Path segments and their kind tag.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// What the tool is doing along a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Tool active, sweeping a row inside a cell.
    Coverage,
    /// Tool idle, moving between cells.
    Transition,
}

/// A straight path segment from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    /// Where the segment begins.
    pub start: Point2D,
    /// Where the segment ends.
    pub end: Point2D,
    /// Coverage row or inter-cell transition.
    pub kind: SegmentKind,
}

impl PathSegment {
    /// Create a coverage segment.
    #[inline]
    pub const fn coverage(start: Point2D, end: Point2D) -> Self {
        Self {
            start,
            end,
            kind: SegmentKind::Coverage,
        }
    }

    /// Create a transition segment.
    #[inline]
    pub const fn transition(start: Point2D, end: Point2D) -> Self {
        Self {
            start,
            end,
            kind: SegmentKind::Transition,
        }
    }

    /// Euclidean length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}
