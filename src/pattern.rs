//! Per-cell boustrophedon sweep generation.

use crate::config::ToolSettings;
use crate::core::math::approx_le;
use crate::core::{Cell, PathSegment, Point2D};

/// Coverage rows for one cell, alternating direction bottom to top.
///
/// The orderer and assembler only ever reason about [`entry`](Self::entry)
/// and [`exit`](Self::exit); the rows in between stay in generation order.
/// A generated pattern is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepPattern {
    /// Id of the cell this pattern covers.
    pub cell_id: u32,
    /// Horizontal coverage segments, bottom row first.
    pub segments: Vec<PathSegment>,
}

impl SweepPattern {
    /// Generate the sweep for one cell.
    ///
    /// The first row sits half a tool width above the cell floor so the
    /// tool's lower edge reaches it; rows then climb by one pitch, flipping
    /// direction each time. A cell too short for even the first row still
    /// gets one centred row, so no cell silently drops out of the plan.
    pub fn generate(cell: &Cell, tool: &ToolSettings) -> Self {
        let rect = cell.rect;
        let pitch = tool.pitch();

        let mut segments = Vec::new();
        let mut y = rect.bottom + tool.tool_width / 2.0;
        let mut leftward = false;

        while approx_le(y, rect.top) {
            segments.push(row(rect.left, rect.right, y, leftward));
            y += pitch;
            leftward = !leftward;
        }

        if segments.is_empty() {
            let mid = (rect.bottom + rect.top) / 2.0;
            segments.push(row(rect.left, rect.right, mid, false));
        }

        Self {
            cell_id: cell.id,
            segments,
        }
    }

    /// Point where the tool enters the cell (start of the first row).
    #[inline]
    pub fn entry(&self) -> Point2D {
        self.segments[0].start
    }

    /// Point where the tool leaves the cell (end of the last row).
    #[inline]
    pub fn exit(&self) -> Point2D {
        self.segments[self.segments.len() - 1].end
    }

    /// Total length of the coverage rows.
    pub fn coverage_length(&self) -> f64 {
        self.segments.iter().map(PathSegment::length).sum()
    }
}

fn row(left: f64, right: f64, y: f64, leftward: bool) -> PathSegment {
    if leftward {
        PathSegment::coverage(Point2D::new(right, y), Point2D::new(left, y))
    } else {
        PathSegment::coverage(Point2D::new(left, y), Point2D::new(right, y))
    }
}
