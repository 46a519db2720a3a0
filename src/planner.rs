//! Request validation and the four-stage planning pipeline.

use std::time::Instant;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::assemble::{PlanResult, assemble};
use crate::config::{OrderingSettings, PlannerConfig, ToolSettings};
use crate::core::Rect;
use crate::decompose::decompose;
use crate::error::{PlanError, Result};
use crate::order::order_cells;
use crate::pattern::SweepPattern;

/// The wall being finished.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Wall width in metres.
    pub width: f64,
    /// Wall height in metres.
    pub height: f64,
}

impl Wall {
    /// Create a wall from its dimensions.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A fully specified planning request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Wall dimensions.
    pub wall: Wall,
    /// Tool geometry.
    pub tool: ToolSettings,
    /// Axis-aligned obstacles on the wall. May be empty; overlapping
    /// obstacles are permitted and treated as their union.
    #[serde(default)]
    pub obstacles: Vec<Rect>,
}

/// Boustrophedon coverage planner.
///
/// Pure and re-entrant: every [`plan`](Self::plan) call owns all of its
/// intermediate state, so one planner can serve many threads without
/// locking.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoveragePlanner {
    ordering: OrderingSettings,
}

impl CoveragePlanner {
    /// Create a planner from a full configuration.
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            ordering: config.ordering,
        }
    }

    /// Create a planner with explicit ordering settings.
    pub fn with_ordering(ordering: OrderingSettings) -> Self {
        Self { ordering }
    }

    /// Compute a coverage path for the request.
    ///
    /// Validates the request once, then runs decomposition, pattern
    /// generation, visit ordering, and assembly. Returns the complete path
    /// or the first precondition violation; there are no partial results.
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanResult> {
        validate(request)?;

        let started = Instant::now();
        let wall = request.wall;

        let cells = decompose(wall.width, wall.height, &request.obstacles);
        trace!("[Plan] decomposed into {} cells", cells.len());

        // One pattern per cell, indexed by cell id (ids are sequential in
        // emission order).
        let patterns: Vec<SweepPattern> = cells
            .iter()
            .map(|cell| SweepPattern::generate(cell, &request.tool))
            .collect();

        let order = order_cells(&cells, &patterns, &self.ordering);

        let result = assemble(&cells, &patterns, &order, &request.tool);
        debug!(
            "[Plan] {} cells, {} segments, {:.3} m total in {:.2?}",
            cells.len(),
            result.segments.len(),
            result.metadata.total_length,
            started.elapsed()
        );

        Ok(result)
    }
}

/// Plan with default ordering settings.
///
/// Convenience wrapper over [`CoveragePlanner`].
pub fn plan(request: &PlanRequest) -> Result<PlanResult> {
    CoveragePlanner::default().plan(request)
}

fn validate(request: &PlanRequest) -> Result<()> {
    let wall = request.wall;
    if wall.width <= 0.0 || wall.height <= 0.0 {
        return Err(PlanError::InvalidDimensions {
            width: wall.width,
            height: wall.height,
        });
    }

    let tool = request.tool;
    if tool.tool_width <= 0.0 || tool.overlap_margin < 0.0 || tool.overlap_margin >= tool.tool_width
    {
        return Err(PlanError::InvalidTool {
            tool_width: tool.tool_width,
            overlap_margin: tool.overlap_margin,
        });
    }

    let bounds = Rect::new(0.0, 0.0, wall.width, wall.height);
    for (index, obs) in request.obstacles.iter().enumerate() {
        if obs.is_degenerate() || !bounds.contains_rect(obs) {
            return Err(PlanError::InvalidObstacle {
                index,
                left: obs.left,
                bottom: obs.bottom,
                right: obs.right,
                top: obs.top,
            });
        }
    }

    Ok(())
}
