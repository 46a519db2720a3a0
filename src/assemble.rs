//! Path assembly and summary metadata.

use serde::{Deserialize, Serialize};

use crate::config::ToolSettings;
use crate::core::{Cell, PathSegment, SegmentKind};
use crate::pattern::SweepPattern;

/// Summary numbers for a planned path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanMetadata {
    /// Summed length of the coverage rows.
    pub coverage_length: f64,
    /// Summed length of the transitions between cells.
    pub transition_length: f64,
    /// Coverage plus transition length.
    pub total_length: f64,
    /// Coverage length a transition-free sweep of every cell would need.
    pub theoretical_min: f64,
    /// `theoretical_min / total_length`, clamped to [0, 1]; 1.0 for an
    /// empty path.
    pub coverage_efficiency: f64,
    /// Number of cells in the decomposition.
    pub num_cells: usize,
    /// Cell ids in visit order.
    pub cell_order: Vec<u32>,
}

/// A complete planned coverage path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Coverage and transition segments in execution order.
    pub segments: Vec<PathSegment>,
    /// Summary metadata.
    pub metadata: PlanMetadata,
}

/// Stitch the per-cell patterns together in visit order.
///
/// Each cell contributes its rows unchanged, followed by one transition from
/// its exit to the next cell's entry. Zero-length transitions are kept so the
/// segment list mirrors the visit order exactly; filtering them is a consumer
/// concern. `patterns` must be indexed by cell id.
pub fn assemble(
    cells: &[Cell],
    patterns: &[SweepPattern],
    order: &[u32],
    tool: &ToolSettings,
) -> PlanResult {
    let mut segments = Vec::new();

    for (i, &cell_id) in order.iter().enumerate() {
        let pattern = &patterns[cell_id as usize];
        segments.extend_from_slice(&pattern.segments);

        if let Some(&next_id) = order.get(i + 1) {
            segments.push(PathSegment::transition(
                pattern.exit(),
                patterns[next_id as usize].entry(),
            ));
        }
    }

    let metadata = summarize(cells, &segments, order, tool);
    PlanResult { segments, metadata }
}

fn summarize(
    cells: &[Cell],
    segments: &[PathSegment],
    order: &[u32],
    tool: &ToolSettings,
) -> PlanMetadata {
    let mut coverage_length = 0.0;
    let mut transition_length = 0.0;
    for seg in segments {
        match seg.kind {
            SegmentKind::Coverage => coverage_length += seg.length(),
            SegmentKind::Transition => transition_length += seg.length(),
        }
    }
    let total_length = coverage_length + transition_length;

    let pitch = tool.pitch();
    let theoretical_min: f64 = cells
        .iter()
        .map(|c| (c.rect.height() / pitch).ceil() * c.rect.width())
        .sum();

    let coverage_efficiency = if total_length > 0.0 {
        (theoretical_min / total_length).clamp(0.0, 1.0)
    } else {
        1.0
    };

    PlanMetadata {
        coverage_length,
        transition_length,
        total_length,
        theoretical_min,
        coverage_efficiency,
        num_cells: cells.len(),
        cell_order: order.to_vec(),
    }
}
