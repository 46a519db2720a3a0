//! Shared helpers for planner integration tests.

#![allow(dead_code)]

use lepa_plan::core::{PathSegment, Rect, SegmentKind};
use lepa_plan::{PlanRequest, PlanResult, ToolSettings, Wall};

/// Build a request from plain numbers.
pub fn request(
    width: f64,
    height: f64,
    tool_width: f64,
    overlap_margin: f64,
    obstacles: &[Rect],
) -> PlanRequest {
    PlanRequest {
        wall: Wall::new(width, height),
        tool: ToolSettings::new(tool_width, overlap_margin),
        obstacles: obstacles.to_vec(),
    }
}

/// Coverage segments of a result, in path order.
pub fn coverage_segments(result: &PlanResult) -> Vec<PathSegment> {
    result
        .segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Coverage)
        .copied()
        .collect()
}

/// Transition segments of a result, in path order.
pub fn transition_segments(result: &PlanResult) -> Vec<PathSegment> {
    result
        .segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Transition)
        .copied()
        .collect()
}

/// Coverage rows grouped per visited cell.
///
/// Transitions are the cell boundaries in the segment list, so splitting at
/// them recovers each cell's rows in sweep order.
pub fn rows_per_cell(result: &PlanResult) -> Vec<Vec<PathSegment>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for seg in &result.segments {
        match seg.kind {
            SegmentKind::Coverage => current.push(*seg),
            SegmentKind::Transition => {
                if !current.is_empty() {
                    groups.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

/// Measured (coverage, transition) lengths summed over the segments.
pub fn measured_lengths(result: &PlanResult) -> (f64, f64) {
    let coverage = coverage_segments(result)
        .iter()
        .map(PathSegment::length)
        .sum();
    let transition = transition_segments(result)
        .iter()
        .map(PathSegment::length)
        .sum();
    (coverage, transition)
}

/// Assert that two lengths agree within the planner tolerance.
pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}
