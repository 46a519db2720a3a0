//! Vertical-sweep boustrophedon cellular decomposition.
//!
//! Obstacle left/right edges split the wall into vertical slabs; inside each
//! slab the blocked y-intervals are swept bottom-up and the gaps between them
//! become cells. The union of all cells equals the free wall space, and two
//! distinct cells share at most a boundary edge.

use log::trace;

use crate::core::math::{approx_eq, definitely_lt};
use crate::core::{Cell, Rect};

/// Decompose the free wall space into cells.
///
/// Cells receive ids `0, 1, 2, ...` in emission order: slabs left to right,
/// free spans bottom to top. A fully blocked slab contributes no cell; with
/// no obstacles a single wall-sized cell comes back. Inputs are trusted —
/// [`plan`](crate::planner::plan) validates them first.
pub fn decompose(width: f64, height: f64, obstacles: &[Rect]) -> Vec<Cell> {
    let xs = critical_xs(width, obstacles);

    let mut cells = Vec::new();
    let mut next_id = 0u32;

    for pair in xs.windows(2) {
        let (xl, xr) = (pair[0], pair[1]);
        if !definitely_lt(xl, xr) {
            continue;
        }

        for (bottom, top) in free_spans(xl, xr, height, obstacles) {
            cells.push(Cell::new(next_id, Rect::new(xl, bottom, xr, top)));
            next_id += 1;
        }
    }

    trace!(
        "[Decompose] {} obstacles over {} slabs -> {} cells",
        obstacles.len(),
        xs.len().saturating_sub(1),
        cells.len()
    );
    cells
}

/// Sorted critical x-coordinates: both wall edges plus every obstacle's left
/// and right edge, with values within tolerance collapsed into one.
fn critical_xs(width: f64, obstacles: &[Rect]) -> Vec<f64> {
    let mut xs = Vec::with_capacity(2 + 2 * obstacles.len());
    xs.push(0.0);
    xs.push(width);
    for obs in obstacles {
        xs.push(obs.left);
        xs.push(obs.right);
    }

    xs.sort_by(f64::total_cmp);
    xs.dedup_by(|a, b| approx_eq(*a, *b));
    xs
}

/// Free vertical spans inside one slab, bottom to top.
fn free_spans(xl: f64, xr: f64, height: f64, obstacles: &[Rect]) -> Vec<(f64, f64)> {
    // Only obstacles whose horizontal extent strictly overlaps the slab
    // block it; an obstacle that merely touches a slab edge does not.
    let mut blocked: Vec<(f64, f64)> = obstacles
        .iter()
        .filter(|o| definitely_lt(xl, o.right) && definitely_lt(o.left, xr))
        .map(|o| (o.bottom, o.top))
        .collect();
    blocked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut spans = Vec::new();
    let mut current_y = 0.0f64;

    for (bottom, top) in blocked {
        if definitely_lt(current_y, bottom) {
            spans.push((current_y, bottom));
        }
        // Overlapping or nested intervals only ever push the frontier up.
        current_y = current_y.max(top);
    }

    if definitely_lt(current_y, height) {
        spans.push((current_y, height));
    }

    spans
}
