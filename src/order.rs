//! Cell visit ordering: greedy nearest-entry seeding plus 2-opt refinement.
//!
//! The quantity minimized is the summed exit-to-entry transition distance
//! over the visit order. A greedy nearest-neighbour pass builds an initial
//! tour from the bottom-left cell; first-improvement 2-opt then reverses
//! subsequences while that keeps strictly shortening the tour.

use log::{debug, trace};

use crate::config::OrderingSettings;
use crate::core::Cell;
use crate::core::math::definitely_lt;
use crate::pattern::SweepPattern;

/// Choose the order in which to sweep the cells.
///
/// `patterns` must be indexed by cell id (the planner generates one pattern
/// per cell in id order). Returns a permutation of all cell ids; empty input
/// returns an empty order.
pub fn order_cells(
    cells: &[Cell],
    patterns: &[SweepPattern],
    settings: &OrderingSettings,
) -> Vec<u32> {
    if cells.is_empty() {
        return Vec::new();
    }
    if cells.len() == 1 {
        return vec![cells[0].id];
    }

    let mut order = greedy_seed(cells, patterns);

    if settings.two_opt {
        let before = transition_cost(&order, patterns);
        two_opt(&mut order, patterns, settings.max_passes);
        let after = transition_cost(&order, patterns);
        debug!(
            "[Order] {} cells, transition cost {:.3} -> {:.3}",
            cells.len(),
            before,
            after
        );
    }

    order
}

/// Total exit-to-entry distance for a candidate visit order.
///
/// `patterns` must be indexed by cell id, as in [`order_cells`].
pub fn transition_cost(order: &[u32], patterns: &[SweepPattern]) -> f64 {
    order
        .windows(2)
        .map(|pair| {
            patterns[pair[0] as usize]
                .exit()
                .distance(&patterns[pair[1] as usize].entry())
        })
        .sum()
}

/// Greedy nearest-neighbour tour from the bottom-left-most cell.
fn greedy_seed(cells: &[Cell], patterns: &[SweepPattern]) -> Vec<u32> {
    // Start at the lexicographic minimum of (left, bottom); scanning in id
    // order and replacing only on a strict improvement breaks ties toward
    // the smaller id.
    let mut start = 0usize;
    for i in 1..cells.len() {
        let a = cells[i].rect;
        let b = cells[start].rect;
        let key = a
            .left
            .total_cmp(&b.left)
            .then(a.bottom.total_cmp(&b.bottom));
        if key == std::cmp::Ordering::Less {
            start = i;
        }
    }

    let mut order = Vec::with_capacity(cells.len());
    let mut visited = vec![false; cells.len()];

    visited[start] = true;
    order.push(cells[start].id);
    let mut exit = patterns[start].exit();

    for _ in 1..cells.len() {
        let mut nearest = None;
        let mut best = f64::INFINITY;

        for (i, pattern) in patterns.iter().enumerate() {
            if visited[i] {
                continue;
            }
            // Strict < keeps the smaller id on distance ties.
            let d = exit.distance(&pattern.entry());
            if d < best {
                best = d;
                nearest = Some(i);
            }
        }

        if let Some(i) = nearest {
            visited[i] = true;
            order.push(cells[i].id);
            exit = patterns[i].exit();
        }
    }

    order
}

/// First-improvement 2-opt: reverse `order[i..j]` whenever that strictly
/// shortens the tour, restarting the scan after every accepted reversal.
///
/// Reversal changes concatenation order only; entry and exit points are
/// re-read per cell from the unchanged patterns when costing a candidate.
fn two_opt(order: &mut Vec<u32>, patterns: &[SweepPattern], max_passes: usize) {
    let n = order.len();
    if n < 3 {
        return;
    }

    let mut passes = 0;
    let mut improved = true;

    while improved && passes < max_passes {
        improved = false;
        passes += 1;

        let current_cost = transition_cost(order, patterns);

        'scan: for i in 1..n - 1 {
            for j in i + 1..n {
                let mut candidate = order.clone();
                candidate[i..j].reverse();

                if definitely_lt(transition_cost(&candidate, patterns), current_cost) {
                    *order = candidate;
                    improved = true;
                    break 'scan;
                }
            }
        }
    }

    trace!("[Order] 2-opt converged after {} pass(es)", passes);
}
