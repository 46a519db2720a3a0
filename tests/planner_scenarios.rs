//! End-to-end planning scenarios on concrete wall layouts.

mod common;

use common::{
    assert_close, coverage_segments, measured_lengths, request, rows_per_cell, transition_segments,
};
use lepa_plan::core::Rect;
use lepa_plan::decompose::decompose;
use lepa_plan::order::transition_cost;
use lepa_plan::pattern::SweepPattern;
use lepa_plan::{ToolSettings, plan};

#[test]
fn open_wall_is_one_cell_of_ten_rows() {
    let result = plan(&request(10.0, 10.0, 1.0, 0.0, &[])).unwrap();

    assert_eq!(result.metadata.num_cells, 1);
    assert_eq!(result.metadata.cell_order, vec![0]);
    assert!(transition_segments(&result).is_empty());

    let rows = coverage_segments(&result);
    assert_eq!(rows.len(), 10);
    for (i, row) in rows.iter().enumerate() {
        assert_close(row.start.y, 0.5 + i as f64, "row height");
    }

    assert_close(result.metadata.total_length, 100.0, "total length");
    assert_close(result.metadata.coverage_length, 100.0, "coverage length");
}

#[test]
fn centered_obstacle_splits_wall_into_four_cells() {
    let obstacles = [Rect::new(4.0, 4.0, 6.0, 6.0)];
    let result = plan(&request(10.0, 10.0, 1.0, 0.0, &obstacles)).unwrap();

    assert_eq!(result.metadata.num_cells, 4);

    // Every cell is visited: four row groups separated by transitions.
    assert_eq!(rows_per_cell(&result).len(), 4);
    assert_eq!(transition_segments(&result).len(), 3);
}

#[test]
fn full_width_band_leaves_two_cells_and_one_transition() {
    let obstacles = [Rect::new(0.0, 4.0, 10.0, 6.0)];
    let result = plan(&request(10.0, 10.0, 1.0, 0.0, &obstacles)).unwrap();

    assert_eq!(result.metadata.num_cells, 2);
    assert_eq!(transition_segments(&result).len(), 1);

    // One cell below the band, one above it.
    let groups = rows_per_cell(&result);
    assert_eq!(groups.len(), 2);
    assert!(groups[0].iter().all(|s| s.start.y < 4.0));
    assert!(groups[1].iter().all(|s| s.start.y > 6.0));
}

#[test]
fn two_pillars_order_beats_naive_enumeration() {
    let obstacles = [Rect::new(2.0, 2.0, 4.0, 8.0), Rect::new(6.0, 2.0, 8.0, 8.0)];
    let tool = ToolSettings::new(1.0, 0.0);

    let cells = decompose(10.0, 10.0, &obstacles);
    assert_eq!(cells.len(), 7);

    let patterns: Vec<SweepPattern> = cells
        .iter()
        .map(|c| SweepPattern::generate(c, &tool))
        .collect();
    let naive: Vec<u32> = cells.iter().map(|c| c.id).collect();

    let result = plan(&request(10.0, 10.0, 1.0, 0.0, &obstacles)).unwrap();

    let optimized_cost = transition_cost(&result.metadata.cell_order, &patterns);
    let naive_cost = transition_cost(&naive, &patterns);
    assert!(
        optimized_cost <= naive_cost + 1e-9,
        "optimized {} vs naive {}",
        optimized_cost,
        naive_cost
    );
    assert_close(
        result.metadata.transition_length,
        optimized_cost,
        "transition length matches order cost",
    );
}

#[test]
fn overlap_margin_shrinks_row_pitch() {
    let result = plan(&request(10.0, 10.0, 2.0, 0.5, &[])).unwrap();

    let rows = coverage_segments(&result);
    let expected = [1.0, 2.5, 4.0, 5.5, 7.0, 8.5, 10.0];

    assert_eq!(rows.len(), expected.len());
    for (row, e) in rows.iter().zip(expected.iter()) {
        assert_close(row.start.y, *e, "row height");
    }
}

#[test]
fn fully_blocked_wall_yields_empty_plan() {
    let obstacles = [Rect::new(0.0, 0.0, 10.0, 10.0)];
    let result = plan(&request(10.0, 10.0, 1.0, 0.0, &obstacles)).unwrap();

    assert_eq!(result.metadata.num_cells, 0);
    assert!(result.segments.is_empty());
    assert_eq!(result.metadata.total_length, 0.0);
    assert_eq!(result.metadata.coverage_efficiency, 1.0);
    assert!(result.metadata.cell_order.is_empty());
}

#[test]
fn narrow_gap_between_obstacles_is_still_swept() {
    // Two tall blocks leaving a 0.2 m vertical corridor in the middle.
    let obstacles = [Rect::new(0.0, 0.0, 2.4, 5.0), Rect::new(2.6, 0.0, 5.0, 5.0)];
    let result = plan(&request(5.0, 5.0, 0.1, 0.0, &obstacles)).unwrap();

    assert!(result.metadata.num_cells >= 1);
    let corridor_rows: Vec<_> = coverage_segments(&result)
        .into_iter()
        .filter(|s| s.start.x >= 2.4 && s.end.x <= 2.6)
        .collect();
    assert!(!corridor_rows.is_empty());

    let (coverage, _) = measured_lengths(&result);
    assert!(coverage > 0.0);
}

#[test]
fn sliver_cell_below_obstacle_gets_a_centred_row() {
    // The obstacle floats 0.2 m above the floor; the strip underneath is
    // shorter than half the tool width but must still be covered.
    let obstacles = [Rect::new(2.0, 0.2, 8.0, 10.0)];
    let result = plan(&request(10.0, 10.0, 1.0, 0.0, &obstacles)).unwrap();

    let under: Vec<_> = coverage_segments(&result)
        .into_iter()
        .filter(|s| s.start.y < 0.2 && s.start.x >= 2.0 - 1e-9 && s.end.x <= 8.0 + 1e-9)
        .collect();

    assert_eq!(under.len(), 1);
    assert_close(under[0].start.y, 0.1, "centred sliver row");
}
