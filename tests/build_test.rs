//! Integration tests for the table building pipeline.

use gridform::{
    build_table, build_table_with_options, BuildOptions, Diagnostic, InputShape, Rect, Table,
    DEFAULT_TOLERANCE,
};

fn shape(x: f64, y: f64, w: f64, h: f64, content: u32) -> InputShape<u32> {
    InputShape::new(Rect::new(x, y, w, h), content)
}

/// Three rows, two columns: full-width header over two half-width cells,
/// plus a full-width footer.
fn report_shapes() -> Vec<InputShape<u32>> {
    vec![
        shape(0.0, 0.0, 200.0, 20.0, 1),
        shape(0.0, 20.0, 100.0, 30.0, 2),
        shape(100.0, 20.0, 100.0, 30.0, 3),
        shape(0.0, 50.0, 200.0, 20.0, 4),
    ]
}

fn assert_dense(table: &Table<u32>) {
    for r in 0..table.row_count() {
        for c in 0..table.col_count() {
            assert!(
                table.get(r, c).is_some(),
                "grid position ({r}, {c}) is unclaimed"
            );
        }
    }
}

#[test]
fn height_and_width_sums_match_bounding_region() {
    let shapes = report_shapes();
    let table = build_table(shapes).unwrap().into_table().unwrap();

    assert!((table.total_height() - 70.0).abs() <= DEFAULT_TOLERANCE);
    assert!((table.total_width() - 200.0).abs() <= DEFAULT_TOLERANCE);
    assert_eq!(table.row_heights(), &[20.0, 30.0, 20.0]);
    assert_eq!(table.col_widths(), &[100.0, 100.0]);
}

#[test]
fn every_grid_position_is_claimed() {
    let table = build_table(report_shapes()).unwrap().into_table().unwrap();
    assert_dense(&table);
}

#[test]
fn content_cell_bounds_equal_boundary_deltas() {
    let table = build_table(report_shapes()).unwrap().into_table().unwrap();

    for cell in table.content_cells() {
        let mut width = 0.0;
        for c in cell.col..cell.col + cell.col_span {
            width += table.col_width(c);
        }
        let mut height = 0.0;
        for r in cell.row..cell.row + cell.row_span {
            height += table.row_height(r);
        }
        assert_eq!(cell.bounds.width, width);
        assert_eq!(cell.bounds.height, height);

        let mut x = 0.0;
        for c in 0..cell.col {
            x += table.col_width(c);
        }
        let mut y = 0.0;
        for r in 0..cell.row {
            y += table.row_height(r);
        }
        assert_eq!(cell.bounds.x, x);
        assert_eq!(cell.bounds.y, y);
    }
}

#[test]
fn rebuild_is_structurally_idempotent() {
    let first = build_table(report_shapes()).unwrap().into_table().unwrap();
    let second = build_table(report_shapes()).unwrap().into_table().unwrap();

    assert_eq!(first.row_count(), second.row_count());
    assert_eq!(first.col_count(), second.col_count());
    assert_eq!(first.cells().len(), second.cells().len());
    for (a, b) in first.cells().iter().zip(second.cells().iter()) {
        assert_eq!((a.row, a.col), (b.row, b.col));
        assert_eq!((a.row_span, a.col_span), (b.row_span, b.col_span));
        assert_eq!(a.content, b.content);
    }
}

#[test]
fn shared_edge_within_tolerance_merges_to_one_boundary() {
    // Right edge of the first at 100.0, left edge of the second at 100.3:
    // within the 0.5 tolerance, so one shared column boundary.
    let shapes = vec![
        shape(0.0, 0.0, 100.0, 20.0, 1),
        shape(100.3, 0.0, 99.7, 20.0, 2),
    ];
    let table = build_table(shapes).unwrap().into_table().unwrap();
    assert_eq!(table.col_count(), 2);
}

#[test]
fn edges_past_tolerance_stay_distinct() {
    // Edges at 100.0 and 101.0 differ by more than 0.5: two distinct
    // boundaries, leaving a sliver column between the shapes.
    let shapes = vec![
        shape(0.0, 0.0, 100.0, 20.0, 1),
        shape(101.0, 0.0, 99.0, 20.0, 2),
    ];
    let table = build_table(shapes).unwrap().into_table().unwrap();
    assert_eq!(table.col_count(), 3);
    assert!(table.cell(0, 1).is_filler());
}

#[test]
fn edge_merged_into_earlier_boundary_keeps_its_full_span() {
    // Left edges 0.0 / 0.3 / 0.7 with a shared right edge at 5.0: the edge
    // at 0.3 coalesces into the boundary at 0.0, while 0.7 stays distinct
    // (columns [0.0, 0.7, 5.0]). The second shape's origin lookup must land
    // on the same earlier boundary its edge was merged into, giving it
    // origin column 0 and a span across both columns, with no sliver filler
    // to its left.
    let shapes = vec![
        shape(0.0, 0.0, 5.0, 10.0, 1),
        shape(0.3, 10.0, 4.7, 10.0, 2),
        shape(0.7, 20.0, 4.3, 10.0, 3),
    ];
    let table = build_table(shapes).unwrap().into_table().unwrap();

    assert_eq!((table.row_count(), table.col_count()), (3, 2));

    let merged = table.cell(1, 0);
    assert_eq!(merged.content, Some(2));
    assert_eq!((merged.col, merged.col_span), (0, 2));
    assert_eq!(table.cell_id(1, 0), table.cell_id(1, 1));

    // The third shape's edge stayed a distinct boundary, so it starts at
    // column 1 and a filler covers (2, 0).
    let narrow = table.cell(2, 1);
    assert_eq!(narrow.content, Some(3));
    assert_eq!((narrow.col, narrow.col_span), (1, 1));
    assert!(table.cell(2, 0).is_filler());
}

#[test]
fn single_shape_filling_min_bounds_is_one_by_one() {
    let area = Rect::new(0.0, 0.0, 300.0, 150.0);
    let shapes = vec![shape(0.0, 0.0, 300.0, 150.0, 1)];
    let options = BuildOptions::new().with_min_bounds(area);
    let table = build_table_with_options(shapes, &options)
        .unwrap()
        .into_table()
        .unwrap();

    assert_eq!((table.row_count(), table.col_count()), (1, 1));
    assert_eq!(table.content_cells().count(), 1);
    assert_eq!(table.filler_cells().count(), 0);
    assert_eq!(table.cell(0, 0).bounds, area);
}

#[test]
fn four_quadrants_make_a_two_by_two_grid() {
    let shapes = vec![
        shape(0.0, 0.0, 50.0, 25.0, 1),
        shape(50.0, 0.0, 50.0, 25.0, 2),
        shape(0.0, 25.0, 50.0, 25.0, 3),
        shape(50.0, 25.0, 50.0, 25.0, 4),
    ];
    let table = build_table(shapes).unwrap().into_table().unwrap();

    assert_eq!((table.row_count(), table.col_count()), (2, 2));
    assert_eq!(table.content_cells().count(), 4);
    assert_eq!(table.filler_cells().count(), 0);
}

#[test]
fn three_quadrants_get_one_filler() {
    let shapes = vec![
        shape(0.0, 0.0, 50.0, 25.0, 1),
        shape(50.0, 0.0, 50.0, 25.0, 2),
        shape(0.0, 25.0, 50.0, 25.0, 3),
    ];
    let table = build_table(shapes).unwrap().into_table().unwrap();

    assert_eq!((table.row_count(), table.col_count()), (2, 2));
    assert_eq!(table.content_cells().count(), 3);
    assert_eq!(table.filler_cells().count(), 1);
    assert!(table.cell(1, 1).is_filler());
    assert!(!table.cell(1, 1).visible);
}

#[test]
fn full_width_header_spans_both_columns() {
    let shapes = vec![
        shape(0.0, 0.0, 200.0, 20.0, 1),
        shape(0.0, 20.0, 100.0, 30.0, 2),
        shape(100.0, 20.0, 100.0, 30.0, 3),
    ];
    let table = build_table(shapes).unwrap().into_table().unwrap();

    assert_eq!((table.row_count(), table.col_count()), (2, 2));
    let header = table.cell(0, 0);
    assert_eq!(header.col_span, 2);
    assert_eq!(header.row_span, 1);
    // Same cell from both covered positions.
    assert_eq!(table.cell_id(0, 0), table.cell_id(0, 1));
    assert_eq!(table.cell(1, 0).col_span, 1);
    assert_eq!(table.cell(1, 1).col_span, 1);
}

#[test]
fn sub_tolerance_shape_leaves_no_trace() {
    let shapes = vec![
        shape(0.0, 0.0, 100.0, 40.0, 1),
        // Width 0.1 is below the 0.5 tolerance: no boundary, no cell.
        shape(30.0, 0.0, 0.1, 40.0, 2),
    ];
    let table = build_table(shapes).unwrap().into_table().unwrap();

    assert_eq!((table.row_count(), table.col_count()), (1, 1));
    assert_eq!(table.content_cells().count(), 1);
    assert!(table.cells().iter().all(|c| c.content != Some(2)));
}

#[test]
fn overlapping_shapes_keep_first_and_record_diagnostic() {
    let shapes = vec![
        shape(0.0, 0.0, 100.0, 40.0, 1),
        shape(0.0, 0.0, 100.0, 40.0, 2),
    ];
    let outcome = build_table(shapes).unwrap();
    assert!(outcome.has_overlaps());

    let overlap = outcome.diagnostics.iter().next().unwrap();
    assert_eq!(
        overlap,
        &Diagnostic::Overlap {
            shape_index: 1,
            row: 0,
            col: 0
        }
    );

    let table = outcome.into_table().unwrap();
    assert_eq!(table.content_cells().count(), 1);
    assert_eq!(table.cell(0, 0).content, Some(1));
}

#[test]
fn min_bounds_extends_grid_with_fillers() {
    // A small shape inside a larger minimum area: the area's extents become
    // boundaries and fillers cover the rest.
    let shapes = vec![shape(50.0, 25.0, 100.0, 25.0, 1)];
    let options = BuildOptions::new().with_min_bounds(Rect::new(0.0, 0.0, 200.0, 100.0));
    let table = build_table_with_options(shapes, &options)
        .unwrap()
        .into_table()
        .unwrap();

    assert_eq!((table.row_count(), table.col_count()), (3, 3));
    assert_eq!(table.content_cells().count(), 1);
    assert!(table.filler_cells().count() > 0);
    assert_dense(&table);
    assert!((table.total_width() - 200.0).abs() <= DEFAULT_TOLERANCE);
    assert!((table.total_height() - 100.0).abs() <= DEFAULT_TOLERANCE);
}

#[test]
fn table_serializes_to_json() {
    let table = build_table(report_shapes()).unwrap().into_table().unwrap();
    let json = serde_json::to_string(&table).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("cells").is_some());

    let restored: Table<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.row_count(), table.row_count());
    assert_eq!(restored.col_count(), table.col_count());
}
