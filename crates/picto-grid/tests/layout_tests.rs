use picto_grid::constants::*;
use picto_grid::layout::*;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_page_count() {
    assert_eq!(page_count(0), 0);
    assert_eq!(page_count(1), 1);
    assert_eq!(page_count(4), 1);
    assert_eq!(page_count(5), 2);
    assert_eq!(page_count(8), 2);
    assert_eq!(page_count(9), 3);
}

#[test]
fn test_quadrant_origins() {
    assert_eq!(quadrant_origin(0), Origin::new(50.0, 700.0));
    assert_eq!(quadrant_origin(1), Origin::new(650.0, 700.0));
    assert_eq!(quadrant_origin(2), Origin::new(50.0, 300.0));
    assert_eq!(quadrant_origin(3), Origin::new(650.0, 300.0));
}

#[test]
fn test_plan_pages_empty() {
    assert!(plan_pages(0).is_empty());
}

#[test]
fn test_plan_pages_five_grids() {
    let placements = plan_pages(5);
    assert_eq!(placements.len(), 5);

    for (i, placement) in placements.iter().take(4).enumerate() {
        assert_eq!(placement.grid_index, i);
        assert_eq!(placement.page_index, 0);
        assert_eq!(placement.quadrant, i);
        assert_eq!(placement.origin, quadrant_origin(i));
    }

    let last = placements[4];
    assert_eq!(last.grid_index, 4);
    assert_eq!(last.page_index, 1);
    assert_eq!(last.quadrant, 0);
    assert_eq!(last.origin, Origin::new(50.0, 700.0));
}

#[test]
fn test_plan_pages_never_splits_grids() {
    for n in 0..=13 {
        let placements = plan_pages(n);
        assert_eq!(placements.len(), n);
        let pages = placements.iter().map(|p| p.page_index + 1).max().unwrap_or(0);
        assert_eq!(pages, page_count(n));
        for p in &placements {
            assert!(p.quadrant < GRIDS_PER_PAGE);
            assert_eq!(p.page_index, p.grid_index / GRIDS_PER_PAGE);
        }
    }
}

#[test]
fn test_cell_geometry() {
    assert_close(CELL_WIDTH_PT, 105.8);
    assert_close(CELL_HEIGHT_PT, 362.0 / 3.0);

    let origin = Origin::new(50.0, 700.0);
    let rect = cell_rect(origin, 2, 4);
    assert_close(rect.x, 50.0 + 4.0 * CELL_WIDTH_PT);
    assert_close(rect.y, 700.0 - 2.0 * CELL_HEIGHT_PT);
    assert_eq!(rect.width, CELL_WIDTH_PT);
    assert_eq!(rect.height, CELL_HEIGHT_PT);
}

#[test]
fn test_fit_image_bounds() {
    let max_w = CELL_WIDTH_PT - IMAGE_PADDING_PT;
    let max_h = CELL_HEIGHT_PT - IMAGE_PADDING_PT;

    // Wide image is limited by width
    let (w, h) = fit_image(400.0, 100.0);
    assert_close(w, max_w);
    assert!(h <= max_h);
    assert_close(w / h, 4.0);

    // Tall image is limited by height
    let (w, h) = fit_image(50.0, 500.0);
    assert_close(h, max_h);
    assert!(w <= max_w);

    // Small images are scaled up
    let (w, h) = fit_image(10.0, 10.0);
    assert_close(w, max_w.min(max_h));
    assert_close(h, max_w.min(max_h));
}

#[test]
fn test_image_rect_centered_and_lifted() {
    let cell = cell_rect(Origin::new(50.0, 700.0), 0, 0);
    let rect = image_rect(cell, 100.0, 100.0);

    assert_close(rect.x + rect.width / 2.0, cell.x + cell.width / 2.0);
    assert_close(
        rect.y + rect.height / 2.0,
        cell.y + cell.height / 2.0 + IMAGE_LIFT_PT,
    );
}

#[test]
fn test_label_position() {
    let cell = cell_rect(Origin::new(50.0, 700.0), 1, 2);
    let pos = label_position(cell);
    assert_close(pos.x, cell.x + CELL_WIDTH_PT / 2.0 - 10.0);
    assert_close(pos.y, cell.y + 10.0);
}

#[test]
fn test_border_lines() {
    let origin = Origin::new(650.0, 300.0);
    let lines = border_lines(origin);
    let top = origin.y + CELL_HEIGHT_PT;

    let vertical: Vec<_> = lines
        .iter()
        .filter(|l| l.axis == LineAxis::Vertical)
        .collect();
    let horizontal: Vec<_> = lines
        .iter()
        .filter(|l| l.axis == LineAxis::Horizontal)
        .collect();
    assert_eq!(vertical.len(), 6);
    assert_eq!(horizontal.len(), 4);

    for line in &vertical {
        let expected = if line.index == 0 || line.index == 5 { 7.0 } else { 5.0 };
        assert_eq!(line.thickness, expected);
        assert_close(line.start.x, origin.x + line.index as f32 * CELL_WIDTH_PT);
        assert_eq!(line.start.x, line.end.x);
        assert_close(line.start.y, top);
        assert_close(line.end.y, top - 3.0 * CELL_HEIGHT_PT);
    }

    for line in &horizontal {
        let expected = if line.index == 0 || line.index == 3 { 7.0 } else { 5.0 };
        assert_eq!(line.thickness, expected);
        assert_close(line.start.y, top - line.index as f32 * CELL_HEIGHT_PT);
        assert_eq!(line.start.y, line.end.y);
        assert_close(line.start.x, origin.x);
        assert_close(line.end.x, origin.x + 5.0 * CELL_WIDTH_PT);
    }
}
