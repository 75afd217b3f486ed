//! Page and grid geometry
//!
//! This module handles all the geometric calculations:
//! - Pagination (which page and quadrant each grid lands in)
//! - Cell rectangles within a grid
//! - Border line positions and weights
//! - Pictogram fitting and label placement

use crate::constants::*;

// =============================================================================
// Types
// =============================================================================

/// A point in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

impl Origin {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, `(x, y)` is the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Where one grid of the collection is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index into the grid collection
    pub grid_index: usize,
    /// Index of the output page
    pub page_index: usize,
    /// Position within the page (0..4, row-major)
    pub quadrant: usize,
    pub origin: Origin,
}

/// Orientation of a border line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAxis {
    Vertical,
    Horizontal,
}

/// One stroke of a grid's border pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderLine {
    pub axis: LineAxis,
    /// Column (vertical) or row (horizontal) boundary index
    pub index: usize,
    pub start: Origin,
    pub end: Origin,
    pub thickness: f32,
}

// =============================================================================
// Pagination
// =============================================================================

/// Number of pages needed for `grid_count` grids
pub fn page_count(grid_count: usize) -> usize {
    grid_count.div_ceil(GRIDS_PER_PAGE)
}

/// Fixed origin of quadrant `quadrant` (0..4) on a page
pub fn quadrant_origin(quadrant: usize) -> Origin {
    let col = quadrant % 2;
    let row = (quadrant % GRIDS_PER_PAGE) / 2;
    Origin::new(
        BASE_ORIGIN_X + col as f32 * QUADRANT_STEP_X,
        BASE_ORIGIN_Y - row as f32 * QUADRANT_STEP_Y,
    )
}

/// Running pagination state carried from one grid to the next
#[derive(Debug, Clone, Copy)]
struct Cursor {
    page_index: usize,
    x: f32,
    y: f32,
}

impl Cursor {
    /// Cursor position for the grid at `quadrant`, given the previous grid's cursor
    fn advance(prev: Option<Cursor>, quadrant: usize) -> Cursor {
        match prev {
            Some(c) if quadrant != 0 => {
                if quadrant % 2 == 0 {
                    Cursor {
                        x: BASE_ORIGIN_X,
                        y: c.y - QUADRANT_STEP_Y,
                        ..c
                    }
                } else {
                    Cursor {
                        x: c.x + QUADRANT_STEP_X,
                        ..c
                    }
                }
            }
            prev => Cursor {
                page_index: prev.map_or(0, |c| c.page_index + 1),
                x: BASE_ORIGIN_X,
                y: BASE_ORIGIN_Y,
            },
        }
    }
}

/// Assign every grid a page and an origin, in collection order.
///
/// A new page starts every `GRIDS_PER_PAGE` grids; within a page x
/// alternates between the two columns and y drops one quadrant row every
/// two grids.
pub fn plan_pages(grid_count: usize) -> Vec<Placement> {
    let (placements, _) = (0..grid_count).fold(
        (Vec::with_capacity(grid_count), None::<Cursor>),
        |(mut placements, prev), grid_index| {
            let quadrant = grid_index % GRIDS_PER_PAGE;
            let cursor = Cursor::advance(prev, quadrant);
            placements.push(Placement {
                grid_index,
                page_index: cursor.page_index,
                quadrant,
                origin: Origin::new(cursor.x, cursor.y),
            });
            (placements, Some(cursor))
        },
    );
    placements
}

// =============================================================================
// Cells
// =============================================================================

/// Rectangle of the cell at `(row, col)`; rows run downward from the origin
pub fn cell_rect(origin: Origin, row: usize, col: usize) -> Rect {
    Rect {
        x: origin.x + col as f32 * CELL_WIDTH_PT,
        y: origin.y - row as f32 * CELL_HEIGHT_PT,
        width: CELL_WIDTH_PT,
        height: CELL_HEIGHT_PT,
    }
}

/// Scale an image proportionally so it fits inside the padded cell.
///
/// Small images are scaled up, large images down.
pub fn fit_image(width: f32, height: f32) -> (f32, f32) {
    let max_width = CELL_WIDTH_PT - IMAGE_PADDING_PT;
    let max_height = CELL_HEIGHT_PT - IMAGE_PADDING_PT;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let scale = (max_width / width).min(max_height / height);
    // Rounding in `width * scale` can land one ulp past the bound
    (
        (width * scale).min(max_width),
        (height * scale).min(max_height),
    )
}

/// Where a pictogram of the given natural size is drawn within `cell`
pub fn image_rect(cell: Rect, width: f32, height: f32) -> Rect {
    let (width, height) = fit_image(width, height);
    Rect {
        x: cell.x + (cell.width - width) / 2.0,
        y: cell.y + (cell.height - height) / 2.0 + IMAGE_LIFT_PT,
        width,
        height,
    }
}

/// Text cursor for a cell's code label
pub fn label_position(cell: Rect) -> Origin {
    Origin::new(
        cell.x + cell.width / 2.0 + LABEL_OFFSET_X,
        cell.y + LABEL_OFFSET_Y,
    )
}

// =============================================================================
// Borders
// =============================================================================

/// Top edge of the table; the origin marks the bottom of the first row
pub fn adjusted_top(origin: Origin) -> f32 {
    origin.y + CELL_HEIGHT_PT
}

/// The vertical and then horizontal lines bounding every cell of a grid
pub fn border_lines(origin: Origin) -> Vec<BorderLine> {
    let top = adjusted_top(origin);
    let bottom = top - GRID_ROWS as f32 * CELL_HEIGHT_PT;
    let right = origin.x + GRID_COLUMNS as f32 * CELL_WIDTH_PT;

    let vertical = (0..=GRID_COLUMNS).map(|col| {
        let x = origin.x + col as f32 * CELL_WIDTH_PT;
        BorderLine {
            axis: LineAxis::Vertical,
            index: col,
            start: Origin::new(x, top),
            end: Origin::new(x, bottom),
            thickness: line_thickness(col, GRID_COLUMNS),
        }
    });

    let horizontal = (0..=GRID_ROWS).map(|row| {
        let y = top - row as f32 * CELL_HEIGHT_PT;
        BorderLine {
            axis: LineAxis::Horizontal,
            index: row,
            start: Origin::new(origin.x, y),
            end: Origin::new(right, y),
            thickness: line_thickness(row, GRID_ROWS),
        }
    });

    vertical.chain(horizontal).collect()
}

fn line_thickness(index: usize, last: usize) -> f32 {
    if index == 0 || index == last {
        OUTER_LINE_THICKNESS
    } else {
        INNER_LINE_THICKNESS
    }
}
