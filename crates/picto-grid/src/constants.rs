//! Shared constants for pictogram grid rendering
//!
//! All measurements are PDF points (1/72 inch), origin at the bottom-left
//! of the page.

// =============================================================================
// Page
// =============================================================================

/// Page width in points (landscape A3)
pub const PAGE_WIDTH_PT: f32 = 1190.55;

/// Page height in points (landscape A3)
pub const PAGE_HEIGHT_PT: f32 = 841.89;

/// Grids placed on one page (2x2)
pub const GRIDS_PER_PAGE: usize = 4;

// =============================================================================
// Quadrants
// =============================================================================

/// Origin of the top-left quadrant
pub const BASE_ORIGIN_X: f32 = 50.0;
pub const BASE_ORIGIN_Y: f32 = 700.0;

/// Horizontal distance between left and right quadrants
pub const QUADRANT_STEP_X: f32 = 600.0;

/// Vertical distance between top and bottom quadrants
pub const QUADRANT_STEP_Y: f32 = 400.0;

// =============================================================================
// Grid Geometry
// =============================================================================

pub const GRID_ROWS: usize = 3;
pub const GRID_COLUMNS: usize = 5;

/// Total table width, split evenly across columns
pub const GRID_WIDTH_PT: f32 = 529.0;

/// Total table height, split evenly across rows
pub const GRID_HEIGHT_PT: f32 = 362.0;

pub const CELL_WIDTH_PT: f32 = GRID_WIDTH_PT / GRID_COLUMNS as f32;
pub const CELL_HEIGHT_PT: f32 = GRID_HEIGHT_PT / GRID_ROWS as f32;

// =============================================================================
// Cell Content
// =============================================================================

/// Space kept free around a pictogram (total over both sides)
pub const IMAGE_PADDING_PT: f32 = 30.0;

/// Pictograms sit this far above the vertical center of their cell
pub const IMAGE_LIFT_PT: f32 = 5.0;

pub const LABEL_FONT_SIZE: f32 = 20.0;

/// Label position relative to the cell: left of center, near the bottom
pub const LABEL_OFFSET_X: f32 = -10.0;
pub const LABEL_OFFSET_Y: f32 = 10.0;

// =============================================================================
// Borders
// =============================================================================

/// Outer table edges
pub const OUTER_LINE_THICKNESS: f32 = 7.0;

/// Lines between cells
pub const INNER_LINE_THICKNESS: f32 = 5.0;
