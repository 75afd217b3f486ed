use crate::constants::{GRID_COLUMNS, GRID_ROWS};
use crate::layout::page_count;
use crate::types::{Cell, Grid};

/// Summary of a grid collection before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridStatistics {
    /// Number of grids in the collection
    pub grids: usize,
    /// Output pages (four grids per page)
    pub pages: usize,
    /// Cells with code 0 (background fill)
    pub empty_cells: usize,
    /// Cells with a pictogram code (image lookup + label)
    pub labelled_cells: usize,
    /// Positions of the 3x5 window with no value
    pub absent_cells: usize,
}

/// Calculate statistics for a grid collection
pub fn calculate_statistics(grids: &[Grid]) -> GridStatistics {
    let mut stats = GridStatistics {
        grids: grids.len(),
        pages: page_count(grids.len()),
        ..Default::default()
    };

    for grid in grids {
        let mut present = 0;
        for (_, _, cell) in grid.cells() {
            present += 1;
            match cell {
                Cell::Empty => stats.empty_cells += 1,
                Cell::Asset(_) => stats.labelled_cells += 1,
            }
        }
        stats.absent_cells += GRID_ROWS * GRID_COLUMNS - present;
    }

    stats
}
