use picto_grid::*;

#[test]
fn test_statistics_empty() {
    let stats = calculate_statistics(&[]);
    assert_eq!(stats, GridStatistics::default());
}

#[test]
fn test_statistics_full_grid() {
    let grid = Grid::from_codes(vec![
        vec![0, 1, 2, 3, 4],
        vec![5, 6, 7, 8, 9],
        vec![10, 11, 12, 13, 14],
    ]);
    let stats = calculate_statistics(&[grid]);

    assert_eq!(stats.grids, 1);
    assert_eq!(stats.pages, 1);
    assert_eq!(stats.empty_cells, 1);
    assert_eq!(stats.labelled_cells, 14);
    assert_eq!(stats.absent_cells, 0);
}

#[test]
fn test_statistics_ragged_grids() {
    let grids = vec![
        Grid::new(vec![vec![Some(0), None, Some(5)]]),
        Grid::default(),
        Grid::from_codes(vec![vec![1, 2, 3, 4, 5, 6, 7]]),
        Grid::from_codes(vec![vec![0]]),
        Grid::from_codes(vec![vec![9]]),
    ];
    let stats = calculate_statistics(&grids);

    assert_eq!(stats.grids, 5);
    assert_eq!(stats.pages, 2);
    assert_eq!(stats.empty_cells, 2);
    // 1 + 5 (window only) + 1
    assert_eq!(stats.labelled_cells, 7);
    assert_eq!(stats.absent_cells, 13 + 15 + 10 + 14 + 14);
}
