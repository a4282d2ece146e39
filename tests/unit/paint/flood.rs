//! Tests for bucket fill region selection and painting

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};
    use tilecanvas::canvas::Grid;
    use tilecanvas::paint::flood::{fill, region};
    use tilecanvas::palette::{Color, Definition, DefinitionId, Palette};

    fn ids() -> (DefinitionId, DefinitionId) {
        let mut palette = Palette::new(Vec::new(), 0);
        (
            palette.insert(Definition::new("stone")),
            palette.insert(Definition::new("water")),
        )
    }

    // Builds a grid from rows of '.', 's' and 'w'
    fn grid_from(rows: &[&str]) -> Grid {
        let (stone, water) = ids();
        let mut grid = Grid::new(rows[0].len(), rows.len(), Color::WHITE).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                let occupant = match symbol {
                    's' => Some(stone),
                    'w' => Some(water),
                    _ => None,
                };
                if occupant.is_some() {
                    grid.cell_at_mut(x as i64, y as i64)
                        .unwrap()
                        .apply_paint(Color::BLACK, occupant);
                }
            }
        }
        grid
    }

    // Reference region by breadth-first search over a fresh copy
    fn expected_region(grid: &Grid, x: i64, y: i64) -> HashSet<(usize, usize)> {
        let target = grid.cell_at(x, y).unwrap().classification();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([(x, y)]);
        while let Some((cx, cy)) = queue.pop_front() {
            let matches = grid
                .get(cx, cy)
                .is_some_and(|cell| cell.classification() == target);
            if !matches || !seen.insert((cx as usize, cy as usize)) {
                continue;
            }
            queue.extend([(cx + 1, cy), (cx - 1, cy), (cx, cy + 1), (cx, cy - 1)]);
        }
        seen
    }

    // Tests an all-empty grid fills completely
    // Verified by stopping exploration at the first row
    #[test]
    fn test_empty_grid_fills_everything() {
        let (stone, _) = ids();
        let mut grid = Grid::new(7, 5, Color::WHITE).unwrap();

        let painted = fill(&mut grid, 3, 2, Color::BLACK, Some(stone));

        assert_eq!(painted, 35);
        assert!(grid
            .cells()
            .all(|cell| cell.occupant() == Some(stone) && cell.color() == Color::BLACK));
    }

    // Tests the region is exactly the 4-connected component for every seed
    // Verified by adding diagonal neighbours
    #[test]
    fn test_region_matches_reference_for_all_seeds() {
        let grid = grid_from(&["..s..w", ".ss.ww", "s..s.w", "..s...", "ww.s.s"]);

        for y in 0..grid.height() as i64 {
            for x in 0..grid.width() as i64 {
                let actual: HashSet<(usize, usize)> = region(&grid, x, y).into_iter().collect();
                assert_eq!(actual, expected_region(&grid, x, y), "seed ({x}, {y})");
            }
        }
    }

    // Tests diagonal contact does not join regions
    // Verified by using 8-connectivity
    #[test]
    fn test_diagonals_do_not_connect() {
        let (stone, water) = ids();
        let mut grid = grid_from(&["s.", ".s"]);

        let painted = fill(&mut grid, 0, 0, Color::WHITE, Some(water));

        assert_eq!(painted, 1);
        assert_eq!(grid.cell_at(0, 0).unwrap().occupant(), Some(water));
        assert_eq!(grid.cell_at(1, 1).unwrap().occupant(), Some(stone));
    }

    // Tests filling a region with its own occupant repaints but keeps the shape
    // Verified by reading neighbour state after painting
    #[test]
    fn test_fill_with_same_occupant_terminates() {
        let (stone, _) = ids();
        let mut grid = grid_from(&["ss.", "s..", "..."]);

        let painted = fill(&mut grid, 0, 0, Color::rgb(9, 9, 9), Some(stone));

        assert_eq!(painted, 3);
        assert_eq!(grid.cells().filter(|cell| cell.is_occupied()).count(), 3);
        assert_eq!(grid.cell_at(1, 0).unwrap().color(), Color::rgb(9, 9, 9));
    }

    // Tests a second fill from the same seed selects the same cells
    // Verified by recomputing the region from the new classification
    #[test]
    fn test_fill_is_idempotent() {
        let (_, water) = ids();
        let mut grid = grid_from(&["..s", "ss.", "..."]);

        fill(&mut grid, 0, 0, Color::BLACK, Some(water));
        let once = grid.clone();
        let painted = fill(&mut grid, 0, 0, Color::BLACK, Some(water));

        assert_eq!(painted, 2);
        assert_eq!(grid, once);
    }

    // Tests filling an occupied region with empty paint clears it
    // Verified by skipping cells that end up empty
    #[test]
    fn test_fill_occupied_region_with_none() {
        let mut grid = grid_from(&["sss", "s.w"]);

        let painted = fill(&mut grid, 2, 0, Color::WHITE, None);

        assert_eq!(painted, 4);
        assert_eq!(grid.cells().filter(|cell| cell.is_occupied()).count(), 1);
        assert!(grid.cell_at(2, 1).unwrap().is_occupied());
    }

    // Tests region members come back in row-major order
    // Verified by returning the work-list order
    #[test]
    fn test_region_is_row_major() {
        let grid = grid_from(&[".s", ".."]);

        assert_eq!(region(&grid, 1, 1), vec![(0, 0), (0, 1), (1, 1)]);
    }

    // Tests a seed outside the grid paints nothing
    // Verified by clamping the seed
    #[test]
    fn test_out_of_bounds_seed() {
        let (stone, _) = ids();
        let mut grid = Grid::new(2, 2, Color::WHITE).unwrap();

        assert_eq!(fill(&mut grid, -1, 0, Color::BLACK, Some(stone)), 0);
        assert_eq!(fill(&mut grid, 0, 2, Color::BLACK, Some(stone)), 0);
        assert!(region(&grid, 5, 5).is_empty());
        assert!(grid.cells().all(|cell| !cell.is_occupied()));
    }

    // Tests fill leaves group tags alone
    // Verified by resetting cells during fill
    #[test]
    fn test_fill_keeps_group_tags() {
        let (stone, _) = ids();
        let mut grid = Grid::new(2, 1, Color::WHITE).unwrap();
        grid.cell_at_mut(1, 0).unwrap().set_group_tag(8);

        fill(&mut grid, 0, 0, Color::BLACK, Some(stone));

        assert_eq!(grid.cell_at(1, 0).unwrap().group_tag(), 8);
    }

    // Tests a million-cell region fills without exhausting the stack
    // Verified by exploring recursively
    #[test]
    fn test_large_region_fills() {
        let (stone, _) = ids();
        let mut grid = Grid::new(1000, 1000, Color::WHITE).unwrap();

        let painted = fill(&mut grid, 500, 500, Color::BLACK, Some(stone));

        assert_eq!(painted, 1_000_000);
        assert!(grid.cells().all(|cell| cell.occupant() == Some(stone)));
    }
}
