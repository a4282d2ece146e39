//! Bucket fill over 4-connected regions of equally classified cells
//!
//! The region is fixed before anything is painted: the seed's
//! classification is captured once and a visited set, not the cells'
//! post-paint state, decides which neighbours are explored. Exploration
//! uses an explicit work list so region size is bounded by memory, not
//! by the call stack.

use crate::canvas::Grid;
use crate::paint::visited::VisitedSet;
use crate::palette::{Color, DefinitionId};

/// Offsets to the up, left, right and down neighbours as `(dx, dy)`
const NEIGHBOURS: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Paint the maximal 4-connected region sharing the seed's classification
///
/// Every cell of the region receives `color` and `occupant`. A seed outside
/// the grid paints nothing. Returns the number of painted cells.
pub fn fill(
    grid: &mut Grid,
    seed_x: i64,
    seed_y: i64,
    color: Color,
    occupant: Option<DefinitionId>,
) -> usize {
    let _span = tracing::debug_span!("bucket_fill", seed_x, seed_y).entered();

    let members = region(grid, seed_x, seed_y);
    for &(x, y) in &members {
        if let Some(cell) = grid.get_mut(x as i64, y as i64) {
            cell.apply_paint(color, occupant);
        }
    }

    tracing::debug!(painted = members.len(), "bucket fill finished");
    members.len()
}

/// Cells a fill from `(seed_x, seed_y)` would paint
///
/// Returned as `(x, y)` pairs in row-major order; empty when the seed is
/// outside the grid. Nothing is mutated.
pub fn region(grid: &Grid, seed_x: i64, seed_y: i64) -> Vec<(usize, usize)> {
    let Some(target) = grid.get(seed_x, seed_y).map(|cell| cell.classification()) else {
        return Vec::new();
    };

    let mut visited = VisitedSet::new(grid.height(), grid.width());
    let mut members = Vec::new();
    let mut pending = vec![(seed_x, seed_y)];
    if let Some(index) = grid.index_of(seed_x, seed_y) {
        visited.insert(index);
    }

    while let Some((x, y)) = pending.pop() {
        members.push((x as usize, y as usize));

        for (dx, dy) in NEIGHBOURS {
            let (nx, ny) = (x + dx, y + dy);
            let Some(index) = grid.index_of(nx, ny) else {
                continue;
            };
            let same_region = grid
                .get(nx, ny)
                .is_some_and(|cell| cell.classification() == target);
            if same_region && visited.insert(index) {
                pending.push((nx, ny));
            }
        }
    }

    members.sort_unstable_by_key(|&(x, y)| (y, x));
    members
}
