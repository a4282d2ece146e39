//! Translation of a grid coordinate and tool into a cell mutation

use crate::canvas::{Cell, Grid};
use crate::paint::flood;
use crate::paint::tool::Tool;
use crate::palette::{Color, DefinitionId};

/// Apply `tool` at `(x, y)`
///
/// Coordinates outside the grid are the normal outcome of clicks beside
/// the canvas and are ignored. Erase uses the grid background and ignores
/// `color` and `occupant`; bucket hands over to [`flood::fill`]. Returns
/// the number of cells mutated.
pub fn apply(
    grid: &mut Grid,
    x: i64,
    y: i64,
    tool: Tool,
    color: Color,
    occupant: Option<DefinitionId>,
) -> usize {
    match tool {
        Tool::Bucket => flood::fill(grid, x, y, color, occupant),
        Tool::Paint => mutate_cell(grid, x, y, |cell| cell.apply_paint(color, occupant)),
        Tool::Erase => {
            let background = grid.background();
            mutate_cell(grid, x, y, |cell| cell.apply_erase(background))
        }
        Tool::SetGroup(tag) => mutate_cell(grid, x, y, |cell| cell.set_group_tag(tag)),
    }
}

fn mutate_cell(grid: &mut Grid, x: i64, y: i64, mutation: impl FnOnce(&mut Cell)) -> usize {
    grid.get_mut(x, y).map_or(0, |cell| {
        mutation(cell);
        1
    })
}
