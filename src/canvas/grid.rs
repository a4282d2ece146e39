//! Cell storage with bounds checking and resize-with-preservation
//!
//! Cells live in a row-major 2D array indexed `[row, col]`, which is
//! `[y, x]` in canvas terms. Every slot always holds an initialized cell.

use ndarray::Array2;

use crate::canvas::cell::Cell;
use crate::canvas::resize::{ResizePlan, resize_array_2d};
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{EditorError, Result, invalid_dimension};
use crate::palette::Color;

/// Rectangular array of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    background: Color,
}

impl Grid {
    /// Create a grid of empty cells showing `background`
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidDimension`] if either dimension is zero
    /// or exceeds [`MAX_GRID_DIMENSION`]
    pub fn new(width: usize, height: usize, background: Color) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        let cells = Array2::from_shape_fn((height, width), |(row, col)| {
            Cell::new([col, row], background)
        });

        Ok(Self { cells, background })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Color of empty and erased cells
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Whether `(x, y)` addresses a cell
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.index_of(x, y).is_some()
    }

    /// Array index `[row, col]` for canvas coordinates, if in bounds
    pub fn index_of(&self, x: i64, y: i64) -> Option<[usize; 2]> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.width() && row < self.height()).then_some([row, col])
    }

    /// Cell at `(x, y)`, if in bounds
    pub fn get(&self, x: i64, y: i64) -> Option<&Cell> {
        self.index_of(x, y).and_then(|index| self.cells.get(index))
    }

    /// Mutable cell at `(x, y)`, if in bounds
    pub fn get_mut(&mut self, x: i64, y: i64) -> Option<&mut Cell> {
        let index = self.index_of(x, y)?;
        self.cells.get_mut(index)
    }

    /// Cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfBounds`] if the coordinates are outside
    /// the grid
    pub fn cell_at(&self, x: i64, y: i64) -> Result<&Cell> {
        let (width, height) = (self.width(), self.height());
        self.get(x, y).ok_or(EditorError::OutOfBounds {
            x,
            y,
            width,
            height,
        })
    }

    /// Mutable cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfBounds`] if the coordinates are outside
    /// the grid
    pub fn cell_at_mut(&mut self, x: i64, y: i64) -> Result<&mut Cell> {
        let (width, height) = (self.width(), self.height());
        self.get_mut(x, y).ok_or(EditorError::OutOfBounds {
            x,
            y,
            width,
            height,
        })
    }

    /// Cells in row-major order: `(0, 0)`, `(1, 0)`, ..., `(0, 1)`, ...
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Change the grid shape, keeping paint where old and new shapes overlap
    ///
    /// Newly exposed cells are empty. Resizing to the current shape changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidDimension`] if either dimension is zero
    /// or exceeds [`MAX_GRID_DIMENSION`]; the grid is left untouched
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        let plan = ResizePlan::new(self.cells.dim(), (height, width));
        if !plan.changes_shape() {
            return Ok(());
        }

        let background = self.background;
        self.cells = resize_array_2d(&self.cells, &plan, |row, col| {
            Cell::new([col, row], background)
        });

        tracing::debug!(
            from_width = plan.old_shape.1,
            from_height = plan.old_shape.0,
            width,
            height,
            "grid resized"
        );
        Ok(())
    }

    /// Return every cell to the empty state, group tags included
    pub fn clear(&mut self) {
        let background = self.background;
        for cell in &mut self.cells {
            *cell = Cell::new(cell.position(), background);
        }
    }

    /// Turn a free-form size entry into a usable dimension
    ///
    /// Takes the absolute value, rounds to the nearest whole cell and
    /// raises anything below one to one.
    pub fn sanitize_dimension(raw: f64) -> usize {
        let rounded = raw.abs().round();
        if rounded.is_nan() || rounded < 1.0 {
            1
        } else if rounded >= MAX_GRID_DIMENSION as f64 {
            MAX_GRID_DIMENSION
        } else {
            rounded as usize
        }
    }
}

fn validate_dimension(axis: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_dimension(axis, value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_dimension(
            axis,
            value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
