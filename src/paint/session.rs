//! Per-session editing context
//!
//! Everything the host would otherwise keep in ambient globals (current
//! tool, group number, cell size) lives here and is passed explicitly.

use crate::canvas::Grid;
use crate::io::configuration::{MAX_GROUP_NUMBER, SessionConfig};
use crate::io::error::Result;
use crate::paint::engine;
use crate::paint::materialize::{MaterializeReport, PlacementService, materialize};
use crate::paint::tool::Tool;
use crate::palette::{Color, Palette};

/// Grid, palette and tool state for one editing session
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Painted cells
    pub grid: Grid,
    /// Paintable definitions and the current selection
    pub palette: Palette,
    tool: Tool,
    group_number: u32,
    config: SessionConfig,
}

impl EditSession {
    /// Open a session on an empty `width × height` grid
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::InvalidDimension`] if either dimension
    /// is zero or too large
    pub fn new(
        palette: Palette,
        width: usize,
        height: usize,
        config: SessionConfig,
    ) -> Result<Self> {
        let grid = Grid::new(width, height, config.background)?;
        Ok(Self {
            grid,
            palette,
            tool: Tool::Paint,
            group_number: 0,
            config,
        })
    }

    /// Tool applied by [`EditSession::click`]
    pub const fn tool(&self) -> Tool {
        self.tool
    }

    /// Choose the tool applied by [`EditSession::click`]
    pub const fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Group tag applied by [`EditSession::group_click`]
    pub const fn group_number(&self) -> u32 {
        self.group_number
    }

    /// Choose the group tag, clamped to the range the host offers
    pub fn set_group_number(&mut self, number: u32) {
        self.group_number = number.min(MAX_GROUP_NUMBER);
    }

    /// Settings this session was opened with
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Grid cell under a pointer position given in pixels
    pub fn pointer_to_cell(&self, pointer_x: f32, pointer_y: f32) -> (i64, i64) {
        let size = self.config.cell_pixel_size;
        (
            (pointer_x / size).floor() as i64,
            (pointer_y / size).floor() as i64,
        )
    }

    /// Apply the current tool at a pointer position
    ///
    /// Paint and bucket use the palette selection; erase and group tools do
    /// not need one. Returns the number of cells mutated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::NoSelection`] when the tool paints and
    /// the palette is empty
    pub fn click(&mut self, pointer_x: f32, pointer_y: f32) -> Result<usize> {
        let (x, y) = self.pointer_to_cell(pointer_x, pointer_y);
        self.apply_at(x, y, self.tool)
    }

    /// Assign the current group number at a pointer position
    pub fn group_click(&mut self, pointer_x: f32, pointer_y: f32) -> usize {
        let (x, y) = self.pointer_to_cell(pointer_x, pointer_y);
        engine::apply(
            &mut self.grid,
            x,
            y,
            Tool::SetGroup(self.group_number),
            Color::default(),
            None,
        )
    }

    /// Apply `tool` at grid coordinates with the palette selection
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::NoSelection`] when the tool paints and
    /// the palette is empty
    pub fn apply_at(&mut self, x: i64, y: i64, tool: Tool) -> Result<usize> {
        if !tool.uses_selection() {
            let background = self.grid.background();
            return Ok(engine::apply(&mut self.grid, x, y, tool, background, None));
        }

        let color = self.palette.selected_color()?;
        let occupant = self.palette.selected_id();
        Ok(engine::apply(&mut self.grid, x, y, tool, color, occupant))
    }

    /// Change the grid shape, keeping overlapping paint
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::InvalidDimension`] if either dimension
    /// is zero or too large
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        self.grid.resize(width, height)
    }

    /// Send every occupied cell to `service`
    pub fn materialize<S>(&self, service: &mut S) -> MaterializeReport<S::Handle>
    where
        S: PlacementService + ?Sized,
    {
        materialize(&self.grid, &self.palette, service)
    }
}
