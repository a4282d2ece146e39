//! The atomic grid unit and its paint, erase and group mutations

use crate::palette::{Color, DefinitionId};

/// Region key used by bucket fill
///
/// Two cells belong to the same fill region exactly when their
/// classifications are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// No occupant
    Empty,
    /// Occupied by the referenced definition
    Occupied(DefinitionId),
}

/// One addressable grid unit
///
/// Color and occupant are independent: a cell may carry a color with no
/// occupant and the other way round. The position is fixed when the cell
/// is created and always matches its grid indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    occupant: Option<DefinitionId>,
    color: Color,
    group_tag: u32,
    position: [usize; 2],
}

impl Cell {
    /// Empty cell at `[x, y]` showing the background color
    pub const fn new(position: [usize; 2], background: Color) -> Self {
        Self {
            occupant: None,
            color: background,
            group_tag: 0,
            position,
        }
    }

    /// Definition occupying this cell
    pub const fn occupant(&self) -> Option<DefinitionId> {
        self.occupant
    }

    /// Display color
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Group tag, `0` unless assigned
    pub const fn group_tag(&self) -> u32 {
        self.group_tag
    }

    /// Grid coordinates as `[x, y]`
    pub const fn position(&self) -> [usize; 2] {
        self.position
    }

    /// Whether the cell has an occupant
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Set color and occupant, leaving the group tag alone
    pub const fn apply_paint(&mut self, color: Color, occupant: Option<DefinitionId>) {
        self.color = color;
        self.occupant = occupant;
    }

    /// Reset color to `background` and clear the occupant
    ///
    /// The group tag survives erasing.
    pub const fn apply_erase(&mut self, background: Color) {
        self.color = background;
        self.occupant = None;
    }

    /// Assign the group tag
    pub const fn set_group_tag(&mut self, tag: u32) {
        self.group_tag = tag;
    }

    /// Fill-region key for this cell
    pub const fn classification(&self) -> Classification {
        match self.occupant {
            Some(id) => Classification::Occupied(id),
            None => Classification::Empty,
        }
    }
}
