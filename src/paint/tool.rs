//! Tools a pointer event can be applied with

use std::fmt;
use std::str::FromStr;

/// Mutation applied to the cell under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    /// Set the cell's color and occupant
    #[default]
    Paint,
    /// Return the cell to the background color with no occupant
    Erase,
    /// Assign a group tag
    SetGroup(u32),
    /// Paint the contiguous same-occupant region around the cell
    Bucket,
}

impl Tool {
    /// Whether the tool paints with the palette selection
    pub const fn uses_selection(self) -> bool {
        matches!(self, Self::Paint | Self::Bucket)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paint => write!(f, "paint"),
            Self::Erase => write!(f, "erase"),
            Self::SetGroup(tag) => write!(f, "group {tag}"),
            Self::Bucket => write!(f, "bucket"),
        }
    }
}

impl FromStr for Tool {
    type Err = String;

    /// Parses the toolbar names `paint`, `erase`/`eraser` and `bucket`, plus `group N`
    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        let name = name.trim().to_ascii_lowercase();
        if let Some(tag) = name.strip_prefix("group") {
            return tag
                .trim()
                .parse()
                .map(Self::SetGroup)
                .map_err(|_| format!("invalid group tag in '{name}'"));
        }
        match name.as_str() {
            "paint" => Ok(Self::Paint),
            "erase" | "eraser" => Ok(Self::Erase),
            "bucket" => Ok(Self::Bucket),
            other => Err(format!("unknown tool '{other}'")),
        }
    }
}
