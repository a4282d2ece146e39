//! Placeable object definitions and the ids cells use to refer to them

use std::fmt;

/// Non-owning reference from a cell to a palette entry
///
/// Wraps the entry's ordinal in the palette. Two cells share an occupant
/// exactly when their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefinitionId(pub(crate) usize);

impl DefinitionId {
    /// Palette ordinal this id points at
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unit quaternion orientation in `[x, y, z, w]` order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation(pub [f32; 4]);

impl Rotation {
    /// No rotation
    pub const IDENTITY: Self = Self([0.0, 0.0, 0.0, 1.0]);
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A placeable object the designer can paint with
///
/// Identity is the asset key: two definitions with the same key are the
/// same definition, whatever their other fields say.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    /// Asset key the host discovered the object under
    pub key: String,
    /// Intrinsic extent along x, y and z
    pub size: [f32; 3],
    /// Orientation applied when the object is placed
    pub rotation: Rotation,
}

impl Definition {
    /// Unit-sized definition with the default orientation
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            size: [1.0, 1.0, 1.0],
            rotation: Rotation::IDENTITY,
        }
    }

    /// Replace the intrinsic size
    #[must_use]
    pub fn with_size(mut self, size: [f32; 3]) -> Self {
        self.size = size;
        self
    }

    /// Replace the placement orientation
    #[must_use]
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Whether both definitions refer to the same asset
    pub fn same_identity(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
