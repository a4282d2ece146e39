//! Paintable definitions and their display colors
//!
//! This module contains palette-related functionality including:
//! - RGBA colors with HSV and spectrum slot generation
//! - Placeable object definitions and the ids cells hold
//! - The palette itself with its current selection

/// Display colors and color generation
pub mod color;
/// Placeable object definitions
pub mod definition;
/// Palette entries, colors and selection
pub mod registry;

pub use color::Color;
pub use definition::{Definition, DefinitionId, Rotation};
pub use registry::Palette;
