//! Grid data model
//!
//! This module contains canvas-related functionality including:
//! - Cells and their fill classification
//! - Grid storage, bounds checks and resizing
//! - Overlap-preserving array reshaping

/// Cell state and mutations
pub mod cell;
/// Grid storage and resizing
pub mod grid;
/// Overlap-preserving array reshaping
pub mod resize;

pub use cell::{Cell, Classification};
pub use grid::Grid;
