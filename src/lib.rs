//! Grid painting engine for tile-map authoring
//!
//! A designer paints references to placeable objects onto a rectangular
//! grid with paint, erase, group and bucket tools, then materializes the
//! painted cells into placement requests for a scene service.

#![forbid(unsafe_code)]

/// Grid and cell data model
pub mod canvas;
/// Host input/output, configuration and error handling
pub mod io;
/// Painting, bucket fill, materialization and the editing session
pub mod paint;
/// Paintable definitions, colors and selection
pub mod palette;

pub use io::error::{EditorError, PlacementError, Result};
