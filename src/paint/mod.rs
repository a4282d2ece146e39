//! Grid mutation engines
//!
//! This module contains painting-related functionality including:
//! - Tool selection and single-cell painting
//! - Bucket fill over contiguous regions
//! - Materialization of occupied cells into placement requests
//! - The editing session tying grid, palette and tool together

/// Single-cell mutation dispatch
pub mod engine;
/// Bucket fill over 4-connected regions
pub mod flood;
/// Placement request generation
pub mod materialize;
/// Per-session editing context
pub mod session;
/// Pointer tools
pub mod tool;
/// Visited-cell bitset for region exploration
pub mod visited;

pub use materialize::{MaterializeReport, PlacementLog, PlacementService};
pub use session::EditSession;
pub use tool::Tool;
