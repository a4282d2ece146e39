//! Host-side input and output
//!
//! This module contains the pieces a host needs around the core:
//! - Errors and constants shared by the whole crate
//! - Stroke script parsing and replay
//! - PNG previews and progress display
//! - The command-line host

/// Command-line host
pub mod cli;
/// Editor constants and session settings
pub mod configuration;
/// Error types
pub mod error;
/// PNG grid previews
pub mod image;
/// Replay progress display
pub mod progress;
/// Stroke script parsing and replay
pub mod script;
