//! Editor constants and runtime configuration defaults

use crate::palette::color::Color;

// Map defaults for a freshly opened canvas
/// Default number of columns
pub const DEFAULT_MAP_WIDTH: usize = 10;
/// Default number of rows
pub const DEFAULT_MAP_HEIGHT: usize = 10;

/// Edge length of one cell in pointer pixels
pub const DEFAULT_CELL_PIXEL_SIZE: f32 = 30.0;
/// Smallest cell edge accepted from the host
pub const MIN_CELL_PIXEL_SIZE: f32 = 10.0;
/// Largest cell edge accepted from the host
pub const MAX_CELL_PIXEL_SIZE: f32 = 100.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Maximum number of pixels in a rendered preview (256 MB of RGBA)
pub const MAX_PREVIEW_PIXELS: u64 = 64_000_000;

/// Color of empty and erased cells
pub const BACKGROUND_COLOR: Color = Color::WHITE;
/// Color of the lines separating cells in previews
pub const GRID_LINE_COLOR: Color = Color::GRAY;

/// Largest group number the host offers for group assignment
pub const MAX_GROUP_NUMBER: u32 = 100;

// Spectrum slot subdivisions (hue, saturation, value)
/// Hue divisions for spectrum palette colors
pub const SPECTRUM_HUE_DIVISIONS: usize = 3;
/// Saturation divisions for spectrum palette colors
pub const SPECTRUM_SATURATION_DIVISIONS: usize = 4;
/// Value divisions for spectrum palette colors
pub const SPECTRUM_VALUE_DIVISIONS: usize = 3;
/// Number of distinct spectrum colors
pub const SPECTRUM_SLOTS: usize = 144;

// Default values for configurable parameters
/// Fixed seed for reproducible palette colors
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to preview filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Per-session settings the host hands to the core
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Color used for default and erased cells
    pub background: Color,
    /// Edge length of one cell in pointer pixels
    pub cell_pixel_size: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            cell_pixel_size: DEFAULT_CELL_PIXEL_SIZE,
        }
    }
}

impl SessionConfig {
    /// Copy of this configuration with the cell size clamped to the host range
    #[must_use]
    pub fn with_cell_pixel_size(mut self, size: f32) -> Self {
        self.cell_pixel_size = size.clamp(MIN_CELL_PIXEL_SIZE, MAX_CELL_PIXEL_SIZE);
        self
    }
}
