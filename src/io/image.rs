//! PNG preview of a grid with one colored block per cell

use crate::canvas::Grid;
use crate::io::configuration::{GRID_LINE_COLOR, MAX_PREVIEW_PIXELS};
use crate::io::error::{EditorError, Result};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Render the grid as an image
///
/// Each cell becomes a `cell_size`² block of its color, framed by
/// one-pixel grid lines, so the image is `width · cell_size + 1` pixels
/// wide. A `cell_size` of zero is treated as one.
///
/// # Errors
///
/// Returns [`EditorError::PreviewTooLarge`] if the image would not fit in
/// `u32` pixel coordinates or would exceed [`MAX_PREVIEW_PIXELS`]
pub fn render_grid(grid: &Grid, cell_size: u32) -> Result<RgbaImage> {
    let cell_size = cell_size.max(1);
    let (width_px, height_px) = preview_dimensions(grid, cell_size)?;
    let line = Rgba(GRID_LINE_COLOR.channels());

    Ok(RgbaImage::from_fn(width_px, height_px, |px, py| {
        if px % cell_size == 0 || py % cell_size == 0 {
            return line;
        }
        let x = i64::from(px / cell_size);
        let y = i64::from(py / cell_size);
        grid.get(x, y)
            .map_or(line, |cell| Rgba(cell.color().channels()))
    }))
}

/// Pixel size of the preview, checked against overflow and the pixel limit
fn preview_dimensions(grid: &Grid, cell_size: u32) -> Result<(u32, u32)> {
    let axis = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(cell_size))
            .and_then(|px| px.checked_add(1))
    };
    let too_large = || EditorError::PreviewTooLarge {
        width: grid.width(),
        height: grid.height(),
        cell_size,
        limit: MAX_PREVIEW_PIXELS,
    };

    let (Some(width_px), Some(height_px)) = (axis(grid.width()), axis(grid.height())) else {
        return Err(too_large());
    };
    if u64::from(width_px) * u64::from(height_px) > MAX_PREVIEW_PIXELS {
        return Err(too_large());
    }
    Ok((width_px, height_px))
}

/// Export the grid preview as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The preview would be too large to render
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, cell_size: u32, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, cell_size)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| EditorError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| EditorError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %output_path.display(), "preview written");
    Ok(())
}
