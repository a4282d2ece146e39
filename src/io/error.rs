//! Error types for grid editing, palette access and export operations

use std::fmt;
use std::path::PathBuf;

/// Failure reported by an external placement service for a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementError {
    /// Description supplied by the placement service
    pub reason: String,
}

impl PlacementError {
    /// Create a placement error with the given reason
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "placement rejected: {}", self.reason)
    }
}

impl std::error::Error for PlacementError {}

/// Main error type for all editor operations
#[derive(Debug)]
pub enum EditorError {
    /// Grid dimension rejected by resize or construction
    ///
    /// The grid keeps its previous shape and contents.
    InvalidDimension {
        /// Which axis was rejected (`"width"` or `"height"`)
        axis: &'static str,
        /// Provided value
        value: usize,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Cell coordinates outside the grid
    ///
    /// Only surfaced by direct cell access. Painting and filling treat
    /// out-of-bounds coordinates as a no-op instead.
    OutOfBounds {
        /// Requested column
        x: i64,
        /// Requested row
        y: i64,
        /// Grid width at the time of the request
        width: usize,
        /// Grid height at the time of the request
        height: usize,
    },

    /// Palette queried for its selection while empty
    NoSelection,

    /// Palette ordinal outside the palette
    InvalidPaletteIndex {
        /// The invalid ordinal
        index: usize,
        /// Number of palette entries
        len: usize,
    },

    /// Placement service failed for one cell during materialization
    Placement {
        /// Column of the failing cell
        x: usize,
        /// Row of the failing cell
        y: usize,
        /// Error returned by the placement service
        source: PlacementError,
    },

    /// Stroke script could not be parsed
    Script {
        /// 1-based line number of the offending line
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Preview image would exceed [`MAX_PREVIEW_PIXELS`]
    ///
    /// Raised before any pixel buffer is allocated.
    ///
    /// [`MAX_PREVIEW_PIXELS`]: crate::io::configuration::MAX_PREVIEW_PIXELS
    PreviewTooLarge {
        /// Grid width in cells
        width: usize,
        /// Grid height in cells
        height: usize,
        /// Requested edge length of one cell in pixels
        cell_size: u32,
        /// Pixel limit that was exceeded
        limit: u64,
    },

    /// Failed to save the grid preview image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                axis,
                value,
                reason,
            } => {
                write!(f, "Invalid grid {axis} {value}: {reason}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Cell ({x}, {y}) is outside the grid (size {width}x{height})"
                )
            }
            Self::NoSelection => write!(f, "Palette is empty, nothing is selected"),
            Self::InvalidPaletteIndex { index, len } => {
                write!(f, "Palette index {index} is out of bounds (len: {len})")
            }
            Self::Placement { x, y, source } => {
                write!(f, "Failed to place cell ({x}, {y}): {source}")
            }
            Self::Script { line, reason } => {
                write!(f, "Stroke script error on line {line}: {reason}")
            }
            Self::PreviewTooLarge {
                width,
                height,
                cell_size,
                limit,
            } => {
                write!(
                    f,
                    "Preview of {width}x{height} cells at {cell_size}px exceeds {limit} pixels"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Placement { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for editor results
pub type Result<T> = std::result::Result<T, EditorError>;

impl From<image::ImageError> for EditorError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid dimension error
pub fn invalid_dimension(axis: &'static str, value: usize, reason: &impl ToString) -> EditorError {
    EditorError::InvalidDimension {
        axis,
        value,
        reason: reason.to_string(),
    }
}

/// Create a stroke script error for a 1-based line number
pub fn script_error(line: usize, reason: &impl ToString) -> EditorError {
    EditorError::Script {
        line,
        reason: reason.to_string(),
    }
}
