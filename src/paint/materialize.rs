//! Conversion of occupied cells into placement requests
//!
//! The grid lies on the ground plane: column `x` maps to world x, row `y`
//! to world z, and every instance is lifted by its own height.

use crate::canvas::Grid;
use crate::io::error::{EditorError, PlacementError};
use crate::palette::{Definition, Palette, Rotation};

/// Scene-instantiation service that receives placement requests
pub trait PlacementService {
    /// Identifies an instance the service created
    type Handle;

    /// Instantiate `definition` at `position` with `rotation`
    ///
    /// # Errors
    ///
    /// Returns a [`PlacementError`] when the service cannot create the
    /// instance; materialization records it and carries on
    fn place(
        &mut self,
        definition: &Definition,
        position: [f32; 3],
        rotation: Rotation,
    ) -> Result<Self::Handle, PlacementError>;
}

/// Instance created for one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedInstance<H> {
    /// Column of the source cell
    pub x: usize,
    /// Row of the source cell
    pub y: usize,
    /// Handle returned by the placement service
    pub handle: H,
}

/// Outcome of a materialization pass
#[derive(Debug)]
pub struct MaterializeReport<H> {
    /// Instances created, in row-major cell order
    pub placed: Vec<PlacedInstance<H>>,
    /// Per-cell failures, in row-major cell order
    pub failures: Vec<EditorError>,
}

impl<H> MaterializeReport<H> {
    /// Number of placement requests issued or attempted
    pub fn attempted(&self) -> usize {
        self.placed.len() + self.failures.len()
    }

    /// Whether every occupied cell was placed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// World position of an instance of `definition` for cell `(x, y)`
pub fn placement_position(definition: &Definition, x: usize, y: usize) -> [f32; 3] {
    let [size_x, size_y, size_z] = definition.size;
    [size_x * x as f32, size_y, size_z * y as f32]
}

/// Issue one placement request per occupied cell, row by row
///
/// A failing cell does not stop the pass; its error is logged and kept in
/// the report. Occupants the palette cannot resolve count as failures.
pub fn materialize<S>(
    grid: &Grid,
    palette: &Palette,
    service: &mut S,
) -> MaterializeReport<S::Handle>
where
    S: PlacementService + ?Sized,
{
    let mut report = MaterializeReport {
        placed: Vec::new(),
        failures: Vec::new(),
    };

    for cell in grid.cells() {
        let Some(id) = cell.occupant() else {
            continue;
        };
        let [x, y] = cell.position();

        let outcome = palette
            .definition(id)
            .ok_or_else(|| PlacementError::new(format!("definition {id} is not in the palette")))
            .and_then(|definition| {
                service.place(
                    definition,
                    placement_position(definition, x, y),
                    definition.rotation,
                )
            });

        match outcome {
            Ok(handle) => report.placed.push(PlacedInstance { x, y, handle }),
            Err(source) => {
                tracing::warn!(x, y, error = %source, "placement failed, continuing");
                report.failures.push(EditorError::Placement { x, y, source });
            }
        }
    }

    tracing::info!(
        placed = report.placed.len(),
        failed = report.failures.len(),
        "materialization finished"
    );
    report
}

/// A placement request as received by [`PlacementLog`]
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRequest {
    /// Asset key of the placed definition
    pub key: String,
    /// World position
    pub position: [f32; 3],
    /// Orientation
    pub rotation: Rotation,
}

/// Placement service that records requests instead of instantiating
///
/// Handles are the request's index in [`PlacementLog::requests`].
#[derive(Debug, Default, Clone)]
pub struct PlacementLog {
    /// Every accepted request, in arrival order
    pub requests: Vec<PlacementRequest>,
}

impl PlacementService for PlacementLog {
    type Handle = usize;

    fn place(
        &mut self,
        definition: &Definition,
        position: [f32; 3],
        rotation: Rotation,
    ) -> Result<Self::Handle, PlacementError> {
        tracing::info!(
            key = %definition.key,
            x = position[0],
            y = position[1],
            z = position[2],
            "placed instance"
        );
        self.requests.push(PlacementRequest {
            key: definition.key.clone(),
            position,
            rotation,
        });
        Ok(self.requests.len() - 1)
    }
}
