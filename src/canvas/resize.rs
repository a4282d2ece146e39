//! Reshaping 2D arrays while keeping the overlapping region

use ndarray::Array2;

/// Overlap between an old and a new `(rows, cols)` shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    /// Shape before resizing
    pub old_shape: (usize, usize),
    /// Shape after resizing
    pub new_shape: (usize, usize),
}

impl ResizePlan {
    /// Plan a reshape from `old_shape` to `new_shape`
    pub const fn new(old_shape: (usize, usize), new_shape: (usize, usize)) -> Self {
        Self {
            old_shape,
            new_shape,
        }
    }

    /// Whether the shapes differ
    pub const fn changes_shape(&self) -> bool {
        self.old_shape.0 != self.new_shape.0 || self.old_shape.1 != self.new_shape.1
    }

    /// Rows and columns present in both shapes
    pub const fn overlap(&self) -> (usize, usize) {
        let rows = if self.old_shape.0 < self.new_shape.0 {
            self.old_shape.0
        } else {
            self.new_shape.0
        };
        let cols = if self.old_shape.1 < self.new_shape.1 {
            self.old_shape.1
        } else {
            self.new_shape.1
        };
        (rows, cols)
    }

    /// Whether `(row, col)` exists in both shapes
    pub const fn preserves(&self, row: usize, col: usize) -> bool {
        let (rows, cols) = self.overlap();
        row < rows && col < cols
    }
}

/// Reshape `array`, keeping elements inside the overlap
///
/// Elements outside the old shape are produced by `fill(row, col)`;
/// elements outside the new shape are dropped.
pub fn resize_array_2d<T, F>(array: &Array2<T>, plan: &ResizePlan, fill: F) -> Array2<T>
where
    T: Clone,
    F: Fn(usize, usize) -> T,
{
    if !plan.changes_shape() {
        return array.clone();
    }

    // Cells outside the overlap come from `fill`
    Array2::from_shape_fn(plan.new_shape, |(row, col)| {
        if plan.preserves(row, col) {
            if let Some(existing) = array.get([row, col]) {
                return existing.clone();
            }
        }
        fill(row, col)
    })
}
