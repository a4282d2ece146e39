use bitvec::prelude::*;

/// Fixed-size record of grid cells already reached by a fill
///
/// One bit per cell, addressed by `[row, col]` in row-major order.
/// Inserts are O(1).
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    cols: usize,
}

impl VisitedSet {
    /// Create a set for a `rows × cols` grid with nothing visited
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            cols,
        }
    }

    /// Mark a cell, returning `true` if it was not marked before
    ///
    /// Indices outside the grid are ignored and report `false`.
    pub fn insert(&mut self, index: [usize; 2]) -> bool {
        let Some(offset) = self.offset(index) else {
            return false;
        };
        if self.bits.get(offset).as_deref() != Some(&false) {
            return false;
        }
        self.bits.set(offset, true);
        true
    }

    const fn offset(&self, [row, col]: [usize; 2]) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }
}
