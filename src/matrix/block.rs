//! Per-worker row blocks
//!
//! Scatter hands each worker a contiguous block of `chunk = N / P`
//! full matrix rows. The block remembers the **global** indices of the
//! rows it was given; those indices decide each row's boustrophedon
//! direction and stay fixed for the whole run, even though the row
//! *contents* are swapped out during every column phase.

/// The contiguous rows owned by one worker between scatter and gather.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBlock<T> {
    /// Global matrix dimension (length of each row)
    pub n: usize,

    /// Global index of each locally held row (size: chunk)
    pub global_rows: Vec<usize>,

    /// Row values, row-major (size: chunk * n)
    pub values: Vec<T>,
}

impl<T: Copy> RowBlock<T> {
    /// Wraps the values a worker received from scatter.
    ///
    /// Row `i` of the block is global row `rank * chunk + i`.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != chunk * n`.
    pub fn new(rank: usize, chunk: usize, n: usize, values: Vec<T>) -> Self {
        assert_eq!(values.len(), chunk * n, "block must hold chunk * n values");
        let global_rows = (0..chunk).map(|i| rank * chunk + i).collect();
        Self {
            n,
            global_rows,
            values,
        }
    }

    /// Number of rows in the block.
    pub fn chunk(&self) -> usize {
        self.global_rows.len()
    }

    /// Returns local row `i` as a mutable slice.
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.values[i * self.n..(i + 1) * self.n]
    }

    /// Consumes the block, yielding its values for gather.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}
