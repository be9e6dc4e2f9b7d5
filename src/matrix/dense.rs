//! Dense square matrix storage
//!
//! The sort works on a dense N×N row-major matrix. The full matrix
//! only ever exists at the root rank: it is consumed by scatter and
//! reassembled by gather, so worker code never aliases it.

use std::fmt;

/// A dense N×N matrix in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    /// Matrix dimension (rows and columns)
    pub n: usize,

    /// Element values, row-major (size: n * n)
    pub values: Vec<T>,
}

impl<T: Copy> Matrix<T> {
    /// Creates a matrix from its dimension and row-major values.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != n * n`.
    pub fn new(n: usize, values: Vec<T>) -> Self {
        assert_eq!(values.len(), n * n, "values.len() must be n * n");
        Self { n, values }
    }

    /// Creates a matrix from a list of equal-length rows.
    ///
    /// # Panics
    ///
    /// Panics if any row's length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let n = rows.len();
        let mut values = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "all rows must have length n");
            values.extend(row);
        }
        Self { n, values }
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// Returns element `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.values[i * self.n + j]
    }

    /// Iterates the elements in boustrophedon (snake) order: row 0
    /// left-to-right, row 1 right-to-left, and so on.
    pub fn boustrophedon(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.n).flat_map(move |i| {
            let row = self.row(i);
            let forward = i % 2 == 0;
            (0..self.n).map(move |j| if forward { row[j] } else { row[self.n - 1 - j] })
        })
    }

    /// True if the boustrophedon traversal is non-decreasing, i.e.
    /// the matrix is in full snake order.
    pub fn is_boustrophedon_sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        let mut prev: Option<T> = None;
        for v in self.boustrophedon() {
            if let Some(p) = prev {
                if p > v {
                    return false;
                }
            }
            prev = Some(v);
        }
        true
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            for j in 0..self.n {
                write!(f, "{:>10} ", self.values[i * self.n + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
