//! # Shearsort: Parallel Boustrophedon Matrix Sorting
//!
//! This library sorts the elements of a dense N×N matrix into total
//! boustrophedon (snake) order — even rows read left-to-right, odd
//! rows right-to-left, concatenated top to bottom — across a fixed
//! group of P cooperating workers.
//!
//! ## Overview
//!
//! The implementation follows the classic Shearsort scheme for a 2-D
//! mesh:
//!
//! 1. **Matrix distribution**: the root rank scatters the matrix into
//!    P equal blocks of `N / P` contiguous rows, one per worker.
//! 2. **Phase loop**: `ceil(log2 N) + 1` rounds of row sorts
//!    (direction alternating by global row parity) interleaved with
//!    `ceil(log2 N)` rounds of column sorts.
//! 3. **Column exchange**: columns are sorted as rows by locally
//!    transposing and re-bucketing each block, then trading the data
//!    through a per-strip all-to-all; the identical transform run a
//!    second time restores row-major layout.
//! 4. **Gather**: the root reassembles the sorted matrix.
//!
//! Workers are the threads of a dedicated fixed-size pool and
//! coordinate only through collective operations (broadcast, scatter,
//! gather, all-to-all), every rank issuing the same calls in the same
//! order.
//!
//! ## Usage
//!
//! ```
//! use shearsort::{sort_matrix, Matrix};
//!
//! let matrix = Matrix::new(2, vec![4.0, 3.0, 2.0, 1.0]);
//! let sorted = sort_matrix(matrix, 2).unwrap();
//!
//! // Snake order: row 0 ascending, row 1 descending.
//! assert_eq!(sorted.values, vec![1.0, 2.0, 4.0, 3.0]);
//! ```

use std::fmt;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use num_traits::Float;

pub mod comm;
pub mod matrix;
pub mod phase;
pub mod sort;
pub mod transpose;

// Re-export primary components
pub use comm::{Communicator, ProcessGroup, ROOT};
pub use matrix::{read_matrix, read_matrix_file, write_matrix, write_matrix_file};
pub use matrix::{Matrix, RowBlock};
pub use phase::{column_rounds, run_phases, PhaseStats};
pub use sort::{sort_row, Direction};
pub use transpose::stage_for_exchange;

/// Errors surfaced before the worker group starts computing.
///
/// Everything past configuration is all-or-nothing: once the phase
/// loop is running there is no partial-failure mode to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShearsortError {
    /// The matrix dimension is not evenly divisible by the worker
    /// count.
    IndivisibleSize { n: usize, procs: usize },

    /// The worker count is unusable (zero).
    InvalidProcessCount(usize),

    /// The worker pool could not be created.
    ProcessGroup(String),
}

impl fmt::Display for ShearsortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShearsortError::IndivisibleSize { n, procs } => write!(
                f,
                "matrix size {} must be divisible by the number of processes {}",
                n, procs
            ),
            ShearsortError::InvalidProcessCount(procs) => {
                write!(f, "invalid process count: {}", procs)
            }
            ShearsortError::ProcessGroup(msg) => {
                write!(f, "failed to create process group: {}", msg)
            }
        }
    }
}

impl std::error::Error for ShearsortError {}

/// Sorts a matrix into boustrophedon order across `procs` workers.
///
/// The calling thread owns the matrix; it is moved to the worker
/// group's root rank, scattered, sorted through the phase loop, and
/// gathered back.
///
/// # Arguments
///
/// * `matrix` - The N×N matrix to sort
/// * `procs` - Number of workers; must evenly divide N
///
/// # Errors
///
/// Returns a configuration error if `procs` is zero, does not divide
/// N, or the worker pool cannot be created.
///
/// # Examples
///
/// ```
/// use shearsort::{sort_matrix, Matrix};
///
/// let matrix = Matrix::from_rows(vec![
///     vec![4.0, 3.0, 2.0, 1.0],
///     vec![8.0, 7.0, 6.0, 5.0],
///     vec![12.0, 11.0, 10.0, 9.0],
///     vec![16.0, 15.0, 14.0, 13.0],
/// ]);
/// let sorted = sort_matrix(matrix, 2).unwrap();
/// assert!(sorted.is_boustrophedon_sorted());
/// ```
pub fn sort_matrix<T>(matrix: Matrix<T>, procs: usize) -> Result<Matrix<T>, ShearsortError>
where
    T: Float + Send + Sync,
{
    sort_matrix_timed(matrix, procs).map(|(sorted, _)| sorted)
}

/// Like [`sort_matrix`], additionally reporting the wall-clock time of
/// the phase loop — the maximum across all workers, excluding scatter
/// and gather.
pub fn sort_matrix_timed<T>(
    matrix: Matrix<T>,
    procs: usize,
) -> Result<(Matrix<T>, Duration), ShearsortError>
where
    T: Float + Send + Sync,
{
    let n = matrix.n;
    if procs == 0 {
        return Err(ShearsortError::InvalidProcessCount(procs));
    }
    if n % procs != 0 {
        return Err(ShearsortError::IndivisibleSize { n, procs });
    }

    let group = ProcessGroup::new(procs)?;

    // Hand the root rank exclusive ownership of the full matrix; it
    // comes back only through gather.
    let root_values = Mutex::new(Some(matrix.values));

    let mut results = group.run(|comm: Communicator<'_, T>| {
        let n = comm.broadcast(ROOT, if comm.rank() == ROOT { Some(n) } else { None });
        let chunk = n / comm.size();

        let send = if comm.rank() == ROOT {
            root_values
                .lock()
                .expect("root matrix handoff failed")
                .take()
        } else {
            None
        };
        let local = comm.scatter(ROOT, send);
        let mut block = RowBlock::new(comm.rank(), chunk, n, local);

        let start = Instant::now();
        run_phases(&mut block, &comm);
        let elapsed = start.elapsed().as_secs_f64();

        let gathered = comm.gather(ROOT, block.into_values());
        let max_time = comm.reduce_max(ROOT, elapsed);
        gathered.map(|values| (values, max_time.unwrap_or(0.0)))
    });

    // Results are rank-ordered; only the root produced one.
    let (values, seconds) = results
        .swap_remove(ROOT)
        .expect("root rank produced no gathered matrix");
    Ok((Matrix::new(n, values), Duration::from_secs_f64(seconds)))
}

/// Version information for the shearsort library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
