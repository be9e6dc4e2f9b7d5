//! Phase controller
//!
//! Drives the Shearsort iteration on one worker's row block. The loop
//! runs `l = 0..=d` with `d = ceil(log2 N)`: every iteration sorts
//! the local rows boustrophedon-style, and every iteration except the
//! last also runs a column step, which exposes columns as rows through
//! the staged exchange, sorts them ascending, and exchanges back.
//!
//! The bound `d + 1` is Shearsort's convergence guarantee — full snake
//! order after `ceil(log2 N) + 1` row rounds interleaved with
//! `ceil(log2 N)` column rounds — and must not be shortened. All
//! workers execute the loop in lockstep; every collective inside it is
//! issued by every rank the same number of times.

use num_traits::Float;

use crate::comm::Communicator;
use crate::matrix::RowBlock;
use crate::sort::{sort_row, Direction};
use crate::transpose::stage_for_exchange;

/// Number of column-sort rounds needed for an N×N matrix,
/// `ceil(log2 N)`.
pub fn column_rounds(n: usize) -> usize {
    n.next_power_of_two().trailing_zeros() as usize
}

/// Rounds actually executed by one run of the phase loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseStats {
    pub row_rounds: usize,
    pub column_rounds: usize,
}

/// Runs the full phase loop on this worker's block.
///
/// Must be called by every rank of the group with blocks produced by
/// the same scatter; the column steps are collective.
pub fn run_phases<T>(block: &mut RowBlock<T>, comm: &Communicator<'_, T>) -> PhaseStats
where
    T: Float + Send,
{
    let d = column_rounds(block.n);
    let mut stats = PhaseStats::default();

    // Exactly d+1 row rounds and d column rounds; the final pass is
    // row-only and fixes the residual disorder left by the last
    // column round.
    for l in 0..=d {
        // Row step: direction follows the fixed global row index.
        for i in 0..block.chunk() {
            let direction = Direction::for_row(block.global_rows[i]);
            sort_row(block.row_mut(i), direction);
        }
        stats.row_rounds += 1;

        if l < d {
            column_step(block, comm);
            stats.column_rounds += 1;
        }
    }

    stats
}

/// One column round: redistribute so local rows hold global columns,
/// sort them, and redistribute back.
///
/// Column sorts are always ascending; only rows alternate direction.
/// The exchange is an involution, so the restore step reuses it
/// unchanged.
fn column_step<T>(block: &mut RowBlock<T>, comm: &Communicator<'_, T>)
where
    T: Float + Send,
{
    exchange(block, comm);
    for i in 0..block.chunk() {
        sort_row(block.row_mut(i), Direction::Ascending);
    }
    exchange(block, comm);
}

/// Stages the block and trades one all-to-all per row strip, leaving
/// the received layout in place of the block values.
fn exchange<T>(block: &mut RowBlock<T>, comm: &Communicator<'_, T>)
where
    T: Float + Send,
{
    let n = block.n;
    let chunk = block.chunk();
    let size = comm.size();
    let staged = stage_for_exchange(&block.values, n, chunk, size);

    // Each strip is one local row of n = size * chunk elements; the
    // chunk-sized segments inside it are already destination-ordered.
    for i in 0..chunk {
        let strip = &staged[i * n..(i + 1) * n];
        let received = comm.all_to_all(strip, chunk);
        block.values[i * n..(i + 1) * n].copy_from_slice(&received);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_rounds() {
        assert_eq!(column_rounds(1), 0);
        assert_eq!(column_rounds(2), 1);
        assert_eq!(column_rounds(4), 2);
        assert_eq!(column_rounds(8), 3);
        assert_eq!(column_rounds(6), 3); // ceil(log2 6)
        assert_eq!(column_rounds(16), 4);
    }
}
