//! Block transpose and exchange staging
//!
//! A column phase needs every worker to hold `chunk` full *columns* of
//! the global matrix, laid out as rows so the row sorter can be reused
//! unchanged. Starting from the row-block decomposition this takes two
//! local reorderings before the all-to-all exchange:
//!
//! 1. **Local transpose**: entry `(i, j)` of the `chunk × N` block
//!    moves to position `j*chunk + i` of an `N × chunk` intermediate.
//! 2. **Re-bucketing**: within the intermediate, entries are regrouped
//!    by destination rank with block size `chunk*chunk`, so that each
//!    of the `chunk` output strips consists of `size` contiguous
//!    `chunk`-element segments, one per destination — exactly the
//!    layout the per-strip all-to-all consumes.
//!
//! The composite transform followed by the exchange is an involution
//! on the global layout: staging and exchanging a second time restores
//! the original row-major partitioning exactly. The same function
//! therefore serves both the forward (rows → columns) and inverse
//! (columns → rows) redistribution, which keeps the two directions
//! bit-exact by construction.

use num_traits::Zero;

/// Stages a worker's row block for the column exchange.
///
/// # Arguments
///
/// * `block` - The local `chunk × n` block, row-major
/// * `n` - Global matrix dimension (row length)
/// * `chunk` - Rows per worker (`n / size`)
/// * `size` - Number of workers
///
/// # Returns
///
/// A `chunk × n` buffer of `chunk` strips; strip `i` holds, for each
/// destination rank `j`, the `chunk` elements `out[i*n + j*chunk ..
/// i*n + (j+1)*chunk]` bound for that rank.
///
/// # Panics
///
/// Panics if `chunk * size != n` or the block length is not
/// `chunk * n`.
pub fn stage_for_exchange<T>(block: &[T], n: usize, chunk: usize, size: usize) -> Vec<T>
where
    T: Copy + Zero,
{
    assert_eq!(chunk * size, n, "chunk * size must equal n");
    assert_eq!(block.len(), chunk * n, "block must hold chunk * n elements");

    // Local transpose: (i, j) -> j*chunk + i
    let mut transposed = vec![T::zero(); chunk * n];
    for i in 0..chunk {
        for j in 0..n {
            transposed[j * chunk + i] = block[i * n + j];
        }
    }

    // Regroup by destination rank, block size chunk*chunk.
    let block_sz = chunk * chunk;
    let mut staged = vec![T::zero(); chunk * n];
    for i in 0..chunk {
        for j in 0..size {
            for k in 0..chunk {
                staged[i * n + j * chunk + k] = transposed[i * chunk + j * block_sz + k];
            }
        }
    }

    staged
}
