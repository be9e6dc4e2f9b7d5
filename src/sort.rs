//! Local sequential row sorting
//!
//! Shearsort reduces every global step to independent sorts of full
//! matrix rows, so this is the only comparison logic in the crate.
//! Rows alternate direction by their fixed global index (the
//! boustrophedon pattern); columns, once exposed as rows by the
//! exchange step, are always sorted ascending.

use std::cmp::Ordering;

/// Sort direction for a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Returns the boustrophedon direction for a row, decided by the
    /// parity of its **global** index: even rows read left-to-right,
    /// odd rows right-to-left.
    ///
    /// The global index is fixed at distribution time and does not
    /// change when row contents are redistributed during column
    /// phases.
    pub fn for_row(global_row: usize) -> Self {
        if global_row % 2 == 0 {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }
}

/// Sorts one row in place in the given direction.
///
/// This is a complete comparison sort. A bounded number of
/// adjacent-swap sweeps is *not* sufficient here: it orders a row of
/// length N only when the sweep count reaches N, while the phase loop
/// only affords `ceil(log2 N) + 1` rounds.
///
/// Values that admit no ordering (NaN) compare as equal, so they are
/// kept but land at an unspecified position.
pub fn sort_row<T: PartialOrd>(row: &mut [T], direction: Direction) {
    match direction {
        Direction::Ascending => {
            row.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        }
        Direction::Descending => {
            row.sort_unstable_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal))
        }
    }
}
