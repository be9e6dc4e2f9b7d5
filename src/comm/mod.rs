//! Process group and collective operations
//!
//! The sort runs SPMD-style on a fixed-membership group of `size`
//! workers: a dedicated rayon pool with exactly `size` threads, where
//! one invocation runs the same worker function once per thread and
//! each invocation learns its rank from the broadcast context.
//!
//! All coordination goes through the collectives defined here
//! (broadcast, scatter, gather, all-to-all, max-reduce). Each one is a
//! barrier-style rendezvous over per-rank mailboxes: writers deposit,
//! the group synchronizes, readers collect, the group synchronizes
//! again so the mailboxes can be reused. Every worker must issue the
//! same collectives in the same order; there is no detection of or
//! recovery from a desynchronized participant. A worker that panics
//! mid-collective leaves its peers blocked, which matches the
//! all-or-nothing failure model of the algorithm.

use std::sync::{Barrier, Mutex, MutexGuard};

use crate::ShearsortError;

/// Rank that owns the full matrix before scatter and after gather.
pub const ROOT: usize = 0;

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    // A poisoned mailbox means a peer died mid-collective; the run
    // cannot continue.
    m.lock().expect("collective participant failed")
}

/// Shared state for one group invocation: one mailbox per rank plus
/// side slots for the scalar broadcast and the timing reduce.
struct CollectiveState<T> {
    mailboxes: Vec<Mutex<Vec<T>>>,
    scalar: Mutex<usize>,
    times: Mutex<Vec<f64>>,
    barrier: Barrier,
}

impl<T> CollectiveState<T> {
    fn new(size: usize) -> Self {
        Self {
            mailboxes: (0..size).map(|_| Mutex::new(Vec::new())).collect(),
            scalar: Mutex::new(0),
            times: Mutex::new(vec![0.0; size]),
            barrier: Barrier::new(size),
        }
    }
}

/// A fixed group of cooperating workers.
///
/// The pool holds exactly `size` threads for the lifetime of the
/// group, so a barrier over `size` participants always completes.
pub struct ProcessGroup {
    pool: rayon::ThreadPool,
    size: usize,
}

impl ProcessGroup {
    /// Creates a group of `size` workers.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or the worker pool cannot be
    /// created.
    pub fn new(size: usize) -> Result<Self, ShearsortError> {
        if size == 0 {
            return Err(ShearsortError::InvalidProcessCount(size));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(size)
            .build()
            .map_err(|e| ShearsortError::ProcessGroup(e.to_string()))?;
        Ok(Self { pool, size })
    }

    /// Number of workers in the group.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Runs `f` once on every worker, passing each its communicator.
    ///
    /// Results are returned in rank order. `f` must issue the same
    /// sequence of collectives on every rank.
    pub fn run<T, R, F>(&self, f: F) -> Vec<R>
    where
        T: Clone + Send,
        R: Send,
        F: Fn(Communicator<'_, T>) -> R + Sync,
    {
        let state = CollectiveState::new(self.size);
        self.pool.broadcast(|ctx| {
            f(Communicator {
                rank: ctx.index(),
                state: &state,
            })
        })
    }
}

/// One worker's handle on the group's collectives.
pub struct Communicator<'a, T> {
    rank: usize,
    state: &'a CollectiveState<T>,
}

impl<T> Communicator<'_, T>
where
    T: Clone,
{
    /// This worker's rank in `[0, size)`.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of workers in the group.
    pub fn size(&self) -> usize {
        self.state.mailboxes.len()
    }

    /// One-to-all broadcast of a scalar (the matrix dimension).
    ///
    /// The root passes `Some(value)`, every other rank `None`; all
    /// ranks return the root's value.
    ///
    /// # Panics
    ///
    /// Panics if the root passes `None`.
    pub fn broadcast(&self, root: usize, value: Option<usize>) -> usize {
        if self.rank == root {
            let v = value.expect("broadcast root must supply a value");
            *lock(&self.state.scalar) = v;
        }
        self.state.barrier.wait();
        let v = *lock(&self.state.scalar);
        self.state.barrier.wait();
        v
    }

    /// Partitions `data` at the root into `size` equal contiguous
    /// segments and delivers segment `p` to rank `p`.
    ///
    /// The root passes `Some(data)`, every other rank `None`.
    ///
    /// # Panics
    ///
    /// Panics if the root passes `None` or `data.len()` is not a
    /// multiple of the group size.
    pub fn scatter(&self, root: usize, data: Option<Vec<T>>) -> Vec<T> {
        let size = self.size();
        if self.rank == root {
            let data = data.expect("scatter root must supply the data");
            assert_eq!(
                data.len() % size,
                0,
                "scatter data must divide evenly among {} ranks",
                size
            );
            let seg = data.len() / size;
            if seg > 0 {
                for (p, segment) in data.chunks(seg).enumerate() {
                    *lock(&self.state.mailboxes[p]) = segment.to_vec();
                }
            }
        }
        self.state.barrier.wait();
        let local = std::mem::take(&mut *lock(&self.state.mailboxes[self.rank]));
        self.state.barrier.wait();
        local
    }

    /// Collects every rank's segment at the root, concatenated in
    /// rank order. Returns `Some` at the root, `None` elsewhere.
    pub fn gather(&self, root: usize, data: Vec<T>) -> Option<Vec<T>> {
        *lock(&self.state.mailboxes[self.rank]) = data;
        self.state.barrier.wait();
        let gathered = if self.rank == root {
            let mut all = Vec::new();
            for mailbox in &self.state.mailboxes {
                all.append(&mut lock(mailbox));
            }
            Some(all)
        } else {
            None
        };
        self.state.barrier.wait();
        gathered
    }

    /// All-to-all exchange: every rank contributes `size` segments of
    /// `segment` elements and receives `size` segments, with the
    /// segment this rank sent to peer `p` landing in slot `rank` of
    /// peer `p`'s result, source-ordered.
    ///
    /// # Panics
    ///
    /// Panics if `send.len() != size * segment`.
    pub fn all_to_all(&self, send: &[T], segment: usize) -> Vec<T> {
        let size = self.size();
        assert_eq!(
            send.len(),
            size * segment,
            "all_to_all send buffer must hold size * segment elements"
        );
        *lock(&self.state.mailboxes[self.rank]) = send.to_vec();
        self.state.barrier.wait();
        let mut recv = Vec::with_capacity(size * segment);
        for src in 0..size {
            let mailbox = lock(&self.state.mailboxes[src]);
            recv.extend_from_slice(&mailbox[self.rank * segment..(self.rank + 1) * segment]);
        }
        self.state.barrier.wait();
        recv
    }

    /// Max-reduction of a per-rank measurement to the root. Returns
    /// `Some(max)` at the root, `None` elsewhere. Used for the
    /// wall-clock report; not part of sort correctness.
    pub fn reduce_max(&self, root: usize, value: f64) -> Option<f64> {
        lock(&self.state.times)[self.rank] = value;
        self.state.barrier.wait();
        let result = if self.rank == root {
            Some(lock(&self.state.times).iter().cloned().fold(f64::MIN, f64::max))
        } else {
            None
        };
        self.state.barrier.wait();
        result
    }
}
