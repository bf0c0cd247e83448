//! Row scheduling: serial or fanned out over a short-lived worker pool.
//!
//! [`RowIterator`] calls a per-row function once for every row index in
//! `0..rows` and returns when all of them are done.
//!
//! - [`RowIterator::Serial`] runs rows in ascending order on the calling
//!   thread.
//! - [`RowIterator::Parallel`] builds a dedicated pool for the call. Each
//!   worker claims the next row from a shared atomic counter until none are
//!   left. The pool is dropped before `iterate` returns.
//!
//! Row completion order is unspecified in parallel mode. Because every row
//! touches its own bytes only, the final image is identical either way.
//!
//! # Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use magpie_ops::iter::RowIterator;
//!
//! let sum = AtomicUsize::new(0);
//! RowIterator::new(4).iterate(100, |row| {
//!     sum.fetch_add(row, Ordering::Relaxed);
//! });
//! assert_eq!(sum.into_inner(), (0..100).sum());
//! ```

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::trace;
#[cfg(not(feature = "parallel"))]
use tracing::debug;
#[cfg(feature = "parallel")]
use tracing::warn;

use crate::region::{Row, RowAccessor};

/// How rows of a region are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowIterator {
    /// One row after another on the calling thread.
    #[default]
    Serial,
    /// Rows claimed concurrently by `workers` threads.
    Parallel {
        /// Requested worker count, clamped at run time to
        /// `[1, available parallelism]`
        workers: usize,
    },
}

/// Hardware threads available to this process (at least 1).
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

impl RowIterator {
    /// Serial for `workers <= 1`, parallel otherwise.
    pub fn new(workers: usize) -> Self {
        if workers <= 1 {
            Self::Serial
        } else {
            Self::Parallel { workers }
        }
    }

    /// Workers that would actually run for a region of `rows` rows.
    pub fn effective_workers(&self, rows: usize) -> usize {
        match *self {
            Self::Serial => 1,
            Self::Parallel { workers } => workers.clamp(1, available_workers()).min(rows.max(1)),
        }
    }

    /// Calls `f(row)` once for each row in `0..rows`, blocking until done.
    pub fn iterate<F>(&self, rows: usize, f: F)
    where
        F: Fn(usize) + Sync,
    {
        if rows == 0 {
            return;
        }

        let workers = self.effective_workers(rows);
        trace!(rows, workers, "iterating rows");

        if workers <= 1 {
            run_serial(rows, &f);
        } else {
            run_parallel(rows, workers, &f);
        }
    }
}

fn run_serial<F: Fn(usize)>(rows: usize, f: &F) {
    for row in 0..rows {
        f(row);
    }
}

#[cfg(feature = "parallel")]
fn run_parallel<F: Fn(usize) + Sync>(rows: usize, workers: usize, f: &F) {
    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("magpie-row-{i}"))
        .build()
    {
        Ok(pool) => pool,
        Err(e) => {
            warn!(error = %e, workers, "failed to build worker pool, running serially");
            return run_serial(rows, f);
        }
    };

    let next = AtomicUsize::new(0);
    pool.scope(|s| {
        for _ in 0..workers {
            s.spawn(|_| {
                loop {
                    let row = next.fetch_add(1, Ordering::Relaxed);
                    if row >= rows {
                        break;
                    }
                    f(row);
                }
            });
        }
    });
}

#[cfg(not(feature = "parallel"))]
fn run_parallel<F: Fn(usize) + Sync>(rows: usize, workers: usize, f: &F) {
    debug!(workers, "built without `parallel`, running serially");
    run_serial(rows, f);
}

/// Runs `f` on every row of `acc`.
///
/// Takes the accessor mutably, so no other call can hand out rows of the
/// same buffers while this one runs:
///
/// ```compile_fail
/// # use magpie_core::{AlphaMode, PixelBuffer, Point, Rect};
/// # use magpie_ops::iter::{RowIterator, for_each_row};
/// # use magpie_ops::RowAccessor;
/// let rect = Rect::from_size(2, 2);
/// let src = PixelBuffer::new(rect, AlphaMode::Straight);
/// let mut dst = PixelBuffer::new(rect, AlphaMode::Straight);
/// let mut acc = RowAccessor::in_place(&mut dst, rect, &src, Point::ZERO);
/// for_each_row(&RowIterator::Serial, &mut acc, |_| {
///     for_each_row(&RowIterator::Serial, &mut acc, |row| row.fill([9; 4]));
/// });
/// ```
pub fn for_each_row<F>(iter: &RowIterator, acc: &mut RowAccessor<'_>, f: F)
where
    F: Fn(Row<'_>) + Sync,
{
    let acc: &RowAccessor<'_> = acc;
    iter.iterate(acc.rows(), |r| {
        // Safety: `iterate` yields each index below `rows()` exactly once,
        // and the exclusive borrow above rules out any concurrent caller
        let row = unsafe { acc.row(r) };
        f(row);
    });
}

/// Writes `kernel(dst_pixel, src_pixel)` for every pixel of `acc`.
pub fn map_pixels<K>(iter: &RowIterator, acc: &mut RowAccessor<'_>, kernel: K)
where
    K: Fn([u8; 4], [u8; 4]) -> [u8; 4] + Sync,
{
    for_each_row(iter, acc, |row| row.map_pixels(&kernel));
}
