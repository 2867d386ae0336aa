//! The sequential-vs-parallel execution policy for bulk operations.

/// Decides whether a bulk operation runs sequentially or fans out across
/// independent row or column indices.
///
/// The policy is an explicit value handed to each bulk operation (or
/// defaulted per call), so concurrent callers can hold different settings
/// without racing on process-wide state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParallelPolicy {
    /// Work-unit count below which parallel execution is never attempted.
    pub min_count_for_parallel: usize,
    /// Master switch for parallel execution.
    pub parallel_enabled: bool,
}

impl Default for ParallelPolicy {
    fn default() -> Self {
        Self {
            min_count_for_parallel: 5000,
            parallel_enabled: num_cpus::get() > 1,
        }
    }
}

impl ParallelPolicy {
    /// A policy that never parallelizes.
    pub fn sequential() -> Self {
        Self {
            min_count_for_parallel: usize::MAX,
            parallel_enabled: false,
        }
    }

    /// True when `count` work units are enough to make fan-out worthwhile.
    pub fn should_parallelize(&self, count: usize) -> bool {
        self.parallel_enabled && count >= self.min_count_for_parallel
    }

    /// Picks the axis a bulk operation fans out across. The row dimension
    /// is consulted first, then the column dimension, never both.
    pub(crate) fn dispatch(&self, rows: usize, cols: usize) -> Dispatch {
        if self.should_parallelize(rows) {
            tracing::debug!(rows, "running row-parallel");
            Dispatch::Rows
        } else if self.should_parallelize(cols) {
            tracing::debug!(cols, "running column-parallel");
            Dispatch::Columns
        } else {
            Dispatch::Sequential
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Dispatch {
    Rows,
    Columns,
    Sequential,
}
