//! Search statistics types.

use std::time::Duration;

/// Counters from one worker (or, aggregated, from a whole search).
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Branch tasks this worker pulled from the queue and processed.
    pub tasks_processed: u64,
    /// Full-length paths that reached the target and went through the
    /// graph-2 membership check.
    pub candidates_checked: u64,
    /// Tasks dropped because a winner had already been committed.
    pub branches_pruned: u64,
    /// Wall-clock time of the search (set on aggregated statistics only).
    pub elapsed_time: Duration,
}

impl SearchStatistics {
    /// Fold another worker's counters into this one.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.tasks_processed += other.tasks_processed;
        self.candidates_checked += other.candidates_checked;
        self.branches_pruned += other.branches_pruned;
    }

    /// Fraction of processed tasks that were pruned (0.0 to 1.0).
    pub fn prune_rate(&self) -> f64 {
        if self.tasks_processed == 0 {
            0.0
        } else {
            self.branches_pruned as f64 / self.tasks_processed as f64
        }
    }
}
