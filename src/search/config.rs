//! Configuration for the parallel search engine.

use std::time::Duration;

/// Configuration for one search invocation.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of worker threads consuming the branch queue.
    pub num_workers: usize,
    /// How long a worker waits on the queue before re-checking the stop flag.
    pub poll_interval: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            poll_interval: Duration::from_millis(1),
        }
    }
}

impl SearchConfig {
    /// Set the number of worker threads (clamped to at least 1).
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the worker queue poll interval.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}
