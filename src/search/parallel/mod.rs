//! Parallel exploration of the bounded-depth search tree.
//!
//! # Architecture
//!
//! One search invocation consists of:
//! - A **branch queue** holding `(node, remaining depth, prefix)` tasks, one
//!   per live exploration branch
//! - A fixed pool of **workers** that consume branch tasks and push one child
//!   task per outgoing edge back into the queue
//! - A **coordinator** on the calling thread that waits for every worker to
//!   finish and collects the winning sequence, if any
//! - **Shared state** with the first-result-wins claim flag, the stop signal,
//!   and the outstanding-branch counter
//!
//! At most one branch ever commits a result: committing requires winning a
//! compare-exchange on the claim flag, so a second valid sequence discovered
//! concurrently is silently discarded. Shutdown is cooperative — the stop
//! flag is raised either by the winning branch or when the last outstanding
//! branch finishes, and workers observe it between queue polls.

pub mod channel;
pub mod coordinator;

pub use coordinator::{run_parallel_search, SearchReport};
