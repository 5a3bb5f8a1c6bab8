//! The distinguishing-sequence search engine.
//!
//! This module provides the search over two labeled graphs:
//! - Membership: verify that a concrete label sequence spells a walk
//! - Parallel: worker pool + coordinator that explores depth-`k` walks of
//!   the first graph and tests candidates against the second

pub mod config;
pub mod membership;
pub mod parallel;
pub mod result;

pub use config::SearchConfig;
pub use membership::spells_walk;
pub use parallel::{run_parallel_search, SearchReport};
pub use result::SearchStatistics;

use crate::graph::{Label, LabeledGraph, Node};

/// Search for a label sequence of exactly `length` symbols that spells a
/// walk from `source` to `target` in `g1` but not in `g2`.
///
/// Returns `Some(sequence)` for the first such sequence any exploration
/// branch commits, or `None` when no distinguishing sequence of that length
/// exists. When several valid sequences exist, which one is returned depends
/// on scheduling and may vary between runs.
pub fn find_sequence<G1, G2>(
    g1: &G1,
    g2: &G2,
    source: Node,
    target: Node,
    length: usize,
) -> Option<Vec<Label>>
where
    G1: LabeledGraph + Sync,
    G2: LabeledGraph + Sync,
{
    run_parallel_search(g1, g2, source, target, length, &SearchConfig::default()).sequence
}
