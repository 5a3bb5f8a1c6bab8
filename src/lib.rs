//! Concurrent search for distinguishing label sequences.
//!
//! Given two directed labeled graphs, a source node, a target node, and an
//! exact walk length `k`, [`find_sequence`] looks for a sequence of `k` edge
//! labels that spells a walk from source to target in the first graph but not
//! in the second. Graphs are supplied as opaque accessors (see
//! [`LabeledGraph`]); the crate never builds or stores graphs itself.
//!
//! # Architecture
//!
//! The search engine consists of:
//! - A **coordinator** that seeds the root branch and collects the result
//! - A pool of **workers** that consume branch tasks from a shared queue and
//!   fan out one child task per outgoing edge
//! - **Shared state** for first-result-wins claiming and orderly shutdown
//! - A **membership check** that verifies a candidate sequence against the
//!   second graph
//!
//! Which valid sequence is returned when several exist depends on scheduling
//! and is intentionally unspecified; callers get *some* valid answer.
//!
//! # Example
//!
//! ```
//! use lseq::{find_sequence, Edge, Node};
//!
//! // One-edge graph: 7 --l--> 6. Node 6 exists but has no outgoing edges.
//! let g1 = |n: Node| match n {
//!     7 => Some(vec![Edge { to: 6, label: 'l' }]),
//!     6 => Some(Vec::new()),
//!     _ => None,
//! };
//! // Same nodes, no edge between them.
//! let g2 = |n: Node| -> Option<Vec<Edge>> {
//!     match n {
//!         6 | 7 => Some(Vec::new()),
//!         _ => None,
//!     }
//! };
//!
//! let seq = find_sequence(&g1, &g2, 7, 6, 1);
//! assert_eq!(seq, Some(vec!['l']));
//! ```

pub mod graph;
pub mod search;

pub use graph::{Edge, Label, LabeledGraph, Node};
pub use search::config::SearchConfig;
pub use search::membership::spells_walk;
pub use search::parallel::{run_parallel_search, SearchReport};
pub use search::result::SearchStatistics;
pub use search::find_sequence;
