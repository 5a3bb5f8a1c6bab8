//! Worker pool and coordinator for one search invocation.

use crate::graph::{Label, LabeledGraph, Node};
use crate::search::config::SearchConfig;
use crate::search::membership::spells_walk;
use crate::search::parallel::channel::{
    create_channels, BranchTask, CoordinatorChannels, WorkerChannels, WorkerMessage,
};
use crate::search::result::SearchStatistics;
use crossbeam_channel::RecvTimeoutError;
use std::thread;
use std::time::Instant;

/// Outcome of one parallel search invocation.
#[derive(Debug)]
pub struct SearchReport {
    /// The winning sequence, if any branch committed one.
    pub sequence: Option<Vec<Label>>,
    /// Statistics aggregated across all workers.
    pub statistics: SearchStatistics,
    /// Per-worker statistics.
    pub worker_statistics: Vec<(usize, SearchStatistics)>,
}

impl SearchReport {
    /// Whether a distinguishing sequence was found.
    pub fn found(&self) -> bool {
        self.sequence.is_some()
    }
}

/// Run the search with the given configuration.
///
/// Explores depth-`length` walks of `g1` from `source` with a fixed pool of
/// workers; the first walk that ends on `target` and whose label sequence the
/// membership check rejects for `g2` wins. Returns once every worker has
/// exited, so no branch outlives the invocation.
pub fn run_parallel_search<G1, G2>(
    g1: &G1,
    g2: &G2,
    source: Node,
    target: Node,
    length: usize,
    config: &SearchConfig,
) -> SearchReport
where
    G1: LabeledGraph + Sync,
    G2: LabeledGraph + Sync,
{
    let start_time = Instant::now();
    let num_workers = config.num_workers.max(1);

    let (coordinator_channels, worker_channels) = create_channels(num_workers);

    // Seed the root branch before any worker starts, so the pending count
    // cannot reach zero spuriously.
    coordinator_channels.shared.add_branch();
    let _ = coordinator_channels.queue_tx.send(BranchTask {
        node: source,
        remaining: length,
        prefix: Vec::new(),
    });

    thread::scope(|scope| {
        for (worker_id, channels) in worker_channels.into_iter().enumerate() {
            let poll_interval = config.poll_interval;
            scope.spawn(move || {
                run_worker(worker_id, g1, g2, source, target, poll_interval, channels)
            });
        }

        // The scope joins every worker before this function returns.
        run_coordinator(coordinator_channels, num_workers, start_time)
    })
}

/// Coordinator loop: collect the (at most one) winning sequence and wait for
/// every worker's final statistics.
fn run_coordinator(
    channels: CoordinatorChannels,
    num_workers: usize,
    start_time: Instant,
) -> SearchReport {
    let mut sequence: Option<Vec<Label>> = None;
    let mut worker_statistics: Vec<(usize, SearchStatistics)> = Vec::new();
    let mut finished_count = 0;

    while finished_count < num_workers {
        match channels.from_workers.recv() {
            Ok(WorkerMessage::Found { sequence: seq, .. }) => {
                // The claim flag guarantees this arrives at most once.
                sequence = Some(seq);
            }
            Ok(WorkerMessage::Finished {
                worker_id,
                statistics,
            }) => {
                finished_count += 1;
                worker_statistics.push((worker_id, statistics));
            }
            Err(_) => break,
        }
    }

    let mut statistics = SearchStatistics::default();
    for (_, stats) in &worker_statistics {
        statistics.merge(stats);
    }
    statistics.elapsed_time = start_time.elapsed();

    SearchReport {
        sequence,
        statistics,
        worker_statistics,
    }
}

/// Worker loop: consume branch tasks until told to stop.
fn run_worker<G1, G2>(
    worker_id: usize,
    g1: &G1,
    g2: &G2,
    source: Node,
    target: Node,
    poll_interval: std::time::Duration,
    channels: WorkerChannels,
) where
    G1: LabeledGraph + Sync,
    G2: LabeledGraph + Sync,
{
    let mut stats = SearchStatistics::default();

    loop {
        if channels.shared.should_stop() {
            break;
        }
        match channels.queue_rx.recv_timeout(poll_interval) {
            Ok(task) => explore(worker_id, g1, g2, source, target, task, &channels, &mut stats),
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    let _ = channels.to_coordinator.send(WorkerMessage::Finished {
        worker_id,
        statistics: stats,
    });
}

/// Process one exploration branch.
///
/// Every exit path calls `finish_branch` exactly once, so the pending count
/// stays in lockstep with the number of enqueued tasks.
#[allow(clippy::too_many_arguments)]
fn explore<G1, G2>(
    worker_id: usize,
    g1: &G1,
    g2: &G2,
    source: Node,
    target: Node,
    task: BranchTask,
    channels: &WorkerChannels,
    stats: &mut SearchStatistics,
) where
    G1: LabeledGraph + Sync,
    G2: LabeledGraph + Sync,
{
    stats.tasks_processed += 1;

    // Prune: a winner has already been committed.
    if channels.shared.winner_claimed() {
        stats.branches_pruned += 1;
        channels.shared.finish_branch();
        return;
    }

    // The node lookup comes before the depth check: a walk cannot end (or
    // continue) on a node the graph does not contain.
    let Some(edges) = g1.edges_of(task.node) else {
        channels.shared.finish_branch();
        return;
    };

    if task.remaining == 0 {
        if task.node == target {
            stats.candidates_checked += 1;
            if !spells_walk(g2, source, target, &task.prefix) && channels.shared.try_claim() {
                let _ = channels.to_coordinator.send(WorkerMessage::Found {
                    worker_id,
                    sequence: task.prefix,
                });
                channels.shared.signal_stop();
            }
        }
        channels.shared.finish_branch();
        return;
    }

    for edge in &edges {
        let mut prefix = task.prefix.clone();
        prefix.push(edge.label);
        channels.shared.add_branch();
        let _ = channels.queue_tx.send(BranchTask {
            node: edge.to,
            remaining: task.remaining - 1,
            prefix,
        });
    }
    channels.shared.finish_branch();
}
