//! Channels and shared state wiring one search invocation together.

use crate::graph::{Label, Node};
use crate::search::result::SearchStatistics;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// One live exploration branch: a frontier node, the depth still to walk,
/// and the labels accumulated so far. Each task owns its prefix; siblings
/// never share one.
#[derive(Debug, Clone)]
pub struct BranchTask {
    pub node: Node,
    pub remaining: usize,
    pub prefix: Vec<Label>,
}

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// A branch won the claim race and committed this sequence.
    Found {
        worker_id: usize,
        sequence: Vec<Label>,
    },
    /// Worker exited its loop; sent exactly once per worker.
    Finished {
        worker_id: usize,
        statistics: SearchStatistics,
    },
}

/// State shared by every branch of one search invocation.
#[derive(Debug, Default)]
pub struct SharedSearch {
    /// Termination flag: set once, by the branch that commits the result.
    claimed: AtomicBool,
    /// Tells workers to exit; raised on a win or when no work remains.
    stop: AtomicBool,
    /// Outstanding branch count. Incremented before a task is enqueued and
    /// decremented when it finishes, so it can only reach zero once every
    /// branch, including dynamically spawned children, is done.
    pending: AtomicUsize,
}

impl SharedSearch {
    /// Try to claim the win. Only the first caller ever gets `true`, which
    /// makes it the sole branch allowed to send [`WorkerMessage::Found`].
    pub fn try_claim(&self) -> bool {
        self.claimed
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Has some branch already committed a result?
    pub fn winner_claimed(&self) -> bool {
        self.claimed.load(Ordering::SeqCst)
    }

    /// Check whether workers should exit.
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    /// Tell all workers to exit.
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Account for one branch about to be enqueued.
    pub fn add_branch(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
    }

    /// Account for one finished branch. The branch that brings the count to
    /// zero raises the stop signal: the whole tree has been explored.
    pub fn finish_branch(&self) {
        if self.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.signal_stop();
        }
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Pull branch tasks from the shared queue.
    pub queue_rx: Receiver<BranchTask>,
    /// Push child branch tasks back into the queue.
    pub queue_tx: Sender<BranchTask>,
    /// Report the winning sequence and the final worker statistics.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Shared claim/stop/pending state.
    pub shared: Arc<SharedSearch>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage>,
    /// Seed the root branch task.
    pub queue_tx: Sender<BranchTask>,
    /// Shared state.
    pub shared: Arc<SharedSearch>,
}

/// Create the queue, the worker->coordinator channel, and the shared state
/// for a search with `num_workers` workers.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let shared = Arc::new(SharedSearch::default());

    // Unbounded so a branch fanning out children never blocks.
    let (queue_tx, queue_rx) = unbounded();
    let (worker_tx, coordinator_rx) = unbounded();

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            queue_rx: queue_rx.clone(),
            queue_tx: queue_tx.clone(),
            to_coordinator: worker_tx.clone(),
            shared: Arc::clone(&shared),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        queue_tx,
        shared,
    };

    (coordinator, worker_channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_is_won_once() {
        let shared = SharedSearch::default();

        assert!(!shared.winner_claimed());
        assert!(shared.try_claim());
        assert!(shared.winner_claimed());

        // Every later attempt loses the race.
        assert!(!shared.try_claim());
        assert!(!shared.try_claim());
    }

    #[test]
    fn test_stop_signal() {
        let shared = SharedSearch::default();

        assert!(!shared.should_stop());
        shared.signal_stop();
        assert!(shared.should_stop());
    }

    #[test]
    fn test_last_branch_raises_stop() {
        let shared = SharedSearch::default();
        shared.add_branch();
        shared.add_branch();

        shared.finish_branch();
        assert!(!shared.should_stop());

        shared.finish_branch();
        assert!(shared.should_stop());
    }

    #[test]
    fn test_create_channels() {
        let (coordinator, workers) = create_channels(4);
        assert_eq!(workers.len(), 4);

        // A task seeded by the coordinator is visible to a worker.
        coordinator
            .queue_tx
            .send(BranchTask {
                node: 3,
                remaining: 2,
                prefix: vec!['a'],
            })
            .unwrap();
        let task = workers[1].queue_rx.recv().unwrap();
        assert_eq!(task.node, 3);
        assert_eq!(task.remaining, 2);
        assert_eq!(task.prefix, vec!['a']);

        // Worker messages reach the coordinator.
        workers[0]
            .to_coordinator
            .send(WorkerMessage::Finished {
                worker_id: 0,
                statistics: SearchStatistics::default(),
            })
            .unwrap();
        match coordinator.from_workers.recv().unwrap() {
            WorkerMessage::Finished { worker_id, .. } => assert_eq!(worker_id, 0),
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
