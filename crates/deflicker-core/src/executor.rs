use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::error::{DeflickerError, Result};
use crate::frame::Frame;
use crate::partition::partition_items;

/// Worker pool for the embarrassingly-parallel pipeline phases.
///
/// Each phase moves the registry's frames into per-worker queues, applies a
/// fallible per-frame operation to every queue concurrently, then reassembles
/// the completed frames in id order once all workers have returned. Workers
/// own their queue's frames outright and never share mutable state.
pub struct ParallelExecutor {
    pool: rayon::ThreadPool,
    workers: usize,
}

impl ParallelExecutor {
    pub fn new(workers: usize) -> Result<Self> {
        if workers < 1 {
            return Err(DeflickerError::Config(
                "worker count must be at least 1".into(),
            ));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| DeflickerError::Config(format!("failed to build worker pool: {e}")))?;
        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `op` over every frame, one worker per queue.
    ///
    /// Blocks until every queue has returned, then reassembles by id. Any
    /// operation error aborts the whole phase; there is no partial
    /// aggregation, since a missing frame would silently corrupt the global
    /// smoothing downstream. `on_progress` receives the running completion
    /// count; it is advisory and has no effect on ordering.
    pub fn run<F>(
        &self,
        frames: Vec<Frame>,
        op: F,
        on_progress: impl Fn(usize) + Send + Sync,
    ) -> Result<Vec<Frame>>
    where
        F: Fn(Frame) -> Result<Frame> + Send + Sync,
    {
        let total = frames.len();
        let queues = partition_items(frames, self.workers);
        let done = AtomicUsize::new(0);

        let completed: Vec<Vec<Frame>> = self.pool.install(|| {
            queues
                .into_par_iter()
                .map(|queue| {
                    queue
                        .into_iter()
                        .map(|frame| {
                            let out = op(frame)?;
                            on_progress(done.fetch_add(1, Ordering::Relaxed) + 1);
                            Ok(out)
                        })
                        .collect::<Result<Vec<Frame>>>()
                })
                .collect::<Result<Vec<Vec<Frame>>>>()
        })?;

        reassemble(completed, total)
    }
}

/// Scatter completed queues back into id order, verifying the partition came
/// back whole: every id in 0..total exactly once.
fn reassemble(completed: Vec<Vec<Frame>>, total: usize) -> Result<Vec<Frame>> {
    let mut slots: Vec<Option<Frame>> = (0..total).map(|_| None).collect();
    for frame in completed.into_iter().flatten() {
        let id = frame.id;
        if id >= total {
            return Err(DeflickerError::WorkerFailure(format!(
                "worker returned unknown frame id {id} (total {total})"
            )));
        }
        if slots[id].is_some() {
            return Err(DeflickerError::WorkerFailure(format!(
                "worker returned frame id {id} twice"
            )));
        }
        slots[id] = Some(frame);
    }
    slots
        .into_iter()
        .enumerate()
        .map(|(id, slot)| {
            slot.ok_or_else(|| {
                DeflickerError::WorkerFailure(format!("no result returned for frame id {id}"))
            })
        })
        .collect()
}
