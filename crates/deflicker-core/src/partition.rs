/// Deterministic round-robin partition of `count` indices into `workers`
/// disjoint queues.
///
/// Queue `q` receives every index `i` where `i % workers == q`, in ascending
/// order. The partition is purely a function of `count` and `workers`, which
/// is what lets the executor reassemble results by id after the barrier.
pub fn partition(count: usize, workers: usize) -> Vec<Vec<usize>> {
    assert!(workers >= 1, "worker count must be at least 1");
    let mut queues: Vec<Vec<usize>> = (0..workers)
        .map(|_| Vec::with_capacity(count / workers + 1))
        .collect();
    for i in 0..count {
        queues[i % workers].push(i);
    }
    queues
}

/// Distribute owned items into per-worker queues by the same round-robin
/// rule as [`partition`].
pub fn partition_items<T>(items: Vec<T>, workers: usize) -> Vec<Vec<T>> {
    assert!(workers >= 1, "worker count must be at least 1");
    let mut queues: Vec<Vec<T>> = (0..workers).map(|_| Vec::new()).collect();
    for (i, item) in items.into_iter().enumerate() {
        queues[i % workers].push(item);
    }
    queues
}
