use rayon::prelude::*;

/// Run `body` once per replica, optionally in parallel.
///
/// Each replica owns its lattice and RNG, so the tasks share no mutable
/// state. When `sequential` is true replicas are processed in order on the
/// current thread (no rayon overhead, best when an outer level of
/// parallelism already saturates all physical cores). Output order matches
/// replica order in both modes.
pub fn par_over_replicas<T, R>(
    replicas: &mut [T],
    sequential: bool,
    body: impl Fn(usize, &mut T) -> R + Send + Sync,
) -> Vec<R>
where
    T: Send,
    R: Send,
{
    if sequential {
        replicas
            .iter_mut()
            .enumerate()
            .map(|(idx, replica)| body(idx, replica))
            .collect()
    } else {
        replicas
            .par_iter_mut()
            .enumerate()
            .map(|(idx, replica)| body(idx, replica))
            .collect()
    }
}
