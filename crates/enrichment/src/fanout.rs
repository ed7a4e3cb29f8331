//! Concurrent per-item enrichment.

use std::future::Future;

use futures::future::try_join_all;

/// Run `f` for every key concurrently and collect the results in key order.
///
/// - Unbounded: all futures are polled together; callers keep `keys` small
///   (cart lines, a handful of recommendations).
/// - Ordered: `result[i]` always belongs to the `i`-th key, whatever order the
///   calls complete in.
/// - All-or-nothing: the first error is returned and no partial list is ever
///   produced. Calls still in flight at that point are dropped.
pub async fn fan_out<K, T, E, F, Fut>(keys: impl IntoIterator<Item = K>, f: F) -> Result<Vec<T>, E>
where
    F: FnMut(K) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let pending: Vec<Fut> = keys.into_iter().map(f).collect();
    tracing::debug!(calls = pending.len(), "fan-out");
    try_join_all(pending).await
}
