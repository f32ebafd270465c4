//! Confinement of work to a single task.


use crate::{LOG_TARGET, Stream, StreamConfig};

/// Runs `fns` one after another on one dedicated blocking task and streams their results.
///
/// Results arrive in the order the functions were supplied and no two functions ever run at the
/// same time. The output buffers every result, so the task never waits on the consumer, and it
/// closes after the last result. There is no cancellation: the functions always run to
/// completion.
#[must_use]
pub fn confine<T, F>(fns: Vec<F>) -> Stream<T>
where
  T: Send + 'static,
  F: FnOnce() -> T + Send + 'static, {
  let (sender, results) = Stream::channel(&StreamConfig::for_count(fns.len()));
  tokio::task::spawn_blocking(move || {
    let mut delivered = 0_usize;
    for f in fns {
      if sender.blocking_send(f()).is_err() {
        break;
      }
      delivered += 1;
    }
    tracing::debug!(target: LOG_TARGET, primitive = "confine", delivered, "closing output");
  });
  results
}
