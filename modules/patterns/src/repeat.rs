//! Cyclic value generator.


use crate::{Context, LOG_TARGET, Stream, StreamConfig};

/// Streams `values` cyclically until `ctx` ends or the consumer goes away.
///
/// The context is checked before every write. An empty `values` produces nothing and keeps the
/// output open until `ctx` ends.
#[must_use]
pub fn repeat<T>(ctx: &Context, values: Vec<T>) -> Stream<T>
where
  T: Clone + Send + 'static, {
  let ctx = ctx.clone();
  let (sender, stream) = Stream::channel(&StreamConfig::default());
  tokio::spawn(async move {
    if values.is_empty() {
      tracing::warn!(target: LOG_TARGET, primitive = "repeat", "empty seed, output stays open until cancellation");
      ctx.done().await;
      return;
    }
    let mut sent = 0_usize;
    let mut index = 0_usize;
    loop {
      let value = values[index].clone();
      index = (index + 1) % values.len();
      tokio::select! {
        biased;
        _ = ctx.done() => break,
        result = sender.send(value) => {
          if result.is_err() {
            break;
          }
          sent += 1;
        },
      }
    }
    tracing::debug!(target: LOG_TARGET, primitive = "repeat", sent, cancelled = ctx.is_done(), "closing output");
  });
  stream
}
