//! Cardinality bound.


use crate::{Context, LOG_TARGET, Stream, StreamConfig};

/// Forwards at most `num` values from `input`, in order, then closes.
///
/// The output closes early when `input` closes or `ctx` ends. A bound of zero closes the output
/// without reading from `input`.
#[must_use]
pub fn take<T>(ctx: &Context, mut input: Stream<T>, num: usize) -> Stream<T>
where
  T: Send + 'static, {
  let ctx = ctx.clone();
  let (sender, taken) = Stream::channel(&StreamConfig::default());
  tokio::spawn(async move {
    let mut forwarded = 0_usize;
    while forwarded < num {
      let value = tokio::select! {
        biased;
        _ = ctx.done() => break,
        value = input.recv() => match value {
          | Some(value) => value,
          | None => break,
        },
      };
      tokio::select! {
        biased;
        _ = ctx.done() => break,
        result = sender.send(value) => {
          if result.is_err() {
            break;
          }
        },
      }
      forwarded += 1;
    }
    tracing::debug!(target: LOG_TARGET, primitive = "take", forwarded, bound = num, "closing output");
  });
  taken
}
