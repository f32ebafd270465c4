//! Cancellation-safe passthrough.


use crate::{Context, LOG_TARGET, Stream, StreamConfig};

/// Forwards `input` until it closes or `ctx` ends, whichever comes first.
///
/// Both the read and the write race `ctx`, so a consumer is never left waiting on an input that
/// cannot itself be cancelled. A value whose write is pending when `ctx` ends is dropped. Dropping
/// the output releases `input`.
#[must_use]
pub fn or_done<T>(ctx: &Context, mut input: Stream<T>) -> Stream<T>
where
  T: Send + 'static, {
  let ctx = ctx.clone();
  let (sender, values) = Stream::channel(&StreamConfig::default());
  tokio::spawn(async move {
    let mut forwarded = 0_usize;
    loop {
      let value = tokio::select! {
        biased;
        _ = ctx.done() => break,
        _ = sender.closed() => break,
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
          forwarded += 1;
        },
      }
    }
    tracing::debug!(target: LOG_TARGET, primitive = "or_done", forwarded, cancelled = ctx.is_done(), "closing output");
  });
  values
}
