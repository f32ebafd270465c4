//! One-to-two duplication.

#[cfg(test)]
mod tests;

use crate::{Context, LOG_TARGET, Stream, StreamConfig, or_done};

/// Duplicates every value of `input` onto two outputs.
///
/// Each value is offered to both outputs at once; whichever accepts first is then left out while
/// the other is still offered, so neither receives a value twice. When `ctx` ends mid-offer the
/// undelivered copy is abandoned. Both outputs close together once `input` is exhausted or `ctx`
/// ends. An output whose consumer went away is skipped and the other keeps receiving; once both
/// are gone the input is released.
#[must_use]
pub fn tee<T>(ctx: &Context, input: Stream<T>) -> (Stream<T>, Stream<T>)
where
  T: Clone + Send + 'static, {
  let ctx = ctx.clone();
  let (left_sender, left) = Stream::channel(&StreamConfig::default());
  let (right_sender, right) = Stream::channel(&StreamConfig::default());
  let mut values = or_done(&ctx, input);
  tokio::spawn(async move {
    let mut teed = 0_usize;
    loop {
      let value = tokio::select! {
        value = values.recv() => match value {
          | Some(value) => value,
          | None => break,
        },
        _ = async { tokio::join!(left_sender.closed(), right_sender.closed()) } => break,
      };
      let mut left_pending = !left_sender.is_closed();
      let mut right_pending = !right_sender.is_closed();
      if !left_pending && !right_pending {
        break;
      }
      while left_pending || right_pending {
        tokio::select! {
          biased;
          _ = ctx.done() => break,
          _ = left_sender.send(value.clone()), if left_pending => left_pending = false,
          _ = right_sender.send(value.clone()), if right_pending => right_pending = false,
        }
      }
      if !left_pending && !right_pending {
        teed += 1;
      }
    }
    tracing::debug!(target: LOG_TARGET, primitive = "tee", teed, cancelled = ctx.is_done(), "closing outputs");
  });
  (left, right)
}
