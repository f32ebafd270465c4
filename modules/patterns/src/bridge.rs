//! Stream-of-streams flattening.


use crate::{Context, LOG_TARGET, Stream, StreamConfig, or_done};

/// Flattens a stream of streams into one, draining each inner stream before the next.
///
/// Inner streams are read through [`or_done`] and the outer stream is read racing `ctx`, so
/// cancellation interrupts either wait. The output closes when the outer stream is exhausted or
/// `ctx` ends; a partially drained inner stream contributes nothing further.
#[must_use]
pub fn bridge<T>(ctx: &Context, mut streams: Stream<Stream<T>>) -> Stream<T>
where
  T: Send + 'static, {
  let ctx = ctx.clone();
  let (sender, values) = Stream::channel(&StreamConfig::default());
  tokio::spawn(async move {
    let mut bridged = 0_usize;
    'outer: loop {
      let stream = tokio::select! {
        biased;
        _ = ctx.done() => break,
        stream = streams.recv() => match stream {
          | Some(stream) => stream,
          | None => break,
        },
      };
      let mut inner = or_done(&ctx, stream);
      while let Some(value) = inner.recv().await {
        tokio::select! {
          biased;
          _ = ctx.done() => break 'outer,
          result = sender.send(value) => {
            if result.is_err() {
              break 'outer;
            }
          },
        }
      }
      bridged += 1;
    }
    tracing::debug!(target: LOG_TARGET, primitive = "bridge", bridged, cancelled = ctx.is_done(), "closing output");
  });
  values
}
