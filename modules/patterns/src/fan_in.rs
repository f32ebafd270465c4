//! Merging of several streams into one.


use crate::{Context, LOG_TARGET, Stream, StreamConfig, wait_group::WaitGroup};

/// Merges every input into one output, one reader task per input.
///
/// Order is kept within each input but not across inputs. The output closes once every reader has
/// exited, either because its input closed or because `ctx` ended. Values still pending in an
/// input when `ctx` ends are dropped.
#[must_use]
pub fn fan_in<T>(ctx: &Context, inputs: Vec<Stream<T>>) -> Stream<T>
where
  T: Send + 'static, {
  let (sender, multiplexed) = Stream::channel(&StreamConfig::default());
  let readers = inputs.len();
  let group = WaitGroup::new();
  group.add(readers);

  for mut input in inputs {
    let ctx = ctx.clone();
    let sender = sender.clone();
    let guard = group.guard();
    tokio::spawn(async move {
      let _guard = guard;
      loop {
        let value = tokio::select! {
          biased;
          _ = ctx.done() => return,
          value = input.recv() => match value {
            | Some(value) => value,
            | None => return,
          },
        };
        tokio::select! {
          biased;
          _ = ctx.done() => return,
          result = sender.send(value) => {
            if result.is_err() {
              return;
            }
          },
        }
      }
    });
  }

  let ctx = ctx.clone();
  tokio::spawn(async move {
    group.wait().await;
    tracing::debug!(target: LOG_TARGET, primitive = "fan_in", readers, cancelled = ctx.is_done(), "closing output");
    drop(sender);
  });
  multiplexed
}
