//! Racing of done signals.


use crate::{LOG_TARGET, Stream, StreamConfig};

/// Combines done signals into one that closes as soon as any input closes or yields a value.
///
/// Returns `None` for no inputs and the sole input unchanged for one. Otherwise a single task
/// races the inputs and closes the returned stream when the first one resolves. With more than
/// three inputs the task races the first three against a nested `or` over the rest, and hands
/// that nested `or` a signal of its own exit so the nested tasks wind down with it.
///
/// Inputs that lose the race are dropped with the task; their producers are not cancelled and
/// keep running until they notice on their own.
#[must_use]
pub fn or<T>(mut signals: Vec<Stream<T>>) -> Option<Stream<T>>
where
  T: Send + 'static, {
  match signals.len() {
    | 0 => return None,
    | 1 => return signals.pop(),
    | _ => {},
  }
  let (sender, derived) = Stream::channel(&StreamConfig::default());
  tokio::spawn(async move {
    let inputs = signals.len();
    race(signals).await;
    tracing::debug!(target: LOG_TARGET, primitive = "or", inputs, "closing output");
    drop(sender);
  });
  Some(derived)
}

async fn race<T>(mut signals: Vec<Stream<T>>)
where
  T: Send + 'static, {
  let mut rest = if signals.len() > 3 { signals.split_off(3) } else { Vec::new() };
  let mut head = signals.into_iter();
  let (Some(mut first), Some(mut second)) = (head.next(), head.next()) else {
    return;
  };
  let Some(mut third) = head.next() else {
    tokio::select! {
      _ = first.recv() => {},
      _ = second.recv() => {},
    }
    return;
  };

  // Closes when this race returns, releasing the nested race below.
  let (_exit, exit_signal) = Stream::channel(&StreamConfig::default());
  rest.push(exit_signal);
  let Some(mut nested) = or(rest) else {
    return;
  };
  tokio::select! {
    _ = first.recv() => {},
    _ = second.recv() => {},
    _ = third.recv() => {},
    _ = nested.recv() => {},
  }
}
