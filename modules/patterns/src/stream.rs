//! Closable stream handle.


use tokio::sync::mpsc::{self, Receiver, Sender, error::TryRecvError};

use crate::StreamConfig;

/// Receiving end of an ordered, closable channel.
///
/// A stream is closed once every [`Sender`] feeding it has been dropped. After closure
/// [`Stream::recv`] keeps returning `None`; values buffered before closure are still delivered.
#[derive(Debug)]
pub struct Stream<T> {
  receiver: Receiver<T>,
}

impl<T> Stream<T> {
  /// Creates a stream and the sender that feeds it.
  #[must_use]
  pub fn channel(config: &StreamConfig) -> (Sender<T>, Self) {
    let (sender, receiver) = mpsc::channel(config.capacity());
    (sender, Self { receiver })
  }

  /// Creates an already closed stream that yields `values` in order.
  #[must_use]
  pub fn ready<I>(values: I) -> Self
  where
    I: IntoIterator<Item = T>, {
    let values: Vec<T> = values.into_iter().collect();
    let (sender, stream) = Self::channel(&StreamConfig::for_count(values.len()));
    for value in values {
      // The channel was sized for every value, so a full buffer cannot happen here.
      if sender.try_send(value).is_err() {
        break;
      }
    }
    stream
  }

  /// Receives the next value, or `None` once the stream is closed and drained.
  pub async fn recv(&mut self) -> Option<T> {
    self.receiver.recv().await
  }

  /// Returns a value that is already buffered without waiting.
  #[must_use]
  pub fn try_recv(&mut self) -> Option<T> {
    match self.receiver.try_recv() {
      | Ok(value) => Some(value),
      | Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
    }
  }

  /// Drains the stream until it closes.
  pub async fn collect(mut self) -> Vec<T> {
    let mut values = Vec::new();
    while let Some(value) = self.receiver.recv().await {
      values.push(value);
    }
    values
  }

  /// Returns true once every sender is gone. Buffered values may still be pending.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.receiver.is_closed()
  }

  /// Unwraps the underlying tokio receiver.
  #[must_use]
  pub fn into_inner(self) -> Receiver<T> {
    self.receiver
  }
}

impl<T> From<Receiver<T>> for Stream<T> {
  fn from(receiver: Receiver<T>) -> Self {
    Self { receiver }
  }
}
