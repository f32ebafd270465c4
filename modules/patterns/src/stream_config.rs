//! Stream capacity configuration.


use crate::PatternError;

/// Capacity settings for a [`Stream`](crate::Stream).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamConfig {
  capacity: usize,
}

impl StreamConfig {
  /// Capacity used by every primitive for its outputs, the closest tokio gets to unbuffered.
  pub const DEFAULT_CAPACITY: usize = 1;

  /// Creates a configuration holding up to `capacity` undelivered values.
  ///
  /// # Errors
  ///
  /// Returns [`PatternError::ZeroCapacity`] when `capacity` is zero.
  pub const fn new(capacity: usize) -> Result<Self, PatternError> {
    if capacity == 0 {
      return Err(PatternError::ZeroCapacity);
    }
    Ok(Self { capacity })
  }

  /// Creates a configuration large enough for `count` values, never smaller than the default.
  #[must_use]
  pub const fn for_count(count: usize) -> Self {
    if count > Self::DEFAULT_CAPACITY { Self { capacity: count } } else { Self::unbuffered() }
  }

  /// Returns the configured capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  const fn unbuffered() -> Self {
    Self { capacity: Self::DEFAULT_CAPACITY }
  }
}

impl Default for StreamConfig {
  fn default() -> Self {
    Self::unbuffered()
  }
}
