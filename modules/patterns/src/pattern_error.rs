//! Configuration error definitions.


/// Errors produced while configuring streams.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
  /// A stream was configured without room for a single value.
  #[error("stream capacity must be greater than zero")]
  ZeroCapacity,
}
