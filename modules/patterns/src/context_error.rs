//! Reasons a context ends.


/// Cause recorded when a [`Context`](crate::Context) becomes done.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextError {
  /// The context, or one of its ancestors, was cancelled explicitly.
  #[error("context canceled")]
  Canceled,
  /// The context deadline elapsed.
  #[error("context deadline exceeded")]
  DeadlineExceeded,
}

impl ContextError {
  pub(crate) const fn to_code(self) -> u8 {
    match self {
      | Self::Canceled => 1,
      | Self::DeadlineExceeded => 2,
    }
  }

  pub(crate) const fn from_code(code: u8) -> Option<Self> {
    match code {
      | 1 => Some(Self::Canceled),
      | 2 => Some(Self::DeadlineExceeded),
      | _ => None,
    }
  }
}
