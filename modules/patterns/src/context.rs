//! Cooperative cancellation context.


use std::{
  sync::{
    Arc, Mutex, PoisonError, Weak,
    atomic::{AtomicU8, Ordering},
  },
  time::Duration,
};

use tokio::{sync::Notify, time::Instant};

use crate::ContextError;

const ACTIVE: u8 = 0;

/// Shared, one-way latching cancellation signal.
///
/// Clones observe the same state. Once done, a context stays done and reports the first cause
/// that ended it. Derived contexts end with their parent but never end it.
#[derive(Clone, Debug)]
pub struct Context {
  inner: Arc<ContextInner>,
}

#[derive(Debug)]
struct ContextInner {
  cause:    AtomicU8,
  deadline: Option<Instant>,
  notify:   Notify,
  children: Mutex<Vec<Weak<ContextInner>>>,
}

impl Context {
  /// Creates a root context that ends only when cancelled.
  #[must_use]
  pub fn new() -> Self {
    Self { inner: Arc::new(ContextInner::new(None)) }
  }

  /// Derives a child context that can be cancelled on its own.
  #[must_use]
  pub fn with_cancel(&self) -> Self {
    self.derive(self.inner.deadline)
  }

  /// Derives a child context that also ends once `timeout` has elapsed.
  ///
  /// A timeout too large to be represented as an instant adds no deadline of its own.
  #[must_use]
  pub fn with_timeout(&self, timeout: Duration) -> Self {
    match Instant::now().checked_add(timeout) {
      | Some(deadline) => self.with_deadline(deadline),
      | None => self.with_cancel(),
    }
  }

  /// Derives a child context that also ends at `deadline`, or earlier if the parent does.
  #[must_use]
  pub fn with_deadline(&self, deadline: Instant) -> Self {
    let effective = match self.inner.deadline {
      | Some(inherited) if inherited < deadline => inherited,
      | _ => deadline,
    };
    self.derive(Some(effective))
  }

  /// Cancels this context and every context derived from it.
  ///
  /// Cancelling an already ended context has no effect.
  pub fn cancel(&self) {
    self.inner.finish(ContextError::Canceled);
  }

  /// Returns true once the context has ended. Never blocks.
  #[must_use]
  pub fn is_done(&self) -> bool {
    if self.inner.cause.load(Ordering::Acquire) != ACTIVE {
      return true;
    }
    match self.inner.deadline {
      | Some(deadline) if Instant::now() >= deadline => {
        self.inner.finish(ContextError::DeadlineExceeded);
        true
      },
      | _ => false,
    }
  }

  /// Waits until the context has ended.
  pub async fn done(&self) {
    loop {
      let notified = self.inner.notify.notified();
      tokio::pin!(notified);
      notified.as_mut().enable();
      if self.is_done() {
        return;
      }
      match self.inner.deadline {
        | Some(deadline) => {
          tokio::select! {
            _ = &mut notified => {},
            _ = tokio::time::sleep_until(deadline) => {},
          }
        },
        | None => notified.await,
      }
    }
  }

  /// Returns why the context ended, or `None` while it is still live.
  #[must_use]
  pub fn error(&self) -> Option<ContextError> {
    if !self.is_done() {
      return None;
    }
    ContextError::from_code(self.inner.cause.load(Ordering::Acquire))
  }

  /// Returns the instant at which the context ends on its own, if any.
  #[must_use]
  pub fn deadline(&self) -> Option<Instant> {
    self.inner.deadline
  }

  fn derive(&self, deadline: Option<Instant>) -> Self {
    let child = Arc::new(ContextInner::new(deadline));
    {
      let mut children = self.inner.children.lock().unwrap_or_else(PoisonError::into_inner);
      children.retain(|weak| weak.strong_count() > 0);
      children.push(Arc::downgrade(&child));
    }
    // The parent may have ended before the child was registered.
    if let Some(cause) = ContextError::from_code(self.inner.cause.load(Ordering::Acquire)) {
      child.finish(cause);
    }
    Self { inner: child }
  }
}

impl Default for Context {
  fn default() -> Self {
    Self::new()
  }
}

impl ContextInner {
  fn new(deadline: Option<Instant>) -> Self {
    Self { cause: AtomicU8::new(ACTIVE), deadline, notify: Notify::new(), children: Mutex::new(Vec::new()) }
  }

  fn finish(&self, cause: ContextError) {
    if self.cause.compare_exchange(ACTIVE, cause.to_code(), Ordering::AcqRel, Ordering::Acquire).is_err() {
      return;
    }
    self.notify.notify_waiters();
    let children = core::mem::take(&mut *self.children.lock().unwrap_or_else(PoisonError::into_inner));
    for child in children.iter().filter_map(Weak::upgrade) {
      child.finish(cause);
    }
  }
}
