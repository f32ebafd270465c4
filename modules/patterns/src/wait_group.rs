//! Completion tracker for groups of tasks.


use std::sync::{
  Arc,
  atomic::{AtomicUsize, Ordering},
};

use tokio::sync::Notify;

/// Synchronization primitive for waiting on multiple concurrent tasks.
#[derive(Clone, Debug, Default)]
pub(crate) struct WaitGroup {
  inner: Arc<WaitGroupInner>,
}

#[derive(Debug, Default)]
struct WaitGroupInner {
  count:  AtomicUsize,
  notify: Notify,
}

impl WaitGroup {
  /// Creates a new wait group with counter initialised to 0.
  #[must_use]
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Adds the specified number to the counter.
  pub(crate) fn add(&self, n: usize) {
    self.inner.count.fetch_add(n, Ordering::AcqRel);
  }

  /// Decrements the counter by 1, waking waiters when it reaches 0.
  pub(crate) fn done(&self) {
    let previous = self
      .inner
      .count
      .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| Some(count.saturating_sub(1)))
      .unwrap_or_else(core::convert::identity);
    if previous <= 1 {
      self.inner.notify.notify_waiters();
    }
  }

  /// Returns a guard that calls [`WaitGroup::done`] when dropped.
  #[must_use]
  pub(crate) fn guard(&self) -> WaitGroupGuard {
    WaitGroupGuard { group: self.clone() }
  }

  /// Returns the current counter value.
  #[must_use]
  pub(crate) fn count(&self) -> usize {
    self.inner.count.load(Ordering::Acquire)
  }

  /// Asynchronously waits until the counter reaches 0.
  pub(crate) async fn wait(&self) {
    loop {
      let notified = self.inner.notify.notified();
      tokio::pin!(notified);
      notified.as_mut().enable();
      if self.count() == 0 {
        return;
      }
      notified.await;
    }
  }
}

/// Marks one task of a [`WaitGroup`] as finished on drop, including during unwinding.
#[derive(Debug)]
pub(crate) struct WaitGroupGuard {
  group: WaitGroup,
}

impl Drop for WaitGroupGuard {
  fn drop(&mut self) {
    self.group.done();
  }
}
