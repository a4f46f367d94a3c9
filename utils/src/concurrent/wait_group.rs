use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Notify};

/// Counts outstanding units of work and lets a task await their completion.
#[derive(Clone)]
pub struct WaitGroup {
  inner: Arc<Inner>,
}

struct Inner {
  count: Mutex<usize>,
  notify: Notify,
}

impl Debug for WaitGroup {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WaitGroup").finish_non_exhaustive()
  }
}

impl Default for WaitGroup {
  fn default() -> Self {
    Self::new()
  }
}

impl WaitGroup {
  pub fn new() -> Self {
    WaitGroup {
      inner: Arc::new(Inner {
        count: Mutex::new(0),
        notify: Notify::new(),
      }),
    }
  }

  pub async fn add(&self, n: usize) {
    let mut count = self.inner.count.lock().await;
    *count += n;
  }

  pub async fn done(&self) {
    let mut count = self.inner.count.lock().await;
    *count = count.saturating_sub(1);
    tracing::trace!("WaitGroup::done: count = {}", *count);
    if *count == 0 {
      self.inner.notify.notify_waiters();
    }
  }

  pub async fn count(&self) -> usize {
    *self.inner.count.lock().await
  }

  pub async fn wait(&self) {
    loop {
      // registered before the check so a concurrent `done` cannot be missed
      let notified = self.inner.notify.notified();
      {
        let count = self.inner.count.lock().await;
        if *count == 0 {
          return;
        }
      }
      notified.await;
    }
  }

  /// Like [`WaitGroup::wait`] but gives up after `timeout`.
  /// Returns `true` when the count reached zero in time.
  pub async fn wait_timeout(&self, timeout: Duration) -> bool {
    tokio::time::timeout(timeout, self.wait()).await.is_ok()
  }
}
