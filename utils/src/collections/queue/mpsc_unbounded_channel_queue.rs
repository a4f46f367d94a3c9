use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc::error::{SendError, TryRecvError};
use tokio::sync::{mpsc, Mutex};

use crate::collections::element::Element;
use crate::collections::{QueueBase, QueueError, QueueReader, QueueSize, QueueWriter};

#[cfg(test)]
mod tests;

#[derive(Debug)]
struct MpscUnboundedChannelQueueInner<E> {
  receiver: Mutex<mpsc::UnboundedReceiver<E>>,
  count: AtomicUsize,
  closed: AtomicBool,
}

/// Unbounded FIFO over a tokio MPSC channel.
///
/// Clones share the same channel: any clone may offer, and the single
/// consumer awaits with [`QueueReader::take`].
#[derive(Debug, Clone)]
pub struct MpscUnboundedChannelQueue<E> {
  sender: mpsc::UnboundedSender<E>,
  inner: Arc<MpscUnboundedChannelQueueInner<E>>,
}

impl<E> MpscUnboundedChannelQueue<E> {
  pub fn new() -> Self {
    let (sender, receiver) = mpsc::unbounded_channel();
    Self {
      sender,
      inner: Arc::new(MpscUnboundedChannelQueueInner {
        receiver: Mutex::new(receiver),
        count: AtomicUsize::new(0),
        closed: AtomicBool::new(false),
      }),
    }
  }

  fn decrement_count(&self) {
    let _ = self
      .inner
      .count
      .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |c| Some(c.saturating_sub(1)));
  }
}

impl<E> Default for MpscUnboundedChannelQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E: Element> QueueBase<E> for MpscUnboundedChannelQueue<E> {
  fn len(&self) -> QueueSize {
    QueueSize::Limited(self.inner.count.load(Ordering::SeqCst))
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::Limitless
  }

  fn is_closed(&self) -> bool {
    self.inner.closed.load(Ordering::SeqCst)
  }
}

impl<E: Element> QueueWriter<E> for MpscUnboundedChannelQueue<E> {
  fn offer(&self, element: E) -> Result<(), QueueError<E>> {
    if self.is_closed() {
      return Err(QueueError::OfferError(element));
    }
    // count first so a fast consumer never observes a negative length
    self.inner.count.fetch_add(1, Ordering::SeqCst);
    match self.sender.send(element) {
      Ok(()) => Ok(()),
      Err(SendError(element)) => {
        self.decrement_count();
        Err(QueueError::OfferError(element))
      }
    }
  }
}

#[async_trait]
impl<E: Element> QueueReader<E> for MpscUnboundedChannelQueue<E> {
  async fn poll(&mut self) -> Result<Option<E>, QueueError<E>> {
    let mut receiver = self.inner.receiver.lock().await;
    match receiver.try_recv() {
      Ok(element) => {
        self.decrement_count();
        Ok(Some(element))
      }
      Err(TryRecvError::Empty) if self.is_closed() => Err(QueueError::PollError),
      Err(TryRecvError::Empty) => Ok(None),
      Err(TryRecvError::Disconnected) => Err(QueueError::PollError),
    }
  }

  async fn take(&mut self) -> Result<E, QueueError<E>> {
    let mut receiver = self.inner.receiver.lock().await;
    match receiver.recv().await {
      Some(element) => {
        self.decrement_count();
        Ok(element)
      }
      None => Err(QueueError::PollError),
    }
  }

  async fn clean_up(&mut self) -> usize {
    self.inner.closed.store(true, Ordering::SeqCst);
    let mut receiver = self.inner.receiver.lock().await;
    receiver.close();
    let mut dropped = 0;
    while receiver.try_recv().is_ok() {
      dropped += 1;
    }
    self.inner.count.store(0, Ordering::SeqCst);
    tracing::trace!("MpscUnboundedChannelQueue::clean_up: dropped = {}", dropped);
    dropped
  }
}
