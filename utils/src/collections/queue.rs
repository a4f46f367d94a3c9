use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

mod mpsc_unbounded_channel_queue;

pub use self::mpsc_unbounded_channel_queue::*;

use crate::collections::element::Element;

/// An error that occurs when a queue operation fails.
#[derive(Error, Debug, PartialEq)]
pub enum QueueError<E> {
  #[error("Failed to offer an element: {0:?}")]
  OfferError(E),
  #[error("Failed to poll an element, the queue is closed")]
  PollError,
}

impl<E> QueueError<E> {
  /// Takes back the element a failed `offer` was given.
  pub fn into_element(self) -> Option<E> {
    match self {
      QueueError::OfferError(e) => Some(e),
      _ => None,
    }
  }
}

/// The size of the queue.
#[derive(Debug, Clone, Copy)]
pub enum QueueSize {
  /// The queue has no capacity limit.
  Limitless,
  /// The queue has a capacity limit.
  Limited(usize),
}

impl QueueSize {
  pub fn to_usize(&self) -> usize {
    match self {
      QueueSize::Limitless => usize::MAX,
      QueueSize::Limited(c) => *c,
    }
  }
}

impl PartialEq<Self> for QueueSize {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (QueueSize::Limitless, QueueSize::Limitless) => true,
      (QueueSize::Limited(l), QueueSize::Limited(r)) => l == r,
      _ => false,
    }
  }
}

/// Size bookkeeping shared by the writer and reader halves of a queue.
pub trait QueueBase<E: Element>: Debug + Send + Sync {
  fn len(&self) -> QueueSize;

  fn capacity(&self) -> QueueSize;

  fn is_empty(&self) -> bool {
    self.len() == QueueSize::Limited(0)
  }

  /// Returns `true` once the queue stopped accepting elements.
  fn is_closed(&self) -> bool;
}

/// The producing side. Offering never waits: it either enqueues right away or
/// hands the element back inside the error.
pub trait QueueWriter<E: Element>: QueueBase<E> {
  fn offer(&self, element: E) -> Result<(), QueueError<E>>;
}

/// The consuming side.
#[async_trait]
pub trait QueueReader<E: Element>: QueueBase<E> {
  /// Retrieves and removes the head of the queue, `Ok(None)` when it is empty.
  async fn poll(&mut self) -> Result<Option<E>, QueueError<E>>;

  /// Waits until an element is available and removes it.
  ///
  /// # Return Value
  /// - `Ok(element)` - the oldest element.
  /// - `Err(QueueError::PollError)` - the queue was closed and fully drained.
  async fn take(&mut self) -> Result<E, QueueError<E>>;

  /// Closes the queue and drops whatever is still buffered, returning how
  /// many elements were discarded.
  async fn clean_up(&mut self) -> usize;
}
