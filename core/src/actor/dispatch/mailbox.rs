use std::collections::VecDeque;

use sigactor_utils_rs::collections::{MpscUnboundedChannelQueue, QueueBase, QueueError, QueueReader, QueueWriter};

use crate::actor::message::MessageEnvelope;


/// Writer half of a mailbox, held by the registry. Cheap to clone.
#[derive(Debug, Clone)]
pub struct MailboxSender {
  queue: MpscUnboundedChannelQueue<MessageEnvelope>,
}

impl MailboxSender {
  /// Enqueues without waiting. Fails with the envelope once the mailbox is
  /// closed.
  pub fn offer(&self, envelope: MessageEnvelope) -> Result<(), QueueError<MessageEnvelope>> {
    self.queue.offer(envelope)
  }

  pub fn is_closed(&self) -> bool {
    self.queue.is_closed()
  }

  pub fn len(&self) -> usize {
    self.queue.len().to_usize()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Reader half of a mailbox, owned by the actor's dispatch loop.
///
/// Envelopes that arrive before the actor is initialized are stashed and
/// handed out again, in arrival order, once the mailbox is resumed.
#[derive(Debug)]
pub struct Mailbox {
  queue: MpscUnboundedChannelQueue<MessageEnvelope>,
  stash: VecDeque<MessageEnvelope>,
  suspended: bool,
}

impl Mailbox {
  pub fn new() -> (Mailbox, MailboxSender) {
    let queue = MpscUnboundedChannelQueue::new();
    let sender = MailboxSender { queue: queue.clone() };
    let mailbox = Mailbox {
      queue,
      stash: VecDeque::new(),
      suspended: false,
    };
    (mailbox, sender)
  }

  /// Waits for the next envelope. Returns `None` once closed and drained.
  pub async fn receive(&mut self) -> Option<MessageEnvelope> {
    if !self.suspended {
      if let Some(envelope) = self.stash.pop_front() {
        return Some(envelope);
      }
    }
    self.queue.take().await.ok()
  }

  pub fn stash(&mut self, envelope: MessageEnvelope) {
    self.stash.push_back(envelope);
  }

  pub fn stashed(&self) -> usize {
    self.stash.len()
  }

  pub fn suspend(&mut self) {
    self.suspended = true;
  }

  pub fn resume(&mut self) {
    self.suspended = false;
  }

  /// Closes the mailbox and drops everything still queued or stashed.
  pub async fn close(&mut self) -> usize {
    let stashed = self.stash.len();
    self.stash.clear();
    stashed + self.queue.clean_up().await
  }
}
