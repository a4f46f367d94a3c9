use std::sync::Arc;

use tokio::sync::Notify;

use crate::actor::core::{ActorHandle, Pid};
use crate::actor::dispatch::MailboxSender;
use crate::actor::message::MessageEnvelope;
use crate::actor::ActorSystemError;

/// Registry entry for one live actor: its read-only record, the writer half
/// of its mailbox and a switch that stops its loop without a message.
#[derive(Debug, Clone)]
pub struct ActorProcess {
  handle: ActorHandle,
  mailbox: MailboxSender,
  kill: Arc<Notify>,
}

impl ActorProcess {
  pub fn new(handle: ActorHandle, mailbox: MailboxSender, kill: Arc<Notify>) -> Self {
    Self { handle, mailbox, kill }
  }

  pub fn pid(&self) -> Pid {
    self.handle.pid()
  }

  pub fn handle(&self) -> &ActorHandle {
    &self.handle
  }

  /// Refuses delivery once the actor is stopping; its loop no longer reads
  /// the mailbox.
  pub fn send(&self, envelope: MessageEnvelope) -> Result<(), ActorSystemError> {
    if self.handle.state().is_stopping() {
      return Err(ActorSystemError::ActorNotFound(self.pid()));
    }
    self
      .mailbox
      .offer(envelope)
      .map_err(|_| ActorSystemError::ActorNotFound(self.pid()))
  }

  /// Stops the dispatch loop at its next await point. Hooks are not run.
  pub fn kill(&self) {
    self.kill.notify_one();
  }
}
