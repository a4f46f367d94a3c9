use sigactor_utils_rs::collections::Element;

use crate::actor::core::Pid;
use crate::actor::message::{MessageHandle, SignalMessage};

/// A `(sender, message)` pair as it sits in a mailbox.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEnvelope {
  sender: Pid,
  message: MessageHandle,
}

impl Element for MessageEnvelope {}

impl MessageEnvelope {
  pub fn new(sender: Pid, message: MessageHandle) -> Self {
    Self { sender, message }
  }

  pub fn sender(&self) -> Pid {
    self.sender
  }

  pub fn message(&self) -> &MessageHandle {
    &self.message
  }

  pub fn into_parts(self) -> (Pid, MessageHandle) {
    (self.sender, self.message)
  }

  pub fn runs_before_init(&self) -> bool {
    self
      .message
      .as_typed::<SignalMessage>()
      .is_some_and(|m| m.signal().runs_before_init())
  }
}
