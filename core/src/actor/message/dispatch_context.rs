use std::fmt::{Display, Formatter};

use crate::actor::core::Pid;
use crate::actor::message::MessageHandle;

/// What the root receives when a message could not be dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchContext {
  pub original_sender: Pid,
  pub original_recipient: Pid,
  pub message: MessageHandle,
}

impl DispatchContext {
  pub fn new(original_sender: Pid, original_recipient: Pid, message: MessageHandle) -> Self {
    Self {
      original_sender,
      original_recipient,
      message,
    }
  }
}

impl Display for DispatchContext {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "MsgCtx(original_sender={}, original_recipient={}, message={})",
      self.original_sender, self.original_recipient, self.message
    )
  }
}
