use sigactor_message_derive_rs::Message;

use crate::actor::message::{Message, MessageHandle};

/// Writes an observable property by name on the receiving actor.
#[derive(Debug, Clone, PartialEq, Message)]
pub struct Publish {
  name: String,
  value: MessageHandle,
}

impl Publish {
  pub fn new(name: impl Into<String>, value: impl Into<MessageHandle>) -> Self {
    Self {
      name: name.into(),
      value: value.into(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn value(&self) -> &MessageHandle {
    &self.value
  }
}
