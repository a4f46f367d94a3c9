use std::fmt::{Display, Formatter};
use std::sync::Arc;

use crate::actor::message::message::Message;

/// Shared, immutable reference to a message value.
#[derive(Debug, Clone)]
pub struct MessageHandle(Arc<dyn Message>);

impl MessageHandle {
  pub fn new_arc(message: Arc<dyn Message>) -> Self {
    MessageHandle(message)
  }

  pub fn new<T: Message>(message: T) -> Self {
    MessageHandle(Arc::new(message))
  }

  pub fn as_typed<T: Message>(&self) -> Option<&T> {
    self.0.as_any().downcast_ref::<T>()
  }

  pub fn to_typed<T: Message + Clone>(&self) -> Option<T> {
    self.as_typed::<T>().cloned()
  }

  pub fn is_typed<T: Message>(&self) -> bool {
    self.0.as_any().is::<T>()
  }

  pub fn get_type_name(&self) -> String {
    self.0.get_type_name()
  }

  pub fn as_message(&self) -> &dyn Message {
    self.0.as_ref()
  }
}

impl PartialEq for MessageHandle {
  fn eq(&self, other: &Self) -> bool {
    self.0.eq_message(other.0.as_ref())
  }
}

impl Display for MessageHandle {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}", self.0)
  }
}

// Coherent only as long as MessageHandle itself does not implement Message.
impl<M: Message> From<M> for MessageHandle {
  fn from(message: M) -> Self {
    MessageHandle::new(message)
  }
}

static_assertions::assert_impl_all!(MessageHandle: Send, Sync);
