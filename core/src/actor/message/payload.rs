use std::fmt::{Display, Formatter};

use crate::actor::core::Pid;
use crate::actor::message::{DispatchContext, Message, MessageHandle};

/// Argument carried by a [`SignalMessage`](crate::actor::message::SignalMessage)
/// or a base message.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
  #[default]
  Empty,
  Pid(Pid),
  Text(String),
  Context(DispatchContext),
  Value(MessageHandle),
}

impl Payload {
  pub fn value<T: Message>(value: T) -> Self {
    Payload::Value(MessageHandle::new(value))
  }

  pub fn is_empty(&self) -> bool {
    matches!(self, Payload::Empty)
  }

  pub fn as_pid(&self) -> Option<Pid> {
    match self {
      Payload::Pid(pid) => Some(*pid),
      _ => None,
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Payload::Text(text) => Some(text),
      _ => None,
    }
  }

  pub fn as_context(&self) -> Option<&DispatchContext> {
    match self {
      Payload::Context(ctx) => Some(ctx),
      _ => None,
    }
  }

  pub fn as_value(&self) -> Option<&MessageHandle> {
    match self {
      Payload::Value(value) => Some(value),
      _ => None,
    }
  }

  pub fn to_typed<T: Message + Clone>(&self) -> Option<T> {
    self.as_value().and_then(|v| v.to_typed::<T>())
  }

  /// Reads an integral value out of `Value`, accepting the integer types a
  /// caller is likely to have used.
  pub fn as_i64(&self) -> Option<i64> {
    let value = self.as_value()?;
    if let Some(v) = value.as_typed::<i64>() {
      return Some(*v);
    }
    if let Some(v) = value.as_typed::<i32>() {
      return Some(i64::from(*v));
    }
    if let Some(v) = value.as_typed::<u8>() {
      return Some(i64::from(*v));
    }
    if let Some(v) = value.as_typed::<u32>() {
      return Some(i64::from(*v));
    }
    value.as_typed::<u64>().and_then(|v| i64::try_from(*v).ok())
  }
}

impl Display for Payload {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Payload::Empty => write!(f, "None"),
      Payload::Pid(pid) => write!(f, "{}", pid),
      Payload::Text(text) => write!(f, "{:?}", text),
      Payload::Context(ctx) => write!(f, "{}", ctx),
      Payload::Value(value) => write!(f, "{}", value),
    }
  }
}

impl From<Pid> for Payload {
  fn from(pid: Pid) -> Self {
    Payload::Pid(pid)
  }
}

impl From<String> for Payload {
  fn from(text: String) -> Self {
    Payload::Text(text)
  }
}

impl From<&str> for Payload {
  fn from(text: &str) -> Self {
    Payload::Text(text.to_string())
  }
}

impl From<DispatchContext> for Payload {
  fn from(ctx: DispatchContext) -> Self {
    Payload::Context(ctx)
  }
}

impl From<MessageHandle> for Payload {
  fn from(value: MessageHandle) -> Self {
    Payload::Value(value)
  }
}
