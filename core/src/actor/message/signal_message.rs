use std::fmt::{Display, Formatter};

use sigactor_message_derive_rs::Message;

use crate::actor::core::Pid;
use crate::actor::message::{DispatchContext, Message, MessageHandle, Payload, SignalKind};

/// Immutable `{signal, args}` pair driving the actor lifecycle.
#[derive(Debug, Clone, PartialEq, Message)]
pub struct SignalMessage {
  signal: SignalKind,
  args: Payload,
}

impl SignalMessage {
  pub fn new(signal: SignalKind, args: impl Into<Payload>) -> Self {
    Self {
      signal,
      args: args.into(),
    }
  }

  pub fn of(signal: SignalKind) -> Self {
    Self {
      signal,
      args: Payload::Empty,
    }
  }

  pub fn init() -> Self {
    Self::of(SignalKind::Init)
  }

  pub fn exit() -> Self {
    Self::of(SignalKind::Exit)
  }

  pub fn poison() -> Self {
    Self::of(SignalKind::Poison)
  }

  pub fn child_init(child: Pid) -> Self {
    Self::new(SignalKind::ChildInit, child)
  }

  pub fn child_deinit(child: Pid) -> Self {
    Self::new(SignalKind::ChildDeinit, child)
  }

  pub fn subscribe(name: impl Into<String>) -> Self {
    Self::new(SignalKind::Subscribe, Payload::Text(name.into()))
  }

  pub fn unsubscribe(name: impl Into<String>) -> Self {
    Self::new(SignalKind::Unsubscribe, Payload::Text(name.into()))
  }

  pub fn logging(level: i64) -> Self {
    Self::new(SignalKind::Logging, MessageHandle::new(level))
  }

  pub fn dispatch_error(ctx: DispatchContext) -> Self {
    Self::new(SignalKind::DispatchError, ctx)
  }

  pub fn sigint(reason: impl Into<String>) -> Self {
    Self::new(SignalKind::Sigint, Payload::Text(reason.into()))
  }

  pub fn signal(&self) -> SignalKind {
    self.signal
  }

  pub fn args(&self) -> &Payload {
    &self.args
  }
}

impl Display for SignalMessage {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "Message(sig={}, args={})", self.signal, self.args)
  }
}
