use sigactor_message_derive_rs::Message;

use crate::actor::message::{Message, MessageHandle, Payload};
use crate::actor::util::to_kebab_case;

pub const PROPERTY_CHANGE: &str = "property-change";

const NO_ID: i64 = -1;

/// Application-level notification.
#[derive(Debug, Clone, PartialEq, Message)]
pub struct Event {
  kind: String,
  name: String,
  args: Payload,
}

impl Event {
  pub fn new(kind: impl Into<String>, name: impl Into<String>, args: impl Into<Payload>) -> Self {
    Self {
      kind: kind.into(),
      name: name.into(),
      args: args.into(),
    }
  }

  /// The event observers receive for a property write; `name` is sent in
  /// kebab-case.
  pub fn property_change(name: &str, value: MessageHandle) -> Self {
    Self::new(PROPERTY_CHANGE, to_kebab_case(name), Payload::Value(value))
  }

  pub fn kind(&self) -> &str {
    &self.kind
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn args(&self) -> &Payload {
    &self.args
  }

  pub fn is_property_change(&self) -> bool {
    self.kind == PROPERTY_CHANGE
  }
}

/// A request expecting a [`Response`] with the same `id`. Matching and timeouts
/// are up to the requester.
#[derive(Debug, Clone, PartialEq, Message)]
pub struct Request {
  kind: String,
  name: String,
  args: Payload,
  id: i64,
}

impl Request {
  pub fn new(kind: impl Into<String>, name: impl Into<String>, args: impl Into<Payload>) -> Self {
    Self {
      kind: kind.into(),
      name: name.into(),
      args: args.into(),
      id: NO_ID,
    }
  }

  pub fn with_id(mut self, id: i64) -> Self {
    self.id = id;
    self
  }

  pub fn kind(&self) -> &str {
    &self.kind
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn args(&self) -> &Payload {
    &self.args
  }

  pub fn id(&self) -> i64 {
    self.id
  }
}

#[derive(Debug, Clone, PartialEq, Message)]
pub struct Response {
  kind: String,
  name: String,
  args: Payload,
  id: i64,
}

impl Response {
  pub fn new(kind: impl Into<String>, name: impl Into<String>, args: impl Into<Payload>) -> Self {
    Self {
      kind: kind.into(),
      name: name.into(),
      args: args.into(),
      id: NO_ID,
    }
  }

  /// Builds the answer to `request`, keeping its name and id.
  pub fn reply_to(request: &Request, args: impl Into<Payload>) -> Self {
    Self {
      kind: "response".to_string(),
      name: request.name.clone(),
      args: args.into(),
      id: request.id,
    }
  }

  pub fn with_id(mut self, id: i64) -> Self {
    self.id = id;
    self
  }

  pub fn kind(&self) -> &str {
    &self.kind
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn args(&self) -> &Payload {
    &self.args
  }

  pub fn id(&self) -> i64 {
    self.id
  }

  pub fn answers(&self, request: &Request) -> bool {
    self.id == request.id && self.name == request.name
  }
}
