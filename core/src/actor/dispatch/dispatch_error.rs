use thiserror::Error;

use crate::actor::message::SignalKind;

/// Local dispatch failures. Logged by the receiving actor, never escalated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
  #[error("unknown observable property: {0}")]
  UnknownProperty(String),
  #[error("invalid value for property {name}, expected {expected}")]
  InvalidPropertyValue { name: String, expected: String },
  #[error("malformed {signal} signal")]
  MalformedSignal { signal: SignalKind },
}

static_assertions::assert_impl_all!(DispatchError: Send, Sync);
