use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;

/// Closed set of lifecycle and control signals.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  IntoPrimitive,
  TryFromPrimitive,
  Serialize,
  strum::Display,
  strum::EnumIter,
  strum::AsRefStr,
)]
#[repr(u8)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalKind {
  Init = 1,
  Exit,
  Poison,
  ChildInit,
  ChildDeinit,
  Subscribe,
  Unsubscribe,
  Logging,
  DispatchError,
  Sigint,
}

impl SignalKind {
  /// Signals the runtime interprets itself. The rest is offered to the actor.
  pub fn is_lifecycle(&self) -> bool {
    !matches!(self, SignalKind::DispatchError | SignalKind::Sigint)
  }

  /// Signals an actor still in `Created` may process. Everything else waits
  /// until `INIT` has run.
  pub fn runs_before_init(&self) -> bool {
    matches!(self, SignalKind::Init | SignalKind::Exit | SignalKind::Poison)
  }
}
