use crate::actor::core::ErrorReason;

/// Outcome of offering one message to an actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
  Handled,
  /// Nothing matched. Logged at debug, never an error.
  Unhandled,
  /// Unrecoverable for this actor: the root gets `SIGINT` and the actor
  /// terminates after the grace period.
  Escalate(ErrorReason),
}

impl Dispatched {
  pub fn escalate(reason: impl Into<ErrorReason>) -> Self {
    Dispatched::Escalate(reason.into())
  }

  pub fn is_handled(&self) -> bool {
    matches!(self, Dispatched::Handled)
  }

  pub fn is_unhandled(&self) -> bool {
    matches!(self, Dispatched::Unhandled)
  }

  pub fn is_escalate(&self) -> bool {
    matches!(self, Dispatched::Escalate(_))
  }
}
