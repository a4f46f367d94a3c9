use thiserror::Error;

use crate::actor::core::error_reason::ErrorReason;

/// Returned by user hooks (`init`, `terminate`, the producer in `Props`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorError {
  #[error("Initialization error: {0}")]
  InitError(ErrorReason),
  #[error("Termination error: {0}")]
  TerminateError(ErrorReason),
  #[error("Receive error: {0}")]
  ReceiveError(ErrorReason),
  #[error("Config error: {0}")]
  ConfigError(ErrorReason),
}

impl ActorError {
  pub fn of_init_error(error_reason: impl Into<ErrorReason>) -> Self {
    ActorError::InitError(error_reason.into())
  }

  pub fn of_terminate_error(error_reason: impl Into<ErrorReason>) -> Self {
    ActorError::TerminateError(error_reason.into())
  }

  pub fn of_receive_error(error_reason: impl Into<ErrorReason>) -> Self {
    ActorError::ReceiveError(error_reason.into())
  }

  pub fn of_config_error(error_reason: impl Into<ErrorReason>) -> Self {
    ActorError::ConfigError(error_reason.into())
  }

  pub fn reason(&self) -> &ErrorReason {
    match self {
      ActorError::InitError(e)
      | ActorError::TerminateError(e)
      | ActorError::ReceiveError(e)
      | ActorError::ConfigError(e) => e,
    }
  }
}

/// Fatal conditions local to one actor. Each one ends the actor; all but
/// `Poisoned` are also escalated to the root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorException {
  #[error("actor was poisoned")]
  Poisoned,
  #[error("init failed: {0}")]
  InitFailed(ErrorReason),
  #[error("terminate failed: {0}")]
  TerminateFailed(ErrorReason),
  #[error("fatal: {0}")]
  Fatal(ErrorReason),
}

impl ActorException {
  pub fn is_escalated(&self) -> bool {
    !matches!(self, ActorException::Poisoned)
  }
}

static_assertions::assert_impl_all!(ActorError: Send, Sync);
static_assertions::assert_impl_all!(ActorException: Send, Sync);
