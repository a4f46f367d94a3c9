use thiserror::Error;

use crate::actor::core::Pid;

/// Router-level failures, reported synchronously to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorSystemError {
  #[error("actor not found: {0}")]
  ActorNotFound(Pid),
  #[error("actor system is shutting down")]
  ShuttingDown,
  #[error("failed to spawn {name}: {reason}")]
  SpawnFailed { name: String, reason: String },
}

static_assertions::assert_impl_all!(ActorSystemError: Send, Sync);
