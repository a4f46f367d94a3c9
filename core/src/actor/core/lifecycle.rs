use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive, Serialize, strum::Display,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActorState {
  Created = 0,
  Initializing,
  Running,
  Terminating,
  Terminated,
}

impl ActorState {
  pub fn is_initialized(&self) -> bool {
    *self >= ActorState::Running
  }

  pub fn is_stopping(&self) -> bool {
    *self >= ActorState::Terminating
  }
}

/// Lifecycle state shared between the dispatch task and read-only handles.
#[derive(Debug, Clone)]
pub struct ActorStateCell(Arc<AtomicU8>);

impl ActorStateCell {
  pub fn new(state: ActorState) -> Self {
    Self(Arc::new(AtomicU8::new(state.into())))
  }

  pub fn get(&self) -> ActorState {
    ActorState::try_from(self.0.load(Ordering::Acquire)).unwrap_or(ActorState::Terminated)
  }

  pub fn set(&self, state: ActorState) {
    self.0.store(state.into(), Ordering::Release);
  }

  /// Moves to `next` unless the current state is already at or past it.
  pub fn advance(&self, next: ActorState) -> bool {
    let next: u8 = next.into();
    self.0.fetch_max(next, Ordering::AcqRel) < next
  }
}

impl Default for ActorStateCell {
  fn default() -> Self {
    Self::new(ActorState::Created)
  }
}
