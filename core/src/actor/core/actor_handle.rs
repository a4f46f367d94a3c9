use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::actor::core::{ActorState, ActorStateCell, Pid};

/// Read-only view of a live actor's runtime record.
#[derive(Debug, Clone)]
pub struct ActorHandle {
  pid: Pid,
  parent: Option<Pid>,
  name: String,
  type_name: String,
  state: ActorStateCell,
  log_level: Arc<AtomicU8>,
}

#[derive(Serialize)]
struct Introspection<'a> {
  pid: Pid,
  parent: Option<Pid>,
  name: &'a str,
  r#type: &'a str,
  state: ActorState,
  log_level: u8,
}

impl ActorHandle {
  pub(crate) fn new(
    pid: Pid,
    parent: Option<Pid>,
    name: impl Into<String>,
    type_name: impl Into<String>,
    state: ActorStateCell,
    log_level: Arc<AtomicU8>,
  ) -> Self {
    Self {
      pid,
      parent,
      name: name.into(),
      type_name: type_name.into(),
      state,
      log_level,
    }
  }

  pub fn pid(&self) -> Pid {
    self.pid
  }

  /// `None` only for the root.
  pub fn parent(&self) -> Option<Pid> {
    self.parent
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn type_name(&self) -> &str {
    &self.type_name
  }

  pub fn state(&self) -> ActorState {
    self.state.get()
  }

  pub fn log_level(&self) -> u8 {
    self.log_level.load(Ordering::Relaxed)
  }

  pub fn introspect(&self) -> serde_json::Value {
    let view = Introspection {
      pid: self.pid,
      parent: self.parent,
      name: &self.name,
      r#type: &self.type_name,
      state: self.state(),
      log_level: self.log_level(),
    };
    serde_json::to_value(view).unwrap_or(serde_json::Value::Null)
  }
}

impl Display for ActorHandle {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self.parent {
      Some(parent) => write!(f, "{}(pid={}, parent={})", self.type_name, self.pid, parent),
      None => write!(f, "{}(pid={}, parent=None)", self.type_name, self.pid),
    }
  }
}
