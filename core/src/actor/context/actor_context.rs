use std::collections::BTreeSet;

use crate::actor::core::{ActorConfig, ActorState, ActorStateCell, Pid, Props};
use crate::actor::message::{DispatchContext, MessageHandle, SignalMessage};
use crate::actor::observable::ObservableProperties;
use crate::actor::{ActorSystem, ActorSystemError};
use crate::log::ActorLogger;

/// Everything an actor may touch besides its own fields: its identity, its
/// active children, its subscribers and the system it lives in.
///
/// Owned by the actor's dispatch task and lent to each hook.
#[derive(Debug)]
pub struct ActorContext {
  system: ActorSystem,
  pid: Pid,
  parent: Option<Pid>,
  name: String,
  children: BTreeSet<Pid>,
  observables: ObservableProperties,
  logger: ActorLogger,
  state: ActorStateCell,
}

impl ActorContext {
  pub(crate) fn new(
    system: ActorSystem,
    pid: Pid,
    parent: Option<Pid>,
    name: impl Into<String>,
    observables: ObservableProperties,
    logger: ActorLogger,
    state: ActorStateCell,
  ) -> Self {
    Self {
      system,
      pid,
      parent,
      name: name.into(),
      children: BTreeSet::new(),
      observables,
      logger,
      state,
    }
  }

  pub fn system(&self) -> &ActorSystem {
    &self.system
  }

  pub fn pid(&self) -> Pid {
    self.pid
  }

  /// The supervising actor; the root reports itself.
  pub fn parent(&self) -> Pid {
    self.parent.unwrap_or(Pid::ROOT)
  }

  pub(crate) fn parent_pid(&self) -> Option<Pid> {
    self.parent
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn state(&self) -> ActorState {
    self.state.get()
  }

  pub(crate) fn state_cell(&self) -> &ActorStateCell {
    &self.state
  }

  pub fn logger(&self) -> &ActorLogger {
    &self.logger
  }

  /// Children that have been initialized through `CHILD_INIT` and not yet
  /// reported gone.
  pub fn children(&self) -> &BTreeSet<Pid> {
    &self.children
  }

  pub(crate) fn children_mut(&mut self) -> &mut BTreeSet<Pid> {
    &mut self.children
  }

  pub fn observables(&self) -> &ObservableProperties {
    &self.observables
  }

  pub(crate) fn observables_mut(&mut self) -> &mut ObservableProperties {
    &mut self.observables
  }

  pub fn send(&self, to: Pid, message: impl Into<MessageHandle>) -> Result<(), ActorSystemError> {
    self.system.send(to, message, self.pid)
  }

  pub fn send_self(&self, message: impl Into<MessageHandle>) -> Result<(), ActorSystemError> {
    self.send(self.pid, message)
  }

  pub fn forward(&self, to: Pid, original_sender: Pid, message: impl Into<MessageHandle>) -> Result<(), ActorSystemError> {
    self.system.forward(to, original_sender, message)
  }

  /// Creates a child of this actor. It stays `Created` until this actor
  /// sends itself `CHILD_INIT`; see [`ActorContext::spawn_child`].
  pub async fn create_child(&self, props: Props, name: &str, config: ActorConfig) -> Result<Pid, ActorSystemError> {
    self.system.create(props, self.pid, name, config).await
  }

  pub async fn spawn_child(&self, props: Props, name: &str, config: ActorConfig) -> Result<Pid, ActorSystemError> {
    self.system.spawn(props, self.pid, name, config).await
  }

  pub fn subscribe(&self, target: Pid, property: &str) -> Result<(), ActorSystemError> {
    self.send(target, SignalMessage::subscribe(property))
  }

  pub fn unsubscribe(&self, target: Pid, property: &str) -> Result<(), ActorSystemError> {
    self.send(target, SignalMessage::unsubscribe(property))
  }

  /// Announces a new value of `property` to all of its subscribers.
  pub fn notify(&mut self, property: &str, value: MessageHandle) -> usize {
    self.observables.notify(&self.system, self.pid, property, &value)
  }

  pub fn notify_one(&self, receiver: Pid, property: &str, value: MessageHandle) -> Result<(), ActorSystemError> {
    self
      .observables
      .notify_one(&self.system, self.pid, receiver, property, &value)
  }

  /// Hands a message this actor cannot route to the root as
  /// `DISPATCH_ERROR`.
  pub fn report_dispatch_error(&self, original_sender: Pid, message: MessageHandle) {
    let ctx = DispatchContext::new(original_sender, self.pid, message);
    if let Err(err) = self.send(Pid::ROOT, SignalMessage::dispatch_error(ctx)) {
      self.logger.error(format!("cannot report dispatch error: {}", err));
    }
  }
}
