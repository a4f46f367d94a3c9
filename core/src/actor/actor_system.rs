use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sigactor_utils_rs::concurrent::WaitGroup;
use tokio::sync::{watch, Notify};
use uuid::Uuid;

use crate::actor::context::ActorContext;
use crate::actor::core::{Actor, ActorConfig, ActorHandle, ActorStateCell, Pid, Props};
use crate::actor::dispatch::{ActorCell, Dispatcher, Mailbox, Runnable};
use crate::actor::guardian::RootActor;
use crate::actor::message::{MessageEnvelope, MessageHandle, SignalMessage};
use crate::actor::observable::ObservableProperties;
use crate::actor::process::{ActorProcess, ProcessRegistry};
use crate::actor::{ActorSystemError, Config, ConfigOption};
use crate::log::ActorLogger;

struct ActorSystemInner {
  id: Uuid,
  config: Config,
  registry: ProcessRegistry,
  live: WaitGroup,
  shutting_down: AtomicBool,
  terminated: watch::Sender<bool>,
}

/// Registry and router for one tree of actors rooted at [`Pid::ROOT`].
///
/// Cheap to clone. Routing is synchronous and never waits on the target;
/// creating actors is async only because their loops have to be scheduled.
#[derive(Clone)]
pub struct ActorSystem {
  inner: Arc<ActorSystemInner>,
}

impl Debug for ActorSystem {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ActorSystem")
      .field("id", &self.inner.id)
      .field("actors", &self.inner.registry.len())
      .finish()
  }
}

impl PartialEq for ActorSystem {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }
}

impl ActorSystem {
  pub async fn new() -> Result<Self, ActorSystemError> {
    Self::new_with_config(Config::default()).await
  }

  pub async fn new_config_options(options: impl IntoIterator<Item = ConfigOption>) -> Result<Self, ActorSystemError> {
    Self::new_with_config(Config::from(options)).await
  }

  /// Builds the system and starts the root actor.
  pub async fn new_with_config(config: Config) -> Result<Self, ActorSystemError> {
    let (terminated, _) = watch::channel(false);
    let system = Self {
      inner: Arc::new(ActorSystemInner {
        id: Uuid::new_v4(),
        config,
        registry: ProcessRegistry::new(),
        live: WaitGroup::new(),
        shutting_down: AtomicBool::new(false),
        terminated,
      }),
    };
    let root: Box<dyn Actor> = Box::new(RootActor::new());
    system.start_actor(root, "RootActor", Pid::ROOT, None, "root").await?;
    system.send(Pid::ROOT, SignalMessage::init(), Pid::ROOT)?;
    tracing::debug!("ActorSystem::new_with_config: id = {}", system.inner.id);
    Ok(system)
  }

  pub fn id(&self) -> Uuid {
    self.inner.id
  }

  pub fn config(&self) -> &Config {
    &self.inner.config
  }

  pub(crate) fn registry(&self) -> &ProcessRegistry {
    &self.inner.registry
  }

  pub(crate) fn live(&self) -> &WaitGroup {
    &self.inner.live
  }

  /// Builds an actor from `props` under `parent` and starts its loop in
  /// state `Created`. The actor processes nothing but `INIT`, `EXIT` and
  /// `POISON` until it has been initialized.
  pub async fn create(
    &self,
    props: Props,
    parent: Pid,
    name: &str,
    config: ActorConfig,
  ) -> Result<Pid, ActorSystemError> {
    if self.is_shutting_down() {
      return Err(ActorSystemError::ShuttingDown);
    }
    if !self.is_alive(parent) {
      return Err(ActorSystemError::ActorNotFound(parent));
    }
    let actor = props.produce(&config).map_err(|err| ActorSystemError::SpawnFailed {
      name: name.to_string(),
      reason: err.to_string(),
    })?;
    let pid = self.inner.registry.next_pid();
    self.start_actor(actor, props.type_name(), pid, Some(parent), name).await?;
    Ok(pid)
  }

  /// [`ActorSystem::create`] followed by `CHILD_INIT` to the parent, which
  /// in turn sends `INIT` to the child.
  pub async fn spawn(
    &self,
    props: Props,
    parent: Pid,
    name: &str,
    config: ActorConfig,
  ) -> Result<Pid, ActorSystemError> {
    let pid = self.create(props, parent, name, config).await?;
    self.send(parent, SignalMessage::child_init(pid), parent)?;
    Ok(pid)
  }

  async fn start_actor(
    &self,
    actor: Box<dyn Actor>,
    type_name: &str,
    pid: Pid,
    parent: Option<Pid>,
    name: &str,
  ) -> Result<(), ActorSystemError> {
    let config = &self.inner.config;
    let (mut mailbox, sender) = Mailbox::new();
    mailbox.suspend();
    let state = ActorStateCell::default();
    let logger = ActorLogger::new(pid, name, i64::from(config.default_log_level));
    let handle = ActorHandle::new(pid, parent, name, type_name, state.clone(), logger.level_cell());
    let kill = Arc::new(Notify::new());
    let observables = ObservableProperties::new(actor.observable_properties());

    if !pid.is_root() {
      self.inner.live.add(1).await;
    }
    let process = ActorProcess::new(handle, sender, kill.clone());
    if let Err(err) = self.inner.registry.add_process(process, parent).await {
      if !pid.is_root() {
        self.inner.live.done().await;
      }
      return Err(err);
    }

    let ctx = ActorContext::new(self.clone(), pid, parent, name, observables, logger, state);
    let cell = ActorCell::new(actor, ctx, mailbox, kill);
    config
      .system_dispatcher
      .schedule(Runnable::new(move || cell.run()))
      .await;
    tracing::debug!(
      "ActorSystem::start_actor: {}(pid={}, parent={:?}), name = {}",
      type_name,
      pid,
      parent,
      name
    );
    Ok(())
  }

  /// Enqueues `message` for `to`. Fails right away when `to` is unknown or
  /// already terminated.
  pub fn send(&self, to: Pid, message: impl Into<MessageHandle>, sender: Pid) -> Result<(), ActorSystemError> {
    let process = self
      .inner
      .registry
      .get_process(&to)
      .ok_or(ActorSystemError::ActorNotFound(to))?;
    process.send(MessageEnvelope::new(sender, message.into()))
  }

  /// Like [`ActorSystem::send`], but the target sees `original_sender`.
  pub fn forward(
    &self,
    to: Pid,
    original_sender: Pid,
    message: impl Into<MessageHandle>,
  ) -> Result<(), ActorSystemError> {
    self.send(to, message, original_sender)
  }

  pub fn resolve_parent(&self, pid: Pid) -> Result<Pid, ActorSystemError> {
    if pid.is_root() {
      return Ok(Pid::ROOT);
    }
    let process = self
      .inner
      .registry
      .get_process(&pid)
      .ok_or(ActorSystemError::ActorNotFound(pid))?;
    Ok(process.handle().parent().unwrap_or(Pid::ROOT))
  }

  pub fn get_actor(&self, pid: Pid) -> Result<ActorHandle, ActorSystemError> {
    self
      .inner
      .registry
      .get_process(&pid)
      .map(|process| process.handle().clone())
      .ok_or(ActorSystemError::ActorNotFound(pid))
  }

  /// Live children of `pid` as recorded at creation.
  pub fn children(&self, pid: Pid) -> Vec<Pid> {
    self.inner.registry.children_of(&pid)
  }

  pub fn live_pids(&self) -> Vec<Pid> {
    self.inner.registry.pids()
  }

  pub fn is_alive(&self, pid: Pid) -> bool {
    self
      .inner
      .registry
      .get_process(&pid)
      .is_some_and(|process| !process.handle().state().is_stopping())
  }

  pub fn is_shutting_down(&self) -> bool {
    self.inner.shutting_down.load(Ordering::Acquire)
  }

  pub fn is_terminated(&self) -> bool {
    *self.inner.terminated.borrow()
  }

  /// Sends `EXIT` to the root. The root stops every other actor before it
  /// finishes; await [`ActorSystem::wait_terminated`] for that.
  pub fn shutdown(&self) {
    self.begin_shutdown();
    if let Err(err) = self.send(Pid::ROOT, SignalMessage::exit(), Pid::ROOT) {
      tracing::debug!("ActorSystem::shutdown: root already gone: {}", err);
    }
  }

  pub async fn wait_terminated(&self) {
    let mut terminated = self.inner.terminated.subscribe();
    let _ = terminated.wait_for(|terminated| *terminated).await;
  }

  pub(crate) fn begin_shutdown(&self) -> bool {
    !self.inner.shutting_down.swap(true, Ordering::AcqRel)
  }

  pub(crate) fn mark_terminated(&self) {
    self.inner.terminated.send_replace(true);
  }

  /// Stops every loop except the root's without running hooks.
  pub(crate) fn kill_all(&self) -> usize {
    let mut killed = 0;
    for pid in self.inner.registry.pids() {
      if pid.is_root() {
        continue;
      }
      if let Some(process) = self.inner.registry.get_process(&pid) {
        process.kill();
        killed += 1;
      }
    }
    killed
  }
}

static_assertions::assert_impl_all!(ActorSystem: Send, Sync);
