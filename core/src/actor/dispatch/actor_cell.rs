use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

use crate::actor::context::ActorContext;
use crate::actor::core::{Actor, ActorError, ActorException, ActorState, Pid};
use crate::actor::dispatch::{DispatchError, Dispatched, Mailbox};
use crate::actor::message::{MessageHandle, Publish, SignalKind, SignalMessage};

#[cfg(test)]
mod tests;

/// One actor's dispatch loop: the actor value, its context and the reader
/// half of its mailbox, all owned by a single task.
#[derive(Debug)]
pub(crate) struct ActorCell {
  actor: Box<dyn Actor>,
  ctx: ActorContext,
  mailbox: Mailbox,
  kill: Arc<Notify>,
  throughput: usize,
  grace_period: Duration,
}

impl ActorCell {
  pub(crate) fn new(actor: Box<dyn Actor>, ctx: ActorContext, mailbox: Mailbox, kill: Arc<Notify>) -> Self {
    let config = ctx.system().config();
    let throughput = config.dispatcher_throughput.max(1);
    let grace_period = config.shutdown_grace_period;
    Self {
      actor,
      ctx,
      mailbox,
      kill,
      throughput,
      grace_period,
    }
  }

  pub(crate) async fn run(mut self) {
    let mut processed = 0;
    loop {
      let envelope = tokio::select! {
        biased;
        _ = self.kill.notified() => {
          self.ctx.logger().debug("killed");
          break;
        }
        envelope = self.mailbox.receive() => envelope,
      };
      let Some(envelope) = envelope else {
        break;
      };
      if self.ctx.state() == ActorState::Created && !envelope.runs_before_init() {
        self.mailbox.stash(envelope);
        continue;
      }

      let (sender, message) = envelope.into_parts();
      match self.dispatch(sender, message.clone()).await {
        Dispatched::Handled => {}
        Dispatched::Unhandled => {
          self
            .ctx
            .logger()
            .debug(format!("unhandled message from {}: {}", sender, message));
        }
        Dispatched::Escalate(reason) => self.escalate(ActorException::Fatal(reason)).await,
      }
      if self.ctx.state().is_stopping() {
        break;
      }

      processed += 1;
      if processed >= self.throughput {
        processed = 0;
        tokio::task::yield_now().await;
      }
    }
    self.finish().await;
  }

  /// Processes exactly one message.
  pub(crate) async fn dispatch(&mut self, sender: Pid, message: MessageHandle) -> Dispatched {
    if let Some(signal) = message.to_typed::<SignalMessage>() {
      if signal.signal().is_lifecycle() {
        return self.dispatch_signal(sender, &message, signal).await;
      }
    }
    if let Some(publish) = message.as_typed::<Publish>() {
      self.publish(publish);
      return Dispatched::Handled;
    }
    self.actor.receive(&mut self.ctx, sender, message).await
  }

  async fn dispatch_signal(&mut self, sender: Pid, message: &MessageHandle, signal: SignalMessage) -> Dispatched {
    match signal.signal() {
      SignalKind::Init => self.init().await,
      SignalKind::Exit => {
        self.stop().await;
        Dispatched::Handled
      }
      SignalKind::Poison => {
        self.ctx.logger().warn(ActorException::Poisoned);
        self.stop().await;
        Dispatched::Handled
      }
      SignalKind::ChildInit => match signal.args().as_pid() {
        Some(child) => {
          self.ctx.children_mut().insert(child);
          if let Err(err) = self.ctx.send(child, SignalMessage::init()) {
            self.ctx.logger().warn(format!("cannot initialize child {}: {}", child, err));
          }
          self.actor.child_init(&mut self.ctx, child).await;
          Dispatched::Handled
        }
        None => self.malformed(sender, message, SignalKind::ChildInit),
      },
      SignalKind::ChildDeinit => match signal.args().as_pid() {
        Some(child) => {
          self.ctx.children_mut().remove(&child);
          self.actor.child_deinit(&mut self.ctx, child).await;
          Dispatched::Handled
        }
        None => self.malformed(sender, message, SignalKind::ChildDeinit),
      },
      SignalKind::Subscribe => match signal.args().as_text() {
        Some(name) => {
          self.subscribe(sender, name);
          Dispatched::Handled
        }
        None => self.malformed(sender, message, SignalKind::Subscribe),
      },
      SignalKind::Unsubscribe => match signal.args().as_text() {
        Some(name) => {
          if let Err(err) = self.ctx.observables_mut().unregister(name, sender) {
            self.ctx.logger().warn(format!("unsubscribe from {} rejected: {}", sender, err));
          }
          Dispatched::Handled
        }
        None => self.malformed(sender, message, SignalKind::Unsubscribe),
      },
      SignalKind::Logging => match signal.args().as_i64() {
        Some(level) => {
          let level = self.ctx.logger().set_level(level);
          self.ctx.logger().debug(format!("log level set to {}", level));
          Dispatched::Handled
        }
        None => self.malformed(sender, message, SignalKind::Logging),
      },
      SignalKind::DispatchError | SignalKind::Sigint => {
        self.actor.receive(&mut self.ctx, sender, message.clone()).await
      }
    }
  }

  async fn init(&mut self) -> Dispatched {
    if self.ctx.state() != ActorState::Created && self.ctx.state() != ActorState::Initializing {
      self
        .ctx
        .logger()
        .warn(format!("ignoring INIT in state {}", self.ctx.state()));
      return Dispatched::Unhandled;
    }
    self.ctx.state_cell().set(ActorState::Initializing);
    match self.actor.init(&mut self.ctx).await {
      Ok(()) => {
        self.ctx.state_cell().set(ActorState::Running);
        let stashed = self.mailbox.stashed();
        self.mailbox.resume();
        self.ctx.logger().debug(format!("initialized, replaying {} messages", stashed));
        Dispatched::Handled
      }
      Err(err) => {
        self.escalate(ActorException::InitFailed(err.reason().clone())).await;
        Dispatched::Handled
      }
    }
  }

  fn subscribe(&mut self, subscriber: Pid, name: &str) {
    let registered = self.ctx.observables_mut().register(name, subscriber);
    match registered {
      Ok(true) => {
        let name = self.ctx.observables().resolve(name).unwrap_or_else(|_| name.to_string());
        match self.actor.property(&name) {
          Some(value) => {
            if let Err(err) = self.ctx.notify_one(subscriber, &name, value) {
              self.ctx.logger().debug(format!("catch-up for {} not delivered: {}", subscriber, err));
            }
          }
          None => self
            .ctx
            .logger()
            .warn(format!("{} is declared but has no value, no catch-up for {}", name, subscriber)),
        }
      }
      Ok(false) => {}
      Err(err) => self.ctx.logger().warn(format!("subscribe from {} rejected: {}", subscriber, err)),
    }
  }

  fn publish(&mut self, publish: &Publish) {
    let result = self
      .ctx
      .observables()
      .resolve(publish.name())
      .and_then(|name| self.actor.set_property(&mut self.ctx, &name, publish.value()));
    if let Err(err) = result {
      self.ctx.logger().warn(format!("publish rejected: {}", err));
    }
  }

  fn malformed(&self, sender: Pid, message: &MessageHandle, signal: SignalKind) -> Dispatched {
    self.ctx.logger().warn(DispatchError::MalformedSignal { signal });
    self.ctx.report_dispatch_error(sender, message.clone());
    Dispatched::Handled
  }

  /// Tells the root, waits out the grace period, then stops.
  async fn escalate(&mut self, exception: ActorException) {
    self.ctx.logger().critical(&exception);
    if let Err(err) = self.ctx.send(Pid::ROOT, SignalMessage::sigint(exception.to_string())) {
      self.ctx.logger().error(format!("cannot reach root: {}", err));
    }
    if !self.ctx.pid().is_root() {
      tokio::select! {
        _ = tokio::time::sleep(self.grace_period) => {}
        _ = self.kill.notified() => {}
      }
    }
    self.stop().await;
  }

  /// Runs the terminate hook if the actor was initialized, then sends `EXIT`
  /// to every child, active or only created.
  async fn stop(&mut self) {
    let initialized = self.ctx.state().is_initialized();
    if !self.ctx.state_cell().advance(ActorState::Terminating) {
      return;
    }
    if initialized {
      if let Err(err) = self.actor.terminate(&mut self.ctx).await {
        self.report_terminate_failure(err);
      }
    }
    let mut children = std::mem::take(self.ctx.children_mut());
    children.extend(self.ctx.system().children(self.ctx.pid()));
    for child in children {
      if let Err(err) = self.ctx.send(child, SignalMessage::exit()) {
        self.ctx.logger().debug(format!("child {} already gone: {}", child, err));
      }
    }
  }

  fn report_terminate_failure(&self, err: ActorError) {
    let exception = ActorException::TerminateFailed(err.reason().clone());
    self.ctx.logger().error(&exception);
    if let Err(err) = self.ctx.send(Pid::ROOT, SignalMessage::sigint(exception.to_string())) {
      self.ctx.logger().error(format!("cannot reach root: {}", err));
    }
  }

  async fn finish(mut self) {
    let pid = self.ctx.pid();
    self.ctx.state_cell().set(ActorState::Terminated);
    let dropped = self.mailbox.close().await;
    if dropped > 0 {
      self.ctx.logger().debug(format!("dropped {} undelivered messages", dropped));
    }
    let system = self.ctx.system().clone();
    let parent = self.ctx.parent_pid();
    system.registry().remove_process(pid, parent).await;
    if let Some(parent) = parent {
      if let Err(err) = system.send(parent, SignalMessage::child_deinit(pid), pid) {
        tracing::debug!("ActorCell::finish: parent {} of {} already gone: {}", parent, pid, err);
      }
    }
    tracing::debug!("ActorCell::finish: pid = {} terminated", pid);
    if pid.is_root() {
      system.mark_terminated();
    } else {
      system.live().done().await;
    }
  }
}
