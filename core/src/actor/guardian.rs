use async_trait::async_trait;

use crate::actor::context::ActorContext;
use crate::actor::core::{Actor, ActorError, Pid};
use crate::actor::dispatch::{DispatchError, Dispatched};
use crate::actor::message::{MessageHandle, SignalKind, SignalMessage};
use crate::actor::observable::ObservableProperty;

pub const DISPATCH_ERRORS: &str = "dispatch_errors";

/// The actor at [`Pid::ROOT`].
///
/// Sink for `DISPATCH_ERROR` reports and `SIGINT` escalations. Counts the
/// former in the observable `dispatch_errors`; the latter starts a system
/// shutdown.
#[derive(Debug)]
pub struct RootActor {
  dispatch_errors: ObservableProperty<u64>,
}

impl Default for RootActor {
  fn default() -> Self {
    Self::new()
  }
}

impl RootActor {
  pub fn new() -> Self {
    Self {
      dispatch_errors: ObservableProperty::with_default(DISPATCH_ERRORS),
    }
  }

  async fn stop_all(&self, ctx: &mut ActorContext) {
    let system = ctx.system().clone();
    for pid in system.live_pids() {
      if pid.is_root() {
        continue;
      }
      if let Err(err) = ctx.send(pid, SignalMessage::exit()) {
        ctx.logger().debug(format!("{} already gone: {}", pid, err));
      }
    }
    let grace_period = system.config().shutdown_grace_period;
    if system.live().wait_timeout(grace_period).await {
      return;
    }
    let killed = system.kill_all();
    ctx
      .logger()
      .warn(format!("{} actors still running after {:?}, killed", killed, grace_period));
    if !system.live().wait_timeout(grace_period).await {
      ctx.logger().error("actors did not stop after being killed");
    }
  }
}

#[async_trait]
impl Actor for RootActor {
  async fn terminate(&mut self, ctx: &mut ActorContext) -> Result<(), ActorError> {
    ctx.system().begin_shutdown();
    self.stop_all(ctx).await;
    ctx.logger().info("actor system terminated");
    Ok(())
  }

  async fn receive(&mut self, ctx: &mut ActorContext, sender: Pid, message: MessageHandle) -> Dispatched {
    let Some(signal) = message.as_typed::<SignalMessage>() else {
      return Dispatched::Unhandled;
    };
    match signal.signal() {
      SignalKind::DispatchError => {
        match signal.args().as_context() {
          Some(dispatch_context) => ctx.logger().error(format!("dispatch error: {}", dispatch_context)),
          None => ctx.logger().error(format!("dispatch error reported by {}", sender)),
        }
        let count = *self.dispatch_errors.get() + 1;
        self.dispatch_errors.set(ctx, count);
        Dispatched::Handled
      }
      SignalKind::Sigint => {
        let reason = signal.args().as_text().unwrap_or("no reason given");
        ctx.logger().warn(format!("SIGINT from {}: {}", sender, reason));
        if ctx.system().begin_shutdown() {
          if let Err(err) = ctx.send_self(SignalMessage::exit()) {
            ctx.logger().error(format!("cannot schedule shutdown: {}", err));
          }
        }
        Dispatched::Handled
      }
      _ => Dispatched::Unhandled,
    }
  }

  fn observable_properties(&self) -> &'static [&'static str] {
    &[DISPATCH_ERRORS]
  }

  fn property(&self, name: &str) -> Option<MessageHandle> {
    match name {
      DISPATCH_ERRORS => Some(self.dispatch_errors.to_handle()),
      _ => None,
    }
  }

  fn set_property(&mut self, _ctx: &mut ActorContext, name: &str, _value: &MessageHandle) -> Result<(), DispatchError> {
    Err(DispatchError::InvalidPropertyValue {
      name: name.to_string(),
      expected: "read-only".to_string(),
    })
  }
}
