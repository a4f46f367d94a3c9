use std::fmt::Debug;

use async_trait::async_trait;

use crate::actor::context::ActorContext;
use crate::actor::core::{ActorError, Pid};
use crate::actor::dispatch::{DispatchError, Dispatched};
use crate::actor::message::MessageHandle;

/// User-supplied behaviour driven by the dispatch loop.
///
/// Lifecycle signals are interpreted by the runtime, which calls the hooks
/// below; everything else (application values, events, `DISPATCH_ERROR`,
/// `SIGINT`) reaches [`Actor::receive`]. The actor value is owned by its
/// dispatch task, so hooks take `&mut self` without locking.
#[async_trait]
pub trait Actor: Debug + Send + 'static {
  async fn init(&mut self, _ctx: &mut ActorContext) -> Result<(), ActorError> {
    Ok(())
  }

  async fn terminate(&mut self, _ctx: &mut ActorContext) -> Result<(), ActorError> {
    Ok(())
  }

  async fn receive(&mut self, _ctx: &mut ActorContext, _sender: Pid, _message: MessageHandle) -> Dispatched {
    Dispatched::Unhandled
  }

  async fn child_init(&mut self, _ctx: &mut ActorContext, _child: Pid) {}

  async fn child_deinit(&mut self, _ctx: &mut ActorContext, _child: Pid) {}

  /// Names (snake_case) of the properties other actors may subscribe to.
  fn observable_properties(&self) -> &'static [&'static str] {
    &[]
  }

  /// Current value of an observable property, used for catch-up events.
  fn property(&self, _name: &str) -> Option<MessageHandle> {
    None
  }

  /// Writes an observable property by name. Implementations usually
  /// delegate to [`ObservableProperty::set_from_handle`](crate::actor::observable::ObservableProperty::set_from_handle).
  fn set_property(&mut self, _ctx: &mut ActorContext, name: &str, _value: &MessageHandle) -> Result<(), DispatchError> {
    Err(DispatchError::UnknownProperty(name.to_string()))
  }

}
