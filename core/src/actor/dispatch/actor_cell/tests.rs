use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::actor::context::ActorContext;
use crate::actor::core::{Actor, ActorError, ActorState, ActorStateCell, Pid};
use crate::actor::dispatch::{Dispatched, Mailbox};
use crate::actor::message::{MessageHandle, Payload, SignalKind, SignalMessage};
use crate::actor::observable::ObservableProperties;
use crate::actor::ActorSystem;
use crate::log::ActorLogger;

use super::ActorCell;

#[derive(Debug, Default)]
struct Counting {
  inits: Arc<AtomicUsize>,
  terminates: Arc<AtomicUsize>,
}

#[async_trait]
impl Actor for Counting {
  async fn init(&mut self, _ctx: &mut ActorContext) -> Result<(), ActorError> {
    self.inits.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }

  async fn terminate(&mut self, _ctx: &mut ActorContext) -> Result<(), ActorError> {
    self.terminates.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }
}

async fn cell_for<A: Actor>(actor: A) -> (ActorSystem, ActorCell) {
  let system = ActorSystem::new().await.unwrap();
  let pid = system.registry().next_pid();
  let (mailbox, _sender) = Mailbox::new();
  let logger = ActorLogger::new(pid, "under-test", 20);
  let observables = ObservableProperties::new(actor.observable_properties());
  let ctx = ActorContext::new(
    system.clone(),
    pid,
    Some(Pid::ROOT),
    "under-test",
    observables,
    logger,
    ActorStateCell::default(),
  );
  let cell = ActorCell::new(Box::new(actor), ctx, mailbox, Arc::new(Notify::new()));
  (system, cell)
}

/// Declares `level` but never reports a value for it.
#[derive(Debug)]
struct Unreported;

#[async_trait]
impl Actor for Unreported {
  fn observable_properties(&self) -> &'static [&'static str] {
    &["level"]
  }
}

fn signal(message: SignalMessage) -> MessageHandle {
  MessageHandle::new(message)
}

#[tokio::test]
async fn test_unrecognized_message_is_unhandled_without_state_change() {
  let (_system, mut cell) = cell_for(Counting::default()).await;
  assert_eq!(cell.dispatch(Pid::ROOT, signal(SignalMessage::init())).await, Dispatched::Handled);
  assert_eq!(cell.ctx.state(), ActorState::Running);

  let outcome = cell.dispatch(Pid::ROOT, MessageHandle::new("unknown".to_string())).await;
  assert_eq!(outcome, Dispatched::Unhandled);
  assert_eq!(cell.ctx.state(), ActorState::Running);
}

#[tokio::test]
async fn test_init_runs_once() {
  let actor = Counting::default();
  let inits = actor.inits.clone();
  let (_system, mut cell) = cell_for(actor).await;

  assert!(cell.dispatch(Pid::ROOT, signal(SignalMessage::init())).await.is_handled());
  assert!(cell.dispatch(Pid::ROOT, signal(SignalMessage::init())).await.is_unhandled());
  assert_eq!(inits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_exit_runs_terminate_once() {
  let actor = Counting::default();
  let terminates = actor.terminates.clone();
  let (_system, mut cell) = cell_for(actor).await;
  cell.dispatch(Pid::ROOT, signal(SignalMessage::init())).await;

  cell.dispatch(Pid::ROOT, signal(SignalMessage::exit())).await;
  cell.dispatch(Pid::ROOT, signal(SignalMessage::exit())).await;
  assert_eq!(terminates.load(Ordering::SeqCst), 1);
  assert_eq!(cell.ctx.state(), ActorState::Terminating);
}

#[tokio::test]
async fn test_exit_before_init_skips_terminate_hook() {
  let actor = Counting::default();
  let terminates = actor.terminates.clone();
  let (_system, mut cell) = cell_for(actor).await;

  cell.dispatch(Pid::ROOT, signal(SignalMessage::exit())).await;
  assert_eq!(terminates.load(Ordering::SeqCst), 0);
  assert!(cell.ctx.state().is_stopping());
}

#[tokio::test]
async fn test_poison_terminates() {
  let (_system, mut cell) = cell_for(Counting::default()).await;
  cell.dispatch(Pid::ROOT, signal(SignalMessage::init())).await;
  assert!(cell.dispatch(Pid::ROOT, signal(SignalMessage::poison())).await.is_handled());
  assert_eq!(cell.ctx.state(), ActorState::Terminating);
}

#[tokio::test]
async fn test_child_init_and_deinit_track_children() {
  let (_system, mut cell) = cell_for(Counting::default()).await;
  cell.dispatch(Pid::ROOT, signal(SignalMessage::init())).await;

  let child = Pid::new(99);
  cell.dispatch(Pid::ROOT, signal(SignalMessage::child_init(child))).await;
  assert!(cell.ctx.children().contains(&child));

  cell.dispatch(Pid::ROOT, signal(SignalMessage::child_deinit(child))).await;
  assert!(cell.ctx.children().is_empty());
}

#[tokio::test]
async fn test_logging_sets_clamped_level() {
  let (_system, mut cell) = cell_for(Counting::default()).await;
  cell.dispatch(Pid::ROOT, signal(SignalMessage::logging(99))).await;
  assert_eq!(cell.ctx.logger().level(), 50);
  cell.dispatch(Pid::ROOT, signal(SignalMessage::logging(-3))).await;
  assert_eq!(cell.ctx.logger().level(), 0);
}

#[tokio::test]
async fn test_malformed_signal_is_absorbed() {
  let (_system, mut cell) = cell_for(Counting::default()).await;
  cell.dispatch(Pid::ROOT, signal(SignalMessage::init())).await;

  let malformed = SignalMessage::new(SignalKind::ChildInit, Payload::from("not a pid"));
  assert!(cell.dispatch(Pid::ROOT, signal(malformed)).await.is_handled());
  assert!(cell.ctx.children().is_empty());
  assert_eq!(cell.ctx.state(), ActorState::Running);
}

#[tokio::test]
async fn test_subscribe_to_unknown_property_leaves_state_unchanged() {
  let (_system, mut cell) = cell_for(Counting::default()).await;
  cell.dispatch(Pid::ROOT, signal(SignalMessage::init())).await;

  assert!(cell
    .dispatch(Pid::new(5), signal(SignalMessage::subscribe("humidity")))
    .await
    .is_handled());
  assert!(cell.ctx.observables().observers("humidity").is_empty());
  assert_eq!(cell.ctx.state(), ActorState::Running);
}

#[tokio::test]
async fn test_subscribe_without_value_registers_without_catch_up() {
  let (_system, mut cell) = cell_for(Unreported).await;
  cell.dispatch(Pid::ROOT, signal(SignalMessage::init())).await;

  let subscriber = Pid::new(77);
  assert!(cell
    .dispatch(subscriber, signal(SignalMessage::subscribe("level")))
    .await
    .is_handled());
  assert_eq!(cell.ctx.observables().observers("level"), &[subscriber]);
  assert_eq!(cell.ctx.state(), ActorState::Running);
}
