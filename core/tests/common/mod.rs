#![allow(dead_code)]

use std::time::Duration;

use async_trait::async_trait;
use sigactor_core_rs::actor::context::ActorContext;
use sigactor_core_rs::actor::core::{Actor, ActorConfig, ActorError, Pid, Props};
use sigactor_core_rs::actor::dispatch::{DispatchError, Dispatched};
use sigactor_core_rs::actor::message::{MessageHandle, Request, Response};
use sigactor_core_rs::actor::observable::{clamp, ObservableProperty};
use sigactor_core_rs::actor::ActorSystem;
use sigactor_core_rs::Message;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

pub const TIMEOUT: Duration = Duration::from_secs(2);

pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

/// What a [`ProbeActor`] saw, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Observed {
  Init,
  Terminate,
  ChildInit(Pid),
  ChildDeinit(Pid),
  Message { sender: Pid, message: MessageHandle },
}

impl Observed {
  pub fn message(&self) -> Option<&MessageHandle> {
    match self {
      Observed::Message { message, .. } => Some(message),
      _ => None,
    }
  }
}

/// Reports every hook call and every message to the test through a channel.
#[derive(Debug)]
pub struct ProbeActor {
  tx: mpsc::UnboundedSender<Observed>,
}

#[async_trait]
impl Actor for ProbeActor {
  async fn init(&mut self, _ctx: &mut ActorContext) -> Result<(), ActorError> {
    let _ = self.tx.send(Observed::Init);
    Ok(())
  }

  async fn terminate(&mut self, _ctx: &mut ActorContext) -> Result<(), ActorError> {
    let _ = self.tx.send(Observed::Terminate);
    Ok(())
  }

  async fn receive(&mut self, _ctx: &mut ActorContext, sender: Pid, message: MessageHandle) -> Dispatched {
    let _ = self.tx.send(Observed::Message { sender, message });
    Dispatched::Handled
  }

  async fn child_init(&mut self, _ctx: &mut ActorContext, child: Pid) {
    let _ = self.tx.send(Observed::ChildInit(child));
  }

  async fn child_deinit(&mut self, _ctx: &mut ActorContext, child: Pid) {
    let _ = self.tx.send(Observed::ChildDeinit(child));
  }
}

pub struct Probe {
  pub pid: Pid,
  rx: mpsc::UnboundedReceiver<Observed>,
}

impl Probe {
  pub fn props() -> (Props, mpsc::UnboundedReceiver<Observed>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Props::from_actor_producer(move || ProbeActor { tx: tx.clone() }), rx)
  }

  /// Created under `parent` and initialized through `CHILD_INIT`.
  pub async fn spawn(system: &ActorSystem, parent: Pid, name: &str) -> Probe {
    let (props, rx) = Self::props();
    let pid = system.spawn(props, parent, name, ActorConfig::new()).await.unwrap();
    Probe { pid, rx }
  }

  /// Created but never sent `INIT`.
  pub async fn create(system: &ActorSystem, parent: Pid, name: &str) -> Probe {
    let (props, rx) = Self::props();
    let pid = system.create(props, parent, name, ActorConfig::new()).await.unwrap();
    Probe { pid, rx }
  }

  pub async fn next(&mut self) -> Observed {
    tokio::time::timeout(TIMEOUT, self.rx.recv())
      .await
      .expect("probe timed out")
      .expect("probe channel closed")
  }

  /// Skips hook notifications and returns the next message.
  pub async fn next_message(&mut self) -> (Pid, MessageHandle) {
    loop {
      if let Observed::Message { sender, message } = self.next().await {
        return (sender, message);
      }
    }
  }

  pub async fn next_typed<T: Message + Clone>(&mut self) -> T {
    let (_, message) = self.next_message().await;
    message
      .to_typed::<T>()
      .unwrap_or_else(|| panic!("unexpected message {}", message))
  }

  pub async fn expect_silence(&mut self, window: Duration) {
    if let Ok(Some(observed)) = tokio::time::timeout(window, self.rx.recv()).await {
      panic!("unexpected {:?}", observed);
    }
  }
}

#[derive(Debug, Clone, PartialEq, Message)]
pub struct SetTemperature(pub f64);

pub const TEMPERATURE: &str = "temperature";

/// Publishes `temperature`, clamped to `[-50, 150]`.
#[derive(Debug)]
pub struct Thermostat {
  temperature: ObservableProperty<f64>,
}

impl Thermostat {
  pub fn new() -> Self {
    Self {
      temperature: ObservableProperty::with_setter(TEMPERATURE, 0.0, clamp(-50.0, 150.0)),
    }
  }

  pub fn props() -> Props {
    Props::from_actor_producer(Thermostat::new)
  }
}

#[async_trait]
impl Actor for Thermostat {
  async fn receive(&mut self, ctx: &mut ActorContext, sender: Pid, message: MessageHandle) -> Dispatched {
    if let Some(SetTemperature(value)) = message.to_typed::<SetTemperature>() {
      self.temperature.set(ctx, value);
      return Dispatched::Handled;
    }
    if let Some(request) = message.as_typed::<Request>() {
      if request.name() == TEMPERATURE {
        let response = Response::reply_to(request, MessageHandle::new(*self.temperature.get()));
        if ctx.send(sender, response).is_err() {
          ctx.logger().warn("requester gone");
        }
        return Dispatched::Handled;
      }
    }
    Dispatched::Unhandled
  }

  fn observable_properties(&self) -> &'static [&'static str] {
    &[TEMPERATURE]
  }

  fn property(&self, name: &str) -> Option<MessageHandle> {
    match name {
      TEMPERATURE => Some(self.temperature.to_handle()),
      _ => None,
    }
  }

  fn set_property(&mut self, ctx: &mut ActorContext, name: &str, value: &MessageHandle) -> Result<(), DispatchError> {
    match name {
      TEMPERATURE => self.temperature.set_from_handle(ctx, value).map(|_| ()),
      _ => Err(DispatchError::UnknownProperty(name.to_string())),
    }
  }
}

/// Escalates on the string `"boom"`.
#[derive(Debug)]
pub struct Faulty;

#[async_trait]
impl Actor for Faulty {
  async fn receive(&mut self, _ctx: &mut ActorContext, _sender: Pid, message: MessageHandle) -> Dispatched {
    match message.to_typed::<String>() {
      Some(text) if text == "boom" => Dispatched::escalate("sensor failure"),
      _ => Dispatched::Unhandled,
    }
  }
}

#[derive(Debug)]
pub struct FailingInit;

#[async_trait]
impl Actor for FailingInit {
  async fn init(&mut self, _ctx: &mut ActorContext) -> Result<(), ActorError> {
    Err(ActorError::of_init_error("calibration missing"))
  }
}
