use std::time::Duration;

use async_trait::async_trait;
use sigactor_core_rs::actor::context::ActorContext;
use sigactor_core_rs::actor::core::{Actor, ActorConfig, ActorError, Pid, Props};
use sigactor_core_rs::actor::dispatch::{DispatchError, Dispatched};
use sigactor_core_rs::actor::message::{Event, MessageHandle, SignalMessage};
use sigactor_core_rs::actor::observable::{clamp, ObservableProperty};
use sigactor_core_rs::actor::{ActorSystem, Config, ConfigOption};
use sigactor_core_rs::log::LogConfig;
use sigactor_core_rs::Message;

#[derive(Debug, Clone, PartialEq, Message)]
struct SetTemperature(f64);

#[derive(Debug)]
struct Thermostat {
  temperature: ObservableProperty<f64>,
}

#[async_trait]
impl Actor for Thermostat {
  async fn receive(&mut self, ctx: &mut ActorContext, _sender: Pid, message: MessageHandle) -> Dispatched {
    match message.to_typed::<SetTemperature>() {
      Some(SetTemperature(value)) => {
        let stored = *self.temperature.set(ctx, value);
        ctx.logger().info(format!("temperature is now {}", stored));
        Dispatched::Handled
      }
      None => Dispatched::Unhandled,
    }
  }

  fn observable_properties(&self) -> &'static [&'static str] {
    &["temperature"]
  }

  fn property(&self, name: &str) -> Option<MessageHandle> {
    (name == "temperature").then(|| self.temperature.to_handle())
  }

  fn set_property(&mut self, ctx: &mut ActorContext, name: &str, value: &MessageHandle) -> Result<(), DispatchError> {
    match name {
      "temperature" => self.temperature.set_from_handle(ctx, value).map(|_| ()),
      _ => Err(DispatchError::UnknownProperty(name.to_string())),
    }
  }
}

#[derive(Debug)]
struct Panel {
  thermostat: Pid,
}

#[async_trait]
impl Actor for Panel {
  async fn init(&mut self, ctx: &mut ActorContext) -> Result<(), ActorError> {
    ctx
      .subscribe(self.thermostat, "temperature")
      .map_err(|err| ActorError::of_init_error(err.to_string()))
  }

  async fn receive(&mut self, ctx: &mut ActorContext, sender: Pid, message: MessageHandle) -> Dispatched {
    match message.to_typed::<Event>() {
      Some(event) if event.is_property_change() => {
        println!("[{}] {} from {} = {}", ctx.name(), event.name(), sender, event.args());
        Dispatched::Handled
      }
      _ => Dispatched::Unhandled,
    }
  }
}

#[tokio::main]
async fn main() {
  let config = Config::from([ConfigOption::with_log_config(LogConfig::from_env())]);
  if let Err(err) = config.init_tracing() {
    eprintln!("tracing not installed: {}", err);
  }
  let system = ActorSystem::new_with_config(config).await.unwrap();

  let thermostat_props = Props::from_actor_producer(|| Thermostat {
    temperature: ObservableProperty::with_setter("temperature", 0.0, clamp(-50.0, 150.0)),
  });
  let thermostat = system
    .spawn(thermostat_props, Pid::ROOT, "thermostat", ActorConfig::new())
    .await
    .unwrap();

  let display_props = Props::from_producer(|config: &ActorConfig| {
    config
      .get_typed::<u64>("thermostat")
      .map(|pid| Panel {
        thermostat: Pid::new(pid),
      })
      .ok_or_else(|| ActorError::of_config_error("thermostat pid missing"))
  });
  let config = ActorConfig::new().with("thermostat", thermostat.id());
  system.spawn(display_props, Pid::ROOT, "display", config).await.unwrap();

  for value in [18.5, 21.0, 400.0] {
    system.send(thermostat, SetTemperature(value), Pid::ROOT).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
  }

  system.send(thermostat, SignalMessage::poison(), Pid::ROOT).unwrap();
  tokio::time::sleep(Duration::from_millis(100)).await;
  system.shutdown();
  system.wait_terminated().await;
}
