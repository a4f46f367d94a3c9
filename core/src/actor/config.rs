use std::error::Error;
use std::time::Duration;

use crate::actor::dispatch::DispatcherHandle;
use crate::actor::ConfigOption;
use crate::log::{init_tracing, LogConfig, LogSink, LEVEL_INFO};

#[derive(Debug, Clone)]
pub struct Config {
  pub system_dispatcher: DispatcherHandle,
  /// Messages an actor processes before yielding to the scheduler.
  pub dispatcher_throughput: usize,
  /// How long escalation and shutdown wait before forcing actors down.
  pub shutdown_grace_period: Duration,
  pub default_log_level: u8,
  pub log: LogConfig,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      system_dispatcher: DispatcherHandle::default(),
      dispatcher_throughput: 300,
      shutdown_grace_period: Duration::from_millis(300),
      default_log_level: LEVEL_INFO,
      log: LogConfig::default(),
    }
  }
}

impl Config {
  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> Config {
    let mut config = Config::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  /// Installs the global `tracing` subscriber from `log`. Call it once, before
  /// the system is built, so the root actor's records are captured.
  pub fn init_tracing(&self) -> Result<LogSink, Box<dyn Error + Send + Sync>> {
    init_tracing(&self.log)
  }
}
