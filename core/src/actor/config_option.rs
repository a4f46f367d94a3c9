use std::time::Duration;

use crate::actor::dispatch::DispatcherHandle;
use crate::actor::Config;
use crate::log::{ActorLogger, LogConfig};

#[derive(Debug, Clone)]
pub enum ConfigOption {
  SetDispatcher(DispatcherHandle),
  SetDispatcherThroughput(usize),
  SetShutdownGracePeriod(Duration),
  SetDefaultLogLevel(i64),
  SetLogConfig(LogConfig),
}

impl ConfigOption {
  pub fn apply(&self, config: &mut Config) {
    match self {
      ConfigOption::SetDispatcher(dispatcher) => {
        config.system_dispatcher = dispatcher.clone();
      }
      ConfigOption::SetDispatcherThroughput(throughput) => {
        config.dispatcher_throughput = (*throughput).max(1);
      }
      ConfigOption::SetShutdownGracePeriod(period) => {
        config.shutdown_grace_period = *period;
      }
      ConfigOption::SetDefaultLogLevel(level) => {
        config.default_log_level = ActorLogger::clamp(*level);
      }
      ConfigOption::SetLogConfig(log) => {
        config.log = log.clone();
      }
    }
  }

  pub fn with_dispatcher(dispatcher: DispatcherHandle) -> ConfigOption {
    ConfigOption::SetDispatcher(dispatcher)
  }

  pub fn with_dispatcher_throughput(throughput: usize) -> ConfigOption {
    ConfigOption::SetDispatcherThroughput(throughput)
  }

  pub fn with_shutdown_grace_period(period: Duration) -> ConfigOption {
    ConfigOption::SetShutdownGracePeriod(period)
  }

  pub fn with_default_log_level(level: i64) -> ConfigOption {
    ConfigOption::SetDefaultLogLevel(level)
  }

  pub fn with_log_config(log: LogConfig) -> ConfigOption {
    ConfigOption::SetLogConfig(log)
  }
}
