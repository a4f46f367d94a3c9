use std::env;

pub const DEFAULT_LOG_HOST: &str = "127.0.0.1";
pub const DEFAULT_LOG_PORT: u16 = 8080;

/// Where log lines go, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
  pub host: String,
  pub port: u16,
  /// Ship lines to the collector at `host:port` instead of stderr.
  pub remote: bool,
  /// `EnvFilter` directives; `None` means `info`.
  pub filter: Option<String>,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      host: DEFAULT_LOG_HOST.to_string(),
      port: DEFAULT_LOG_PORT,
      remote: false,
      filter: None,
    }
  }
}

impl LogConfig {
  /// Reads `LOG_HOST`, `LOG_PORT` and `RUST_LOG`. Setting either of the
  /// first two turns the collector on.
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let mut config = Self::default();
    if let Some(host) = lookup("LOG_HOST").filter(|h| !h.is_empty()) {
      config.host = host;
      config.remote = true;
    }
    if let Some(port) = lookup("LOG_PORT") {
      match port.parse::<u16>() {
        Ok(port) => {
          config.port = port;
          config.remote = true;
        }
        Err(err) => tracing::warn!("LogConfig::from_env: ignoring LOG_PORT = {:?}: {}", port, err),
      }
    }
    config.filter = lookup("RUST_LOG").filter(|f| !f.is_empty());
    config
  }

  pub fn with_remote(mut self, host: impl Into<String>, port: u16) -> Self {
    self.host = host.into();
    self.port = port;
    self.remote = true;
    self
  }

  pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
    self.filter = Some(filter.into());
    self
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}
