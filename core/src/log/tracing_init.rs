use std::error::Error;
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::Mutex;
use std::time::Duration;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::log::LogConfig;

const CONNECT_TIMEOUT: Duration = Duration::from_millis(500);

/// Which writer [`init_tracing`] installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
  Stderr,
  Collector,
}

/// Installs the global `tracing` subscriber described by `config`.
///
/// With `remote` set, lines are written to a TCP collector; if it cannot be
/// reached the subscriber falls back to stderr.
pub fn init_tracing(config: &LogConfig) -> Result<LogSink, Box<dyn Error + Send + Sync>> {
  let filter = match config.filter.as_deref() {
    Some(directives) => EnvFilter::new(directives),
    None => EnvFilter::new("info"),
  };
  let (writer, sink) = match connect_collector(config) {
    Some(stream) => (BoxMakeWriter::new(Mutex::new(stream)), LogSink::Collector),
    None => (BoxMakeWriter::new(std::io::stderr), LogSink::Stderr),
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(writer)
    .with_ansi(sink == LogSink::Stderr)
    .with_file(true)
    .with_line_number(true)
    .try_init()?;
  Ok(sink)
}

fn connect_collector(config: &LogConfig) -> Option<TcpStream> {
  if !config.remote {
    return None;
  }
  let address = config.address();
  let addrs = match address.to_socket_addrs() {
    Ok(addrs) => addrs.collect::<Vec<_>>(),
    Err(err) => {
      eprintln!("log collector {} does not resolve: {}", address, err);
      return None;
    }
  };
  for addr in addrs {
    if let Ok(stream) = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT) {
      return Some(stream);
    }
  }
  eprintln!("log collector {} is unreachable, logging to stderr", address);
  None
}
