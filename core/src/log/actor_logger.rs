use std::fmt::Display;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::actor::core::Pid;

pub const LEVEL_NOTSET: u8 = 0;
pub const LEVEL_DEBUG: u8 = 10;
pub const LEVEL_INFO: u8 = 20;
pub const LEVEL_WARN: u8 = 30;
pub const LEVEL_ERROR: u8 = 40;
pub const LEVEL_CRITICAL: u8 = 50;

/// Per-actor logger. Records go through `tracing` with the actor's name and
/// pid attached; the verbosity threshold is local to the actor and shared
/// with its [`ActorHandle`](crate::actor::core::ActorHandle).
#[derive(Debug, Clone)]
pub struct ActorLogger {
  pid: Pid,
  name: Arc<str>,
  level: Arc<AtomicU8>,
}

impl ActorLogger {
  pub fn new(pid: Pid, name: &str, level: i64) -> Self {
    Self {
      pid,
      name: Arc::from(name),
      level: Arc::new(AtomicU8::new(Self::clamp(level))),
    }
  }

  /// Levels outside `0..=50` are pinned to the nearest bound.
  pub fn clamp(level: i64) -> u8 {
    level.clamp(i64::from(LEVEL_NOTSET), i64::from(LEVEL_CRITICAL)) as u8
  }

  pub fn level(&self) -> u8 {
    self.level.load(Ordering::Relaxed)
  }

  pub fn set_level(&self, level: i64) -> u8 {
    let level = Self::clamp(level);
    self.level.store(level, Ordering::Relaxed);
    level
  }

  pub(crate) fn level_cell(&self) -> Arc<AtomicU8> {
    self.level.clone()
  }

  pub fn is_enabled(&self, level: u8) -> bool {
    level >= self.level()
  }

  pub fn debug(&self, message: impl Display) {
    if self.is_enabled(LEVEL_DEBUG) {
      tracing::debug!(actor = %self.name, pid = %self.pid, "{}", message);
    }
  }

  pub fn info(&self, message: impl Display) {
    if self.is_enabled(LEVEL_INFO) {
      tracing::info!(actor = %self.name, pid = %self.pid, "{}", message);
    }
  }

  pub fn warn(&self, message: impl Display) {
    if self.is_enabled(LEVEL_WARN) {
      tracing::warn!(actor = %self.name, pid = %self.pid, "{}", message);
    }
  }

  pub fn error(&self, message: impl Display) {
    if self.is_enabled(LEVEL_ERROR) {
      tracing::error!(actor = %self.name, pid = %self.pid, "{}", message);
    }
  }

  /// `tracing` has no level above error; critical records are errors tagged
  /// `critical = true`.
  pub fn critical(&self, message: impl Display) {
    if self.is_enabled(LEVEL_CRITICAL) {
      tracing::error!(actor = %self.name, pid = %self.pid, critical = true, "{}", message);
    }
  }
}
