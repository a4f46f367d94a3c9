use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::actor::core::Pid;
use crate::actor::process::ActorProcess;
use crate::actor::ActorSystemError;


/// Pid table plus the structural parent/children links.
///
/// Routing only reads the map. Insertions and removals take the structure
/// lock so a parent check and the link update happen together.
#[derive(Debug)]
pub struct ProcessRegistry {
  sequence: AtomicU64,
  processes: DashMap<Pid, ActorProcess>,
  children: DashMap<Pid, BTreeSet<Pid>>,
  structure: Mutex<()>,
}

impl Default for ProcessRegistry {
  fn default() -> Self {
    Self::new()
  }
}

impl ProcessRegistry {
  pub fn new() -> Self {
    Self {
      sequence: AtomicU64::new(1),
      processes: DashMap::new(),
      children: DashMap::new(),
      structure: Mutex::new(()),
    }
  }

  /// Next unused pid. Pids are never handed out twice.
  pub fn next_pid(&self) -> Pid {
    Pid::new(self.sequence.fetch_add(1, Ordering::SeqCst))
  }

  pub async fn add_process(&self, process: ActorProcess, parent: Option<Pid>) -> Result<(), ActorSystemError> {
    let _guard = self.structure.lock().await;
    let pid = process.pid();
    if let Some(parent) = parent {
      if !self.processes.contains_key(&parent) {
        return Err(ActorSystemError::ActorNotFound(parent));
      }
      self.children.entry(parent).or_default().insert(pid);
    }
    self.processes.insert(pid, process);
    tracing::debug!("ProcessRegistry::add_process: pid = {}, parent = {:?}", pid, parent);
    Ok(())
  }

  pub async fn remove_process(&self, pid: Pid, parent: Option<Pid>) -> Option<ActorProcess> {
    let _guard = self.structure.lock().await;
    let removed = self.processes.remove(&pid).map(|(_, process)| process);
    if let Some(parent) = parent {
      if let Some(mut siblings) = self.children.get_mut(&parent) {
        siblings.remove(&pid);
      }
    }
    self.children.remove(&pid);
    tracing::debug!("ProcessRegistry::remove_process: pid = {}, found = {}", pid, removed.is_some());
    removed
  }

  pub fn get_process(&self, pid: &Pid) -> Option<ActorProcess> {
    self.processes.get(pid).map(|entry| entry.value().clone())
  }

  pub fn contains(&self, pid: &Pid) -> bool {
    self.processes.contains_key(pid)
  }

  pub fn children_of(&self, pid: &Pid) -> Vec<Pid> {
    self
      .children
      .get(pid)
      .map(|entry| entry.value().iter().copied().collect())
      .unwrap_or_default()
  }

  pub fn pids(&self) -> Vec<Pid> {
    let mut pids = self.processes.iter().map(|entry| *entry.key()).collect::<Vec<_>>();
    pids.sort();
    pids
  }

  pub fn len(&self) -> usize {
    self.processes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.processes.is_empty()
  }
}
