use std::collections::{BTreeSet, HashMap};

use crate::actor::core::Pid;
use crate::actor::dispatch::DispatchError;
use crate::actor::message::{Event, MessageHandle};
use crate::actor::util::to_snake_case;
use crate::actor::{ActorSystem, ActorSystemError};


/// Subscriber bookkeeping for one actor's observable properties.
///
/// Only names the actor type declares can be observed. Each property keeps
/// its subscribers in registration order without duplicates.
#[derive(Debug, Clone, Default)]
pub struct ObservableProperties {
  declared: &'static [&'static str],
  observers: HashMap<String, Vec<Pid>>,
  known: BTreeSet<String>,
}

impl ObservableProperties {
  pub fn new(declared: &'static [&'static str]) -> Self {
    Self {
      declared,
      observers: HashMap::new(),
      known: BTreeSet::new(),
    }
  }

  /// Normalizes `name` and checks it against the declared list.
  pub fn resolve(&self, name: &str) -> Result<String, DispatchError> {
    let name = to_snake_case(name);
    if self.declared.iter().any(|declared| *declared == name) {
      Ok(name)
    } else {
      Err(DispatchError::UnknownProperty(name))
    }
  }

  pub fn is_declared(&self, name: &str) -> bool {
    self.resolve(name).is_ok()
  }

  pub fn declared(&self) -> &'static [&'static str] {
    self.declared
  }

  /// Returns `true` when `subscriber` was not registered before.
  pub fn register(&mut self, name: &str, subscriber: Pid) -> Result<bool, DispatchError> {
    let name = self.resolve(name)?;
    self.known.insert(name.clone());
    let observers = self.observers.entry(name).or_default();
    if observers.contains(&subscriber) {
      return Ok(false);
    }
    observers.push(subscriber);
    Ok(true)
  }

  /// Returns `true` when `subscriber` was registered.
  pub fn unregister(&mut self, name: &str, subscriber: Pid) -> Result<bool, DispatchError> {
    let name = self.resolve(name)?;
    match self.observers.get_mut(&name) {
      Some(observers) => {
        let before = observers.len();
        observers.retain(|pid| *pid != subscriber);
        Ok(observers.len() != before)
      }
      None => Ok(false),
    }
  }

  pub fn observers(&self, name: &str) -> &[Pid] {
    self
      .observers
      .get(&to_snake_case(name))
      .map(|observers| observers.as_slice())
      .unwrap_or(&[])
  }

  /// Names that have had at least one subscriber.
  pub fn known(&self) -> impl Iterator<Item = &str> {
    self.known.iter().map(|name| name.as_str())
  }

  /// Sends one property-change event to every subscriber of `name`, with
  /// `sender` as the explicit sender. Subscribers that no longer resolve are
  /// dropped. Returns how many events were delivered.
  pub fn notify(&mut self, system: &ActorSystem, sender: Pid, name: &str, value: &MessageHandle) -> usize {
    let name = to_snake_case(name);
    let Some(observers) = self.observers.get_mut(&name) else {
      return 0;
    };
    let event = Event::property_change(&name, value.clone());
    observers.retain(|observer| match system.send(*observer, event.clone(), sender) {
      Ok(()) => true,
      Err(err) => {
        tracing::debug!("ObservableProperties::notify: pruning {} from {}: {}", observer, name, err);
        false
      }
    });
    observers.len()
  }

  pub fn notify_one(
    &self,
    system: &ActorSystem,
    sender: Pid,
    receiver: Pid,
    name: &str,
    value: &MessageHandle,
  ) -> Result<(), ActorSystemError> {
    system.send(receiver, Event::property_change(name, value.clone()), sender)
  }
}
