use std::collections::HashMap;

use crate::actor::message::{Message, MessageHandle};

/// Open key/value map handed to an actor's producer at creation.
#[derive(Debug, Clone, Default)]
pub struct ActorConfig {
  entries: HashMap<String, MessageHandle>,
}

impl ActorConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with(mut self, key: impl Into<String>, value: impl Into<MessageHandle>) -> Self {
    self.insert(key, value);
    self
  }

  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MessageHandle>) {
    self.entries.insert(key.into(), value.into());
  }

  pub fn get(&self, key: &str) -> Option<&MessageHandle> {
    self.entries.get(key)
  }

  pub fn get_typed<T: Message + Clone>(&self, key: &str) -> Option<T> {
    self.get(key).and_then(|v| v.to_typed::<T>())
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.entries.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
