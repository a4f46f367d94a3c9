use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::actor::core::{Actor, ActorConfig, ActorError};

type ActorProducer = dyn Fn(&ActorConfig) -> Result<Box<dyn Actor>, ActorError> + Send + Sync + 'static;

/// Recipe for building an actor from its creation-time [`ActorConfig`].
#[derive(Clone)]
pub struct Props {
  type_name: String,
  producer: Arc<ActorProducer>,
}

impl Debug for Props {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Props").field("type_name", &self.type_name).finish()
  }
}

impl Props {
  /// Builds props from a fallible producer; a rejected config surfaces as
  /// `SpawnFailed` from `create`.
  pub fn from_producer<A, F>(producer: F) -> Props
  where
    A: Actor,
    F: Fn(&ActorConfig) -> Result<A, ActorError> + Send + Sync + 'static, {
    let type_name = short_type_name::<A>();
    Props {
      type_name,
      producer: Arc::new(move |config: &ActorConfig| producer(config).map(|actor| Box::new(actor) as Box<dyn Actor>)),
    }
  }

  pub fn from_actor_producer<A, F>(producer: F) -> Props
  where
    A: Actor,
    F: Fn() -> A + Send + Sync + 'static, {
    Self::from_producer(move |_| Ok(producer()))
  }

  pub fn type_name(&self) -> &str {
    &self.type_name
  }

  pub(crate) fn produce(&self, config: &ActorConfig) -> Result<Box<dyn Actor>, ActorError> {
    (self.producer)(config)
  }
}

fn short_type_name<A>() -> String {
  let full = std::any::type_name::<A>();
  let base = full.split('<').next().unwrap_or(full);
  base.rsplit("::").next().unwrap_or(base).to_string()
}
