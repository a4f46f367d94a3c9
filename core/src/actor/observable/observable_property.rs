use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::actor::context::ActorContext;
use crate::actor::dispatch::DispatchError;
use crate::actor::message::{Message, MessageHandle};

type Setter<T> = Arc<dyn Fn(T) -> T + Send + Sync + 'static>;

/// An actor field whose writes are published to its subscribers.
///
/// Every write goes through the setter (identity unless given), is stored,
/// then announced through [`ActorContext::notify`].
pub struct ObservableProperty<T> {
  name: &'static str,
  value: T,
  setter: Setter<T>,
}

impl<T> ObservableProperty<T>
where
  T: Message + Clone,
{
  pub fn new(name: &'static str, value: T) -> Self {
    Self {
      name,
      value,
      setter: Arc::new(|v| v),
    }
  }

  /// `initial` goes through the setter too.
  pub fn with_setter<F>(name: &'static str, initial: T, setter: F) -> Self
  where
    F: Fn(T) -> T + Send + Sync + 'static, {
    let value = setter(initial);
    Self {
      name,
      value,
      setter: Arc::new(setter),
    }
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn get(&self) -> &T {
    &self.value
  }

  pub fn to_handle(&self) -> MessageHandle {
    MessageHandle::new(self.value.clone())
  }

  /// Coerces, stores and notifies. Returns the stored value.
  pub fn set(&mut self, ctx: &mut ActorContext, value: T) -> &T {
    self.value = (self.setter)(value);
    ctx.notify(self.name, self.to_handle());
    &self.value
  }

  pub fn set_from_handle(&mut self, ctx: &mut ActorContext, value: &MessageHandle) -> Result<&T, DispatchError> {
    match value.to_typed::<T>() {
      Some(value) => Ok(self.set(ctx, value)),
      None => Err(DispatchError::InvalidPropertyValue {
        name: self.name.to_string(),
        expected: std::any::type_name::<T>().to_string(),
      }),
    }
  }
}

impl<T> ObservableProperty<T>
where
  T: Message + Clone + Default,
{
  pub fn with_default(name: &'static str) -> Self {
    Self::new(name, T::default())
  }
}

impl<T: Debug> Debug for ObservableProperty<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ObservableProperty")
      .field("name", &self.name)
      .field("value", &self.value)
      .finish()
  }
}

/// A setter pinning values into `[lo, hi]`.
pub fn clamp<T>(lo: T, hi: T) -> impl Fn(T) -> T + Send + Sync + 'static
where
  T: PartialOrd + Clone + Send + Sync + 'static, {
  move |value| {
    if value < lo {
      lo.clone()
    } else if value > hi {
      hi.clone()
    } else {
      value
    }
  }
}
