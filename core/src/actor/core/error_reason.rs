use std::error::Error;
use std::fmt::{Debug, Display};
use std::sync::Arc;

/// A failure description with an optional underlying cause.
#[derive(Debug, Clone)]
pub struct ErrorReason {
  message: String,
  cause: Option<Arc<dyn Error + Send + Sync>>,
}

impl ErrorReason {
  pub fn new<E: Error + Send + Sync + 'static>(error: E) -> Self {
    Self {
      message: error.to_string(),
      cause: Some(Arc::new(error)),
    }
  }

  pub fn from_message(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      cause: None,
    }
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn cause(&self) -> Option<&(dyn Error + Send + Sync)> {
    self.cause.as_deref()
  }
}

impl PartialEq for ErrorReason {
  fn eq(&self, other: &Self) -> bool {
    self.message == other.message
  }
}

impl Eq for ErrorReason {}

impl Display for ErrorReason {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.message)
  }
}

impl Error for ErrorReason {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    self.cause.as_deref().map(|e| e as &(dyn Error + 'static))
  }
}

impl From<&str> for ErrorReason {
  fn from(message: &str) -> Self {
    Self::from_message(message)
  }
}

impl From<String> for ErrorReason {
  fn from(message: String) -> Self {
    Self::from_message(message)
  }
}

static_assertions::assert_impl_all!(ErrorReason: Send, Sync);
