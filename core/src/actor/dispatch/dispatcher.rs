use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use tokio::runtime::Runtime;


pub struct Runnable(Box<dyn FnOnce() -> BoxFuture<'static, ()> + Send + 'static>);

impl Runnable {
  pub fn new<F, Fut>(f: F) -> Self
  where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static, {
    Self(Box::new(move || Box::pin(f()) as BoxFuture<'static, ()>))
  }

  pub async fn run(self) {
    (self.0)().await;
  }
}

/// Decides where actor dispatch loops run.
#[async_trait]
pub trait Dispatcher: Debug + Send + Sync + 'static {
  async fn schedule(&self, runner: Runnable);
}

#[derive(Debug, Clone)]
pub struct DispatcherHandle(Arc<dyn Dispatcher>);

impl DispatcherHandle {
  pub fn new_arc(dispatcher: Arc<dyn Dispatcher>) -> Self {
    Self(dispatcher)
  }

  pub fn new(dispatcher: impl Dispatcher + 'static) -> Self {
    Self(Arc::new(dispatcher))
  }
}

impl Default for DispatcherHandle {
  fn default() -> Self {
    Self::new(TokioRuntimeContextDispatcher::new())
  }
}

#[async_trait]
impl Dispatcher for DispatcherHandle {
  async fn schedule(&self, runner: Runnable) {
    self.0.schedule(runner).await;
  }
}

// --- TokioRuntimeContextDispatcher implementation

/// Spawns onto whichever tokio runtime the caller is running in.
#[derive(Debug, Clone, Default)]
pub struct TokioRuntimeContextDispatcher;

impl TokioRuntimeContextDispatcher {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl Dispatcher for TokioRuntimeContextDispatcher {
  async fn schedule(&self, runner: Runnable) {
    tokio::spawn(runner.run());
  }
}

// --- TokioRuntimeDispatcher implementation

/// Spawns onto a dedicated runtime owned by the dispatcher.
///
/// The runtime is shut down in the background when the last clone is
/// dropped, so dropping it from inside another runtime does not panic.
#[derive(Debug, Clone)]
pub struct TokioRuntimeDispatcher {
  runtime: Option<Arc<Runtime>>,
}

impl TokioRuntimeDispatcher {
  pub fn new() -> Result<Self, std::io::Error> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
      .thread_name("sigactor-dispatcher")
      .enable_all()
      .build()?;
    Ok(Self::with_runtime(runtime))
  }

  pub fn with_runtime(runtime: Runtime) -> Self {
    Self {
      runtime: Some(Arc::new(runtime)),
    }
  }
}

#[async_trait]
impl Dispatcher for TokioRuntimeDispatcher {
  async fn schedule(&self, runner: Runnable) {
    match &self.runtime {
      Some(runtime) => {
        runtime.spawn(runner.run());
      }
      None => tracing::warn!("TokioRuntimeDispatcher::schedule: runtime already shut down"),
    }
  }
}

impl Drop for TokioRuntimeDispatcher {
  fn drop(&mut self) {
    if let Some(runtime) = self.runtime.take() {
      if let Ok(runtime) = Arc::try_unwrap(runtime) {
        runtime.shutdown_background();
      }
    }
  }
}
