mod common;

use std::time::{Duration, Instant};

use common::{init_tracing, Faulty, FailingInit, Observed, Probe};
use sigactor_core_rs::actor::core::{ActorConfig, Pid, Props};
use sigactor_core_rs::actor::message::{MessageHandle, SignalMessage};
use sigactor_core_rs::actor::{ActorSystem, ActorSystemError, ConfigOption};

const GRACE: Duration = Duration::from_millis(100);

async fn system() -> ActorSystem {
  ActorSystem::new_config_options([ConfigOption::with_shutdown_grace_period(GRACE)])
    .await
    .unwrap()
}

#[tokio::test]
async fn test_unhandled_message_is_not_escalated() {
  init_tracing();
  let system = system().await;
  let faulty = system
    .spawn(Props::from_actor_producer(|| Faulty), Pid::ROOT, "faulty", ActorConfig::new())
    .await
    .unwrap();

  system.send(faulty, MessageHandle::new("hello".to_string()), Pid::ROOT).unwrap();
  tokio::time::sleep(Duration::from_millis(50)).await;
  assert!(system.is_alive(faulty));
  assert!(!system.is_shutting_down());
}

#[tokio::test]
async fn test_fatal_condition_shuts_the_system_down_within_grace() {
  init_tracing();
  let system = system().await;
  let faulty = system
    .spawn(Props::from_actor_producer(|| Faulty), Pid::ROOT, "faulty", ActorConfig::new())
    .await
    .unwrap();
  let mut bystander = Probe::spawn(&system, Pid::ROOT, "bystander").await;
  assert_eq!(bystander.next().await, Observed::Init);

  let started = Instant::now();
  system.send(faulty, MessageHandle::new("boom".to_string()), Pid::ROOT).unwrap();
  tokio::time::timeout(GRACE * 10, system.wait_terminated())
    .await
    .expect("system did not terminate");

  assert!(started.elapsed() < GRACE * 5);
  assert_eq!(bystander.next().await, Observed::Terminate);
  assert!(system.live_pids().is_empty());
  assert_eq!(
    system.create(Probe::props().0, Pid::ROOT, "late", ActorConfig::new()).await,
    Err(ActorSystemError::ShuttingDown)
  );
}

#[tokio::test]
async fn test_failed_init_escalates() {
  init_tracing();
  let system = system().await;
  system
    .spawn(Props::from_actor_producer(|| FailingInit), Pid::ROOT, "uncalibrated", ActorConfig::new())
    .await
    .unwrap();

  tokio::time::timeout(GRACE * 10, system.wait_terminated())
    .await
    .expect("system did not terminate");
  assert!(system.is_terminated());
}

#[tokio::test]
async fn test_sigint_to_root_initiates_shutdown() {
  init_tracing();
  let system = system().await;
  let mut probe = Probe::spawn(&system, Pid::ROOT, "probe").await;
  assert_eq!(probe.next().await, Observed::Init);

  system
    .send(Pid::ROOT, SignalMessage::sigint("operator request"), probe.pid)
    .unwrap();
  tokio::time::timeout(GRACE * 10, system.wait_terminated())
    .await
    .expect("system did not terminate");
  assert_eq!(probe.next().await, Observed::Terminate);
}

#[tokio::test]
async fn test_explicit_shutdown_stops_every_actor() {
  init_tracing();
  let system = system().await;
  let mut parent = Probe::spawn(&system, Pid::ROOT, "parent").await;
  let mut child = Probe::spawn(&system, parent.pid, "child").await;
  let mut idle = Probe::create(&system, Pid::ROOT, "idle").await;
  assert_eq!(child.next().await, Observed::Init);

  system.shutdown();
  tokio::time::timeout(GRACE * 10, system.wait_terminated())
    .await
    .expect("system did not terminate");

  assert!(system.live_pids().is_empty());
  loop {
    if parent.next().await == Observed::Terminate {
      break;
    }
  }
  assert_eq!(child.next().await, Observed::Terminate);
  idle.expect_silence(Duration::from_millis(50)).await;
}
