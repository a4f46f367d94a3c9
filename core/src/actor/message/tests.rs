use strum::IntoEnumIterator;

use crate::actor::core::Pid;
use crate::actor::message::*;

#[test]
fn test_signal_kind_codes_are_stable() {
  let codes = SignalKind::iter().map(u8::from).collect::<Vec<_>>();
  assert_eq!(codes, (1..=10).collect::<Vec<u8>>());
  assert_eq!(SignalKind::try_from(9u8).unwrap(), SignalKind::DispatchError);
  assert!(SignalKind::try_from(0u8).is_err());
}

#[test]
fn test_signal_kind_display() {
  assert_eq!(SignalKind::ChildInit.to_string(), "CHILD_INIT");
  assert_eq!(SignalKind::DispatchError.to_string(), "DISPATCH_ERROR");
  assert_eq!(SignalKind::Sigint.to_string(), "SIGINT");
}

#[test]
fn test_only_init_exit_poison_run_before_init() {
  let early = SignalKind::iter().filter(|s| s.runs_before_init()).collect::<Vec<_>>();
  assert_eq!(early, vec![SignalKind::Init, SignalKind::Exit, SignalKind::Poison]);
}

#[test]
fn test_signal_message_equality_is_by_value() {
  assert_eq!(SignalMessage::child_init(Pid::new(3)), SignalMessage::child_init(Pid::new(3)));
  assert_ne!(SignalMessage::child_init(Pid::new(3)), SignalMessage::child_deinit(Pid::new(3)));
  assert_eq!(
    MessageHandle::new(SignalMessage::subscribe("temperature")),
    MessageHandle::new(SignalMessage::subscribe("temperature"))
  );
}

#[test]
fn test_signal_message_display() {
  assert_eq!(SignalMessage::exit().to_string(), "Message(sig=EXIT, args=None)");
  assert_eq!(
    SignalMessage::child_init(Pid::new(4)).to_string(),
    "Message(sig=CHILD_INIT, args=4)"
  );
}

#[test]
fn test_payload_accessors() {
  assert_eq!(Payload::from(Pid::new(2)).as_pid(), Some(Pid::new(2)));
  assert_eq!(Payload::from("temperature").as_text(), Some("temperature"));
  assert!(Payload::default().is_empty());
  assert_eq!(Payload::value(42.0f64).to_typed::<f64>(), Some(42.0));
  assert_eq!(Payload::value(30i32).as_i64(), Some(30));
  assert_eq!(Payload::value(30u8).as_i64(), Some(30));
  assert_eq!(Payload::from("30").as_i64(), None);
}

#[test]
fn test_logging_signal_carries_level() {
  let message = SignalMessage::logging(10);
  assert_eq!(message.signal(), SignalKind::Logging);
  assert_eq!(message.args().as_i64(), Some(10));
}

#[test]
fn test_property_change_event_uses_kebab_case() {
  let event = Event::property_change("target_temperature", MessageHandle::new(21.5f64));
  assert!(event.is_property_change());
  assert_eq!(event.kind(), PROPERTY_CHANGE);
  assert_eq!(event.name(), "target-temperature");
  assert_eq!(event.args().to_typed::<f64>(), Some(21.5));
}

#[test]
fn test_response_reply_to_copies_name_and_id() {
  let request = Request::new("query", "temperature", Payload::Empty).with_id(7);
  let response = Response::reply_to(&request, Payload::value(42.0f64));
  assert_eq!(response.id(), 7);
  assert_eq!(response.name(), "temperature");
  assert!(response.answers(&request));
  assert_eq!(Request::new("query", "x", Payload::Empty).id(), -1);
}

#[test]
fn test_envelope_runs_before_init() {
  let init = MessageEnvelope::new(Pid::ROOT, MessageHandle::new(SignalMessage::init()));
  let child_init = MessageEnvelope::new(Pid::ROOT, MessageHandle::new(SignalMessage::child_init(Pid::new(1))));
  let value = MessageEnvelope::new(Pid::ROOT, MessageHandle::new(1i32));
  assert!(init.runs_before_init());
  assert!(!child_init.runs_before_init());
  assert!(!value.runs_before_init());
}

#[test]
fn test_dispatch_context_display() {
  let ctx = DispatchContext::new(Pid::new(1), Pid::new(2), MessageHandle::new("hello".to_string()));
  assert_eq!(
    ctx.to_string(),
    "MsgCtx(original_sender=1, original_recipient=2, message=\"hello\")"
  );
}
