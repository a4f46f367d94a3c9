use std::time::Duration;

use crate::collections::element::Element;
use crate::collections::{MpscUnboundedChannelQueue, QueueBase, QueueError, QueueReader, QueueSize, QueueWriter};

#[derive(Debug, Clone, PartialEq)]
struct TestElement(i32);

impl Element for TestElement {}

#[tokio::test]
async fn test_new_queue() {
  let queue = MpscUnboundedChannelQueue::<TestElement>::new();
  assert_eq!(queue.capacity(), QueueSize::Limitless);
  assert_eq!(queue.len(), QueueSize::Limited(0));
  assert!(queue.is_empty());
  assert!(!queue.is_closed());
}

#[tokio::test]
async fn test_offer_and_poll_keep_fifo_order() {
  let mut queue = MpscUnboundedChannelQueue::<TestElement>::new();

  for i in 0..5 {
    assert!(queue.offer(TestElement(i)).is_ok());
  }
  assert_eq!(queue.len(), QueueSize::Limited(5));
  assert_eq!(queue.len().to_usize(), 5);
  assert_eq!(queue.capacity().to_usize(), usize::MAX);

  for i in 0..5 {
    let element = queue.poll().await.unwrap().unwrap();
    assert_eq!(element, TestElement(i));
  }

  assert_eq!(queue.len(), QueueSize::Limited(0));
  assert!(queue.poll().await.unwrap().is_none());
}

#[tokio::test]
async fn test_take_waits_for_an_offer() {
  let mut queue = MpscUnboundedChannelQueue::<TestElement>::new();
  let writer = queue.clone();

  let h = tokio::spawn(async move {
    tokio::time::sleep(Duration::from_millis(50)).await;
    writer.offer(TestElement(7)).unwrap();
  });

  let element = tokio::time::timeout(Duration::from_secs(1), queue.take())
    .await
    .expect("take timed out")
    .unwrap();
  assert_eq!(element, TestElement(7));
  h.await.unwrap();
}

#[tokio::test]
async fn test_clean_up_closes_the_queue() {
  let mut queue = MpscUnboundedChannelQueue::<TestElement>::new();

  for i in 0..3 {
    queue.offer(TestElement(i)).unwrap();
  }

  let dropped = queue.clean_up().await;
  assert_eq!(dropped, 3);
  assert!(queue.is_closed());
  assert_eq!(queue.len(), QueueSize::Limited(0));

  match queue.offer(TestElement(4)) {
    Err(QueueError::OfferError(TestElement(4))) => {}
    other => panic!("Expected OfferError after clean_up, got {:?}", other),
  }

  match queue.poll().await {
    Err(QueueError::PollError) => {}
    other => panic!("Expected PollError after clean_up, got {:?}", other),
  }

  match queue.take().await {
    Err(QueueError::PollError) => {}
    other => panic!("Expected PollError after clean_up, got {:?}", other),
  }
}

#[tokio::test]
async fn test_concurrent_producers() {
  let mut queue = MpscUnboundedChannelQueue::<TestElement>::new();
  let mut handles = vec![];

  for i in 0..10 {
    let q = queue.clone();
    handles.push(tokio::spawn(async move {
      for j in 0..10 {
        q.offer(TestElement(i * 10 + j)).unwrap();
      }
    }));
  }

  for handle in handles {
    handle.await.unwrap();
  }

  let mut received = Vec::new();
  while let Some(e) = queue.poll().await.unwrap() {
    received.push(e.0);
  }
  received.sort();
  assert_eq!(received, (0..100).collect::<Vec<_>>());
  assert_eq!(queue.len(), QueueSize::Limited(0));
}
