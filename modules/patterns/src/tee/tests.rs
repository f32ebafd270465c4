use std::time::Duration;

use super::tee;
use crate::{Context, Stream, StreamConfig, testing::RecordingSubscriber};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn both_outputs_receive_every_value_in_order() {
  let ctx = Context::new();
  let (left, right) = tee(&ctx, Stream::ready(1..=20));
  let (left, right) = tokio::join!(left.collect(), right.collect());
  let expected: Vec<_> = (1..=20).collect();
  assert_eq!(left, expected);
  assert_eq!(right, expected);
}

#[tokio::test]
async fn empty_input_closes_both_outputs() {
  let ctx = Context::new();
  let (left, right) = tee(&ctx, Stream::<u8>::ready([]));
  assert!(left.collect().await.is_empty());
  assert!(right.collect().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn slow_output_holds_back_the_fast_one() {
  let ctx = Context::new();
  let (mut left, mut right) = tee(&ctx, Stream::ready(['a', 'b', 'c']));
  assert_eq!(left.recv().await, Some('a'));
  assert_eq!(left.recv().await, Some('b'));
  // 'c' is not offered until the right side has taken 'b' as well.
  let blocked = tokio::time::timeout(Duration::from_secs(1), left.recv()).await;
  assert!(blocked.is_err());
  assert_eq!(right.recv().await, Some('a'));
  assert_eq!(right.recv().await, Some('b'));
  assert_eq!(left.recv().await, Some('c'));
  assert_eq!(right.recv().await, Some('c'));
  assert_eq!(left.recv().await, None);
  assert_eq!(right.recv().await, None);
}

#[tokio::test]
async fn cancellation_closes_both_outputs_once() {
  let ctx = Context::new();
  let (_sender, input) = Stream::<u32>::channel(&StreamConfig::default());
  let (left, right) = tee(&ctx, input);
  ctx.cancel();
  let (left, right) = tokio::join!(left.collect(), right.collect());
  assert!(left.is_empty());
  assert!(right.is_empty());
}

#[tokio::test]
async fn cancellation_abandons_undelivered_copy() {
  let ctx = Context::new();
  let (mut left, right) = tee(&ctx, Stream::ready([1, 2, 3]));
  assert_eq!(left.recv().await, Some(1));
  ctx.cancel();
  // The right side never read, yet both outputs still close.
  assert!(left.collect().await.len() <= 1);
  assert!(right.collect().await.len() <= 1);
}

#[tokio::test]
async fn dropped_output_does_not_stall_the_other() {
  let ctx = Context::new();
  let (left, right) = tee(&ctx, Stream::ready(0..5));
  drop(right);
  assert_eq!(left.collect().await, vec![0, 1, 2, 3, 4]);
}

#[tokio::test(start_paused = true)]
async fn dropping_both_outputs_releases_input() {
  let ctx = Context::new();
  let (sender, input) = Stream::<u32>::channel(&StreamConfig::default());
  let (left, right) = tee(&ctx, input);
  drop(left);
  drop(right);
  let released = tokio::time::timeout(Duration::from_secs(5), sender.closed()).await;
  assert!(released.is_ok());
  assert!(!ctx.is_done());
}

#[tokio::test(start_paused = true)]
async fn dropping_both_outputs_stops_consuming_infinite_input() {
  let ctx = Context::new();
  let (sender, input) = Stream::channel(&StreamConfig::default());
  let (left, right) = tee(&ctx, input);
  drop(left);
  drop(right);
  let mut accepted = 0_usize;
  while accepted < 1000 && sender.send(accepted).await.is_ok() {
    accepted += 1;
  }
  assert!(accepted < 1000);
}

#[tokio::test]
async fn abandoned_copies_are_not_counted_as_teed() {
  let collector = RecordingSubscriber::default();
  let _default = tracing::subscriber::set_default(collector.clone());

  let ctx = Context::new();
  let (mut left, right) = tee(&ctx, Stream::ready([1, 2]));
  assert_eq!(left.recv().await, Some(1));
  assert_eq!(left.recv().await, Some(2));
  ctx.cancel();
  assert!(left.collect().await.is_empty());
  assert_eq!(right.collect().await, vec![1]);

  let closing = collector.closing_event("tee").expect("tee event");
  assert_eq!(closing.counter("teed"), Some(1));
}
