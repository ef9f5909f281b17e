//! filter / filter_series tests

use super::{Recorder, TestError, Value, assert_elapsed, delay, sparse_six};
use p_iteration::{Sequence, filter, filter_series};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_filter() {
    let recorder = Recorder::new();
    let seq = Sequence::from(vec![Value::Num(2), Value::Num(1), Value::Str("3")]);
    let start = Instant::now();

    let numbers = filter(&seq, |value, index, array| {
        let recorder = &recorder;
        async move {
            delay(value.weight() * 100).await;
            assert_eq!(array.resolve(index).await.as_ref(), Some(&value));
            recorder.record(value.clone());
            Ok::<_, TestError>(value.is_number())
        }
    })
    .await;

    // Kept elements follow the input order, not completion order.
    assert_eq!(numbers, Ok(vec![Value::Num(2), Value::Num(1)]));
    assert_eq!(
        recorder.seen(),
        vec![Value::Str("3"), Value::Num(1), Value::Num(2)]
    );
    assert_elapsed(start, 200);
}

#[tokio::test(start_paused = true)]
async fn test_filter_series() {
    let recorder = Recorder::new();
    let seq = Sequence::from(vec![Value::Num(2), Value::Num(1), Value::Str("3")]);
    let start = Instant::now();

    let numbers = filter_series(&seq, |value, _, _| {
        let recorder = &recorder;
        async move {
            delay(value.weight() * 100).await;
            recorder.record(value.clone());
            Ok::<_, TestError>(value.is_number())
        }
    })
    .await;

    assert_eq!(numbers, Ok(vec![Value::Num(2), Value::Num(1)]));
    assert_eq!(
        recorder.seen(),
        vec![Value::Num(2), Value::Num(1), Value::Str("3")]
    );
    assert_elapsed(start, 300);
}

#[tokio::test]
async fn test_filter_keeps_originals_not_results() {
    let seq = Sequence::from(vec!["", "a", "bb"]);
    // The callback returns a length; the result holds the strings.
    let kept = filter(&seq, |s, _, _| async move { Ok::<_, TestError>(s.len()) }).await;
    assert_eq!(kept, Ok(vec!["a", "bb"]));
}

#[tokio::test]
async fn test_filter_skips_holes() {
    let seq = sparse_six();
    let parallel = filter(&seq, |n, _, _| async move { Ok::<_, TestError>(n > 20) }).await;
    assert_eq!(parallel, Ok(vec![30, 40, 60]));

    let series = filter_series(&seq, |n, _, _| async move { Ok::<_, TestError>(n < 50) }).await;
    assert_eq!(series, Ok(vec![10, 30, 40]));
}

#[tokio::test]
async fn test_filter_empty_results() {
    let empty: Sequence<u64> = Sequence::new();
    let kept = filter(&empty, |_, _, _| async { Ok::<_, TestError>(true) }).await;
    assert_eq!(kept, Ok(vec![]));

    let seq = Sequence::from(vec![1u64, 2]);
    let kept = filter_series(&seq, |_, _, _| async { Ok::<_, TestError>(false) }).await;
    assert_eq!(kept, Ok(vec![]));
}
