//! for_each / for_each_series tests

use super::{Recorder, TestError, assert_elapsed, delay};
use p_iteration::{Sequence, for_each, for_each_series};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_for_each_runs_in_parallel() {
    let recorder = Recorder::new();
    let total = std::cell::Cell::new(0);
    let seq = Sequence::from(vec![2u64, 1, 3]);
    let start = Instant::now();

    let result = for_each(&seq, |num, index, array| {
        let recorder = &recorder;
        let total = &total;
        async move {
            delay(num * 100).await;
            assert_eq!(array.resolve(index).await, Some(num));
            recorder.record(num);
            total.set(total.get() + num);
            Ok::<_, TestError>(())
        }
    })
    .await;

    assert_eq!(result, Ok(()));
    // Completion order follows the delays, not the indices.
    assert_eq!(recorder.seen(), vec![1, 2, 3]);
    assert_eq!(total.get(), 6);
    assert_elapsed(start, 300);
}

#[tokio::test(start_paused = true)]
async fn test_for_each_series_runs_one_at_a_time() {
    let recorder = Recorder::new();
    let seq = Sequence::from(vec![2u64, 1, 3]);
    let start = Instant::now();

    let result = for_each_series(&seq, |num, _, _| {
        let recorder = &recorder;
        async move {
            delay(num * 100).await;
            recorder.record(num);
            Ok::<_, TestError>(())
        }
    })
    .await;

    assert_eq!(result, Ok(()));
    assert_eq!(recorder.seen(), vec![2, 1, 3]);
    assert_elapsed(start, 600);
}

#[tokio::test]
async fn test_for_each_invokes_in_index_order() {
    let seq = Sequence::from(vec!["a", "b", "c"]);
    let mut order = Vec::new();
    let result = for_each_series(&seq, |value, index, _| {
        order.push((index, value));
        async { Ok::<_, TestError>(()) }
    })
    .await;
    assert_eq!(result, Ok(()));
    assert_eq!(order, vec![(0, "a"), (1, "b"), (2, "c")]);

    // Parallel callbacks are invoked eagerly, before any of them is polled.
    let invoked = std::cell::RefCell::new(Vec::new());
    let polled = std::cell::Cell::new(0);
    let result = for_each(&seq, |_, index, _| {
        invoked.borrow_mut().push((index, polled.get()));
        let polled = &polled;
        async move {
            polled.set(polled.get() + 1);
            Ok::<_, TestError>(())
        }
    })
    .await;
    assert_eq!(result, Ok(()));
    assert_eq!(*invoked.borrow(), vec![(0, 0), (1, 0), (2, 0)]);
    assert_eq!(polled.get(), 3);
}

#[tokio::test]
async fn test_for_each_empty_sequence() {
    let seq: Sequence<u64> = Sequence::new();
    let recorder: Recorder<u64> = Recorder::new();
    let callback = |_: u64, _, _| {
        recorder.call();
        async { Ok::<_, TestError>(()) }
    };
    assert_eq!(for_each(&seq, callback).await, Ok(()));
    assert_eq!(for_each_series(&seq, callback).await, Ok(()));
    assert_eq!(recorder.calls(), 0);
}
