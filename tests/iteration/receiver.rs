//! Explicit receiver binding

use std::cell::{Cell, RefCell};

use super::TestError;
use p_iteration::{Sequence, bind, filter, find, for_each_series, map};

struct Scale {
    factor: u64,
    calls: Cell<usize>,
}

impl Scale {
    fn apply(&self, n: u64) -> u64 {
        self.calls.set(self.calls.get() + 1);
        n * self.factor
    }
}

#[tokio::test]
async fn test_bound_receiver_is_seen_by_every_call() {
    let scale = Scale {
        factor: 10,
        calls: Cell::new(0),
    };
    let seq = Sequence::from(vec![1u64, 2, 3]);

    let scaled = map(
        &seq,
        bind(&scale, |this: &Scale, n, _, _| {
            let scaled = this.apply(n);
            async move { Ok::<_, TestError>(scaled) }
        }),
    )
    .await;
    assert_eq!(scaled, Ok(vec![Some(10), Some(20), Some(30)]));
    assert_eq!(scale.calls.get(), 3);

    let big = filter(
        &seq,
        bind(&scale, |this: &Scale, n, _, _| {
            let scaled = this.apply(n);
            async move { Ok::<_, TestError>(scaled > 15) }
        }),
    )
    .await;
    assert_eq!(big, Ok(vec![2, 3]));
    assert_eq!(scale.calls.get(), 6);
}

#[tokio::test]
async fn test_bind_with_find_and_series() {
    let wanted = 2u64;
    let seq = Sequence::from(vec![1u64, 2, 3]);
    let found = find(
        &seq,
        bind(&wanted, |this: &u64, n: Option<u64>, _, _| {
            let matched = n == Some(*this);
            async move { Ok::<_, TestError>(matched) }
        }),
    )
    .await;
    assert_eq!(found, Ok(Some(2)));

    let log = RefCell::new(Vec::new());
    let result = for_each_series(
        &seq,
        bind(&log, |this: &RefCell<Vec<usize>>, _: u64, index, _| {
            this.borrow_mut().push(index);
            async { Ok::<_, TestError>(()) }
        }),
    )
    .await;
    assert_eq!(result, Ok(()));
    assert_eq!(*log.borrow(), vec![0, 1, 2]);
}

#[tokio::test]
async fn test_bind_unsized_receiver() {
    let prefix: &str = "item";
    let seq = Sequence::from(vec![1u64, 2]);
    let labels = map(
        &seq,
        bind(prefix, |this: &str, n: u64, _, _| {
            let label = format!("{this}-{n}");
            async move { Ok::<_, TestError>(label) }
        }),
    )
    .await;
    assert_eq!(
        labels,
        Ok(vec![Some("item-1".to_string()), Some("item-2".to_string())])
    );
}

async fn count_present<T: Clone>(
    seq: &Sequence<T>,
    counter: &Cell<usize>,
) -> Result<(), TestError> {
    for_each_series(
        seq,
        bind(counter, |this: &Cell<usize>, _: T, _, _| {
            this.set(this.get() + 1);
            async { Ok(()) }
        }),
    )
    .await
}

#[tokio::test]
async fn test_bind_with_generic_element_type() {
    let counter = Cell::new(0);
    let numbers = Sequence::sparse([Some(1u8), None, Some(3)]);
    let words = Sequence::from(vec!["a".to_string(), "b".to_string()]);

    assert_eq!(count_present(&numbers, &counter).await, Ok(()));
    assert_eq!(count_present(&words, &counter).await, Ok(()));
    assert_eq!(counter.get(), 4);
}
