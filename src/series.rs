//! Series variants and reduction.
//!
//! One callback runs at a time: the call for element `i + 1` is not made
//! until the call for element `i` has settled. Because calls never overlap,
//! callbacks here may be `FnMut`.

use futures::{TryFuture, TryFutureExt};
use tracing::{debug, trace};

use crate::error::ReduceError;
use crate::sequence::{Element, Sequence};
use crate::truthy::Truthy;

/// Same as [`for_each`](crate::for_each), one element at a time.
pub async fn for_each_series<'a, T, E, F, Fut>(
    sequence: &'a Sequence<T>,
    mut callback: F,
) -> Result<(), E>
where
    T: Clone,
    F: FnMut(T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Error = E>,
{
    for (index, element) in sequence.elements() {
        let value = element.resolve().await;
        TryFutureExt::into_future(callback(value, index, sequence)).await?;
    }
    Ok(())
}

/// Same as [`map`](crate::map), one element at a time.
pub async fn map_series<'a, T, U, E, F, Fut>(
    sequence: &'a Sequence<T>,
    mut callback: F,
) -> Result<Vec<Option<U>>, E>
where
    T: Clone,
    F: FnMut(T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = U, Error = E>,
{
    let mut results: Vec<Option<U>> = std::iter::repeat_with(|| None)
        .take(sequence.len())
        .collect();
    for (index, element) in sequence.elements() {
        let value = element.resolve().await;
        let mapped = TryFutureExt::into_future(callback(value, index, sequence)).await?;
        if let Some(slot) = results.get_mut(index) {
            *slot = Some(mapped);
        }
    }
    Ok(results)
}

/// Same as [`find`](crate::find), one index at a time. Stops calling the
/// callback after the first truthy result.
pub async fn find_series<'a, T, P, E, F, Fut>(
    sequence: &'a Sequence<T>,
    mut callback: F,
) -> Result<Option<T>, E>
where
    T: Clone,
    P: Truthy,
    F: FnMut(Option<T>, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = P, Error = E>,
{
    for index in 0..sequence.len() {
        let value = sequence.resolve(index).await;
        let verdict = TryFutureExt::into_future(callback(value.clone(), index, sequence)).await?;
        if verdict.is_truthy() {
            trace!(index, "find_series matched");
            return Ok(value);
        }
    }
    Ok(None)
}

/// Same as [`find_index`](crate::find_index), one index at a time.
pub async fn find_index_series<'a, T, P, E, F, Fut>(
    sequence: &'a Sequence<T>,
    mut callback: F,
) -> Result<Option<usize>, E>
where
    T: Clone,
    P: Truthy,
    F: FnMut(Option<T>, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = P, Error = E>,
{
    for index in 0..sequence.len() {
        let value = sequence.resolve(index).await;
        let verdict = TryFutureExt::into_future(callback(value, index, sequence)).await?;
        if verdict.is_truthy() {
            trace!(index, "find_index_series matched");
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// Same as [`some`](crate::some), one element at a time.
pub async fn some_series<'a, T, P, E, F, Fut>(
    sequence: &'a Sequence<T>,
    mut callback: F,
) -> Result<bool, E>
where
    T: Clone,
    P: Truthy,
    F: FnMut(T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = P, Error = E>,
{
    for (index, element) in sequence.elements() {
        let value = element.resolve().await;
        if TryFutureExt::into_future(callback(value, index, sequence))
            .await?
            .is_truthy()
        {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Same as [`every`](crate::every), one element at a time.
pub async fn every_series<'a, T, P, E, F, Fut>(
    sequence: &'a Sequence<T>,
    mut callback: F,
) -> Result<bool, E>
where
    T: Clone,
    P: Truthy,
    F: FnMut(T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = P, Error = E>,
{
    for (index, element) in sequence.elements() {
        let value = element.resolve().await;
        if !TryFutureExt::into_future(callback(value, index, sequence))
            .await?
            .is_truthy()
        {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Same as [`filter`](crate::filter), one element at a time.
pub async fn filter_series<'a, T, P, E, F, Fut>(
    sequence: &'a Sequence<T>,
    mut callback: F,
) -> Result<Vec<T>, E>
where
    T: Clone,
    P: Truthy,
    F: FnMut(T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = P, Error = E>,
{
    let mut kept = Vec::new();
    for (index, element) in sequence.elements() {
        let value = element.resolve().await;
        if TryFutureExt::into_future(callback(value.clone(), index, sequence))
            .await?
            .is_truthy()
        {
            kept.push(value);
        }
    }
    Ok(kept)
}

/// Reduce the sequence to a single value.
///
/// With `initial` set, it becomes the first accumulator (even when falsy,
/// such as `0` or `""`) and every element is visited. Without it, the first
/// present element seeds the accumulator and the callback starts at the
/// element after it, so a single-element sequence is returned without
/// calling the callback at all. Holes are skipped either way.
///
/// ```
/// # use futures::executor::block_on;
/// use p_iteration::{Element, Sequence, reduce};
///
/// let seq = Sequence::from(vec![1, 2, 3]);
/// let add = |acc: i32, n: i32, _, _| async move { Ok::<_, ()>(acc + n) };
/// assert_eq!(block_on(reduce(&seq, add, Some(Element::Ready(1)))), Ok(7));
/// assert_eq!(block_on(reduce(&seq, add, None)), Ok(6));
/// ```
pub async fn reduce<'a, T, U, E, F, Fut>(
    sequence: &'a Sequence<T>,
    callback: F,
    initial: Option<Element<U>>,
) -> Result<U, ReduceError<E>>
where
    T: Clone + Into<U>,
    U: Clone,
    F: FnMut(U, T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = U, Error = E>,
{
    let mut elements = sequence.elements();
    let accumulator = match initial {
        Some(initial) => initial.into_resolved().await,
        None => match elements.next() {
            Some((_, first)) => first.resolve().await.into(),
            None => {
                debug!(len = sequence.len(), "reduce of empty sequence with no initial value");
                return Err(ReduceError::EmptyWithoutInitial);
            }
        },
    };
    accumulate(sequence, elements, accumulator, callback)
        .await
        .map_err(ReduceError::Callback)
}

/// Reduce with an initial accumulator of any type.
///
/// The always-seeded form of [`reduce`]: the accumulator type is free of any
/// relation to the element type, and an empty sequence yields `initial`.
pub async fn fold<'a, T, U, E, F, Fut>(
    sequence: &'a Sequence<T>,
    initial: U,
    callback: F,
) -> Result<U, E>
where
    T: Clone,
    F: FnMut(U, T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = U, Error = E>,
{
    accumulate(sequence, sequence.elements(), initial, callback).await
}

async fn accumulate<'a, T, U, E, F, Fut>(
    sequence: &'a Sequence<T>,
    elements: impl Iterator<Item = (usize, &'a Element<T>)>,
    mut accumulator: U,
    mut callback: F,
) -> Result<U, E>
where
    T: Clone,
    F: FnMut(U, T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = U, Error = E>,
{
    for (index, element) in elements {
        let value = element.resolve().await;
        accumulator =
            TryFutureExt::into_future(callback(accumulator, value, index, sequence)).await?;
    }
    Ok(accumulator)
}
