//! Parallel variants.
//!
//! Every eligible callback is started without waiting for earlier ones to
//! settle. The returned futures are driven together on the caller's task, so
//! their asynchronous work interleaves; results are put back in index order
//! no matter which call finished first.
//!
//! The first callback error observed, in completion order, fails the whole
//! operation. Calls still in flight at that point are dropped together with
//! the operation's future.

use futures::stream::FuturesUnordered;
use futures::{TryFuture, TryFutureExt, TryStreamExt};
use tracing::{instrument, trace};

use crate::invoke::{start_element, start_slot};
use crate::sequence::Sequence;
use crate::truthy::Truthy;

/// Run `callback` for every element concurrently.
///
/// Holes are skipped. Resolves once every call has settled.
///
/// ```
/// # use futures::executor::block_on;
/// use std::cell::Cell;
/// use p_iteration::{Sequence, for_each};
///
/// let total = Cell::new(0);
/// let seq = Sequence::from(vec![1, 2, 3]);
/// block_on(for_each(&seq, |n, _, _| {
///     let total = &total;
///     async move {
///         total.set(total.get() + n);
///         Ok::<_, ()>(())
///     }
/// }))
/// .unwrap();
/// assert_eq!(total.get(), 6);
/// ```
#[instrument(level = "trace", skip_all, fields(len = sequence.len()))]
pub async fn for_each<'a, T, E, F, Fut>(sequence: &'a Sequence<T>, callback: F) -> Result<(), E>
where
    T: Clone,
    F: Fn(T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Error = E> + 'a,
{
    let callback = &callback;
    let mut calls: FuturesUnordered<_> = sequence
        .elements()
        .map(move |(index, element)| start_element(sequence, index, element, callback))
        .collect();

    while calls.try_next().await?.is_some() {}
    Ok(())
}

/// Map every element concurrently.
///
/// The result has the sequence's length; entry `i` is the callback result
/// for element `i`, and holes stay `None`.
#[instrument(level = "trace", skip_all, fields(len = sequence.len()))]
pub async fn map<'a, T, U, E, F, Fut>(
    sequence: &'a Sequence<T>,
    callback: F,
) -> Result<Vec<Option<U>>, E>
where
    T: Clone,
    F: Fn(T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = U, Error = E> + 'a,
{
    let callback = &callback;
    let mut calls: FuturesUnordered<_> = sequence
        .elements()
        .map(move |(index, element)| {
            start_element(sequence, index, element, callback).map_ok(move |value| (index, value))
        })
        .collect();

    let mut results: Vec<Option<U>> = std::iter::repeat_with(|| None)
        .take(sequence.len())
        .collect();
    while let Some((index, value)) = calls.try_next().await? {
        if let Some(slot) = results.get_mut(index) {
            *slot = Some(value);
        }
    }
    Ok(results)
}

/// Find the first element, by index, whose callback result is truthy.
///
/// Holes are visited too and reach the callback as `None`. A truthy result
/// at index `i` settles the search as soon as every index below `i` has
/// settled, even if later indices are still running; the element returned is
/// always the lowest truthy one.
pub async fn find<'a, T, P, E, F, Fut>(sequence: &'a Sequence<T>, callback: F) -> Result<Option<T>, E>
where
    T: Clone,
    P: Truthy,
    F: Fn(Option<T>, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = P, Error = E> + 'a,
{
    match first_truthy(sequence, &callback).await? {
        Some(index) => Ok(sequence.resolve(index).await),
        None => Ok(None),
    }
}

/// Same as [`find`], but yields the index. `None` means no element passed.
pub async fn find_index<'a, T, P, E, F, Fut>(
    sequence: &'a Sequence<T>,
    callback: F,
) -> Result<Option<usize>, E>
where
    T: Clone,
    P: Truthy,
    F: Fn(Option<T>, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = P, Error = E> + 'a,
{
    first_truthy(sequence, &callback).await
}

#[instrument(level = "trace", skip_all, fields(len = sequence.len()))]
async fn first_truthy<'s, 'c, T, P, E, F, Fut>(
    sequence: &'s Sequence<T>,
    callback: &'c F,
) -> Result<Option<usize>, E>
where
    's: 'c,
    T: Clone,
    P: Truthy,
    F: Fn(Option<T>, usize, &'s Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = P, Error = E> + 's,
{
    let len = sequence.len();
    if len == 0 {
        return Ok(None);
    }

    let mut calls: FuturesUnordered<_> = (0..len)
        .map(move |index| {
            start_slot(sequence, index, callback)
                .map_ok(move |verdict| (index, verdict.is_truthy()))
        })
        .collect();

    let mut settled = vec![false; len];
    // Every index below this one has settled.
    let mut lowest_open = 0;
    let mut found: Option<usize> = None;

    while let Some((index, truthy)) = calls.try_next().await? {
        if let Some(flag) = settled.get_mut(index) {
            *flag = true;
        }
        if truthy && found.is_none_or(|best| index < best) {
            found = Some(index);
        }
        while settled.get(lowest_open).copied().unwrap_or(false) {
            lowest_open += 1;
        }
        if found.is_some_and(|best| lowest_open >= best) {
            trace!(index = ?found, pending = calls.len(), "found before all calls settled");
            return Ok(found);
        }
    }
    Ok(found)
}

/// Whether any element's callback result is truthy.
///
/// Holes are skipped. The first truthy result settles the operation;
/// otherwise it waits for every call. An empty sequence gives `false`.
#[instrument(level = "trace", skip_all, fields(len = sequence.len()))]
pub async fn some<'a, T, P, E, F, Fut>(sequence: &'a Sequence<T>, callback: F) -> Result<bool, E>
where
    T: Clone,
    P: Truthy,
    F: Fn(T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = P, Error = E> + 'a,
{
    let callback = &callback;
    let mut calls: FuturesUnordered<_> = sequence
        .elements()
        .map(move |(index, element)| {
            start_element(sequence, index, element, callback).map_ok(|verdict| verdict.is_truthy())
        })
        .collect();

    while let Some(truthy) = calls.try_next().await? {
        if truthy {
            trace!(pending = calls.len(), "short-circuit on truthy result");
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether every element's callback result is truthy.
///
/// Holes are skipped. The first falsy result settles the operation with
/// `false`. An empty sequence gives `true`.
#[instrument(level = "trace", skip_all, fields(len = sequence.len()))]
pub async fn every<'a, T, P, E, F, Fut>(sequence: &'a Sequence<T>, callback: F) -> Result<bool, E>
where
    T: Clone,
    P: Truthy,
    F: Fn(T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = P, Error = E> + 'a,
{
    let callback = &callback;
    let mut calls: FuturesUnordered<_> = sequence
        .elements()
        .map(move |(index, element)| {
            start_element(sequence, index, element, callback).map_ok(|verdict| verdict.is_truthy())
        })
        .collect();

    while let Some(truthy) = calls.try_next().await? {
        if !truthy {
            trace!(pending = calls.len(), "short-circuit on falsy result");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Keep the elements whose callback result is truthy.
///
/// All calls settle before anything is selected. The result holds the
/// original (resolved) elements, not the callback results, in index order;
/// holes are skipped.
#[instrument(level = "trace", skip_all, fields(len = sequence.len()))]
pub async fn filter<'a, T, P, E, F, Fut>(sequence: &'a Sequence<T>, callback: F) -> Result<Vec<T>, E>
where
    T: Clone,
    P: Truthy,
    F: Fn(T, usize, &'a Sequence<T>) -> Fut,
    Fut: TryFuture<Ok = P, Error = E> + 'a,
{
    let callback = &callback;
    let mut calls: FuturesUnordered<_> = sequence
        .elements()
        .map(move |(index, element)| {
            start_element(sequence, index, element, callback)
                .map_ok(move |verdict| (index, verdict.is_truthy()))
        })
        .collect();

    let mut verdicts = vec![false; sequence.len()];
    while let Some((index, truthy)) = calls.try_next().await? {
        if let Some(verdict) = verdicts.get_mut(index) {
            *verdict = truthy;
        }
    }

    let mut kept = Vec::new();
    for (index, element) in sequence.elements() {
        if verdicts.get(index).copied().unwrap_or(false) {
            kept.push(element.resolve().await);
        }
    }
    Ok(kept)
}
