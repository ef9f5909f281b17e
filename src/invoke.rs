//! Callback invocation shared by the parallel operations.
//!
//! A parallel operation starts one call per slot. Calls whose argument can be
//! read without waiting are invoked immediately, in the order the operation
//! starts them, so every ready element sees its callback run before any call
//! is polled. Calls on unsettled pending elements are invoked once the
//! element resolves.

use std::future::Future;

use futures::{TryFuture, TryFutureExt};

use crate::sequence::{Element, Sequence};

enum Start<C, Fut> {
    Invoked(Fut),
    Waiting(C),
}

/// Invoke `call` now if `ready` holds the argument, otherwise after `pending`
/// produces it.
pub(crate) fn start<'a, A, P, C, Fut>(
    ready: Option<A>,
    pending: P,
    call: C,
) -> impl Future<Output = Result<Fut::Ok, Fut::Error>> + 'a
where
    A: 'a,
    P: Future<Output = A> + 'a,
    C: FnOnce(A) -> Fut + 'a,
    Fut: TryFuture + 'a,
{
    let start = match ready {
        Some(argument) => Start::Invoked(call(argument)),
        None => Start::Waiting(call),
    };
    async move {
        match start {
            Start::Invoked(future) => TryFutureExt::into_future(future).await,
            Start::Waiting(call) => TryFutureExt::into_future(call(pending.await)).await,
        }
    }
}

/// Start the callback for the present element at `index`.
pub(crate) fn start_element<'s, 'c, T, F, Fut>(
    sequence: &'s Sequence<T>,
    index: usize,
    element: &'s Element<T>,
    callback: &'c F,
) -> impl Future<Output = Result<Fut::Ok, Fut::Error>> + 'c
where
    's: 'c,
    T: Clone,
    F: Fn(T, usize, &'s Sequence<T>) -> Fut,
    Fut: TryFuture + 's,
{
    start(element.ready().cloned(), element.resolve(), move |value| {
        callback(value, index, sequence)
    })
}

/// Start the callback for slot `index`, passing `None` when it is a hole.
pub(crate) fn start_slot<'s, 'c, T, F, Fut>(
    sequence: &'s Sequence<T>,
    index: usize,
    callback: &'c F,
) -> impl Future<Output = Result<Fut::Ok, Fut::Error>> + 'c
where
    's: 'c,
    T: Clone,
    F: Fn(Option<T>, usize, &'s Sequence<T>) -> Fut,
    Fut: TryFuture + 's,
{
    let ready = match sequence.get(index) {
        Some(element) => element.ready().cloned().map(Some),
        None => Some(None),
    };
    start(ready, sequence.resolve(index), move |value| {
        callback(value, index, sequence)
    })
}
