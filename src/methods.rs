//! Instance-style adapter.
//!
//! Each method forwards to the free function of the same primitive with the
//! sequence itself as the first argument, so `seq.async_map(f)` and
//! `map(&seq, f)` are the same operation.

use futures::TryFuture;

use crate::error::ReduceError;
use crate::sequence::{Element, Sequence};
use crate::truthy::Truthy;
use crate::{parallel, series};

impl<T: Clone> Sequence<T> {
    /// See [`for_each`](crate::for_each).
    pub async fn async_for_each<'a, E, F, Fut>(&'a self, callback: F) -> Result<(), E>
    where
        F: Fn(T, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Error = E> + 'a,
    {
        parallel::for_each(self, callback).await
    }

    /// See [`for_each_series`](crate::for_each_series).
    pub async fn async_for_each_series<'a, E, F, Fut>(&'a self, callback: F) -> Result<(), E>
    where
        F: FnMut(T, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Error = E>,
    {
        series::for_each_series(self, callback).await
    }

    /// See [`map`](crate::map).
    pub async fn async_map<'a, U, E, F, Fut>(&'a self, callback: F) -> Result<Vec<Option<U>>, E>
    where
        F: Fn(T, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = U, Error = E> + 'a,
    {
        parallel::map(self, callback).await
    }

    /// See [`map_series`](crate::map_series).
    pub async fn async_map_series<'a, U, E, F, Fut>(
        &'a self,
        callback: F,
    ) -> Result<Vec<Option<U>>, E>
    where
        F: FnMut(T, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = U, Error = E>,
    {
        series::map_series(self, callback).await
    }

    /// See [`find`](crate::find).
    pub async fn async_find<'a, P, E, F, Fut>(&'a self, callback: F) -> Result<Option<T>, E>
    where
        P: Truthy,
        F: Fn(Option<T>, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = P, Error = E> + 'a,
    {
        parallel::find(self, callback).await
    }

    /// See [`find_series`](crate::find_series).
    pub async fn async_find_series<'a, P, E, F, Fut>(
        &'a self,
        callback: F,
    ) -> Result<Option<T>, E>
    where
        P: Truthy,
        F: FnMut(Option<T>, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = P, Error = E>,
    {
        series::find_series(self, callback).await
    }

    /// See [`find_index`](crate::find_index).
    pub async fn async_find_index<'a, P, E, F, Fut>(
        &'a self,
        callback: F,
    ) -> Result<Option<usize>, E>
    where
        P: Truthy,
        F: Fn(Option<T>, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = P, Error = E> + 'a,
    {
        parallel::find_index(self, callback).await
    }

    /// See [`find_index_series`](crate::find_index_series).
    pub async fn async_find_index_series<'a, P, E, F, Fut>(
        &'a self,
        callback: F,
    ) -> Result<Option<usize>, E>
    where
        P: Truthy,
        F: FnMut(Option<T>, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = P, Error = E>,
    {
        series::find_index_series(self, callback).await
    }

    /// See [`some`](crate::some).
    pub async fn async_some<'a, P, E, F, Fut>(&'a self, callback: F) -> Result<bool, E>
    where
        P: Truthy,
        F: Fn(T, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = P, Error = E> + 'a,
    {
        parallel::some(self, callback).await
    }

    /// See [`some_series`](crate::some_series).
    pub async fn async_some_series<'a, P, E, F, Fut>(&'a self, callback: F) -> Result<bool, E>
    where
        P: Truthy,
        F: FnMut(T, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = P, Error = E>,
    {
        series::some_series(self, callback).await
    }

    /// See [`every`](crate::every).
    pub async fn async_every<'a, P, E, F, Fut>(&'a self, callback: F) -> Result<bool, E>
    where
        P: Truthy,
        F: Fn(T, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = P, Error = E> + 'a,
    {
        parallel::every(self, callback).await
    }

    /// See [`every_series`](crate::every_series).
    pub async fn async_every_series<'a, P, E, F, Fut>(&'a self, callback: F) -> Result<bool, E>
    where
        P: Truthy,
        F: FnMut(T, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = P, Error = E>,
    {
        series::every_series(self, callback).await
    }

    /// See [`filter`](crate::filter).
    pub async fn async_filter<'a, P, E, F, Fut>(&'a self, callback: F) -> Result<Vec<T>, E>
    where
        P: Truthy,
        F: Fn(T, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = P, Error = E> + 'a,
    {
        parallel::filter(self, callback).await
    }

    /// See [`filter_series`](crate::filter_series).
    pub async fn async_filter_series<'a, P, E, F, Fut>(&'a self, callback: F) -> Result<Vec<T>, E>
    where
        P: Truthy,
        F: FnMut(T, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = P, Error = E>,
    {
        series::filter_series(self, callback).await
    }

    /// See [`reduce`](crate::reduce).
    pub async fn async_reduce<'a, U, E, F, Fut>(
        &'a self,
        callback: F,
        initial: Option<Element<U>>,
    ) -> Result<U, ReduceError<E>>
    where
        T: Into<U>,
        U: Clone,
        F: FnMut(U, T, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = U, Error = E>,
    {
        series::reduce(self, callback, initial).await
    }

    /// See [`fold`](crate::fold).
    pub async fn async_fold<'a, U, E, F, Fut>(&'a self, initial: U, callback: F) -> Result<U, E>
    where
        F: FnMut(U, T, usize, &'a Sequence<T>) -> Fut,
        Fut: TryFuture<Ok = U, Error = E>,
    {
        series::fold(self, initial, callback).await
    }
}
