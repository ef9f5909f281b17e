//! Sparse, index-addressable input sequences.
//!
//! A [`Sequence`] is a list of slots. A slot is either a hole (never assigned)
//! or an [`Element`], and an element is either a ready value or a
//! [`Pending`] future that resolves to one. Holes are distinct from present
//! slots that happen to hold a "nothing" value such as `None` or `()`.

use std::fmt;
use std::future::Future;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

/// A value that is not available yet.
///
/// Wraps a single-threaded shared future: it runs at most once and every
/// holder observes the same output, so a pending element can be awaited by
/// the engine and again by a callback that reads it through the sequence.
/// Cloning only bumps a reference count.
pub struct Pending<T> {
    inner: Shared<LocalBoxFuture<'static, T>>,
}

impl<T: Clone + 'static> Pending<T> {
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = T> + 'static,
    {
        Pending {
            inner: future.boxed_local().shared(),
        }
    }
}

impl<T: Clone> Pending<T> {
    /// Wait for the value.
    pub async fn resolve(&self) -> T {
        self.inner.clone().await
    }

    /// The value, if the underlying future has already completed.
    pub fn peek(&self) -> Option<&T> {
        self.inner.peek()
    }
}

impl<T> Clone for Pending<T> {
    fn clone(&self) -> Self {
        Pending {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pending(..)")
    }
}

/// A present slot of a [`Sequence`].
#[derive(Debug, Clone)]
pub enum Element<T> {
    Ready(T),
    Pending(Pending<T>),
}

impl<T: Clone + 'static> Element<T> {
    /// Create an element from a future.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = T> + 'static,
    {
        Element::Pending(Pending::new(future))
    }
}

impl<T: Clone> Element<T> {
    /// The value if it can be read without waiting.
    ///
    /// Pending elements whose future already completed count as ready.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Element::Ready(value) => Some(value),
            Element::Pending(pending) => pending.peek(),
        }
    }

    /// Wait for the value and return a copy of it.
    pub async fn resolve(&self) -> T {
        match self {
            Element::Ready(value) => value.clone(),
            Element::Pending(pending) => pending.resolve().await,
        }
    }

    /// Wait for the value, consuming the element.
    pub async fn into_resolved(self) -> T {
        match self {
            Element::Ready(value) => value,
            Element::Pending(pending) => pending.resolve().await,
        }
    }
}

impl<T> From<T> for Element<T> {
    fn from(value: T) -> Self {
        Element::Ready(value)
    }
}

/// An ordered sequence of slots, some of which may be holes.
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    slots: Vec<Option<Element<T>>>,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Sequence { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Build a dense sequence from elements that may still be pending.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Element<T>>,
    {
        Sequence {
            slots: elements.into_iter().map(Some).collect(),
        }
    }

    /// Build a sequence where `None` entries become holes.
    pub fn sparse<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Sequence {
            slots: values
                .into_iter()
                .map(|value| value.map(Element::Ready))
                .collect(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.slots.push(Some(Element::Ready(value)));
    }

    pub fn push_element(&mut self, element: Element<T>) {
        self.slots.push(Some(element));
    }

    /// Append an unassigned slot.
    pub fn push_hole(&mut self) {
        self.slots.push(None);
    }

    /// Number of slots, holes included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The element at `index`, or `None` for holes and out-of-range indices.
    pub fn get(&self, index: usize) -> Option<&Element<T>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Whether `index` is in range but unassigned.
    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Whether `index` holds an element (the `index in array` test).
    pub fn contains_index(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn hole_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Present elements with their indices, in ascending order.
    pub fn elements(&self) -> impl Iterator<Item = (usize, &Element<T>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|element| (index, element)))
    }

    /// Every slot in order; holes are `None`.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Element<T>>> {
        self.slots.iter().map(Option::as_ref)
    }
}

impl<T: Clone + 'static> Sequence<T> {
    /// Append an element that resolves once `future` completes.
    pub fn push_pending<F>(&mut self, future: F)
    where
        F: Future<Output = T> + 'static,
    {
        self.push_element(Element::pending(future));
    }
}

impl<T: Clone> Sequence<T> {
    /// Resolve the element at `index`.
    ///
    /// Returns `None` for holes and out-of-range indices.
    pub async fn resolve(&self, index: usize) -> Option<T> {
        match self.get(index) {
            Some(element) => Some(element.resolve().await),
            None => None,
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Sequence {
            slots: values
                .into_iter()
                .map(|value| Some(Element::Ready(value)))
                .collect(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            slots: iter
                .into_iter()
                .map(|value| Some(Element::Ready(value)))
                .collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.slots
            .extend(iter.into_iter().map(|value| Some(Element::Ready(value))));
    }
}
