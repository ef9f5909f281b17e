//! Explicit receiver binding.
//!
//! Callbacks are plain closures and have no implicit `this`. When a callback
//! needs a receiver object, [`bind`] closes over a reference to it and hands
//! it to the callback as the first argument on every call.

use crate::sequence::Sequence;

/// Bind `receiver` as the first argument of `callback`.
///
/// The result takes the usual `(value, index, sequence)` arguments, so it can
/// be passed to any primitive except the reductions. `V` is the element type
/// for most primitives and `Option<T>` for `find`/`find_index`.
///
/// ```
/// # use futures::executor::block_on;
/// use std::cell::RefCell;
/// use p_iteration::{Sequence, for_each, receiver::bind};
///
/// struct Totals {
///     seen: RefCell<Vec<u32>>,
/// }
///
/// let totals = Totals { seen: RefCell::new(Vec::new()) };
/// let seq = Sequence::from(vec![1, 2, 3]);
/// block_on(for_each(
///     &seq,
///     bind(&totals, |this: &Totals, n, _, _| {
///         this.seen.borrow_mut().push(n);
///         async { Ok::<_, ()>(()) }
///     }),
/// ))
/// .unwrap();
/// assert_eq!(*totals.seen.borrow(), vec![1, 2, 3]);
/// ```
pub fn bind<'a, R, V, T, F, Fut>(
    receiver: &'a R,
    callback: F,
) -> impl Fn(V, usize, &'a Sequence<T>) -> Fut + 'a
where
    R: ?Sized,
    T: 'a,
    F: Fn(&'a R, V, usize, &'a Sequence<T>) -> Fut + 'a,
{
    move |value, index, sequence| callback(receiver, value, index, sequence)
}
