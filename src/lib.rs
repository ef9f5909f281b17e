//! Array iteration helpers with asynchronous callbacks
//!
//! `for_each`, `map`, `find`, `find_index`, `some`, `every`, `filter` and
//! `reduce` over a [`Sequence`], where each callback returns a future. Every
//! primitive except `reduce` comes in two flavours:
//!
//! - **parallel** (`map`, `filter`, ...): all callbacks are started without
//!   waiting for each other and their futures run concurrently on the
//!   caller's task;
//! - **series** (`map_series`, `filter_series`, ...): one callback at a time,
//!   in index order.
//!
//! Sequences may be sparse (holes are skipped, except by `find` and
//! `find_index`, which see them as `None`) and may hold elements that are
//! themselves pending futures; those are resolved before the callback runs.
//! The same operations are available as `Sequence::async_*` methods.
//!
//! # Example
//!
//! ```
//! use futures::executor::block_on;
//! use p_iteration::{Sequence, filter, map};
//!
//! let seq = Sequence::from(vec![3, 1, 2]);
//! let doubled = block_on(map(&seq, |n, _, _| async move { Ok::<_, ()>(n * 2) }));
//! assert_eq!(doubled, Ok(vec![Some(6), Some(2), Some(4)]));
//!
//! let odd = block_on(filter(&seq, |n, _, _| async move { Ok::<_, ()>(n % 2 == 1) }));
//! assert_eq!(odd, Ok(vec![3, 1]));
//! ```

pub mod error;
mod invoke;
mod methods;
pub mod parallel;
pub mod receiver;
pub mod sequence;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod series;
pub mod truthy;

pub use error::ReduceError;
pub use parallel::{every, filter, find, find_index, for_each, map, some};
pub use receiver::bind;
pub use sequence::{Element, Pending, Sequence};
pub use series::{
    every_series, filter_series, find_index_series, find_series, fold, for_each_series,
    map_series, reduce, some_series,
};
pub use truthy::Truthy;
