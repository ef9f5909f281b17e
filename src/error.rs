//! Error types for the iteration engine
//!
//! Callback failures are never wrapped by the iteration primitives: the error
//! a callback fails with is the error the operation fails with. Reduction is
//! the one place with an error of its own.

use thiserror::Error;

/// Failure of [`reduce`](crate::reduce).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError<E> {
    /// The sequence holds no element and no initial value was supplied.
    #[error("Reduce of empty sequence with no initial value")]
    EmptyWithoutInitial,

    /// The callback failed; the error is passed through unchanged.
    #[error("{0}")]
    Callback(E),
}

impl<E> ReduceError<E> {
    pub fn is_empty_without_initial(&self) -> bool {
        matches!(self, ReduceError::EmptyWithoutInitial)
    }

    /// Extract the callback error, if that is what failed.
    pub fn into_callback(self) -> Option<E> {
        match self {
            ReduceError::Callback(error) => Some(error),
            ReduceError::EmptyWithoutInitial => None,
        }
    }
}
