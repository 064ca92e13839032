use thiserror::Error;

/// Failure raised by a combinator whose precondition does not hold.
///
/// Absence (head of an empty sequence, maximum of nothing) is not an error;
/// those combinators return `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    #[error("Index {index} out of range for sequence of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl SeqError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        SeqError::OutOfRange { index, len }
    }
}
