use thiserror::Error;

/// Errors raised by the sequence operations.
///
/// Only chunking can fail; everything else is total over its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// A chunk size that cannot partition anything.
    ///
    /// Carries the rejected size.
    #[error("{0} is not a valid chunk size, you must provide a positive integer")]
    InvalidArgument(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
