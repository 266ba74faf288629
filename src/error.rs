//! Error taxonomy for the crate, propagated with `?`.
//!
//! Every fallible operation returns [`Error`]; the variants cover geometry
//! mismatches, blocking-factor preconditions, matrix construction, and the
//! text I/O scanner. Built on `thiserror`, so each variant carries a
//! `Display` string and the whole enum implements [`std::error::Error`].

use thiserror::Error;

/// All ways an operation in this crate can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The two operands have different side lengths.
    #[error("matrix size mismatch: left is {left}x{left}, right is {right}x{right}")]
    SizeMismatch { left: usize, right: usize },

    /// A blocking factor of zero was supplied.
    #[error("blocking factor must be positive")]
    ZeroBlockingFactor,

    /// The blocking factor does not divide the matrix side length.
    #[error("blocking factor {blocking_factor} does not divide matrix size {size}")]
    BlockingFactor {
        size: usize,
        blocking_factor: usize,
    },

    /// A flat buffer did not have `size * size` entries.
    #[error("buffer has {got} entries, expected {expected}")]
    BufferSize { got: usize, expected: usize },

    /// A matrix was constructed from zero rows.
    #[error("matrix must have at least one row")]
    EmptyMatrix,

    /// A row did not match the matrix side length.
    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },

    /// Input ended before all expected tokens were read.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A token could not be parsed as an integer.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// The side length read from input was not positive.
    #[error("invalid dimension: {0}")]
    InvalidDimension(i64),

    /// An underlying I/O error occurred while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
