//! Error types for bit-level I/O.

use std::io;
use thiserror::Error;

/// The error type for `sqz-core` bit stream operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input ended before the requested number of bits was available.
    #[error("unexpected end of stream at bit position {position}")]
    UnexpectedEof {
        /// Total bits consumed before the short read.
        position: u64,
    },

    /// A bit count outside the supported range was requested.
    #[error("invalid bit count: {0} (must be 0-32)")]
    InvalidBitCount(u8),
}

/// Result type alias for `sqz-core` operations.
pub type Result<T> = std::result::Result<T, CoreError>;
