//! Codec error types.

use sqz_core::CoreError;
use std::io;
use thiserror::Error;

/// LZW compression/expansion errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// The stream referenced a code that neither exists nor is the one
    /// currently being defined. The stream is corrupt or was produced
    /// with different codec parameters.
    #[error("corrupt stream: code {code} exceeds highest defined code {highest}")]
    InvalidCode {
        /// The offending codeword value.
        code: u16,
        /// The next code the table would have defined.
        highest: u32,
    },

    /// The input ended mid-codeword, before the end-of-stream codeword.
    #[error("truncated stream: input ended at bit position {position}")]
    UnexpectedEof {
        /// Bits consumed before the short read.
        position: u64,
    },

    /// Codeword width outside the supported range.
    #[error("invalid codeword width: {0} (must be 9-16)")]
    InvalidCodeWidth(u8),

    /// I/O error from the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<CoreError> for LzwError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Io(e) => Self::Io(e),
            CoreError::UnexpectedEof { position } => Self::UnexpectedEof { position },
            CoreError::InvalidBitCount(count) => Self::InvalidCodeWidth(count),
        }
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, LzwError>;
