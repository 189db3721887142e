//! # sqz-lzw: fixed-width LZW compression
//!
//! This crate provides lossless LZW (Lempel-Ziv-Welch) compression and
//! expansion with a growable, bounded dictionary. Both sides build the
//! same dictionary adaptively from the data itself, so nothing but the
//! codeword stream is ever transmitted.
//!
//! ## Wire format
//!
//! - Fixed-width codewords (12 bits by default, 4096 codes), packed
//!   MSB-first across byte boundaries
//! - Codes `0..=255` are the byte values, `256` is the reserved
//!   end-of-stream sentinel, learned sequences start at `257`
//! - No header or length prefix: the stream is self-delimiting via the
//!   sentinel, and the final byte is zero-padded
//! - The dictionary freezes once the code space is exhausted; the stream
//!   remains valid, just without further adaptation
//!
//! ## Example
//!
//! ```rust
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = sqz_lzw::compress(original).unwrap();
//! let expanded = sqz_lzw::expand(&compressed).unwrap();
//!
//! assert_eq!(expanded, original);
//! ```
//!
//! For a non-default codeword width, or to stream into a writer, use
//! [`LzwEncoder`]/[`LzwDecoder`] with a [`CodecConfig`]:
//!
//! ```rust
//! use sqz_lzw::{CodecConfig, LzwDecoder, LzwEncoder};
//!
//! let config = CodecConfig::new(14).unwrap();
//! let encoder = LzwEncoder::new(config).unwrap();
//! let decoder = LzwDecoder::new(config).unwrap();
//!
//! let compressed = encoder.encode(b"to be or not to be").unwrap();
//! assert_eq!(decoder.decode(&compressed).unwrap(), b"to be or not to be");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;

pub use config::{CodecConfig, FIRST_CODE, SENTINEL};
pub use decoder::LzwDecoder;
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};

/// Compress `data` with the canonical 12-bit configuration.
///
/// # Example
///
/// ```rust
/// let compressed = sqz_lzw::compress(b"abracadabra!").unwrap();
/// assert!(!compressed.is_empty());
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    LzwEncoder::new(CodecConfig::DEFAULT)?.encode(data)
}

/// Expand `data` compressed with the canonical 12-bit configuration.
///
/// # Example
///
/// ```rust
/// let compressed = sqz_lzw::compress(b"abracadabra!").unwrap();
/// let expanded = sqz_lzw::expand(&compressed).unwrap();
/// assert_eq!(expanded, b"abracadabra!");
/// ```
pub fn expand(data: &[u8]) -> Result<Vec<u8>> {
    LzwDecoder::new(CodecConfig::DEFAULT)?.decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_simple() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = compress(original).unwrap();
        assert_eq!(expand(&compressed).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_empty() {
        let compressed = compress(b"").unwrap();
        assert_eq!(expand(&compressed).unwrap(), b"");
    }

    #[test]
    fn test_repetitive_data_compresses() {
        let original = vec![b'X'; 1000];
        let compressed = compress(&original).unwrap();
        assert!(compressed.len() < original.len() / 2);
        assert_eq!(expand(&compressed).unwrap(), original);
    }

    #[test]
    fn test_nondefault_width_roundtrip() {
        let config = CodecConfig::new(9).unwrap();
        let encoder = LzwEncoder::new(config).unwrap();
        let decoder = LzwDecoder::new(config).unwrap();

        let original = b"mississippi mississippi mississippi";
        let compressed = encoder.encode(original).unwrap();
        assert_eq!(decoder.decode(&compressed).unwrap(), original);
    }
}
