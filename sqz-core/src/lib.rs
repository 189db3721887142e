//! # sqz-core
//!
//! Core components for the sqz compression toolkit.
//!
//! This crate provides the byte-stream plumbing the codec builds on:
//!
//! - [`bitstream`]: MSB-first [`BitReader`]/[`BitWriter`] for fixed-width
//!   codeword I/O across byte boundaries
//! - [`error`]: shared error types
//!
//! The codec itself lives in `sqz-lzw`; the command-line front end in
//! `sqz-cli`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{CoreError, Result};
