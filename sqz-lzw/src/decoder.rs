//! LZW decoder (expand).
//!
//! The decoder rebuilds the encoder's dictionary one codeword behind it.
//! That lag is observable exactly once per occurrence of the
//! self-referential case: a codeword equal to the code the table is about
//! to define. The sequence it denotes is recoverable as the previous
//! output plus its own first symbol, and that reconstruction is the only
//! special case in the loop.

use crate::config::{CodecConfig, SENTINEL};
use crate::dictionary::CodeTable;
use crate::error::{LzwError, Result};
use sqz_core::BitReader;
use std::io::{Read, Write};

/// LZW decoder for expansion.
///
/// Like the encoder, each decode call is one self-contained stream with
/// its own freshly built table.
#[derive(Debug, Clone, Copy)]
pub struct LzwDecoder {
    config: CodecConfig,
}

impl LzwDecoder {
    /// Create a decoder with the given configuration.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Expand a compressed byte slice into a fresh byte vector.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.decode_to(input, &mut output)?;
        Ok(output)
    }

    /// Expand the codeword stream from `reader`, writing decoded symbols
    /// to `writer`.
    ///
    /// Reads fixed-width codewords until the sentinel; trailing padding
    /// bits after the sentinel are ignored. A codeword beyond the next
    /// undefined code is a fatal [`LzwError::InvalidCode`]; input ending
    /// before the sentinel is a fatal [`LzwError::UnexpectedEof`].
    pub fn decode_to<R: Read, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        let width = self.config.code_width;
        let mut bits = BitReader::new(reader);
        let mut table = CodeTable::new(self.config);

        // First codeword, handled outside the loop: there is no previous
        // output yet, so the self-referential case cannot legally occur.
        let first = bits.read_bits(width)? as u16;
        if first == SENTINEL {
            writer.flush()?;
            return Ok(());
        }
        let mut current = match table.get(first) {
            Some(seq) => seq.to_vec(),
            None => {
                return Err(LzwError::InvalidCode {
                    code: first,
                    highest: table.highest_code(),
                });
            }
        };
        writer.write_all(&current)?;

        loop {
            let code = bits.read_bits(width)? as u16;
            if code == SENTINEL {
                break;
            }

            let highest = table.highest_code();
            let next = if u32::from(code) < highest {
                table
                    .get(code)
                    .expect("BUG: codes below highest_code are always defined")
                    .to_vec()
            } else if u32::from(code) == highest {
                // Self-referential case: the encoder used the entry it
                // defined on its previous step, which this side has not
                // materialized yet. That entry is current + current[0].
                let mut seq = current.clone();
                seq.push(current[0]);
                seq
            } else {
                return Err(LzwError::InvalidCode { code, highest });
            };

            writer.write_all(&next)?;

            // Mirror the encoder's growth: previous output extended by
            // the first symbol of this one. No-op once the table is full.
            let mut entry = current;
            entry.push(next[0]);
            table.push(entry);

            current = next;
        }

        writer.flush()?;
        Ok(())
    }
}
