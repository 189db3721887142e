//! LZW encoder (compress).

use crate::config::{CodecConfig, FIRST_CODE, SENTINEL};
use crate::dictionary::PrefixDict;
use crate::error::Result;
use sqz_core::BitWriter;
use std::io::Write;

/// LZW encoder for compression.
///
/// Each encode call processes one self-contained stream: the dictionary
/// is built fresh, grown while input and code space remain, and dropped
/// when the call returns. Nothing is shared between calls, so independent
/// streams can be compressed from the same process without interference.
#[derive(Debug, Clone, Copy)]
pub struct LzwEncoder {
    config: CodecConfig,
}

impl LzwEncoder {
    /// Create an encoder with the given configuration.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Compress `input` into a fresh byte vector.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.encode_to(input, &mut output)?;
        Ok(output)
    }

    /// Compress `input`, writing the codeword stream to `writer`.
    ///
    /// # Algorithm
    ///
    /// 1. Start from the dictionary of all single-symbol sequences.
    /// 2. At each position, find the longest dictionary sequence that
    ///    prefixes the remaining input and emit its code.
    /// 3. Grow the dictionary with that sequence plus the next input
    ///    symbol, while input and code space remain.
    /// 4. Terminate with the sentinel codeword and flush, zero-padding
    ///    the final byte.
    ///
    /// Empty input emits only the sentinel.
    pub fn encode_to<W: Write>(&self, input: &[u8], writer: W) -> Result<()> {
        let width = self.config.code_width;
        let code_limit = self.config.code_limit();

        let mut bits = BitWriter::new(writer);
        let mut dict = PrefixDict::new();
        let mut next_code = u32::from(FIRST_CODE);

        let mut pos = 0;
        while pos < input.len() {
            let matched = dict
                .longest_match(&input[pos..])
                .expect("BUG: single-symbol sequences are preloaded, so a match always exists");
            bits.write_bits(u32::from(matched.code), width)?;

            let end = pos + matched.len;
            if end < input.len() && next_code < code_limit {
                dict.add_child(matched.node, input[end], next_code as u16);
                next_code += 1;
            }
            pos = end;
        }

        bits.write_bits(u32::from(SENTINEL), width)?;
        bits.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::LzwDecoder;
    use sqz_core::BitReader;
    use std::io::Cursor;

    /// Unpack a compressed stream back into codeword values.
    fn codewords(data: &[u8], width: u8) -> Vec<u16> {
        let mut reader = BitReader::new(Cursor::new(data));
        let mut codes = Vec::new();
        loop {
            let code = reader.read_bits(width).unwrap() as u16;
            codes.push(code);
            if code == SENTINEL {
                return codes;
            }
        }
    }

    #[test]
    fn test_encode_empty() {
        let encoder = LzwEncoder::new(CodecConfig::DEFAULT).unwrap();
        let compressed = encoder.encode(b"").unwrap();
        // A single 12-bit sentinel, zero-padded to two bytes.
        assert_eq!(compressed, vec![0x10, 0x00]);
    }

    #[test]
    fn test_encode_single_symbol() {
        let encoder = LzwEncoder::new(CodecConfig::DEFAULT).unwrap();
        let compressed = encoder.encode(b"A").unwrap();
        // 'A' (65) then the sentinel: 000001000001 000100000000.
        assert_eq!(compressed, vec![0x04, 0x11, 0x00]);
    }

    #[test]
    fn test_encode_learns_repetition() {
        let encoder = LzwEncoder::new(CodecConfig::DEFAULT).unwrap();
        let compressed = encoder.encode(b"ABABABA").unwrap();
        // A, B, then the learned AB and BA, then the final A.
        assert_eq!(
            codewords(&compressed, 12),
            vec![65, 66, 257, 258, 65, SENTINEL]
        );
    }

    #[test]
    fn test_encode_run_references_fresh_code() {
        let encoder = LzwEncoder::new(CodecConfig::DEFAULT).unwrap();
        let compressed = encoder.encode(b"aaaa").unwrap();
        // The second codeword refers to the entry defined by the first.
        assert_eq!(codewords(&compressed, 12), vec![97, 257, 97, SENTINEL]);
    }

    #[test]
    fn test_encode_deterministic() {
        let encoder = LzwEncoder::new(CodecConfig::DEFAULT).unwrap();
        let data = b"the quick brown fox jumps over the lazy dog".repeat(3);
        assert_eq!(encoder.encode(&data).unwrap(), encoder.encode(&data).unwrap());
    }

    #[test]
    fn test_encode_to_writer_matches_vec() {
        let encoder = LzwEncoder::new(CodecConfig::DEFAULT).unwrap();
        let data = b"TOBEORNOTTOBEORTOBEORNOT";

        let mut streamed = Vec::new();
        encoder.encode_to(data, &mut streamed).unwrap();
        assert_eq!(streamed, encoder.encode(data).unwrap());
    }

    #[test]
    fn test_roundtrip_with_decoder() {
        let encoder = LzwEncoder::new(CodecConfig::DEFAULT).unwrap();
        let decoder = LzwDecoder::new(CodecConfig::DEFAULT).unwrap();

        for data in [
            &b""[..],
            b"A",
            b"ABABABA",
            b"TOBEORNOTTOBEORTOBEORNOT",
            &[0xFF; 300],
        ] {
            let compressed = encoder.encode(data).unwrap();
            assert_eq!(decoder.decode(&compressed).unwrap(), data);
        }
    }
}
