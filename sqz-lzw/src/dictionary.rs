//! Dictionary structures for both directions of the codec.
//!
//! [`PrefixDict`] is the encoder side: a trie over symbol sequences that
//! answers longest-prefix queries. [`CodeTable`] is the decoder side: a
//! direct-indexed table from code to sequence, rebuilt incrementally so
//! that it mirrors the encoder's growth codeword for codeword.

use crate::config::CodecConfig;
use std::num::NonZeroU32;

/// Handle into the trie's node arena.
pub type NodeId = u32;

/// The arena slot of the trie root.
const ROOT: NodeId = 0;

/// One trie node: a 256-ary branch plus an optional terminal code.
///
/// Children are arena handles rather than owning links; the root lives in
/// slot 0 and is never anyone's child, so `NonZeroU32` handles are free.
struct Node {
    children: [Option<NonZeroU32>; 256],
    code: Option<u16>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: [None; 256],
            code: None,
        }
    }
}

/// Result of a longest-prefix query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch {
    /// Handle of the matched node; pass to [`PrefixDict::add_child`] to
    /// extend the matched sequence by one symbol.
    pub node: NodeId,
    /// Length of the matched sequence, always at least 1.
    pub len: usize,
    /// Code associated with the matched sequence.
    pub code: u16,
}

/// Encoder-side dictionary: symbol sequences keyed by code, supporting
/// longest-prefix queries.
///
/// Freshly constructed, it holds the 256 single-symbol sequences at codes
/// `0..=255`. It does not bound its own growth; the encoder stops
/// inserting once the code space is exhausted.
pub struct PrefixDict {
    nodes: Vec<Node>,
}

impl PrefixDict {
    /// Create a dictionary pre-populated with all single-symbol sequences.
    pub fn new() -> Self {
        let mut dict = Self {
            nodes: Vec::with_capacity(512),
        };
        dict.nodes.push(Node::new());
        for symbol in 0..=255u8 {
            dict.add_child(ROOT, symbol, u16::from(symbol));
        }
        dict
    }

    /// Associate `seq` with `code`, creating interior nodes as needed.
    ///
    /// `seq` must be non-empty and not already present, and `code` unused;
    /// violations are programmer errors, not data errors.
    pub fn insert(&mut self, seq: &[u8], code: u16) {
        debug_assert!(!seq.is_empty());
        let mut node = ROOT;
        for &symbol in seq {
            node = match self.child(node, symbol) {
                Some(next) => next,
                None => self.push_child(node, symbol),
            };
        }
        debug_assert!(self.nodes[node as usize].code.is_none());
        self.nodes[node as usize].code = Some(code);
    }

    /// Extend the sequence ending at `parent` by one symbol, assigning
    /// `code` to the longer sequence.
    ///
    /// Equivalent to [`insert`](Self::insert) of the parent's sequence
    /// plus `symbol`, but O(1) given the parent handle from a previous
    /// [`longest_match`](Self::longest_match).
    pub fn add_child(&mut self, parent: NodeId, symbol: u8, code: u16) {
        debug_assert!(self.child(parent, symbol).is_none());
        let node = self.push_child(parent, symbol);
        self.nodes[node as usize].code = Some(code);
    }

    /// The longest stored sequence that is a prefix of `input`.
    ///
    /// Returns `None` only for empty input; otherwise at least the
    /// one-symbol prefix matches, because all single symbols are
    /// pre-populated.
    pub fn longest_match(&self, input: &[u8]) -> Option<PrefixMatch> {
        let mut node = ROOT;
        let mut best = None;
        for (depth, &symbol) in input.iter().enumerate() {
            match self.child(node, symbol) {
                Some(next) => {
                    node = next;
                    if let Some(code) = self.nodes[node as usize].code {
                        best = Some(PrefixMatch {
                            node,
                            len: depth + 1,
                            code,
                        });
                    }
                }
                None => break,
            }
        }
        best
    }

    /// Exact lookup of a previously inserted sequence.
    pub fn code_of(&self, seq: &[u8]) -> Option<u16> {
        let mut node = ROOT;
        for &symbol in seq {
            node = self.child(node, symbol)?;
        }
        self.nodes[node as usize].code
    }

    fn child(&self, node: NodeId, symbol: u8) -> Option<NodeId> {
        self.nodes[node as usize].children[symbol as usize].map(NonZeroU32::get)
    }

    fn push_child(&mut self, parent: NodeId, symbol: u8) -> NodeId {
        let id = self.nodes.len() as u32;
        self.nodes.push(Node::new());
        self.nodes[parent as usize].children[symbol as usize] = NonZeroU32::new(id);
        id
    }
}

impl Default for PrefixDict {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoder-side table: code to symbol sequence, direct-indexed.
///
/// Seeded with the 256 single-symbol entries plus the sentinel's empty
/// placeholder, then grown one entry per decoded codeword up to the
/// configured code limit, after which it freezes.
pub struct CodeTable {
    entries: Vec<Vec<u8>>,
    limit: usize,
}

impl CodeTable {
    /// Create a table seeded for the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        let limit = config.code_limit() as usize;
        let mut entries = Vec::with_capacity(limit);
        for symbol in 0..=255u8 {
            entries.push(vec![symbol]);
        }
        entries.push(Vec::new()); // sentinel placeholder, never emitted
        Self { entries, limit }
    }

    /// The next code to be defined. Starts at 257.
    pub fn highest_code(&self) -> u32 {
        self.entries.len() as u32
    }

    /// True once the code space is exhausted.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.limit
    }

    /// The sequence for `code`, if defined.
    pub fn get(&self, code: u16) -> Option<&[u8]> {
        self.entries.get(usize::from(code)).map(Vec::as_slice)
    }

    /// Define the next code as `seq`. A no-op once the table is full.
    pub fn push(&mut self, seq: Vec<u8>) {
        if self.entries.len() < self.limit {
            self.entries.push(seq);
        }
    }
}
