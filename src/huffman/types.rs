//! Huffman tree nodes and errors.

/// A node of the Huffman tree, stored in an arena and linked by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HuffmanNode {
    /// A symbol and its occurrence count.
    Leaf { symbol: char, freq: u64 },

    /// A merged subtree. `left` is reached by bit `0`, `right` by bit `1`.
    Internal { freq: u64, left: usize, right: usize },
}

impl HuffmanNode {
    /// Total frequency of the subtree rooted here.
    pub fn freq(&self) -> u64 {
        match *self {
            HuffmanNode::Leaf { freq, .. } | HuffmanNode::Internal { freq, .. } => freq,
        }
    }
}

/// Why text could not be coded or decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HuffmanError {
    #[error("input is empty")]
    Empty,
    #[error("unsupported character {0:?}: only printable ASCII is accepted")]
    UnsupportedCharacter(char),
    #[error("symbol {0:?} has no code")]
    UnknownSymbol(char),
    #[error("invalid bit {0:?}: expected '0' or '1'")]
    InvalidBit(char),
    #[error("bit sequence does not match any code")]
    UnknownCode,
    #[error("bit sequence ends inside a code")]
    TruncatedCode,
}
