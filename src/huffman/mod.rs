//! Huffman prefix coding.
//!
//! A greedy construction: repeatedly merge the two least frequent subtrees
//! until one tree remains; the path from the root to a leaf (left = `0`,
//! right = `1`) is that symbol's code. Only printable ASCII text is
//! accepted.
//!
//! Ties in the min-heap are broken by node creation order (leaves are
//! created in symbol order), so the same text always yields the same codes.
//!
//! # References
//!
//! Huffman (1952), "A Method for the Construction of Minimum-Redundancy Codes"

mod code;
mod types;

pub use code::HuffmanCode;
pub use types::{HuffmanError, HuffmanNode};
