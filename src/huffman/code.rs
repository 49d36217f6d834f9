//! Huffman tree construction, encoding, decoding, and DOT export.

use super::types::{HuffmanError, HuffmanNode};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use tracing::debug;

/// A Huffman tree and the codebook derived from it.
///
/// # Examples
///
/// ```
/// use u_divconq::huffman::HuffmanCode;
///
/// let code = HuffmanCode::build("abracadabra").unwrap();
/// let bits = code.encode("abracadabra").unwrap();
/// assert_eq!(code.decode(&bits).unwrap(), "abracadabra");
/// assert_eq!(code.codes()[&'a'].len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanCode {
    nodes: Vec<HuffmanNode>,
    root: usize,
    codes: BTreeMap<char, String>,
}

impl HuffmanCode {
    /// Builds the code for `text`.
    ///
    /// Rejects empty text and any character outside printable ASCII
    /// (`' '..='~'`).
    pub fn build(text: &str) -> Result<Self, HuffmanError> {
        let frequencies = frequencies(text)?;

        let mut nodes: Vec<HuffmanNode> = frequencies
            .iter()
            .map(|(&symbol, &freq)| HuffmanNode::Leaf { symbol, freq })
            .collect();

        // (freq, creation index): equal frequencies pop in creation order
        let mut heap: BinaryHeap<Reverse<(u64, usize)>> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| Reverse((n.freq(), i)))
            .collect();

        while let (Some(Reverse((lf, left))), Some(Reverse((rf, right)))) = (heap.pop(), heap.pop())
        {
            let merged = nodes.len();
            nodes.push(HuffmanNode::Internal {
                freq: lf + rf,
                left,
                right,
            });
            heap.push(Reverse((lf + rf, merged)));
        }

        // last node created is the root (the lone leaf for one-symbol text)
        let root = nodes.len() - 1;

        let mut codes = BTreeMap::new();
        assign_codes(&nodes, root, String::new(), &mut codes);

        debug!(
            symbols = codes.len(),
            nodes = nodes.len(),
            "huffman tree built"
        );
        Ok(Self { nodes, root, codes })
    }

    /// The codebook, ordered by symbol.
    pub fn codes(&self) -> &BTreeMap<char, String> {
        &self.codes
    }

    /// The root node.
    pub fn root(&self) -> &HuffmanNode {
        &self.nodes[self.root]
    }

    /// All nodes; leaves first, then merged nodes in merge order.
    pub fn nodes(&self) -> &[HuffmanNode] {
        &self.nodes
    }

    /// Encodes `text` as a string of `'0'`/`'1'`.
    pub fn encode(&self, text: &str) -> Result<String, HuffmanError> {
        let mut bits = String::with_capacity(self.encoded_len(text)?);
        for c in text.chars() {
            bits.push_str(&self.codes[&c]);
        }
        Ok(bits)
    }

    /// Number of bits `encode` would produce.
    pub fn encoded_len(&self, text: &str) -> Result<usize, HuffmanError> {
        text.chars()
            .map(|c| {
                self.codes
                    .get(&c)
                    .map(String::len)
                    .ok_or(HuffmanError::UnknownSymbol(c))
            })
            .sum()
    }

    /// Decodes a string of `'0'`/`'1'` back to text.
    pub fn decode(&self, bits: &str) -> Result<String, HuffmanError> {
        let mut text = String::new();

        if let HuffmanNode::Leaf { symbol, .. } = self.nodes[self.root] {
            for b in bits.chars() {
                match b {
                    '0' => text.push(symbol),
                    '1' => return Err(HuffmanError::UnknownCode),
                    other => return Err(HuffmanError::InvalidBit(other)),
                }
            }
            return Ok(text);
        }

        let mut current = self.root;
        for b in bits.chars() {
            current = match (self.nodes[current], b) {
                (HuffmanNode::Internal { left, .. }, '0') => left,
                (HuffmanNode::Internal { right, .. }, '1') => right,
                (HuffmanNode::Leaf { .. }, '0' | '1') => return Err(HuffmanError::UnknownCode),
                (_, other) => return Err(HuffmanError::InvalidBit(other)),
            };
            if let HuffmanNode::Leaf { symbol, .. } = self.nodes[current] {
                text.push(symbol);
                current = self.root;
            }
        }

        if current != self.root {
            return Err(HuffmanError::TruncatedCode);
        }
        Ok(text)
    }

    /// Renders the tree in Graphviz DOT format.
    ///
    /// Leaves are labelled `"symbol:freq"`, merged nodes `"freq"`.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph G {\n");
        self.write_dot_nodes(self.root, None, &mut out);
        out.push_str("}\n");
        out
    }

    fn write_dot_nodes(&self, node: usize, parent: Option<usize>, out: &mut String) {
        let label = match self.nodes[node] {
            HuffmanNode::Leaf { symbol, freq } => format!("{}:{freq}", escape(symbol)),
            HuffmanNode::Internal { freq, .. } => freq.to_string(),
        };
        out.push_str(&format!("  n{node} [label=\"{label}\"];\n"));
        if let Some(p) = parent {
            out.push_str(&format!("  n{p} -> n{node};\n"));
        }
        if let HuffmanNode::Internal { left, right, .. } = self.nodes[node] {
            self.write_dot_nodes(left, Some(node), out);
            self.write_dot_nodes(right, Some(node), out);
        }
    }
}

/// Counts symbol occurrences after validating the text.
fn frequencies(text: &str) -> Result<BTreeMap<char, u64>, HuffmanError> {
    if text.is_empty() {
        return Err(HuffmanError::Empty);
    }
    let mut freq = BTreeMap::new();
    for c in text.chars() {
        if !(' '..='~').contains(&c) {
            return Err(HuffmanError::UnsupportedCharacter(c));
        }
        *freq.entry(c).or_insert(0u64) += 1;
    }
    Ok(freq)
}

fn assign_codes(
    nodes: &[HuffmanNode],
    node: usize,
    prefix: String,
    codes: &mut BTreeMap<char, String>,
) {
    match nodes[node] {
        HuffmanNode::Leaf { symbol, .. } => {
            // a lone symbol still needs one bit
            let code = if prefix.is_empty() {
                "0".to_string()
            } else {
                prefix
            };
            codes.insert(symbol, code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            assign_codes(nodes, left, format!("{prefix}0"), codes);
            assign_codes(nodes, right, format!("{prefix}1"), codes);
        }
    }
}

fn escape(symbol: char) -> String {
    match symbol {
        '"' => "\\\"".to_string(),
        '\\' => "\\\\".to_string(),
        c => c.to_string(),
    }
}
