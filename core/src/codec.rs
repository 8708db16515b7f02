//! Wire framing of proof trees.
//!
//! A node is encoded as a one-byte tag followed by its payload, laid out the way borsh lays out
//! the corresponding primitives:
//!
//! | tag | node      | payload                                                        |
//! |-----|-----------|----------------------------------------------------------------|
//! | 0   | branch    | left node, `bool` right-presence flag, right node if present  |
//! | 1   | element   | `u32` length, then the value bytes                             |
//! | 2   | hash node | 32 bytes                                                       |
//! | 3   | absence   | nothing                                                        |
//!
//! Decoding recurses once per tree level, so it is bounded by [`DecodeOptions::max_depth`].

use crate::proof_node::ProofNode;

use borsh::{
    io::{Error, ErrorKind, Read, Write},
    BorshDeserialize, BorshSerialize,
};
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec, vec::Vec};

const TAG_BRANCH: u8 = 0;
const TAG_ELEMENT: u8 = 1;
const TAG_HASH_NODE: u8 = 2;
const TAG_ABSENCE: u8 = 3;

/// Limits applied while decoding untrusted proofs.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// The maximum depth of any decoded node.
    pub(crate) max_depth: usize,
    /// The maximum length of an element value, in bytes.
    pub(crate) max_element_len: usize,
}

impl DecodeOptions {
    /// Create a new `DecodeOptions` instance with the default values.
    pub fn new() -> Self {
        Self {
            max_depth: 128,
            max_element_len: 16 * 1024 * 1024,
        }
    }

    /// Set the maximum depth of any decoded node. The root is at depth 0.
    ///
    /// Nodes deeper than [`MAX_NODE_DEPTH`](crate::proof::MAX_NODE_DEPTH) are rejected by
    /// validation anyway. Keeping this limit above it lets such proofs be decoded and reported
    /// with a precise status.
    ///
    /// Default: 128.
    pub fn max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// Set the maximum length of an element value, in bytes.
    ///
    /// Default: 16 MiB.
    pub fn max_element_len(&mut self, max_element_len: usize) {
        self.max_element_len = max_element_len;
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors in decoding a proof tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A node carried an unknown tag.
    UnknownTag(u8),
    /// The tree is deeper than allowed.
    TooDeep,
    /// An element value is longer than allowed.
    ElementTooLong(usize),
    /// The input ended in the middle of a node.
    UnexpectedEof,
    /// The input continues after the root node.
    TrailingBytes,
    /// The input is malformed in some other way.
    Malformed,
}

impl DecodeError {
    fn description(&self) -> &'static str {
        match self {
            DecodeError::UnknownTag(_) => "unknown node tag",
            DecodeError::TooDeep => "proof tree is too deep",
            DecodeError::ElementTooLong(_) => "element value is too long",
            DecodeError::UnexpectedEof => "unexpected end of input",
            DecodeError::TrailingBytes => "trailing bytes after proof tree",
            DecodeError::Malformed => "malformed proof tree",
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownTag(tag) => write!(f, "{} {}", self.description(), tag),
            DecodeError::ElementTooLong(len) => {
                write!(f, "{} ({} bytes)", self.description(), len)
            }
            _ => f.write_str(self.description()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

impl From<Error> for DecodeError {
    fn from(err: Error) -> Self {
        match err.kind() {
            ErrorKind::UnexpectedEof => DecodeError::UnexpectedEof,
            _ => DecodeError::Malformed,
        }
    }
}

/// Encode a proof tree.
pub fn encode(node: &ProofNode) -> Vec<u8> {
    let mut buf = Vec::new();
    write_node(node, &mut buf);
    buf
}

/// Decode a proof tree with the default [`DecodeOptions`]. The whole input must be consumed.
pub fn decode(bytes: &[u8]) -> Result<ProofNode, DecodeError> {
    decode_with(bytes, &DecodeOptions::default())
}

/// Decode a proof tree with the given options. The whole input must be consumed.
pub fn decode_with(mut bytes: &[u8], options: &DecodeOptions) -> Result<ProofNode, DecodeError> {
    let node = read_node(&mut bytes, options, 0)?;
    if !bytes.is_empty() {
        return Err(DecodeError::TrailingBytes);
    }
    Ok(node)
}

fn write_node(node: &ProofNode, buf: &mut Vec<u8>) {
    match node {
        ProofNode::Branch { left, right } => {
            buf.push(TAG_BRANCH);
            write_node(left, buf);
            match right {
                Some(right) => {
                    buf.push(1);
                    write_node(right, buf);
                }
                None => buf.push(0),
            }
        }
        ProofNode::Element(value) => {
            buf.push(TAG_ELEMENT);
            buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
            buf.extend_from_slice(value);
        }
        ProofNode::HashNode(hash) => {
            buf.push(TAG_HASH_NODE);
            buf.extend_from_slice(hash);
        }
        ProofNode::Absence => buf.push(TAG_ABSENCE),
    }
}

fn read_node<R: Read>(
    reader: &mut R,
    options: &DecodeOptions,
    depth: usize,
) -> Result<ProofNode, DecodeError> {
    if depth > options.max_depth {
        return Err(DecodeError::TooDeep);
    }

    let [tag] = read_array::<_, 1>(reader)?;
    match tag {
        TAG_BRANCH => {
            let left = read_node(reader, options, depth + 1)?;
            let right = match read_array::<_, 1>(reader)? {
                [0] => None,
                [1] => Some(Box::new(read_node(reader, options, depth + 1)?)),
                _ => return Err(DecodeError::Malformed),
            };
            Ok(ProofNode::Branch {
                left: Box::new(left),
                right,
            })
        }
        TAG_ELEMENT => {
            let len = u32::from_le_bytes(read_array(reader)?) as usize;
            if len > options.max_element_len {
                return Err(DecodeError::ElementTooLong(len));
            }
            let mut value = vec![0u8; len];
            reader.read_exact(&mut value)?;
            Ok(ProofNode::Element(value))
        }
        TAG_HASH_NODE => Ok(ProofNode::HashNode(read_array(reader)?)),
        TAG_ABSENCE => Ok(ProofNode::Absence),
        tag => Err(DecodeError::UnknownTag(tag)),
    }
}

fn read_array<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N], DecodeError> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

impl BorshSerialize for ProofNode {
    fn serialize<W: Write>(&self, writer: &mut W) -> borsh::io::Result<()> {
        writer.write_all(&encode(self))
    }
}

impl BorshDeserialize for ProofNode {
    fn deserialize_reader<R: Read>(reader: &mut R) -> borsh::io::Result<Self> {
        read_node(reader, &DecodeOptions::default(), 0)
            .map_err(|err| Error::new(ErrorKind::InvalidData, err.description()))
    }
}
