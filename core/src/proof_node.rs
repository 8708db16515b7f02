//! The tree representation of a list proof.
//!
//! A proof is a binary tree mirroring the shape of the Merkle tree over the list, but containing
//! only the nodes needed to recompute the root for the proven positions. There are four kinds of
//! nodes:
//!   1. [`ProofNode::Branch`], an internal node with a required left child and an optional right
//!      child. The right child is absent on the right edge of lists whose length is not a power
//!      of two.
//!   2. [`ProofNode::Element`], a proven list element carrying its raw value.
//!   3. [`ProofNode::HashNode`], a subtree summarized by its hash alone.
//!   4. [`ProofNode::Absence`], the root of a proof that no element exists at the queried
//!      position. It carries nothing.
//!
//! The root of a proof is at depth 0 and the depth of a child is the depth of its parent plus one.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

/// A 256-bit digest.
pub type Hash = [u8; 32];

/// A node of a list proof tree.
///
/// Trees are built once, either by a decoder or by hand, and are never mutated by the
/// verification routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofNode {
    /// An internal node.
    Branch {
        /// The left child. Always present.
        left: Box<ProofNode>,
        /// The right child, if the subtree has one.
        right: Option<Box<ProofNode>>,
    },
    /// A list element proven by this tree.
    Element(Vec<u8>),
    /// A subtree whose contents are not revealed.
    HashNode(Hash),
    /// A proof that no element exists at the queried position.
    Absence,
}

impl ProofNode {
    /// Create a branch with both children.
    pub fn branch(left: ProofNode, right: ProofNode) -> Self {
        ProofNode::Branch {
            left: Box::new(left),
            right: Some(Box::new(right)),
        }
    }

    /// Create a branch whose right child is absent.
    pub fn left_branch(left: ProofNode) -> Self {
        ProofNode::Branch {
            left: Box::new(left),
            right: None,
        }
    }

    /// Create an element node.
    pub fn element(value: impl Into<Vec<u8>>) -> Self {
        ProofNode::Element(value.into())
    }

    /// Create a hash node.
    pub fn hash(hash: Hash) -> Self {
        ProofNode::HashNode(hash)
    }

    /// Get the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            ProofNode::Branch { .. } => NodeKind::Branch,
            ProofNode::Element(_) => NodeKind::Element,
            ProofNode::HashNode(_) => NodeKind::HashNode,
            ProofNode::Absence => NodeKind::Absence,
        }
    }
}

/// The kind of a [`ProofNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NodeKind {
    /// See [`ProofNode::Branch`].
    Branch,
    /// See [`ProofNode::Element`].
    Element,
    /// See [`ProofNode::HashNode`].
    HashNode,
    /// See [`ProofNode::Absence`].
    Absence,
}

#[cfg(test)]
mod tests {
    use super::{NodeKind, ProofNode};

    #[test]
    fn constructors_and_kinds() {
        let node = ProofNode::branch(ProofNode::element(b"v1".to_vec()), ProofNode::hash([1; 32]));
        assert_eq!(node.kind(), NodeKind::Branch);

        let ProofNode::Branch { left, right } = node else {
            panic!("not a branch");
        };
        assert_eq!(*left, ProofNode::Element(b"v1".to_vec()));
        assert_eq!(right.map(|r| r.kind()), Some(NodeKind::HashNode));

        let node = ProofNode::left_branch(ProofNode::Absence);
        match node {
            ProofNode::Branch { left, right } => {
                assert_eq!(left.kind(), NodeKind::Absence);
                assert!(right.is_none());
            }
            _ => panic!("not a branch"),
        }
    }
}
