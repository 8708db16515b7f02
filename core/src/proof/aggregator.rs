//! Recomputation of the merkle root of a validated proof tree.

use crate::{
    hasher::ListHasher,
    proof_node::{Hash, ProofNode},
};

use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// The merkle root and elements implied by a proof tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    /// The recomputed merkle root, or `None` for a proof of absence, which carries no hashable
    /// content.
    pub merkle_root: Option<Hash>,
    /// The proven elements, keyed by their position in the list.
    pub elements: BTreeMap<u64, Vec<u8>>,
}

/// Recompute the merkle root of the tree rooted at `root` and collect its elements.
///
/// The position of an element is read from its path: starting at the root, a left edge appends a
/// 0 bit and a right edge appends a 1 bit.
///
/// The tree is expected to have passed [`validate`](super::validate). In particular, depths are
/// assumed not to exceed [`MAX_NODE_DEPTH`](super::MAX_NODE_DEPTH), which keeps both the
/// recursion and the positions bounded. An absence node anywhere but at the root yields no merkle
/// root.
pub fn aggregate<H: ListHasher>(root: &ProofNode) -> Aggregate {
    let mut elements = BTreeMap::new();
    let merkle_root = hash_subtree::<H>(root, 0, &mut elements);
    Aggregate {
        merkle_root,
        elements,
    }
}

// `position` is the path from the root to `node`, read as a binary number.
fn hash_subtree<H: ListHasher>(
    node: &ProofNode,
    position: u64,
    elements: &mut BTreeMap<u64, Vec<u8>>,
) -> Option<Hash> {
    match node {
        ProofNode::Branch { left, right } => {
            let left_hash = hash_subtree::<H>(left, position << 1, elements)?;
            let right_hash = match right {
                Some(right) => Some(hash_subtree::<H>(right, (position << 1) | 1, elements)?),
                None => None,
            };
            Some(H::hash_branch(&left_hash, right_hash.as_ref()))
        }
        ProofNode::Element(value) => {
            elements.insert(position, value.clone());
            Some(H::hash_element(value))
        }
        ProofNode::HashNode(hash) => Some(*hash),
        ProofNode::Absence => None,
    }
}
