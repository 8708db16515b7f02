//! Structural validation of list proofs.
//!
//! Validation is a single depth-first pass over the tree which records, per node kind, the depth
//! of every node and, for branches, the kinds of their children. A fixed chain of rules is then
//! applied to that record and the first rule to fire determines the status.

use super::{ListProofStatus, MAX_NODE_DEPTH};
use crate::proof_node::{NodeKind, ProofNode};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A branch as seen by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchShape {
    /// The depth of the branch.
    pub depth: usize,
    /// The kind of the left child.
    pub left: NodeKind,
    /// The kind of the right child, or `None` if it is absent.
    pub right: Option<NodeKind>,
}

impl BranchShape {
    // a branch leading to no content could be replaced by a single hash node.
    fn is_opaque(&self) -> bool {
        [Some(self.left), self.right]
            .iter()
            .all(|child| matches!(child, None | Some(NodeKind::HashNode)))
    }
}

/// The shape of a proof tree, grouped by node kind.
///
/// Depths are recorded in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProofShape {
    /// Depths of all element nodes.
    pub elements: Vec<usize>,
    /// Depths of all hash nodes.
    pub hash_nodes: Vec<usize>,
    /// Depths of all absence nodes.
    pub absences: Vec<usize>,
    /// All branches.
    pub branches: Vec<BranchShape>,
}

impl ProofShape {
    /// Record the shape of the tree rooted at `root`, which is at depth 0.
    ///
    /// The traversal uses an explicit stack, so arbitrarily deep trees do not exhaust the call
    /// stack.
    pub fn of(root: &ProofNode) -> Self {
        let mut shape = ProofShape::default();
        let mut stack = Vec::new();
        stack.push((root, 0usize));

        while let Some((node, depth)) = stack.pop() {
            match node {
                ProofNode::Branch { left, right } => {
                    shape.branches.push(BranchShape {
                        depth,
                        left: left.kind(),
                        right: right.as_ref().map(|r| r.kind()),
                    });

                    // right first, so the left subtree is visited first.
                    if let Some(right) = right {
                        stack.push((right, depth + 1));
                    }
                    stack.push((left, depth + 1));
                }
                ProofNode::Element(_) => shape.elements.push(depth),
                ProofNode::HashNode(_) => shape.hash_nodes.push(depth),
                ProofNode::Absence => shape.absences.push(depth),
            }
        }

        shape
    }

    /// Apply the validation rules in order and return the status of the first one which fires.
    pub fn status(&self) -> ListProofStatus {
        if exceeds_max_depth(&self.elements) {
            ListProofStatus::InvalidElementNodeDepth
        } else if exceeds_max_depth(&self.hash_nodes) {
            ListProofStatus::InvalidHashNodeDepth
        } else if self.has_elements_at_different_depths() {
            ListProofStatus::InvalidNodeDepth
        } else if !self.branches.is_empty() && self.elements.is_empty() {
            ListProofStatus::InvalidTreeNoElements
        } else if self.branches.iter().any(BranchShape::is_opaque) {
            ListProofStatus::InvalidHashNodesCount
        } else if self.has_invalid_absence() {
            ListProofStatus::InvalidProofOfAbsence
        } else {
            ListProofStatus::Valid
        }
    }

    fn has_elements_at_different_depths(&self) -> bool {
        match self.elements.split_first() {
            Some((first, rest)) => rest.iter().any(|depth| depth != first),
            None => false,
        }
    }

    // a proof of absence must consist of a single absence node at the root.
    fn has_invalid_absence(&self) -> bool {
        match self.absences.as_slice() {
            [] => false,
            [depth] => {
                let single_node_tree = self.branches.is_empty()
                    && self.hash_nodes.is_empty()
                    && self.elements.is_empty();
                !single_node_tree || *depth != 0
            }
            _ => true,
        }
    }
}

fn exceeds_max_depth(depths: &[usize]) -> bool {
    depths.iter().any(|&depth| depth > MAX_NODE_DEPTH)
}

/// Check the structure of the proof tree rooted at `root`.
pub fn validate(root: &ProofNode) -> ListProofStatus {
    ProofShape::of(root).status()
}
