use core::fmt;

/// The outcome of checking the structure of a list proof.
///
/// Every variant other than [`ListProofStatus::Valid`] describes why a proof was rejected.
/// Rejection is an expected outcome for malformed or adversarial input, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListProofStatus {
    /// The proof is well-formed.
    Valid,
    /// An element node lies deeper than [`MAX_NODE_DEPTH`](super::MAX_NODE_DEPTH).
    InvalidElementNodeDepth,
    /// A hash node lies deeper than [`MAX_NODE_DEPTH`](super::MAX_NODE_DEPTH).
    InvalidHashNodeDepth,
    /// Element nodes appear at different depths.
    InvalidNodeDepth,
    /// The tree has branches but no element nodes.
    InvalidTreeNoElements,
    /// A branch has only hash nodes (or nothing) as children.
    InvalidHashNodesCount,
    /// The tree has several absence nodes, or an absence node which is not the only node.
    InvalidProofOfAbsence,
}

impl ListProofStatus {
    /// Whether this is [`ListProofStatus::Valid`].
    pub fn is_valid(&self) -> bool {
        *self == ListProofStatus::Valid
    }

    fn description(&self) -> &'static str {
        match self {
            ListProofStatus::Valid => "valid",
            ListProofStatus::InvalidElementNodeDepth => "element node exceeds the maximum depth",
            ListProofStatus::InvalidHashNodeDepth => "hash node exceeds the maximum depth",
            ListProofStatus::InvalidNodeDepth => "element nodes appear at different depths",
            ListProofStatus::InvalidTreeNoElements => "tree has branches but no elements",
            ListProofStatus::InvalidHashNodesCount => "branch contains only hash nodes",
            ListProofStatus::InvalidProofOfAbsence => "malformed proof of absence",
        }
    }
}

impl fmt::Display for ListProofStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
