use arbitrary::Arbitrary;
use list_proof_core::ProofNode;

/// A proof tree shaped by the fuzzer.
#[derive(Debug, Arbitrary)]
pub enum Node {
    Branch(Box<Node>, Option<Box<Node>>),
    Element(Vec<u8>),
    HashNode([u8; 32]),
    Absence,
}

impl From<Node> for ProofNode {
    fn from(node: Node) -> Self {
        match node {
            Node::Branch(left, right) => ProofNode::Branch {
                left: Box::new((*left).into()),
                right: right.map(|r| Box::new((*r).into())),
            },
            Node::Element(value) => ProofNode::Element(value),
            Node::HashNode(hash) => ProofNode::HashNode(hash),
            Node::Absence => ProofNode::Absence,
        }
    }
}

#[derive(Debug, Arbitrary)]
pub struct Run {
    pub root: Node,
    pub length: u64,
}
