use super::{aggregate, validate, CheckedListProof};
use crate::{
    hasher::{ListHasher, EMPTY_MERKLE_ROOT},
    proof_node::{Hash, ProofNode},
};

/// A list proof as received from an untrusted source, together with the list length it claims.
///
/// A proof of absence may additionally carry the merkle root it asserts for the list. Without
/// it, the list is taken to be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshDeserialize, borsh::BorshSerialize)
)]
pub struct UncheckedListProof {
    root: ProofNode,
    length: u64,
    absence_merkle_root: Option<Hash>,
}

impl UncheckedListProof {
    /// Create an unchecked proof for a list of the given length.
    pub fn new(root: ProofNode, length: u64) -> Self {
        UncheckedListProof {
            root,
            length,
            absence_merkle_root: None,
        }
    }

    /// Set the merkle root asserted by a proof of absence.
    ///
    /// Only consulted when the proof consists of a single absence node.
    pub fn with_absence_merkle_root(mut self, merkle_root: Hash) -> Self {
        self.absence_merkle_root = Some(merkle_root);
        self
    }

    /// The root node of the proof tree.
    pub fn root(&self) -> &ProofNode {
        &self.root
    }

    /// The claimed list length.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Check the structure of the proof and, if it is well-formed, recompute its hashes and
    /// extract its elements.
    ///
    /// The result must still be compared with a trusted hash before its elements can be relied
    /// upon.
    pub fn check<H: ListHasher>(&self) -> CheckedListProof {
        let status = validate(&self.root);
        if !status.is_valid() {
            tracing::debug!(%status, length = self.length, "list proof rejected");
            return CheckedListProof::invalid(self.length, status);
        }

        let aggregate = aggregate::<H>(&self.root);
        let merkle_root = match aggregate.merkle_root {
            Some(root) => root,
            // a valid tree without a root is a lone absence node.
            None => self.absence_merkle_root.unwrap_or(EMPTY_MERKLE_ROOT),
        };
        let index_hash = H::hash_list(self.length, &merkle_root);

        tracing::trace!(
            elements = aggregate.elements.len(),
            length = self.length,
            index_hash = %hex::encode(index_hash),
            "list proof checked"
        );

        CheckedListProof::valid(self.length, merkle_root, index_hash, aggregate.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::UncheckedListProof;
    use crate::{
        hasher::{Blake3Hasher, ListHasher, EMPTY_MERKLE_ROOT},
        proof::{ListProofStatus, ProofNotValid},
        proof_node::ProofNode,
    };

    use hex_literal::hex;

    const V1: &[u8] = b"v1";
    const H1: [u8; 32] = hex!("a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1");
    const H2: [u8; 32] = hex!("a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2");

    #[test]
    fn check_valid_proof() {
        let root = ProofNode::branch(ProofNode::element(V1), ProofNode::hash(H1));
        let unchecked = UncheckedListProof::new(root.clone(), 2);

        let checked = unchecked.check::<Blake3Hasher>();

        assert_eq!(unchecked.root(), &root);
        assert_eq!(checked.status(), ListProofStatus::Valid);
        assert_eq!(
            checked.elements().unwrap().iter().collect::<Vec<_>>(),
            vec![(&0, &V1.to_vec())]
        );

        let merkle_root = Blake3Hasher::hash_branch(&Blake3Hasher::hash_element(V1), Some(&H1));
        assert_eq!(checked.root_hash(), Ok(merkle_root));
        assert_eq!(
            checked.index_hash(),
            Ok(Blake3Hasher::hash_list(2, &merkle_root))
        );
    }

    #[test]
    fn check_invalid_proof() {
        let root = ProofNode::branch(ProofNode::hash(H1), ProofNode::hash(H2));
        let checked = UncheckedListProof::new(root, 2).check::<Blake3Hasher>();

        let status = ListProofStatus::InvalidTreeNoElements;
        assert_eq!(checked.status(), status);
        assert_eq!(checked.elements(), Err(ProofNotValid { status }));
        assert_eq!(checked.root_hash(), Err(ProofNotValid { status }));
    }

    #[test]
    fn check_absence_of_empty_list() {
        let checked = UncheckedListProof::new(ProofNode::Absence, 0).check::<Blake3Hasher>();

        assert!(checked.is_valid());
        assert!(checked.elements().unwrap().is_empty());
        assert_eq!(checked.root_hash(), Ok(EMPTY_MERKLE_ROOT));
        assert_eq!(
            checked.index_hash(),
            Ok(Blake3Hasher::hash_list(0, &EMPTY_MERKLE_ROOT))
        );
    }

    #[test]
    fn check_absence_with_asserted_root() {
        let checked = UncheckedListProof::new(ProofNode::Absence, 3)
            .with_absence_merkle_root(H2)
            .check::<Blake3Hasher>();

        assert!(checked.is_valid());
        assert!(checked.elements().unwrap().is_empty());
        assert_eq!(checked.root_hash(), Ok(H2));
        assert_eq!(checked.index_hash(), Ok(Blake3Hasher::hash_list(3, &H2)));
    }

    #[test]
    fn absence_root_is_ignored_for_element_proofs() {
        let root = ProofNode::branch(ProofNode::element(V1), ProofNode::hash(H1));
        let plain = UncheckedListProof::new(root.clone(), 2).check::<Blake3Hasher>();
        let with_root = UncheckedListProof::new(root, 2)
            .with_absence_merkle_root(H2)
            .check::<Blake3Hasher>();

        assert_eq!(plain, with_root);
    }

    #[test]
    fn check_is_deterministic() {
        let root = ProofNode::branch(
            ProofNode::branch(ProofNode::element(b"a".to_vec()), ProofNode::hash(H1)),
            ProofNode::left_branch(ProofNode::element(b"c".to_vec())),
        );
        let unchecked = UncheckedListProof::new(root, 3);

        assert_eq!(
            unchecked.check::<Blake3Hasher>(),
            unchecked.check::<Blake3Hasher>()
        );
    }
}
