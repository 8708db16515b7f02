use super::ListProofStatus;
use crate::proof_node::Hash;

use alloc::collections::BTreeMap;
use core::fmt;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// The result of checking a list proof.
///
/// If the proof is [valid](Self::is_valid), the recomputed hashes and the proven elements are
/// available. A proof of absence is valid and has no elements.
///
/// If the proof is not valid, the [status](Self::status) describes why, and every accessor of
/// authenticated data fails with [`ProofNotValid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedListProof {
    status: ListProofStatus,
    length: u64,
    verified: Option<Verified>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Verified {
    merkle_root: Hash,
    index_hash: Hash,
    elements: BTreeMap<u64, Vec<u8>>,
}

impl CheckedListProof {
    pub(crate) fn valid(
        length: u64,
        merkle_root: Hash,
        index_hash: Hash,
        elements: BTreeMap<u64, Vec<u8>>,
    ) -> Self {
        CheckedListProof {
            status: ListProofStatus::Valid,
            length,
            verified: Some(Verified {
                merkle_root,
                index_hash,
                elements,
            }),
        }
    }

    pub(crate) fn invalid(length: u64, status: ListProofStatus) -> Self {
        debug_assert!(!status.is_valid());
        CheckedListProof {
            status,
            length,
            verified: None,
        }
    }

    /// The status of the proof.
    pub fn status(&self) -> ListProofStatus {
        self.status
    }

    /// Whether the proof is valid.
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    /// The list length the proof was checked with.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// The merkle root of the list tree recomputed from the proof.
    pub fn root_hash(&self) -> Result<Hash, ProofNotValid> {
        self.verified().map(|v| v.merkle_root)
    }

    /// The hash of the whole list, committing to both the length and the merkle root. This is
    /// the value to compare against a trusted list hash.
    pub fn index_hash(&self) -> Result<Hash, ProofNotValid> {
        self.verified().map(|v| v.index_hash)
    }

    /// The proven elements, in ascending order of position.
    pub fn elements(&self) -> Result<&BTreeMap<u64, Vec<u8>>, ProofNotValid> {
        self.verified().map(|v| &v.elements)
    }

    /// Take the proven elements, in ascending order of position.
    pub fn into_elements(self) -> Result<BTreeMap<u64, Vec<u8>>, ProofNotValid> {
        let status = self.status;
        self.verified
            .map(|v| v.elements)
            .ok_or(ProofNotValid { status })
    }

    fn verified(&self) -> Result<&Verified, ProofNotValid> {
        self.verified.as_ref().ok_or(ProofNotValid {
            status: self.status,
        })
    }
}

/// Authenticated data was requested from a proof which is not valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofNotValid {
    /// The status of the proof.
    pub status: ListProofStatus,
}

impl fmt::Display for ProofNotValid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "proof is not valid: {}", self.status)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProofNotValid {}
