//! Hashers (feature-gated) and utilities for implementing them.
//!
//! Every preimage starts with a one-byte tag separating the three kinds of hashed objects:
//!
//!   - element: `H(0x00 || value)`
//!   - branch: `H(0x01 || left || right)`, or `H(0x01 || left)` when the right child is absent
//!   - list: `H(0x02 || length_le_u64 || merkle_root)`
//!
//! An absent right child is encoded as the empty byte string. A branch preimage is therefore
//! either 33 or 65 bytes long, so no digest can be passed off as an absent edge or the other way
//! around.

use crate::proof_node::Hash;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// The merkle root of an empty list.
pub const EMPTY_MERKLE_ROOT: Hash = [0u8; 32];

/// Domain separation tags prepended to every hashed preimage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HashTag {
    /// A list element.
    Element = 0,
    /// An internal node of the list tree.
    Branch = 1,
    /// The whole list: its length together with its merkle root.
    List = 2,
}

/// A hash function over the objects appearing in a list proof.
pub trait ListHasher {
    /// Hash an element value.
    fn hash_element(value: &[u8]) -> Hash;

    /// Hash a branch from the hashes of its children.
    fn hash_branch(left: &Hash, right: Option<&Hash>) -> Hash;

    /// Hash a list of the given length with the given merkle root.
    fn hash_list(length: u64, merkle_root: &Hash) -> Hash;
}

/// A simple trait for representing binary hash functions.
pub trait BinaryHash {
    /// Given a bit-string, produce a 32-byte hash.
    fn hash(input: &[u8]) -> [u8; 32];

    /// An optional specialization of `hash` where the input is given as several parts which are
    /// hashed as their concatenation.
    fn hash_parts(parts: &[&[u8]]) -> [u8; 32] {
        let len = parts.iter().map(|p| p.len()).sum();
        let mut buf = Vec::with_capacity(len);
        for part in parts {
            buf.extend_from_slice(part);
        }
        Self::hash(&buf)
    }
}

/// A [`ListHasher`] constructed from a simple binary hasher, tagging preimages as described in
/// the [module documentation](self).
///
/// The binary hash wrapped by this structure must behave approximately like a random oracle over
/// the space 2^256. Functions like Sha2/Blake3/Keccak all meet these criteria.
pub struct BinaryHasher<H>(core::marker::PhantomData<H>);

impl<H: BinaryHash> ListHasher for BinaryHasher<H> {
    fn hash_element(value: &[u8]) -> Hash {
        H::hash_parts(&[&[HashTag::Element as u8], value])
    }

    fn hash_branch(left: &Hash, right: Option<&Hash>) -> Hash {
        match right {
            Some(right) => H::hash_parts(&[&[HashTag::Branch as u8], left, right]),
            None => H::hash_parts(&[&[HashTag::Branch as u8], left]),
        }
    }

    fn hash_list(length: u64, merkle_root: &Hash) -> Hash {
        H::hash_parts(&[
            &[HashTag::List as u8],
            &length.to_le_bytes(),
            merkle_root,
        ])
    }
}

#[cfg(any(feature = "blake3-hasher", test))]
pub use self::blake3::Blake3Hasher;

/// A list hasher making use of blake3.
#[cfg(any(feature = "blake3-hasher", test))]
pub mod blake3 {
    use super::{BinaryHash, BinaryHasher};

    /// A [`BinaryHash`] implementation for Blake3.
    pub struct Blake3BinaryHasher;

    /// A wrapper around Blake3 for use in list proofs.
    pub type Blake3Hasher = BinaryHasher<Blake3BinaryHasher>;

    impl BinaryHash for Blake3BinaryHasher {
        fn hash(value: &[u8]) -> [u8; 32] {
            blake3::hash(value).into()
        }

        fn hash_parts(parts: &[&[u8]]) -> [u8; 32] {
            let mut hasher = blake3::Hasher::new();
            for part in parts {
                hasher.update(part);
            }
            hasher.finalize().into()
        }
    }
}

#[cfg(feature = "sha2-hasher")]
pub use self::sha2::Sha2Hasher;

/// A list hasher making use of sha2-256.
#[cfg(feature = "sha2-hasher")]
pub mod sha2 {
    use super::{BinaryHash, BinaryHasher};
    use sha2::{Digest, Sha256};

    /// A [`BinaryHash`] implementation for Sha2.
    pub struct Sha2BinaryHasher;

    /// A wrapper around sha2-256 for use in list proofs.
    pub type Sha2Hasher = BinaryHasher<Sha2BinaryHasher>;

    impl BinaryHash for Sha2BinaryHasher {
        fn hash(value: &[u8]) -> [u8; 32] {
            let mut hasher = Sha256::new();
            hasher.update(value);
            hasher.finalize().into()
        }

        fn hash_parts(parts: &[&[u8]]) -> [u8; 32] {
            let mut hasher = Sha256::new();
            for part in parts {
                hasher.update(part);
            }
            hasher.finalize().into()
        }
    }
}
