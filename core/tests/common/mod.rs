use list_proof_core::{
    hasher::{ListHasher, EMPTY_MERKLE_ROOT},
    Hash, ProofNode,
};
use std::ops::Range;

/// The number of levels of branches above the elements of a list of `len` elements.
pub fn height(len: u64) -> u32 {
    assert!(len > 0);
    64 - (len - 1).leading_zeros()
}

/// The merkle root of the whole list.
pub fn merkle_root<H: ListHasher>(values: &[Vec<u8>]) -> Hash {
    if values.is_empty() {
        return EMPTY_MERKLE_ROOT;
    }
    let height = height(values.len() as u64);
    // UNWRAP: the first subtree at any height always exists in a non-empty list.
    subtree_hash::<H>(values, 0, height).unwrap()
}

// the hash of the subtree of the given height starting at `start`, if it contains any element.
fn subtree_hash<H: ListHasher>(values: &[Vec<u8>], start: u64, height: u32) -> Option<Hash> {
    if start >= values.len() as u64 {
        return None;
    }
    if height == 0 {
        return Some(H::hash_element(&values[start as usize]));
    }
    let half = 1u64 << (height - 1);
    let left = subtree_hash::<H>(values, start, height - 1)?;
    let right = subtree_hash::<H>(values, start + half, height - 1);
    Some(H::hash_branch(&left, right.as_ref()))
}

/// Build a proof for the elements in `range`, which must be non-empty and within the list.
pub fn range_proof<H: ListHasher>(values: &[Vec<u8>], range: Range<u64>) -> ProofNode {
    assert!(!range.is_empty() && range.end <= values.len() as u64);
    let height = height(values.len() as u64);
    // UNWRAP: the root subtree always intersects a non-empty range.
    range_subtree::<H>(values, &range, 0, height).unwrap()
}

fn range_subtree<H: ListHasher>(
    values: &[Vec<u8>],
    range: &Range<u64>,
    start: u64,
    height: u32,
) -> Option<ProofNode> {
    if start >= values.len() as u64 {
        return None;
    }

    let end = start + (1u64 << height);
    if end <= range.start || start >= range.end {
        return subtree_hash::<H>(values, start, height).map(ProofNode::hash);
    }

    if height == 0 {
        return Some(ProofNode::element(values[start as usize].clone()));
    }

    let half = 1u64 << (height - 1);
    let left = range_subtree::<H>(values, range, start, height - 1)?;
    let right = range_subtree::<H>(values, range, start + half, height - 1);
    Some(ProofNode::Branch {
        left: Box::new(left),
        right: right.map(Box::new),
    })
}

/// Values `0..len` as little-endian bytes.
pub fn values(len: u64) -> Vec<Vec<u8>> {
    (0..len).map(|i| i.to_le_bytes().to_vec()).collect()
}
