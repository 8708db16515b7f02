//! List proofs and proof verification.
//!
//! A proof is verified in two stages. First, [`validate`] checks that the tree is structurally
//! well-formed. Only then does [`aggregate`] recompute the merkle root and collect the proven
//! elements. [`UncheckedListProof::check`] runs both and produces a [`CheckedListProof`].

pub use aggregator::{aggregate, Aggregate};
pub use checked::{CheckedListProof, ProofNotValid};
pub use status::ListProofStatus;
pub use unchecked::UncheckedListProof;
pub use validator::{validate, BranchShape, ProofShape};

mod aggregator;
mod checked;
mod status;
mod unchecked;
mod validator;

/// The maximum depth at which element and hash nodes may appear. This bounds the length of a
/// provable list to 2^63.
pub const MAX_NODE_DEPTH: usize = 63;
