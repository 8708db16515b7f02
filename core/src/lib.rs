//! Core types and verification routines for Merkle list proofs.
//!
//! A list proof is a partial reconstruction of the binary Merkle tree built over an
//! authenticated list. This crate checks that such a tree is structurally well-formed, recomputes
//! the root it implies and extracts the elements it authenticates. Comparing the result against a
//! trusted root is left to the caller.
//!
//! The types and verification routines of this crate do not require the standard library, but
//! do require Rust's alloc crate.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

#[cfg(feature = "borsh")]
pub mod codec;
pub mod hasher;
pub mod proof;
pub mod proof_node;

pub use proof::{CheckedListProof, ListProofStatus, ProofNotValid, UncheckedListProof};
pub use proof_node::{Hash, NodeKind, ProofNode};

#[cfg(any(feature = "blake3-hasher", test))]
pub use hasher::Blake3Hasher;
#[cfg(feature = "sha2-hasher")]
pub use hasher::Sha2Hasher;
