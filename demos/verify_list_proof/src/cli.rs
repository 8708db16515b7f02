use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Check a Merkle list proof and compare it with a trusted list hash")]
pub struct Cli {
    /// The borsh-encoded unchecked proof, as hex.
    #[arg(long, conflicts_with = "proof_file", required_unless_present = "proof_file")]
    pub proof: Option<String>,

    /// A file containing the borsh-encoded unchecked proof, as raw bytes.
    #[arg(long)]
    pub proof_file: Option<PathBuf>,

    /// The hash function the list was built with.
    #[arg(long, value_enum, default_value_t = HasherKind::Sha2)]
    pub hasher: HasherKind,

    /// The trusted list hash, as hex.
    ///
    /// If not provided, the proof is only checked for structure and its hashes are printed.
    #[arg(long, short = 't')]
    pub trusted_hash: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HasherKind {
    Sha2,
    Blake3,
}
