use anyhow::{bail, Context as _, Result};
use clap::Parser;
use list_proof_core::{
    hasher::ListHasher, Blake3Hasher, CheckedListProof, Hash, Sha2Hasher, UncheckedListProof,
};

mod cli;
mod logging;

use cli::{Cli, HasherKind};

fn main() -> Result<()> {
    logging::init()?;
    let cli = Cli::parse();

    let bytes = match (&cli.proof, &cli.proof_file) {
        (Some(proof), _) => hex::decode(proof.trim()).context("proof is not valid hex")?,
        (None, Some(path)) => std::fs::read(path)
            .with_context(|| format!("failed to read proof from {}", path.display()))?,
        (None, None) => bail!("either --proof or --proof-file must be given"),
    };

    // The proof comes from an untrusted source; its framing is checked before its structure.
    let unchecked: UncheckedListProof =
        borsh::from_slice(&bytes).context("proof is not a valid encoding")?;
    tracing::info!(length = unchecked.length(), "decoded list proof");

    let checked = match cli.hasher {
        HasherKind::Sha2 => check::<Sha2Hasher>(&unchecked),
        HasherKind::Blake3 => check::<Blake3Hasher>(&unchecked),
    };

    if !checked.is_valid() {
        bail!("proof rejected: {}", checked.status());
    }

    let index_hash = checked.index_hash()?;
    println!("merkle root: {}", hex::encode(checked.root_hash()?));
    println!("index hash:  {}", hex::encode(index_hash));

    let Some(trusted) = &cli.trusted_hash else {
        tracing::warn!("no trusted hash given, elements are not authenticated");
        print_elements(&checked)?;
        return Ok(());
    };

    let trusted = parse_hash(trusted)?;
    if trusted != index_hash {
        bail!(
            "index hash mismatch: expected {}, proof implies {}",
            hex::encode(trusted),
            hex::encode(index_hash)
        );
    }

    tracing::info!("proof matches the trusted hash");
    print_elements(&checked)
}

fn check<H: ListHasher>(unchecked: &UncheckedListProof) -> CheckedListProof {
    let checked = unchecked.check::<H>();
    tracing::info!(status = %checked.status(), "checked list proof");
    checked
}

fn print_elements(checked: &CheckedListProof) -> Result<()> {
    let elements = checked.elements()?;
    if elements.is_empty() {
        println!("no elements (proof of absence)");
    }
    for (position, value) in elements {
        println!("{}: {}", position, hex::encode(value));
    }
    Ok(())
}

fn parse_hash(s: &str) -> Result<Hash> {
    let bytes = hex::decode(s.trim()).context("trusted hash is not valid hex")?;
    match <Hash>::try_from(bytes) {
        Ok(hash) => Ok(hash),
        Err(bytes) => bail!("trusted hash has {} bytes, not 32", bytes.len()),
    }
}
