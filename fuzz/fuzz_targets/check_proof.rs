#![no_main]

mod common;

use common::Run;
use libfuzzer_sys::fuzz_target;
use list_proof_core::{codec, Blake3Hasher, UncheckedListProof};

fuzz_target!(|run: Run| {
    let unchecked = UncheckedListProof::new(run.root.into(), run.length);
    let checked = unchecked.check::<Blake3Hasher>();

    // checking is deterministic and survives a trip through the wire format.
    assert_eq!(checked, unchecked.check::<Blake3Hasher>());
    if let Ok(decoded) = codec::decode(&codec::encode(unchecked.root())) {
        let rechecked = UncheckedListProof::new(decoded, run.length).check::<Blake3Hasher>();
        assert_eq!(checked, rechecked);
    }

    assert_eq!(checked.is_valid(), checked.elements().is_ok());
    assert_eq!(checked.is_valid(), checked.root_hash().is_ok());
});
