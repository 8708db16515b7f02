#![no_main]

use libfuzzer_sys::fuzz_target;
use list_proof_core::{codec, Sha2Hasher, UncheckedListProof};

fuzz_target!(|data: &[u8]| {
    let Ok(root) = codec::decode(data) else {
        return;
    };

    // the encoding is canonical.
    assert_eq!(codec::encode(&root), data);

    let _ = UncheckedListProof::new(root, data.len() as u64).check::<Sha2Hasher>();
});
