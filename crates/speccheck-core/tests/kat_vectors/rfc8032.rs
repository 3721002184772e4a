//! RFC 8032 Section 7.1 — Ed25519 Known-Answer Tests.
//!
//! Every backend must accept the published vectors, including through
//! the SPKI container path, and reject them once a bit is flipped.

use ring::signature::{Ed25519KeyPair, KeyPair};
use speccheck_core::{backend, verify, Evaluator, TestVector};

/// RFC 8032 Section 7.1, Test Vector #1 (empty message).
const TV1_PUBLIC_KEY: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
const TV1_SIGNATURE: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
                             5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

/// RFC 8032 Section 7.1, Test Vector #2 (single byte `0x72`).
const TV2_PUBLIC_KEY: &str = "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c";
const TV2_SIGNATURE: &str = "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da\
                             085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00";

fn rfc_vectors() -> Vec<TestVector> {
    vec![
        TestVector::new(TV1_PUBLIC_KEY, "", TV1_SIGNATURE),
        TestVector::new(TV2_PUBLIC_KEY, "72", TV2_SIGNATURE),
    ]
}

#[test]
fn rfc8032_vectors_verify_on_every_backend() {
    for tv in rfc_vectors() {
        for b in backend::all() {
            assert!(verify(&tv, b.as_ref()), "{} rejected RFC 8032 vector", b.name());
        }
    }
}

#[test]
fn rfc8032_uppercase_hex_verifies() {
    let tv = TestVector::new(
        TV2_PUBLIC_KEY.to_uppercase(),
        "72",
        TV2_SIGNATURE.to_uppercase(),
    );
    let verdicts = Evaluator::with_all_backends().verify_all(&tv);
    assert!(verdicts.iter().all(|&v| v), "verdicts: {verdicts:?}");
}

#[test]
fn rfc8032_flipped_signature_bit_is_rejected_everywhere() {
    for tv in rfc_vectors() {
        let mut sig = hex_to_bytes(&tv.signature);
        // Low bit of R: changes the committed point, not S canonicality.
        sig[0] ^= 0x01;
        let flipped = TestVector::new(
            tv.public_key.clone(),
            tv.message.clone(),
            bytes_to_hex(&sig),
        );

        for b in backend::all() {
            assert!(!verify(&flipped, b.as_ref()), "{} accepted flipped signature", b.name());
        }
    }
}

#[test]
fn rfc8032_wrong_message_is_rejected_everywhere() {
    let tv = TestVector::new(TV1_PUBLIC_KEY, "00", TV1_SIGNATURE);
    for b in backend::all() {
        assert!(!verify(&tv, b.as_ref()), "{} accepted wrong message", b.name());
    }
}

/// The RFC public key is what `ring` derives from the RFC seed, so
/// backends see exactly the key a signer would publish.
#[test]
fn rfc8032_public_key_matches_seed() {
    let seed = hex_to_bytes("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
    let key_pair = Ed25519KeyPair::from_seed_unchecked(&seed).expect("seed should be valid");

    assert_eq!(
        bytes_to_hex(key_pair.public_key().as_ref()),
        TV1_PUBLIC_KEY,
        "derived public key must match RFC 8032 expected value"
    );
    assert_eq!(bytes_to_hex(key_pair.sign(b"").as_ref()), TV1_SIGNATURE);
}

/// Decode a hex string to bytes.
#[allow(clippy::arithmetic_side_effects)]
fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("valid hex"))
        .collect()
}

fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
