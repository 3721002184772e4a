//! Vector builders shared by the integration suites.

use ring::signature::{Ed25519KeyPair, KeyPair};
use speccheck_core::TestVector;

/// Ed25519 group order `L`, little-endian.
const GROUP_ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x10,
];

/// Compressed identity point `(0, 1)`.
pub const IDENTITY: [u8; 32] = {
    let mut p = [0u8; 32];
    p[0] = 1;
    p
};

/// Sign `message` with a key derived from a one-byte seed pattern.
pub fn signed(seed: u8, message: &[u8]) -> TestVector {
    let kp = Ed25519KeyPair::from_seed_unchecked(&[seed; 32]).expect("seed should be valid");
    let sig = kp.sign(message);
    TestVector::from_bytes(kp.public_key().as_ref(), message, sig.as_ref())
}

/// Same vector with one signature bit flipped in `R`.
pub fn flipped(tv: &TestVector) -> TestVector {
    let mut sig = decode(&tv.signature);
    sig[3] ^= 0x10;
    TestVector::from_bytes(&decode(&tv.public_key), &decode(&tv.message), &sig)
}

/// Same vector with `S` replaced by `S + L` (non-canonical, same value mod `L`).
pub fn non_canonical_s(tv: &TestVector) -> TestVector {
    let mut sig = decode(&tv.signature);
    let mut carry = 0u16;
    for (byte, l) in sig[32..].iter_mut().zip(GROUP_ORDER) {
        let sum = u16::from(*byte) + u16::from(l) + carry;
        *byte = (sum & 0xff) as u8;
        carry = sum >> 8;
    }
    assert_eq!(carry, 0, "S + L fits in 256 bits");
    TestVector::from_bytes(&decode(&tv.public_key), &decode(&tv.message), &sig)
}

/// `A = identity`, `R = identity`, `S = 0`: satisfies the cofactorless
/// equation for any message, but both points have small order.
pub fn identity_key_and_r(message: &[u8]) -> TestVector {
    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(&IDENTITY);
    TestVector::from_bytes(&IDENTITY, message, &sig)
}

/// Ten vectors alternating invalid, valid.
pub fn alternating_corpus() -> Vec<TestVector> {
    (0..5u8)
        .flat_map(|i| {
            let message = [i; 16];
            let valid = signed(i.wrapping_add(1), &message);
            [flipped(&valid), valid]
        })
        .collect()
}

pub fn decode(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("valid hex"))
        .collect()
}
