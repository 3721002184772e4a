//! Minimal SubjectPublicKeyInfo container for raw Ed25519 public keys.
//!
//! Some verifiers only import keys through an X.509 key-spec API. This
//! module wraps a compressed Edwards point into the fixed RFC 8410 layout
//! those APIs expect, without going through a general ASN.1 encoder:
//!
//! ```text
//! 30 <len>                    SEQUENCE (SubjectPublicKeyInfo)
//!    30 05                    SEQUENCE (AlgorithmIdentifier)
//!       06 03 2b 65 70        OID 1.3.101.112 (Ed25519), parameters absent
//!    03 <n+1> 00 <key...>     BIT STRING, zero unused bits, raw key
//! ```
//!
//! # Limitation
//!
//! Lengths use the DER short form (one byte, < 128). The layout is only
//! well-formed for keys of at most [`MAX_RAW_KEY_LEN`] bytes. Longer input
//! still produces `12 + len` bytes, but the length octets truncate.

// DER tags
const SEQUENCE_TAG: u8 = 0x30;
const OID_TAG: u8 = 0x06;
const BIT_STRING_TAG: u8 = 0x03;

/// DER encoding of the AlgorithmIdentifier body for Ed25519 (1.3.101.112).
pub const ED25519_ALGORITHM_IDENTIFIER: [u8; 7] = [SEQUENCE_TAG, 5, OID_TAG, 3, 43, 101, 112];

/// Bytes the container adds around the raw key.
pub const CONTAINER_OVERHEAD: usize = 12;

/// Largest raw key for which the short-form lengths stay valid
/// (`12 + 115 - 2 = 125 < 128`).
pub const MAX_RAW_KEY_LEN: usize = 115;

/// Ed25519 compressed public key length.
pub const ED25519_PUBLIC_KEY_LEN: usize = 32;

/// Wrap a raw compressed public key into a SubjectPublicKeyInfo container.
///
/// Never fails. The output is `12 + raw_key.len()` bytes and ends with
/// `raw_key` verbatim. See the module docs for the length precondition.
#[must_use]
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub fn encode(raw_key: &[u8]) -> Vec<u8> {
    let total_len = CONTAINER_OVERHEAD + raw_key.len();
    let mut out = Vec::with_capacity(total_len);

    out.push(SEQUENCE_TAG);
    out.push((total_len - 2) as u8);

    out.extend_from_slice(&ED25519_ALGORITHM_IDENTIFIER);

    out.push(BIT_STRING_TAG);
    out.push((raw_key.len() + 1) as u8);
    out.push(0); // unused bits
    out.extend_from_slice(raw_key);

    out
}

/// Whether `encode` yields a well-formed container for a key of this length.
#[must_use]
pub const fn is_encodable(raw_key_len: usize) -> bool {
    raw_key_len <= MAX_RAW_KEY_LEN
}
