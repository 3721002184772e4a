//! Ed25519 test vectors as stored in a corpus.
//!
//! A [`TestVector`] keeps its three fields as hex strings exactly as they
//! were read. Decoding is deferred to [`TestVector::decode`] so that a
//! malformed vector can still be carried through the corpus and reported
//! as a rejection instead of failing the load.

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use serde::{Deserialize, Serialize};

use crate::error::SpeccheckError;

/// Ed25519 signature length in bytes (`R || S`).
pub const ED25519_SIGNATURE_LEN: usize = 64;

/// One (public key, message, signature) case, hex-encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVector {
    /// Compressed Edwards point, 32 bytes when well-formed.
    #[serde(rename = "pub_key")]
    pub public_key: String,
    /// Signed message, any length including zero.
    pub message: String,
    /// `R || S`, 64 bytes when well-formed.
    pub signature: String,
}

/// Raw bytes of a [`TestVector`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedVector {
    pub public_key: Vec<u8>,
    pub message: Vec<u8>,
    pub signature: Vec<u8>,
}

impl TestVector {
    /// Build a vector from hex strings as-is. No validation happens here.
    pub fn new(
        public_key: impl Into<String>,
        message: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            public_key: public_key.into(),
            message: message.into(),
            signature: signature.into(),
        }
    }

    /// Build a vector from raw bytes, hex-encoding them in lowercase.
    #[must_use]
    pub fn from_bytes(public_key: &[u8], message: &[u8], signature: &[u8]) -> Self {
        Self {
            public_key: HEXLOWER.encode(public_key),
            message: HEXLOWER.encode(message),
            signature: HEXLOWER.encode(signature),
        }
    }

    /// Decode all three fields.
    ///
    /// Upper- and lowercase hex are both accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SpeccheckError::Hex`] naming the first field with odd
    /// length or a non-hex character.
    pub fn decode(&self) -> Result<DecodedVector, SpeccheckError> {
        Ok(DecodedVector {
            public_key: decode_hex("pub_key", &self.public_key)?,
            message: decode_hex("message", &self.message)?,
            signature: decode_hex("signature", &self.signature)?,
        })
    }
}

fn decode_hex(field: &'static str, hex: &str) -> Result<Vec<u8>, SpeccheckError> {
    HEXLOWER_PERMISSIVE
        .decode(hex.as_bytes())
        .map_err(|e| SpeccheckError::Hex {
            field,
            reason: e.to_string(),
        })
}
