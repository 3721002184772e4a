//! Ed25519 verifier backends.
//!
//! Each backend wraps one independent verification implementation behind
//! the [`Backend`] trait. The evaluator treats them as opaque oracles: they
//! import a key, run a one-shot verification, and report a verdict.
//!
//! Registered backends:
//! - `ring` — `ring::signature::UnparsedPublicKey` (BoringSSL lineage)
//! - `dalek` — `ed25519_dalek::VerifyingKey::verify`
//! - `dalek-strict` — `ed25519_dalek::VerifyingKey::verify_strict`
//! - `dalek-spki` — `ed25519_dalek`, key imported from an X.509
//!   SubjectPublicKeyInfo container

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use pkcs8::DecodePublicKey;
use ring::signature::{self, UnparsedPublicKey, VerificationAlgorithm};

use crate::error::SpeccheckError;

/// Backend names in report order.
pub const BACKEND_NAMES: [&str; 4] = ["ring", "dalek", "dalek-strict", "dalek-spki"];

/// How a backend expects its public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyFormat {
    /// The 32-byte compressed point as-is.
    Raw,
    /// A SubjectPublicKeyInfo container built by [`crate::container::encode`].
    Container,
}

/// An independent Ed25519 verification implementation.
///
/// Implementations hold only immutable configuration, so one instance can
/// be shared across threads and called any number of times.
pub trait Backend: Send + Sync {
    /// Stable identifier used in configuration and reports.
    fn name(&self) -> &str;

    /// Key encoding passed to [`Backend::verify`].
    fn key_format(&self) -> KeyFormat;

    /// Import `public_key` and verify `signature` over `message`.
    ///
    /// `Ok(false)` is a semantic rejection.
    ///
    /// # Errors
    ///
    /// Returns an error when the key or signature cannot be parsed at all.
    /// Callers treat it the same as a rejection.
    fn verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, SpeccheckError>;
}

// ---------------------------------------------------------------------------
// ring
// ---------------------------------------------------------------------------

/// Verifier backed by `ring`.
///
/// `ring` parses the key lazily inside `verify` and reports every failure
/// as `Unspecified`, so import failures surface as `Ok(false)`.
#[derive(Debug, Clone, Copy)]
pub struct RingBackend {
    algorithm: &'static dyn VerificationAlgorithm,
}

impl RingBackend {
    /// Create a backend for the given `ring` verification algorithm.
    #[must_use]
    pub const fn new(algorithm: &'static dyn VerificationAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl Default for RingBackend {
    fn default() -> Self {
        Self::new(&signature::ED25519)
    }
}

impl Backend for RingBackend {
    fn name(&self) -> &str {
        "ring"
    }

    fn key_format(&self) -> KeyFormat {
        KeyFormat::Raw
    }

    fn verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, SpeccheckError> {
        let key = UnparsedPublicKey::new(self.algorithm, public_key);
        Ok(key.verify(message, signature).is_ok())
    }
}

// ---------------------------------------------------------------------------
// ed25519-dalek
// ---------------------------------------------------------------------------

/// Which `ed25519-dalek` verification equation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DalekMode {
    /// `Verifier::verify`: cofactorless, accepts small-order keys.
    Standard,
    /// `verify_strict`: additionally rejects small-order `A` and `R`.
    Strict,
}

/// Verifier backed by `ed25519-dalek` with a raw 32-byte key.
#[derive(Debug, Clone, Copy)]
pub struct DalekBackend {
    mode: DalekMode,
}

impl DalekBackend {
    /// Create a backend running the given verification equation.
    #[must_use]
    pub const fn new(mode: DalekMode) -> Self {
        Self { mode }
    }
}

impl Backend for DalekBackend {
    fn name(&self) -> &str {
        match self.mode {
            DalekMode::Standard => "dalek",
            DalekMode::Strict => "dalek-strict",
        }
    }

    fn key_format(&self) -> KeyFormat {
        KeyFormat::Raw
    }

    fn verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, SpeccheckError> {
        let key = VerifyingKey::try_from(public_key)
            .map_err(|e| SpeccheckError::KeyImport(format!("ed25519-dalek: {e}")))?;
        let sig = parse_dalek_signature(signature)?;
        let verdict = match self.mode {
            DalekMode::Standard => key.verify(message, &sig),
            DalekMode::Strict => key.verify_strict(message, &sig),
        };
        Ok(verdict.is_ok())
    }
}

/// Verifier backed by `ed25519-dalek`, importing the key from a
/// SubjectPublicKeyInfo DER container.
#[derive(Debug, Clone, Copy, Default)]
pub struct DalekSpkiBackend;

impl Backend for DalekSpkiBackend {
    fn name(&self) -> &str {
        "dalek-spki"
    }

    fn key_format(&self) -> KeyFormat {
        KeyFormat::Container
    }

    fn verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, SpeccheckError> {
        let key = VerifyingKey::from_public_key_der(public_key)
            .map_err(|e| SpeccheckError::KeyImport(format!("SPKI import: {e}")))?;
        let sig = parse_dalek_signature(signature)?;
        Ok(key.verify(message, &sig).is_ok())
    }
}

fn parse_dalek_signature(bytes: &[u8]) -> Result<Signature, SpeccheckError> {
    Signature::from_slice(bytes).map_err(|e| {
        SpeccheckError::Signature(format!(
            "invalid Ed25519 signature ({} bytes): {e}",
            bytes.len()
        ))
    })
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Look up a backend by its [`Backend::name`].
///
/// # Errors
///
/// Returns [`SpeccheckError::UnknownBackend`] for names not in
/// [`BACKEND_NAMES`].
pub fn by_name(name: &str) -> Result<Box<dyn Backend>, SpeccheckError> {
    match name {
        "ring" => Ok(Box::new(RingBackend::default())),
        "dalek" => Ok(Box::new(DalekBackend::new(DalekMode::Standard))),
        "dalek-strict" => Ok(Box::new(DalekBackend::new(DalekMode::Strict))),
        "dalek-spki" => Ok(Box::new(DalekSpkiBackend)),
        other => Err(SpeccheckError::UnknownBackend(other.to_string())),
    }
}

/// Every registered backend, in [`BACKEND_NAMES`] order.
#[must_use]
pub fn all() -> Vec<Box<dyn Backend>> {
    BACKEND_NAMES
        .iter()
        .filter_map(|name| by_name(name).ok())
        .collect()
}
