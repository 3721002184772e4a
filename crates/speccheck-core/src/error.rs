//! Error types for `speccheck-core`.

use thiserror::Error;

/// Errors produced while loading, decoding, or verifying test vectors.
///
/// Inside the evaluator every variant collapses to a `false` verdict.
/// Outside it (corpus loading, backend lookup) they propagate normally.
#[derive(Debug, Error)]
pub enum SpeccheckError {
    /// A test-vector field is not valid hex (odd length, non-hex characters).
    #[error("invalid hex in {field}: {reason}")]
    Hex {
        /// Which field failed to decode (`pub_key`, `message`, `signature`).
        field: &'static str,
        /// Decoder message.
        reason: String,
    },

    /// Public key rejected by a backend's key parser (wrong length,
    /// invalid point, malformed container).
    #[error("key import failed: {0}")]
    KeyImport(String),

    /// Signature bytes rejected before verification (wrong length).
    #[error("signature error: {0}")]
    Signature(String),

    /// Corpus file could not be parsed.
    #[error("corpus error: {0}")]
    Corpus(String),

    /// No backend registered under this name.
    #[error("unknown backend: {0}")]
    UnknownBackend(String),

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem failure while reading or writing corpus files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
