//! `speccheck-core` — differential Ed25519 verification harness.
//!
//! Runs independent Ed25519 verifiers over a shared corpus of edge-case
//! test vectors and records, per vector and per verifier, whether the
//! signature was accepted. Disagreement between verifiers is the signal
//! this crate exists to surface.
//!
//! Evaluation is fail-closed: malformed hex, rejected keys, and panicking
//! backends all count as `false` and never abort a run.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod container;
pub mod vector;

pub mod corpus;

pub mod backend;
pub mod evaluator;

pub use backend::{
    Backend, DalekBackend, DalekMode, DalekSpkiBackend, KeyFormat, RingBackend, BACKEND_NAMES,
};
pub use container::{encode as encode_key_container, MAX_RAW_KEY_LEN};
pub use error::SpeccheckError;
pub use evaluator::{evaluate, verify, Evaluator, Outcomes};
pub use vector::{DecodedVector, TestVector};
