//! Fail-closed evaluation of test vectors against verifier backends.
//!
//! [`verify`] is the single-case entry point: it decodes the vector, builds
//! the key container when the backend wants one, and runs the backend. Any
//! hex error, import error, signature error or panic collapses to `false`,
//! so one adversarial vector can never stop the rest of the corpus.
//!
//! [`evaluate`] / [`Evaluator::evaluate`] run every backend over every
//! vector and collect the verdicts into [`Outcomes`].

use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::backend::{Backend, KeyFormat};
use crate::container;
use crate::error::SpeccheckError;
use crate::vector::TestVector;

/// Verify one vector with one backend.
///
/// Returns the backend's verdict, or `false` if anything along the way
/// fails or panics.
#[must_use]
pub fn verify(vector: &TestVector, backend: &dyn Backend) -> bool {
    let result = panic::catch_unwind(AssertUnwindSafe(|| try_verify(vector, backend)));

    match result {
        Ok(Ok(verdict)) => verdict,
        Ok(Err(e)) => {
            tracing::debug!(backend = backend.name(), "Verification failed: {e}");
            false
        }
        Err(_) => {
            tracing::warn!(backend = backend.name(), "Backend panicked, treating as rejection");
            false
        }
    }
}

fn try_verify(vector: &TestVector, backend: &dyn Backend) -> Result<bool, SpeccheckError> {
    let decoded = vector.decode()?;
    let key = match backend.key_format() {
        KeyFormat::Raw => decoded.public_key,
        KeyFormat::Container => container::encode(&decoded.public_key),
    };
    backend.verify(&key, &decoded.message, &decoded.signature)
}

/// Verdicts for every (vector, backend) pair of one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcomes {
    /// Backend names, one per column.
    pub backends: Vec<String>,
    /// One row per vector, in corpus order; `rows[i][j]` is the verdict
    /// of `backends[j]` on vector `i`.
    pub rows: Vec<Vec<bool>>,
}

impl Outcomes {
    /// Number of vectors evaluated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Verdict of `backend` on vector `index`, if both exist.
    #[must_use]
    pub fn get(&self, index: usize, backend: &str) -> Option<bool> {
        let column = self.column_index(backend)?;
        self.rows.get(index)?.get(column).copied()
    }

    /// All verdicts of one backend, in corpus order.
    ///
    /// `None` if the backend is unknown or any row lacks its column.
    #[must_use]
    pub fn column(&self, backend: &str) -> Option<Vec<bool>> {
        let column = self.column_index(backend)?;
        self.rows
            .iter()
            .map(|row| row.get(column).copied())
            .collect()
    }

    /// Indices of vectors on which at least two backends disagree.
    #[must_use]
    pub fn disagreements(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().any(|&v| v != row[0]))
            .map(|(i, _)| i)
            .collect()
    }

    fn column_index(&self, backend: &str) -> Option<usize> {
        self.backends.iter().position(|name| name == backend)
    }
}

/// Run every backend over every vector.
///
/// Always yields `vectors.len()` rows of `backends.len()` verdicts.
#[must_use]
pub fn evaluate(vectors: &[TestVector], backends: &[Box<dyn Backend>]) -> Outcomes {
    let rows = vectors
        .iter()
        .map(|vector| {
            backends
                .iter()
                .map(|backend| verify(vector, backend.as_ref()))
                .collect()
        })
        .collect();

    Outcomes {
        backends: backends.iter().map(|b| b.name().to_string()).collect(),
        rows,
    }
}

/// A fixed set of backends to evaluate corpora against.
pub struct Evaluator {
    backends: Vec<Box<dyn Backend>>,
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field(
                "backends",
                &self.backends.iter().map(|b| b.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Evaluator {
    /// Evaluator over the given backends, in report order.
    #[must_use]
    pub fn new(backends: Vec<Box<dyn Backend>>) -> Self {
        Self { backends }
    }

    /// Evaluator over every registered backend.
    #[must_use]
    pub fn with_all_backends() -> Self {
        Self::new(crate::backend::all())
    }

    /// Evaluator over the named backends, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`SpeccheckError::UnknownBackend`] for the first name that is
    /// not registered, or [`SpeccheckError::Config`] if `names` is empty.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, SpeccheckError> {
        if names.is_empty() {
            return Err(SpeccheckError::Config(
                "at least one backend must be selected".to_string(),
            ));
        }
        let backends = names
            .iter()
            .map(|name| crate::backend::by_name(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(backends))
    }

    /// Registered backends, in report order.
    #[must_use]
    pub fn backends(&self) -> &[Box<dyn Backend>] {
        &self.backends
    }

    /// Verify one vector with every backend, in backend order.
    #[must_use]
    pub fn verify_all(&self, vector: &TestVector) -> Vec<bool> {
        self.backends
            .iter()
            .map(|backend| verify(vector, backend.as_ref()))
            .collect()
    }

    /// See [`evaluate`].
    #[must_use]
    pub fn evaluate(&self, vectors: &[TestVector]) -> Outcomes {
        evaluate(vectors, &self.backends)
    }
}
