//! Corpus I/O: JSON loading and the `cases.txt` export.
//!
//! The JSON form is an array of `{"pub_key", "message", "signature"}`
//! objects. The text form is what C harnesses read line by line:
//!
//! ```text
//! <count>
//! msg=<hex>
//! pbk=<hex>
//! sig=<hex>
//! ...
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::SpeccheckError;
use crate::vector::TestVector;

/// Default corpus file name.
pub const DEFAULT_CORPUS_FILE: &str = "cases.json";

/// Parse a JSON array of test vectors.
///
/// Field values are not hex-checked here; malformed hex is a per-vector
/// rejection at evaluation time.
///
/// # Errors
///
/// Returns [`SpeccheckError::Corpus`] if the input is not a JSON array of
/// objects carrying the three string fields.
pub fn from_json_str(json: &str) -> Result<Vec<TestVector>, SpeccheckError> {
    serde_json::from_str(json).map_err(|e| SpeccheckError::Corpus(e.to_string()))
}

/// Read and parse a JSON corpus file.
///
/// # Errors
///
/// Returns [`SpeccheckError::Io`] if the file cannot be read, or
/// [`SpeccheckError::Corpus`] if it does not parse.
pub fn load(path: &Path) -> Result<Vec<TestVector>, SpeccheckError> {
    let contents = fs::read_to_string(path)?;
    let vectors = from_json_str(&contents)?;
    tracing::info!(path = %path.display(), count = vectors.len(), "Corpus loaded");
    Ok(vectors)
}

/// Serialize vectors back to the JSON corpus form.
///
/// # Errors
///
/// Returns [`SpeccheckError::Corpus`] if serialization fails.
pub fn to_json_string(vectors: &[TestVector]) -> Result<String, SpeccheckError> {
    serde_json::to_string(vectors).map_err(|e| SpeccheckError::Corpus(e.to_string()))
}

/// Render vectors in the `cases.txt` line format.
///
/// Hex is re-emitted lowercase. No trailing newline.
#[must_use]
pub fn to_txt(vectors: &[TestVector]) -> String {
    let mut out = vectors.len().to_string();
    for tv in vectors {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "\nmsg={}\npbk={}\nsig={}",
            tv.message.to_ascii_lowercase(),
            tv.public_key.to_ascii_lowercase(),
            tv.signature.to_ascii_lowercase(),
        );
    }
    out
}

/// Write the `cases.txt` rendering of `vectors` to `path`.
///
/// # Errors
///
/// Returns [`SpeccheckError::Io`] on write failure.
pub fn export_txt(vectors: &[TestVector], path: &Path) -> Result<(), SpeccheckError> {
    fs::write(path, to_txt(vectors))?;
    tracing::info!(path = %path.display(), count = vectors.len(), "Corpus exported");
    Ok(())
}
