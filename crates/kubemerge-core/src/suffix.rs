use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::MergeError;

/// Suffix widths tried in order when a shorter suffix is itself taken. The
/// digest is 64 hex chars; widths past that repeat it, so the space widens
/// monotonically and the loop terminates.
const SUFFIX_WIDTHS: [usize; 7] = [10, 16, 24, 32, 64, 128, 256];

/// Stable identity of an entry: lowercase hex SHA-256 over its YAML
/// serialization. Identical content always yields the identical digest.
pub fn content_digest<T: Serialize>(entry: &T) -> Result<String, MergeError> {
    let text = serde_yaml::to_string(entry).map_err(|e| MergeError::Serialization(e.to_string()))?;
    Ok(hex::encode(Sha256::digest(text.as_bytes())))
}

/// Returns `proposed` unchanged when free, otherwise `proposed-<suffix>` with
/// the shortest digest prefix that is not taken. Purely functional over the
/// membership predicate.
pub fn allocate<F>(proposed: &str, digest: &str, is_taken: F) -> Result<String, MergeError>
where
    F: Fn(&str) -> bool,
{
    if !is_taken(proposed) {
        return Ok(proposed.to_string());
    }

    debug_assert!(!digest.is_empty(), "digest must be non-empty");
    let pool = digest.repeat(SUFFIX_WIDTHS[SUFFIX_WIDTHS.len() - 1] / digest.len().max(1) + 1);
    for width in SUFFIX_WIDTHS {
        let candidate = format!("{proposed}-{}", &pool[..width]);
        if !is_taken(candidate.as_str()) {
            return Ok(candidate);
        }
    }

    Err(MergeError::NameCollisionExhausted(proposed.to_string()))
}
