// src/share/identifier.rs
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const IDENTIFIER_LEN: usize = 8;

/// Longest token accepted from a request.
const MAX_IDENTIFIER_LEN: usize = 64;

/// Opaque, case-sensitive token addressing one saved listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareIdentifier(String);

impl ShareIdentifier {
    /// Accepts a token from the outside world (query string, API).
    ///
    /// Only ASCII alphanumerics are allowed. Anything else could never have
    /// been generated here, so callers treat `None` as "not found".
    pub fn parse(raw: &str) -> Option<Self> {
        let ok = !raw.is_empty()
            && raw.len() <= MAX_IDENTIFIER_LEN
            && raw.chars().all(|c| c.is_ascii_alphanumeric());
        ok.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate a fresh identifier from the thread-local, OS-seeded RNG.
/// This is what the service should call.
pub fn generate() -> ShareIdentifier {
    generate_with(&mut rand::thread_rng())
}

/// Generate an identifier of `IDENTIFIER_LEN` characters drawn uniformly
/// from `[A-Za-z0-9]`. No collision check happens here; the store's
/// uniqueness constraint catches duplicates.
pub fn generate_with<R: Rng>(rng: &mut R) -> ShareIdentifier {
    let token: String = rng
        .sample_iter(&Alphanumeric)
        .take(IDENTIFIER_LEN)
        .map(char::from)
        .collect();
    ShareIdentifier(token)
}
