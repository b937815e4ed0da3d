//! Deterministic short code derivation.
//!
//! A short code is the first [`SHORT_CODE_LEN`] lowercase hex characters of
//! the SHA-1 digest of the long URL. Distinct URLs can collide; collisions are
//! not resolved here and surface as [`crate::domain::repositories::StoreError::AlreadyExists`]
//! when the second URL is stored.

use sha1::{Digest, Sha1};

/// Number of hex characters kept from the digest.
pub const SHORT_CODE_LEN: usize = 10;

/// Derives the short code for `long_url`.
///
/// # Examples
///
/// ```
/// use sha_shortener::domain::short_code::short_code_for;
///
/// assert_eq!(short_code_for("http://example.com"), "89dce6a446");
/// ```
pub fn short_code_for(long_url: &str) -> String {
    let digest = Sha1::digest(long_url.as_bytes());
    let mut code = hex::encode(digest);
    code.truncate(SHORT_CODE_LEN);
    code
}
