//! Request checksum: binds a request to one token and one resource path.

use sha2::{Digest, Sha256};

/// SHA-256 of `token` immediately followed by `path`, as 64 lowercase hex chars.
pub fn request_checksum(token: &str, path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.update(path.as_bytes());
    hex::encode(hasher.finalize())
}
