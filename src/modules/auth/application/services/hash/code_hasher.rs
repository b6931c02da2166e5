use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a confirmation code. Only digests reach the database.
pub fn hash_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    format!("{:x}", hasher.finalize())
}
