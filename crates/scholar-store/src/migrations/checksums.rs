//! Migration checksums
//!
//! Each applied migration records a SHA256 digest of its forward SQL so a
//! later run can detect an edited script before touching the schema.

use sha2::{Digest, Sha256};

/// Compute the hex-encoded SHA256 checksum of a migration script
pub fn compute_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
