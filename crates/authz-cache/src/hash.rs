//! Content hashing for cache validity

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of raw policy bytes.
///
/// Cache validity is a whole-document equality check: any byte change
/// produces a different hash and forces recompilation. Both sides of the
/// validity comparison hash the original policy bytes, never the cache
/// file's own content.
pub fn content_hash(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // SHA-256 of the empty input
        assert_eq!(
            content_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(content_hash(b"roles: {}"), content_hash(b"roles: {}"));
    }

    #[test]
    fn test_single_byte_change_changes_hash() {
        assert_ne!(content_hash(b"roles: {}"), content_hash(b"roles: {}\n"));
    }
}
