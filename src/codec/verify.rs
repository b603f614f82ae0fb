//! Digest verification
//!
//! Recomputes a digest from a supplied password and stored salt and compares
//! it to the stored digest in constant time.

use crate::codec::derive::{DigestParams, derive_digest};

/// Checks a password against a stored salt and digest.
///
/// Returns `false` on any mismatch, including a malformed salt or digest;
/// a failed check is never an error. The comparison time does not depend on
/// where the digests first differ.
pub fn verify(password: &str, salt: &str, expected_digest: &str, params: &DigestParams) -> bool {
    let computed = match derive_digest(password, salt, params) {
        Ok(digest) => digest,
        // An underivable salt reads as a plain mismatch
        Err(_) => return false,
    };

    constant_time_eq(computed.as_bytes(), expected_digest.as_bytes())
}

/// Constant-time byte comparison to prevent timing side-channels.
///
/// Digest length is public, so the early length check leaks nothing.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::test_params;

    #[test]
    fn test_verify_accepts_matching_password() {
        let params = test_params();
        let digest = derive_digest("secret", "abcdefghijklmnop", &params).unwrap();
        assert!(verify("secret", "abcdefghijklmnop", &digest, &params));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let params = test_params();
        let digest = derive_digest("secret", "abcdefghijklmnop", &params).unwrap();
        assert!(!verify("wrong", "abcdefghijklmnop", &digest, &params));
    }

    #[test]
    fn test_verify_rejects_wrong_salt() {
        let params = test_params();
        let digest = derive_digest("secret", "abcdefghijklmnop", &params).unwrap();
        assert!(!verify("secret", "ponmlkjihgfedcba", &digest, &params));
    }

    #[test]
    fn test_verify_rejects_malformed_digest() {
        let params = test_params();
        assert!(!verify("secret", "abcdefghijklmnop", "not-hex", &params));
        assert!(!verify("secret", "abcdefghijklmnop", "", &params));
    }

    #[test]
    fn test_verify_rejects_malformed_salt_without_panicking() {
        let params = test_params();
        let digest = derive_digest("secret", "abcdefghijklmnop", &params).unwrap();
        assert!(!verify("secret", "", &digest, &params));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"short", b"longer"));
        assert!(constant_time_eq(b"", b""));
    }
}
