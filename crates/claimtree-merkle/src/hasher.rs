use sha2::{Digest as _, Sha256};

use crate::error::{MerkleError, MerkleResult};
use crate::Digest;

/// Byte joining the normalized address and the amount inside a leaf
/// preimage. Neither field may contain it, otherwise two distinct
/// allocations could encode to the same byte sequence.
pub const LEAF_SEPARATOR: char = ':';

/// Canonical form of an allocation address: trimmed, ASCII-lowercased.
///
/// Addresses are opaque identifiers; `0xABC` and `0xabc` must map to the
/// same leaf, so every path into the engine (encoding, artifact keys,
/// lookup) normalizes through this function.
pub fn normalize_address(address: &str) -> String {
    address.trim().to_ascii_lowercase()
}

/// Encodes one allocation into its leaf digest.
///
/// The preimage is `normalized_address || ':' || amount`, hashed with
/// SHA-256 — the same function used for internal nodes and the root, so
/// the tree is homogeneous. Pure; fails only on malformed input.
pub fn encode_leaf(address: &str, amount: &str) -> MerkleResult<Digest> {
    let normalized = normalize_address(address);
    if normalized.is_empty() {
        return Err(MerkleError::EmptyAddress);
    }
    if normalized.contains(LEAF_SEPARATOR) {
        return Err(MerkleError::SeparatorInAddress(normalized));
    }
    if amount.is_empty() {
        return Err(MerkleError::EmptyAmount);
    }
    if amount.contains(LEAF_SEPARATOR) {
        return Err(MerkleError::SeparatorInAmount(amount.to_string()));
    }

    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    hasher.update([LEAF_SEPARATOR as u8]);
    hasher.update(amount.as_bytes());
    Ok(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_inputs_produce_identical_leaves() {
        let a = encode_leaf("0xAAA", "100").unwrap();
        let b = encode_leaf("0xAAA", "100").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_address_is_case_insensitive() {
        let upper = encode_leaf("0xABC", "42").unwrap();
        let lower = encode_leaf("0xabc", "42").unwrap();
        let mixed = encode_leaf("  0xAbC ", "42").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_distinct_allocations_produce_distinct_leaves() {
        let a = encode_leaf("0xaaa", "100").unwrap();
        let b = encode_leaf("0xaaa", "200").unwrap();
        let c = encode_leaf("0xbbb", "100").unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_separator_keeps_fields_unambiguous() {
        // Without the separator these two would share the preimage "0xa1100".
        let a = encode_leaf("0xa1", "100").unwrap();
        let b = encode_leaf("0xa11", "00").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_separator_in_either_field() {
        assert_eq!(
            encode_leaf("0xa:b", "100"),
            Err(MerkleError::SeparatorInAddress("0xa:b".to_string()))
        );
        assert_eq!(
            encode_leaf("0xabc", "1:0"),
            Err(MerkleError::SeparatorInAmount("1:0".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_fields() {
        assert_eq!(encode_leaf("   ", "100"), Err(MerkleError::EmptyAddress));
        assert_eq!(encode_leaf("0xabc", ""), Err(MerkleError::EmptyAmount));
    }

    #[test]
    fn test_known_digest() {
        // SHA256("0xaaa:100"), pinned so the encoding can never drift
        // without a test catching it.
        let leaf = encode_leaf("0xAAA", "100").unwrap();
        let expected = {
            let mut hasher = Sha256::new();
            hasher.update(b"0xaaa:100");
            let out: Digest = hasher.finalize().into();
            out
        };
        assert_eq!(leaf, expected);
    }
}
