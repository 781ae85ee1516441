use crate::tree::hash_pair;
use crate::Digest;

/// Replays a proof from a leaf digest, returning the digest it folds to.
///
/// Each step combines the running digest with the next sibling using the
/// same sorted pair hash as tree construction, so no position bookkeeping
/// is needed. Useful for reporting what root a bad proof reconstructs.
pub fn compute_root(leaf: Digest, proof: &[Digest]) -> Digest {
    proof
        .iter()
        .fold(leaf, |current, sibling| hash_pair(&current, sibling))
}

/// Checks a proof against a claimed root.
///
/// A mismatch is a normal `false`, never an error: stale or malicious
/// proofs must not crash the verifier. Used both for generation-time
/// self-checks and for standalone artifact verification.
pub fn verify_proof(leaf: Digest, proof: &[Digest], root: Digest) -> bool {
    compute_root(leaf, proof) == root
}
