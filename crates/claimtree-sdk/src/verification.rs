/*!
# Artifact Verification & Lookup

Read-only operations over a persisted claim artifact. Both replay the same
leaf encoding and commutative proof combine as generation, against the
artifact's stored root.

A claim that fails to verify is a normal, reportable result — one bad claim
never aborts the pass, so everything that does verify is still reported.
*/

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use claimtree_artifacts::{decode_digest, ArtifactResult, ClaimArtifact, ClaimEntry};
use claimtree_merkle::{encode_leaf, normalize_address, verify_proof, Digest};

/// Outcome of re-verifying one claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimVerification {
    pub address: String,
    pub index: usize,
    pub amount: String,
    pub verified: bool,
}

/// Non-fatal inconsistencies between an artifact's header and its claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactWarning {
    CountMismatch { declared: usize, actual: usize },
    TotalMismatch { declared: String, computed: String },
}

impl fmt::Display for ArtifactWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactWarning::CountMismatch { declared, actual } => write!(
                f,
                "artifact declares {declared} allocations but contains {actual} claims"
            ),
            ArtifactWarning::TotalMismatch { declared, computed } => write!(
                f,
                "artifact declares total_amount '{declared}' but claims sum to '{computed}'"
            ),
        }
    }
}

/// Aggregate result of a full artifact re-verification.
#[derive(Debug)]
pub struct VerificationReport {
    /// Per-claim outcomes, in original allocation order.
    pub results: Vec<ClaimVerification>,
    pub passed: usize,
    pub failed: usize,
    pub warnings: Vec<ArtifactWarning>,
}

impl VerificationReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Result of a single-address lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimLookup {
    /// The normalized address the claim is keyed by.
    pub address: String,
    pub claim: ClaimEntry,
    pub verified: bool,
}

/// Re-verify every claim in an artifact against its stored root.
///
/// Errors only when the artifact's root digest itself is malformed; every
/// per-claim problem (bad proof digest, mismatching replay) is reported as
/// a failed claim instead.
pub fn verify_artifact(artifact: &ClaimArtifact) -> ArtifactResult<VerificationReport> {
    let root = decode_digest(&artifact.root)?;

    let mut results: Vec<ClaimVerification> = artifact
        .claims
        .iter()
        .map(|(address, claim)| ClaimVerification {
            address: address.clone(),
            index: claim.index,
            amount: claim.amount.clone(),
            verified: claim_verifies(address, claim, root),
        })
        .collect();
    results.sort_by_key(|r| r.index);

    let passed = results.iter().filter(|r| r.verified).count();
    let failed = results.len() - passed;

    let mut warnings = Vec::new();
    if artifact.total_allocations != artifact.claims.len() {
        warnings.push(ArtifactWarning::CountMismatch {
            declared: artifact.total_allocations,
            actual: artifact.claims.len(),
        });
    }
    let computed: BigUint = artifact
        .claims
        .values()
        .filter_map(|claim| BigUint::from_str(&claim.amount).ok())
        .sum();
    if computed.to_string() != artifact.total_amount {
        warnings.push(ArtifactWarning::TotalMismatch {
            declared: artifact.total_amount.clone(),
            computed: computed.to_string(),
        });
    }

    Ok(VerificationReport {
        results,
        passed,
        failed,
        warnings,
    })
}

/// Find a claim by address (case-insensitive) and re-verify it.
///
/// `Ok(None)` is the distinct not-found condition.
pub fn lookup_claim(artifact: &ClaimArtifact, address: &str) -> ArtifactResult<Option<ClaimLookup>> {
    let root = decode_digest(&artifact.root)?;
    let normalized = normalize_address(address);

    Ok(artifact.claims.get(&normalized).map(|claim| ClaimLookup {
        verified: claim_verifies(&normalized, claim, root),
        address: normalized.clone(),
        claim: claim.clone(),
    }))
}

/// Replay one claim's proof from its re-encoded leaf.
fn claim_verifies(address: &str, claim: &ClaimEntry, root: Digest) -> bool {
    let leaf = match encode_leaf(address, &claim.amount) {
        Ok(leaf) => leaf,
        Err(_) => return false,
    };

    let mut proof = Vec::with_capacity(claim.proof.len());
    for sibling in &claim.proof {
        match decode_digest(sibling) {
            Ok(digest) => proof.push(digest),
            Err(_) => return false,
        }
    }

    verify_proof(leaf, &proof, root)
}
