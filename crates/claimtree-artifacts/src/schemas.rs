/*!
# Artifact Schema Definitions

Authoritative JSON shapes for allocation inputs and claim artifacts, plus
the digest text-encoding helpers shared by every consumer.
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::errors::{ArtifactError, ArtifactResult};

/// Fixed prefix convention for hex-encoded digests in artifacts.
pub const DIGEST_PREFIX: &str = "0x";

// ================================================================================================
// Allocation Input Schema
// ================================================================================================

/// One allocation record as supplied by the input document.
///
/// `address` and `amount` default to empty strings so a missing field
/// surfaces as a per-record validation error with an index, rather than a
/// parse failure for the whole document. `metadata` is carried through
/// unchanged and never participates in hashing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationEntry {
    /// Opaque recipient identifier; case-insensitive canonical form.
    #[serde(default)]
    pub address: String,

    /// Non-negative integer amount as a decimal string.
    #[serde(default)]
    pub amount: String,

    /// Free-form annotation (e.g. attribution tags), not hashed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// The allocation input document, in either accepted shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AllocationInput {
    /// Object form, optionally carrying a total-supply hint used only for
    /// a conservation cross-check.
    Document {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total_supply: Option<String>,
        allocations: Vec<AllocationEntry>,
    },

    /// Bare array form.
    Entries(Vec<AllocationEntry>),
}

impl AllocationInput {
    pub fn allocations(&self) -> &[AllocationEntry] {
        match self {
            AllocationInput::Document { allocations, .. } => allocations,
            AllocationInput::Entries(entries) => entries,
        }
    }

    pub fn total_supply(&self) -> Option<&str> {
        match self {
            AllocationInput::Document { total_supply, .. } => total_supply.as_deref(),
            AllocationInput::Entries(_) => None,
        }
    }
}

// ================================================================================================
// Claim Artifact Schema
// ================================================================================================

/// One recipient's claim inside a persisted artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimEntry {
    /// Position of this allocation in the original input order.
    pub index: usize,

    /// Amount exactly as validated from the input.
    pub amount: String,

    /// Sibling digests in leaf-to-root order, hex with `0x` prefix.
    pub proof: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// The persisted/previewed output of a generation run.
///
/// Claims are keyed by normalized (lowercase) address; `BTreeMap` keeps the
/// serialized artifact byte-stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimArtifact {
    /// Hex-encoded root digest with `0x` prefix.
    pub root: String,

    pub total_allocations: usize,

    /// Exact sum of all claim amounts (arbitrary precision, decimal).
    pub total_amount: String,

    pub generated_at: DateTime<Utc>,

    pub claims: BTreeMap<String, ClaimEntry>,
}

// ================================================================================================
// Digest Text Encoding
// ================================================================================================

/// Encodes a digest as lowercase hex with the `0x` prefix.
pub fn encode_digest(digest: &[u8; 32]) -> String {
    format!("{}{}", DIGEST_PREFIX, hex::encode(digest))
}

/// Decodes a hex digest string; the `0x` prefix is accepted but optional.
pub fn decode_digest(value: &str) -> ArtifactResult<[u8; 32]> {
    let stripped = value.strip_prefix(DIGEST_PREFIX).unwrap_or(value);
    let bytes = hex::decode(stripped).map_err(|e| ArtifactError::InvalidDigest {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    let digest: [u8; 32] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| ArtifactError::InvalidDigest {
            value: value.to_string(),
            reason: format!("expected 32 bytes, got {}", bytes.len()),
        })?;
    Ok(digest)
}

// ================================================================================================
// Tests
// ================================================================================================
