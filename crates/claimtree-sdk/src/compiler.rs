/*!
# Batch Pipeline

Core compilation logic: validate the allocation list, encode leaves, build
the tree, extract one proof per allocation, self-check every proof against
the computed root, and assemble the claim artifact.

The whole batch is rejected on the first validation failure — no partial
artifact is ever produced. A self-check failure is an internal defect
(builder or extractor bug), distinct from any input problem.
*/

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use num_bigint::BigUint;

use claimtree_artifacts::{
    encode_digest, AllocationEntry, AllocationInput, ClaimArtifact, ClaimEntry,
};
use claimtree_merkle::{
    encode_leaf, normalize_address, verify_proof, AllocationTree, Digest, MerkleError,
    LEAF_SEPARATOR,
};

/// Errors that can occur during claim compilation.
#[derive(Debug, thiserror::Error)]
pub enum CompilerError {
    #[error("record {index}: missing or empty {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index} ({address}): amount '{amount}' is not a non-negative integer")]
    InvalidAmount {
        index: usize,
        address: String,
        amount: String,
    },

    #[error("record {index} ({address}): {source}")]
    InvalidRecord {
        index: usize,
        address: String,
        source: MerkleError,
    },

    #[error("record {index}: address '{address}' duplicates record {first_index} (case-insensitive)")]
    DuplicateAddress {
        index: usize,
        first_index: usize,
        address: String,
    },

    #[error("merkle engine error: {0}")]
    Merkle(#[from] MerkleError),

    #[error("internal defect: proof self-check failed for record {index} ({address})")]
    SelfCheckFailed { index: usize, address: String },
}

pub type CompilerResult<T> = Result<T, CompilerError>;

/// Non-fatal findings surfaced alongside a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileWarning {
    /// The input's total-supply hint differs from the computed sum.
    SupplyMismatch { declared: String, computed: String },

    /// The total-supply hint is not a decimal integer and was ignored.
    UnparseableSupplyHint { declared: String },
}

impl fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileWarning::SupplyMismatch { declared, computed } => write!(
                f,
                "total_supply hint '{declared}' does not match computed total '{computed}'"
            ),
            CompileWarning::UnparseableSupplyHint { declared } => {
                write!(f, "total_supply hint '{declared}' is not a decimal integer; ignored")
            }
        }
    }
}

/// Result of a successful compilation run.
#[derive(Debug)]
pub struct CompiledBatch {
    pub artifact: ClaimArtifact,
    pub warnings: Vec<CompileWarning>,
}

/// A validated allocation, ready for leaf encoding.
struct ValidatedAllocation<'a> {
    index: usize,
    normalized_address: String,
    amount: BigUint,
    entry: &'a AllocationEntry,
}

/// Compile an allocation input into a claim artifact.
///
/// Pipeline: ValidateAllocations → EncodeLeaves → BuildTree → ExtractProofs
/// → SelfCheck → assemble. Order of the input is preserved as the implicit
/// leaf index; claims are keyed by normalized address.
pub fn compile_claims(input: &AllocationInput) -> CompilerResult<CompiledBatch> {
    // Step 1: validate every record before any hashing occurs.
    let validated = validate_allocations(input.allocations())?;

    // Step 2: encode leaves in input order.
    let leaves: Vec<Digest> = validated
        .iter()
        .map(|alloc| {
            encode_leaf(&alloc.normalized_address, &alloc.entry.amount).map_err(|source| {
                CompilerError::InvalidRecord {
                    index: alloc.index,
                    address: alloc.normalized_address.clone(),
                    source,
                }
            })
        })
        .collect::<CompilerResult<_>>()?;

    // Step 3: build the tree, retaining all levels.
    let tree = AllocationTree::from_leaves(leaves.clone())?;
    let root = tree.root();

    // Steps 4 + 5: extract and self-check one proof per allocation. A
    // failing self-check here means the builder or extractor is broken,
    // so the whole run aborts.
    let mut claims = BTreeMap::new();
    for alloc in &validated {
        let proof = tree.proof_for_leaf(alloc.index)?;

        if !verify_proof(leaves[alloc.index], &proof, root) {
            return Err(CompilerError::SelfCheckFailed {
                index: alloc.index,
                address: alloc.normalized_address.clone(),
            });
        }

        claims.insert(
            alloc.normalized_address.clone(),
            ClaimEntry {
                index: alloc.index,
                amount: alloc.entry.amount.clone(),
                proof: proof.iter().map(encode_digest).collect(),
                metadata: alloc.entry.metadata.clone(),
            },
        );
    }

    // Step 6: totals and the conservation cross-check.
    let total_amount: BigUint = validated.iter().map(|alloc| &alloc.amount).sum();
    let mut warnings = Vec::new();
    if let Some(declared) = input.total_supply() {
        match BigUint::from_str(declared) {
            Ok(hint) if hint == total_amount => {}
            Ok(_) => warnings.push(CompileWarning::SupplyMismatch {
                declared: declared.to_string(),
                computed: total_amount.to_string(),
            }),
            Err(_) => warnings.push(CompileWarning::UnparseableSupplyHint {
                declared: declared.to_string(),
            }),
        }
    }

    let artifact = ClaimArtifact {
        root: encode_digest(&root),
        total_allocations: validated.len(),
        total_amount: total_amount.to_string(),
        generated_at: Utc::now(),
        claims,
    };

    Ok(CompiledBatch { artifact, warnings })
}

/// Validate allocation records: required fields, decimal amounts,
/// separator collisions, and case-insensitive address uniqueness.
fn validate_allocations(entries: &[AllocationEntry]) -> CompilerResult<Vec<ValidatedAllocation<'_>>> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut validated = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let normalized_address = normalize_address(&entry.address);
        if normalized_address.is_empty() {
            return Err(CompilerError::MissingField {
                index,
                field: "address",
            });
        }
        if normalized_address.contains(LEAF_SEPARATOR) {
            return Err(CompilerError::InvalidRecord {
                index,
                address: normalized_address,
                source: MerkleError::SeparatorInAddress(entry.address.clone()),
            });
        }

        if entry.amount.is_empty() {
            return Err(CompilerError::MissingField {
                index,
                field: "amount",
            });
        }
        if !entry.amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CompilerError::InvalidAmount {
                index,
                address: normalized_address,
                amount: entry.amount.clone(),
            });
        }
        let amount =
            BigUint::from_str(&entry.amount).map_err(|_| CompilerError::InvalidAmount {
                index,
                address: normalized_address.clone(),
                amount: entry.amount.clone(),
            })?;

        if let Some(&first_index) = seen.get(&normalized_address) {
            return Err(CompilerError::DuplicateAddress {
                index,
                first_index,
                address: normalized_address,
            });
        }
        seen.insert(normalized_address.clone(), index);

        validated.push(ValidatedAllocation {
            index,
            normalized_address,
            amount,
            entry,
        });
    }

    Ok(validated)
}
