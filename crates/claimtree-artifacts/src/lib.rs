/*!
# Claimtree Artifact Schemas

This crate provides the **authoritative JSON schemas** used throughout
claimtree.

## Purpose

Single source of truth for the data contracts between:

- **`generate`** (producer) → reads an allocation list, writes a claim artifact
- **`verify`** (consumer) → re-verifies every claim in an artifact
- **`lookup`** (consumer) → finds and re-verifies one address's claim

## Documents

### Allocation input
An ordered collection of allocation entries, each with `address` and `amount`
(decimal string) plus optional free-form `metadata`. Accepted either as a
bare JSON array or as an object with an optional `total_supply` hint:

```json
{ "total_supply": "600", "allocations": [ { "address": "0xAAA", "amount": "100" } ] }
```

### Claim artifact
The persisted output: `root` (0x-prefixed hex digest), `total_allocations`,
`total_amount`, `generated_at`, and a map from normalized address to
`{index, amount, proof, metadata}`. This is the only shape the verify and
lookup operations consume.
*/

pub mod errors;
pub mod schemas;
pub mod validation;

pub use errors::{ArtifactError, ArtifactResult};
pub use schemas::{
    decode_digest, encode_digest, AllocationEntry, AllocationInput, ClaimArtifact, ClaimEntry,
    DIGEST_PREFIX,
};
pub use validation::{read_allocation_input, read_claim_artifact, write_claim_artifact};
