/*!
# Artifact I/O

Single-shot reads and writes for allocation inputs and claim artifacts.
Reads reject structurally empty documents up front; writes serialize fully
in memory before the output file is created, so a failed run never leaves a
partially written artifact behind.
*/

use crate::{
    errors::{ArtifactError, ArtifactResult},
    schemas::{AllocationInput, ClaimArtifact},
};
use std::fs;
use std::path::Path;

/// Read and validate an allocation input document.
pub fn read_allocation_input<P: AsRef<Path>>(path: P) -> ArtifactResult<AllocationInput> {
    let contents = fs::read_to_string(path)?;
    let input: AllocationInput = serde_json::from_str(&contents)?;

    if input.allocations().is_empty() {
        return Err(ArtifactError::SchemaValidation(
            "Allocation input contains no entries".to_string(),
        ));
    }

    Ok(input)
}

/// Read a persisted claim artifact.
pub fn read_claim_artifact<P: AsRef<Path>>(path: P) -> ArtifactResult<ClaimArtifact> {
    let contents = fs::read_to_string(path)?;
    let artifact: ClaimArtifact = serde_json::from_str(&contents)?;

    if artifact.claims.is_empty() {
        return Err(ArtifactError::SchemaValidation(
            "Claim artifact contains no claims".to_string(),
        ));
    }

    Ok(artifact)
}

/// Write a claim artifact as pretty-printed JSON.
pub fn write_claim_artifact<P: AsRef<Path>>(path: P, artifact: &ClaimArtifact) -> ArtifactResult<()> {
    let json = serde_json::to_string_pretty(artifact)?;
    fs::write(path, json)?;
    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
