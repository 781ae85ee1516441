use crate::error::{CliError, CliResult};
use claimtree_artifacts::read_claim_artifact;
use claimtree_sdk::lookup_claim;
use std::path::PathBuf;

pub fn execute(artifact_path: PathBuf, address: String) -> CliResult<()> {
    println!("📖 Reading artifact: {}", artifact_path.display());
    let artifact = read_claim_artifact(&artifact_path)?;

    let found = lookup_claim(&artifact, &address)?
        .ok_or_else(|| CliError::AddressNotFound(address.trim().to_ascii_lowercase()))?;

    println!("🔍 Claim for {}", found.address);
    println!("   Index: {}", found.claim.index);
    println!("   Amount: {}", found.claim.amount);
    println!("   Proof ({} siblings):", found.claim.proof.len());
    for sibling in &found.claim.proof {
        println!("     {sibling}");
    }
    if let Some(metadata) = &found.claim.metadata {
        println!("   Metadata: {metadata}");
    }
    println!("   Verified: {}", found.verified);

    if found.verified {
        Ok(())
    } else {
        Err(CliError::InvalidClaimProof(found.address))
    }
}
