use crate::config::RunMode;
use crate::error::CliResult;
use claimtree_artifacts::{read_allocation_input, write_claim_artifact};
use claimtree_sdk::compile_claims;
use std::path::PathBuf;

/// How many claims the preview output shows.
const PREVIEW_CLAIMS: usize = 3;

pub fn execute(input: PathBuf, output: PathBuf, mode: RunMode) -> CliResult<()> {
    println!("📖 Reading allocations: {}", input.display());
    let allocations = read_allocation_input(&input)?;
    println!("✅ Found {} allocations", allocations.allocations().len());

    println!("🌳 Building claim tree...");
    let batch = compile_claims(&allocations)?;
    let artifact = &batch.artifact;

    for warning in &batch.warnings {
        println!("⚠️  {warning}");
    }

    println!("✅ All proofs self-checked against the root");
    println!("   Root: {}", artifact.root);
    println!("   Allocations: {}", artifact.total_allocations);
    println!("   Total amount: {}", artifact.total_amount);

    let mut preview: Vec<_> = artifact.claims.iter().collect();
    preview.sort_by_key(|(_, claim)| claim.index);
    for (address, claim) in preview.iter().take(PREVIEW_CLAIMS) {
        println!(
            "   [{}] {} amount={} proof_len={}",
            claim.index,
            address,
            claim.amount,
            claim.proof.len()
        );
    }
    if artifact.claims.len() > PREVIEW_CLAIMS {
        println!("   ... {} more claims", artifact.claims.len() - PREVIEW_CLAIMS);
    }

    match mode {
        RunMode::Preview => {
            println!(
                "🔒 Preview only — pass --persist (or set CLAIMTREE_PERSIST=1) to write {}",
                output.display()
            );
        }
        RunMode::Persist => {
            write_claim_artifact(&output, artifact)?;
            println!("💾 Artifact written: {}", output.display());
        }
    }

    Ok(())
}
