use crate::error::{CliError, CliResult};
use claimtree_artifacts::read_claim_artifact;
use claimtree_sdk::verify_artifact;
use std::path::PathBuf;

pub fn execute(artifact_path: PathBuf) -> CliResult<()> {
    println!("📖 Reading artifact: {}", artifact_path.display());
    let artifact = read_claim_artifact(&artifact_path)?;
    println!("   Root: {}", artifact.root);

    let report = verify_artifact(&artifact)?;

    // Every claim is reported, pass or fail, before the aggregate status.
    for result in &report.results {
        let mark = if result.verified { "✅" } else { "❌" };
        println!(
            "{mark} [{}] {} amount={}",
            result.index, result.address, result.amount
        );
    }

    for warning in &report.warnings {
        println!("⚠️  {warning}");
    }

    let total = report.results.len();
    println!("📊 {}/{} claims verified", report.passed, total);

    if report.all_passed() {
        Ok(())
    } else {
        Err(CliError::VerificationFailed {
            failed: report.failed,
            total,
        })
    }
}
