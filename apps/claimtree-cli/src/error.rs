use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Artifact error: {0}")]
    Artifact(#[from] claimtree_artifacts::ArtifactError),

    #[error("Generation failed: {0}")]
    Compiler(#[from] claimtree_sdk::CompilerError),

    #[error("{failed} of {total} claims failed verification")]
    VerificationFailed { failed: usize, total: usize },

    #[error("address '{0}' not found in artifact")]
    AddressNotFound(String),

    #[error("claim for '{0}' does not verify against the artifact root")]
    InvalidClaimProof(String),
}
