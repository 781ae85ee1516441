/*!
# Claimtree SDK

Batch pipeline turning a validated allocation list into a claim artifact
(`compiler`), and the read-only operations that consume a persisted
artifact (`verification`): full re-verification and single-address lookup.
*/

pub mod compiler;
pub mod verification;

pub use compiler::{
    compile_claims, CompileWarning, CompiledBatch, CompilerError, CompilerResult,
};
pub use verification::{
    lookup_claim, verify_artifact, ArtifactWarning, ClaimLookup, ClaimVerification,
    VerificationReport,
};
