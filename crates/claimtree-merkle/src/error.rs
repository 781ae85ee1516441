use thiserror::Error;

pub type MerkleResult<T> = Result<T, MerkleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("cannot build a tree from an empty leaf list")]
    EmptyTree,

    #[error("leaf index {index} out of range for tree with {leaf_count} leaves")]
    IndexOutOfRange { index: usize, leaf_count: usize },

    #[error("address is empty after normalization")]
    EmptyAddress,

    #[error("amount is empty")]
    EmptyAmount,

    #[error("address '{0}' contains the leaf separator character")]
    SeparatorInAddress(String),

    #[error("amount '{0}' contains the leaf separator character")]
    SeparatorInAmount(String),
}
