/*!
# Claimtree Merkle Engine

Commitment engine for allocation batches: canonical leaf encoding, tree
construction, proof extraction and proof verification. Every digest in the
system is SHA-256, and internal nodes combine their children in byte-sorted
order, so proofs carry sibling values only — no left/right positions.
*/

pub mod error;
pub mod hasher;
pub mod proof;
pub mod tree;

pub use error::{MerkleError, MerkleResult};
pub use hasher::{encode_leaf, normalize_address, LEAF_SEPARATOR};
pub use proof::{compute_root, verify_proof};
pub use tree::{hash_pair, AllocationTree};

/// Fixed digest width for leaves, internal nodes and roots.
pub type Digest = [u8; 32];
