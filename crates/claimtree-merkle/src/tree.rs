use sha2::{Digest as _, Sha256};

use crate::error::{MerkleError, MerkleResult};
use crate::Digest;

/// Combines two digests into their parent digest.
///
/// The pair is hashed in byte-wise sorted order, which makes the combine
/// commutative: a verifier only needs the sibling value, never its side.
pub fn hash_pair(a: &Digest, b: &Digest) -> Digest {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Sha256::new();
    hasher.update(lo);
    hasher.update(hi);
    hasher.finalize().into()
}

/// A binary hash tree over an ordered sequence of allocation leaf digests.
///
/// Every level is retained so proofs can be extracted after construction.
/// Level 0 is the input leaves; the last level holds exactly the root.
///
/// ## Pairing rule
///
/// - A full pair hashes to `hash_pair(left, right)` (sorted, commutative).
/// - A lone trailing node is promoted to the next level unchanged. It is
///   never paired with itself: a self-paired duplicate would be a
///   structurally distinct node indistinguishable from a genuine pair.
pub struct AllocationTree {
    levels: Vec<Vec<Digest>>,
}

impl AllocationTree {
    /// Builds the tree from leaf digests, retaining every level.
    ///
    /// A single leaf is already a terminal level: the leaf is the root.
    pub fn from_leaves(leaves: Vec<Digest>) -> MerkleResult<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyTree);
        }

        let mut levels = vec![leaves];
        while levels.last().expect("levels is non-empty").len() > 1 {
            let current = levels.last().expect("levels is non-empty");
            let mut next = Vec::with_capacity(current.len().div_ceil(2));

            for pair in current.chunks(2) {
                match pair {
                    [left, right] => next.push(hash_pair(left, right)),
                    [lone] => next.push(*lone),
                    _ => unreachable!("chunks(2) yields one or two items"),
                }
            }

            levels.push(next);
        }

        Ok(Self { levels })
    }

    /// The single digest committing to the entire leaf set.
    pub fn root(&self) -> Digest {
        self.levels.last().expect("terminal level exists")[0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of combine levels between a leaf and the root.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// All retained levels, leaves first, root level last.
    pub fn levels(&self) -> &[Vec<Digest>] {
        &self.levels
    }

    /// Extracts the minimal sibling sequence for the leaf at `index`,
    /// in leaf-to-root order.
    ///
    /// At each level the sibling index is `index ^ 1`; when that index is
    /// out of bounds the node was promoted and contributes no sibling.
    pub fn proof_for_leaf(&self, index: usize) -> MerkleResult<Vec<Digest>> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }

        let mut proof = Vec::new();
        let mut index = index;

        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = index ^ 1;
            if sibling < level.len() {
                proof.push(level[sibling]);
            }
            index /= 2;
        }

        Ok(proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::encode_leaf;
    use crate::proof::verify_proof;

    fn leaves(n: usize) -> Vec<Digest> {
        (0..n)
            .map(|i| encode_leaf(&format!("0x{i:040x}"), &(i as u64 * 10 + 1).to_string()).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_leaves_rejected() {
        assert!(matches!(
            AllocationTree::from_leaves(vec![]),
            Err(MerkleError::EmptyTree)
        ));
    }

    #[test]
    fn test_single_leaf_is_root() {
        let l = leaves(1);
        let tree = AllocationTree::from_leaves(l.clone()).unwrap();
        assert_eq!(tree.root(), l[0]);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.leaf_count(), 1);
        assert!(tree.proof_for_leaf(0).unwrap().is_empty());
    }

    #[test]
    fn test_level_lengths_halve_with_ceiling() {
        let tree = AllocationTree::from_leaves(leaves(11)).unwrap();
        let lengths: Vec<usize> = tree.levels().iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![11, 6, 3, 2, 1]);
    }

    #[test]
    fn test_three_leaves_promote_the_odd_node() {
        let l = leaves(3);
        let tree = AllocationTree::from_leaves(l.clone()).unwrap();

        // Level 1 is the pair hash plus the third leaf promoted unchanged.
        assert_eq!(tree.levels()[1].len(), 2);
        assert_eq!(tree.levels()[1][0], hash_pair(&l[0], &l[1]));
        assert_eq!(tree.levels()[1][1], l[2]);
        assert_eq!(tree.root(), hash_pair(&hash_pair(&l[0], &l[1]), &l[2]));

        // The promoted leaf has no sibling contribution at level 0.
        let proof = tree.proof_for_leaf(2).unwrap();
        assert_eq!(proof, vec![hash_pair(&l[0], &l[1])]);
    }

    #[test]
    fn test_promotion_is_not_self_pairing() {
        let l = leaves(3);
        let promoted = AllocationTree::from_leaves(l.clone()).unwrap();

        let self_paired_level1 = vec![hash_pair(&l[0], &l[1]), hash_pair(&l[2], &l[2])];
        let self_paired_root = hash_pair(&self_paired_level1[0], &self_paired_level1[1]);
        assert_ne!(promoted.root(), self_paired_root);
    }

    #[test]
    fn test_combine_is_commutative() {
        let l = leaves(2);
        assert_eq!(hash_pair(&l[0], &l[1]), hash_pair(&l[1], &l[0]));
    }

    #[test]
    fn test_every_leaf_proof_verifies() {
        for n in 1..=17 {
            let l = leaves(n);
            let tree = AllocationTree::from_leaves(l.clone()).unwrap();
            let root = tree.root();
            for (i, leaf) in l.iter().enumerate() {
                let proof = tree.proof_for_leaf(i).unwrap();
                assert!(
                    verify_proof(*leaf, &proof, root),
                    "proof failed for leaf {i} of {n}"
                );
            }
        }
    }

    #[test]
    fn test_deterministic_construction() {
        let l = leaves(7);
        let t1 = AllocationTree::from_leaves(l.clone()).unwrap();
        let t2 = AllocationTree::from_leaves(l.clone()).unwrap();
        assert_eq!(t1.root(), t2.root());
        for i in 0..l.len() {
            assert_eq!(t1.proof_for_leaf(i).unwrap(), t2.proof_for_leaf(i).unwrap());
        }
    }

    #[test]
    fn test_index_out_of_range() {
        let tree = AllocationTree::from_leaves(leaves(4)).unwrap();
        assert_eq!(
            tree.proof_for_leaf(4),
            Err(MerkleError::IndexOutOfRange {
                index: 4,
                leaf_count: 4
            })
        );
    }

    #[test]
    fn test_order_matters_for_the_root() {
        let mut l = leaves(4);
        let forward = AllocationTree::from_leaves(l.clone()).unwrap().root();
        l.swap(0, 2);
        let shuffled = AllocationTree::from_leaves(l).unwrap().root();
        // Sibling order within a pair is free; leaf order across pairs is not.
        assert_ne!(forward, shuffled);
    }
}
