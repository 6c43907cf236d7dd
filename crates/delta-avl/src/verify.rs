//! Structural checks for tests and debugging. Nothing here runs on the
//! insertion path.

use thiserror::Error;

use crate::link::{get_l, get_p, get_r};
use crate::traverse::{first, in_order, next};
use crate::types::{DeltaNode, Node};

/// First broken invariant found by [`assert_valid`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root {0} has a parent")]
    RootHasParent(u32),
    #[error("node {child} is linked under {parent} but points at {actual:?}")]
    BrokenParentLink {
        parent: u32,
        child: u32,
        actual: Option<u32>,
    },
    #[error("node {0} is reachable twice")]
    Cycle(u32),
    #[error("node {node} stores delta {stored}, subtree heights give {actual}")]
    DeltaMismatch { node: u32, stored: i32, actual: i32 },
    #[error("node {node} is out of balance by {delta}")]
    Unbalanced { node: u32, delta: i32 },
    #[error("node {0} is ordered before a smaller key")]
    OrderViolated(u32),
}

/// Number of levels under `root`; zero for an empty tree.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    match root {
        None => 0,
        Some(i) => 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i))),
    }
}

/// `true` if every node's subtree heights differ by at most one.
///
/// Recomputes heights and ignores the stored deltas.
pub fn is_avl<N: Node>(arena: &[N], root: Option<u32>) -> bool {
    fn balanced_height<N: Node>(arena: &[N], node: Option<u32>) -> Option<usize> {
        let Some(i) = node else {
            return Some(0);
        };
        let lh = balanced_height(arena, get_l(arena, i))?;
        let rh = balanced_height(arena, get_r(arena, i))?;
        (lh.abs_diff(rh) <= 1).then(|| 1 + lh.max(rh))
    }
    balanced_height(arena, root).is_some()
}

/// `true` if the in-order keys equal `keys` sorted by `comparator`.
pub fn is_bst<K, N, C>(arena: &[N], root: Option<u32>, keys: &[K], comparator: &C) -> bool
where
    K: Clone + PartialEq,
    N: DeltaNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut sorted = keys.to_vec();
    sorted.sort_by(|a, b| comparator(a, b).cmp(&0));
    in_order(arena, root) == sorted
}

/// Checks linkage, delta consistency, balance and key order in one pass.
///
/// Equal keys may end up on either side of each other after rotations, so
/// order is checked as a non-decreasing in-order sequence.
pub fn assert_valid<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), InvariantError>
where
    N: DeltaNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };
    if get_p(arena, root).is_some() {
        return Err(InvariantError::RootHasParent(root));
    }

    fn check<K, N: DeltaNode<K>>(arena: &[N], node: u32, seen: &mut [bool]) -> Result<usize, InvariantError> {
        seen[node as usize] = true;

        let mut heights = [0usize; 2];
        for (h, child) in heights.iter_mut().zip([get_l(arena, node), get_r(arena, node)]) {
            let Some(c) = child else {
                continue;
            };
            if seen[c as usize] {
                return Err(InvariantError::Cycle(c));
            }
            let actual = get_p(arena, c);
            if actual != Some(node) {
                return Err(InvariantError::BrokenParentLink {
                    parent: node,
                    child: c,
                    actual,
                });
            }
            *h = check::<K, N>(arena, c, seen)?;
        }

        let [lh, rh] = heights;
        let actual = rh as i32 - lh as i32;
        let stored = arena[node as usize].delta();
        if stored != actual {
            return Err(InvariantError::DeltaMismatch { node, stored, actual });
        }
        if !(-1..=1).contains(&actual) {
            return Err(InvariantError::Unbalanced { node, delta: actual });
        }
        Ok(1 + lh.max(rh))
    }

    let mut seen = vec![false; arena.len()];
    check::<K, N>(arena, root, &mut seen)?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) > 0 {
                return Err(InvariantError::OrderViolated(prev));
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::{set_children, set_left, set_right};
    use crate::node::AvlNode;
    use crate::types::default_comparator;

    fn cmp(a: &i32, b: &i32) -> i32 {
        default_comparator(a, b)
    }

    //     1
    //    / \
    //   0   2
    fn balanced() -> Vec<AvlNode<i32>> {
        let mut arena: Vec<_> = (0..3).map(AvlNode::new).collect();
        set_children(&mut arena, 1, Some(0), Some(2));
        arena
    }

    #[test]
    fn accepts_balanced_tree() {
        let arena = balanced();
        assert_eq!(height(&arena, Some(1)), 2);
        assert!(is_avl(&arena, Some(1)));
        assert!(is_bst(&arena, Some(1), &[2, 0, 1], &cmp));
        assert_eq!(assert_valid(&arena, Some(1), &cmp), Ok(()));
    }

    #[test]
    fn empty_tree_is_valid() {
        let arena: Vec<AvlNode<i32>> = Vec::new();
        assert_eq!(height(&arena, None), 0);
        assert!(is_avl(&arena, None));
        assert!(is_bst(&arena, None, &[], &cmp));
        assert_eq!(assert_valid(&arena, None, &cmp), Ok(()));
    }

    #[test]
    fn reports_stale_delta() {
        let mut arena = balanced();
        arena[1].delta = 1;
        assert_eq!(
            assert_valid(&arena, Some(1), &cmp),
            Err(InvariantError::DeltaMismatch {
                node: 1,
                stored: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn reports_chain_as_unbalanced() {
        let mut arena: Vec<_> = (0..3).map(AvlNode::new).collect();
        set_right(&mut arena, 0, Some(1));
        set_right(&mut arena, 1, Some(2));
        arena[0].delta = 2;
        arena[1].delta = 1;
        assert!(!is_avl(&arena, Some(0)));
        assert_eq!(height(&arena, Some(0)), 3);
        assert_eq!(
            assert_valid(&arena, Some(0), &cmp),
            Err(InvariantError::Unbalanced { node: 0, delta: 2 })
        );
    }

    #[test]
    fn reports_broken_parent_link() {
        let mut arena = balanced();
        arena[2].p = None;
        assert_eq!(
            assert_valid(&arena, Some(1), &cmp),
            Err(InvariantError::BrokenParentLink {
                parent: 1,
                child: 2,
                actual: None
            })
        );
    }

    #[test]
    fn reports_root_with_parent() {
        let mut arena = balanced();
        arena[1].p = Some(0);
        assert_eq!(
            assert_valid(&arena, Some(1), &cmp),
            Err(InvariantError::RootHasParent(1))
        );
    }

    #[test]
    fn reports_cycle() {
        let mut arena = balanced();
        set_left(&mut arena, 0, Some(1));
        arena[1].p = None;
        assert_eq!(assert_valid(&arena, Some(1), &cmp), Err(InvariantError::Cycle(1)));
    }

    #[test]
    fn reports_misordered_keys() {
        let mut arena = balanced();
        arena[0].key = 2;
        arena[2].key = 0;
        assert!(!is_bst(&arena, Some(1), &[0, 1, 2], &cmp));
        assert_eq!(
            assert_valid(&arena, Some(1), &cmp),
            Err(InvariantError::OrderViolated(0))
        );
    }
}
